//! Error types for the prefetch CLI

use std::fmt;

/// Errors surfaced by the prefetch binary.
#[derive(Debug)]
pub enum PrefetchError {
    /// Configuration error
    Config(String),
    /// Cache store error
    Cache(file_thumb_cache::CacheError),
    /// Loader error
    Loader(thumb_loader::LoaderError),
    /// Record serialization error
    Output(serde_json::Error),
}

impl fmt::Display for PrefetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefetchError::Config(msg) => write!(f, "Configuration error: {}", msg),
            PrefetchError::Cache(e) => write!(f, "Cache error: {}", e),
            PrefetchError::Loader(e) => write!(f, "Loader error: {}", e),
            PrefetchError::Output(e) => write!(f, "Output serialization error: {}", e),
        }
    }
}

impl std::error::Error for PrefetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PrefetchError::Config(_) => None,
            PrefetchError::Cache(e) => Some(e),
            PrefetchError::Loader(e) => Some(e),
            PrefetchError::Output(e) => Some(e),
        }
    }
}

impl From<file_thumb_cache::CacheError> for PrefetchError {
    fn from(err: file_thumb_cache::CacheError) -> Self {
        PrefetchError::Cache(err)
    }
}

impl From<thumb_loader::LoaderError> for PrefetchError {
    fn from(err: thumb_loader::LoaderError) -> Self {
        PrefetchError::Loader(err)
    }
}

impl From<serde_json::Error> for PrefetchError {
    fn from(err: serde_json::Error) -> Self {
        PrefetchError::Output(err)
    }
}

impl From<tracing_subscriber::filter::ParseError> for PrefetchError {
    fn from(err: tracing_subscriber::filter::ParseError) -> Self {
        PrefetchError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PrefetchError>;
