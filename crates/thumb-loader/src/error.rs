//! Error types for thumbnail loading

use std::fmt;

use file_thumb_cache::CacheError;

use crate::loader::ThumbRecord;

/// Errors that terminate a load call early.
#[derive(Debug)]
pub enum LoaderError {
    /// `details` was non-empty but not parallel to `urls`.
    InvalidInput { urls: usize, details: usize },
    /// Filename derivation or a cache write failed mid-pass. Carries the
    /// records that were resolved before the failure.
    Storage {
        source: CacheError,
        partial: Vec<ThumbRecord>,
    },
    /// The pass was cancelled between items.
    Cancelled,
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderError::InvalidInput { urls, details } => {
                write!(
                    f,
                    "Mismatching count in urls ({}) and details ({})",
                    urls, details
                )
            }
            LoaderError::Storage { source, partial } => {
                write!(
                    f,
                    "Storage failure after {} resolved records: {}",
                    partial.len(),
                    source
                )
            }
            LoaderError::Cancelled => write!(f, "Load pass cancelled"),
        }
    }
}

impl std::error::Error for LoaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoaderError::Storage { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LoaderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = LoaderError::InvalidInput {
            urls: 3,
            details: 2,
        };
        assert_eq!(
            err.to_string(),
            "Mismatching count in urls (3) and details (2)"
        );
    }

    #[test]
    fn test_storage_display_includes_resolved_count() {
        let err = LoaderError::Storage {
            source: CacheError::NoCacheDir,
            partial: Vec::new(),
        };
        let msg = err.to_string();
        assert!(msg.contains("after 0 resolved records"));
        assert!(msg.contains("Platform cache directory unavailable"));
    }

    #[test]
    fn test_storage_source_is_exposed() {
        let err = LoaderError::Storage {
            source: CacheError::NoCacheDir,
            partial: Vec::new(),
        };
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_cancelled_display() {
        assert_eq!(LoaderError::Cancelled.to_string(), "Load pass cancelled");
    }
}
