//! Error types for the file-backed thumbnail cache

use std::fmt;

#[derive(Debug)]
pub enum CacheError {
    /// The platform reports no usable cache directory.
    NoCacheDir,
    /// A source URL could not be parsed, so no filename can be derived.
    InvalidUrl(url::ParseError),
    Io(Box<std::io::Error>),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::NoCacheDir => write!(f, "Platform cache directory unavailable"),
            CacheError::InvalidUrl(err) => write!(f, "Invalid source URL: {}", err),
            CacheError::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for CacheError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CacheError::InvalidUrl(err) => Some(err),
            CacheError::Io(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CacheError {
    fn from(err: std::io::Error) -> Self {
        CacheError::Io(Box::new(err))
    }
}

impl From<url::ParseError> for CacheError {
    fn from(err: url::ParseError) -> Self {
        CacheError::InvalidUrl(err)
    }
}

pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_cache_dir_display() {
        let err = CacheError::NoCacheDir;
        assert_eq!(format!("{}", err), "Platform cache directory unavailable");
    }

    #[test]
    fn test_invalid_url_display() {
        let err = CacheError::from(url::Url::parse("not a url").unwrap_err());
        assert!(format!("{}", err).starts_with("Invalid source URL:"));
    }

    #[test]
    fn test_io_display() {
        let err = CacheError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert!(format!("{}", err).contains("denied"));
    }

    #[test]
    fn test_error_is_debug() {
        let err = CacheError::NoCacheDir;
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("NoCacheDir"));
    }
}
