//! Cache filename derivation
//!
//! Maps a source URL to a deterministic, filesystem-safe filename: the
//! canonical URL string is base64-encoded with the URL-safe unpadded
//! alphabet, then a fixed number of trailing characters is stripped to keep
//! names short. Same URL in, same filename out; there is no decode path.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use url::Url;

use crate::error::Result;

/// Trailing characters stripped from the encoded filename by default.
pub const DEFAULT_SKIP_TRAILING: usize = 15;

/// Derive the cache filename for a source URL.
///
/// Fails only when the URL cannot be parsed. Truncation is clamped: a very
/// short URL yields a short (possibly empty) filename rather than an error.
pub fn cache_filename(source_url: &str, skip_trailing: usize) -> Result<String> {
    let canonical = Url::parse(source_url)?;
    let encoded = URL_SAFE_NO_PAD.encode(canonical.as_str().as_bytes());
    let keep = encoded.len().saturating_sub(skip_trailing);
    Ok(encoded[..keep].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const THUMB_URL: &str = "https://i.ytimg.com/vi/7C2z4GqqS5E/default.jpg";

    #[test]
    fn test_same_url_same_filename() {
        let a = cache_filename(THUMB_URL, DEFAULT_SKIP_TRAILING).unwrap();
        let b = cache_filename(THUMB_URL, DEFAULT_SKIP_TRAILING).unwrap();
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn test_different_urls_differ() {
        let a = cache_filename("https://i.ytimg.com/vi/aaa/default.jpg", 0).unwrap();
        let b = cache_filename("https://i.ytimg.com/vi/bbb/default.jpg", 0).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_truncation_strips_trailing_chars() {
        let full = cache_filename(THUMB_URL, 0).unwrap();
        let trimmed = cache_filename(THUMB_URL, DEFAULT_SKIP_TRAILING).unwrap();
        assert_eq!(trimmed.len(), full.len() - DEFAULT_SKIP_TRAILING);
        assert!(full.starts_with(&trimmed));
    }

    #[test]
    fn test_filename_is_filesystem_safe() {
        // "~~~" encodes to "+"/"/" territory in the standard alphabet
        let name = cache_filename("https://example.com/~~~thumb.jpg", 0).unwrap();
        assert!(name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_short_url_clamps_truncation() {
        // Canonical form "a:b" encodes to only 4 characters
        let name = cache_filename("a:b", DEFAULT_SKIP_TRAILING).unwrap();
        assert!(name.is_empty());
    }

    #[test]
    fn test_canonicalization_unifies_case() {
        let a = cache_filename("HTTPS://Example.COM/thumb.jpg", 0).unwrap();
        let b = cache_filename("https://example.com/thumb.jpg", 0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_url_rejected() {
        assert!(cache_filename("not a url", DEFAULT_SKIP_TRAILING).is_err());
        assert!(cache_filename("", DEFAULT_SKIP_TRAILING).is_err());
    }
}
