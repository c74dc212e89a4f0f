//! File-Backed Thumbnail Cache
//!
//! Stores thumbnail bytes as flat files under a single cache directory,
//! with filenames derived deterministically from the source URL.

pub mod codec;
pub mod error;
pub mod store;

pub use codec::{cache_filename, DEFAULT_SKIP_TRAILING};
pub use error::{CacheError, Result};
pub use store::{ThumbCache, CACHE_SUBDIR};
