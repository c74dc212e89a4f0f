//! Thumbnail Prefetch Loader
//!
//! Resolves lists of source URLs into locally cached thumbnail files,
//! substituting a built-in placeholder when the network fails and
//! rebuilding caches that filled up with placeholders while offline.

pub mod bloat;
pub mod error;
pub mod fetcher;
pub mod loader;
pub mod placeholder;

pub use bloat::is_bloated;
pub use error::{LoaderError, Result};
pub use fetcher::{FetchError, HttpFetcher, NetworkFetcher};
pub use loader::{
    LoaderConfig, ThumbLoader, ThumbRecord, DEFAULT_BLOAT_TOLERANCE, DEFAULT_INTER_ITEM_DELAY_MS,
    DEFAULT_MAX_RETRIES,
};
pub use placeholder::PLACEHOLDER_PNG;
