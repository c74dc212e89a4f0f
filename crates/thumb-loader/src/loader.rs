//! Load-pass orchestration with offline-bloat recovery
//!
//! Resolves an ordered list of source URLs into cached thumbnail records.
//! A pass walks the URLs sequentially: cache hit, or fetch-and-store with
//! the placeholder substituted on fetch failure. After each pass the cached
//! bytes are read back and checked for bloat; a cache dominated by
//! placeholders is cleared and the pass rerun, bounded by the configured
//! retry budget.

use std::path::PathBuf;
use std::time::Duration;

use file_thumb_cache::{cache_filename, ThumbCache, DEFAULT_SKIP_TRAILING};
use serde::Serialize;
use tokio::fs;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::bloat::is_bloated;
use crate::error::{LoaderError, Result};
use crate::fetcher::NetworkFetcher;
use crate::placeholder::PLACEHOLDER_PNG;

/// Total pass budget for one load call, counting the initial pass.
pub const DEFAULT_MAX_RETRIES: u32 = 3;
/// Pacing delay inserted after each resolved item.
pub const DEFAULT_INTER_ITEM_DELAY_MS: u64 = 100;
/// Synthetic-entry fraction above which the cache counts as bloated.
pub const DEFAULT_BLOAT_TOLERANCE: f32 = 0.2;

/// One resolved thumbnail: where its bytes live on disk, plus the
/// host-supplied detail payload for that row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThumbRecord {
    /// Position in the input URL list.
    pub id: usize,
    /// Location of the cached artifact.
    pub path: PathBuf,
    /// Per-row strings supplied by the caller, if any.
    pub detail: Option<Vec<String>>,
}

/// Tuning for load passes.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Maximum passes per load call, initial pass included. Clamped to at
    /// least one.
    pub max_retries: u32,
    /// Delay after each item; `Duration::ZERO` disables pacing.
    pub inter_item_delay: Duration,
    /// Synthetic-entry fraction handed to the bloat check.
    pub bloat_tolerance: f32,
    /// Trailing characters stripped when deriving cache filenames.
    pub filename_skip_trailing: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            inter_item_delay: Duration::from_millis(DEFAULT_INTER_ITEM_DELAY_MS),
            bloat_tolerance: DEFAULT_BLOAT_TOLERANCE,
            filename_skip_trailing: DEFAULT_SKIP_TRAILING,
        }
    }
}

/// Resolves source URLs into cached thumbnails through an injected store
/// and fetcher.
pub struct ThumbLoader<F> {
    store: ThumbCache,
    fetcher: F,
    config: LoaderConfig,
}

impl<F: NetworkFetcher> ThumbLoader<F> {
    /// Create a loader with default tuning.
    pub fn new(store: ThumbCache, fetcher: F) -> Self {
        Self::with_config(store, fetcher, LoaderConfig::default())
    }

    pub fn with_config(store: ThumbCache, fetcher: F, config: LoaderConfig) -> Self {
        Self {
            store,
            fetcher,
            config,
        }
    }

    /// The backing store.
    pub fn store(&self) -> &ThumbCache {
        &self.store
    }

    /// Resolve `urls` into thumbnail records without external cancellation.
    pub async fn load(&self, urls: &[String], details: &[Vec<String>]) -> Result<Vec<ThumbRecord>> {
        self.load_with_cancel(urls, details, &CancellationToken::new())
            .await
    }

    /// Resolve `urls` into thumbnail records, honoring `cancel` between
    /// items.
    ///
    /// Records come back in input order, ids equal to input positions. A
    /// non-empty `details` must be parallel to `urls`; each record then
    /// carries its row. Fetch failures fall back to the built-in
    /// placeholder. When a finished pass left more than the tolerated
    /// fraction of placeholder bytes on disk, the cache is cleared and the
    /// pass rerun, up to `max_retries` passes in total; a still-bloated
    /// final pass is returned as-is.
    pub async fn load_with_cancel(
        &self,
        urls: &[String],
        details: &[Vec<String>],
        cancel: &CancellationToken,
    ) -> Result<Vec<ThumbRecord>> {
        if !details.is_empty() && details.len() != urls.len() {
            return Err(LoaderError::InvalidInput {
                urls: urls.len(),
                details: details.len(),
            });
        }

        let budget = self.config.max_retries.max(1);
        let mut attempt = 1;

        loop {
            let records = self.run_pass(urls, details, cancel).await?;

            if !self.rebuild_needed(&records).await {
                debug!(attempt, records = records.len(), "Load pass settled");
                return Ok(records);
            }

            if attempt >= budget {
                info!(attempt, "Retry budget spent, returning degraded records");
                return Ok(records);
            }

            info!(attempt, "Cache bloat detected, clearing and rebuilding");
            if let Err(e) = self.store.clear().await {
                warn!(error = %e, "Failed to clear bloated cache");
            }
            attempt += 1;
        }
    }

    /// Remove every cached entry.
    pub async fn clear_cache(&self) -> file_thumb_cache::Result<()> {
        self.store.clear().await
    }

    /// Names of all cached entries, for diagnostics.
    pub async fn list_cache_entries(&self) -> file_thumb_cache::Result<Vec<String>> {
        self.store.list().await
    }

    /// One sequential walk over `urls`.
    async fn run_pass(
        &self,
        urls: &[String],
        details: &[Vec<String>],
        cancel: &CancellationToken,
    ) -> Result<Vec<ThumbRecord>> {
        let mut records = Vec::with_capacity(urls.len());

        for (id, source_url) in urls.iter().enumerate() {
            if cancel.is_cancelled() {
                debug!(resolved = records.len(), "Load pass cancelled");
                return Err(LoaderError::Cancelled);
            }

            let filename = match cache_filename(source_url, self.config.filename_skip_trailing) {
                Ok(filename) => filename,
                Err(e) => {
                    return Err(LoaderError::Storage {
                        source: e,
                        partial: records,
                    })
                }
            };

            let path = match self.store.lookup(&filename).await {
                Some(path) => path,
                None => {
                    let bytes = self.fetch_with_fallback(source_url).await;
                    match self.store.write(&filename, &bytes).await {
                        Ok(path) => path,
                        Err(e) => {
                            return Err(LoaderError::Storage {
                                source: e,
                                partial: records,
                            })
                        }
                    }
                }
            };

            records.push(ThumbRecord {
                id,
                path,
                detail: details.get(id).cloned(),
            });

            // Pacing throttle, doubling as a cancellation point.
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!(resolved = records.len(), "Load pass cancelled");
                    return Err(LoaderError::Cancelled);
                }
                _ = sleep(self.config.inter_item_delay) => {}
            }
        }

        Ok(records)
    }

    /// Fetch bytes for `url`, substituting the placeholder on failure.
    async fn fetch_with_fallback(&self, url: &str) -> Vec<u8> {
        match self.fetcher.fetch(url).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(url = %url, error = %e, "Fetch failed, substituting placeholder");
                PLACEHOLDER_PNG.to_vec()
            }
        }
    }

    /// Read this pass's artifacts back from disk and check them for bloat.
    /// An unreadable artifact skips the check for the pass.
    async fn rebuild_needed(&self, records: &[ThumbRecord]) -> bool {
        let mut blobs = Vec::with_capacity(records.len());

        for record in records {
            match fs::read(&record.path).await {
                Ok(bytes) => blobs.push(bytes),
                Err(e) => {
                    warn!(
                        path = %record.path.display(),
                        error = %e,
                        "Cached artifact unreadable, skipping bloat check"
                    );
                    return false;
                }
            }
        }

        is_bloated(&blobs, PLACEHOLDER_PNG, self.config.bloat_tolerance)
    }
}
