//! Thumbnail Prefetch CLI
//!
//! Resolves thumbnail URLs passed on the command line into the local disk
//! cache and prints one JSON record per line for downstream tooling.

mod error;

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{PrefetchError, Result};
use file_thumb_cache::ThumbCache;
use thumb_loader::{
    HttpFetcher, LoaderConfig, ThumbLoader, DEFAULT_BLOAT_TOLERANCE, DEFAULT_INTER_ITEM_DELAY_MS,
    DEFAULT_MAX_RETRIES,
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let env_filter = EnvFilter::from_default_env().add_directive("thumb_prefetch=info".parse()?);

    // Use JSON format for structured log collection when LOG_FORMAT=json
    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    info!("Starting thumbnail prefetch...");

    let config = load_config();
    info!("Cache dir: {:?}", config.cache_dir);
    info!("Pass budget: {}", config.loader.max_retries);
    info!("Item delay: {:?}", config.loader.inter_item_delay);
    info!("Bloat tolerance: {}", config.loader.bloat_tolerance);

    let urls: Vec<String> = std::env::args().skip(1).collect();
    if urls.is_empty() {
        return Err(PrefetchError::Config(
            "No source URLs given; pass them as command-line arguments".to_string(),
        ));
    }

    let store = match config.cache_dir {
        Some(dir) => ThumbCache::new(dir),
        None => ThumbCache::at_platform_default()?,
    };
    store.init().await?;

    let loader = ThumbLoader::with_config(store, HttpFetcher::new(), config.loader);

    let cached = loader.list_cache_entries().await?;
    debug!(entries = cached.len(), "Cache listing before prefetch");

    // Stop after the current item on Ctrl-C
    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupt received, stopping after the current item");
            signal_cancel.cancel();
        }
    });

    let records = loader.load_with_cancel(&urls, &[], &cancel).await?;

    for record in &records {
        println!("{}", serde_json::to_string(record)?);
    }

    info!(records = records.len(), "Prefetch complete");

    Ok(())
}

struct PrefetchConfig {
    /// Explicit cache directory; falls back to the platform default.
    cache_dir: Option<PathBuf>,
    loader: LoaderConfig,
}

fn load_config() -> PrefetchConfig {
    let cache_dir = std::env::var("THUMB_CACHE_DIR").ok().map(PathBuf::from);

    let max_retries = std::env::var("THUMB_MAX_RETRIES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(DEFAULT_MAX_RETRIES);

    let delay_ms = std::env::var("THUMB_DELAY_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_INTER_ITEM_DELAY_MS);

    let bloat_tolerance = std::env::var("THUMB_BLOAT_TOLERANCE")
        .ok()
        .and_then(|s| s.parse::<f32>().ok())
        .unwrap_or(DEFAULT_BLOAT_TOLERANCE);

    PrefetchConfig {
        cache_dir,
        loader: LoaderConfig {
            max_retries,
            inter_item_delay: Duration::from_millis(delay_ms),
            bloat_tolerance,
            ..LoaderConfig::default()
        },
    }
}
