//! Disk-backed storage for fetched thumbnails
//!
//! A thin filesystem wrapper: every operation goes straight to disk and no
//! metadata is held in memory, so the cache directory itself is the single
//! source of truth. Entries live directly under one root directory, named by
//! their derived cache filename, and `clear` removes the root wholesale.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info, warn};

use crate::error::{CacheError, Result};

/// Subdirectory created under the platform cache directory by
/// [`ThumbCache::at_platform_default`].
pub const CACHE_SUBDIR: &str = "ImageCache";

/// A file-backed thumbnail store rooted at a single directory.
pub struct ThumbCache {
    root: PathBuf,
}

impl ThumbCache {
    /// Create a store rooted at `root`. Nothing is touched on disk until the
    /// first write (or an explicit [`init`](Self::init)).
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a store under the platform cache directory.
    pub fn at_platform_default() -> Result<Self> {
        let base = dirs::cache_dir().ok_or(CacheError::NoCacheDir)?;
        Ok(Self::new(base.join(CACHE_SUBDIR)))
    }

    /// Directory all entries live under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// On-disk location an entry with this filename occupies.
    pub fn entry_path(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    /// Ensure the cache root exists. Idempotent.
    pub async fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.root).await?;
        info!(root = ?self.root, "Cache initialized");
        Ok(())
    }

    /// Probe for an entry, returning its on-disk location on a hit.
    pub async fn lookup(&self, filename: &str) -> Option<PathBuf> {
        let path = self.entry_path(filename);
        match fs::try_exists(&path).await {
            Ok(true) => {
                debug!(filename, "Cache hit");
                Some(path)
            }
            Ok(false) => {
                debug!(filename, "Cache miss");
                None
            }
            Err(e) => {
                warn!(filename, error = %e, "Cache probe failed");
                None
            }
        }
    }

    /// Read an entry's bytes. `None` is a miss; a read failure on an
    /// existing entry degrades to a logged miss.
    pub async fn read(&self, filename: &str) -> Option<Vec<u8>> {
        let path = self.entry_path(filename);
        match fs::read(&path).await {
            Ok(data) => Some(data),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!(filename, error = %e, "Failed to read cached entry");
                None
            }
        }
    }

    /// Write an entry, creating the root if needed and silently overwriting
    /// any previous bytes under the same filename.
    pub async fn write(&self, filename: &str, data: &[u8]) -> Result<PathBuf> {
        fs::create_dir_all(&self.root).await?;
        let path = self.entry_path(filename);
        fs::write(&path, data).await?;
        debug!(filename, size = data.len(), "Cached entry written");
        Ok(path)
    }

    /// List entry filenames for diagnostics. A missing root is an empty
    /// cache, not an error.
    pub async fn list(&self) -> Result<Vec<String>> {
        let mut dir = match fs::read_dir(&self.root).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let mut names = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    /// Remove the cache root and everything under it. Clearing a cache that
    /// does not exist succeeds.
    pub async fn clear(&self) -> Result<()> {
        match fs::remove_dir_all(&self.root).await {
            Ok(()) => {
                info!(root = ?self.root, "Cache cleared");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> ThumbCache {
        ThumbCache::new(dir.path().join("thumbs"))
    }

    #[tokio::test]
    async fn test_write_then_read_round_trip() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        let data = b"fake image bytes";
        store.write("entry-a", data).await.unwrap();

        let read = store.read("entry-a").await;
        assert_eq!(read.as_deref(), Some(data.as_slice()));
    }

    #[tokio::test]
    async fn test_read_missing_entry_is_none() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.init().await.unwrap();

        assert!(store.read("never-written").await.is_none());
    }

    #[tokio::test]
    async fn test_lookup_returns_existing_path() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        let written = store.write("entry-b", b"bytes").await.unwrap();
        let found = store.lookup("entry-b").await;
        assert_eq!(found, Some(written));
        assert_eq!(store.lookup("entry-b").await, Some(store.entry_path("entry-b")));
    }

    #[tokio::test]
    async fn test_lookup_miss() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        assert!(store.lookup("absent").await.is_none());
    }

    #[tokio::test]
    async fn test_write_overwrites_silently() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        store.write("entry-c", b"first").await.unwrap();
        store.write("entry-c", b"second").await.unwrap();

        assert_eq!(store.read("entry-c").await.as_deref(), Some(b"second".as_slice()));
    }

    #[tokio::test]
    async fn test_list_missing_root_is_empty() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_names_entries() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        store.write("one", b"1").await.unwrap();
        store.write("two", b"2").await.unwrap();

        let mut names = store.list().await.unwrap();
        names.sort();
        assert_eq!(names, vec!["one".to_string(), "two".to_string()]);
    }

    #[tokio::test]
    async fn test_clear_removes_entries() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        store.write("entry-d", b"bytes").await.unwrap();
        store.clear().await.unwrap();

        assert!(store.read("entry-d").await.is_none());
        assert!(store.lookup("entry-d").await.is_none());
    }

    #[tokio::test]
    async fn test_clear_missing_root_is_ok() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        store.clear().await.unwrap();
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_init_idempotent() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        store.init().await.unwrap();
        store.init().await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[test]
    fn test_entry_path_under_root() {
        let store = ThumbCache::new(PathBuf::from("/tmp/cache"));
        assert_eq!(store.entry_path("abc"), PathBuf::from("/tmp/cache/abc"));
    }

    #[test]
    fn test_platform_default_uses_image_cache_subdir() {
        match ThumbCache::at_platform_default() {
            Ok(store) => assert!(store.root().ends_with(CACHE_SUBDIR)),
            Err(CacheError::NoCacheDir) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
}
