//! File-backed feed store
//!
//! Persists the snapshot as a JSON document in a single file. Access goes
//! through a reader-writer lock: retrievals share a read guard while insert
//! and delete take the write guard, so mutations never interleave with each
//! other or with in-flight reads. The lock hands out guards in request
//! order, which keeps queued writes completing in the order they were
//! issued.

use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use tokio::sync::RwLock;

use super::{CachedFeed, FeedStore, FeedStoreError, LocalFeedImage};

/// File name of the snapshot inside the default cache directory
const STORE_FILE: &str = "feed.json";

/// Feed store writing the snapshot to a single JSON file
///
/// One store instance owns one file path; the snapshot survives across
/// instances pointed at the same path.
#[derive(Debug)]
pub struct FileFeedStore {
    path: PathBuf,
    access: RwLock<()>,
}

impl FileFeedStore {
    /// Creates a store under the XDG cache directory
    ///
    /// Uses `~/.cache/feedcache/feed.json` on Linux, or the platform
    /// equivalent. Returns `None` when no cache directory can be determined
    /// (e.g., no home directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "feedcache")?;
        Some(Self::with_path(project_dirs.cache_dir().join(STORE_FILE)))
    }

    /// Creates a store writing to a specific file path
    ///
    /// Useful for testing or when a specific cache location is needed.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            access: RwLock::new(()),
        }
    }

    /// Ensures the parent directory of the store file exists
    fn ensure_parent_dir(&self) -> std::io::Result<()> {
        match self.path.parent() {
            Some(parent) => fs::create_dir_all(parent),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl FeedStore for FileFeedStore {
    async fn retrieve(&self) -> Result<Option<CachedFeed>, FeedStoreError> {
        let _shared = self.access.read().await;

        if !self.path.exists() {
            return Ok(None);
        }

        let bytes =
            fs::read(&self.path).map_err(|e| FeedStoreError::Retrieval(e.to_string()))?;
        let cache: CachedFeed = serde_json::from_slice(&bytes)
            .map_err(|e| FeedStoreError::Retrieval(e.to_string()))?;

        Ok(Some(cache))
    }

    async fn insert(
        &self,
        feed: Vec<LocalFeedImage>,
        timestamp: DateTime<Utc>,
    ) -> Result<(), FeedStoreError> {
        let _exclusive = self.access.write().await;

        self.ensure_parent_dir()
            .map_err(|e| FeedStoreError::Write(e.to_string()))?;

        let cache = CachedFeed { feed, timestamp };
        let json =
            serde_json::to_vec(&cache).map_err(|e| FeedStoreError::Write(e.to_string()))?;

        fs::write(&self.path, json).map_err(|e| FeedStoreError::Write(e.to_string()))
    }

    async fn delete(&self) -> Result<(), FeedStoreError> {
        let _exclusive = self.access.write().await;

        if !self.path.exists() {
            return Ok(());
        }

        fs::remove_file(&self.path).map_err(|e| FeedStoreError::Delete(e.to_string()))
    }
}
