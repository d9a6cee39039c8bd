//! Local feed loader
//!
//! Implements the load, save, and validate use cases on top of a
//! [`FeedStore`], applying the validity policy against an injectable clock.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::feed::{FeedImage, FeedLoader};

use super::{policy, FeedStore, FeedStoreError, LocalFeedImage};

/// Time source used to stamp and validate snapshots
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Loads and saves the feed through the local cache
///
/// Holds no state beyond the store and the clock; every operation is a
/// fresh pass over the stored snapshot.
pub struct LocalFeedLoader {
    store: Arc<dyn FeedStore>,
    current_date: Clock,
}

impl LocalFeedLoader {
    /// Creates a loader over the given store, stamping snapshots with `Utc::now`
    pub fn new(store: Arc<dyn FeedStore>) -> Self {
        Self::with_clock(store, Arc::new(Utc::now))
    }

    /// Creates a loader with a custom time source
    pub fn with_clock(store: Arc<dyn FeedStore>, current_date: Clock) -> Self {
        Self {
            store,
            current_date,
        }
    }

    /// Replaces the cached snapshot with the given images
    ///
    /// The previous snapshot is deleted first; a deletion failure aborts the
    /// save and the new feed is never inserted. The snapshot is stamped with
    /// the loader's current time.
    pub async fn save(&self, images: Vec<FeedImage>) -> Result<(), FeedStoreError> {
        self.store.delete().await?;

        let feed = images.into_iter().map(LocalFeedImage::from).collect();
        self.store.insert(feed, (self.current_date)()).await
    }

    /// Deletes the cached snapshot when it is expired or unreadable
    ///
    /// Maintenance operation, distinct from `load`: the deletion outcome is
    /// deliberately not surfaced to the caller. A valid or absent snapshot
    /// is left alone.
    pub async fn validate_cache(&self) {
        match self.store.retrieve().await {
            Err(_) => {
                let _ = self.store.delete().await;
            }
            Ok(Some(cache)) if !policy::validate(cache.timestamp, (self.current_date)()) => {
                let _ = self.store.delete().await;
            }
            Ok(_) => {}
        }
    }
}

#[async_trait]
impl FeedLoader for LocalFeedLoader {
    type Error = FeedStoreError;

    /// Returns the cached feed while it is valid, an empty feed otherwise
    ///
    /// Loading never mutates the cache: an expired snapshot is served as an
    /// empty feed and left in place for [`LocalFeedLoader::validate_cache`]
    /// to clean up. A retrieval error propagates unchanged.
    async fn load(&self) -> Result<Vec<FeedImage>, FeedStoreError> {
        match self.store.retrieve().await? {
            Some(cache) if policy::validate(cache.timestamp, (self.current_date)()) => {
                Ok(cache.feed.into_iter().map(FeedImage::from).collect())
            }
            _ => Ok(Vec::new()),
        }
    }
}
