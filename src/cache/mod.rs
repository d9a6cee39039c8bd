//! Local feed caching
//!
//! Persists one snapshot of the feed and serves it back while it is still
//! fresh. The snapshot lives behind the [`FeedStore`] seam so the storage
//! backend can evolve independently of the domain model.

pub mod file_store;
pub mod loader;
pub mod policy;

pub use file_store::FileFeedStore;
pub use loader::{Clock, LocalFeedLoader};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;
use uuid::Uuid;

use crate::feed::FeedImage;

/// Persistence-layer representation of a feed image
///
/// Structurally identical to [`FeedImage`] on purpose: keeping a separate
/// type lets the storage schema evolve without touching the domain model.
/// Conversions in both directions are field-for-field copies and round-trip
/// exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalFeedImage {
    /// Unique identifier for the image
    pub id: Uuid,
    /// Optional human-readable description
    pub description: Option<String>,
    /// Optional location the image was taken at
    pub location: Option<String>,
    /// Where the image bytes live
    pub url: Url,
}

impl From<FeedImage> for LocalFeedImage {
    fn from(image: FeedImage) -> Self {
        Self {
            id: image.id,
            description: image.description,
            location: image.location,
            url: image.url,
        }
    }
}

impl From<LocalFeedImage> for FeedImage {
    fn from(image: LocalFeedImage) -> Self {
        Self {
            id: image.id,
            description: image.description,
            location: image.location,
            url: image.url,
        }
    }
}

/// One stored snapshot: the cached feed plus the instant it was saved at
///
/// A store holds at most one snapshot at a time; inserting replaces
/// whatever was there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedFeed {
    /// Cached records, in the order they were saved
    pub feed: Vec<LocalFeedImage>,
    /// When the snapshot was written
    pub timestamp: DateTime<Utc>,
}

/// Errors surfaced by a feed store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedStoreError {
    /// A snapshot exists but its bytes could not be read or decoded
    #[error("failed to retrieve cached feed: {0}")]
    Retrieval(String),

    /// The snapshot could not be written to its destination
    #[error("failed to write cached feed: {0}")]
    Write(String),

    /// An existing snapshot could not be removed
    #[error("failed to delete cached feed: {0}")]
    Delete(String),
}

/// Durable storage for a single feed snapshot
///
/// Implementations must serialize insert and delete against each other and
/// against retrievals, in issue order; retrievals may run concurrently with
/// each other. No caller ever observes a half-written snapshot.
#[async_trait]
pub trait FeedStore: Send + Sync {
    /// Returns the current snapshot, or `None` when nothing is stored
    ///
    /// Retrieval is read-only: it must not mutate persisted state, not even
    /// when the stored bytes fail to decode.
    async fn retrieve(&self) -> Result<Option<CachedFeed>, FeedStoreError>;

    /// Replaces the stored snapshot with the given feed and timestamp
    async fn insert(
        &self,
        feed: Vec<LocalFeedImage>,
        timestamp: DateTime<Utc>,
    ) -> Result<(), FeedStoreError>;

    /// Removes the stored snapshot; succeeds when nothing is stored
    async fn delete(&self) -> Result<(), FeedStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique_image() -> FeedImage {
        FeedImage {
            id: Uuid::new_v4(),
            description: Some("a description".to_string()),
            location: Some("a location".to_string()),
            url: Url::parse("https://example.com/image.jpg").unwrap(),
        }
    }

    #[test]
    fn test_local_mapping_round_trips() {
        let models = vec![unique_image(), unique_image()];

        let local: Vec<LocalFeedImage> =
            models.iter().cloned().map(LocalFeedImage::from).collect();
        let back: Vec<FeedImage> = local.into_iter().map(FeedImage::from).collect();

        assert_eq!(back, models);
    }

    #[test]
    fn test_local_mapping_copies_every_field() {
        let model = unique_image();

        let local = LocalFeedImage::from(model.clone());

        assert_eq!(local.id, model.id);
        assert_eq!(local.description, model.description);
        assert_eq!(local.location, model.location);
        assert_eq!(local.url, model.url);
    }

    #[test]
    fn test_snapshot_document_round_trips() {
        let cache = CachedFeed {
            feed: vec![
                LocalFeedImage::from(unique_image()),
                LocalFeedImage::from(unique_image()),
            ],
            timestamp: Utc::now(),
        };

        let json = serde_json::to_string(&cache).expect("Failed to serialize snapshot");
        let decoded: CachedFeed = serde_json::from_str(&json).expect("Failed to decode snapshot");

        assert_eq!(decoded, cache);
    }

    #[test]
    fn test_snapshot_document_uses_feed_and_timestamp_fields() {
        let cache = CachedFeed {
            feed: vec![LocalFeedImage::from(unique_image())],
            timestamp: Utc::now(),
        };

        let json = serde_json::to_string(&cache).expect("Failed to serialize snapshot");

        assert!(json.contains("\"feed\""));
        assert!(json.contains("\"timestamp\""));
    }

    #[test]
    fn test_snapshot_preserves_feed_order() {
        let feed: Vec<LocalFeedImage> = (0..5)
            .map(|_| LocalFeedImage::from(unique_image()))
            .collect();
        let ids: Vec<Uuid> = feed.iter().map(|image| image.id).collect();

        let cache = CachedFeed {
            feed,
            timestamp: Utc::now(),
        };
        let json = serde_json::to_string(&cache).expect("Failed to serialize snapshot");
        let decoded: CachedFeed = serde_json::from_str(&json).expect("Failed to decode snapshot");

        let decoded_ids: Vec<Uuid> = decoded.feed.iter().map(|image| image.id).collect();
        assert_eq!(decoded_ids, ids);
    }
}
