//! Core domain model for feed images
//!
//! Contains the feed image value type and the loader abstraction shared by
//! the remote and local loaders.

use async_trait::async_trait;
use url::Url;
use uuid::Uuid;

/// A single image record in the feed
///
/// Identity is the `id`; the remaining fields are plain values. Instances
/// are created by the loaders and never mutated. The id is treated as an
/// opaque identifier and the URL is not checked for reachability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedImage {
    /// Unique identifier for the image
    pub id: Uuid,
    /// Optional human-readable description
    pub description: Option<String>,
    /// Optional location the image was taken at
    pub location: Option<String>,
    /// Where the image bytes live
    pub url: Url,
}

/// Common interface for anything that can produce the image feed
#[async_trait]
pub trait FeedLoader {
    /// Error surfaced when the feed cannot be loaded
    type Error;

    /// Loads the current feed
    async fn load(&self) -> Result<Vec<FeedImage>, Self::Error>;
}
