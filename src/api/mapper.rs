//! Response-to-domain mapping for the remote feed
//!
//! Decodes the wire document `{ "items": [...] }` and maps it into domain
//! feed images.

use serde::Deserialize;
use url::Url;
use uuid::Uuid;

use crate::feed::FeedImage;

use super::loader::RemoteFeedError;

/// Status code the endpoint uses for a well-formed feed response
const OK_200: u16 = 200;

/// A feed record as it appears on the wire
///
/// Identical to [`FeedImage`] except the image URL travels under the
/// `image` key.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteFeedItem {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image: Url,
}

/// Top-level wire document
#[derive(Debug, Deserialize)]
struct Root {
    items: Vec<RemoteFeedItem>,
}

impl From<RemoteFeedItem> for FeedImage {
    fn from(item: RemoteFeedItem) -> Self {
        Self {
            id: item.id,
            description: item.description,
            location: item.location,
            url: item.image,
        }
    }
}

/// Maps an HTTP status and body into the domain feed
///
/// Succeeds only for a 200 response whose body decodes as the feed
/// document; every other combination is invalid data. An empty `items`
/// array is a valid, empty feed.
pub fn map(status: u16, body: &[u8]) -> Result<Vec<FeedImage>, RemoteFeedError> {
    if status != OK_200 {
        return Err(RemoteFeedError::InvalidData);
    }

    let root: Root = serde_json::from_slice(body).map_err(|_| RemoteFeedError::InvalidData)?;

    Ok(root.items.into_iter().map(FeedImage::from).collect())
}
