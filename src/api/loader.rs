//! Remote feed loader
//!
//! Issues a single GET against the feed endpoint and maps the response into
//! the domain model.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

use crate::feed::{FeedImage, FeedLoader};

use super::client::HttpClient;
use super::mapper;

/// Errors that can occur when loading the remote feed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteFeedError {
    /// The request never produced an HTTP response
    #[error("could not reach the feed endpoint")]
    Connectivity,

    /// The endpoint answered with an unexpected status or an undecodable body
    #[error("the feed endpoint returned invalid data")]
    InvalidData,
}

/// Loads the feed from a remote HTTP endpoint
///
/// Each `load` issues exactly one request. Concurrent loads are independent
/// and share no in-flight state, so they may complete in any order.
pub struct RemoteFeedLoader {
    url: Url,
    client: Arc<dyn HttpClient>,
}

impl RemoteFeedLoader {
    /// Creates a loader fetching from the given endpoint
    pub fn new(url: Url, client: Arc<dyn HttpClient>) -> Self {
        Self { url, client }
    }
}

#[async_trait]
impl FeedLoader for RemoteFeedLoader {
    type Error = RemoteFeedError;

    /// Loads the feed with one request to the endpoint
    ///
    /// Any transport failure becomes [`RemoteFeedError::Connectivity`]; a
    /// delivered response is mapped as-is, so a bad status or body becomes
    /// [`RemoteFeedError::InvalidData`].
    async fn load(&self) -> Result<Vec<FeedImage>, RemoteFeedError> {
        let response = self
            .client
            .get(&self.url)
            .await
            .map_err(|_| RemoteFeedError::Connectivity)?;

        mapper::map(response.status, &response.body)
    }
}
