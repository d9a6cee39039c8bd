//! HTTP transport abstraction
//!
//! The remote loader only needs a single GET primitive. This module defines
//! that seam and a reqwest-backed implementation of it.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use url::Url;

/// Raw result of an HTTP GET: status code plus response body
///
/// Status interpretation is left entirely to the caller; a non-2xx status is
/// still a successful transport round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code of the response
    pub status: u16,
    /// Raw response body bytes
    pub body: Vec<u8>,
}

/// Transport-level failure: the request never produced an HTTP response
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport failed: {message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    /// Creates a transport error with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        Self::new(error.to_string())
    }
}

/// A networked GET primitive
///
/// Implementations issue exactly one request per call and do not interpret
/// the response status.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Performs a GET request against the given URL
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError>;
}

/// HTTP client backed by reqwest
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ReqwestHttpClient {
    /// Creates a client with default reqwest settings
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Creates a client wrapping a preconfigured reqwest client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        let response = self.client.get(url.as_str()).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse { status, body })
    }
}
