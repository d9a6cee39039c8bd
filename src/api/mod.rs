//! Remote feed loading
//!
//! Fetches the feed from an HTTP endpoint and maps the response into the
//! domain model.

pub mod client;
pub mod loader;
pub mod mapper;

pub use client::{HttpClient, HttpResponse, ReqwestHttpClient, TransportError};
pub use loader::{RemoteFeedError, RemoteFeedLoader};
pub use mapper::RemoteFeedItem;
