//! Feed image loading and caching
//!
//! Loads a feed of image records either from a remote HTTP endpoint or from
//! a local on-disk cache with a seven-day expiration policy. The crate is a
//! library: the HTTP transport and the snapshot storage sit behind small
//! traits so callers can swap in their own implementations.

pub mod api;
pub mod cache;
pub mod feed;
