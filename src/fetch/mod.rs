// src/fetch/mod.rs
// =============================================================================
// This module retrieves documents.
//
// The worker pool only knows about the Fetcher trait, which keeps the
// network out of the pool's tests: they plug in an in-memory fetcher
// instead of HttpFetcher.
//
// Rust concepts:
// - Traits: a shared interface that several types can implement
// - async-trait: async methods in a trait whose futures are Send, so they
//   can run inside tokio::spawn
// =============================================================================

mod http;

pub use http::HttpFetcher;

use async_trait::async_trait;

use crate::error::FetchError;

// Retrieves the full body of a URL as text
//
// One call is one round trip. Implementations must not retry.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
