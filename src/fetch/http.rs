// src/fetch/http.rs
// =============================================================================
// Fetches a page body over HTTP with reqwest.
//
// Rules:
// - Exactly one GET per URL, no retries
// - reqwest's default redirect policy is left alone; whatever the final
//   response is, only 200 OK counts as success
// - No timeout unless the user asked for one with --timeout
//
// Each failure becomes a FetchError variant so the worker can print a
// precise reason without ever stopping.
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

use super::Fetcher;
use crate::error::FetchError;

// reqwest-backed Fetcher
//
// Client is cheap to clone and pools connections internally, so one
// HttpFetcher is shared by every worker.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Option<Duration>) -> reqwest::Result<Self> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        debug!(url, %status, "received response");

        if status != StatusCode::OK {
            return Err(FetchError::Status(status));
        }

        response.text().await.map_err(FetchError::Body)
    }
}
