//! HTTP clients for the third-party data sources.
//!
//! Each client issues exactly one GET per call, unwraps the provider's JSON
//! envelope and hands back the raw items for normalization. Nothing is retried.

mod eventbrite;
mod geocode;
mod tmdb;
mod weather;

pub use eventbrite::{EventbriteClient, EVENT_LIMIT};
pub use geocode::GeocodeClient;
pub use tmdb::TmdbClient;
pub use weather::DarkSkyClient;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::{ExplorerError, Result};

const USER_AGENT: &str = concat!("city-explorer/", env!("CARGO_PKG_VERSION"));

/// One upstream lookup keyed by `K`.
#[async_trait]
pub trait Fetcher<K: ?Sized + Sync>: Send + Sync {
    type Output: Send;

    async fn fetch(&self, key: &K) -> Result<Self::Output>;
}

/// Shared client for every provider; the timeout bounds each upstream call.
pub fn build_http_client(timeout_secs: u64) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| ExplorerError::Internal(format!("Failed to create HTTP client: {e}")))
}

/// Send `request` and decode a 2xx JSON body as `T`.
///
/// Transport failures surface as [`ExplorerError::Http`] with the URL stripped,
/// since provider keys travel in the URL.
pub(crate) async fn get_json<T: DeserializeOwned>(
    provider: &'static str,
    request: RequestBuilder,
) -> Result<T> {
    let response = request.send().await.map_err(|e| {
        let e = e.without_url();
        tracing::warn!(provider, error = %e, "Provider request failed");
        ExplorerError::Http(e)
    })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(provider, %status, "Provider returned an error status");
        return Err(ExplorerError::Provider(format!(
            "{provider} returned {status}: {body}"
        )));
    }

    let bytes = response.bytes().await.map_err(|e| ExplorerError::Http(e.without_url()))?;
    serde_json::from_slice(&bytes).map_err(|e| {
        tracing::warn!(provider, error = %e, "Provider returned an unexpected body");
        ExplorerError::Provider(format!("{provider} returned an unexpected response: {e}"))
    })
}
