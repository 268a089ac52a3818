use async_trait::async_trait;
use reqwest::Client;

use super::{get_json, Fetcher};
use crate::config::ProviderConfig;
use crate::error::{ExplorerError, Result};
use crate::models::{GeocodeResponse, RawGeocodeResult};

const PROVIDER: &str = "geocode";

/// Google Geocoding API client.
#[derive(Clone)]
pub struct GeocodeClient {
    client: Client,
    config: ProviderConfig,
}

impl GeocodeClient {
    pub fn new(client: Client, config: ProviderConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl Fetcher<str> for GeocodeClient {
    type Output = RawGeocodeResult;

    /// Resolve a free-text address to its best match.
    async fn fetch(&self, query: &str) -> Result<RawGeocodeResult> {
        let url = format!("{}/json", self.config.base_url);
        let request = self
            .client
            .get(&url)
            .query(&[("address", query), ("key", self.config.api_key.as_str())]);

        let body: GeocodeResponse = get_json(PROVIDER, request).await?;
        tracing::debug!(query, results = body.results.len(), "Got geocode data from API");

        body.results
            .into_iter()
            .next()
            .ok_or_else(|| ExplorerError::NoData(format!("No geocode results for '{query}'")))
    }
}
