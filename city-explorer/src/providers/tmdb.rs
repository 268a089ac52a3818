use async_trait::async_trait;
use reqwest::Client;

use super::{get_json, Fetcher};
use crate::config::ProviderConfig;
use crate::error::Result;
use crate::models::{MovieSearchResponse, RawMovie};

const PROVIDER: &str = "movies";

/// The Movie Database search client.
#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    config: ProviderConfig,
}

impl TmdbClient {
    pub fn new(client: Client, config: ProviderConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl Fetcher<str> for TmdbClient {
    type Output = Vec<RawMovie>;

    async fn fetch(&self, query: &str) -> Result<Vec<RawMovie>> {
        let url = format!("{}/search/movie", self.config.base_url);
        let request = self
            .client
            .get(&url)
            .query(&[("api_key", self.config.api_key.as_str()), ("query", query)]);

        let body: MovieSearchResponse = get_json(PROVIDER, request).await?;
        Ok(body.results)
    }
}
