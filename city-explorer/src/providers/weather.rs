use async_trait::async_trait;
use reqwest::Client;

use super::{get_json, Fetcher};
use crate::config::ProviderConfig;
use crate::error::Result;
use crate::models::{ForecastResponse, Location, RawForecastDay};

const PROVIDER: &str = "weather";

/// Dark Sky forecast client. The key is part of the path, not the query.
#[derive(Clone)]
pub struct DarkSkyClient {
    client: Client,
    config: ProviderConfig,
}

impl DarkSkyClient {
    pub fn new(client: Client, config: ProviderConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl Fetcher<Location> for DarkSkyClient {
    type Output = Vec<RawForecastDay>;

    async fn fetch(&self, location: &Location) -> Result<Vec<RawForecastDay>> {
        let url = format!(
            "{}/forecast/{}/{},{}",
            self.config.base_url, self.config.api_key, location.latitude, location.longitude
        );

        let body: ForecastResponse = get_json(PROVIDER, self.client.get(&url)).await?;
        Ok(body.daily.data)
    }
}
