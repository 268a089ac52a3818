use async_trait::async_trait;
use reqwest::Client;

use super::{get_json, Fetcher};
use crate::config::ProviderConfig;
use crate::error::Result;
use crate::models::{EventSearchResponse, Location, RawEvent};

const PROVIDER: &str = "eventbrite";

/// Upper bound on events returned (and stored) per lookup.
pub const EVENT_LIMIT: usize = 5;

#[derive(Clone)]
pub struct EventbriteClient {
    client: Client,
    config: ProviderConfig,
}

impl EventbriteClient {
    pub fn new(client: Client, config: ProviderConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl Fetcher<Location> for EventbriteClient {
    type Output = Vec<RawEvent>;

    /// Search events around the location, keeping the first [`EVENT_LIMIT`].
    async fn fetch(&self, location: &Location) -> Result<Vec<RawEvent>> {
        let url = format!("{}/events/search", self.config.base_url);
        let request = self.client.get(&url).query(&[
            ("location.latitude", location.latitude.to_string()),
            ("location.longitude", location.longitude.to_string()),
            ("token", self.config.api_key.clone()),
        ]);

        let body: EventSearchResponse = get_json(PROVIDER, request).await?;
        Ok(body.events.into_iter().take(EVENT_LIMIT).collect())
    }
}
