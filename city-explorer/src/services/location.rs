use std::sync::Arc;

use async_trait::async_trait;

use super::Resolver;
use crate::db::DatabaseBackend;
use crate::error::Result;
use crate::models::{Location, RawGeocodeResult};
use crate::providers::Fetcher;

pub type GeocodeFetcher = Arc<dyn Fetcher<str, Output = RawGeocodeResult>>;

#[derive(Clone)]
pub struct LocationResolver {
    db: Arc<dyn DatabaseBackend>,
    fetcher: GeocodeFetcher,
}

impl LocationResolver {
    pub fn new(db: Arc<dyn DatabaseBackend>, fetcher: GeocodeFetcher) -> Self {
        Self { db, fetcher }
    }
}

#[async_trait]
impl Resolver for LocationResolver {
    type Key = str;
    type Output = Location;

    async fn resolve(&self, search_query: &str) -> Result<Location> {
        if let Some(location) = self.db.get_location_by_query(search_query).await? {
            tracing::info!(kind = "location", search_query, cache = "hit", "Got data from SQL");
            return Ok(location);
        }

        tracing::info!(kind = "location", search_query, cache = "miss", "Got data from API");
        let raw = self.fetcher.fetch(search_query).await?;
        let mut location = Location::from_geocode(search_query, &raw);
        location.id = Some(self.db.create_location(&location).await?);

        Ok(location)
    }
}
