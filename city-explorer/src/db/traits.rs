use async_trait::async_trait;

use crate::error::Result;
use crate::models::{EventEntry, Location, MovieEntry, WeatherEntry};

/// Lookup and insert for geocoded locations.
#[async_trait]
pub trait LocationStore: Send + Sync {
    async fn get_location_by_query(&self, search_query: &str) -> Result<Option<Location>>;
    /// Persist a new location and return its store-assigned id.
    async fn create_location(&self, location: &Location) -> Result<i64>;
}

#[async_trait]
pub trait WeatherStore: Send + Sync {
    async fn get_weather_by_location(&self, location_id: i64) -> Result<Vec<WeatherEntry>>;
    async fn create_weather_entry(&self, entry: &WeatherEntry) -> Result<()>;
}

#[async_trait]
pub trait EventStore: Send + Sync {
    async fn get_events_by_location(&self, location_id: i64) -> Result<Vec<EventEntry>>;
    async fn create_event_entry(&self, entry: &EventEntry) -> Result<()>;
}

#[async_trait]
pub trait MovieStore: Send + Sync {
    async fn get_movies_by_location(&self, location_id: i64) -> Result<Vec<MovieEntry>>;
    async fn create_movie_entry(&self, entry: &MovieEntry) -> Result<()>;
}

/// A complete store backend: every per-table store plus lifecycle operations.
#[async_trait]
pub trait DatabaseBackend: LocationStore + WeatherStore + EventStore + MovieStore {
    /// Check that the store answers queries.
    async fn ping(&self) -> Result<()>;
}
