use async_trait::async_trait;

use crate::db::connection::Database;
use crate::db::repository::{
    EventRepository, LocationRepository, MovieRepository, WeatherRepository,
};
use crate::db::traits::{DatabaseBackend, EventStore, LocationStore, MovieStore, WeatherStore};
use crate::error::Result;
use crate::models::{EventEntry, Location, MovieEntry, WeatherEntry};

pub struct LibSqlBackend {
    db: Database,
}

impl LibSqlBackend {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LocationStore for LibSqlBackend {
    async fn get_location_by_query(&self, search_query: &str) -> Result<Option<Location>> {
        let conn = self.db.connect()?;
        LocationRepository::get_by_search_query(&conn, search_query).await
    }
    async fn create_location(&self, location: &Location) -> Result<i64> {
        let conn = self.db.connect()?;
        LocationRepository::create(&conn, location).await
    }
}

#[async_trait]
impl WeatherStore for LibSqlBackend {
    async fn get_weather_by_location(&self, location_id: i64) -> Result<Vec<WeatherEntry>> {
        let conn = self.db.connect()?;
        WeatherRepository::get_by_location(&conn, location_id).await
    }
    async fn create_weather_entry(&self, entry: &WeatherEntry) -> Result<()> {
        let conn = self.db.connect()?;
        WeatherRepository::create(&conn, entry).await
    }
}

#[async_trait]
impl EventStore for LibSqlBackend {
    async fn get_events_by_location(&self, location_id: i64) -> Result<Vec<EventEntry>> {
        let conn = self.db.connect()?;
        EventRepository::get_by_location(&conn, location_id).await
    }
    async fn create_event_entry(&self, entry: &EventEntry) -> Result<()> {
        let conn = self.db.connect()?;
        EventRepository::create(&conn, entry).await
    }
}

#[async_trait]
impl MovieStore for LibSqlBackend {
    async fn get_movies_by_location(&self, location_id: i64) -> Result<Vec<MovieEntry>> {
        let conn = self.db.connect()?;
        MovieRepository::get_by_location(&conn, location_id).await
    }
    async fn create_movie_entry(&self, entry: &MovieEntry) -> Result<()> {
        let conn = self.db.connect()?;
        MovieRepository::create(&conn, entry).await
    }
}

#[async_trait]
impl DatabaseBackend for LibSqlBackend {
    async fn ping(&self) -> Result<()> {
        self.db.ping().await
    }
}
