use std::sync::Arc;

use async_trait::async_trait;

use super::Resolver;
use crate::db::DatabaseBackend;
use crate::error::Result;
use crate::models::{Location, RawForecastDay, WeatherEntry};
use crate::providers::Fetcher;

pub type ForecastFetcher = Arc<dyn Fetcher<Location, Output = Vec<RawForecastDay>>>;

#[derive(Clone)]
pub struct WeatherResolver {
    db: Arc<dyn DatabaseBackend>,
    fetcher: ForecastFetcher,
}

impl WeatherResolver {
    pub fn new(db: Arc<dyn DatabaseBackend>, fetcher: ForecastFetcher) -> Self {
        Self { db, fetcher }
    }
}

#[async_trait]
impl Resolver for WeatherResolver {
    type Key = Location;
    type Output = Vec<WeatherEntry>;

    async fn resolve(&self, location: &Location) -> Result<Vec<WeatherEntry>> {
        let location_id = location.require_id()?;

        let cached = self.db.get_weather_by_location(location_id).await?;
        if !cached.is_empty() {
            tracing::info!(kind = "weather", location_id, cache = "hit", "Got weather data from SQL");
            return Ok(cached);
        }

        tracing::info!(kind = "weather", location_id, cache = "miss", "Got weather data from API");
        let days = self.fetcher.fetch(location).await?;

        // Sequential inserts, no transaction: a failure part way leaves earlier rows.
        let mut entries = Vec::with_capacity(days.len());
        for day in &days {
            let entry = WeatherEntry::from_forecast_day(day, location_id)?;
            self.db.create_weather_entry(&entry).await?;
            entries.push(entry);
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::db::{
        Database, EventStore, LibSqlBackend, LocationStore, MovieStore, WeatherStore,
    };
    use crate::error::ExplorerError;
    use crate::models::{EventEntry, MovieEntry};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubForecast {
        calls: AtomicUsize,
        days: Vec<RawForecastDay>,
    }

    #[async_trait]
    impl Fetcher<Location> for StubForecast {
        type Output = Vec<RawForecastDay>;

        async fn fetch(&self, _location: &Location) -> Result<Vec<RawForecastDay>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.days.clone())
        }
    }

    fn location(id: Option<i64>) -> Location {
        Location {
            search_query: "seattle".to_string(),
            formatted_query: "Seattle, WA, USA".to_string(),
            latitude: 47.6,
            longitude: -122.3,
            id,
        }
    }

    async fn setup(days: Vec<RawForecastDay>) -> (WeatherResolver, Arc<StubForecast>) {
        let db = Database::new(&DatabaseConfig::in_memory()).await.unwrap();
        let db: Arc<dyn DatabaseBackend> = Arc::new(LibSqlBackend::new(db));
        let stub = Arc::new(StubForecast {
            calls: AtomicUsize::new(0),
            days,
        });
        (WeatherResolver::new(db, stub.clone()), stub)
    }

    #[tokio::test]
    async fn test_miss_then_hit() {
        let days = vec![
            RawForecastDay {
                summary: "Clear".to_string(),
                time: 1609459200,
            },
            RawForecastDay {
                summary: "Rain".to_string(),
                time: 1609545600,
            },
        ];
        let (resolver, stub) = setup(days).await;

        let fresh = resolver.resolve(&location(Some(1))).await.unwrap();
        let cached = resolver.resolve(&location(Some(1))).await.unwrap();

        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
        assert_eq!(fresh.len(), 2);
        assert_eq!(fresh[0].time, "Fri Jan 01 2021");
        assert_eq!(fresh[1].time, "Sat Jan 02 2021");
        assert_eq!(fresh, cached);
    }

    #[tokio::test]
    async fn test_location_without_id_is_rejected() {
        let (resolver, stub) = setup(Vec::new()).await;

        let result = resolver.resolve(&location(None)).await;

        assert!(matches!(result, Err(ExplorerError::Validation(_))));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_forecast_refetches_next_time() {
        let (resolver, stub) = setup(Vec::new()).await;

        assert!(resolver.resolve(&location(Some(1))).await.unwrap().is_empty());
        assert!(resolver.resolve(&location(Some(1))).await.unwrap().is_empty());

        // Nothing was cached, so both requests were misses.
        assert_eq!(stub.calls.load(Ordering::SeqCst), 2);
    }

    /// Store whose `fail_on`-th weather insert fails; everything else passes through.
    struct FlakyStore {
        inner: LibSqlBackend,
        weather_inserts: AtomicUsize,
        fail_on: usize,
    }

    #[async_trait]
    impl LocationStore for FlakyStore {
        async fn get_location_by_query(&self, search_query: &str) -> Result<Option<Location>> {
            self.inner.get_location_by_query(search_query).await
        }
        async fn create_location(&self, location: &Location) -> Result<i64> {
            self.inner.create_location(location).await
        }
    }

    #[async_trait]
    impl WeatherStore for FlakyStore {
        async fn get_weather_by_location(&self, location_id: i64) -> Result<Vec<WeatherEntry>> {
            self.inner.get_weather_by_location(location_id).await
        }
        async fn create_weather_entry(&self, entry: &WeatherEntry) -> Result<()> {
            let n = self.weather_inserts.fetch_add(1, Ordering::SeqCst) + 1;
            if n == self.fail_on {
                return Err(ExplorerError::Internal("disk full".to_string()));
            }
            self.inner.create_weather_entry(entry).await
        }
    }

    #[async_trait]
    impl EventStore for FlakyStore {
        async fn get_events_by_location(&self, location_id: i64) -> Result<Vec<EventEntry>> {
            self.inner.get_events_by_location(location_id).await
        }
        async fn create_event_entry(&self, entry: &EventEntry) -> Result<()> {
            self.inner.create_event_entry(entry).await
        }
    }

    #[async_trait]
    impl MovieStore for FlakyStore {
        async fn get_movies_by_location(&self, location_id: i64) -> Result<Vec<MovieEntry>> {
            self.inner.get_movies_by_location(location_id).await
        }
        async fn create_movie_entry(&self, entry: &MovieEntry) -> Result<()> {
            self.inner.create_movie_entry(entry).await
        }
    }

    #[async_trait]
    impl DatabaseBackend for FlakyStore {
        async fn ping(&self) -> Result<()> {
            self.inner.ping().await
        }
    }

    #[tokio::test]
    async fn test_failed_insert_keeps_earlier_rows_and_next_call_hits() {
        let days: Vec<RawForecastDay> = ["Clear", "Rain", "Snow"]
            .iter()
            .enumerate()
            .map(|(i, summary)| RawForecastDay {
                summary: summary.to_string(),
                time: 1609459200 + 86400 * i as i64,
            })
            .collect();
        let raw = Database::new(&DatabaseConfig::in_memory()).await.unwrap();
        let db: Arc<dyn DatabaseBackend> = Arc::new(FlakyStore {
            inner: LibSqlBackend::new(raw),
            weather_inserts: AtomicUsize::new(0),
            fail_on: 3,
        });
        let stub = Arc::new(StubForecast {
            calls: AtomicUsize::new(0),
            days,
        });
        let resolver = WeatherResolver::new(db.clone(), stub.clone());

        let first = resolver.resolve(&location(Some(1))).await;
        assert!(matches!(first, Err(ExplorerError::Internal(_))));

        let stored = db.get_weather_by_location(1).await.unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].forecast, "Clear");
        assert_eq!(stored[1].forecast, "Rain");

        // The partial batch now counts as cached.
        let second = resolver.resolve(&location(Some(1))).await.unwrap();
        assert_eq!(second, stored);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }
}
