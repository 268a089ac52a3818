use std::sync::Arc;

use async_trait::async_trait;

use super::Resolver;
use crate::db::DatabaseBackend;
use crate::error::Result;
use crate::models::{EventEntry, Location, RawEvent};
use crate::providers::Fetcher;

pub type EventFetcher = Arc<dyn Fetcher<Location, Output = Vec<RawEvent>>>;

#[derive(Clone)]
pub struct EventsResolver {
    db: Arc<dyn DatabaseBackend>,
    fetcher: EventFetcher,
}

impl EventsResolver {
    pub fn new(db: Arc<dyn DatabaseBackend>, fetcher: EventFetcher) -> Self {
        Self { db, fetcher }
    }
}

#[async_trait]
impl Resolver for EventsResolver {
    type Key = Location;
    type Output = Vec<EventEntry>;

    async fn resolve(&self, location: &Location) -> Result<Vec<EventEntry>> {
        let location_id = location.require_id()?;

        let cached = self.db.get_events_by_location(location_id).await?;
        if !cached.is_empty() {
            tracing::info!(kind = "events", location_id, cache = "hit", "Got event data from SQL");
            return Ok(cached);
        }

        tracing::info!(kind = "events", location_id, cache = "miss", "Got event data from API");
        let raw_events = self.fetcher.fetch(location).await?;

        let mut entries = Vec::with_capacity(raw_events.len());
        for raw in &raw_events {
            let entry = EventEntry::from_raw(raw, location_id);
            self.db.create_event_entry(&entry).await?;
            entries.push(entry);
        }

        Ok(entries)
    }
}
