use std::sync::Arc;

use async_trait::async_trait;

use super::Resolver;
use crate::db::DatabaseBackend;
use crate::error::Result;
use crate::models::{Location, MovieEntry, RawMovie};
use crate::providers::Fetcher;

pub type MovieFetcher = Arc<dyn Fetcher<str, Output = Vec<RawMovie>>>;

/// Movies whose search text matches the location's original query,
/// cached per location.
#[derive(Clone)]
pub struct MoviesResolver {
    db: Arc<dyn DatabaseBackend>,
    fetcher: MovieFetcher,
    image_base_url: String,
}

impl MoviesResolver {
    pub fn new(db: Arc<dyn DatabaseBackend>, fetcher: MovieFetcher, image_base_url: String) -> Self {
        Self {
            db,
            fetcher,
            image_base_url,
        }
    }
}

#[async_trait]
impl Resolver for MoviesResolver {
    type Key = Location;
    type Output = Vec<MovieEntry>;

    async fn resolve(&self, location: &Location) -> Result<Vec<MovieEntry>> {
        let location_id = location.require_id()?;

        let cached = self.db.get_movies_by_location(location_id).await?;
        if !cached.is_empty() {
            tracing::info!(kind = "movies", location_id, cache = "hit", "Got movie data from SQL");
            return Ok(cached);
        }

        tracing::info!(kind = "movies", location_id, cache = "miss", "Got movie data from API");
        let raw_movies = self.fetcher.fetch(&location.search_query).await?;

        let mut entries = Vec::with_capacity(raw_movies.len());
        for raw in &raw_movies {
            let entry = MovieEntry::from_raw(raw, &self.image_base_url, location_id);
            self.db.create_movie_entry(&entry).await?;
            entries.push(entry);
        }

        Ok(entries)
    }
}
