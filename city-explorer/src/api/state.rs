use std::sync::Arc;

use crate::config::Config;
use crate::db::DatabaseBackend;
use crate::error::Result;
use crate::providers::{
    build_http_client, DarkSkyClient, EventbriteClient, GeocodeClient, TmdbClient,
};
use crate::services::{
    EventFetcher, EventsResolver, ForecastFetcher, GeocodeFetcher, LocationResolver,
    MovieFetcher, MoviesResolver, WeatherResolver,
};

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn DatabaseBackend>,
    pub locations: LocationResolver,
    pub weather: WeatherResolver,
    pub events: EventsResolver,
    pub movies: MoviesResolver,
}

impl AppState {
    /// Wire every resolver to the shared store and the configured providers.
    pub fn new(config: &Config, db: Arc<dyn DatabaseBackend>) -> Result<Self> {
        let http = build_http_client(config.providers.timeout_secs)?;
        let providers = &config.providers;

        let geocode: GeocodeFetcher =
            Arc::new(GeocodeClient::new(http.clone(), providers.geocode.clone()));
        let forecast: ForecastFetcher =
            Arc::new(DarkSkyClient::new(http.clone(), providers.weather.clone()));
        let events: EventFetcher =
            Arc::new(EventbriteClient::new(http.clone(), providers.events.clone()));
        let movies: MovieFetcher = Arc::new(TmdbClient::new(http, providers.movies.clone()));

        let locations = LocationResolver::new(db.clone(), geocode);
        let weather = WeatherResolver::new(db.clone(), forecast);
        let events = EventsResolver::new(db.clone(), events);
        let movies = MoviesResolver::new(
            db.clone(),
            movies,
            providers.movie_image_base_url.clone(),
        );

        Ok(Self {
            db,
            locations,
            weather,
            events,
            movies,
        })
    }
}
