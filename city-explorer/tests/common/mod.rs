// Common test utilities for integration tests
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Once};

use city_explorer::api::{create_router, AppState};
use city_explorer::config::{
    Config, DatabaseConfig, ProviderConfig, ProvidersConfig, ServerConfig,
    DEFAULT_MOVIE_IMAGE_BASE_URL,
};
use city_explorer::db::{Database, DatabaseBackend, LibSqlBackend};
use city_explorer::models::Location;
use serde_json::{json, Value};

static INIT: Once = Once::new();

pub const TEST_KEY: &str = "test-key";

/// Initialize tracing subscriber once for tests
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Provider settings pointing an API at `base_url` (a mock server).
pub fn provider(base_url: &str) -> ProviderConfig {
    ProviderConfig {
        base_url: base_url.to_string(),
        api_key: TEST_KEY.to_string(),
    }
}

pub fn test_config(mock_uri: &str, database: DatabaseConfig) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database,
        providers: ProvidersConfig {
            geocode: provider(mock_uri),
            weather: provider(mock_uri),
            events: provider(mock_uri),
            movies: provider(mock_uri),
            movie_image_base_url: DEFAULT_MOVIE_IMAGE_BASE_URL.to_string(),
            timeout_secs: 5,
        },
    }
}

pub struct TestApp {
    pub addr: SocketAddr,
    pub db: Arc<dyn DatabaseBackend>,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, route: &str) -> String {
        format!("http://{}{}", self.addr, route)
    }

    pub async fn get_with_data(&self, route: &str, data: &str) -> reqwest::Response {
        self.client
            .get(self.url(route))
            .query(&[("data", data)])
            .send()
            .await
            .expect("request failed")
    }

    pub async fn get_with_location(&self, route: &str, location: &Location) -> reqwest::Response {
        let data = serde_json::to_string(location).unwrap();
        self.get_with_data(route, &data).await
    }
}

/// Serve the real router on an ephemeral port, wired to `mock_uri`.
pub async fn spawn_app(mock_uri: &str, database: DatabaseConfig) -> TestApp {
    init_test_logger();

    let config = test_config(mock_uri, database);
    let raw_db = Database::new(&config.database)
        .await
        .expect("Failed to open database");
    let db: Arc<dyn DatabaseBackend> = Arc::new(LibSqlBackend::new(raw_db));

    let state = AppState::new(&config, db.clone()).expect("Failed to build state");
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        addr,
        db,
        client: reqwest::Client::new(),
    }
}

pub fn geocode_body() -> Value {
    json!({
        "results": [{
            "formatted_address": "Seattle, WA, USA",
            "geometry": { "location": { "lat": 47.6062, "lng": -122.3321 } }
        }],
        "status": "OK"
    })
}

pub fn forecast_body() -> Value {
    json!({
        "latitude": 47.6062,
        "longitude": -122.3321,
        "daily": {
            "summary": "Rain all week.",
            "data": [
                { "time": 1609459200, "summary": "Clear", "temperatureHigh": 48.1 },
                { "time": 1609545600, "summary": "Light rain", "temperatureHigh": 46.0 }
            ]
        }
    })
}

pub fn events_body(count: usize) -> Value {
    let events: Vec<Value> = (1..=count)
        .map(|i| {
            json!({
                "url": format!("https://www.eventbrite.com/e/{i}"),
                "name": { "text": format!("Event {i}"), "html": format!("<b>Event {i}</b>") },
                "start": { "local": format!("2021-01-{i:02}T19:00:00"), "utc": "2021-01-01T03:00:00Z" },
                "description": { "text": format!("Description {i}") }
            })
        })
        .collect();
    json!({ "pagination": { "object_count": count }, "events": events })
}

pub fn movies_body() -> Value {
    json!({
        "page": 1,
        "results": [
            {
                "title": "Sleepless in Seattle",
                "overview": "A recently widowed man's son calls a radio talk-show...",
                "vote_average": 6.6,
                "vote_count": 1500,
                "popularity": 12.5,
                "poster_path": "/afkYP15OeUOD0tFEmj6VvejuOcz.jpg",
                "release_date": "1993-06-24"
            },
            {
                "title": "Seattle Superstorm",
                "vote_average": 4.1,
                "vote_count": 20,
                "popularity": 1.2,
                "poster_path": null,
                "release_date": "2012-09-29"
            }
        ],
        "total_results": 2
    })
}

/// A location as a client holds it after `/location`.
pub fn resolved_location(id: i64) -> Location {
    Location {
        search_query: "seattle".to_string(),
        formatted_query: "Seattle, WA, USA".to_string(),
        latitude: 47.6062,
        longitude: -122.3321,
        id: Some(id),
    }
}
