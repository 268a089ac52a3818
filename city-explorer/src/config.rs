use serde::Deserialize;
use std::env;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

fn env_or(var: &str, default: &str) -> String {
    env::var(var).unwrap_or_else(|_| default.to_string())
}

pub const DEFAULT_GEOCODE_BASE_URL: &str = "https://maps.googleapis.com/maps/api/geocode";
pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.darksky.net";
pub const DEFAULT_EVENTS_BASE_URL: &str = "https://www.eventbriteapi.com/v3";
pub const DEFAULT_MOVIES_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_MOVIE_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub providers: ProvidersConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub auth_token: Option<String>,
    pub busy_timeout_ms: u64,
    pub journal_mode: String,
}

impl DatabaseConfig {
    /// Local in-memory store, used by tests.
    pub fn in_memory() -> Self {
        Self {
            url: ":memory:".to_string(),
            auth_token: None,
            busy_timeout_ms: 5000,
            journal_mode: "MEMORY".to_string(),
        }
    }
}

/// Endpoint and credential for one third-party API.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    pub base_url: String,
    pub api_key: String,
}

impl ProviderConfig {
    fn from_env(key_var: &str, url_var: &str, default_url: &str) -> Self {
        Self {
            base_url: env_or(url_var, default_url)
                .trim_end_matches('/')
                .to_string(),
            api_key: env::var(key_var).unwrap_or_default(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProvidersConfig {
    pub geocode: ProviderConfig,
    pub weather: ProviderConfig,
    pub events: ProviderConfig,
    pub movies: ProviderConfig,
    pub movie_image_base_url: String,
    pub timeout_secs: u64,
}

impl ProvidersConfig {
    /// `(env var, config)` pairs, for startup diagnostics.
    pub fn named(&self) -> [(&'static str, &ProviderConfig); 4] {
        [
            ("GEOCODE_API_KEY", &self.geocode),
            ("WEATHER_API_KEY", &self.weather),
            ("EVENTBRITE_API_KEY", &self.events),
            ("MOVIES_API_KEY", &self.movies),
        ]
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env_or("HOST", "0.0.0.0"),
                port: parse_env_or("PORT", 3000),
            },
            database: DatabaseConfig {
                url: env_or("DATABASE_URL", "file:city_explorer.db"),
                auth_token: env::var("DATABASE_AUTH_TOKEN").ok(),
                busy_timeout_ms: parse_env_or("DATABASE_BUSY_TIMEOUT_MS", 5000),
                journal_mode: env_or("DATABASE_JOURNAL_MODE", "WAL"),
            },
            providers: ProvidersConfig {
                geocode: ProviderConfig::from_env(
                    "GEOCODE_API_KEY",
                    "GEOCODE_BASE_URL",
                    DEFAULT_GEOCODE_BASE_URL,
                ),
                weather: ProviderConfig::from_env(
                    "WEATHER_API_KEY",
                    "WEATHER_BASE_URL",
                    DEFAULT_WEATHER_BASE_URL,
                ),
                events: ProviderConfig::from_env(
                    "EVENTBRITE_API_KEY",
                    "EVENTBRITE_BASE_URL",
                    DEFAULT_EVENTS_BASE_URL,
                ),
                movies: ProviderConfig::from_env(
                    "MOVIES_API_KEY",
                    "MOVIES_BASE_URL",
                    DEFAULT_MOVIES_BASE_URL,
                ),
                movie_image_base_url: env_or(
                    "MOVIES_IMAGE_BASE_URL",
                    DEFAULT_MOVIE_IMAGE_BASE_URL,
                )
                .trim_end_matches('/')
                .to_string(),
                timeout_secs: parse_env_or("UPSTREAM_TIMEOUT_SECS", 30),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
