mod events;
mod location;
mod movies;
mod resolver;
mod weather;

pub use events::{EventFetcher, EventsResolver};
pub use location::{GeocodeFetcher, LocationResolver};
pub use movies::{MovieFetcher, MoviesResolver};
pub use resolver::Resolver;
pub use weather::{ForecastFetcher, WeatherResolver};
