mod events;
mod locations;
mod movies;
mod weather;

pub use events::EventRepository;
pub use locations::LocationRepository;
pub use movies::MovieRepository;
pub use weather::WeatherRepository;
