mod events;
mod health;
mod location;
mod movies;
mod weather;

pub use events::get_events;
pub use health::health_check;
pub use location::get_location;
pub use movies::get_movies;
pub use weather::get_weather;
