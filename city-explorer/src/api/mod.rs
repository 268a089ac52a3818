mod extractors;
mod handlers;
mod routes;
mod state;

pub use extractors::{AppQuery, DataParams};
pub use routes::create_router;
pub use state::AppState;
