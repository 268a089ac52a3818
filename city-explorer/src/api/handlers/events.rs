use axum::{extract::State, Json};

use crate::api::extractors::{AppQuery, DataParams};
use crate::api::state::AppState;
use crate::error::Result;
use crate::models::EventEntry;
use crate::services::Resolver;

/// `GET /events?data=<location JSON>`
pub async fn get_events(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<DataParams>,
) -> Result<Json<Vec<EventEntry>>> {
    let location = params.location()?;
    Ok(Json(state.events.resolve(&location).await?))
}
