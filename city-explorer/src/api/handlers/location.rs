use axum::{extract::State, Json};

use crate::api::extractors::{AppQuery, DataParams};
use crate::api::state::AppState;
use crate::error::Result;
use crate::models::Location;
use crate::services::Resolver;

/// `GET /location?data=<search text>`
pub async fn get_location(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<DataParams>,
) -> Result<Json<Location>> {
    let location = state.locations.resolve(params.search_text()?).await?;
    Ok(Json(location))
}
