use axum::{extract::State, Json};

use crate::api::extractors::{AppQuery, DataParams};
use crate::api::state::AppState;
use crate::error::Result;
use crate::models::MovieEntry;
use crate::services::Resolver;

/// `GET /movies?data=<location JSON>`
pub async fn get_movies(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<DataParams>,
) -> Result<Json<Vec<MovieEntry>>> {
    let location = params.location()?;
    Ok(Json(state.movies.resolve(&location).await?))
}
