use axum::{extract::State, Json};

use crate::api::extractors::{AppQuery, DataParams};
use crate::api::state::AppState;
use crate::error::Result;
use crate::models::WeatherEntry;
use crate::services::Resolver;

/// `GET /weather?data=<location JSON>`
pub async fn get_weather(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<DataParams>,
) -> Result<Json<Vec<WeatherEntry>>> {
    let location = params.location()?;
    Ok(Json(state.weather.resolve(&location).await?))
}
