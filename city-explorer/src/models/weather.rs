use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ExplorerError, Result};

/// Length of the day-level prefix kept from the rendered forecast time.
const FORECAST_TIME_LEN: usize = 15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherEntry {
    pub forecast: String,
    pub time: String,
    pub location_id: i64,
}

impl WeatherEntry {
    pub fn from_forecast_day(raw: &RawForecastDay, location_id: i64) -> Result<Self> {
        Ok(Self {
            forecast: raw.summary.clone(),
            time: render_forecast_time(raw.time)?,
            location_id,
        })
    }
}

/// Render epoch seconds the way a date prints in full
/// (`Fri Jan 01 2021 00:00:00 GMT+0000`) and keep only the day part.
pub fn render_forecast_time(epoch_secs: i64) -> Result<String> {
    let date = DateTime::<Utc>::from_timestamp(epoch_secs, 0).ok_or_else(|| {
        ExplorerError::Provider(format!("forecast time {epoch_secs} is out of range"))
    })?;
    let rendered = date.format("%a %b %d %Y %H:%M:%S GMT%z").to_string();
    Ok(rendered.chars().take(FORECAST_TIME_LEN).collect())
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub daily: RawDaily,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawDaily {
    pub data: Vec<RawForecastDay>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawForecastDay {
    pub summary: String,
    pub time: i64,
}
