use serde::{Deserialize, Serialize};

use crate::error::{ExplorerError, Result};

/// A geocoded place, keyed by the free-text query that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub search_query: String,
    pub formatted_query: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Assigned by the store on first persist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl Location {
    /// Build a location from the first result of a geocode response.
    pub fn from_geocode(search_query: &str, raw: &RawGeocodeResult) -> Self {
        Self {
            search_query: search_query.to_string(),
            formatted_query: raw.formatted_address.clone(),
            latitude: raw.geometry.location.lat,
            longitude: raw.geometry.location.lng,
            id: None,
        }
    }

    /// The store id, required before any dependent record can be attached.
    pub fn require_id(&self) -> Result<i64> {
        self.id.ok_or_else(|| {
            ExplorerError::Validation(format!(
                "Location '{}' has no id; resolve it through /location first",
                self.search_query
            ))
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    pub results: Vec<RawGeocodeResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawGeocodeResult {
    pub formatted_address: String,
    pub geometry: RawGeometry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawGeometry {
    pub location: RawLatLng,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawLatLng {
    pub lat: f64,
    pub lng: f64,
}
