use axum::extract::rejection::QueryRejection;
use axum::extract::FromRequestParts;
use serde::Deserialize;

use crate::error::{ExplorerError, Result};
use crate::models::Location;

/// `Query` extractor whose rejection is an [`ExplorerError`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ExplorerError))]
pub struct AppQuery<T>(pub T);

impl From<QueryRejection> for ExplorerError {
    fn from(rejection: QueryRejection) -> Self {
        ExplorerError::Validation(format!(
            "Missing or invalid `data` query parameter: {}",
            rejection.body_text()
        ))
    }
}

/// The single `data` parameter every route takes.
#[derive(Debug, Deserialize)]
pub struct DataParams {
    pub data: String,
}

impl DataParams {
    /// `data` as free search text, unchanged. Blank input is rejected.
    pub fn search_text(&self) -> Result<&str> {
        if self.data.trim().is_empty() {
            return Err(ExplorerError::Validation(
                "`data` must not be empty".to_string(),
            ));
        }
        Ok(&self.data)
    }

    /// `data` as a previously resolved location object.
    pub fn location(&self) -> Result<Location> {
        serde_json::from_str(&self.data).map_err(|e| {
            ExplorerError::Validation(format!("`data` is not a location object: {e}"))
        })
    }
}
