use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Body sent for every server-side failure. Details go to the log only.
pub const GENERIC_ERROR_MESSAGE: &str = "Sorry, something went wrong";

#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("Database error: {0}")]
    Database(#[from] libsql::Error),

    #[error("No data: {0}")]
    NoData(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ExplorerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ExplorerError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            _ => {
                tracing::error!(error = %self, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_ERROR_MESSAGE.to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "code": status.as_u16()
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
