//! HTTP error mapping for the API surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::GavelError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error(GavelError);

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            GavelError::Validation(message) => (StatusCode::BAD_REQUEST, *message),
            GavelError::Fetch(_) => (StatusCode::BAD_GATEWAY, "Failed to fetch transcript"),
            err => {
                tracing::error!(error = %err, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl<E> From<E> for Error
where
    E: Into<GavelError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
