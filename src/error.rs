//! API error types.

use crate::services::compound_interest::InvalidArgument;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Error returned by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request failed shape or domain validation.
    #[error("{0}")]
    BadRequest(String),

    /// No route matched.
    #[error("Not Found")]
    NotFound,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ApiError {
    /// Validation failure naming each field that must be positive.
    pub fn non_positive_fields(fields: &[&str]) -> Self {
        let problems = fields
            .iter()
            .map(|field| format!("{field} must be greater than 0"))
            .collect::<Vec<_>>()
            .join(", ");

        ApiError::BadRequest(format!("Invalid input: {problems}"))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.to_string();

        tracing::warn!(status = status.as_u16(), "Rejected request: {}", detail);

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

impl From<InvalidArgument> for ApiError {
    fn from(err: InvalidArgument) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

// Every body rejection is the client's fault, so they all collapse to 400.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("Invalid input: {}", rejection.body_text()))
    }
}
