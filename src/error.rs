// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::config::{AUTH_ENV, URL_ENV};
use crate::message::ErrorResponse;

#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("Missing environment variables: {} and {} must be set", URL_ENV, AUTH_ENV)]
    ConfigurationError,

    #[error("Webhook request failed with status: {status}")]
    UpstreamError { status: u16 },

    #[error("Failed to reach webhook: {0}")]
    TransportError(String),

    #[error("Webhook returned invalid JSON: {0}")]
    MalformedUpstreamResponse(String),
}

impl ForwardError {
    pub fn missing_fields() -> Self {
        Self::InvalidRequest("Missing required fields: question and notebook_id".to_string())
    }

    pub fn invalid_body(e: serde_json::Error) -> Self {
        Self::InvalidRequest(format!("Invalid request body: {e}"))
    }
}

// Every kind maps to the same 500 envelope.
impl IntoResponse for ForwardError {
    fn into_response(self) -> Response {
        match &self {
            ForwardError::InvalidRequest(_) => tracing::warn!(error = %self, "rejected query"),
            _ => tracing::error!(error = %self, "query forwarding failed"),
        }

        let body = ErrorResponse { error: self.to_string() };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
