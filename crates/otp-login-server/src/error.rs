//! Error types for the login backend.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to send OTP: {0}")]
    SendFailed(String),

    #[error("No OTP request found for this number")]
    NoPendingOtp,

    #[error("Invalid OTP")]
    InvalidOtp,

    #[error("OTP verification failed")]
    VerificationFailed,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::SendFailed(_) | ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NoPendingOtp
            | ApiError::InvalidOtp
            | ApiError::VerificationFailed
            | ApiError::UserAlreadyExists => StatusCode::BAD_REQUEST,
        };

        let body = ErrorResponse {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<std::io::Error> for ApiError {
    fn from(e: std::io::Error) -> Self {
        ApiError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Storage(format!("JSON serialization error: {}", e))
    }
}
