//! HTTP request handlers.

use super::types::{
    FrontendMissingResponse, HealthResponse, SendOtpRequest, SendOtpResponse, SignupRequest,
    SignupResponse, UserInfo, VerifyOtpRequest, VerifyOtpResponse,
};
use super::AppState;
use crate::error::ApiError;
use crate::registry::UserRecord;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use message_central_client::{SendOutcome, VerifyOutcome};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let registry = state.registry.read().await;

    Json(HealthResponse {
        status: "ok".to_string(),
        registered_users: registry.count(),
    })
}

/// Ask the provider to send an OTP and track the resulting session.
pub async fn send_otp(
    State(state): State<AppState>,
    Json(request): Json<SendOtpRequest>,
) -> Result<Json<SendOtpResponse>, ApiError> {
    info!(phone = %request.phone, "OTP send requested");

    let outcome = state
        .provider
        .send_verification(&request.phone)
        .await
        .map_err(|e| {
            ApiError::SendFailed(
                e.provider_body()
                    .map(str::to_string)
                    .unwrap_or_else(|| e.to_string()),
            )
        })?;

    match outcome {
        SendOutcome::Accepted { verification_id } => {
            // A re-send for the same number restarts the flow
            if let Some(previous) = state
                .sessions
                .begin(request.phone.clone(), verification_id)
                .await
            {
                debug!(phone = %request.phone, previous = %previous, "Pending session replaced");
            }

            info!(phone = %request.phone, "OTP sent, session recorded");
            Ok(Json(SendOtpResponse {
                message: "OTP sent via Message Central WhatsApp".to_string(),
                success: Some(true),
                response: None,
            }))
        }
        SendOutcome::AcceptedWithoutId { response } => {
            warn!(phone = %request.phone, "Provider returned no verification id");
            Ok(Json(SendOtpResponse {
                message: "OTP sent but no verification ID received".to_string(),
                success: None,
                response: Some(response),
            }))
        }
        SendOutcome::AcceptedRaw { body } => Ok(Json(SendOtpResponse {
            message: "OTP sent via Message Central".to_string(),
            success: None,
            response: Some(Value::String(body)),
        })),
    }
}

/// Verify a submitted OTP and report whether the number is signed up.
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(request): Json<VerifyOtpRequest>,
) -> Result<Json<VerifyOtpResponse>, ApiError> {
    info!(phone = %request.phone, "OTP verification requested");

    let verification_id = state
        .sessions
        .verification_id(&request.phone)
        .await
        .ok_or(ApiError::NoPendingOtp)?;

    let outcome = state
        .provider
        .validate_otp(&request.phone, &verification_id, &request.otp)
        .await
        .map_err(|e| {
            warn!(phone = %request.phone, error = %e, "Provider rejected validation request");
            ApiError::VerificationFailed
        })?;

    match outcome {
        VerifyOutcome::Verified => {
            // Sessions are single-use
            state.sessions.complete(&request.phone).await;

            let registry = state.registry.read().await;
            let user = registry.get(&request.phone).map(|u| UserInfo {
                name: u.name.clone(),
                email: u.email.clone(),
            });

            info!(phone = %request.phone, exists = user.is_some(), "OTP verified");
            Ok(Json(VerifyOtpResponse {
                message: "OTP verified successfully".to_string(),
                exists: user.is_some(),
                user,
            }))
        }
        VerifyOutcome::Rejected => {
            warn!(phone = %request.phone, "Invalid OTP submitted");
            Err(ApiError::InvalidOtp)
        }
    }
}

/// Sign up a new user and persist the registry.
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<SignupResponse>, ApiError> {
    info!(phone = %request.phone, "Signup requested");

    // Hold the write lock across insert + persist so concurrent signups
    // cannot lose each other's writes
    let mut registry = state.registry.write().await;
    registry.create(
        request.phone.clone(),
        UserRecord {
            name: request.name,
            email: request.email,
        },
    )?;

    state.store.save(&registry).await?;

    info!(phone = %request.phone, "Signup successful");
    Ok(Json(SignupResponse {
        message: "Signup successful".to_string(),
    }))
}

/// Catch-all: serve the SPA entry document if the frontend is built.
pub async fn frontend(State(state): State<AppState>) -> Response {
    let index_path = state.frontend_dir.join("index.html");

    match tokio::fs::read_to_string(&index_path).await {
        Ok(contents) => Html(contents).into_response(),
        Err(_) => Json(FrontendMissingResponse {
            message: "React frontend not built yet".to_string(),
        })
        .into_response(),
    }
}
