//! API request and response types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request to send an OTP to a phone number.
#[derive(Debug, Deserialize)]
pub struct SendOtpRequest {
    /// Phone number with country code, e.g. "+919876543210"
    pub phone: String,
}

/// Response after an accepted send.
///
/// `success` is set only when the provider returned a verification id;
/// otherwise `response` echoes whatever the provider answered.
#[derive(Debug, Serialize)]
pub struct SendOtpResponse {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
}

/// Request to verify a previously sent OTP.
#[derive(Debug, Deserialize)]
pub struct VerifyOtpRequest {
    pub phone: String,
    pub otp: String,
}

/// Response after a successful verification.
///
/// `user` is present only when the phone number is already signed up.
#[derive(Debug, Serialize)]
pub struct VerifyOtpResponse {
    pub message: String,
    pub exists: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserInfo>,
}

/// Stored user data echoed back on verification.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub name: String,
    pub email: String,
}

/// Request to sign up a new user.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub phone: String,
    pub name: String,
    pub email: String,
}

/// Response after a successful signup.
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub registered_users: usize,
}

/// Fallback body when the frontend build is absent.
#[derive(Debug, Serialize)]
pub struct FrontendMissingResponse {
    pub message: String,
}
