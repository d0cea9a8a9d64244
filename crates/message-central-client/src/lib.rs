//! Message Central verification API client.
//!
//! Wraps the two CPaaS verification endpoints this service depends on:
//! - `POST /verification/v3/send` to deliver an OTP over WhatsApp
//! - `GET /verification/v3/validateOtp` to check a submitted code
//!
//! The provider's response contract is only partially typed, so outcomes
//! are interpreted by [`interpret_validate_body`] rather than deserialized
//! into a fixed struct.

pub mod client;
pub mod error;
pub mod phone;
pub mod types;

pub use client::MessageCentralClient;
pub use error::MessageCentralError;
pub use phone::normalize_mobile_number;
pub use types::{interpret_validate_body, SendOutcome, VerifyOutcome};
