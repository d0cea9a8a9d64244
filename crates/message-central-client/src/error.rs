//! Message Central client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MessageCentralError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Send rejected: {status} - {body}")]
    SendRejected { status: u16, body: String },

    #[error("Validation rejected: {status} - {body}")]
    ValidateRejected { status: u16, body: String },
}

impl MessageCentralError {
    /// Raw provider response text, when the provider answered at all.
    pub fn provider_body(&self) -> Option<&str> {
        match self {
            MessageCentralError::SendRejected { body, .. } => Some(body),
            MessageCentralError::ValidateRejected { body, .. } => Some(body),
            MessageCentralError::Http(_) => None,
        }
    }
}
