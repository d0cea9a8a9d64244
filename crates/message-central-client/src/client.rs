//! Message Central HTTP client.

use crate::error::MessageCentralError;
use crate::phone::normalize_mobile_number;
use crate::types::{extract_verification_id, interpret_validate_body, SendOutcome, VerifyOutcome};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use urlencoding::encode;

/// Message Central verification client.
///
/// The auth token is stored using `SecretString` to prevent accidental
/// exposure in logs or debug output.
#[derive(Clone)]
pub struct MessageCentralClient {
    client: reqwest::Client,
    base_url: String,
    customer_id: String,
    auth_token: SecretString,
    country_code: String,
}

impl MessageCentralClient {
    /// Create a new client against the given CPaaS base URL.
    pub fn new(
        base_url: impl Into<String>,
        customer_id: impl Into<String>,
        auth_token: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Result<Self, MessageCentralError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            customer_id: customer_id.into(),
            auth_token: SecretString::new(auth_token.into()),
            country_code: country_code.into(),
        })
    }

    /// The country code used for normalization and as a query parameter.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Ask the provider to deliver an OTP to `phone` over WhatsApp.
    ///
    /// The request carries everything in the query string and has no body.
    #[instrument(skip(self))]
    pub async fn send_verification(
        &self,
        phone: &str,
    ) -> Result<SendOutcome, MessageCentralError> {
        let mobile_number = normalize_mobile_number(phone, &self.country_code);
        let url = format!(
            "{}/verification/v3/send?countryCode={}&customerId={}&flowType=WHATSAPP&mobileNumber={}",
            self.base_url,
            encode(&self.country_code),
            encode(&self.customer_id),
            encode(&mobile_number)
        );

        debug!(url = %url, "Sending OTP request");

        let response = self
            .client
            .post(&url)
            .header("authToken", self.auth_token.expose_secret())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            warn!(status = %status, body = %body, "OTP send rejected by provider");
            return Err(MessageCentralError::SendRejected {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = %status, body = %body, "OTP send accepted");

        match serde_json::from_str::<Value>(&body) {
            Ok(json) => match extract_verification_id(&json) {
                Some(verification_id) => Ok(SendOutcome::Accepted { verification_id }),
                None => {
                    warn!("Provider accepted send but returned no verificationId");
                    Ok(SendOutcome::AcceptedWithoutId { response: json })
                }
            },
            Err(_) => Ok(SendOutcome::AcceptedRaw { body }),
        }
    }

    /// Check a submitted OTP against a pending verification.
    #[instrument(skip(self, code))]
    pub async fn validate_otp(
        &self,
        phone: &str,
        verification_id: &str,
        code: &str,
    ) -> Result<VerifyOutcome, MessageCentralError> {
        let mobile_number = normalize_mobile_number(phone, &self.country_code);
        let url = format!(
            "{}/verification/v3/validateOtp?countryCode={}&mobileNumber={}&verificationId={}&code={}",
            self.base_url,
            encode(&self.country_code),
            encode(&mobile_number),
            encode(verification_id),
            encode(code)
        );

        debug!(url = %url, "Validating OTP");

        let response = self
            .client
            .get(&url)
            .header("authToken", self.auth_token.expose_secret())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            warn!(status = %status, body = %body, "OTP validation rejected by provider");
            return Err(MessageCentralError::ValidateRejected {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = %status, body = %body, "OTP validation response received");
        Ok(interpret_validate_body(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client =
            MessageCentralClient::new("http://localhost:8080", "C-123", "token", "91");
        assert!(client.is_ok());
    }
}
