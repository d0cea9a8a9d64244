//! Provider response interpretation.

use serde_json::Value;

/// Outcome of a send request the provider accepted (HTTP 200).
#[derive(Debug, Clone, PartialEq)]
pub enum SendOutcome {
    /// Provider returned `data.verificationId`; the OTP flow can proceed.
    Accepted { verification_id: String },
    /// HTTP 200 with a JSON body that lacks `data.verificationId`. The
    /// payload is echoed back to the caller.
    AcceptedWithoutId { response: Value },
    /// HTTP 200 with a body that is not valid JSON.
    AcceptedRaw { body: String },
}

/// Outcome of a validate request the provider accepted (HTTP 200).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    Verified,
    Rejected,
}

/// Decide whether a 200 response from `validateOtp` means the code matched.
///
/// Primary branch: the body is JSON and carries `responseCode`; 200 means
/// verified, anything else means the code was wrong. Fallback branch: the
/// provider sometimes answers in plain text, in which case a
/// case-insensitive search for the token "success" is the defined contract.
pub fn interpret_validate_body(body: &str) -> VerifyOutcome {
    match serde_json::from_str::<Value>(body) {
        Ok(json) => {
            if json.get("responseCode").and_then(Value::as_i64) == Some(200) {
                VerifyOutcome::Verified
            } else {
                VerifyOutcome::Rejected
            }
        }
        Err(_) => {
            if body.to_lowercase().contains("success") {
                VerifyOutcome::Verified
            } else {
                VerifyOutcome::Rejected
            }
        }
    }
}

/// Pull `data.verificationId` out of a send response body, if present.
pub(crate) fn extract_verification_id(json: &Value) -> Option<String> {
    json.get("data")
        .and_then(|d| d.get("verificationId"))
        .map(|id| match id {
            // Observed as both a string and a bare number
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_response_code_200_is_verified() {
        assert_eq!(
            interpret_validate_body(r#"{"responseCode":200,"message":"SUCCESS"}"#),
            VerifyOutcome::Verified
        );
    }

    #[test]
    fn json_other_response_code_is_rejected() {
        assert_eq!(
            interpret_validate_body(r#"{"responseCode":702}"#),
            VerifyOutcome::Rejected
        );
        // Missing responseCode counts as rejected too
        assert_eq!(interpret_validate_body(r#"{}"#), VerifyOutcome::Rejected);
    }

    #[test]
    fn non_json_success_token_is_verified() {
        assert_eq!(
            interpret_validate_body("Verification SUCCESS for code 1234"),
            VerifyOutcome::Verified
        );
        assert_eq!(interpret_validate_body("success"), VerifyOutcome::Verified);
    }

    #[test]
    fn non_json_without_token_is_rejected() {
        assert_eq!(
            interpret_validate_body("code mismatch"),
            VerifyOutcome::Rejected
        );
        assert_eq!(interpret_validate_body(""), VerifyOutcome::Rejected);
    }

    #[test]
    fn extracts_verification_id_variants() {
        let json = json!({"data": {"verificationId": "V123"}});
        assert_eq!(extract_verification_id(&json), Some("V123".to_string()));

        let json = json!({"data": {"verificationId": 4567}});
        assert_eq!(extract_verification_id(&json), Some("4567".to_string()));

        let json = json!({"data": {}});
        assert_eq!(extract_verification_id(&json), None);

        let json = json!({"verificationId": "V123"});
        assert_eq!(extract_verification_id(&json), None);
    }
}
