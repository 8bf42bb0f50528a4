//! Error types for Plaid API calls.

use serde::Deserialize;
use thiserror::Error;

/// Structured error payload Plaid returns alongside non-2xx statuses.
///
/// `error_type`, `error_code` and `error_message` are always present in a
/// real Plaid error body; a non-2xx response that lacks them is treated as
/// [`PlaidError::UnexpectedResponse`] instead.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error_type: String,
    pub error_code: String,
    pub error_message: String,
    /// User-facing text; Plaid sends `null` for most error codes.
    #[serde(default)]
    pub display_message: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
}

/// Errors that can occur when invoking a Plaid operation.
#[derive(Error, Debug)]
pub enum PlaidError {
    /// The upstream API rejected the call with a structured error body.
    #[error("{} ({}/{})", .0.error_message, .0.error_type, .0.error_code)]
    Api(ApiErrorBody),

    /// Transport-level failure talking to the upstream API.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response without a parseable Plaid error body, or a 2xx
    /// response that was not valid JSON.
    #[error("Unexpected response ({status}): {body}")]
    UnexpectedResponse { status: u16, body: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_leads_with_message() {
        let err = PlaidError::Api(ApiErrorBody {
            error_type: "INVALID_INPUT".to_string(),
            error_code: "INVALID_ACCESS_TOKEN".to_string(),
            error_message: "could not find matching access token".to_string(),
            display_message: None,
            request_id: Some("qwerty".to_string()),
        });
        assert_eq!(
            format!("{}", err),
            "could not find matching access token (INVALID_INPUT/INVALID_ACCESS_TOKEN)"
        );
    }

    #[test]
    fn test_error_body_requires_plaid_fields() {
        // An arbitrary JSON object must not masquerade as a Plaid error.
        assert!(serde_json::from_str::<ApiErrorBody>("{}").is_err());
        assert!(serde_json::from_str::<ApiErrorBody>(
            r#"{"error_type":"API_ERROR","error_code":"INTERNAL_SERVER_ERROR","error_message":"bad"}"#
        )
        .is_ok());
    }
}
