//! The uniform response envelope.
//!
//! Every request resolves to one of two fixed JSON shapes: a success body
//! wrapping the raw upstream result, or an error body carrying the provider
//! error fields with documented fallbacks. All failures return HTTP 500,
//! whatever their origin.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use plaidbridge_plaid::PlaidError;
use serde::Serialize;
use serde_json::Value;

const FALLBACK_DISPLAY_MESSAGE: &str = "Unknown error, please try again later.";

/// Success body: `{"status": 200, "json": <result>}`.
#[derive(Serialize)]
pub struct SuccessEnvelope {
    pub status: u16,
    pub json: Value,
}

impl SuccessEnvelope {
    pub fn new(json: Value) -> Self {
        Self { status: 200, json }
    }
}

impl IntoResponse for SuccessEnvelope {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Error body: `{"code", "type", "message", "displayMessage", "stack"}`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub code: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub display_message: String,
    /// The error's cause chain, one frame per line; null when the error
    /// carries none.
    pub stack: Option<String>,
}

impl ErrorEnvelope {
    /// Envelope for a gateway-side failure (unknown operation, unparseable
    /// body). Provider fields default to empty strings.
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            code: String::new(),
            kind: String::new(),
            message: message.into(),
            display_message: FALLBACK_DISPLAY_MESSAGE.to_string(),
            stack: None,
        }
    }

    /// Envelope for a failed invocation, preserving the provider error
    /// fields when the upstream sent them.
    pub fn from_plaid(err: &PlaidError) -> Self {
        match err {
            PlaidError::Api(body) => Self {
                code: body.error_code.clone(),
                kind: body.error_type.clone(),
                message: body.error_message.clone(),
                display_message: body
                    .display_message
                    .clone()
                    .unwrap_or_else(|| FALLBACK_DISPLAY_MESSAGE.to_string()),
                stack: render_stack(err),
            },
            _ => Self {
                code: String::new(),
                kind: String::new(),
                message: err.to_string(),
                display_message: FALLBACK_DISPLAY_MESSAGE.to_string(),
                stack: render_stack(err),
            },
        }
    }
}

impl IntoResponse for ErrorEnvelope {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self)).into_response()
    }
}

/// Render an error and its cause chain, one line per frame.
fn render_stack(err: &dyn std::error::Error) -> Option<String> {
    let mut frames = vec![err.to_string()];
    let mut current = err.source();
    while let Some(cause) = current {
        frames.push(cause.to_string());
        current = cause.source();
    }
    Some(frames.join("\n"))
}

#[cfg(test)]
mod tests {
    use plaidbridge_plaid::ApiErrorBody;
    use serde_json::json;

    use super::*;

    fn api_error(display_message: Option<&str>) -> PlaidError {
        PlaidError::Api(ApiErrorBody {
            error_type: "ITEM_ERROR".to_string(),
            error_code: "ITEM_LOGIN_REQUIRED".to_string(),
            error_message: "the login details of this item have changed".to_string(),
            display_message: display_message.map(str::to_string),
            request_id: None,
        })
    }

    #[test]
    fn test_success_envelope_shape() {
        let body = serde_json::to_value(SuccessEnvelope::new(json!({"accounts": []}))).unwrap();
        assert_eq!(body, json!({"status": 200, "json": {"accounts": []}}));
    }

    #[test]
    fn test_api_error_fields_are_preserved() {
        let envelope = ErrorEnvelope::from_plaid(&api_error(Some("Please reconnect your bank.")));
        assert_eq!(envelope.code, "ITEM_LOGIN_REQUIRED");
        assert_eq!(envelope.kind, "ITEM_ERROR");
        assert_eq!(envelope.message, "the login details of this item have changed");
        assert_eq!(envelope.display_message, "Please reconnect your bank.");
    }

    #[test]
    fn test_missing_display_message_falls_back() {
        let envelope = ErrorEnvelope::from_plaid(&api_error(None));
        assert_eq!(envelope.display_message, FALLBACK_DISPLAY_MESSAGE);
    }

    #[test]
    fn test_gateway_failure_defaults_provider_fields() {
        let envelope = ErrorEnvelope::from_message("A function named foo is not available.");
        let body = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            body,
            json!({
                "code": "",
                "type": "",
                "message": "A function named foo is not available.",
                "displayMessage": FALLBACK_DISPLAY_MESSAGE,
                "stack": null,
            })
        );
    }
}
