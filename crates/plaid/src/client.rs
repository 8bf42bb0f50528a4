//! Plaid API client.
//!
//! [`PlaidApi`] is the invocation seam the HTTP gateway dispatches through;
//! [`PlaidClient`] is the reqwest-backed implementation that posts to the
//! environment's REST endpoint with credentials injected into every body.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde_json::{Map, Value};

use crate::environment::Environment;
use crate::error::{ApiErrorBody, PlaidError};
use crate::operations::Operation;

/// Plaid API credentials, read once from configuration.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub client_id: String,
    pub secret: String,
    /// Legacy public key credential. May be empty; never sent on the wire.
    pub public_key: String,
}

/// Invocation seam for Plaid operations.
///
/// `args` is `None` for a zero-argument call and otherwise holds exactly one
/// value per entry of the operation's parameter order, with `Value::Null`
/// standing in for parameters the caller did not supply. The `None` vs.
/// `Some` distinction is part of the contract: zero-arity operations are
/// invoked with no argument, never with an empty list.
#[async_trait]
pub trait PlaidApi: Send + Sync {
    async fn invoke(&self, op: Operation, args: Option<Vec<Value>>) -> Result<Value, PlaidError>;
}

/// Reqwest-backed Plaid client.
pub struct PlaidClient {
    http: Client,
    credentials: Credentials,
    environment: Environment,
}

impl PlaidClient {
    pub fn new(credentials: Credentials, environment: Environment) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            credentials,
            environment,
        }
    }

    /// Build the request body for an operation.
    ///
    /// Positional arguments are zipped back with their parameter names and
    /// written as snake_case wire fields; null arguments are omitted, which
    /// is how the legacy client serialized absent optional parameters.
    fn request_body(&self, op: Operation, args: Option<&[Value]>) -> Map<String, Value> {
        let mut body = Map::new();
        body.insert(
            "client_id".to_string(),
            Value::String(self.credentials.client_id.clone()),
        );
        body.insert(
            "secret".to_string(),
            Value::String(self.credentials.secret.clone()),
        );
        if let Some(args) = args {
            for (name, value) in op.parameter_order().iter().zip(args) {
                if value.is_null() {
                    continue;
                }
                body.insert(wire_field(name), value.clone());
            }
        }
        body
    }
}

/// Convert a camelCase parameter name to its snake_case wire field.
fn wire_field(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[async_trait]
impl PlaidApi for PlaidClient {
    async fn invoke(&self, op: Operation, args: Option<Vec<Value>>) -> Result<Value, PlaidError> {
        let url = format!("{}{}", self.environment.base_url(), op.endpoint());
        let body = self.request_body(op, args.as_deref());

        debug!("POST {} ({})", op.endpoint(), op.name());

        let response = self
            .http
            .post(&url)
            .json(&Value::Object(body))
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            return serde_json::from_str(&text).map_err(|e| PlaidError::UnexpectedResponse {
                status: status.as_u16(),
                body: format!("invalid JSON: {}", e),
            });
        }

        match serde_json::from_str::<ApiErrorBody>(&text) {
            Ok(api) => {
                warn!(
                    "{} failed: {}/{} (HTTP {})",
                    op.name(),
                    api.error_type,
                    api.error_code,
                    status
                );
                Err(PlaidError::Api(api))
            }
            Err(_) => Err(PlaidError::UnexpectedResponse {
                status: status.as_u16(),
                body: text,
            }),
        }
    }
}
