//! The dispatch-and-adaptation layer.
//!
//! Callers name a Plaid operation in the path and pass named parameters in
//! either snake_case or camelCase. This module normalizes the parameter
//! bag, binds it into the operation's positional order and invokes the
//! configured client, wrapping every outcome in the uniform envelope.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, RawQuery, State},
    response::{IntoResponse, Response},
};
use plaidbridge_plaid::Operation;
use serde_json::{Map, Value};

use crate::envelope::{ErrorEnvelope, SuccessEnvelope};
use crate::main_lib::AppState;

/// Rewrite a snake/kebab-case identifier to camelCase.
///
/// Every `-` or `_` directly followed by a lowercase letter is dropped and
/// the letter upper-cased; everything else passes through verbatim, so the
/// rewrite is idempotent.
pub(crate) fn snake_to_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '-' || ch == '_' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_lowercase() {
                    chars.next();
                    out.push(next.to_ascii_uppercase());
                    continue;
                }
            }
        }
        out.push(ch);
    }
    out
}

/// Normalize every key of a parameter bag to camelCase, copying values
/// untouched. If two keys normalize to the same name, the later one in
/// iteration order wins.
pub(crate) fn normalize_keys(bag: Map<String, Value>) -> Map<String, Value> {
    bag.into_iter()
        .map(|(key, value)| (snake_to_camel(&key), value))
        .collect()
}

/// Bind a normalized bag into an operation's positional order.
///
/// Produces one value per parameter name, with `Value::Null` standing in
/// for names missing from the bag; the output length always equals the
/// parameter order length.
pub(crate) fn bind_arguments(order: &[&str], bag: &Map<String, Value>) -> Vec<Value> {
    order
        .iter()
        .map(|name| bag.get(*name).cloned().unwrap_or(Value::Null))
        .collect()
}

/// Decode the query string into a flat parameter bag.
fn query_bag(query: Option<&str>) -> Map<String, Value> {
    let mut bag = Map::new();
    if let Some(qs) = query {
        if let Ok(pairs) = serde_urlencoded::from_str::<Vec<(String, String)>>(qs) {
            for (key, value) in pairs {
                bag.insert(key, Value::String(value));
            }
        }
    }
    bag
}

/// Dispatch a single gateway request.
///
/// Three terminal outcomes: unknown operation, unparseable body, or the
/// invocation result. Every failure maps to HTTP 500.
pub async fn invoke_operation(
    State(state): State<Arc<AppState>>,
    Path(function): Path<String>,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Response {
    let Some(op) = Operation::from_name(&function) else {
        return ErrorEnvelope::from_message(format!(
            "A function named {} is not available.",
            function
        ))
        .into_response();
    };

    // A request body takes precedence over the query string; the two are
    // never merged.
    let bag = if !body.is_empty() {
        match serde_json::from_slice::<Map<String, Value>>(&body) {
            Ok(map) => map,
            Err(err) => return ErrorEnvelope::from_message(err.to_string()).into_response(),
        }
    } else {
        query_bag(query.as_deref())
    };

    let bag = normalize_keys(bag);
    let order = op.parameter_order();
    // Zero-arity operations are invoked with no argument, not an empty list.
    let args = if order.is_empty() {
        None
    } else {
        Some(bind_arguments(order, &bag))
    };

    match state.plaid.invoke(op, args).await {
        Ok(json) => SuccessEnvelope::new(json).into_response(),
        Err(err) => {
            tracing::warn!("{} invocation failed: {}", op.name(), err);
            ErrorEnvelope::from_plaid(&err).into_response()
        }
    }
}
