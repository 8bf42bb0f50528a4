use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request},
};
use plaidbridge_plaid::{ApiErrorBody, Operation, PlaidApi, PlaidError};
use plaidbridge_server::{api::app_router, config::Config, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

enum StubBehavior {
    Ok(Value),
    ApiError(ApiErrorBody),
}

/// PlaidApi stub that records every invocation and returns a canned result.
struct StubPlaid {
    behavior: StubBehavior,
    calls: Mutex<Vec<(Operation, Option<Vec<Value>>)>>,
}

impl StubPlaid {
    fn ok(result: Value) -> Arc<Self> {
        Arc::new(Self {
            behavior: StubBehavior::Ok(result),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn api_error(body: ApiErrorBody) -> Arc<Self> {
        Arc::new(Self {
            behavior: StubBehavior::ApiError(body),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<(Operation, Option<Vec<Value>>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlaidApi for StubPlaid {
    async fn invoke(&self, op: Operation, args: Option<Vec<Value>>) -> Result<Value, PlaidError> {
        self.calls.lock().unwrap().push((op, args));
        match &self.behavior {
            StubBehavior::Ok(value) => Ok(value.clone()),
            StubBehavior::ApiError(body) => Err(PlaidError::Api(body.clone())),
        }
    }
}

fn build_app(stub: Arc<StubPlaid>) -> axum::Router {
    let config = Config::from_env();
    let state = Arc::new(AppState { plaid: stub });
    app_router(state, &config)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn get_transactions_binds_snake_case_parameters() {
    let stub = StubPlaid::ok(json!({"transactions": []}));
    let app = build_app(stub.clone());

    let request_body = json!({
        "access_token": "tok1",
        "startDate": "2020-01-01",
        "endDate": "2020-01-31",
    });
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/plaid/getTransactions")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(request_body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        body_json(response).await,
        json!({"status": 200, "json": {"transactions": []}})
    );

    let calls = stub.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, Operation::GetTransactions);
    // Missing `options` binds as null; the argument list length always
    // matches the operation's parameter order.
    assert_eq!(
        calls[0].1,
        Some(vec![
            json!("tok1"),
            json!("2020-01-01"),
            json!("2020-01-31"),
            Value::Null,
        ])
    );
}

#[tokio::test]
async fn unknown_function_returns_error_envelope_without_invoking() {
    let stub = StubPlaid::ok(json!({}));
    let app = build_app(stub.clone());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/plaid/doesNotExist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    assert_eq!(
        body_json(response).await,
        json!({
            "code": "",
            "type": "",
            "message": "A function named doesNotExist is not available.",
            "displayMessage": "Unknown error, please try again later.",
            "stack": null,
        })
    );
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn malformed_body_surfaces_the_parser_message() {
    let stub = StubPlaid::ok(json!({}));
    let app = build_app(stub.clone());

    let raw = b"{not valid json";
    let expected = serde_json::from_slice::<serde_json::Map<String, Value>>(raw)
        .unwrap_err()
        .to_string();

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/plaid/getItem")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(raw.to_vec()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body = body_json(response).await;
    assert_eq!(body["message"], json!(expected));
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn zero_argument_operation_is_invoked_with_no_argument() {
    let stub = StubPlaid::ok(json!({"categories": []}));
    let app = build_app(stub.clone());

    // Supplied parameters are irrelevant for a zero-arity operation.
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/plaid/getCategories")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"access_token":"tok"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let calls = stub.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, Operation::GetCategories);
    assert_eq!(calls[0].1, None);
}

#[tokio::test]
async fn query_string_is_the_parameter_source_when_body_is_absent() {
    let stub = StubPlaid::ok(json!({"item": {}}));
    let app = build_app(stub.clone());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/plaid/getItem?access_token=tok-query")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let calls = stub.calls();
    assert_eq!(calls[0].0, Operation::GetItem);
    assert_eq!(calls[0].1, Some(vec![json!("tok-query")]));
}

#[tokio::test]
async fn upstream_error_fields_flow_into_the_envelope() {
    let stub = StubPlaid::api_error(ApiErrorBody {
        error_type: "INVALID_INPUT".to_string(),
        error_code: "INVALID_ACCESS_TOKEN".to_string(),
        error_message: "could not find matching access token".to_string(),
        display_message: None,
        request_id: Some("req-1".to_string()),
    });
    let app = build_app(stub.clone());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/plaid/getAccounts?access_token=bad")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body = body_json(response).await;
    assert_eq!(body["code"], json!("INVALID_ACCESS_TOKEN"));
    assert_eq!(body["type"], json!("INVALID_INPUT"));
    assert_eq!(body["message"], json!("could not find matching access token"));
    assert_eq!(
        body["displayMessage"],
        json!("Unknown error, please try again later.")
    );
}

#[tokio::test]
async fn healthz_works() {
    let stub = StubPlaid::ok(json!({}));
    let app = build_app(stub);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}
