use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use test_utils::{builder::TestBuilder, context::TestContext, factory};

use crate::server::{router, state::AppState, validation::ValidationRules};

mod media;

/// Builds the application on a fresh in-memory database.
async fn setup() -> (TestContext, Router) {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();
    let app = router::app(AppState::new(db, ValidationRules::new()));

    (test, app)
}

/// Sends a request and returns the status with the parsed JSON body.
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    send_raw(app, method, uri, body.map(|body| body.to_string())).await
}

/// Like [`send`], but with the request body passed through unparsed.
async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<String>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// Field names of every violation in a validation error body.
fn violation_fields(body: &Value) -> Vec<&str> {
    body["violations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["field"].as_str().unwrap())
        .collect()
}

fn register_payload(serial_number: &str, weight_limit: f64) -> Value {
    json!({
        "serialNumber": serial_number,
        "model": "heavyweight",
        "weightLimit": weight_limit,
        "batteryCapacity": 100
    })
}

fn load_payload(serial_number: &str, weight: f64) -> Value {
    json!({
        "droneSerialNumber": serial_number,
        "medicationName": "strepsils",
        "medicationCode": "MED_2022",
        "medicationWeight": weight
    })
}

/// Tests that the OpenAPI document is served and lists the drone routes.
///
/// Expected: 200 with the medications path present
#[tokio::test]
async fn serves_openapi_document() {
    let (_test, app) = setup().await;

    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/drones/{drone_id}/medications"].is_object());
    assert!(body["paths"]["/api/media"].is_object());
}

/// Tests that the loading endpoint documents both shapes of its 400 body.
///
/// Expected: the 400 schema refers to `BadRequestDto`, a oneOf of the two error bodies
#[tokio::test]
async fn documents_load_bad_request_body() {
    let (_test, app) = setup().await;

    let (_, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

    let bad_request = &body["paths"]["/api/drones/{drone_id}/medications"]["post"]["responses"]["400"];
    assert_eq!(
        bad_request["content"]["application/json"]["schema"]["$ref"],
        "#/components/schemas/BadRequestDto"
    );
    let variants = &body["components"]["schemas"]["BadRequestDto"]["oneOf"];
    assert_eq!(variants.as_array().unwrap().len(), 2);
    let variants = variants.to_string();
    assert!(variants.contains("#/components/schemas/ValidationErrorDto"));
    assert!(variants.contains("#/components/schemas/ErrorDto"));
}
