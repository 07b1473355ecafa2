//! Shared helpers for HTTP-level tests.
//!
//! Every test gets its own application backed by a private in-memory
//! SQLite database with migrations applied.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use voll_med_api::api::{create_router, AppState};
use voll_med_api::config::Config;
use voll_med_api::infra::Database;

/// Response pieces the tests assert on
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }
}

pub async fn test_app() -> Router {
    test_app_with_database().await.0
}

/// App plus a handle on its database, for tests that tamper with it
pub async fn test_app_with_database() -> (Router, Arc<Database>) {
    let config = Config::with_database_url("sqlite::memory:");
    let db = Arc::new(
        Database::connect(&config)
            .await
            .expect("in-memory database should start"),
    );

    (create_router(AppState::from_database(db.clone())), db)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}

/// A valid registration payload
pub fn doctor_payload(name: &str, registration: &str) -> Value {
    json!({
        "name": name,
        "email": format!("{}@voll.med", registration),
        "phone": "61999998888",
        "registration": registration,
        "specialty": "CARDIOLOGY",
        "address": {
            "street": "Rua das Flores",
            "number": "100",
            "district": "Centro",
            "city": "Brasilia",
            "state": "DF",
            "zip_code": "70000000",
            "complement": "Sala 2"
        }
    })
}

/// Register a doctor and return its id
pub async fn create_doctor(app: &Router, name: &str, registration: &str) -> i64 {
    let response = send(
        app,
        Method::POST,
        "/medicos",
        Some(doctor_payload(name, registration)),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);

    response.json()["id"].as_i64().expect("id in response")
}
