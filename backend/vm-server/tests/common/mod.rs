#![allow(dead_code)]

//! Test infrastructure for vm-server API tests

use vm_auth::{AdminCredentials, Subject, TokenService};
use vm_core::{DocumentId, Role, into_document};
use vm_db::{Collection, DocumentRepository};
use vm_server::{AppState, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const ADMIN_EMAIL: &str = "admin@akshar.com";
pub const ADMIN_PASSWORD: &str = "admin123";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(SqliteConnectOptions::new().filename(":memory:"))
        .await
        .expect("Failed to create test database");

    vm_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    AppState::new(
        create_test_pool().await,
        TokenService::with_hs256(TEST_SECRET.as_bytes()),
        AdminCredentials::new(ADMIN_EMAIL, ADMIN_PASSWORD),
    )
}

pub fn app(state: &AppState) -> Router {
    build_router(state.clone())
}

pub fn admin_token(state: &AppState) -> String {
    state
        .tokens
        .issue(Subject::admin(ADMIN_EMAIL), Role::Admin)
        .expect("Failed to issue admin token")
}

pub fn volunteer_token(state: &AppState, id: DocumentId, email: &str) -> String {
    let subject = Subject {
        id: Some(id.to_string()),
        email: email.to_string(),
        name: "Test Volunteer".to_string(),
    };
    state
        .tokens
        .issue(subject, Role::Volunteer)
        .expect("Failed to issue volunteer token")
}

/// Insert a document directly through the repository
pub async fn seed(state: &AppState, collection: Collection, body: Value) -> DocumentId {
    let repo = DocumentRepository::new(state.pool.clone(), collection);
    let document = into_document(body).expect("seed body must be a JSON object");
    repo.insert(document).await.expect("Failed to seed").id
}

pub async fn fetch(state: &AppState, collection: Collection, id: DocumentId) -> Option<Value> {
    let repo = DocumentRepository::new(state.pool.clone(), collection);
    repo.find_by_id(id)
        .await
        .expect("Failed to fetch")
        .map(|doc| doc.into_json())
}

/// Send one request; `body` is sent as JSON when present
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    (status, json)
}
