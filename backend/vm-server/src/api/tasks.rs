//! Task REST API handlers
//!
//! Admins create and delete tasks; any signed-in user may update one
//! (volunteers mark their own progress).

use crate::{ApiJson, ApiResult, AppState, MessageResponse, api::collection};

use vm_core::into_document;
use vm_db::Collection;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Value;

const DEFAULT_TASK_STATUS: &str = "pending";

/// GET /api/tasks
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Value>>> {
    collection::list(&state.pool, Collection::Tasks).await
}

/// POST /api/tasks
pub async fn create_task(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Value>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let mut document = into_document(body)?;
    document
        .entry("status")
        .or_insert_with(|| Value::from(DEFAULT_TASK_STATUS));

    collection::create(&state.pool, Collection::Tasks, document).await
}

/// PUT /api/tasks/{id}
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<Value>,
) -> ApiResult<Json<Value>> {
    collection::update(&state.pool, Collection::Tasks, &id, body).await
}

/// DELETE /api/tasks/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    collection::delete(&state.pool, Collection::Tasks, &id).await
}
