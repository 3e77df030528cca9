//! Volunteer REST API handlers
//!
//! Volunteer documents double as login records, so every route here is
//! admin-only.

use crate::{ApiJson, ApiResult, AppState, MessageResponse, api::collection};

use vm_core::into_document;
use vm_db::Collection;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Value;

/// GET /api/volunteers
pub async fn list_volunteers(State(state): State<AppState>) -> ApiResult<Json<Vec<Value>>> {
    collection::list(&state.pool, Collection::Volunteers).await
}

/// POST /api/volunteers
///
/// 409 when another volunteer already uses the email.
pub async fn create_volunteer(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Value>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let document = into_document(body)?;
    collection::create(&state.pool, Collection::Volunteers, document).await
}

/// PUT /api/volunteers/{id}
pub async fn update_volunteer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<Value>,
) -> ApiResult<Json<Value>> {
    collection::update(&state.pool, Collection::Volunteers, &id, body).await
}

/// DELETE /api/volunteers/{id}
pub async fn delete_volunteer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    collection::delete(&state.pool, Collection::Volunteers, &id).await
}
