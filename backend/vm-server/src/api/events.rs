use crate::{ApiJson, ApiResult, AppState, MessageResponse, api::collection};

use vm_core::into_document;
use vm_db::Collection;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Value;

/// GET /api/events
pub async fn list_events(State(state): State<AppState>) -> ApiResult<Json<Vec<Value>>> {
    collection::list(&state.pool, Collection::Events).await
}

/// POST /api/events
pub async fn create_event(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Value>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let document = into_document(body)?;
    collection::create(&state.pool, Collection::Events, document).await
}

/// PUT /api/events/{id}
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<Value>,
) -> ApiResult<Json<Value>> {
    collection::update(&state.pool, Collection::Events, &id, body).await
}

/// DELETE /api/events/{id}
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    collection::delete(&state.pool, Collection::Events, &id).await
}
