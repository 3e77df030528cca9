//! CRUD shared by the volunteers, events and tasks handlers

use crate::{ApiError, ApiResult, MessageResponse};

use vm_core::{Document, DocumentId, into_document};
use vm_db::{Collection, DocumentRepository};

use axum::{Json, http::StatusCode};
use log::info;
use serde_json::Value;
use sqlx::SqlitePool;

/// Singular name used in 404 and delete messages
pub fn label(collection: Collection) -> &'static str {
    match collection {
        Collection::Volunteers => "Volunteer",
        Collection::Events => "Event",
        Collection::Tasks => "Task",
        Collection::Attendance => "Attendance record",
    }
}

/// Resolve a path id; ids that cannot name a document are simply not found
#[track_caller]
pub fn parse_id(collection: Collection, id: &str) -> ApiResult<DocumentId> {
    DocumentId::parse(id).ok_or_else(|| not_found(collection))
}

#[track_caller]
fn not_found(collection: Collection) -> ApiError {
    ApiError::not_found(format!("{} not found", label(collection)))
}

pub async fn list(pool: &SqlitePool, collection: Collection) -> ApiResult<Json<Vec<Value>>> {
    let repo = DocumentRepository::new(pool.clone(), collection);
    let documents = repo.find_all().await?;

    Ok(Json(
        documents.into_iter().map(|doc| doc.into_json()).collect(),
    ))
}

pub async fn create(
    pool: &SqlitePool,
    collection: Collection,
    body: Document,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let repo = DocumentRepository::new(pool.clone(), collection);
    let created = repo.insert(body).await?;

    info!("Created {} {}", label(collection), created.id);
    Ok((StatusCode::CREATED, Json(created.into_json())))
}

/// Merge `body` over the stored document and return the result
pub async fn update(
    pool: &SqlitePool,
    collection: Collection,
    id: &str,
    body: Value,
) -> ApiResult<Json<Value>> {
    let document_id = parse_id(collection, id)?;
    let fields = into_document(body)?;

    let repo = DocumentRepository::new(pool.clone(), collection);
    let updated = repo
        .update_fields(document_id, fields)
        .await?
        .ok_or_else(|| not_found(collection))?;

    info!("Updated {} {}", label(collection), document_id);
    Ok(Json(updated.into_json()))
}

pub async fn delete(
    pool: &SqlitePool,
    collection: Collection,
    id: &str,
) -> ApiResult<Json<MessageResponse>> {
    let document_id = parse_id(collection, id)?;

    let repo = DocumentRepository::new(pool.clone(), collection);
    if !repo.delete(document_id).await? {
        return Err(not_found(collection));
    }

    info!("Deleted {} {}", label(collection), document_id);
    Ok(Json(MessageResponse::new(format!(
        "{} {} deleted",
        label(collection),
        id
    ))))
}
