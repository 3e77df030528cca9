//! Attendance REST API handlers
//!
//! Bulk insert also credits volunteer hours: every record with
//! `status == "present"` and a positive numeric `hours` adds that amount to
//! the volunteer named by `volunteerId`.

use crate::{
    ApiError, ApiJson, ApiResult, AppState, BulkAttendanceRequest, BulkAttendanceResponse,
    api::collection,
};

use vm_core::{Document, DocumentId, into_document};
use vm_db::{Collection, DocumentRepository};

use axum::{Json, extract::State, http::StatusCode};
use log::{info, warn};
use serde_json::{Number, Value};

const PRESENT_STATUS: &str = "present";
const HOURS_FIELD: &str = "hours";

/// GET /api/attendance
pub async fn list_attendance(State(state): State<AppState>) -> ApiResult<Json<Vec<Value>>> {
    collection::list(&state.pool, Collection::Attendance).await
}

/// POST /api/attendance/bulk
pub async fn create_bulk_attendance(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<BulkAttendanceRequest>,
) -> ApiResult<(StatusCode, Json<BulkAttendanceResponse>)> {
    let records = request.records.unwrap_or_default();
    if records.is_empty() {
        return Err(ApiError::bad_request("No records provided"));
    }

    let documents = records
        .into_iter()
        .map(into_document)
        .collect::<Result<Vec<Document>, _>>()?;

    let attendance = DocumentRepository::new(state.pool.clone(), Collection::Attendance);
    let ids = attendance.insert_many(&documents).await?;
    info!("Inserted {} attendance records", ids.len());

    let volunteers = DocumentRepository::new(state.pool.clone(), Collection::Volunteers);
    for document in &documents {
        let Some(hours) = credited_hours(document) else {
            continue;
        };

        let Some(volunteer_id) = document
            .get("volunteerId")
            .and_then(Value::as_str)
            .and_then(DocumentId::parse)
        else {
            warn!("Attendance record without a valid volunteerId; hours not credited");
            continue;
        };

        if volunteers
            .increment_field(volunteer_id, HOURS_FIELD, hours)
            .await?
        {
            info!("Credited {} hours to volunteer {}", hours, volunteer_id);
        } else {
            warn!("Volunteer {} not found; hours not credited", volunteer_id);
        }
    }

    Ok((
        StatusCode::CREATED,
        Json(BulkAttendanceResponse {
            message: "Attendance added".to_string(),
            inserted_ids: ids.iter().map(DocumentId::to_string).collect(),
        }),
    ))
}

/// Hours to credit for a record, if it earns any
fn credited_hours(record: &Document) -> Option<&Number> {
    if record.get("status").and_then(Value::as_str) != Some(PRESENT_STATUS) {
        return None;
    }

    match record.get(HOURS_FIELD) {
        Some(Value::Number(hours)) if hours.as_f64().is_some_and(|h| h > 0.0) => Some(hours),
        _ => None,
    }
}
