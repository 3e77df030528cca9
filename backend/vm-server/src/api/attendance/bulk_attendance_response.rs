use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BulkAttendanceResponse {
    pub message: String,
    pub inserted_ids: Vec<String>,
}
