use serde::Deserialize;
use serde_json::Value;

/// Body of `POST /api/attendance/bulk`
#[derive(Debug, Deserialize)]
pub struct BulkAttendanceRequest {
    #[serde(default)]
    pub records: Option<Vec<Value>>,
}
