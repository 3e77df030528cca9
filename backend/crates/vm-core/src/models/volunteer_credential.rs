use crate::{CoreError, Document, DocumentId, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::Value;

const DEFAULT_STATUS: &str = "active";

/// The slice of a volunteer document the login flow reads.
///
/// `password` keeps the raw stored value: a missing field and a field that
/// holds something other than a string are not the same thing at login.
#[derive(Debug, Clone)]
pub struct VolunteerCredential {
    pub id: DocumentId,
    pub email: String,
    pub name: String,
    pub password: Option<Value>,
    pub phone: Option<Value>,
    pub hours: Value,
    pub status: Value,
}

impl VolunteerCredential {
    #[track_caller]
    pub fn from_document(id: DocumentId, document: &Document) -> CoreErrorResult<Self> {
        let email = document
            .get("email")
            .and_then(Value::as_str)
            .ok_or_else(|| CoreError::InvalidDocument {
                message: format!("volunteer {} has no email", id),
                location: ErrorLocation::from(Location::caller()),
            })?
            .to_string();

        let name = document
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| CoreError::InvalidDocument {
                message: format!("volunteer {} has no name", id),
                location: ErrorLocation::from(Location::caller()),
            })?
            .to_string();

        Ok(Self {
            id,
            email,
            name,
            password: document.get("password").cloned(),
            phone: document.get("phone").cloned(),
            hours: document.get("hours").cloned().unwrap_or(Value::from(0)),
            status: document
                .get("status")
                .cloned()
                .unwrap_or_else(|| Value::from(DEFAULT_STATUS)),
        })
    }
}
