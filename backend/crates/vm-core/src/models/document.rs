use crate::{CoreError, DocumentId, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::{Map, Value};

/// Schemaless JSON object stored in a collection
pub type Document = Map<String, Value>;

/// Key under which the identifier is exposed to clients
pub const ID_FIELD: &str = "_id";

/// Attach the string form of `id` as `_id`
pub fn with_id(mut document: Document, id: &DocumentId) -> Document {
    document.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
    document
}

/// Accept a request body as a document body.
///
/// The body must be a JSON object. A client-supplied `_id` is dropped so the
/// store stays the only source of identifiers.
#[track_caller]
pub fn into_document(value: Value) -> CoreErrorResult<Document> {
    match value {
        Value::Object(mut map) => {
            map.remove(ID_FIELD);
            Ok(map)
        }
        other => Err(CoreError::InvalidDocument {
            message: format!("expected a JSON object, got {}", json_kind(&other)),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
