use crate::{DocumentId, ID_FIELD, into_document, with_id};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_object_with_client_id_when_converted_then_id_is_dropped() {
    let doc = into_document(json!({"_id": "forged", "name": "Asha"})).unwrap();

    assert!(doc.get(ID_FIELD).is_none());
    assert_eq!(doc["name"], json!("Asha"));
}

#[test]
fn given_non_object_when_converted_then_error() {
    let result = into_document(json!(["a", "b"]));

    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("an array"));
}

#[test]
fn given_document_when_id_attached_then_id_is_string() {
    let id = DocumentId::new();
    let doc = with_id(into_document(json!({"title": "Cleanup"})).unwrap(), &id);

    assert_eq!(doc[ID_FIELD], json!(id.to_string()));
    assert_eq!(doc["title"], json!("Cleanup"));
}
