#![allow(dead_code)]

mod test_db;

pub use test_db::{create_file_test_pool, create_test_pool};

use vm_core::{Document, into_document};

use serde_json::Value;

/// Build a document body from a `json!` literal
pub fn doc(value: Value) -> Document {
    into_document(value).expect("test body must be a JSON object")
}
