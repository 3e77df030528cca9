use vm_core::{Document, DocumentId, with_id};

use serde_json::Value;

/// A document body together with its store key
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: DocumentId,
    pub body: Document,
}

impl StoredDocument {
    pub fn new(id: DocumentId, body: Document) -> Self {
        Self { id, body }
    }

    /// Client representation: the body with `_id` attached
    pub fn into_json(self) -> Value {
        Value::Object(with_id(self.body, &self.id))
    }
}
