use crate::{DocumentId, VolunteerCredential, into_document};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_minimal_volunteer_when_read_then_defaults_apply() {
    let doc = into_document(json!({"email": "asha@example.com", "name": "Asha"})).unwrap();

    let credential = VolunteerCredential::from_document(DocumentId::new(), &doc).unwrap();

    assert_eq!(credential.email, "asha@example.com");
    assert_eq!(credential.password, None);
    assert_eq!(credential.phone, None);
    assert_eq!(credential.hours, json!(0));
    assert_eq!(credential.status, json!("active"));
}

#[test]
fn given_full_volunteer_when_read_then_fields_preserved() {
    let id = DocumentId::new();
    let doc = into_document(json!({
        "email": "ravi@example.com",
        "name": "Ravi",
        "password": "secret",
        "phone": "555-0101",
        "hours": 12,
        "status": "inactive"
    }))
    .unwrap();

    let credential = VolunteerCredential::from_document(id, &doc).unwrap();

    assert_eq!(credential.id, id);
    assert_eq!(credential.password, Some(json!("secret")));
    assert_eq!(credential.phone, Some(json!("555-0101")));
    assert_eq!(credential.hours, json!(12));
    assert_eq!(credential.status, json!("inactive"));
}

#[test]
fn given_volunteer_without_name_when_read_then_error() {
    let doc = into_document(json!({"email": "x@example.com"})).unwrap();

    let result = VolunteerCredential::from_document(DocumentId::new(), &doc);

    assert_that!(result, err(anything()));
}
