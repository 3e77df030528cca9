use crate::DocumentId;

#[test]
fn test_formatted_id_parses_back() {
    let id = DocumentId::new();

    assert_eq!(DocumentId::parse(&id.to_string()), Some(id));
}

#[test]
fn test_garbage_does_not_parse() {
    assert_eq!(DocumentId::parse("not-an-id"), None);
    assert_eq!(DocumentId::parse(""), None);
    assert_eq!(DocumentId::parse("64b7f0c2e1a4b8d9f0123456"), None);
}

#[test]
fn test_uppercase_id_formats_lowercase() {
    let parsed = DocumentId::parse("8D96310E-1E69-4DC5-9529-5C173674AB90").unwrap();

    assert_eq!(parsed.to_string(), "8d96310e-1e69-4dc5-9529-5c173674ab90");
}

#[test]
fn test_new_ids_are_distinct() {
    assert_ne!(DocumentId::new(), DocumentId::new());
}
