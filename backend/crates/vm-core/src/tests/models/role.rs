use crate::Role;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::Volunteer.as_str(), "volunteer");
}

#[test]
fn test_role_rejects_unknown_wire_value() {
    assert!(serde_json::from_str::<Role>("\"Admin\"").is_err());
    assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
}

#[test]
fn test_role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    let parsed: Role = serde_json::from_str("\"volunteer\"").unwrap();
    assert_eq!(parsed, Role::Volunteer);
}
