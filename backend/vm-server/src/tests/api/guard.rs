use crate::{authorize, bearer_token};

use vm_auth::{AuthError, Subject, TokenService};
use vm_core::Role;

use axum::http::{HeaderMap, HeaderValue, header::AUTHORIZATION};
use googletest::prelude::*;

const SECRET: &[u8] = b"guard-test-secret";

fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}

fn volunteer_token(tokens: &TokenService) -> String {
    let subject = Subject {
        id: Some("6f1c2a8e-4b7d-4e0a-9c55-0d2f8a1b3c4d".into()),
        email: "v@example.com".into(),
        name: "V".into(),
    };
    tokens.issue(subject, Role::Volunteer).unwrap()
}

#[test]
fn given_bearer_header_when_extracted_then_prefix_stripped() {
    let headers = headers_with("Bearer abc.def.ghi");

    assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
}

#[test]
fn given_bare_token_header_when_extracted_then_used_as_is() {
    let headers = headers_with("abc.def.ghi");

    assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
}

#[test]
fn given_no_header_when_extracted_then_none() {
    assert_that!(bearer_token(&HeaderMap::new()), none());
}

#[test]
fn given_no_header_when_authorized_then_missing_token() {
    let tokens = TokenService::with_hs256(SECRET);

    let result = authorize(&tokens, &HeaderMap::new(), None);

    assert!(matches!(result, Err(AuthError::MissingToken { .. })));
}

#[test]
fn given_volunteer_token_when_auth_required_then_claims_returned() {
    let tokens = TokenService::with_hs256(SECRET);
    let headers = headers_with(&format!("Bearer {}", volunteer_token(&tokens)));

    let claims = authorize(&tokens, &headers, None).unwrap();

    assert_eq!(claims.email, "v@example.com");
    assert_eq!(claims.role(), Role::Volunteer);
}

#[test]
fn given_volunteer_token_when_admin_required_then_insufficient_role() {
    let tokens = TokenService::with_hs256(SECRET);
    let headers = headers_with(&format!("Bearer {}", volunteer_token(&tokens)));

    let result = authorize(&tokens, &headers, Some(Role::Admin));

    assert!(matches!(
        result,
        Err(AuthError::InsufficientRole {
            required: Role::Admin,
            ..
        })
    ));
}

#[test]
fn given_admin_token_when_admin_required_then_ok() {
    let tokens = TokenService::with_hs256(SECRET);
    let token = tokens
        .issue(Subject::admin("admin@akshar.com"), Role::Admin)
        .unwrap();
    let headers = headers_with(&token);

    let result = authorize(&tokens, &headers, Some(Role::Admin));

    assert_that!(result, ok(anything()));
}

#[test]
fn given_bearer_prefix_only_when_authorized_then_invalid_token() {
    let tokens = TokenService::with_hs256(SECRET);
    let headers = headers_with("Bearer ");

    let result = authorize(&tokens, &headers, None);

    assert!(matches!(result, Err(AuthError::InvalidToken { .. })));
}
