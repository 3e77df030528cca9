use crate::{ApiError, CurrentUser};

use vm_auth::{Claims, Subject};
use vm_core::Role;

use axum::extract::FromRequestParts;
use http::{Request, StatusCode};

fn parts() -> http::request::Parts {
    Request::builder().body(()).unwrap().into_parts().0
}

#[tokio::test]
async fn given_claims_in_extensions_when_extracted_then_current_user() {
    // Given
    let mut parts = parts();
    let claims = Claims::new(Subject::admin("admin@example.com"), Role::Admin, 4_102_444_800);
    parts.extensions.insert(claims.clone());

    // When
    let result = CurrentUser::from_request_parts(&mut parts, &()).await;

    // Then
    let Ok(CurrentUser(extracted)) = result else {
        panic!("expected claims to be extracted");
    };
    assert_eq!(extracted, claims);
}

#[tokio::test]
async fn given_no_claims_when_extracted_then_unauthorized_built_in_extractor() {
    // Given
    let mut parts = parts();

    // When
    let result = CurrentUser::from_request_parts(&mut parts, &()).await;

    // Then
    let Err(error) = result else {
        panic!("expected rejection without claims");
    };
    assert_eq!(error.status(), StatusCode::UNAUTHORIZED);
    assert!(matches!(&error, ApiError::Unauthorized { message, .. } if message == "Token is missing"));
    assert!(error.to_string().contains("current_user.rs"));
}
