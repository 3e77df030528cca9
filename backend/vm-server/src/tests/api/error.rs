use crate::ApiError;

use vm_auth::AuthError;
use vm_core::Role;
use vm_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

fn location() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

#[tokio::test]
async fn given_not_found_when_rendered_then_404_with_error_field() {
    let (status, json) = body_json(ApiError::not_found("Task not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, serde_json::json!({"error": "Task not found"}));
}

#[tokio::test]
async fn given_bad_request_when_rendered_then_400() {
    let (status, json) = body_json(ApiError::bad_request("No records provided")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "No records provided");
}

#[tokio::test]
async fn given_missing_token_when_converted_then_401_token_is_missing() {
    let error = ApiError::from(AuthError::MissingToken {
        location: location(),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "Token is missing");
}

#[tokio::test]
async fn given_expired_token_when_converted_then_401_token_has_expired() {
    let error = ApiError::from(AuthError::TokenExpired {
        location: location(),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "Token has expired");
}

#[tokio::test]
async fn given_insufficient_role_when_converted_then_403_admin_access_required() {
    let error = ApiError::from(AuthError::InsufficientRole {
        required: Role::Admin,
        location: location(),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"], "Admin access required");
}

#[tokio::test]
async fn given_invalid_credentials_when_converted_then_401_with_reason() {
    let error = ApiError::from(AuthError::InvalidCredentials {
        message: "Invalid password".into(),
        location: location(),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "Invalid password");
}

#[tokio::test]
async fn given_sqlx_failure_when_converted_then_500_without_driver_details() {
    let error = ApiError::from(DbError::from(sqlx::Error::PoolTimedOut));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Database operation failed");
}

#[tokio::test]
async fn given_volunteer_unique_violation_when_converted_then_409() {
    let error = ApiError::from(DbError::UniqueViolation {
        collection: "volunteers",
        message: "UNIQUE constraint failed".into(),
        location: location(),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"], "Volunteer with this email already exists");
}

#[tokio::test]
async fn given_non_object_body_when_converted_then_400() {
    let core_error = vm_core::into_document(serde_json::json!([1, 2])).unwrap_err();

    let (status, json) = body_json(ApiError::from(core_error)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Request body must be a JSON object");
}

#[test]
fn given_client_errors_when_rendered_then_logged_once_at_warn() {
    let rejected = ApiError::from(AuthError::MissingToken {
        location: location(),
    });
    let forbidden = ApiError::from(AuthError::InsufficientRole {
        required: Role::Admin,
        location: location(),
    });

    assert_eq!(rejected.log_level(), Some(log::Level::Warn));
    assert_eq!(forbidden.log_level(), Some(log::Level::Warn));
    assert_eq!(
        ApiError::not_found("Event not found").log_level(),
        Some(log::Level::Warn)
    );
}

#[test]
fn given_server_error_when_rendered_then_not_logged_again() {
    let error = ApiError::from(DbError::from(sqlx::Error::PoolTimedOut));

    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error.log_level(), None);
}
