//! REST API error types
//!
//! Every failure leaves the server as an HTTP status plus a
//! `{"error": "<message>"}` body.

use vm_auth::AuthError;
use vm_core::CoreError;
use vm_db::{Collection, DbError};

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use log::Level;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing, expired or invalid token, or rejected credentials (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Valid token without the required role (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Uniqueness conflict (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Level the response is logged at, if any.
    ///
    /// Server errors are logged with their cause where they are built, so
    /// rendering them logs nothing further.
    pub fn log_level(&self) -> Option<Level> {
        self.status().is_client_error().then_some(Level::Warn)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let Some(level) = self.log_level() {
            log::log!(level, "{}", self);
        }

        let message = match self {
            Self::Unauthorized { message, .. }
            | Self::Forbidden { message, .. }
            | Self::NotFound { message, .. }
            | Self::BadRequest { message, .. }
            | Self::Conflict { message, .. }
            | Self::Internal { message, .. } => message,
        };

        (status, Json(ApiErrorResponse { error: message })).into_response()
    }
}

/// Token and credential failures
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let message = e.client_message();
        let location = ErrorLocation::from(Location::caller());

        match e {
            AuthError::InsufficientRole { .. } => ApiError::Forbidden { message, location },
            AuthError::TokenEncode { .. } => {
                log::error!("Token encoding failed: {}", e);
                ApiError::Internal { message, location }
            }
            _ => ApiError::Unauthorized { message, location },
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::UniqueViolation { collection, .. } => ApiError::Conflict {
                message: conflict_message(collection).to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            _ => {
                // Don't expose internal database details to clients
                log::error!("Database error: {}", e);
                ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

/// Request bodies that are not JSON objects
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let CoreError::InvalidDocument { message, .. } = e;
        log::debug!("Rejected request body: {}", message);

        ApiError::BadRequest {
            message: "Request body must be a JSON object".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Malformed or non-JSON request bodies
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(e: JsonRejection) -> Self {
        log::debug!("Rejected request body: {}", e.body_text());
        ApiError::BadRequest {
            message: "Invalid JSON body".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

fn conflict_message(collection: &str) -> &'static str {
    if collection == Collection::Volunteers.as_str() {
        "Volunteer with this email already exists"
    } else {
        "Document already exists"
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
