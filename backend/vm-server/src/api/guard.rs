//! Access guard
//!
//! `require_auth` admits any valid token; `require_admin` additionally
//! requires the admin role. Both are applied with `route_layer`, verify
//! before the handler runs and hand the decoded [`Claims`] to it through
//! request extensions.

use crate::{ApiError, AppState};

use vm_auth::{AuthError, Claims, Result as AuthErrorResult, TokenService};
use vm_core::Role;

use std::panic::Location;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use error_location::ErrorLocation;

const BEARER_PREFIX: &str = "Bearer ";

/// Token carried in the `Authorization` header.
///
/// The `Bearer ` prefix is optional. `None` when the header is absent or
/// empty; a header that is not visible ASCII yields an empty token, which
/// then fails verification.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?;
    if value.is_empty() {
        return None;
    }

    let raw = value.to_str().unwrap_or_default();
    Some(raw.strip_prefix(BEARER_PREFIX).unwrap_or(raw))
}

/// Verify the request's token and, when `required` is set, its role
#[track_caller]
pub fn authorize(
    tokens: &TokenService,
    headers: &HeaderMap,
    required: Option<Role>,
) -> AuthErrorResult<Claims> {
    let token = bearer_token(headers).ok_or_else(|| AuthError::MissingToken {
        location: ErrorLocation::from(Location::caller()),
    })?;

    let claims = tokens.verify(token)?;

    match required {
        Some(role) if claims.role() != role => Err(AuthError::InsufficientRole {
            required: role,
            location: ErrorLocation::from(Location::caller()),
        }),
        _ => Ok(claims),
    }
}

/// Middleware: any valid token
pub async fn require_auth(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    guard(&state, req, next, None).await
}

/// Middleware: valid admin token
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    guard(&state, req, next, Some(Role::Admin)).await
}

async fn guard(
    state: &AppState,
    mut req: Request,
    next: Next,
    required: Option<Role>,
) -> Result<Response, ApiError> {
    let claims = authorize(&state.tokens, req.headers(), required)?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
