//! Axum extractor for the caller's verified claims

use crate::ApiError;

use vm_auth::Claims;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Claims placed in request extensions by the auth middleware.
///
/// Only valid on routes behind `require_auth` or `require_admin`.
pub struct CurrentUser(pub Claims);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let claims = parts.extensions.get::<Claims>().cloned();

        async move {
            claims
                .map(CurrentUser)
                .ok_or_else(|| ApiError::unauthorized("Token is missing"))
        }
    }
}
