//! Login flow and session endpoints
//!
//! Tokens are stateless: logout only acknowledges, the client drops the
//! token.

use crate::{
    ApiError, ApiJson, ApiResult, AppState, CurrentUser, LoginRequest, LoginResponse, LoginUser,
    MeResponse, MessageResponse,
};

use vm_auth::{Subject, verify_admin, verify_volunteer};
use vm_core::{Role, VolunteerCredential};
use vm_db::{Collection, DocumentRepository};

use axum::{Json, extract::State};
use log::{info, warn};

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let (Some(email), Some(password)) = (request.email(), request.password()) else {
        return Err(ApiError::bad_request("Email and password required"));
    };

    if request.is_admin() {
        let subject = verify_admin(&state.admin, email, password).inspect_err(|_| {
            warn!("Admin login failed for {}", email);
        })?;
        let token = state.tokens.issue(subject, Role::Admin)?;

        info!("Admin login: {}", email);
        return Ok(Json(LoginResponse {
            token,
            user_type: Role::Admin,
            user: LoginUser::admin(email),
        }));
    }

    let repo = DocumentRepository::new(state.pool.clone(), Collection::Volunteers);
    let credential = repo
        .find_by_field("email", email)
        .await?
        .map(|stored| VolunteerCredential::from_document(stored.id, &stored.body))
        .transpose()
        .map_err(|e| {
            log::error!("Volunteer record unusable for login: {}", e);
            ApiError::internal("Volunteer record is incomplete")
        })?;

    let credential = verify_volunteer(credential, password).inspect_err(|e| {
        warn!("Volunteer login failed for {}: {}", email, e.client_message());
    })?;
    let token = state
        .tokens
        .issue(Subject::volunteer(&credential), Role::Volunteer)?;

    info!("Volunteer login: {}", email);
    Ok(Json(LoginResponse {
        token,
        user_type: Role::Volunteer,
        user: LoginUser::volunteer(credential),
    }))
}

/// POST /api/auth/logout
pub async fn logout(CurrentUser(claims): CurrentUser) -> Json<MessageResponse> {
    info!("Logout: {}", claims.email);
    Json(MessageResponse::new("Logged out successfully"))
}

/// GET /api/auth/me
pub async fn me(CurrentUser(claims): CurrentUser) -> Json<MeResponse> {
    Json(MeResponse { user: claims })
}
