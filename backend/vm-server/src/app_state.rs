use vm_auth::{AdminCredentials, TokenService};
use vm_config::AuthConfig;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared handler state; cloned per request
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub tokens: Arc<TokenService>,
    pub admin: Arc<AdminCredentials>,
}

impl AppState {
    pub fn new(pool: SqlitePool, tokens: TokenService, admin: AdminCredentials) -> Self {
        Self {
            pool,
            tokens: Arc::new(tokens),
            admin: Arc::new(admin),
        }
    }

    /// Build the token service and admin account from `[auth]`
    pub fn from_auth_config(pool: SqlitePool, auth: &AuthConfig) -> Self {
        Self::new(
            pool,
            TokenService::with_hs256(auth.jwt_secret.as_bytes()),
            AdminCredentials::new(auth.admin_email.clone(), auth.admin_password.clone()),
        )
    }
}
