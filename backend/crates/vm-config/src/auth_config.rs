use crate::{
    ConfigError, ConfigErrorResult, ConfigSection, DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD,
    DEFAULT_JWT_SECRET,
};

use log::warn;
use serde::Deserialize;

/// Token signing secret and the single configured admin account
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub admin_email: String,
    pub admin_password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from(DEFAULT_JWT_SECRET),
            admin_email: String::from(DEFAULT_ADMIN_EMAIL),
            admin_password: String::from(DEFAULT_ADMIN_PASSWORD),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::invalid(ConfigSection::Auth, "jwt_secret", "cannot be empty"));
        }

        if self.admin_email.trim().is_empty() {
            return Err(ConfigError::invalid(ConfigSection::Auth, "admin_email", "cannot be empty"));
        }

        if self.admin_password.is_empty() {
            return Err(ConfigError::invalid(ConfigSection::Auth, "admin_password", "cannot be empty"));
        }

        if self.uses_default_secret() {
            warn!("auth.jwt_secret is the built-in default; set VM_AUTH_JWT_SECRET");
        }

        if self.uses_default_admin_password() {
            warn!("auth.admin_password is the built-in default; set VM_AUTH_ADMIN_PASSWORD");
        }

        Ok(())
    }

    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }

    pub fn uses_default_admin_password(&self) -> bool {
        self.admin_password == DEFAULT_ADMIN_PASSWORD
    }
}
