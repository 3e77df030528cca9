use vm_core::Role;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing authorization token {location}")]
    MissingToken { location: ErrorLocation },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Role '{required}' required {location}")]
    InsufficientRole {
        required: Role,
        location: ErrorLocation,
    },

    #[error("Invalid credentials: {message} {location}")]
    InvalidCredentials {
        message: String,
        location: ErrorLocation,
    },

    #[error("JWT encode failed: {source} {location}")]
    TokenEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Message safe to return to the client
    pub fn client_message(&self) -> String {
        match self {
            Self::MissingToken { .. } => "Token is missing".to_string(),
            Self::TokenExpired { .. } => "Token has expired".to_string(),
            Self::InvalidToken { .. } => "Invalid token".to_string(),
            Self::InsufficientRole { required, .. } => {
                format!("{} access required", required.label())
            }
            Self::InvalidCredentials { message, .. } => message.clone(),
            Self::TokenEncode { .. } => "Failed to issue token".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
