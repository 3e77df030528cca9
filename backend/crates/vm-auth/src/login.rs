//! Credential checks behind `POST /api/auth/login`
//!
//! Both functions are pure: the handler does the volunteer lookup and hands
//! the result in. Passwords are compared as plain strings, and a volunteer
//! record without a `password` field accepts its own email as the password.

use crate::{AdminCredentials, AuthError, Result as AuthErrorResult, Subject};

use vm_core::VolunteerCredential;

use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::Value;

/// Display name written into admin tokens
pub const ADMIN_DISPLAY_NAME: &str = "Admin User";

#[track_caller]
pub fn verify_admin(
    admin: &AdminCredentials,
    email: &str,
    password: &str,
) -> AuthErrorResult<Subject> {
    if email == admin.email && password == admin.password {
        Ok(Subject::admin(email))
    } else {
        Err(AuthError::InvalidCredentials {
            message: "Invalid admin credentials".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

/// Returns the record back when `password` matches it
#[track_caller]
pub fn verify_volunteer(
    credential: Option<VolunteerCredential>,
    password: &str,
) -> AuthErrorResult<VolunteerCredential> {
    let credential = credential.ok_or_else(|| AuthError::InvalidCredentials {
        message: "Volunteer not found".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let matches = match &credential.password {
        None => password == credential.email,
        Some(Value::String(stored)) => password == stored,
        // null or non-string values never equal a submitted password
        Some(_) => false,
    };

    if matches {
        Ok(credential)
    } else {
        Err(AuthError::InvalidCredentials {
            message: "Invalid password".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
