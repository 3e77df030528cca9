use vm_auth::ADMIN_DISPLAY_NAME;
use vm_core::{Role, VolunteerCredential};

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user_type: Role,
    pub user: LoginUser,
}

/// Profile returned next to the token
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum LoginUser {
    #[serde(rename_all = "camelCase")]
    Admin {
        email: String,
        name: String,
        user_type: Role,
    },
    #[serde(rename_all = "camelCase")]
    Volunteer {
        id: String,
        email: String,
        name: String,
        phone: Option<Value>,
        hours: Value,
        status: Value,
        user_type: Role,
    },
}

impl LoginUser {
    pub fn admin(email: impl Into<String>) -> Self {
        Self::Admin {
            email: email.into(),
            name: ADMIN_DISPLAY_NAME.to_string(),
            user_type: Role::Admin,
        }
    }

    pub fn volunteer(credential: VolunteerCredential) -> Self {
        Self::Volunteer {
            id: credential.id.to_string(),
            email: credential.email,
            name: credential.name,
            phone: credential.phone,
            hours: credential.hours,
            status: credential.status,
            user_type: Role::Volunteer,
        }
    }
}
