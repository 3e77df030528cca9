use crate::Subject;

use vm_core::Role;

use serde::{Deserialize, Serialize};

/// Decoded token payload.
///
/// Wire format: `{id?, email, name, userType, exp}`. Admin tokens carry no `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub email: String,
    pub name: String,
    pub user_type: Role,
    /// Expiration timestamp (Unix seconds)
    pub exp: i64,
}

impl Claims {
    pub fn new(subject: Subject, role: Role, exp: i64) -> Self {
        Self {
            id: subject.id,
            email: subject.email,
            name: subject.name,
            user_type: role,
            exp,
        }
    }

    pub fn role(&self) -> Role {
        self.user_type
    }

    pub fn is_admin(&self) -> bool {
        self.user_type == Role::Admin
    }
}
