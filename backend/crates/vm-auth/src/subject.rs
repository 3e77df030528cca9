use crate::ADMIN_DISPLAY_NAME;

use vm_core::VolunteerCredential;

/// Identity fields written into a token at login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    /// Database id, volunteers only
    pub id: Option<String>,
    pub email: String,
    pub name: String,
}

impl Subject {
    pub fn admin(email: impl Into<String>) -> Self {
        Self {
            id: None,
            email: email.into(),
            name: ADMIN_DISPLAY_NAME.to_string(),
        }
    }

    pub fn volunteer(credential: &VolunteerCredential) -> Self {
        Self {
            id: Some(credential.id.to_string()),
            email: credential.email.clone(),
            name: credential.name.clone(),
        }
    }
}
