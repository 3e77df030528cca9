use serde::Deserialize;
use serde_json::Value;

/// Body of `POST /api/auth/login`
///
/// `userType` selects the admin path when it is `"admin"`; anything else,
/// or no value, is a volunteer login. Credentials that are not JSON
/// strings count as missing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub password: Option<Value>,
    #[serde(default)]
    pub user_type: Option<Value>,
}

impl LoginRequest {
    pub fn email(&self) -> Option<&str> {
        non_empty_str(self.email.as_ref())
    }

    pub fn password(&self) -> Option<&str> {
        non_empty_str(self.password.as_ref())
    }

    pub fn is_admin(&self) -> bool {
        self.user_type.as_ref().and_then(Value::as_str) == Some("admin")
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}
