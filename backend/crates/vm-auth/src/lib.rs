pub mod admin_credentials;
pub mod claims;
pub mod error;
pub mod login;
pub mod subject;
pub mod token_service;

pub use admin_credentials::AdminCredentials;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use login::{ADMIN_DISPLAY_NAME, verify_admin, verify_volunteer};
pub use subject::Subject;
pub use token_service::{DEFAULT_TOKEN_TTL_DAYS, TokenService};
