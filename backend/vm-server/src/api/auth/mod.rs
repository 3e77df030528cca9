pub mod auth;
pub mod login_request;
pub mod login_response;
pub mod me_response;
