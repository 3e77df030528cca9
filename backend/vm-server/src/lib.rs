pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod index;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    attendance::{
        attendance::{create_bulk_attendance, list_attendance},
        bulk_attendance_request::BulkAttendanceRequest,
        bulk_attendance_response::BulkAttendanceResponse,
    },
    auth::{
        auth::{login, logout, me},
        login_request::LoginRequest,
        login_response::{LoginResponse, LoginUser},
        me_response::MeResponse,
    },
    error::ApiError,
    error::ApiErrorResponse,
    error::Result as ApiResult,
    events::{create_event, delete_event, list_events, update_event},
    extractors::api_json::ApiJson,
    extractors::current_user::CurrentUser,
    guard::{authorize, bearer_token, require_admin, require_auth},
    message_response::MessageResponse,
    tasks::{create_task, delete_task, list_tasks, update_task},
    volunteers::{create_volunteer, delete_volunteer, list_volunteers, update_volunteer},
};
pub use app_state::AppState;
pub use routes::build_router;
