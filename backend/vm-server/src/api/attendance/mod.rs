pub mod attendance;
pub mod bulk_attendance_request;
pub mod bulk_attendance_response;
