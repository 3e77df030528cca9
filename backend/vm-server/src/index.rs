use axum::Json;
use serde_json::{Value, json};

/// GET / - Service banner with the endpoint map
pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "Volunteer management API is running",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "login": "/api/auth/login",
            "logout": "/api/auth/logout",
            "me": "/api/auth/me",
            "volunteers": "/api/volunteers",
            "events": "/api/events",
            "tasks": "/api/tasks",
            "attendance": "/api/attendance",
        },
    }))
}
