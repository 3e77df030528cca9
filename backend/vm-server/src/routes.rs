use crate::{
    AppState, create_bulk_attendance, create_event, create_task, create_volunteer, delete_event,
    delete_task, delete_volunteer, health, index, list_attendance, list_events, list_tasks,
    list_volunteers, login, logout, me, require_admin, require_auth, update_event, update_task,
    update_volunteer,
};

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    // Any valid token
    let authenticated = Router::new()
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/me", get(me))
        .route("/api/events", get(list_events))
        .route("/api/tasks", get(list_tasks))
        .route("/api/tasks/{id}", put(update_task))
        .route("/api/attendance", get(list_attendance))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    // Admin token only
    let admin = Router::new()
        .route("/api/volunteers", get(list_volunteers).post(create_volunteer))
        .route(
            "/api/volunteers/{id}",
            put(update_volunteer).delete(delete_volunteer),
        )
        .route("/api/events", post(create_event))
        .route("/api/events/{id}", put(update_event).delete(delete_event))
        .route("/api/tasks", post(create_task))
        .route("/api/tasks/{id}", axum::routing::delete(delete_task))
        .route("/api/attendance/bulk", post(create_bulk_attendance))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    let public = Router::new()
        .route("/", get(index::index))
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .route("/api/auth/login", post(login));

    Router::new()
        .merge(public)
        .merge(authenticated)
        .merge(admin)
        .with_state(state)
        // Browser front-end is served from another origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
