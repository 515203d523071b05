//! HTTP routes for attendance endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{check_in, list_attendees, AttendanceHandlers};

/// Creates the attendance router with all endpoints.
pub fn attendance_routes(handlers: AttendanceHandlers) -> Router {
    Router::new()
        .route("/session/:id/checkin", post(check_in))
        .route("/session/:id/attendees", get(list_attendees))
        .with_state(handlers)
}
