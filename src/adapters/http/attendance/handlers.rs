//! HTTP handlers for attendance endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::attendance::{
    CheckInCommand, CheckInHandler, ListAttendeesHandler, ListAttendeesQuery,
};
use crate::domain::attendance::AttendanceError;
use crate::domain::foundation::SessionId;

use super::super::session::dto::ErrorResponse;
use super::dto::{AttendeeListResponse, CheckInRequest, CheckInResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AttendanceHandlers {
    check_in_handler: Arc<CheckInHandler>,
    list_handler: Arc<ListAttendeesHandler>,
}

impl AttendanceHandlers {
    pub fn new(check_in_handler: Arc<CheckInHandler>, list_handler: Arc<ListAttendeesHandler>) -> Self {
        Self {
            check_in_handler,
            list_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /session/:id/checkin - Check a student in
pub async fn check_in(
    State(handlers): State<AttendanceHandlers>,
    Path(session_id): Path<String>,
    Json(req): Json<CheckInRequest>,
) -> Response {
    let Ok(session_id) = session_id.parse::<SessionId>() else {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Session", &session_id)),
        )
            .into_response();
    };

    let cmd = CheckInCommand {
        session_id,
        roll_no: req.roll_no,
    };

    match handlers.check_in_handler.handle(cmd).await {
        Ok(result) => {
            let response = CheckInResponse {
                ok: true,
                total: result.count,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_attendance_error(e),
    }
}

/// GET /session/:id/attendees - List attendees in check-in order
pub async fn list_attendees(
    State(handlers): State<AttendanceHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let Ok(session_id) = session_id.parse::<SessionId>() else {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Session", &session_id)),
        )
            .into_response();
    };

    let query = ListAttendeesQuery { session_id };

    match handlers.list_handler.handle(query).await {
        Ok(attendees) => {
            let response: AttendeeListResponse = attendees.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_attendance_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_attendance_error(error: AttendanceError) -> Response {
    match error {
        AttendanceError::SessionNotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Session", &id.to_string())),
        )
            .into_response(),
        AttendanceError::ValidationFailed { field, message } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!(
                "Validation failed for {}: {}",
                field, message
            ))),
        )
            .into_response(),
        AttendanceError::SessionEnded => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Session has ended")),
        )
            .into_response(),
        AttendanceError::DuplicateCheckIn { roll_no } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!(
                "Student '{}' already checked in",
                roll_no
            ))),
        )
            .into_response(),
        AttendanceError::Infrastructure(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal(msg)),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attendance_error_not_found_maps_to_404() {
        let error = AttendanceError::SessionNotFound(SessionId::new());
        let response = handle_attendance_error(error);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn attendance_error_validation_failed_maps_to_400() {
        let error = AttendanceError::validation("roll_no", "bad characters");
        let response = handle_attendance_error(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn attendance_error_session_ended_maps_to_400() {
        let response = handle_attendance_error(AttendanceError::SessionEnded);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn attendance_error_duplicate_maps_to_400() {
        let error = AttendanceError::duplicate_check_in("A-101");
        let response = handle_attendance_error(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
