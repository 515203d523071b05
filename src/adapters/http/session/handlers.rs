//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::session::{
    EndSessionCommand, EndSessionHandler, GetSessionHandler, GetSessionQuery, StartSessionCommand,
    StartSessionHandler,
};
use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;

use super::dto::{
    EndSessionResponse, ErrorResponse, SessionStartedResponse, SessionStatusResponse,
    StartSessionRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SessionHandlers {
    start_handler: Arc<StartSessionHandler>,
    get_handler: Arc<GetSessionHandler>,
    end_handler: Arc<EndSessionHandler>,
}

impl SessionHandlers {
    pub fn new(
        start_handler: Arc<StartSessionHandler>,
        get_handler: Arc<GetSessionHandler>,
        end_handler: Arc<EndSessionHandler>,
    ) -> Self {
        Self {
            start_handler,
            get_handler,
            end_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /session/start - Start a new attendance session
pub async fn start_session(
    State(handlers): State<SessionHandlers>,
    Json(req): Json<StartSessionRequest>,
) -> Response {
    let cmd = StartSessionCommand {
        subject: req.subject,
    };

    match handlers.start_handler.handle(cmd).await {
        Ok(result) => {
            let response = SessionStartedResponse::from(&result.session);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// GET /session/:id - Get session status and attendee list
pub async fn get_session(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let Ok(session_id) = session_id.parse::<SessionId>() else {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Session", &session_id)),
        )
            .into_response();
    };

    let query = GetSessionQuery { session_id };

    match handlers.get_handler.handle(query).await {
        Ok(snapshot) => {
            let response: SessionStatusResponse = snapshot.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// POST /session/:id/end - End a session (idempotent)
pub async fn end_session(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let Ok(session_id) = session_id.parse::<SessionId>() else {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Session", &session_id)),
        )
            .into_response();
    };

    let cmd = EndSessionCommand { session_id };

    match handlers.end_handler.handle(cmd).await {
        Ok(()) => {
            let response = EndSessionResponse { ok: true };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_session_error(error: SessionError) -> Response {
    match error {
        SessionError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Session", &id.to_string())),
        )
            .into_response(),
        SessionError::ValidationFailed { field, message } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!(
                "Validation failed for {}: {}",
                field, message
            ))),
        )
            .into_response(),
        SessionError::Infrastructure(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal(msg)),
        )
            .into_response(),
    }
}
