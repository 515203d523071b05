//! HTTP DTOs for session endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::SessionStatus;
use crate::domain::session::Session;
use crate::ports::SessionSnapshot;

use super::super::attendance::dto::AttendeeResponse;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to start a new session.
#[derive(Debug, Clone, Deserialize)]
pub struct StartSessionRequest {
    pub subject: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for a freshly started session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStartedResponse {
    pub session_id: String,
    pub subject: String,
    pub started_at: String,
    pub expires_at: String,
}

impl From<&Session> for SessionStartedResponse {
    fn from(session: &Session) -> Self {
        Self {
            session_id: session.id().to_string(),
            subject: session.subject().to_string(),
            started_at: session.started_at().to_rfc3339(),
            expires_at: session.expires_at().to_rfc3339(),
        }
    }
}

/// Full session view: status plus the current attendee list.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatusResponse {
    pub status: SessionStatus,
    pub subject: String,
    pub started_at: String,
    pub expires_at: String,
    pub attendees_count: u32,
    pub attendees: Vec<AttendeeResponse>,
}

impl From<SessionSnapshot> for SessionStatusResponse {
    fn from(snapshot: SessionSnapshot) -> Self {
        Self {
            status: snapshot.session.status(),
            subject: snapshot.session.subject().to_string(),
            started_at: snapshot.session.started_at().to_rfc3339(),
            expires_at: snapshot.session.expires_at().to_rfc3339(),
            attendees_count: snapshot.attendees_count(),
            attendees: snapshot.attendees.iter().map(Into::into).collect(),
        }
    }
}

/// Response for the end-session command.
#[derive(Debug, Clone, Serialize)]
pub struct EndSessionResponse {
    pub ok: bool,
}

/// Error body shared by all endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource, id),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}
