//! Attendance-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, ValidationError};

/// Errors for check-in and attendee listing operations.
///
/// The four caller-facing failures (not found, validation, ended,
/// duplicate) stay distinct so the HTTP layer can render different
/// messages for each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendanceError {
    /// Session was not found.
    SessionNotFound(SessionId),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Session has ended (explicitly or by expiry).
    SessionEnded,
    /// Roll number already checked in for this session.
    DuplicateCheckIn { roll_no: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl AttendanceError {
    pub fn session_not_found(id: SessionId) -> Self {
        AttendanceError::SessionNotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AttendanceError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn session_ended() -> Self {
        AttendanceError::SessionEnded
    }
    pub fn duplicate_check_in(roll_no: impl Into<String>) -> Self {
        AttendanceError::DuplicateCheckIn {
            roll_no: roll_no.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        AttendanceError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            AttendanceError::SessionNotFound(_) => ErrorCode::SessionNotFound,
            AttendanceError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            AttendanceError::SessionEnded => ErrorCode::SessionEnded,
            AttendanceError::DuplicateCheckIn { .. } => ErrorCode::DuplicateCheckIn,
            AttendanceError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            AttendanceError::SessionNotFound(id) => format!("Session not found: {}", id),
            AttendanceError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            AttendanceError::SessionEnded => "Session has ended".to_string(),
            AttendanceError::DuplicateCheckIn { roll_no } => {
                format!("Student '{}' already checked in", roll_no)
            }
            AttendanceError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for AttendanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AttendanceError {}

impl From<ValidationError> for AttendanceError {
    fn from(err: ValidationError) -> Self {
        AttendanceError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for AttendanceError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::SessionEnded => AttendanceError::SessionEnded,
            ErrorCode::DuplicateCheckIn => {
                let roll_no = err
                    .details
                    .get("roll_no")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string());
                AttendanceError::DuplicateCheckIn { roll_no }
            }
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::TooLong
            | ErrorCode::InvalidFormat => {
                let field = err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string());
                AttendanceError::ValidationFailed {
                    field,
                    message: err.message,
                }
            }
            _ => AttendanceError::Infrastructure(err.to_string()),
        }
    }
}
