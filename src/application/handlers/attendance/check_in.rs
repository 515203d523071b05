//! CheckInHandler - Command handler for student check-ins.

use std::sync::Arc;

use crate::domain::attendance::{AttendanceError, RollNumber};
use crate::domain::foundation::SessionId;
use crate::ports::{CheckInOutcome, SessionStore};

/// Command to check a student in to a session.
#[derive(Debug, Clone)]
pub struct CheckInCommand {
    pub session_id: SessionId,
    pub roll_no: String,
}

/// Result of an admitted check-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInResult {
    /// New total attendee count for the session.
    pub count: u32,
}

/// Handler for check-ins.
///
/// Preconditions are checked in a fixed order: session existence, roll
/// number validity, session still open, no duplicate. The open/duplicate
/// checks and the append run atomically inside the store's per-session
/// critical section.
pub struct CheckInHandler {
    store: Arc<dyn SessionStore>,
}

impl CheckInHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: CheckInCommand) -> Result<CheckInResult, AttendanceError> {
        // 1. Session must exist before input validation is reported
        if !self.store.exists(&cmd.session_id).await? {
            return Err(AttendanceError::SessionNotFound(cmd.session_id));
        }

        // 2. Validate the roll number
        let roll_no = RollNumber::new(cmd.roll_no)?;

        // 3+4. Open check, duplicate check, and append as one atomic step.
        // Sessions are never removed, so the id still resolves here.
        let outcome = self
            .store
            .check_in(&cmd.session_id, roll_no.clone())
            .await?
            .ok_or(AttendanceError::SessionNotFound(cmd.session_id))?;

        match outcome {
            CheckInOutcome::Admitted { count } => Ok(CheckInResult { count }),
            CheckInOutcome::SessionEnded => Err(AttendanceError::SessionEnded),
            CheckInOutcome::Duplicate => {
                Err(AttendanceError::duplicate_check_in(roll_no.as_str()))
            }
        }
    }
}
