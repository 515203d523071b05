//! Session aggregate entity.
//!
//! A session is a time-boxed attendance-taking window for one subject.
//! It opens Active, carries a fixed two-hour expiry horizon, and moves to
//! Ended exactly once: explicitly through [`Session::end`] or lazily when
//! an accessor observes that the expiry timestamp has passed.
//!
//! # Ownership
//!
//! Sessions do not hold their check-ins. The attendance ledger is owned
//! by the storage entry that pairs it with the session.

use crate::domain::foundation::{
    DomainError, SessionId, SessionStatus, Timestamp, ValidationError,
};
use serde::{Deserialize, Serialize};

/// Maximum length for the session subject.
pub const MAX_SUBJECT_LENGTH: usize = 25;

/// Fixed lifetime of a session from start to expiry.
pub const SESSION_DURATION_HOURS: i64 = 2;

/// Session aggregate - one attendance-taking window.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `subject` is trimmed, 1-25 characters
/// - `expires_at` is always `started_at` plus two hours
/// - once `status` is Ended it never reverts to Active
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier for this session.
    id: SessionId,

    /// Subject being taught.
    subject: String,

    /// When the session was started.
    started_at: Timestamp,

    /// When the session stops admitting check-ins.
    expires_at: Timestamp,

    /// Current status (Active or Ended).
    status: SessionStatus,
}

impl Session {
    /// Create a new active session for a subject.
    ///
    /// The subject is trimmed before validation and storage. The expiry
    /// timestamp is fixed at creation.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the subject is empty or too long after trimming
    pub fn new(id: SessionId, subject: impl Into<String>) -> Result<Self, DomainError> {
        let subject = Self::validate_subject(subject.into())?;

        let started_at = Timestamp::now();
        Ok(Self {
            id,
            subject,
            started_at,
            expires_at: started_at.plus_hours(SESSION_DURATION_HOURS),
            status: SessionStatus::Active,
        })
    }

    /// Rebuild a session from raw parts (no validation).
    pub fn reconstitute(
        id: SessionId,
        subject: String,
        started_at: Timestamp,
        expires_at: Timestamp,
        status: SessionStatus,
    ) -> Self {
        Self {
            id,
            subject,
            started_at,
            expires_at,
            status,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the subject.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns when the session was started.
    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    /// Returns when the session expires.
    pub fn expires_at(&self) -> &Timestamp {
        &self.expires_at
    }

    /// Returns the current status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns true if the session admits check-ins at `now`.
    ///
    /// This is the single definition of "currently open": the status must
    /// still be Active and the expiry timestamp must not have passed. Every
    /// accessor and the check-in path decide through this function.
    pub fn is_open(&self, now: Timestamp) -> bool {
        self.status.is_active() && now.is_before(&self.expires_at)
    }

    /// Applies lazy expiry: flips Active to Ended once `now` reaches the
    /// expiry timestamp. Returns true if the status changed.
    ///
    /// There is no background timer; callers invoke this on every read and
    /// every check-in attempt.
    pub fn evaluate_expiry(&mut self, now: Timestamp) -> bool {
        if self.status.is_active() && !self.is_open(now) {
            self.status = SessionStatus::Ended;
            return true;
        }
        false
    }

    /// Ends the session explicitly. Ending an already-ended session is a
    /// no-op; the transition is idempotent.
    pub fn end(&mut self) {
        if self.status.can_transition_to(&SessionStatus::Ended) {
            self.status = SessionStatus::Ended;
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Validates and normalizes the subject, returning the trimmed value.
    fn validate_subject(subject: String) -> Result<String, ValidationError> {
        let trimmed = subject.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("subject"));
        }
        let len = trimmed.chars().count();
        if len > MAX_SUBJECT_LENGTH {
            return Err(ValidationError::too_long("subject", MAX_SUBJECT_LENGTH, len));
        }
        Ok(trimmed.to_string())
    }
}
