//! Session store port.
//!
//! Defines the contract between the application handlers and session
//! storage. One store owns the map from session id to session plus its
//! attendance ledger.
//!
//! # Design
//!
//! - **Atomic per-session operations**: `check_in` runs the lazy-expiry
//!   evaluation, the duplicate check, and the append inside one critical
//!   section for the target session. Two concurrent check-ins with the
//!   same roll number must never both be admitted.
//! - **Lazy expiry everywhere**: every read and every check-in attempt
//!   evaluates expiry before answering, so an expired session is observed
//!   as Ended without a background timer.
//! - **Cross-session independence**: operations on different sessions must
//!   not serialize against each other.

use crate::domain::attendance::{AttendeeRecord, RollNumber};
use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::Session;
use async_trait::async_trait;

/// Point-in-time view of a session and its attendee list, taken inside
/// the session's critical section so the two are never torn.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub session: Session,
    pub attendees: Vec<AttendeeRecord>,
}

impl SessionSnapshot {
    /// Returns the attendee count for this snapshot.
    pub fn attendees_count(&self) -> u32 {
        self.attendees.len() as u32
    }
}

/// Outcome of an atomic check-in attempt on an existing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckInOutcome {
    /// Admitted; carries the new total attendee count.
    Admitted { count: u32 },
    /// Rejected: the session is ended (explicitly or by expiry).
    SessionEnded,
    /// Rejected: the roll number is already recorded (case-insensitive).
    Duplicate,
}

/// Storage port for sessions and their attendance ledgers.
///
/// Implementations must ensure:
/// - per-session serialization of mutations and status flips
/// - lazy-expiry evaluation on every read and check-in
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Insert a freshly started session with an empty ledger.
    ///
    /// # Errors
    ///
    /// - `InternalError` if the id is already present (the randomized id
    ///   space makes this negligible in practice)
    async fn insert(&self, session: Session) -> Result<(), DomainError>;

    /// Fetch a session and its attendees, applying lazy expiry first.
    ///
    /// Returns `None` if not found.
    async fn get(&self, id: &SessionId) -> Result<Option<SessionSnapshot>, DomainError>;

    /// Check if a session exists.
    async fn exists(&self, id: &SessionId) -> Result<bool, DomainError>;

    /// End a session idempotently.
    ///
    /// Returns `false` if the session does not exist, `true` otherwise
    /// (including when it was already ended).
    async fn end(&self, id: &SessionId) -> Result<bool, DomainError>;

    /// Attempt a check-in as one atomic admit-or-reject step.
    ///
    /// Returns `None` if the session does not exist.
    async fn check_in(
        &self,
        id: &SessionId,
        roll_no: RollNumber,
    ) -> Result<Option<CheckInOutcome>, DomainError>;

    /// Fetch the attendee list in check-in order, applying lazy expiry.
    ///
    /// Returns `None` if the session does not exist.
    async fn attendees(&self, id: &SessionId) -> Result<Option<Vec<AttendeeRecord>>, DomainError>;
}
