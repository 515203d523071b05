//! In-memory session store adapter.
//!
//! Process-lifetime storage for sessions and their attendance ledgers.
//! There is no persistence and no teardown beyond process exit.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::attendance::{AttendanceLedger, AttendeeRecord, RollNumber};
use crate::domain::foundation::{DomainError, ErrorCode, SessionId, Timestamp};
use crate::domain::session::Session;
use crate::ports::{CheckInOutcome, SessionSnapshot, SessionStore};

/// A session paired with its ledger, guarded as one unit.
#[derive(Debug)]
struct SessionEntry {
    session: Session,
    ledger: AttendanceLedger,
}

/// In-memory implementation of [`SessionStore`].
///
/// Locking is two-level: the outer map lock is held only long enough to
/// look up or insert an entry, and each entry carries its own lock that
/// guards the session together with its ledger. Check-ins on one session
/// serialize against each other; sessions never contend with one another
/// past the map lookup.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    entries: Arc<RwLock<HashMap<SessionId, Arc<RwLock<SessionEntry>>>>>,
}

impl InMemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get the number of stored sessions.
    pub async fn session_count(&self) -> usize {
        self.entries.read().await.len()
    }

    async fn entry(&self, id: &SessionId) -> Option<Arc<RwLock<SessionEntry>>> {
        self.entries.read().await.get(id).cloned()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: Session) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        let id = *session.id();
        if entries.contains_key(&id) {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                format!("Session id collision: {}", id),
            ));
        }
        entries.insert(
            id,
            Arc::new(RwLock::new(SessionEntry {
                session,
                ledger: AttendanceLedger::new(),
            })),
        );
        Ok(())
    }

    async fn get(&self, id: &SessionId) -> Result<Option<SessionSnapshot>, DomainError> {
        let Some(entry) = self.entry(id).await else {
            return Ok(None);
        };

        // Write lock: the read may flip an expired session to Ended.
        let mut entry = entry.write().await;
        entry.session.evaluate_expiry(Timestamp::now());

        Ok(Some(SessionSnapshot {
            session: entry.session.clone(),
            attendees: entry.ledger.records().to_vec(),
        }))
    }

    async fn exists(&self, id: &SessionId) -> Result<bool, DomainError> {
        Ok(self.entries.read().await.contains_key(id))
    }

    async fn end(&self, id: &SessionId) -> Result<bool, DomainError> {
        let Some(entry) = self.entry(id).await else {
            return Ok(false);
        };

        entry.write().await.session.end();
        Ok(true)
    }

    async fn check_in(
        &self,
        id: &SessionId,
        roll_no: RollNumber,
    ) -> Result<Option<CheckInOutcome>, DomainError> {
        let Some(entry) = self.entry(id).await else {
            return Ok(None);
        };

        // One critical section covers the expiry evaluation, the open
        // check, the duplicate check, and the append.
        let mut entry = entry.write().await;
        let now = Timestamp::now();
        entry.session.evaluate_expiry(now);

        if !entry.session.status().is_active() {
            return Ok(Some(CheckInOutcome::SessionEnded));
        }

        match entry.ledger.check_in(roll_no, now) {
            Ok(count) => Ok(Some(CheckInOutcome::Admitted { count })),
            Err(e) if e.code == ErrorCode::DuplicateCheckIn => Ok(Some(CheckInOutcome::Duplicate)),
            Err(e) => Err(e),
        }
    }

    async fn attendees(&self, id: &SessionId) -> Result<Option<Vec<AttendeeRecord>>, DomainError> {
        let Some(entry) = self.entry(id).await else {
            return Ok(None);
        };

        let mut entry = entry.write().await;
        entry.session.evaluate_expiry(Timestamp::now());

        Ok(Some(entry.ledger.records().to_vec()))
    }
}
