//! GetSessionHandler - Query handler for reading session state.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;
use crate::ports::{SessionSnapshot, SessionStore};

/// Query for a session and its attendee list.
#[derive(Debug, Clone)]
pub struct GetSessionQuery {
    pub session_id: SessionId,
}

/// Handler for reading sessions.
///
/// The store applies lazy expiry before answering, so a session past its
/// expiry timestamp is reported as Ended by this query.
pub struct GetSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl GetSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetSessionQuery) -> Result<SessionSnapshot, SessionError> {
        self.store
            .get(&query.session_id)
            .await?
            .ok_or(SessionError::NotFound(query.session_id))
    }
}
