//! ListAttendeesHandler - Query handler for the check-in list.

use std::sync::Arc;

use crate::domain::attendance::{AttendanceError, AttendeeRecord};
use crate::domain::foundation::SessionId;
use crate::ports::SessionStore;

/// Query for a session's attendees in check-in order.
#[derive(Debug, Clone)]
pub struct ListAttendeesQuery {
    pub session_id: SessionId,
}

/// Handler for listing attendees.
pub struct ListAttendeesHandler {
    store: Arc<dyn SessionStore>,
}

impl ListAttendeesHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: ListAttendeesQuery,
    ) -> Result<Vec<AttendeeRecord>, AttendanceError> {
        self.store
            .attendees(&query.session_id)
            .await?
            .ok_or(AttendanceError::SessionNotFound(query.session_id))
    }
}
