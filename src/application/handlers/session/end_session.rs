//! EndSessionHandler - Command handler for ending sessions.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;
use crate::ports::SessionStore;

/// Command to end a session.
#[derive(Debug, Clone)]
pub struct EndSessionCommand {
    pub session_id: SessionId,
}

/// Handler for ending sessions.
///
/// Ending is idempotent: ending an already-ended session succeeds without
/// changing anything.
pub struct EndSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl EndSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: EndSessionCommand) -> Result<(), SessionError> {
        let found = self.store.end(&cmd.session_id).await?;
        if !found {
            return Err(SessionError::NotFound(cmd.session_id));
        }
        Ok(())
    }
}
