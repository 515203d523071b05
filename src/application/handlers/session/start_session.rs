//! StartSessionHandler - Command handler for starting attendance sessions.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::{Session, SessionError};
use crate::ports::SessionStore;

/// Command to start a new session.
#[derive(Debug, Clone)]
pub struct StartSessionCommand {
    pub subject: String,
}

/// Result of successfully starting a session.
#[derive(Debug, Clone)]
pub struct StartSessionResult {
    pub session: Session,
}

/// Handler for starting sessions.
pub struct StartSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl StartSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: StartSessionCommand) -> Result<StartSessionResult, SessionError> {
        // 1. Build the aggregate; subject validation happens here
        let session = Session::new(SessionId::new(), cmd.subject)?;

        // 2. Store it with an empty ledger
        self.store.insert(session.clone()).await?;

        Ok(StartSessionResult { session })
    }
}
