//! CreateSessionHandler - Command handler for logging a new session.

use std::sync::Arc;

use crate::domain::session::{NewSession, SessionError, SessionInput, SessionRecord};
use crate::ports::SessionRepository;

/// Command to create a new session record.
#[derive(Debug, Clone)]
pub struct CreateSessionCommand {
    pub input: SessionInput,
}

/// Handler for creating sessions.
pub struct CreateSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl CreateSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateSessionCommand) -> Result<SessionRecord, SessionError> {
        // 1. Validate before touching storage
        let new_session = NewSession::try_from(cmd.input)?;

        // 2. Persist (id and timestamps assigned by the store)
        let record = self.repository.insert(&new_session).await?;

        tracing::info!(session_id = %record.id, location = %record.location, "Session created");
        Ok(record)
    }
}
