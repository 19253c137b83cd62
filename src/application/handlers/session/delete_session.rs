//! DeleteSessionHandler - Command handler for removing a session.

use std::sync::Arc;

use crate::domain::foundation::SessionRecordId;
use crate::domain::session::SessionError;
use crate::ports::SessionRepository;

/// Command to permanently delete a session.
#[derive(Debug, Clone)]
pub struct DeleteSessionCommand {
    pub session_id: SessionRecordId,
}

/// Handler for deleting sessions.
pub struct DeleteSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl DeleteSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteSessionCommand) -> Result<(), SessionError> {
        if !self.repository.delete(cmd.session_id).await? {
            return Err(SessionError::not_found(cmd.session_id));
        }

        tracing::info!(session_id = %cmd.session_id, "Session deleted");
        Ok(())
    }
}
