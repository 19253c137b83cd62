//! UpdateSessionHandler - Command handler for partial session updates.

use std::sync::Arc;

use crate::domain::foundation::SessionRecordId;
use crate::domain::session::{SessionChanges, SessionError, SessionPatch, SessionRecord};
use crate::ports::SessionRepository;

/// Command to update some fields of a session.
#[derive(Debug, Clone)]
pub struct UpdateSessionCommand {
    pub session_id: SessionRecordId,
    pub patch: SessionPatch,
}

/// Handler for updating sessions.
///
/// Supplied fields are held to the same rules as on create: numerics must
/// be positive and required fields cannot be nulled out.
pub struct UpdateSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl UpdateSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateSessionCommand) -> Result<SessionRecord, SessionError> {
        // 1. Validate supplied fields before touching storage
        let changes = SessionChanges::try_from(cmd.patch)?;

        // 2. Merge and persist in one transaction
        let record = self
            .repository
            .update(cmd.session_id, &changes)
            .await?
            .ok_or_else(|| SessionError::not_found(cmd.session_id))?;

        tracing::info!(session_id = %record.id, "Session updated");
        Ok(record)
    }
}
