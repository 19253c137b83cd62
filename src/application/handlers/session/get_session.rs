//! GetSessionHandler - Query handler for retrieving a single session.

use std::sync::Arc;

use crate::domain::foundation::SessionRecordId;
use crate::domain::session::{SessionError, SessionRecord};
use crate::ports::SessionRepository;

/// Query to get a session by ID.
#[derive(Debug, Clone)]
pub struct GetSessionQuery {
    pub session_id: SessionRecordId,
}

/// Handler for retrieving session details.
pub struct GetSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl GetSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetSessionQuery) -> Result<SessionRecord, SessionError> {
        self.repository
            .find_by_id(query.session_id)
            .await?
            .ok_or_else(|| SessionError::not_found(query.session_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::session::test_support::{seed, MockSessionRepository};

    #[tokio::test]
    async fn returns_identical_record() {
        let repo = Arc::new(MockSessionRepository::new());
        let seeded = seed(repo.inner(), 1).await;
        let handler = GetSessionHandler::new(repo);

        let found = handler
            .handle(GetSessionQuery {
                session_id: seeded[0].id,
            })
            .await
            .unwrap();
        assert_eq!(found, seeded[0]);
    }

    #[tokio::test]
    async fn missing_id_is_not_found() {
        let handler = GetSessionHandler::new(Arc::new(MockSessionRepository::new()));
        let id = SessionRecordId::new(404);

        let result = handler.handle(GetSessionQuery { session_id: id }).await;
        assert_eq!(result, Err(SessionError::NotFound(id)));
    }

    #[tokio::test]
    async fn storage_failure_is_not_reported_as_not_found() {
        let handler = GetSessionHandler::new(Arc::new(MockSessionRepository::failing_reads()));
        let result = handler
            .handle(GetSessionQuery {
                session_id: SessionRecordId::new(1),
            })
            .await;
        assert!(matches!(result, Err(SessionError::Storage(_))));
    }
}
