//! ListSessionsHandler - Query handler for paging through session records.

use std::sync::Arc;

use crate::domain::session::{SessionError, SessionRecord};
use crate::ports::{ListWindow, SessionRepository};

/// Query to list sessions in id order.
#[derive(Debug, Clone, Default)]
pub struct ListSessionsQuery {
    pub window: ListWindow,
}

/// Handler for listing sessions.
pub struct ListSessionsHandler {
    repository: Arc<dyn SessionRepository>,
}

impl ListSessionsHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListSessionsQuery) -> Result<Vec<SessionRecord>, SessionError> {
        let records = self.repository.list(query.window).await?;
        tracing::debug!(
            skip = query.window.skip,
            limit = query.window.limit,
            returned = records.len(),
            "Listed sessions"
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::session::test_support::{seed, MockSessionRepository};

    fn query(skip: u32, limit: u32) -> ListSessionsQuery {
        ListSessionsQuery {
            window: ListWindow::new(skip, limit),
        }
    }

    #[tokio::test]
    async fn first_page_returns_limit_in_order() {
        let repo = Arc::new(MockSessionRepository::new());
        let seeded = seed(repo.inner(), 5).await;
        let handler = ListSessionsHandler::new(repo);

        let page = handler.handle(query(0, 2)).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].id, seeded[0].id);
        assert_eq!(page[1].id, seeded[1].id);
    }

    #[tokio::test]
    async fn last_page_is_partial() {
        let repo = Arc::new(MockSessionRepository::new());
        let seeded = seed(repo.inner(), 5).await;
        let handler = ListSessionsHandler::new(repo);

        let page = handler.handle(query(4, 2)).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id, seeded[4].id);
    }

    #[tokio::test]
    async fn empty_store_is_not_an_error() {
        let handler = ListSessionsHandler::new(Arc::new(MockSessionRepository::new()));
        let page = handler.handle(ListSessionsQuery::default()).await.unwrap();
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn default_window_returns_everything_up_to_hundred() {
        let repo = Arc::new(MockSessionRepository::new());
        seed(repo.inner(), 3).await;
        let handler = ListSessionsHandler::new(repo);

        let page = handler.handle(ListSessionsQuery::default()).await.unwrap();
        assert_eq!(page.len(), 3);
    }

    #[tokio::test]
    async fn storage_failure_propagates() {
        let handler = ListSessionsHandler::new(Arc::new(MockSessionRepository::failing_reads()));
        let result = handler.handle(ListSessionsQuery::default()).await;
        assert!(matches!(result, Err(SessionError::Storage(_))));
    }
}
