//! In-memory implementation of SessionRepository.
//!
//! Keeps records in a process-local map. Data is lost on restart, which makes
//! it suitable for demos, local development and tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, SessionRecordId, Timestamp};
use crate::domain::session::{NewSession, SessionChanges, SessionRecord};
use crate::ports::{ListWindow, SessionRepository};

#[derive(Debug, Default)]
struct Store {
    records: BTreeMap<SessionRecordId, SessionRecord>,
    last_id: i64,
}

/// In-memory storage for session records.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemorySessionRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.store.read().await.records.len()
    }

    /// True when nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn insert(&self, session: &NewSession) -> Result<SessionRecord, DomainError> {
        let mut store = self.store.write().await;
        store.last_id += 1;
        let id = SessionRecordId::new(store.last_id);
        let record = SessionRecord::from_new(id, session, Timestamp::now());
        store.records.insert(id, record.clone());
        Ok(record)
    }

    async fn list(&self, window: ListWindow) -> Result<Vec<SessionRecord>, DomainError> {
        let store = self.store.read().await;
        Ok(store
            .records
            .values()
            .skip(window.skip as usize)
            .take(window.limit as usize)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<SessionRecord>, DomainError> {
        let store = self.store.read().await;
        Ok(store.records.values().cloned().collect())
    }

    async fn find_by_id(&self, id: SessionRecordId) -> Result<Option<SessionRecord>, DomainError> {
        Ok(self.store.read().await.records.get(&id).cloned())
    }

    async fn update(
        &self,
        id: SessionRecordId,
        changes: &SessionChanges,
    ) -> Result<Option<SessionRecord>, DomainError> {
        let mut store = self.store.write().await;
        let Some(current) = store.records.get(&id) else {
            return Ok(None);
        };
        let updated = current.apply(changes)?;
        store.records.insert(id, updated.clone());
        Ok(Some(updated))
    }

    async fn delete(&self, id: SessionRecordId) -> Result<bool, DomainError> {
        Ok(self.store.write().await.records.remove(&id).is_some())
    }
}
