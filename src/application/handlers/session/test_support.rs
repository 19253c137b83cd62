//! Repository doubles shared by the session handler tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::adapters::memory::InMemorySessionRepository;
use crate::domain::foundation::{DomainError, SessionRecordId};
use crate::domain::session::{NewSession, SessionChanges, SessionInput, SessionRecord};
use crate::ports::{ListWindow, SessionRepository};

/// In-memory repository that can be told to fail reads or writes.
#[derive(Default)]
pub struct MockSessionRepository {
    inner: InMemorySessionRepository,
    fail_reads: bool,
    fail_writes: bool,
    calls: AtomicUsize,
}

impl MockSessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_writes(inner: InMemorySessionRepository) -> Self {
        Self {
            inner,
            fail_writes: true,
            ..Default::default()
        }
    }

    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Default::default()
        }
    }

    pub fn inner(&self) -> &InMemorySessionRepository {
        &self.inner
    }

    /// Number of repository calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check(&self, fail: bool, op: &str) -> Result<(), DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if fail {
            return Err(DomainError::database(
                &format!("Failed to {} session", op),
                "simulated connection loss",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl SessionRepository for MockSessionRepository {
    async fn insert(&self, session: &NewSession) -> Result<SessionRecord, DomainError> {
        self.check(self.fail_writes, "insert")?;
        self.inner.insert(session).await
    }

    async fn list(&self, window: ListWindow) -> Result<Vec<SessionRecord>, DomainError> {
        self.check(self.fail_reads, "list")?;
        self.inner.list(window).await
    }

    async fn list_all(&self) -> Result<Vec<SessionRecord>, DomainError> {
        self.check(self.fail_reads, "load")?;
        self.inner.list_all().await
    }

    async fn find_by_id(&self, id: SessionRecordId) -> Result<Option<SessionRecord>, DomainError> {
        self.check(self.fail_reads, "fetch")?;
        self.inner.find_by_id(id).await
    }

    async fn update(
        &self,
        id: SessionRecordId,
        changes: &SessionChanges,
    ) -> Result<Option<SessionRecord>, DomainError> {
        self.check(self.fail_writes, "update")?;
        self.inner.update(id, changes).await
    }

    async fn delete(&self, id: SessionRecordId) -> Result<bool, DomainError> {
        self.check(self.fail_writes, "delete")?;
        self.inner.delete(id).await
    }
}

/// A complete, valid create input.
pub fn sample_input() -> SessionInput {
    SessionInput {
        date: Some("2024-01-15T19:00:00Z".to_string()),
        location: Some("Local Casino".to_string()),
        sb_size: Some(1.0),
        bb_size: Some(2.0),
        buy_in: Some(100.0),
        cash_out: Some(150.0),
        hours: Some(5.0),
        notes: None,
    }
}

/// Inserts `count` sessions named `S1`..`Sn` directly into `repo`.
pub async fn seed(repo: &InMemorySessionRepository, count: usize) -> Vec<SessionRecord> {
    let mut records = Vec::with_capacity(count);
    for i in 1..=count {
        let new = NewSession::try_from(SessionInput {
            location: Some(format!("S{}", i)),
            ..sample_input()
        })
        .expect("sample input is valid");
        records.push(repo.insert(&new).await.expect("in-memory insert"));
    }
    records
}
