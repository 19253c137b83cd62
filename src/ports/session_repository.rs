//! Session repository port.
//!
//! Defines the contract for persisting and retrieving session records.
//! Implementations handle the actual storage operations.
//!
//! # Design
//!
//! - **Atomic writes**: `insert`, `update` and `delete` each run in a single
//!   storage transaction; a failure leaves stored data untouched
//! - **Absence is not an error**: missing ids come back as `None` / `false`,
//!   so callers can tell "not found" apart from a storage failure

use crate::domain::foundation::{DomainError, SessionRecordId};
use crate::domain::session::{NewSession, SessionChanges, SessionRecord};
use async_trait::async_trait;

/// Default page size when the caller gives no limit.
pub const DEFAULT_LIST_LIMIT: u32 = 100;

/// Offset/limit window over the id-ordered record list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListWindow {
    /// Number of records to skip.
    pub skip: u32,

    /// Maximum number of records to return.
    pub limit: u32,
}

impl ListWindow {
    pub fn new(skip: u32, limit: u32) -> Self {
        Self { skip, limit }
    }
}

impl Default for ListWindow {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

/// Repository port for session record persistence.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Insert a new record, assigning its id and timestamps.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn insert(&self, session: &NewSession) -> Result<SessionRecord, DomainError>;

    /// List records in ascending id order within `window`.
    async fn list(&self, window: ListWindow) -> Result<Vec<SessionRecord>, DomainError>;

    /// Every stored record, in ascending id order.
    async fn list_all(&self) -> Result<Vec<SessionRecord>, DomainError>;

    /// Find a record by its id.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: SessionRecordId) -> Result<Option<SessionRecord>, DomainError>;

    /// Merge `changes` into the stored record and refresh `updated_at`.
    ///
    /// Returns `None` if the record does not exist.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` when the merged record's bb/hour rate overflows
    /// - `StorageError` on persistence failure
    ///
    /// The stored record is unchanged on any error.
    async fn update(
        &self,
        id: SessionRecordId,
        changes: &SessionChanges,
    ) -> Result<Option<SessionRecord>, DomainError>;

    /// Permanently remove a record.
    ///
    /// Returns `false` if the record does not exist.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn delete(&self, id: SessionRecordId) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn session_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn SessionRepository) {}
    }

    #[test]
    fn list_window_defaults() {
        let window = ListWindow::default();
        assert_eq!(window.skip, 0);
        assert_eq!(window.limit, 100);
    }
}
