//! PostgreSQL implementation of SessionRepository.
//!
//! Persists session records to the `sessions` table. Every write runs in its
//! own transaction; dropping an uncommitted `Transaction` rolls it back, so
//! any early return on error leaves the table untouched.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, SessionRecordId, Timestamp};
use crate::domain::session::{NewSession, SessionChanges, SessionRecord};
use crate::ports::{ListWindow, SessionRepository};

const RECORD_COLUMNS: &str = "id, date, location, sb_size, bb_size, buy_in, cash_out, hours, \
                              notes, created_at, updated_at";

/// PostgreSQL implementation of SessionRepository.
#[derive(Clone)]
pub struct PostgresSessionRepository {
    pool: PgPool,
}

impl PostgresSessionRepository {
    /// Creates a new PostgresSessionRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn insert(&self, session: &NewSession) -> Result<SessionRecord, DomainError> {
        let now = Timestamp::now();
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        let row = sqlx::query(&format!(
            r#"
            INSERT INTO sessions (
                date, location, sb_size, bb_size, buy_in, cash_out, hours, notes,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
            RETURNING {RECORD_COLUMNS}
            "#
        ))
        .bind(*session.date().as_datetime())
        .bind(session.location())
        .bind(session.sb_size())
        .bind(session.bb_size())
        .bind(session.buy_in())
        .bind(session.cash_out())
        .bind(session.hours())
        .bind(session.notes())
        .bind(now.as_datetime())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to insert session", e))?;

        let record = row_to_record(row)?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit session insert", e))?;

        Ok(record)
    }

    async fn list(&self, window: ListWindow) -> Result<Vec<SessionRecord>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {RECORD_COLUMNS} FROM sessions ORDER BY id ASC OFFSET $1 LIMIT $2"
        ))
        .bind(i64::from(window.skip))
        .bind(i64::from(window.limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list sessions", e))?;

        rows.into_iter().map(row_to_record).collect()
    }

    async fn list_all(&self) -> Result<Vec<SessionRecord>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {RECORD_COLUMNS} FROM sessions ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to load sessions", e))?;

        rows.into_iter().map(row_to_record).collect()
    }

    async fn find_by_id(&self, id: SessionRecordId) -> Result<Option<SessionRecord>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {RECORD_COLUMNS} FROM sessions WHERE id = $1"
        ))
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch session", e))?;

        row.map(row_to_record).transpose()
    }

    async fn update(
        &self,
        id: SessionRecordId,
        changes: &SessionChanges,
    ) -> Result<Option<SessionRecord>, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        let row = sqlx::query(&format!(
            "SELECT {RECORD_COLUMNS} FROM sessions WHERE id = $1 FOR UPDATE"
        ))
        .bind(id.as_i64())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to lock session", e))?;

        let Some(row) = row else {
            return Ok(None);
        };
        // Returning early drops `tx`, which rolls back and releases the lock.
        let updated = row_to_record(row)?.apply(changes)?;

        sqlx::query(
            r#"
            UPDATE sessions SET
                date = $2,
                location = $3,
                sb_size = $4,
                bb_size = $5,
                buy_in = $6,
                cash_out = $7,
                hours = $8,
                notes = $9,
                updated_at = $10
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .bind(updated.date.as_datetime())
        .bind(&updated.location)
        .bind(updated.sb_size)
        .bind(updated.bb_size)
        .bind(updated.buy_in)
        .bind(updated.cash_out)
        .bind(updated.hours)
        .bind(updated.notes.as_deref())
        .bind(updated.updated_at.as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to update session", e))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit session update", e))?;

        Ok(Some(updated))
    }

    async fn delete(&self, id: SessionRecordId) -> Result<bool, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        let result = sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id.as_i64())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to delete session", e))?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit session delete", e))?;

        Ok(true)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(&format!("Failed to get {}", name), e))
}

fn row_to_record(row: PgRow) -> Result<SessionRecord, DomainError> {
    let date: chrono::DateTime<chrono::Utc> = column(&row, "date")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(&row, "created_at")?;
    let updated_at: chrono::DateTime<chrono::Utc> = column(&row, "updated_at")?;

    Ok(SessionRecord {
        id: SessionRecordId::new(column(&row, "id")?),
        date: Timestamp::from_datetime(date),
        location: column(&row, "location")?,
        sb_size: column(&row, "sb_size")?,
        bb_size: column(&row, "bb_size")?,
        buy_in: column(&row, "buy_in")?,
        cash_out: column(&row, "cash_out")?,
        hours: column(&row, "hours")?,
        notes: column(&row, "notes")?,
        created_at: Timestamp::from_datetime(created_at),
        updated_at: Timestamp::from_datetime(updated_at),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_columns_cover_response_fields() {
        for field in [
            "id", "date", "location", "sb_size", "bb_size", "buy_in", "cash_out", "hours",
            "notes", "created_at", "updated_at",
        ] {
            assert!(RECORD_COLUMNS.contains(field), "missing column {}", field);
        }
    }

    #[test]
    fn repository_is_usable_as_trait_object() {
        fn _accepts(_repo: std::sync::Arc<dyn SessionRepository>) {}
        fn _coerce(repo: PostgresSessionRepository) {
            _accepts(std::sync::Arc::new(repo));
        }
    }
}
