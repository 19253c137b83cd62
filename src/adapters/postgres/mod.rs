//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresSessionRepository` - Transactional session record storage
//! - `connect` / `run_migrations` - Pool setup and schema bootstrap

mod pool;
mod session_repository;

pub use pool::{connect, run_migrations};
pub use session_repository::PostgresSessionRepository;
