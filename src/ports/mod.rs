//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionRepository` - Durable storage of session records

mod session_repository;

pub use session_repository::{ListWindow, SessionRepository, DEFAULT_LIST_LIMIT};
