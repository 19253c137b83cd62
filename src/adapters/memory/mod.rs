//! In-memory adapters - Process-local implementations of repository ports.

mod session_repository;

pub use session_repository::InMemorySessionRepository;
