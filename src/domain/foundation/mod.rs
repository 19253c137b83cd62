//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the bankroll domain.

mod errors;
mod ids;
mod patch;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::SessionRecordId;
pub use patch::Patch;
pub use timestamp::Timestamp;
