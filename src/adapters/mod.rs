//! Adapters - Implementations of port interfaces.
//!
//! - `http` - axum REST API
//! - `memory` - process-local session storage
//! - `postgres` - sqlx-backed session storage

pub mod http;
pub mod memory;
pub mod postgres;
