//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, patches, errors)
//! - `session` - Poker session records, validation, and derived metrics

pub mod foundation;
pub mod session;
