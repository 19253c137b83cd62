//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (create, update, delete) validate input before any
//! storage access; query handlers (get, list, summary) only read.

pub mod handlers;

pub use handlers::session::{
    CreateSessionCommand, CreateSessionHandler, DeleteSessionCommand, DeleteSessionHandler,
    GetBankrollSummaryHandler, GetSessionHandler, GetSessionQuery, ListSessionsHandler,
    ListSessionsQuery, UpdateSessionCommand, UpdateSessionHandler,
};
