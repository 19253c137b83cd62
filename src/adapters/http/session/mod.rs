//! HTTP adapter for session endpoints.
//!
//! Exposes the session record domain via REST API:
//! - `POST /sessions/` - Log a session
//! - `GET /sessions/` - List sessions
//! - `GET /sessions/summary` - Bankroll summary
//! - `GET /sessions/:id` - Get a session
//! - `PUT /sessions/:id` - Update a session
//! - `DELETE /sessions/:id` - Delete a session

pub mod dto;
mod handlers;
mod routes;

pub use dto::*;
pub use handlers::SessionAppState;
pub use routes::session_routes;
