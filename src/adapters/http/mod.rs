//! HTTP adapters - REST API implementations.

pub mod health;
pub mod router;
pub mod session;

pub use router::{build_router, cors_layer};
pub use session::{session_routes, SessionAppState};
