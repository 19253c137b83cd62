//! Session command and query handlers.

mod create_session;
mod delete_session;
mod get_bankroll_summary;
mod get_session;
mod list_sessions;
mod update_session;

#[cfg(test)]
pub(crate) mod test_support;

pub use create_session::{CreateSessionCommand, CreateSessionHandler};
pub use delete_session::{DeleteSessionCommand, DeleteSessionHandler};
pub use get_bankroll_summary::GetBankrollSummaryHandler;
pub use get_session::{GetSessionHandler, GetSessionQuery};
pub use list_sessions::{ListSessionsHandler, ListSessionsQuery};
pub use update_session::{UpdateSessionCommand, UpdateSessionHandler};
