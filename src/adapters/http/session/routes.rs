//! Axum router configuration for session endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_session, delete_session, get_session, get_summary, list_sessions, update_session,
    SessionAppState,
};

/// Create the session API router.
///
/// # Routes
///
/// - `POST /sessions/` - Log a new session
/// - `GET /sessions/` - List sessions (`skip`, `limit`)
/// - `GET /sessions/summary` - Aggregate results and cumulative curve
/// - `GET /sessions/:id` - Get one session
/// - `PUT /sessions/:id` - Update some fields
/// - `DELETE /sessions/:id` - Delete a session
///
/// The collection is reachable with and without the trailing slash.
pub fn session_routes() -> Router<SessionAppState> {
    Router::new()
        .route("/sessions", post(create_session).get(list_sessions))
        .route("/sessions/", post(create_session).get(list_sessions))
        .route("/sessions/summary", get(get_summary))
        .route(
            "/sessions/:id",
            get(get_session).put(update_session).delete(delete_session),
        )
}
