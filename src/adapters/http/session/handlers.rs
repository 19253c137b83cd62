//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::session::{
    CreateSessionCommand, CreateSessionHandler, DeleteSessionCommand, DeleteSessionHandler,
    GetBankrollSummaryHandler, GetSessionHandler, GetSessionQuery, ListSessionsHandler,
    ListSessionsQuery, UpdateSessionCommand, UpdateSessionHandler,
};
use crate::domain::foundation::SessionRecordId;
use crate::domain::session::SessionError;
use crate::ports::SessionRepository;

use super::dto::{
    BankrollSummaryResponse, CreateSessionRequest, ErrorResponse, ListSessionsParams,
    SessionResponse, UpdateSessionRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════

/// Shared state for session routes.
///
/// Cloned per request; handlers are built on demand from the repository.
#[derive(Clone)]
pub struct SessionAppState {
    pub repository: Arc<dyn SessionRepository>,
}

impl SessionAppState {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub fn create_handler(&self) -> CreateSessionHandler {
        CreateSessionHandler::new(self.repository.clone())
    }

    pub fn list_handler(&self) -> ListSessionsHandler {
        ListSessionsHandler::new(self.repository.clone())
    }

    pub fn get_handler(&self) -> GetSessionHandler {
        GetSessionHandler::new(self.repository.clone())
    }

    pub fn update_handler(&self) -> UpdateSessionHandler {
        UpdateSessionHandler::new(self.repository.clone())
    }

    pub fn delete_handler(&self) -> DeleteSessionHandler {
        DeleteSessionHandler::new(self.repository.clone())
    }

    pub fn summary_handler(&self) -> GetBankrollSummaryHandler {
        GetBankrollSummaryHandler::new(self.repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /sessions/ - Log a new session
pub async fn create_session(
    State(state): State<SessionAppState>,
    payload: Result<Json<CreateSessionRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return bad_body(rejection.body_text()),
    };

    let cmd = CreateSessionCommand { input: req.into() };

    match state.create_handler().handle(cmd).await {
        Ok(record) => {
            let response: SessionResponse = record.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// GET /sessions/ - List sessions with skip/limit paging
pub async fn list_sessions(
    State(state): State<SessionAppState>,
    params: Result<Query<ListSessionsParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(query) => query,
        Err(rejection) => return bad_body(rejection.body_text()),
    };

    let query = ListSessionsQuery {
        window: params.into(),
    };

    match state.list_handler().handle(query).await {
        Ok(records) => {
            let response: Vec<SessionResponse> = records.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// GET /sessions/summary - Aggregate bankroll results
pub async fn get_summary(State(state): State<SessionAppState>) -> Response {
    match state.summary_handler().handle().await {
        Ok(summary) => {
            let response: BankrollSummaryResponse = summary.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// GET /sessions/:id - Get one session
pub async fn get_session(
    State(state): State<SessionAppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.get_handler().handle(GetSessionQuery { session_id }).await {
        Ok(record) => {
            let response: SessionResponse = record.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// PUT /sessions/:id - Update some fields of a session
pub async fn update_session(
    State(state): State<SessionAppState>,
    Path(session_id): Path<String>,
    payload: Result<Json<UpdateSessionRequest>, JsonRejection>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return bad_body(rejection.body_text()),
    };

    let cmd = UpdateSessionCommand {
        session_id,
        patch: req.into(),
    };

    match state.update_handler().handle(cmd).await {
        Ok(record) => {
            let response: SessionResponse = record.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// DELETE /sessions/:id - Permanently remove a session
pub async fn delete_session(
    State(state): State<SessionAppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .delete_handler()
        .handle(DeleteSessionCommand { session_id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_session_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn parse_session_id(raw: &str) -> Result<SessionRecordId, Response> {
    raw.parse::<SessionRecordId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::validation(format!("Invalid session id: {}", raw))),
        )
            .into_response()
    })
}

fn bad_body(detail: String) -> Response {
    tracing::warn!("Rejected request body: {}", detail);
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::validation(detail))).into_response()
}

fn handle_session_error(error: SessionError) -> Response {
    let status = match &error {
        SessionError::NotFound(_) => {
            tracing::warn!("{}", error);
            StatusCode::NOT_FOUND
        }
        SessionError::ValidationFailed { .. } => {
            tracing::warn!("{}", error);
            StatusCode::BAD_REQUEST
        }
        SessionError::Storage(_) => {
            tracing::error!("{}", error);
            StatusCode::BAD_REQUEST
        }
    };
    (status, Json(ErrorResponse::from(&error))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_error_not_found_maps_to_404() {
        let error = SessionError::NotFound(SessionRecordId::new(1));
        let response = handle_session_error(error);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn session_error_validation_failed_maps_to_400() {
        let error = SessionError::validation("buy_in", "must be positive");
        let response = handle_session_error(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn session_error_storage_maps_to_400() {
        let error = SessionError::storage("connection reset");
        let response = handle_session_error(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn non_numeric_id_is_bad_request() {
        let response = parse_session_id("abc").unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn numeric_id_parses() {
        assert_eq!(parse_session_id("12").unwrap(), SessionRecordId::new(12));
    }
}
