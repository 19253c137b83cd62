//! HTTP DTOs for session endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ErrorCode, Patch};
use crate::domain::session::{
    BankrollSummary, CumulativePoint, SessionError, SessionInput, SessionPatch, SessionRecord,
};
use crate::ports::{ListWindow, DEFAULT_LIST_LIMIT};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to log a new session.
///
/// Every field is optional at the wire level so a missing field is reported
/// as a validation failure naming that field rather than a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSessionRequest {
    pub date: Option<String>,
    pub location: Option<String>,
    pub sb_size: Option<f64>,
    pub bb_size: Option<f64>,
    pub buy_in: Option<f64>,
    pub cash_out: Option<f64>,
    pub hours: Option<f64>,
    pub notes: Option<String>,
}

impl From<CreateSessionRequest> for SessionInput {
    fn from(req: CreateSessionRequest) -> Self {
        Self {
            date: req.date,
            location: req.location,
            sb_size: req.sb_size,
            bb_size: req.bb_size,
            buy_in: req.buy_in,
            cash_out: req.cash_out,
            hours: req.hours,
            notes: req.notes,
        }
    }
}

/// Request to change some fields of a session.
///
/// Omitted keys are left untouched; `null` is only meaningful for `notes`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSessionRequest {
    #[serde(default)]
    pub date: Patch<String>,
    #[serde(default)]
    pub location: Patch<String>,
    #[serde(default)]
    pub sb_size: Patch<f64>,
    #[serde(default)]
    pub bb_size: Patch<f64>,
    #[serde(default)]
    pub buy_in: Patch<f64>,
    #[serde(default)]
    pub cash_out: Patch<f64>,
    #[serde(default)]
    pub hours: Patch<f64>,
    #[serde(default)]
    pub notes: Patch<String>,
}

impl From<UpdateSessionRequest> for SessionPatch {
    fn from(req: UpdateSessionRequest) -> Self {
        Self {
            date: req.date,
            location: req.location,
            sb_size: req.sb_size,
            bb_size: req.bb_size,
            buy_in: req.buy_in,
            cash_out: req.cash_out,
            hours: req.hours,
            notes: req.notes,
        }
    }
}

/// Query parameters for listing sessions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListSessionsParams {
    #[serde(default)]
    pub skip: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

impl From<ListSessionsParams> for ListWindow {
    fn from(params: ListSessionsParams) -> Self {
        ListWindow::new(
            params.skip.unwrap_or(0),
            params.limit.unwrap_or(DEFAULT_LIST_LIMIT),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A session record with its computed fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionResponse {
    pub id: i64,
    pub date: String,
    pub location: String,
    pub sb_size: f64,
    pub bb_size: f64,
    pub buy_in: f64,
    pub cash_out: f64,
    pub hours: f64,
    pub notes: Option<String>,
    pub net_profit: f64,
    pub bb_per_hour: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<SessionRecord> for SessionResponse {
    fn from(record: SessionRecord) -> Self {
        Self {
            net_profit: record.net_profit(),
            bb_per_hour: record.bb_per_hour(),
            id: record.id.as_i64(),
            date: record.date.to_rfc3339(),
            location: record.location,
            sb_size: record.sb_size,
            bb_size: record.bb_size,
            buy_in: record.buy_in,
            cash_out: record.cash_out,
            hours: record.hours,
            notes: record.notes,
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

/// One point of the cumulative profit chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPointResponse {
    pub session_id: i64,
    pub date: String,
    pub session_profit: f64,
    pub cumulative_profit: f64,
}

impl From<CumulativePoint> for ChartPointResponse {
    fn from(point: CumulativePoint) -> Self {
        Self {
            session_id: point.session_id.as_i64(),
            date: point.date.to_rfc3339(),
            session_profit: point.session_profit,
            cumulative_profit: point.cumulative_profit,
        }
    }
}

/// Aggregate results across all sessions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BankrollSummaryResponse {
    pub session_count: usize,
    pub total_profit: f64,
    pub average_profit: f64,
    pub average_bb_per_hour: f64,
    pub total_hours: f64,
    pub hourly_rate: f64,
    pub cumulative: Vec<ChartPointResponse>,
}

impl From<BankrollSummary> for BankrollSummaryResponse {
    fn from(summary: BankrollSummary) -> Self {
        Self {
            session_count: summary.session_count,
            total_profit: summary.total_profit,
            average_profit: summary.average_profit,
            average_bb_per_hour: summary.average_bb_per_hour,
            total_hours: summary.total_hours,
            hourly_rate: summary.hourly_rate,
            cumulative: summary.cumulative.into_iter().map(Into::into).collect(),
        }
    }
}

/// Standard error response.
///
/// `code` is the display form of [`ErrorCode`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            detail: detail.into(),
        }
    }

    /// Rejected request before it reached the domain (body, query or path).
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, detail)
    }
}

impl From<&SessionError> for ErrorResponse {
    fn from(error: &SessionError) -> Self {
        Self::new(error.code(), error.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{SessionRecordId, Timestamp};

    #[test]
    fn create_request_tolerates_missing_fields() {
        let json = r#"{"location": "Online", "buy_in": 100}"#;
        let req: CreateSessionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.location.as_deref(), Some("Online"));
        assert_eq!(req.buy_in, Some(100.0));
        assert!(req.date.is_none());
    }

    #[test]
    fn update_request_distinguishes_null_from_omitted() {
        let json = r#"{"location": "Online", "notes": null}"#;
        let req: UpdateSessionRequest = serde_json::from_str(json).unwrap();
        let patch: SessionPatch = req.into();
        assert_eq!(patch.location, Patch::Value("Online".to_string()));
        assert_eq!(patch.notes, Patch::Null);
        assert!(patch.hours.is_unset());
        assert!(patch.buy_in.is_unset());
    }

    #[test]
    fn list_params_fall_back_to_defaults() {
        let window: ListWindow = ListSessionsParams::default().into();
        assert_eq!(window, ListWindow::new(0, 100));

        let window: ListWindow = ListSessionsParams {
            skip: Some(4),
            limit: Some(2),
        }
        .into();
        assert_eq!(window, ListWindow::new(4, 2));
    }

    #[test]
    fn session_response_includes_computed_fields() {
        let now = Timestamp::now();
        let record = SessionRecord {
            id: SessionRecordId::new(3),
            date: Timestamp::parse("date", "2024-01-15").unwrap(),
            location: "Local Casino".to_string(),
            sb_size: 1.0,
            bb_size: 2.0,
            buy_in: 100.0,
            cash_out: 150.0,
            hours: 5.0,
            notes: None,
            created_at: now,
            updated_at: now,
        };

        let response: SessionResponse = record.into();
        assert_eq!(response.id, 3);
        assert_eq!(response.net_profit, 50.0);
        assert_eq!(response.bb_per_hour, 5.0);
        assert_eq!(response.date, "2024-01-15T00:00:00+00:00");

        let json = serde_json::to_value(&response).unwrap();
        for key in [
            "id", "date", "location", "sb_size", "bb_size", "buy_in", "cash_out", "hours",
            "notes", "net_profit", "bb_per_hour", "created_at", "updated_at",
        ] {
            assert!(json.get(key).is_some(), "missing key {}", key);
        }
        assert!(json["notes"].is_null());
    }

    #[test]
    fn error_response_codes_follow_session_error() {
        assert_eq!(ErrorResponse::validation("x").code, "VALIDATION_FAILED");

        let not_found = ErrorResponse::from(&SessionError::not_found(SessionRecordId::new(4)));
        assert_eq!(not_found.code, "NOT_FOUND");
        assert_eq!(not_found.detail, "Session with id 4 not found");

        let storage = ErrorResponse::from(&SessionError::storage("connection reset"));
        assert_eq!(storage.code, "STORAGE_ERROR");

        let invalid = ErrorResponse::from(&SessionError::validation("hours", "must be positive"));
        assert_eq!(invalid.code, "VALIDATION_FAILED");
    }
}
