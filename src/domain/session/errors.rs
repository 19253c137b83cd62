//! Session-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, SessionRecordId, ValidationError};

/// Session-specific errors.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    /// No record with the given id.
    NotFound(SessionRecordId),
    /// Input is missing a field or violates a constraint.
    ValidationFailed { field: String, message: String },
    /// The storage collaborator failed.
    Storage(String),
}

impl SessionError {
    pub fn not_found(id: SessionRecordId) -> Self {
        SessionError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SessionError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn storage(message: impl Into<String>) -> Self {
        SessionError::Storage(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::NotFound(_) => ErrorCode::NotFound,
            SessionError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            SessionError::Storage(_) => ErrorCode::StorageError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            SessionError::NotFound(id) => format!("Session with id {} not found", id),
            SessionError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            SessionError::Storage(msg) => format!("Storage error: {}", msg),
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SessionError {}

impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        SessionError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for SessionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => SessionError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => SessionError::Storage(err.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_converts_with_field_name() {
        let err: SessionError = ValidationError::not_positive("hours", -1.0).into();
        match err {
            SessionError::ValidationFailed { field, message } => {
                assert_eq!(field, "hours");
                assert!(message.contains("must be positive"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn database_error_becomes_storage() {
        let err: SessionError = DomainError::database("Failed to insert", "boom").into();
        assert_eq!(err, SessionError::Storage("Failed to insert: boom".to_string()));
        assert_eq!(err.code(), ErrorCode::StorageError);
    }

    #[test]
    fn not_found_message_names_the_id() {
        let err = SessionError::not_found(SessionRecordId::new(9));
        assert_eq!(err.to_string(), "Session with id 9 not found");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[test]
    fn validation_coded_domain_error_keeps_field() {
        let domain: DomainError = ValidationError::invalid_format("bb_per_hour", "overflow").into();
        let err: SessionError = domain.into();
        match err {
            SessionError::ValidationFailed { field, .. } => assert_eq!(field, "bb_per_hour"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
