//! Error Types
//!
//! Every failure ends up as a message shown to the user, so `Display`
//! is the user-facing text.

use thiserror::Error;

/// Result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Backend operation a request belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchInitiatives,
    CreateInitiative,
    JoinInitiative,
    LeaveInitiative,
    DeleteInitiative,
    Login,
    Register,
    GetAccount,
}

/// How a rejected operation is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Fetch,
    Auth,
    Validation,
}

impl Operation {
    /// Message used when the server rejects without a readable body
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Operation::FetchInitiatives => "Failed to fetch initiatives from the backend.",
            Operation::CreateInitiative => "Failed to create initiative.",
            Operation::JoinInitiative => "Failed to join initiative.",
            Operation::LeaveInitiative => "Failed to leave initiative.",
            Operation::DeleteInitiative => "Failed to delete initiative.",
            Operation::Login => "Login failed. Please check your credentials.",
            Operation::Register => "Registration failed.",
            Operation::GetAccount => "Failed to load account.",
        }
    }

    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Operation::Login => FailureKind::Auth,
            Operation::Register => FailureKind::Validation,
            _ => FailureKind::Fetch,
        }
    }
}

/// API client errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response
    #[error("{message}")]
    Rejected {
        operation: Operation,
        status: u16,
        message: String,
    },

    /// Authenticated call attempted without a stored session
    #[error("You need to be logged in to do that.")]
    MissingSession,

    /// Request body could not be serialized; nothing was sent
    #[error("Could not prepare request: {0}")]
    Encode(String),

    /// 2xx response whose body did not match the expected shape
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Fetch/auth/validation classification of a rejection
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            ApiError::Rejected { operation, .. } => Some(operation.failure_kind()),
            ApiError::MissingSession => Some(FailureKind::Auth),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

/// Local storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("local storage is unavailable")]
    Unavailable,

    #[error("failed to write `{0}` to local storage")]
    Write(String),

    #[error("failed to serialize session: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Form validation errors, raised before any request is sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Passwords do not match!")]
    PasswordMismatch,

    #[error("{0} is required.")]
    MissingField(&'static str),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// Failure of a user action: rejected locally or by the server
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_displays_message_only() {
        let err = ApiError::Rejected {
            operation: Operation::Register,
            status: 409,
            message: "Email already registered".into(),
        };
        assert_eq!(err.to_string(), "Email already registered");
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.failure_kind(), Some(FailureKind::Validation));
    }

    #[test]
    fn test_encode_and_decode_errors_are_distinct() {
        assert_eq!(ApiError::Encode("key must be a string".into()).to_string(), "Could not prepare request: key must be a string");
        assert!(ApiError::Decode("eof".into()).to_string().starts_with("Unexpected response from server"));
    }

    #[test]
    fn test_operation_classification() {
        assert_eq!(Operation::Login.failure_kind(), FailureKind::Auth);
        assert_eq!(Operation::JoinInitiative.failure_kind(), FailureKind::Fetch);
        assert_eq!(ApiError::MissingSession.failure_kind(), Some(FailureKind::Auth));
        assert_eq!(ApiError::Network("offline".into()).failure_kind(), None);
        assert_eq!(ApiError::Encode("bad".into()).failure_kind(), None);
    }
}
