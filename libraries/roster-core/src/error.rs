/// Core error types for Roster
use crate::types::UserId;
use thiserror::Error;

/// Result type alias using `RosterError`
pub type Result<T> = std::result::Result<T, RosterError>;

/// Core error type for Roster
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// A backend round trip failed (transport, non-2xx status, or body parse)
    #[error("{operation} request failed: {message}")]
    RequestFailed { operation: String, message: String },

    /// User not found
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// Field name that is not a searchable/sortable user field
    #[error("Unknown user field: {0}")]
    UnknownField(String),

    /// Operation not allowed in the current view
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl RosterError {
    /// Create a request failure for the named operation
    pub fn request_failed(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RequestFailed {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create an invalid state error
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }
}
