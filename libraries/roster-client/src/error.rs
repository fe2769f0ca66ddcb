//! Error types for the Roster client.

use roster_core::RosterError;
use thiserror::Error;

/// Errors that can occur when talking to the user collection.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),
}

impl ClientError {
    /// Collapse into the single "request failed" category the controller sees
    pub fn into_roster_error(self, operation: &str) -> RosterError {
        RosterError::request_failed(operation, self.to_string())
    }

    pub(crate) fn from_send(err: reqwest::Error) -> Self {
        if err.is_connect() {
            ClientError::ServerUnreachable(err.to_string())
        } else {
            ClientError::Request(err)
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
