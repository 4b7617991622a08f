// API client errors

use educator_graph_core::ValidationError;

/// API client error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Request rejected locally, nothing was sent
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationError),

    /// Network communication error (unreachable, reset, bad URL)
    #[error("network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("{message}")]
    Server {
        status: u16,
        /// Server supplied message, or the operation's generic fallback
        message: String,
    },

    /// Success status with a body that is not the expected JSON
    #[error("invalid response body: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// HTTP status of a server error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
