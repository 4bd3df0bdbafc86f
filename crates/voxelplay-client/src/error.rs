//! Error types for the VoxelPlay client.

use std::time::Duration;

use thiserror::Error;
use voxelplay_types::models::FailureReason;

/// Errors that can occur when calling the game API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Client could not be constructed (bad header value, TLS setup).
    #[error("Client build failed: {0}")]
    Build(String),

    /// Failed to establish a connection to the server.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Transport failure after the connection was established.
    #[error("Network error: {0}")]
    Network(String),

    /// Attempt sequence exceeded its time budget.
    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    /// Server answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        message: String,
    },

    /// Success status but the body was not JSON.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Success status but the JSON body was empty or falsy.
    #[error("Empty payload")]
    EmptyPayload,
}

impl ClientError {
    pub(crate) fn from_transport(err: reqwest::Error, budget: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(budget)
        } else if err.is_connect() {
            Self::Connection(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }

    pub fn failure_reason(&self) -> FailureReason {
        match self {
            Self::Timeout(_) => FailureReason::Timeout,
            Self::HttpStatus { status, .. } => FailureReason::HttpStatus(*status),
            Self::Build(_) | Self::Connection(_) | Self::Network(_) => FailureReason::Network,
            Self::InvalidResponse(_) => FailureReason::InvalidResponse,
            Self::EmptyPayload => FailureReason::EmptyPayload,
        }
    }
}
