//! Error types for the remote client.

use coretet_core::error::{CoreError, PreferenceStoreError};
use thiserror::Error;

/// Errors that can occur when talking to the backend.
#[derive(Error, Debug)]
pub enum RemoteClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError {
        /// HTTP status code
        status: u16,
        /// Response body or status text
        message: String,
    },

    /// The requested operation is not provisioned on this deployment
    #[error("Operation not provisioned on this deployment")]
    Unsupported,

    /// Invalid base URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse a response body
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// Result type for remote client operations.
pub type Result<T> = std::result::Result<T, RemoteClientError>;

impl From<RemoteClientError> for PreferenceStoreError {
    fn from(err: RemoteClientError) -> Self {
        match err {
            RemoteClientError::Unsupported => PreferenceStoreError::Unsupported,
            RemoteClientError::Request(e) if e.is_connect() || e.is_timeout() => {
                PreferenceStoreError::Unavailable(e.to_string())
            }
            RemoteClientError::ParseError(msg) => PreferenceStoreError::Serialization(msg),
            other => PreferenceStoreError::Storage(other.to_string()),
        }
    }
}

impl From<RemoteClientError> for CoreError {
    fn from(err: RemoteClientError) -> Self {
        CoreError::network(err.to_string())
    }
}
