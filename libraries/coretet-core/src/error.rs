/// Core error types for the Coretet ordering core
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for the ordering core
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid input at a collaborator boundary
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Network error from a remote collaborator
    #[error("Network error: {0}")]
    Network(String),

    /// Preference store errors
    #[error(transparent)]
    PreferenceStore(#[from] PreferenceStoreError),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl CoreError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }
}

/// Errors reported by preference-store collaborators.
///
/// `Unsupported` is the one variant callers branch on: it signals that the
/// backing operation is not provisioned on the remote store, which redirects
/// the write to the local fallback instead of dropping it.
#[derive(Error, Debug)]
pub enum PreferenceStoreError {
    /// The backing operation is not provisioned on the remote store
    #[error("preference operation not supported by the remote store")]
    Unsupported,

    /// The store could not be reached
    #[error("preference store unavailable: {0}")]
    Unavailable(String),

    /// A stored record could not be encoded or decoded
    #[error("preference serialization error: {0}")]
    Serialization(String),

    /// Any other storage failure
    #[error("preference storage error: {0}")]
    Storage(String),
}

impl PreferenceStoreError {
    /// Create an unavailable error
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// True when the failure means the operation is not provisioned at all
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported)
    }
}
