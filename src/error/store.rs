//! Errors returned by discussion stores.

use thiserror::Error;

use super::network::NetworkError;

/// Failure of a store operation (find, save, delete).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The request never produced a usable HTTP response.
    #[error("{0}")]
    Network(#[from] NetworkError),

    /// The forum answered but the document did not have the expected shape.
    #[error("Could not decode {resource}: {message}")]
    Decode { resource: String, message: String },

    /// The discussion is not known to the store.
    #[error("Discussion {0} not found")]
    NotFound(String),
}

impl StoreError {
    /// Build a decode error for a resource type.
    pub fn decode(resource: &str, message: impl Into<String>) -> Self {
        StoreError::Decode {
            resource: resource.to_string(),
            message: message.into(),
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            StoreError::Network(err) => err.user_message(),
            StoreError::Decode { .. } => "The forum sent a response we could not read.".to_string(),
            StoreError::NotFound(_) => "That discussion no longer exists.".to_string(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::Network(err) => err.error_code(),
            StoreError::Decode { .. } => "E_STORE_DECODE",
            StoreError::NotFound(_) => "E_STORE_NOT_FOUND",
        }
    }

    /// Check if retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            StoreError::Network(err) => err.is_retryable(),
            _ => false,
        }
    }
}
