//! Unified error type for the discuss client.

use thiserror::Error;

use super::category::ErrorCategory;
use super::network::NetworkError;
use super::store::StoreError;

/// Unified error type for the application.
#[derive(Debug, Error)]
pub enum DiscussError {
    /// A store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<NetworkError> for DiscussError {
    fn from(err: NetworkError) -> Self {
        DiscussError::Store(StoreError::Network(err))
    }
}

impl DiscussError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            DiscussError::Store(StoreError::Network(err)) => {
                if err.is_auth_failure() {
                    ErrorCategory::Auth
                } else if matches!(err, NetworkError::HttpStatus { status, .. } if *status >= 500) {
                    ErrorCategory::Server
                } else if matches!(err, NetworkError::InvalidUrl { .. }) {
                    ErrorCategory::Configuration
                } else {
                    ErrorCategory::Network
                }
            }
            DiscussError::Store(_) => ErrorCategory::Client,
            DiscussError::Config(_) => ErrorCategory::Configuration,
            DiscussError::Io(_) => ErrorCategory::System,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            DiscussError::Store(err) => err.is_retryable(),
            _ => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            DiscussError::Store(err) => err.user_message(),
            DiscussError::Config(message) => format!("Configuration problem: {}", message),
            DiscussError::Io(err) => format!("I/O error: {}", err),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            DiscussError::Store(err) => err.error_code(),
            DiscussError::Config(_) => "E_CONFIG",
            DiscussError::Io(_) => "E_IO",
        }
    }
}
