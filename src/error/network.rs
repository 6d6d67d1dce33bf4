//! Network-related error types.
//!
//! This module defines errors that occur while talking to the forum API,
//! including HTTP status failures, connections, and timeouts.

use std::fmt;

use crate::traits::HttpError;

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// Connection to the forum failed.
    ConnectionFailed { url: String, message: String },

    /// Request timed out.
    Timeout { operation: String },

    /// HTTP status error (non-2xx response).
    HttpStatus { status: u16, message: String },

    /// The forum answered with a body we could not decode.
    InvalidResponse { message: String },

    /// The configured URL could not be used.
    InvalidUrl { url: String },

    /// Generic network error.
    Other { message: String },
}

impl NetworkError {
    /// Check if this error is likely transient and can be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::ConnectionFailed { .. } => true,
            NetworkError::Timeout { .. } => true,
            NetworkError::HttpStatus { status, .. } => {
                *status >= 500 || *status == 429 || *status == 408
            }
            NetworkError::InvalidResponse { .. } => false,
            NetworkError::InvalidUrl { .. } => false,
            NetworkError::Other { .. } => false,
        }
    }

    /// Check if the forum rejected our credentials.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, NetworkError::HttpStatus { status: 401 | 403, .. })
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { url, .. } => {
                format!("Unable to connect to {}.", url)
            }
            NetworkError::Timeout { operation } => {
                format!("The {} request timed out.", operation)
            }
            NetworkError::HttpStatus { status, .. } => match *status {
                401 => "Authentication required. Check your API token.".to_string(),
                403 => "You don't have permission to do that.".to_string(),
                404 => "The requested discussion was not found.".to_string(),
                429 => "Too many requests. Please wait a moment and try again.".to_string(),
                500..=599 => "The forum is experiencing issues. Please try again later.".to_string(),
                _ => format!("The forum returned an error (HTTP {}).", status),
            },
            NetworkError::InvalidResponse { .. } => {
                "Received an invalid response from the forum.".to_string()
            }
            NetworkError::InvalidUrl { url } => format!("Invalid forum URL: {}", url),
            NetworkError::Other { message } => format!("Network error: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::InvalidResponse { .. } => "E_NET_INVALID",
            NetworkError::InvalidUrl { .. } => "E_NET_URL",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection to {} failed: {}", url, message)
            }
            NetworkError::Timeout { operation } => write!(f, "{} timed out", operation),
            NetworkError::HttpStatus { status, message } => {
                write!(f, "HTTP {}: {}", status, message)
            }
            NetworkError::InvalidResponse { message } => {
                write!(f, "Invalid response: {}", message)
            }
            NetworkError::InvalidUrl { url } => write!(f, "Invalid URL: {}", url),
            NetworkError::Other { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for NetworkError {}

/// Classify a transport-level [`HttpError`] for the given URL and operation.
pub fn classify_http_error(err: HttpError, url: &str, operation: &str) -> NetworkError {
    match err {
        HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed {
            url: url.to_string(),
            message,
        },
        HttpError::Timeout(_) => NetworkError::Timeout {
            operation: operation.to_string(),
        },
        HttpError::ServerError { status, message } => NetworkError::HttpStatus { status, message },
        HttpError::InvalidUrl(url) => NetworkError::InvalidUrl { url },
        HttpError::Io(message) | HttpError::Other(message) => NetworkError::Other { message },
    }
}
