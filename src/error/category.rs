//! Error category classification for unified error handling.
//!
//! Categories drive retry decisions and the wording shown in the footer
//! and status bar.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Network-related errors (connection, DNS, timeout).
    /// Generally transient and retryable.
    Network,

    /// Authentication/authorization errors (401/403 from the forum).
    Auth,

    /// Forum-side errors (HTTP 5xx).
    /// Generally transient and retryable after delay.
    Server,

    /// Client-side errors (unexpected payloads, invalid state).
    Client,

    /// Filesystem or terminal errors.
    System,

    /// Configuration errors (bad URL, unreadable config file).
    Configuration,
}

impl ErrorCategory {
    /// Returns true if errors in this category are generally transient
    /// and the operation can be retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your connection and press R to retry.",
            ErrorCategory::Auth => "Check your API token (--token or DISCUSS_TOKEN).",
            ErrorCategory::Server => "The forum is having trouble. Press R to retry.",
            ErrorCategory::Client => "The forum sent something unexpected. Please report this.",
            ErrorCategory::System => "Check file permissions and disk space.",
            ErrorCategory::Configuration => "Check ~/.discuss/config.json and your flags.",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_categories() {
        assert!(ErrorCategory::Network.is_retryable());
        assert!(ErrorCategory::Server.is_retryable());
        assert!(!ErrorCategory::Auth.is_retryable());
        assert!(!ErrorCategory::Client.is_retryable());
        assert!(!ErrorCategory::Configuration.is_retryable());
    }

    #[test]
    fn test_display_uses_short_label() {
        assert_eq!(ErrorCategory::Network.to_string(), "network");
        assert_eq!(ErrorCategory::Configuration.to_string(), "configuration");
    }
}
