//! Unified error handling for the discuss client.
//!
//! - **Error Categories**: High-level classification for handling decisions
//! - **Domain-specific Errors**: Network and store errors
//! - **Unified Error Type**: `DiscussError` consolidates all error types
//! - **Result Type Alias**: `DiscussResult<T>` for consistent return types
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | Connection, timeout | Yes |
//! | Auth | Token rejected | No |
//! | Server | Forum errors (5xx) | Yes |
//! | Client | Unexpected payloads | No |
//! | System | Filesystem/terminal | No |
//! | Configuration | Config issues | No |

mod category;
mod discuss_error;
mod network;
mod store;

pub use category::ErrorCategory;
pub use discuss_error::DiscussError;
pub use network::{classify_http_error, NetworkError};
pub use store::StoreError;

/// Type alias for Results using DiscussError.
pub type DiscussResult<T> = Result<T, DiscussError>;
