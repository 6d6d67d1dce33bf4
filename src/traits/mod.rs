//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP verbs used against the forum API
//! - [`DiscussionStore`] - find/save/delete of discussions
//! - [`Router`] - route building, current route and history

pub mod http;
pub mod router;
pub mod store;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use router::Router;
pub use store::DiscussionStore;
