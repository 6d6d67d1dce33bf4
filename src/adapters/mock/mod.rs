//! Test doubles for the adapters.
//!
//! - [`MockHttpClient`] - configurable HTTP responses
//! - [`MockStore`] - queued discussion pages and recorded store calls

pub mod http;
pub mod store;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use store::{MockStore, StoreCall};
