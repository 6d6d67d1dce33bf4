//! Concrete implementations of trait abstractions.
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`ApiStore`] - discussion store over the forum's JSON:API
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::MockStore`] - Queued pages and recorded calls

pub mod api_store;
pub mod mock;
pub mod reqwest_http;

pub use api_store::ApiStore;
pub use mock::{MockHttpClient, MockStore};
pub use reqwest_http::ReqwestHttpClient;
