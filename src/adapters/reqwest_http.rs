//! Reqwest-based HTTP client adapter.
//!
//! This module provides the production HTTP client implementation using
//! reqwest, implementing the [`HttpClient`] trait from `crate::traits`.

use async_trait::async_trait;
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// HTTP client implementation using reqwest.
///
/// # Example
///
/// ```ignore
/// use discuss::adapters::ReqwestHttpClient;
/// use discuss::traits::{Headers, HttpClient};
///
/// let client = ReqwestHttpClient::new();
/// let response = client.get("https://forum.example.com/api/discussions", &Headers::new()).await?;
/// println!("Status: {}", response.status);
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Create a new ReqwestHttpClient with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a client whose requests time out after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("discuss/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| HttpError::Other(e.to_string()))?;
        Ok(Self { client })
    }

    /// Create a new ReqwestHttpClient with a custom reqwest::Client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Get a reference to the underlying reqwest::Client.
    pub fn inner(&self) -> &reqwest::Client {
        &self.client
    }

    /// Convert reqwest error to HttpError.
    fn convert_error(err: reqwest::Error) -> HttpError {
        if err.is_timeout() {
            HttpError::Timeout(err.to_string())
        } else if err.is_connect() {
            HttpError::ConnectionFailed(err.to_string())
        } else if err.is_builder() {
            HttpError::InvalidUrl(err.to_string())
        } else {
            HttpError::Other(err.to_string())
        }
    }

    /// Convert reqwest headers to our Headers type.
    fn convert_headers(headers: &reqwest::header::HeaderMap) -> Headers {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect()
    }

    /// Apply headers to a request builder.
    fn apply_headers(
        builder: reqwest::RequestBuilder,
        headers: &Headers,
    ) -> reqwest::RequestBuilder {
        let mut builder = builder;
        for (key, value) in headers {
            builder = builder.header(key, value);
        }
        builder
    }

    async fn send(builder: reqwest::RequestBuilder) -> Result<Response, HttpError> {
        let response = builder.send().await.map_err(Self::convert_error)?;

        let status = response.status().as_u16();
        let response_headers = Self::convert_headers(response.headers());
        let body = response.bytes().await.map_err(Self::convert_error)?;

        Ok(Response::with_headers(status, response_headers, body))
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        let builder = Self::apply_headers(self.client.get(url), headers);
        Self::send(builder).await
    }

    async fn patch(
        &self,
        url: &str,
        body: &str,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        let builder = Self::apply_headers(self.client.patch(url).body(body.to_string()), headers);
        Self::send(builder).await
    }

    async fn delete(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        let builder = Self::apply_headers(self.client.delete(url), headers);
        Self::send(builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_with_timeout_builds() {
        let client = ReqwestHttpClient::with_timeout(Duration::from_secs(5)).unwrap();
        let _ = client.inner();
    }

    #[test]
    fn test_apply_headers() {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/vnd.api+json".to_string());

        let client = reqwest::Client::new();
        let builder = client.get("http://localhost/api");
        let request = ReqwestHttpClient::apply_headers(builder, &headers)
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get("Accept").unwrap(),
            "application/vnd.api+json"
        );
    }

    #[tokio::test]
    async fn test_get_returns_non_success_status_as_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/discussions"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .mount(&server)
            .await;

        let client = ReqwestHttpClient::new();
        let response = client
            .get(&format!("{}/api/discussions", server.uri()), &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.status, 503);
        assert_eq!(response.text_lossy(), "down");
    }

    #[tokio::test]
    async fn test_patch_sends_body_and_headers() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/api/discussions/1"))
            .and(header("Authorization", "Token abc"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let mut headers = Headers::new();
        headers.insert("Authorization".to_string(), "Token abc".to_string());
        let client = ReqwestHttpClient::new();
        let response = client
            .patch(&format!("{}/api/discussions/1", server.uri()), "{}", &headers)
            .await
            .unwrap();
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn test_connection_refused_is_connection_failed() {
        let client = ReqwestHttpClient::new();
        let err = client
            .delete("http://127.0.0.1:1/api/discussions/1", &Headers::new())
            .await
            .unwrap_err();
        assert!(matches!(err, HttpError::ConnectionFailed(_)), "got {:?}", err);
    }
}
