//! Discussion store backed by the forum's JSON:API endpoints.
//!
//! - `GET    {base}/api/discussions?sort=..&start=..&include=startUser,lastUser`
//! - `PATCH  {base}/api/discussions/{id}` with a `readNumber` attribute
//! - `DELETE {base}/api/discussions/{id}`
//!
//! Requests carry `Authorization: Token {token}` while the session is
//! logged in.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, warn};

use crate::error::{classify_http_error, NetworkError, StoreError};
use crate::models::{parse_discussion, parse_discussion_page, Discussion, DiscussionPage, DiscussionQuery};
use crate::session::Session;
use crate::traits::{DiscussionStore, Headers, HttpClient, Response};

const JSON_API: &str = "application/vnd.api+json";
const INCLUDE: &str = "startUser,lastUser";
/// Longest slice of an error body kept in error messages.
const ERROR_BODY_LIMIT: usize = 200;

/// Store implementation over an injected [`HttpClient`].
#[derive(Clone)]
pub struct ApiStore {
    client: Arc<dyn HttpClient>,
    base_url: String,
    session: Session,
}

impl std::fmt::Debug for ApiStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiStore")
            .field("base_url", &self.base_url)
            .field("session", &self.session)
            .finish()
    }
}

impl ApiStore {
    pub fn new(client: Arc<dyn HttpClient>, base_url: impl Into<String>, session: Session) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the discussion list for a query.
    pub fn discussions_url(&self, query: &DiscussionQuery) -> String {
        let mut url = format!("{}/api/discussions?", self.base_url);
        for (key, value) in query.to_query_pairs() {
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(&value));
            url.push('&');
        }
        url.push_str("include=");
        url.push_str(&urlencoding::encode(INCLUDE));
        url
    }

    pub fn discussion_url(&self, discussion_id: &str) -> String {
        format!(
            "{}/api/discussions/{}",
            self.base_url,
            urlencoding::encode(discussion_id)
        )
    }

    fn headers(&self, with_body: bool) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), JSON_API.to_string());
        if with_body {
            headers.insert("Content-Type".to_string(), JSON_API.to_string());
        }
        if let Some(token) = self.session.token() {
            headers.insert("Authorization".to_string(), format!("Token {}", token));
        }
        headers
    }

    /// Turn a non-2xx response into an error.
    fn check_status(
        response: Response,
        discussion_id: Option<&str>,
    ) -> Result<Response, StoreError> {
        if response.is_success() {
            return Ok(response);
        }
        if response.status == 404 {
            if let Some(id) = discussion_id {
                return Err(StoreError::NotFound(id.to_string()));
            }
        }
        let mut message = response.text_lossy();
        if message.len() > ERROR_BODY_LIMIT {
            let mut cut = ERROR_BODY_LIMIT;
            while !message.is_char_boundary(cut) {
                cut -= 1;
            }
            message.truncate(cut);
        }
        Err(NetworkError::HttpStatus {
            status: response.status,
            message,
        }
        .into())
    }
}

#[async_trait]
impl DiscussionStore for ApiStore {
    async fn find_discussions(
        &self,
        query: &DiscussionQuery,
    ) -> Result<DiscussionPage, StoreError> {
        let url = self.discussions_url(query);
        debug!("ApiStore: GET {}", url);
        let response = self
            .client
            .get(&url, &self.headers(false))
            .await
            .map_err(|e| classify_http_error(e, &url, "discussion list"))?;
        let response = Self::check_status(response, None)?;
        parse_discussion_page(&response.body)
    }

    async fn save_read_number(
        &self,
        discussion_id: &str,
        read_number: u32,
    ) -> Result<Discussion, StoreError> {
        let url = self.discussion_url(discussion_id);
        let body = json!({
            "data": {
                "type": "discussions",
                "id": discussion_id,
                "attributes": { "readNumber": read_number }
            }
        })
        .to_string();
        debug!("ApiStore: PATCH {} readNumber={}", url, read_number);
        let response = self
            .client
            .patch(&url, &body, &self.headers(true))
            .await
            .map_err(|e| classify_http_error(e, &url, "mark as read"))?;
        let response = Self::check_status(response, Some(discussion_id))?;
        parse_discussion(&response.body)
    }

    async fn delete_discussion(&self, discussion_id: &str) -> Result<(), StoreError> {
        let url = self.discussion_url(discussion_id);
        debug!("ApiStore: DELETE {}", url);
        let response = self
            .client
            .delete(&url, &self.headers(false))
            .await
            .map_err(|e| classify_http_error(e, &url, "delete"))?;
        if let Err(err) = Self::check_status(response, Some(discussion_id)) {
            warn!("ApiStore: delete of {} failed: {}", discussion_id, err);
            return Err(err);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::HttpError;
    use bytes::Bytes;

    fn store_with(client: MockHttpClient) -> (ApiStore, MockHttpClient, Session) {
        let session = Session::new();
        let store = ApiStore::new(Arc::new(client.clone()), "http://forum.test/", session.clone());
        (store, client, session)
    }

    #[test]
    fn test_urls() {
        let (store, _, _) = store_with(MockHttpClient::new());
        assert_eq!(store.base_url(), "http://forum.test");
        assert_eq!(
            store.discussions_url(&DiscussionQuery::new("-replies", Some(20))),
            "http://forum.test/api/discussions?sort=-replies&start=20&include=startUser%2ClastUser"
        );
        assert_eq!(
            store.discussions_url(&DiscussionQuery::new("recent", None)),
            "http://forum.test/api/discussions?sort=recent&include=startUser%2ClastUser"
        );
        assert_eq!(store.discussion_url("7"), "http://forum.test/api/discussions/7");
    }

    #[tokio::test]
    async fn test_find_sends_token_when_logged_in() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(Response::new(
            200,
            Bytes::from(r#"{"data": []}"#),
        )));
        let (store, client, session) = store_with(client);

        store
            .find_discussions(&DiscussionQuery::new("recent", None))
            .await
            .unwrap();
        session.log_in("abc");
        store
            .find_discussions(&DiscussionQuery::new("recent", None))
            .await
            .unwrap();

        let requests = client.get_requests();
        assert_eq!(requests.len(), 2);
        assert!(!requests[0].headers.contains_key("Authorization"));
        assert_eq!(requests[1].headers.get("Authorization").unwrap(), "Token abc");
    }

    #[tokio::test]
    async fn test_find_maps_http_status() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(Response::new(
            500,
            Bytes::from("boom"),
        )));
        let (store, _, _) = store_with(client);

        let err = store
            .find_discussions(&DiscussionQuery::new("recent", None))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::Network(NetworkError::HttpStatus {
                status: 500,
                message: "boom".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_find_maps_transport_errors() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Error(HttpError::Timeout("30s".into())));
        let (store, _, _) = store_with(client);

        let err = store
            .find_discussions(&DiscussionQuery::new("recent", None))
            .await
            .unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(err.user_message(), "The discussion list request timed out.");
    }

    #[tokio::test]
    async fn test_save_read_number_body() {
        let client = MockHttpClient::new();
        client.set_response(
            "http://forum.test/api/discussions/3",
            MockResponse::Success(Response::new(
                200,
                Bytes::from(
                    r#"{"data": {"type": "discussions", "id": "3",
                        "attributes": {"title": "T", "lastPostNumber": 6, "readNumber": 6}}}"#,
                ),
            )),
        );
        let (store, client, _) = store_with(client);

        let saved = store.save_read_number("3", 6).await.unwrap();
        assert_eq!(saved.read_number, Some(6));

        let request = &client.get_requests()[0];
        assert_eq!(request.method, "PATCH");
        let body: serde_json::Value =
            serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["data"]["attributes"]["readNumber"], 6);
        assert_eq!(body["data"]["id"], "3");
        assert_eq!(request.headers.get("Content-Type").unwrap(), JSON_API);
    }

    #[tokio::test]
    async fn test_delete_not_found() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(Response::new(404, Bytes::new())));
        let (store, _, _) = store_with(client);

        let err = store.delete_discussion("9").await.unwrap_err();
        assert_eq!(err, StoreError::NotFound("9".to_string()));
    }

    #[tokio::test]
    async fn test_long_error_bodies_are_truncated() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(Response::new(
            502,
            Bytes::from("é".repeat(300)),
        )));
        let (store, _, _) = store_with(client);

        let err = store.delete_discussion("1").await.unwrap_err();
        match err {
            StoreError::Network(NetworkError::HttpStatus { message, .. }) => {
                assert!(message.len() <= ERROR_BODY_LIMIT);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }
}
