// SPDX-FileCopyrightText: 2026 fbmessenger Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Send API and User Profile API client.
//!
//! [`MessengerClient`] turns a [`SendRequest`] into one HTTP call through the
//! injected [`Transport`] and decodes the response body regardless of HTTP
//! status. Platform failures come back as data in [`SendResponse::error`].

use std::future::Future;
use std::sync::Arc;

use fbmessenger_config::{GraphConfig, model::DEFAULT_PROFILE_FIELDS};
use fbmessenger_core::{HttpRequest, HttpResponse, MessengerError, Transport};
use reqwest::Url;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::encoding::encode;
use crate::profile::UserProfile;
use crate::request::SendRequest;
use crate::response::SendResponse;

/// Versioned Graph API root used when none is configured.
pub const DEFAULT_API_ROOT: &str = "https://graph.facebook.com/v2.6/";

/// Client for one Graph API root.
///
/// Access tokens are passed per call so one client can serve many pages.
#[derive(Clone)]
pub struct MessengerClient {
    transport: Arc<dyn Transport>,
    api_root: String,
    profile_fields: Vec<String>,
}

impl MessengerClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            api_root: DEFAULT_API_ROOT.to_string(),
            profile_fields: DEFAULT_PROFILE_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Builds a client from validated configuration.
    pub fn from_config(config: &GraphConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            api_root: config.api_root(),
            profile_fields: config.profile_fields.clone(),
        }
    }

    /// Overrides the API root. A trailing `/` is added if missing.
    pub fn with_api_root(mut self, root: impl Into<String>) -> Self {
        let mut root = root.into();
        if !root.ends_with('/') {
            root.push('/');
        }
        self.api_root = root;
        self
    }

    pub fn with_profile_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.profile_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Sends a message.
    ///
    /// Construction errors are returned before any I/O. An `Ok` response may
    /// still carry a platform error.
    pub async fn send(
        &self,
        request: SendRequest,
        page_access_token: &str,
    ) -> Result<SendResponse, MessengerError> {
        let http_request = self.send_request(request, page_access_token)?;
        let response = self.transport.execute(http_request).await?;
        let decoded: SendResponse = decode_body(&response, "send response")?;

        match &decoded.error {
            Some(error) => warn!(
                status = %response.status,
                code = error.code,
                error_type = %error.error_type,
                trace_id = %error.trace_id,
                "send rejected by platform"
            ),
            None => debug!(
                recipient_id = %decoded.recipient_id,
                message_id = %decoded.message_id,
                "message sent"
            ),
        }
        Ok(decoded)
    }

    /// Like [`send`](Self::send), abandoning the call when `cancel` fires.
    pub async fn send_with_cancel(
        &self,
        request: SendRequest,
        page_access_token: &str,
        cancel: &CancellationToken,
    ) -> Result<SendResponse, MessengerError> {
        with_cancel(cancel, self.send(request, page_access_token)).await
    }

    /// Fetches the public profile of `user_id`.
    pub async fn get_user_profile(
        &self,
        user_id: &str,
        page_access_token: &str,
    ) -> Result<UserProfile, MessengerError> {
        let request = HttpRequest::get(self.profile_url(user_id)?)
            .with_query("fields", self.profile_fields.join(","))
            .with_query("access_token", page_access_token);
        debug!(user_id, fields = self.profile_fields.len(), "fetching user profile");

        let response = self.transport.execute(request).await?;
        if !response.status.is_success() {
            warn!(status = %response.status, user_id, "profile lookup returned non-success status");
        }
        decode_body(&response, "user profile")
    }

    /// Like [`get_user_profile`](Self::get_user_profile), abandoning the call
    /// when `cancel` fires.
    pub async fn get_user_profile_with_cancel(
        &self,
        user_id: &str,
        page_access_token: &str,
        cancel: &CancellationToken,
    ) -> Result<UserProfile, MessengerError> {
        with_cancel(cancel, self.get_user_profile(user_id, page_access_token)).await
    }

    /// `{root}{user_id}` with the id escaped as a single path segment.
    fn profile_url(&self, user_id: &str) -> Result<String, MessengerError> {
        if matches!(user_id.trim(), "" | "." | "..") {
            return Err(MessengerError::InvalidRequest(format!(
                "user id `{user_id}` is not a valid path segment"
            )));
        }

        let mut url = Url::parse(&self.api_root).map_err(|e| {
            MessengerError::Config(format!("invalid API root `{}`: {e}", self.api_root))
        })?;
        url.path_segments_mut()
            .map_err(|()| {
                MessengerError::Config(format!("API root `{}` has no path", self.api_root))
            })?
            .pop_if_empty()
            .push(user_id);
        Ok(url.into())
    }

    fn send_request(
        &self,
        request: SendRequest,
        page_access_token: &str,
    ) -> Result<HttpRequest, MessengerError> {
        let body = encode(request)?;
        debug!(media_type = body.media_type(), "encoded send request");
        Ok(
            HttpRequest::post(format!("{}me/messages", self.api_root), body)
                .with_query("access_token", page_access_token),
        )
    }
}

impl std::fmt::Debug for MessengerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessengerClient")
            .field("api_root", &self.api_root)
            .field("profile_fields", &self.profile_fields)
            .finish_non_exhaustive()
    }
}

async fn with_cancel<T, F>(cancel: &CancellationToken, call: F) -> Result<T, MessengerError>
where
    F: Future<Output = Result<T, MessengerError>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            debug!("call cancelled by caller");
            Err(MessengerError::Cancelled)
        }
        result = call => result,
    }
}

fn decode_body<T: DeserializeOwned>(
    response: &HttpResponse,
    what: &str,
) -> Result<T, MessengerError> {
    serde_json::from_slice(&response.body).map_err(|e| MessengerError::Decode {
        message: format!("invalid {what} body (HTTP {}): {e}", response.status),
        source: Some(Box::new(e)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{image_upload_message, text_message};
    use crate::transport::{DEFAULT_TIMEOUT, ReqwestTransport};
    use fbmessenger_core::RequestBody;
    use fbmessenger_test_utils::MockTransport;
    use wiremock::matchers::{body_string, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SUCCESS: &str = r#"{"recipient_id":"1008372609250235","message_id":"mid.1456970487936:c34767dfe57ee6e339"}"#;
    const PLATFORM_ERROR: &str = r#"{"error":{"message":"Invalid parameter","type":"FacebookApiException","code":100,"error_data":"No matching user found.","fbtrace_id":"D2kxCybrKVw"}}"#;

    fn reqwest_client(server: &MockServer) -> MessengerClient {
        let transport = ReqwestTransport::new(DEFAULT_TIMEOUT).unwrap();
        MessengerClient::new(Arc::new(transport)).with_api_root(format!("{}/v2.6", server.uri()))
    }

    #[tokio::test]
    async fn send_posts_json_to_messages_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2.6/me/messages"))
            .and(query_param("access_token", "PAGE_TOKEN"))
            .and(body_string(
                r#"{"recipient":{"id":"USER_ID"},"message":{"text":"Hello, world!"}}"#,
            ))
            .respond_with(ResponseTemplate::new(200).set_body_string(SUCCESS))
            .expect(1)
            .mount(&server)
            .await;

        let response = reqwest_client(&server)
            .send(text_message("Hello, world!").to("USER_ID"), "PAGE_TOKEN")
            .await
            .unwrap();

        assert!(response.is_success());
        assert_eq!(response.recipient_id, "1008372609250235");
    }

    #[tokio::test]
    async fn platform_error_is_decoded_from_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string(PLATFORM_ERROR))
            .mount(&server)
            .await;

        let response = reqwest_client(&server)
            .send(text_message("hi").to("USER_ID"), "PAGE_TOKEN")
            .await
            .unwrap();

        let error = response.error.unwrap();
        assert_eq!(error.code, 100);
        assert_eq!(error.trace_id, "D2kxCybrKVw");
    }

    #[tokio::test]
    async fn invalid_request_never_reaches_transport() {
        let transport = Arc::new(MockTransport::new());
        let client = MessengerClient::new(transport.clone());

        let err = client.send(text_message("hi"), "PAGE_TOKEN").await.unwrap_err();

        assert!(err.is_construction());
        assert_eq!(transport.request_count().await, 0);
    }

    #[tokio::test]
    async fn upload_is_sent_as_multipart() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, SUCCESS).await;
        let client = MessengerClient::new(transport.clone());

        client
            .send(image_upload_message(vec![1, 2, 3], "image/png").to("USER_ID"), "T")
            .await
            .unwrap();

        let sent = transport.last_request().await.unwrap();
        assert_eq!(sent.url, "https://graph.facebook.com/v2.6/me/messages");
        assert_eq!(sent.query_param("access_token"), Some("T"));
        let body = sent.body.unwrap();
        assert!(matches!(body, RequestBody::Multipart(_)));
        assert!(body.part("filedata").is_some());
    }

    #[tokio::test]
    async fn undecodable_body_is_decode_error() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(502, "<html>bad gateway</html>").await;
        let client = MessengerClient::new(transport);

        let err = client
            .send(text_message("hi").to("USER_ID"), "T")
            .await
            .unwrap_err();
        assert!(matches!(err, MessengerError::Decode { .. }));
        assert!(err.to_string().contains("502"));
    }

    #[tokio::test]
    async fn transport_failure_propagates() {
        let transport = Arc::new(MockTransport::new());
        transport
            .push_error(MessengerError::Transport {
                message: "connection refused".into(),
                source: None,
            })
            .await;
        let client = MessengerClient::new(transport);

        let err = client
            .send(text_message("hi").to("USER_ID"), "T")
            .await
            .unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn get_user_profile_requests_configured_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2.6/USER_ID"))
            .and(query_param("fields", "first_name,last_name"))
            .and(query_param("access_token", "PAGE_TOKEN"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"first_name":"Peter","last_name":"Chang"}"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let profile = reqwest_client(&server)
            .with_profile_fields(["first_name", "last_name"])
            .get_user_profile("USER_ID", "PAGE_TOKEN")
            .await
            .unwrap();

        assert_eq!(profile.first_name, "Peter");
        assert_eq!(profile.last_name, "Chang");
    }

    #[tokio::test]
    async fn empty_user_id_is_rejected() {
        let transport = Arc::new(MockTransport::new());
        let client = MessengerClient::new(transport.clone());
        let err = client.get_user_profile(" ", "T").await.unwrap_err();
        assert!(matches!(err, MessengerError::InvalidRequest(_)));
        assert_eq!(transport.request_count().await, 0);
    }

    #[tokio::test]
    async fn user_id_stays_in_one_path_segment() {
        let transport = Arc::new(MockTransport::new());
        let client = MessengerClient::new(transport.clone());

        client
            .get_user_profile("123/messages?fields=x#frag", "T")
            .await
            .unwrap();

        let sent = transport.last_request().await.unwrap();
        assert_eq!(
            sent.url,
            "https://graph.facebook.com/v2.6/123%2Fmessages%3Ffields=x%23frag"
        );
        assert_eq!(sent.query_param("access_token"), Some("T"));
    }

    #[tokio::test]
    async fn dot_segment_user_ids_are_rejected() {
        let transport = Arc::new(MockTransport::new());
        let client = MessengerClient::new(transport.clone());

        for user_id in [".", "..", " .. "] {
            let err = client.get_user_profile(user_id, "T").await.unwrap_err();
            assert!(matches!(err, MessengerError::InvalidRequest(_)), "{user_id:?}");
        }
        assert_eq!(transport.request_count().await, 0);
    }

    #[tokio::test]
    async fn cancellation_abandons_pending_call() {
        let transport = Arc::new(MockTransport::new().stalled());
        let client = MessengerClient::new(transport);
        let cancel = CancellationToken::new();

        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            trigger.cancel();
        });

        let err = client
            .send_with_cancel(text_message("hi").to("USER_ID"), "T", &cancel)
            .await
            .unwrap_err();
        assert!(matches!(err, MessengerError::Cancelled));

        let err = client
            .get_user_profile_with_cancel("USER_ID", "T", &cancel)
            .await
            .unwrap_err();
        assert!(matches!(err, MessengerError::Cancelled));
    }

    #[test]
    fn from_config_uses_versioned_root() {
        let config = GraphConfig {
            base_url: "http://localhost:8080/".into(),
            api_version: "v3.0".into(),
            ..GraphConfig::default()
        };
        let client = MessengerClient::from_config(&config, Arc::new(MockTransport::new()));
        assert_eq!(client.api_root(), "http://localhost:8080/v3.0/");
    }

    #[test]
    fn api_root_gets_trailing_slash() {
        let client = MessengerClient::new(Arc::new(MockTransport::new()))
            .with_api_root("http://127.0.0.1:9/v2.6");
        assert_eq!(client.api_root(), "http://127.0.0.1:9/v2.6/");
    }
}
