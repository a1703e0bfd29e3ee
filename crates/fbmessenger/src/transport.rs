// SPDX-FileCopyrightText: 2026 fbmessenger Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! [`Transport`] implementation backed by `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use fbmessenger_config::GraphConfig;
use fbmessenger_core::{
    FormPart, HttpRequest, HttpResponse, MessengerError, RequestBody, Transport,
};
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use tracing::debug;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Sends requests with a pooled `reqwest::Client`.
///
/// Performs exactly one attempt per call. Non-2xx responses are returned as
/// data.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, MessengerError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MessengerError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, timeout })
    }

    /// Builds a transport using the configured timeout.
    pub fn from_config(config: &GraphConfig) -> Result<Self, MessengerError> {
        Self::new(config.timeout())
    }

    /// Wraps an existing client. `timeout` is only used to label timeout errors.
    pub fn with_client(client: reqwest::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    fn map_error(&self, err: reqwest::Error) -> MessengerError {
        if err.is_timeout() {
            MessengerError::Timeout {
                duration: self.timeout,
            }
        } else {
            MessengerError::transport(format!("HTTP request failed: {err}"), err)
        }
    }
}

fn build_form(parts: Vec<FormPart>) -> Result<Form, MessengerError> {
    let mut form = Form::new();
    for part in parts {
        form = match part {
            FormPart::Text { name, value } => form.text(name, value),
            FormPart::File {
                name,
                file_name,
                content_type,
                data,
            } => {
                let file = Part::bytes(data)
                    .file_name(file_name)
                    .mime_str(&content_type)
                    .map_err(|e| {
                        MessengerError::encode(format!("invalid content type `{content_type}`"), e)
                    })?;
                form.part(name, file)
            }
        };
    }
    Ok(form)
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, MessengerError> {
        let url = reqwest::Url::parse_with_params(&request.url, &request.query).map_err(|e| {
            MessengerError::Transport {
                message: format!("invalid request URL `{}`: {e}", request.url),
                source: Some(Box::new(e)),
            }
        })?;

        let mut builder = self.client.request(request.method.clone(), url);
        builder = match request.body {
            None => builder,
            Some(RequestBody::Json(bytes)) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(bytes),
            Some(RequestBody::Multipart(parts)) => builder.multipart(build_form(parts)?),
        };

        let response = builder.send().await.map_err(|e| self.map_error(e))?;
        let status = response.status();
        let body = response.bytes().await.map_err(|e| self.map_error(e))?;
        debug!(method = %request.method, status = %status, len = body.len(), "response received");

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn posts_json_with_query() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2.6/me/messages"))
            .and(query_param("access_token", "TOKEN"))
            .and(header("content-type", "application/json"))
            .and(body_string(r#"{"a":1}"#))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new(DEFAULT_TIMEOUT).unwrap();
        let request = HttpRequest::post(
            format!("{}/v2.6/me/messages", server.uri()),
            RequestBody::Json(br#"{"a":1}"#.to_vec()),
        )
        .with_query("access_token", "TOKEN");

        let response = transport.execute(request).await.unwrap();
        assert_eq!(response.status, reqwest::StatusCode::OK);
        assert_eq!(response.body, b"ok");
    }

    #[tokio::test]
    async fn non_success_status_is_data() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(400).set_body_string("{}"))
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new(DEFAULT_TIMEOUT).unwrap();
        let response = transport
            .execute(HttpRequest::get(format!("{}/123", server.uri())))
            .await
            .unwrap();
        assert_eq!(response.status, reqwest::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn slow_server_maps_to_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new(Duration::from_millis(100)).unwrap();
        let err = transport
            .execute(HttpRequest::get(server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, MessengerError::Timeout { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn invalid_url_is_transport_error() {
        let transport = ReqwestTransport::new(DEFAULT_TIMEOUT).unwrap();
        let err = transport
            .execute(HttpRequest::get("not a url"))
            .await
            .unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn invalid_content_type_fails_form_build() {
        let err = build_form(vec![FormPart::File {
            name: "filedata".into(),
            file_name: "x".into(),
            content_type: "not a mime".into(),
            data: vec![1],
        }])
        .unwrap_err();
        assert!(err.is_construction());
    }
}
