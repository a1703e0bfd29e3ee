// SPDX-FileCopyrightText: 2026 fbmessenger Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the fbmessenger client.
//!
//! This crate provides the error taxonomy, the [`Transport`] trait the client
//! is constructed with, and the wire-level request/response values a
//! transport consumes and produces.

pub mod error;
pub mod traits;
pub mod types;

pub use error::{BoxError, MessengerError};
pub use traits::Transport;
pub use types::{FormPart, HttpRequest, HttpResponse, RequestBody};

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use http::StatusCode;

    #[test]
    fn error_classification() {
        let invalid = MessengerError::InvalidRequest("no recipient".into());
        let encode = MessengerError::Encode {
            message: "bad".into(),
            source: None,
        };
        let transport = MessengerError::transport("down", std::io::Error::other("refused"));
        let decode = MessengerError::Decode {
            message: "eof".into(),
            source: None,
        };
        let timeout = MessengerError::Timeout {
            duration: std::time::Duration::from_secs(30),
        };

        assert!(invalid.is_construction());
        assert!(encode.is_construction());
        assert!(!encode.is_transport());

        assert!(transport.is_transport());
        assert!(decode.is_transport());
        assert!(timeout.is_transport());
        assert!(MessengerError::Cancelled.is_transport());
        assert!(!MessengerError::Cancelled.is_construction());

        let config = MessengerError::Config("empty".into());
        assert!(!config.is_construction());
        assert!(!config.is_transport());
    }

    #[test]
    fn error_display_includes_message() {
        let err = MessengerError::transport("connection refused", std::io::Error::other("x"));
        assert_eq!(err.to_string(), "transport error: connection refused");
        assert_eq!(MessengerError::Cancelled.to_string(), "request cancelled");
    }

    #[test]
    fn request_query_params_keep_order() {
        let req = HttpRequest::get("https://example.test/v2.6/USER_ID")
            .with_query("fields", "first_name")
            .with_query("access_token", "TOKEN");

        assert_eq!(req.method, http::Method::GET);
        assert!(req.body.is_none());
        assert_eq!(req.query[0].0, "fields");
        assert_eq!(req.query_param("access_token"), Some("TOKEN"));
        assert_eq!(req.query_param("missing"), None);
    }

    #[test]
    fn multipart_body_part_lookup() {
        let body = RequestBody::Multipart(vec![
            FormPart::Text {
                name: "recipient".into(),
                value: "{}".into(),
            },
            FormPart::File {
                name: "filedata".into(),
                file_name: "image.png".into(),
                content_type: "image/png".into(),
                data: vec![1, 2, 3],
            },
        ]);

        assert_eq!(body.media_type(), "multipart/form-data");
        assert!(matches!(
            body.part("filedata"),
            Some(FormPart::File { content_type, .. }) if content_type == "image/png"
        ));
        assert!(body.part("notification_type").is_none());
        assert!(RequestBody::Json(b"{}".to_vec()).part("recipient").is_none());
    }

    struct Echo;

    #[async_trait]
    impl Transport for Echo {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, MessengerError> {
            Ok(HttpResponse::new(StatusCode::OK, request.url.into_bytes()))
        }
    }

    #[tokio::test]
    async fn arc_transport_delegates() {
        let transport: std::sync::Arc<dyn Transport> = std::sync::Arc::new(Echo);
        let response = transport
            .execute(HttpRequest::get("https://example.test/"))
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, b"https://example.test/");
    }
}
