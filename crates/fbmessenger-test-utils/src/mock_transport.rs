// SPDX-FileCopyrightText: 2026 fbmessenger Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock transport for deterministic client tests.
//!
//! `MockTransport` records every request it receives and answers from a queue
//! of scripted outcomes. With an empty queue it answers `200 {}`.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use http::StatusCode;
use tokio::sync::Mutex;

use fbmessenger_core::{HttpRequest, HttpResponse, MessengerError, Transport};

/// A scripted [`Transport`].
#[derive(Default)]
pub struct MockTransport {
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    outcomes: Arc<Mutex<VecDeque<Result<HttpResponse, MessengerError>>>>,
    stalled: bool,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Never completes `execute` after recording the request. Used to test
    /// cancellation.
    pub fn stalled(mut self) -> Self {
        self.stalled = true;
        self
    }

    /// Queue a response with the given status and body.
    pub async fn push_response(&self, response: HttpResponse) {
        self.outcomes.lock().await.push_back(Ok(response));
    }

    /// Queue a response from a status code and a body string.
    ///
    /// Panics on an invalid status code.
    pub async fn push_json(&self, status: u16, body: &str) {
        let status = StatusCode::from_u16(status).expect("valid status code");
        self.push_response(HttpResponse::new(status, body.as_bytes())).await;
    }

    /// Queue a transport failure.
    pub async fn push_error(&self, error: MessengerError) {
        self.outcomes.lock().await.push_back(Err(error));
    }

    /// All requests received, in order.
    pub async fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().await.last().cloned()
    }

    pub async fn request_count(&self) -> usize {
        self.requests.lock().await.len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, MessengerError> {
        self.requests.lock().await.push(request);
        if self.stalled {
            std::future::pending::<()>().await;
        }
        self.outcomes
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(HttpResponse::new(StatusCode::OK, b"{}".as_slice())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn answers_in_queue_order_then_default() {
        let transport = MockTransport::new();
        transport.push_json(400, r#"{"error":1}"#).await;
        transport
            .push_error(MessengerError::Transport {
                message: "down".into(),
                source: None,
            })
            .await;

        let first = transport.execute(HttpRequest::get("http://a/1")).await.unwrap();
        assert_eq!(first.status, StatusCode::BAD_REQUEST);
        assert!(transport.execute(HttpRequest::get("http://a/2")).await.is_err());
        let third = transport.execute(HttpRequest::get("http://a/3")).await.unwrap();
        assert_eq!(third.body, b"{}");

        let urls: Vec<String> = transport.requests().await.into_iter().map(|r| r.url).collect();
        assert_eq!(urls, ["http://a/1", "http://a/2", "http://a/3"]);
    }

    #[tokio::test]
    async fn stalled_transport_never_answers() {
        let transport = MockTransport::new().stalled();
        let outcome = tokio::time::timeout(
            std::time::Duration::from_millis(20),
            transport.execute(HttpRequest::get("http://a/")),
        )
        .await;
        assert!(outcome.is_err());
        assert_eq!(transport.request_count().await, 1);
    }
}
