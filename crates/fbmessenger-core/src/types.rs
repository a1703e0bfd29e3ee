// SPDX-FileCopyrightText: 2026 fbmessenger Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire-level request and response values exchanged with a [`Transport`].
//!
//! [`Transport`]: crate::traits::Transport

use http::{Method, StatusCode};

/// An outbound HTTP request, fully encoded and ready for a transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute URL without the query string.
    pub url: String,
    /// Query parameters, appended in order.
    pub query: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

impl HttpRequest {
    /// Creates a GET request with no body.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Creates a POST request carrying `body`.
    pub fn post(url: impl Into<String>, body: RequestBody) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    /// Appends a query parameter.
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Returns the value of the first query parameter called `name`.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// The encoded body of an outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// A single `application/json` document.
    Json(Vec<u8>),
    /// A `multipart/form-data` body, parts in order.
    Multipart(Vec<FormPart>),
}

impl RequestBody {
    /// The media type the transport should declare for this body.
    pub fn media_type(&self) -> &'static str {
        match self {
            RequestBody::Json(_) => "application/json",
            RequestBody::Multipart(_) => "multipart/form-data",
        }
    }

    /// Returns the form part called `name`, if this is a multipart body.
    pub fn part(&self, name: &str) -> Option<&FormPart> {
        match self {
            RequestBody::Json(_) => None,
            RequestBody::Multipart(parts) => parts.iter().find(|p| p.name() == name),
        }
    }
}

/// One part of a multipart form body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    /// A plain text field.
    Text { name: String, value: String },
    /// A binary file field.
    File {
        name: String,
        file_name: String,
        content_type: String,
        data: Vec<u8>,
    },
}

impl FormPart {
    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}

/// A response as returned by the transport: status plus raw body bytes.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}
