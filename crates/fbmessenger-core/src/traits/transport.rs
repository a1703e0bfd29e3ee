// SPDX-FileCopyrightText: 2026 fbmessenger Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transport trait: "perform a request, get a response".

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::MessengerError;
use crate::types::{HttpRequest, HttpResponse};

/// A pluggable HTTP roundtrip.
///
/// Implementations perform exactly one network call per `execute` and must not
/// retry. A non-2xx status is returned as a normal [`HttpResponse`]; only
/// failures to obtain a response at all are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, MessengerError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, MessengerError> {
        (**self).execute(request).await
    }
}
