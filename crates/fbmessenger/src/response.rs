// SPDX-FileCopyrightText: 2026 fbmessenger Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Send API response types.

use serde::{Deserialize, Serialize};

/// Body of a Send API response.
///
/// A successful HTTP roundtrip does not imply the message was accepted:
/// check [`SendResponse::error`] (or call [`SendResponse::into_result`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResponse {
    /// Empty when the platform reported an error.
    #[serde(default)]
    pub recipient_id: String,

    /// Empty when the platform reported an error.
    #[serde(default)]
    pub message_id: String,

    /// Set when reusable media was sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<SendError>,
}

impl SendResponse {
    /// True when the body carries no `error` object.
    ///
    /// Reflects only the decoded body, not the HTTP status: a non-2xx reply
    /// with a body of `{}` still counts as success here.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Converts a platform-reported error into `Err`.
    pub fn into_result(self) -> Result<SendResponse, SendError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self),
        }
    }
}

/// An application-level failure reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("platform error {code} ({error_type}): {message}")]
pub struct SendError {
    pub message: String,

    #[serde(rename = "type")]
    pub error_type: String,

    pub code: i64,

    pub error_data: String,

    #[serde(rename = "fbtrace_id")]
    pub trace_id: String,
}
