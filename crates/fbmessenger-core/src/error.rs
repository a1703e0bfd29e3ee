// SPDX-FileCopyrightText: 2026 fbmessenger Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the fbmessenger client.
//!
//! Platform-level failures (an `error` object inside an otherwise valid
//! response body) are not represented here. They are surfaced as data on the
//! decoded response and must be inspected by the caller.

use thiserror::Error;

/// Boxed source error carried by several variants.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The primary error type returned by client operations.
#[derive(Debug, Error)]
pub enum MessengerError {
    /// The request was structurally invalid (missing recipient, empty message).
    /// Reported before any network I/O.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Marshaling the request body failed. Reported before any network I/O.
    #[error("encoding error: {message}")]
    Encode {
        message: String,
        source: Option<BoxError>,
    },

    /// Network failure or any other error raised by the transport.
    #[error("transport error: {message}")]
    Transport {
        message: String,
        source: Option<BoxError>,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode response: {message}")]
    Decode {
        message: String,
        source: Option<BoxError>,
    },

    /// The caller cancelled the outstanding call.
    #[error("request cancelled")]
    Cancelled,

    /// The transport gave up waiting for a response.
    #[error("request timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Invalid client configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl MessengerError {
    /// Builds an [`MessengerError::Encode`] wrapping the underlying error.
    pub fn encode<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Encode {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Builds a [`MessengerError::Transport`] wrapping the underlying error.
    pub fn transport<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Builds a [`MessengerError::Decode`] wrapping the underlying error.
    pub fn decode<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Decode {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// True for errors raised while building the request, before any I/O.
    pub fn is_construction(&self) -> bool {
        matches!(self, Self::InvalidRequest(_) | Self::Encode { .. })
    }

    /// True for errors raised by or after the network roundtrip.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Decode { .. } | Self::Cancelled | Self::Timeout { .. }
        )
    }
}
