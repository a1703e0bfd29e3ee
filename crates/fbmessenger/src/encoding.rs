// SPDX-FileCopyrightText: 2026 fbmessenger Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire encoding of send requests.
//!
//! Requests are sent as one JSON document unless the attachment carries raw
//! bytes, in which case they become a multipart form with `recipient`,
//! `message`, optional `notification_type`, and `filedata` parts.

use fbmessenger_core::{FormPart, MessengerError, RequestBody};
use serde::Serialize;
use tracing::debug;

use crate::request::SendRequest;

/// Encodes a request for the Send API, consuming it.
///
/// Fails before any I/O if the request is structurally invalid or cannot be
/// marshaled.
pub fn encode(request: SendRequest) -> Result<RequestBody, MessengerError> {
    request.validate()?;

    if request.message.upload().is_some() {
        encode_multipart(request)
    } else {
        Ok(RequestBody::Json(to_json(&request, "send request")?))
    }
}

fn encode_multipart(mut request: SendRequest) -> Result<RequestBody, MessengerError> {
    // Serialize before the bytes are taken out; the payload JSON never
    // includes them.
    let recipient = to_json_string(&request.recipient, "recipient")?;
    let message = to_json_string(&request.message, "message")?;

    let upload = match request.media_source_mut() {
        Some(crate::message::MediaSource::Upload(upload)) => upload,
        _ => {
            return Err(MessengerError::InvalidRequest(
                "multipart encoding requires an upload attachment".into(),
            ));
        }
    };
    let data = std::mem::take(&mut upload.data);
    let content_type = std::mem::take(&mut upload.content_type);

    debug!(
        content_type = %content_type,
        size = data.len(),
        "encoding send request as multipart form"
    );

    let mut parts = vec![
        FormPart::Text {
            name: "recipient".into(),
            value: recipient,
        },
        FormPart::Text {
            name: "message".into(),
            value: message,
        },
    ];
    if let Some(notification_type) = request.notification_type {
        parts.push(FormPart::Text {
            name: "notification_type".into(),
            value: notification_type.to_string(),
        });
    }
    parts.push(FormPart::File {
        name: "filedata".into(),
        file_name: upload_file_name(&content_type),
        content_type,
        data,
    });

    Ok(RequestBody::Multipart(parts))
}

/// File name declared on the `filedata` part: the content type with `/`
/// replaced by `.`, so `image/png` becomes `image.png`.
pub fn upload_file_name(content_type: &str) -> String {
    content_type.replace('/', ".")
}

fn to_json<T: Serialize>(value: &T, what: &str) -> Result<Vec<u8>, MessengerError> {
    serde_json::to_vec(value)
        .map_err(|e| MessengerError::encode(format!("failed to serialize {what}"), e))
}

fn to_json_string<T: Serialize>(value: &T, what: &str) -> Result<String, MessengerError> {
    serde_json::to_string(value)
        .map_err(|e| MessengerError::encode(format!("failed to serialize {what}"), e))
}
