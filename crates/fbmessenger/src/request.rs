// SPDX-FileCopyrightText: 2026 fbmessenger Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The outbound send request and its addressing.

use fbmessenger_core::MessengerError;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::message::{Message, MediaSource};

/// Who receives a message: a page-scoped user id or a phone number.
///
/// Serializes to `{"id": ...}` or `{"phone_number": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recipient {
    Id(String),
    PhoneNumber(String),
}

/// Push notification behaviour on the recipient's device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    /// Sound and vibration.
    Regular,
    /// On-screen notification only.
    SilentPush,
    /// No notification.
    NoPush,
}

/// A message addressed to one recipient.
///
/// Built with the helpers in [`crate::builder`], then consumed by
/// [`crate::encoding::encode`] (directly or through the client).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<Recipient>,

    pub message: Message,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_type: Option<NotificationType>,
}

impl SendRequest {
    /// A request carrying `message` with no recipient yet.
    pub fn new(message: Message) -> Self {
        Self {
            recipient: None,
            message,
            notification_type: None,
        }
    }

    /// Checks the structural invariants a request must meet before encoding.
    pub fn validate(&self) -> Result<(), MessengerError> {
        match &self.recipient {
            None => {
                return Err(MessengerError::InvalidRequest(
                    "recipient is not set; call `to` or `to_phone_number`".into(),
                ));
            }
            Some(Recipient::Id(id)) | Some(Recipient::PhoneNumber(id)) if id.is_empty() => {
                return Err(MessengerError::InvalidRequest(
                    "recipient must not be empty".into(),
                ));
            }
            Some(_) => {}
        }

        match (&self.message.text, &self.message.attachment) {
            (Some(_), Some(_)) => Err(MessengerError::InvalidRequest(
                "message must carry either text or an attachment, not both".into(),
            )),
            (None, None) => Err(MessengerError::InvalidRequest(
                "message must carry text or an attachment".into(),
            )),
            _ => match self.message.upload() {
                Some(upload) if upload.content_type.trim().is_empty() => Err(
                    MessengerError::InvalidRequest("upload content type must not be empty".into()),
                ),
                _ => Ok(()),
            },
        }
    }

    /// Mutable access to the media source, for modifiers that adjust it.
    pub(crate) fn media_source_mut(&mut self) -> Option<&mut MediaSource> {
        match &mut self.message.attachment {
            Some(crate::message::Attachment::Media { source, .. }) => Some(source),
            _ => None,
        }
    }
}
