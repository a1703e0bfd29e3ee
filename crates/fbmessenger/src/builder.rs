// SPDX-FileCopyrightText: 2026 fbmessenger Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fluent construction of [`SendRequest`] values.
//!
//! Each helper returns a request with only its `message` populated; call
//! [`SendRequest::to`] or [`SendRequest::to_phone_number`] before sending.
//! Modifiers take the request by value and hand it back, so calls chain:
//!
//! ```
//! use fbmessenger::builder::text_message;
//! use fbmessenger::QuickReply;
//!
//! let request = text_message("Pick a color")
//!     .to("USER_ID")
//!     .silent_push()
//!     .quick_replies(vec![QuickReply::text("Red", "PICKED_RED")]);
//! assert!(request.validate().is_ok());
//! ```

use crate::message::{Attachment, MediaKind, MediaSource, Message, QuickReply};
use crate::request::{NotificationType, Recipient, SendRequest};
use crate::template::{
    Button, ButtonTemplate, GenericElement, GenericTemplate, ReceiptTemplate, Template,
};

pub fn text_message(text: impl Into<String>) -> SendRequest {
    SendRequest::new(Message::text(text))
}

/// A media attachment of any kind from any source.
pub fn media_message(kind: MediaKind, source: MediaSource) -> SendRequest {
    SendRequest::new(Message::attachment(Attachment::Media { kind, source }))
}

pub fn image_message(url: impl Into<String>) -> SendRequest {
    media_message(MediaKind::Image, MediaSource::url(url))
}

/// An image uploaded with the request. `content_type` is declared verbatim on
/// the `filedata` part, e.g. `image/png`.
pub fn image_upload_message(
    data: impl Into<Vec<u8>>,
    content_type: impl Into<String>,
) -> SendRequest {
    media_message(MediaKind::Image, MediaSource::upload(data, content_type))
}

pub fn image_saved_message(attachment_id: impl Into<String>) -> SendRequest {
    media_message(MediaKind::Image, MediaSource::saved(attachment_id))
}

pub fn video_message(url: impl Into<String>) -> SendRequest {
    media_message(MediaKind::Video, MediaSource::url(url))
}

pub fn video_upload_message(
    data: impl Into<Vec<u8>>,
    content_type: impl Into<String>,
) -> SendRequest {
    media_message(MediaKind::Video, MediaSource::upload(data, content_type))
}

pub fn video_saved_message(attachment_id: impl Into<String>) -> SendRequest {
    media_message(MediaKind::Video, MediaSource::saved(attachment_id))
}

pub fn audio_message(url: impl Into<String>) -> SendRequest {
    media_message(MediaKind::Audio, MediaSource::url(url))
}

pub fn file_message(url: impl Into<String>) -> SendRequest {
    media_message(MediaKind::File, MediaSource::url(url))
}

pub fn button_template_message(text: impl Into<String>, buttons: Vec<Button>) -> SendRequest {
    template_message(Template::Button(ButtonTemplate {
        text: text.into(),
        buttons,
    }))
}

pub fn generic_template_message(elements: Vec<GenericElement>) -> SendRequest {
    template_message(Template::Generic(GenericTemplate { elements }))
}

pub fn receipt_template_message(receipt: ReceiptTemplate) -> SendRequest {
    template_message(Template::Receipt(receipt))
}

fn template_message(template: Template) -> SendRequest {
    SendRequest::new(Message::attachment(Attachment::Template(template)))
}

impl SendRequest {
    /// Addresses the request to a page-scoped user id. Replaces any earlier
    /// recipient, including a phone number.
    pub fn to(mut self, user_id: impl Into<String>) -> Self {
        self.recipient = Some(Recipient::Id(user_id.into()));
        self
    }

    /// Addresses the request to a phone number. Replaces any earlier recipient.
    pub fn to_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.recipient = Some(Recipient::PhoneNumber(phone_number.into()));
        self
    }

    pub fn notification_type(mut self, notification_type: NotificationType) -> Self {
        self.notification_type = Some(notification_type);
        self
    }

    pub fn regular(self) -> Self {
        self.notification_type(NotificationType::Regular)
    }

    pub fn silent_push(self) -> Self {
        self.notification_type(NotificationType::SilentPush)
    }

    pub fn no_push(self) -> Self {
        self.notification_type(NotificationType::NoPush)
    }

    /// Sets the quick replies, replacing any previously set list.
    pub fn quick_replies(mut self, quick_replies: Vec<QuickReply>) -> Self {
        self.message.quick_replies = Some(quick_replies);
        self
    }

    /// Marks URL or uploaded media as reusable so the response carries an
    /// `attachment_id`. Other messages are returned unchanged.
    pub fn reusable(mut self) -> Self {
        if let Some(source) = self.media_source_mut() {
            source.set_reusable();
        }
        self
    }
}
