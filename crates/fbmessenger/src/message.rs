// SPDX-FileCopyrightText: 2026 fbmessenger Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Outbound message content: text, attachments, and quick replies.
//!
//! An [`Attachment`] is a closed set of variants. The wire `type` discriminator
//! is derived from the variant, and the `payload` object carries only the
//! fields of that variant. Absent optional fields are omitted, never `null`.

use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use crate::template::Template;

/// The `message` object of a send request.
///
/// Exactly one of `text` or `attachment` must be set before sending; quick
/// replies may accompany either.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_replies: Option<Vec<QuickReply>>,
}

impl Message {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn attachment(attachment: Attachment) -> Self {
        Self {
            attachment: Some(attachment),
            ..Self::default()
        }
    }

    /// The upload carried by this message's attachment, if it is one.
    pub fn upload(&self) -> Option<&Upload> {
        match &self.attachment {
            Some(Attachment::Media {
                source: MediaSource::Upload(upload),
                ..
            }) => Some(upload),
            _ => None,
        }
    }
}

/// Kind of media attachment; doubles as the wire `type` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum MediaKind {
    Image,
    Audio,
    Video,
    File,
}

/// Structured content attached to an outbound message.
#[derive(Debug, Clone, PartialEq)]
pub enum Attachment {
    /// An image, audio clip, video, or file.
    Media { kind: MediaKind, source: MediaSource },
    /// A structured template (button, generic, receipt).
    Template(Template),
}

impl Attachment {
    /// The wire `type` discriminator for this attachment.
    pub fn type_name(&self) -> &'static str {
        match self {
            Attachment::Media { kind, .. } => (*kind).into(),
            Attachment::Template(_) => "template",
        }
    }
}

impl Serialize for Attachment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Attachment", 2)?;
        state.serialize_field("type", self.type_name())?;
        match self {
            Attachment::Media { source, .. } => state.serialize_field("payload", source)?,
            Attachment::Template(template) => state.serialize_field("payload", template)?,
        }
        state.end()
    }
}

/// How the bytes of a media attachment reach the platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MediaSource {
    /// The platform fetches the resource from a public URL.
    Url {
        url: String,
        #[serde(skip_serializing_if = "std::ops::Not::not")]
        is_reusable: bool,
    },
    /// The bytes travel in the request as a multipart `filedata` part.
    Upload(Upload),
    /// A previously uploaded, reusable asset.
    Saved { attachment_id: String },
}

impl MediaSource {
    pub fn url(url: impl Into<String>) -> Self {
        MediaSource::Url {
            url: url.into(),
            is_reusable: false,
        }
    }

    pub fn upload(data: impl Into<Vec<u8>>, content_type: impl Into<String>) -> Self {
        MediaSource::Upload(Upload {
            data: data.into(),
            content_type: content_type.into(),
            is_reusable: false,
        })
    }

    pub fn saved(attachment_id: impl Into<String>) -> Self {
        MediaSource::Saved {
            attachment_id: attachment_id.into(),
        }
    }

    /// Asks the platform to keep the asset and return an `attachment_id`.
    /// No effect on saved assets.
    pub(crate) fn set_reusable(&mut self) {
        match self {
            MediaSource::Url { is_reusable, .. } => *is_reusable = true,
            MediaSource::Upload(upload) => upload.is_reusable = true,
            MediaSource::Saved { .. } => {}
        }
    }
}

/// Raw bytes to upload with the message.
///
/// Only `is_reusable` appears in the JSON `payload`; the bytes and their
/// content type are carried by the `filedata` form part.
#[derive(Clone, PartialEq, Serialize)]
pub struct Upload {
    #[serde(skip)]
    pub data: Vec<u8>,

    #[serde(skip)]
    pub content_type: String,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_reusable: bool,
}

impl std::fmt::Debug for Upload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Upload")
            .field("len", &self.data.len())
            .field("content_type", &self.content_type)
            .field("is_reusable", &self.is_reusable)
            .finish()
    }
}

/// A quick reply button shown above the composer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "content_type", rename_all = "snake_case")]
pub enum QuickReply {
    Text {
        title: String,
        payload: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image_url: Option<String>,
    },
    /// Asks the user to share their location.
    Location,
}

impl QuickReply {
    pub fn text(title: impl Into<String>, payload: impl Into<String>) -> Self {
        QuickReply::Text {
            title: title.into(),
            payload: payload.into(),
            image_url: None,
        }
    }

    pub fn location() -> Self {
        QuickReply::Location
    }

    /// Adds an icon to a text quick reply. Location replies are unchanged.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        if let QuickReply::Text { image_url, .. } = &mut self {
            *image_url = Some(url.into());
        }
        self
    }
}
