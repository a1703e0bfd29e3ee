// SPDX-FileCopyrightText: 2026 fbmessenger Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inbound webhook payloads.
//!
//! A [`Callback`] batches entries, one per page, and each [`Entry`] batches
//! messaging events. Callers must not assume one event per delivery.
//! Unknown fields are ignored so new platform fields do not break decoding.

use chrono::{DateTime, Utc};
use fbmessenger_core::MessengerError;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Root of a webhook delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Callback {
    /// Subscription object, `page` for Messenger.
    pub object: String,

    #[serde(rename = "entry")]
    pub entries: Vec<Entry>,
}

impl Callback {
    /// Iterates every messaging event across all entries in wire order.
    pub fn events(&self) -> impl Iterator<Item = &MessagingEvent> {
        self.entries.iter().flat_map(|entry| entry.messaging.iter())
    }
}

/// One page's events within a delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "id")]
    pub page_id: String,

    /// Epoch milliseconds.
    pub time: i64,

    #[serde(default)]
    pub messaging: Vec<MessagingEvent>,
}

impl Entry {
    pub fn time_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.time)
    }
}

/// An opaque platform identifier for a user or page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Principal {
    pub id: String,
}

/// One user/page interaction.
///
/// The wire format carries the variant as one of four optional fields. Use
/// [`MessagingEvent::kind`] to classify an event instead of inspecting the
/// fields directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagingEvent {
    pub sender: Principal,
    pub recipient: Principal,

    /// Epoch milliseconds.
    #[serde(default)]
    pub timestamp: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<CallbackMessage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery: Option<Delivery>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postback: Option<Postback>,

    #[serde(rename = "optin", default, skip_serializing_if = "Option::is_none")]
    pub opt_in: Option<OptIn>,
}

/// The variant of a [`MessagingEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum EventKind {
    Message,
    Delivery,
    Postback,
    OptIn,
}

impl MessagingEvent {
    /// Classifies the event.
    ///
    /// Precedence is fixed: message, then delivery, then postback, then
    /// opt-in. An event carrying none of them yields `None`.
    pub fn kind(&self) -> Option<EventKind> {
        if self.message.is_some() {
            Some(EventKind::Message)
        } else if self.delivery.is_some() {
            Some(EventKind::Delivery)
        } else if self.postback.is_some() {
            Some(EventKind::Postback)
        } else if self.opt_in.is_some() {
            Some(EventKind::OptIn)
        } else {
            None
        }
    }

    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

/// A message sent by a user to the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackMessage {
    #[serde(rename = "mid")]
    pub message_id: String,

    #[serde(rename = "seq", default)]
    pub sequence: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<CallbackAttachment>,

    /// Present when the user tapped a quick reply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_reply: Option<QuickReplyPayload>,
}

/// Payload of the quick reply the user tapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickReplyPayload {
    pub payload: String,
}

/// An attachment on a received message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackAttachment {
    /// `image`, `audio`, `video`, `file`, `location`, `fallback`, ...
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<CallbackPayload>,
}

impl CallbackAttachment {
    pub fn url(&self) -> Option<&str> {
        match &self.payload {
            Some(CallbackPayload::Media { url }) => Some(url),
            _ => None,
        }
    }

    pub fn coordinates(&self) -> Option<&Coordinates> {
        match &self.payload {
            Some(CallbackPayload::Location { coordinates }) => Some(coordinates),
            _ => None,
        }
    }
}

/// Payload of a received attachment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CallbackPayload {
    Location { coordinates: Coordinates },
    Media { url: String },
    /// Any payload shape not modelled above.
    Other(serde_json::Value),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub long: f64,
}

/// Confirms delivery of one or more messages the page sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    #[serde(rename = "mids", default, skip_serializing_if = "Vec::is_empty")]
    pub message_ids: Vec<String>,

    /// All messages sent before this epoch-millisecond time were delivered.
    pub watermark: i64,

    #[serde(rename = "seq", default)]
    pub sequence: i64,
}

/// A postback button was tapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Postback {
    pub payload: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// The user authenticated through a Send-to-Messenger plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptIn {
    #[serde(rename = "ref")]
    pub reference: String,
}

/// Decodes a webhook request body into a [`Callback`].
pub fn decode_callback(body: &[u8]) -> Result<Callback, MessengerError> {
    serde_json::from_slice(body).map_err(|e| MessengerError::decode("invalid callback body", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(json: &str) -> MessagingEvent {
        serde_json::from_str(json).expect("valid event")
    }

    #[test]
    fn kind_follows_fixed_precedence() {
        let both = event(
            r#"{"sender":{"id":"U"},"recipient":{"id":"P"},"timestamp":1,
                "message":{"mid":"m","seq":1,"text":"hi"},
                "delivery":{"mids":["m0"],"watermark":1,"seq":2}}"#,
        );
        assert_eq!(both.kind(), Some(EventKind::Message));

        let postback_and_optin = event(
            r#"{"sender":{"id":"U"},"recipient":{"id":"P"},
                "postback":{"payload":"X"},"optin":{"ref":"R"}}"#,
        );
        assert_eq!(postback_and_optin.kind(), Some(EventKind::Postback));
    }

    #[test]
    fn unknown_event_has_no_kind() {
        let read = event(
            r#"{"sender":{"id":"U"},"recipient":{"id":"P"},"timestamp":1,
                "read":{"watermark":1458668856253,"seq":38}}"#,
        );
        assert_eq!(read.kind(), None);
    }

    #[test]
    fn location_attachment_decodes_coordinates() {
        let message: CallbackMessage = serde_json::from_str(
            r#"{"mid":"m","seq":3,"attachments":[
                {"type":"location","payload":{"coordinates":{"lat":37.48,"long":-122.15}}}
            ]}"#,
        )
        .unwrap();
        let coordinates = message.attachments[0].coordinates().unwrap();
        assert_eq!(coordinates.lat, 37.48);
        assert_eq!(coordinates.long, -122.15);
        assert!(message.attachments[0].url().is_none());
    }

    #[test]
    fn unmodelled_attachment_payload_is_kept() {
        let message: CallbackMessage = serde_json::from_str(
            r#"{"mid":"m","seq":3,"attachments":[
                {"type":"fallback","payload":{"title":"Shared link"}},
                {"type":"fallback","payload":null}
            ]}"#,
        )
        .unwrap();
        assert!(matches!(
            &message.attachments[0].payload,
            Some(CallbackPayload::Other(v)) if v["title"] == "Shared link"
        ));
        assert!(message.attachments[1].payload.is_none());
    }

    #[test]
    fn timestamps_convert_to_utc() {
        let e = event(r#"{"sender":{"id":"U"},"recipient":{"id":"P"},"timestamp":1458692752478}"#);
        let at = e.timestamp_utc().unwrap();
        assert_eq!(at.timestamp_millis(), 1458692752478);
    }

    #[test]
    fn decode_rejects_malformed_body() {
        let err = decode_callback(b"{\"object\":").unwrap_err();
        assert!(matches!(err, MessengerError::Decode { .. }));
    }

    #[test]
    fn event_kind_display() {
        assert_eq!(EventKind::OptIn.to_string(), "opt_in");
        assert_eq!(EventKind::Message.to_string(), "message");
    }
}
