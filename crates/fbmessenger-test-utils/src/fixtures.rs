// SPDX-FileCopyrightText: 2026 fbmessenger Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builders for webhook callback bodies as the platform sends them.

use serde_json::{Value, json};

pub const PAGE_ID: &str = "PAGE_ID";
pub const TIMESTAMP: i64 = 1458692752478;

/// A messaging event from `sender` to the page carrying `field: value`.
pub fn event(sender: &str, field: &str, value: Value) -> Value {
    let mut event = json!({
        "sender": { "id": sender },
        "recipient": { "id": PAGE_ID },
        "timestamp": TIMESTAMP,
    });
    event[field] = value;
    event
}

pub fn text_event(sender: &str, text: &str) -> Value {
    event(sender, "message", json!({ "mid": format!("mid.{sender}"), "seq": 73, "text": text }))
}

pub fn delivery_event(sender: &str, watermark: i64) -> Value {
    event(
        sender,
        "delivery",
        json!({
            "mids": ["mid.1458668856218:ed81099e15d3f4f233"],
            "watermark": watermark,
            "seq": 37
        }),
    )
}

pub fn postback_event(sender: &str, payload: &str) -> Value {
    event(sender, "postback", json!({ "payload": payload }))
}

pub fn optin_event(sender: &str, reference: &str) -> Value {
    event(sender, "optin", json!({ "ref": reference }))
}

/// An entry for the fixture page holding `events` in order.
pub fn entry(events: Vec<Value>) -> Value {
    json!({ "id": PAGE_ID, "time": TIMESTAMP, "messaging": events })
}

/// A complete `page` callback.
pub fn callback(entries: Vec<Value>) -> Value {
    json!({ "object": "page", "entry": entries })
}

/// Serializes a callback the way it arrives on the wire.
pub fn callback_body(entries: Vec<Value>) -> Vec<u8> {
    callback(entries).to_string().into_bytes()
}
