// SPDX-FileCopyrightText: 2026 fbmessenger Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structured message templates and their buttons.

use serde::Serialize;

/// Payload of a `template` attachment, tagged by `template_type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "template_type", rename_all = "snake_case")]
pub enum Template {
    Button(ButtonTemplate),
    Generic(GenericTemplate),
    Receipt(ReceiptTemplate),
}

/// Text with up to three call-to-action buttons.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonTemplate {
    pub text: String,
    pub buttons: Vec<Button>,
}

/// A horizontally scrollable carousel of elements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenericTemplate {
    pub elements: Vec<GenericElement>,
}

/// One card in a generic template.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenericElement {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
}

impl GenericElement {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn item_url(mut self, url: impl Into<String>) -> Self {
        self.item_url = Some(url.into());
        self
    }

    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn button(mut self, button: Button) -> Self {
        self.buttons.push(button);
        self
    }
}

/// An order confirmation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceiptTemplate {
    pub recipient_name: String,
    pub order_number: String,
    pub currency: String,
    pub payment_method: String,

    /// Order time in epoch seconds, as a string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_url: Option<String>,

    pub elements: Vec<ReceiptElement>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    pub summary: Summary,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub adjustments: Vec<Adjustment>,
}

/// A purchased item on a receipt.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReceiptElement {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    pub price: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Shipping address on a receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Address {
    pub street_1: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_2: Option<String>,

    pub city: String,
    pub postal_code: String,
    pub state: String,
    pub country: String,
}

/// Totals on a receipt. Only `total_cost` is required by the platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_cost: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax: Option<f64>,

    pub total_cost: f64,
}

/// A discount or surcharge line on a receipt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Adjustment {
    pub name: String,
    pub amount: f64,
}

/// A call-to-action button, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Button {
    /// Opens `url` in the in-app browser.
    #[serde(rename = "web_url")]
    Url { title: String, url: String },
    /// Sends `payload` back to the webhook as a postback event.
    Postback { title: String, payload: String },
    /// Dials the phone number in `payload`.
    PhoneNumber { title: String, payload: String },
}

impl Button {
    pub fn url(title: impl Into<String>, url: impl Into<String>) -> Self {
        Button::Url {
            title: title.into(),
            url: url.into(),
        }
    }

    pub fn postback(title: impl Into<String>, payload: impl Into<String>) -> Self {
        Button::Postback {
            title: title.into(),
            payload: payload.into(),
        }
    }

    /// `number` must be in `+<country code><number>` form.
    pub fn phone_number(title: impl Into<String>, number: impl Into<String>) -> Self {
        Button::PhoneNumber {
            title: title.into(),
            payload: number.into(),
        }
    }
}
