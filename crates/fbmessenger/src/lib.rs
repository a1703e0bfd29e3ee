// SPDX-FileCopyrightText: 2026 fbmessenger Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Facebook Messenger Platform client.
//!
//! - [`builder`] constructs outbound [`SendRequest`]s.
//! - [`encoding::encode`] picks JSON or multipart framing for a request.
//! - [`MessengerClient`] sends requests and fetches [`UserProfile`]s through an
//!   injected [`Transport`]; [`ReqwestTransport`] is the default one.
//! - [`decode_callback`] and [`CallbackDispatcher`] handle inbound webhooks.
//!
//! ```no_run
//! use std::sync::Arc;
//! use fbmessenger::{MessengerClient, ReqwestTransport, builder::text_message};
//!
//! # async fn run() -> Result<(), fbmessenger::MessengerError> {
//! let transport = ReqwestTransport::new(std::time::Duration::from_secs(30))?;
//! let client = MessengerClient::new(Arc::new(transport));
//! let response = client
//!     .send(text_message("Hello, world!").to("USER_ID"), "PAGE_ACCESS_TOKEN")
//!     .await?;
//! if let Some(error) = response.error {
//!     eprintln!("rejected: {error}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod callback;
pub mod client;
pub mod dispatch;
pub mod encoding;
pub mod message;
pub mod profile;
pub mod request;
pub mod response;
pub mod template;
pub mod transport;

pub use callback::{
    Callback, CallbackAttachment, CallbackMessage, CallbackPayload, Coordinates, Delivery, Entry,
    EventKind, MessagingEvent, OptIn, Postback, Principal, decode_callback,
};
pub use client::{DEFAULT_API_ROOT, MessengerClient};
pub use dispatch::{
    CallbackDispatcher, DispatchError, DispatchSummary, HandlerError, HandlerErrorPolicy,
    HandlerFailure,
};
pub use message::{Attachment, MediaKind, MediaSource, Message, QuickReply, Upload};
pub use profile::UserProfile;
pub use request::{NotificationType, Recipient, SendRequest};
pub use response::{SendError, SendResponse};
pub use template::{
    Address, Adjustment, Button, ButtonTemplate, GenericElement, GenericTemplate, ReceiptElement,
    ReceiptTemplate, Summary, Template,
};
pub use transport::ReqwestTransport;

pub use fbmessenger_core::{
    FormPart, HttpRequest, HttpResponse, MessengerError, RequestBody, Transport,
};
