// SPDX-FileCopyrightText: 2026 fbmessenger Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Routing of webhook events to registered handlers.
//!
//! [`CallbackDispatcher::dispatch`] visits every event of every entry in wire
//! order and invokes at most one handler per event, chosen by
//! [`MessagingEvent::kind`]. Events with no recognised variant, or whose
//! variant has no registered handler, are skipped without error so that new
//! platform event kinds do not break existing consumers.
//!
//! A handler error never stops the sweep. What `dispatch` returns afterwards
//! is decided by the dispatcher's [`HandlerErrorPolicy`].

use fbmessenger_core::BoxError;
use tracing::{debug, trace, warn};

use crate::callback::{Callback, EventKind, MessagingEvent};

/// Error type handlers may return.
pub type HandlerError = BoxError;

/// A function invoked for one messaging event.
pub type EventHandler = Box<dyn Fn(&MessagingEvent) -> Result<(), HandlerError> + Send + Sync>;

/// What [`CallbackDispatcher::dispatch`] reports after handler failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HandlerErrorPolicy {
    /// Log failures and return `Ok`.
    Ignore,
    /// Return only the first failure.
    PropagateFirst,
    /// Return every failure.
    #[default]
    CollectAll,
}

/// A handler failure and the position of the event that caused it.
#[derive(Debug)]
pub struct HandlerFailure {
    pub entry_index: usize,
    pub event_index: usize,
    pub kind: EventKind,
    pub error: HandlerError,
}

/// Returned when at least one handler failed and the policy reports it.
#[derive(Debug, thiserror::Error)]
#[error("{} callback handler(s) failed; first: {}", .failures.len(), first_message(.failures))]
pub struct DispatchError {
    /// In sweep order. Holds exactly one failure under
    /// [`HandlerErrorPolicy::PropagateFirst`].
    pub failures: Vec<HandlerFailure>,
}

fn first_message(failures: &[HandlerFailure]) -> String {
    failures
        .first()
        .map(|f| f.error.to_string())
        .unwrap_or_default()
}

/// Counts from one sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    /// Events passed to a handler, whether or not it succeeded.
    pub routed: usize,
    /// Events with no recognised variant or no registered handler.
    pub skipped: usize,
}

/// Routes callback events to per-variant handlers.
///
/// Holds no mutable state, so one dispatcher may be shared across threads and
/// used on independent callbacks concurrently.
#[derive(Default)]
pub struct CallbackDispatcher {
    message: Option<EventHandler>,
    delivery: Option<EventHandler>,
    postback: Option<EventHandler>,
    authentication: Option<EventHandler>,
    policy: HandlerErrorPolicy,
}

impl CallbackDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_message<F>(mut self, handler: F) -> Self
    where
        F: Fn(&MessagingEvent) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        self.message = Some(Box::new(handler));
        self
    }

    pub fn on_delivery<F>(mut self, handler: F) -> Self
    where
        F: Fn(&MessagingEvent) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        self.delivery = Some(Box::new(handler));
        self
    }

    pub fn on_postback<F>(mut self, handler: F) -> Self
    where
        F: Fn(&MessagingEvent) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        self.postback = Some(Box::new(handler));
        self
    }

    /// Handler for opt-in (authentication) events.
    pub fn on_authentication<F>(mut self, handler: F) -> Self
    where
        F: Fn(&MessagingEvent) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        self.authentication = Some(Box::new(handler));
        self
    }

    pub fn with_error_policy(mut self, policy: HandlerErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn error_policy(&self) -> HandlerErrorPolicy {
        self.policy
    }

    fn handler_for(&self, kind: EventKind) -> Option<&EventHandler> {
        match kind {
            EventKind::Message => self.message.as_ref(),
            EventKind::Delivery => self.delivery.as_ref(),
            EventKind::Postback => self.postback.as_ref(),
            EventKind::OptIn => self.authentication.as_ref(),
        }
    }

    /// Invokes the matching handler for every event in `callback`, in entry
    /// order then event order. Each event is visited exactly once.
    pub fn dispatch(&self, callback: &Callback) -> Result<DispatchSummary, DispatchError> {
        let mut summary = DispatchSummary::default();
        let mut failures = Vec::new();

        for (entry_index, entry) in callback.entries.iter().enumerate() {
            for (event_index, event) in entry.messaging.iter().enumerate() {
                let Some(kind) = event.kind() else {
                    debug!(entry_index, event_index, "skipping event with no known variant");
                    summary.skipped += 1;
                    continue;
                };
                let Some(handler) = self.handler_for(kind) else {
                    debug!(entry_index, event_index, %kind, "no handler registered, skipping");
                    summary.skipped += 1;
                    continue;
                };

                trace!(entry_index, event_index, %kind, sender = %event.sender.id, "routing event");
                summary.routed += 1;

                if let Err(error) = handler(event) {
                    warn!(
                        entry_index,
                        event_index,
                        %kind,
                        error = %error,
                        "callback handler failed"
                    );
                    failures.push(HandlerFailure {
                        entry_index,
                        event_index,
                        kind,
                        error,
                    });
                }
            }
        }

        match self.policy {
            _ if failures.is_empty() => Ok(summary),
            HandlerErrorPolicy::Ignore => Ok(summary),
            HandlerErrorPolicy::PropagateFirst => {
                failures.truncate(1);
                Err(DispatchError { failures })
            }
            HandlerErrorPolicy::CollectAll => Err(DispatchError { failures }),
        }
    }
}

impl std::fmt::Debug for CallbackDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackDispatcher")
            .field("message", &self.message.is_some())
            .field("delivery", &self.delivery.is_some())
            .field("postback", &self.postback.is_some())
            .field("authentication", &self.authentication.is_some())
            .field("policy", &self.policy)
            .finish()
    }
}
