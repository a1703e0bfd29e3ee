// SPDX-FileCopyrightText: 2026 fbmessenger Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for collaborators injected into the client.
//!
//! Traits use `#[async_trait]` for dynamic dispatch compatibility.

pub mod transport;

pub use transport::Transport;
