// SPDX-FileCopyrightText: 2026 fbmessenger Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for fbmessenger integration tests.
//!
//! - [`MockTransport`] - scripted transport that records every request
//! - [`fixtures`] - builders for webhook callback bodies

pub mod fixtures;
pub mod mock_transport;

pub use mock_transport::MockTransport;
