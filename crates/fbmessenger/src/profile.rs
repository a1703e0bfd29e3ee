// SPDX-FileCopyrightText: 2026 fbmessenger Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User Profile API response.

use serde::{Deserialize, Serialize};

/// Public profile of a user, fetched by page-scoped id.
///
/// Fields not returned by the platform (not requested, or not permitted)
/// decode to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(rename = "profile_pic", default)]
    pub profile_photo_url: String,

    #[serde(default)]
    pub locale: String,

    /// Offset from UTC in hours.
    #[serde(default)]
    pub timezone: i32,

    #[serde(default)]
    pub gender: String,
}
