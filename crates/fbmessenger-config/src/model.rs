// SPDX-FileCopyrightText: 2026 fbmessenger Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Fields requested from the user profile endpoint when none are configured.
pub const DEFAULT_PROFILE_FIELDS: &[&str] = &[
    "first_name",
    "last_name",
    "profile_pic",
    "locale",
    "timezone",
    "gender",
];

/// Top-level client configuration.
///
/// All sections are optional and default to values that talk to the public
/// Graph API.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MessengerConfig {
    /// Graph API endpoint settings.
    #[serde(default)]
    pub graph: GraphConfig,

    /// Page credentials.
    #[serde(default)]
    pub page: PageConfig,
}

/// Graph API endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GraphConfig {
    /// Scheme and host of the Graph API, without a version segment.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Version path segment, e.g. `v2.6`.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Per-request timeout applied by the HTTP transport, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Fields requested when fetching a user profile.
    #[serde(default = "default_profile_fields")]
    pub profile_fields: Vec<String>,
}

impl GraphConfig {
    /// The versioned API root, always ending with `/`. Only meaningful once
    /// [`validate_config`](crate::validate_config) has accepted the version.
    ///
    /// `https://graph.facebook.com` + `v2.6` yields `https://graph.facebook.com/v2.6/`.
    pub fn api_root(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let version = self.api_version.trim_matches('/');
        format!("{base}/{version}/")
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_version: default_api_version(),
            timeout_secs: default_timeout_secs(),
            profile_fields: default_profile_fields(),
        }
    }
}

fn default_base_url() -> String {
    "https://graph.facebook.com".to_string()
}

fn default_api_version() -> String {
    "v2.6".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_profile_fields() -> Vec<String> {
    DEFAULT_PROFILE_FIELDS.iter().map(|f| f.to_string()).collect()
}

/// Page credential configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PageConfig {
    /// Page access token. `None` means tokens are supplied per call.
    #[serde(default)]
    pub access_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_root_joins_base_and_version() {
        let graph = GraphConfig::default();
        assert_eq!(graph.api_root(), "https://graph.facebook.com/v2.6/");
    }

    #[test]
    fn api_root_tolerates_stray_slashes() {
        let graph = GraphConfig {
            base_url: "http://127.0.0.1:8080/".into(),
            api_version: "/v3.0/".into(),
            ..GraphConfig::default()
        };
        assert_eq!(graph.api_root(), "http://127.0.0.1:8080/v3.0/");
    }

    #[test]
    fn default_profile_fields_match_profile_model() {
        let graph = GraphConfig::default();
        assert_eq!(graph.profile_fields.len(), 6);
        assert_eq!(graph.profile_fields[2], "profile_pic");
        assert_eq!(graph.timeout(), std::time::Duration::from_secs(30));
    }
}
