// SPDX-FileCopyrightText: 2026 fbmessenger Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use crate::diagnostic::ConfigError;
use crate::model::MessengerConfig;

/// Validate a deserialized configuration.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &MessengerConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    let base_url = config.graph.base_url.trim();
    if base_url.is_empty() {
        fail("graph.base_url must not be empty".to_string());
    } else if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
        fail(format!(
            "graph.base_url `{base_url}` must start with http:// or https://"
        ));
    } else if base_url.contains('?') {
        fail(format!("graph.base_url `{base_url}` must not carry a query string"));
    }

    if config.graph.api_version.trim_matches('/').trim().is_empty() {
        fail("graph.api_version must not be empty".to_string());
    } else if config.graph.api_version.contains(char::is_whitespace) {
        fail(format!(
            "graph.api_version `{}` must not contain whitespace",
            config.graph.api_version
        ));
    }

    if config.graph.timeout_secs == 0 {
        fail("graph.timeout_secs must be greater than 0".to_string());
    }

    if config.graph.profile_fields.is_empty() {
        fail("graph.profile_fields must list at least one field".to_string());
    }
    for (i, field) in config.graph.profile_fields.iter().enumerate() {
        if field.trim().is_empty() || field.contains(',') {
            fail(format!(
                "graph.profile_fields[{i}] `{field}` must be a single non-empty field name"
            ));
        }
    }

    if let Some(token) = &config.page.access_token
        && token.trim().is_empty()
    {
        fail("page.access_token must not be empty when set".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
