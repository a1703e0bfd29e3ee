// SPDX-FileCopyrightText: 2026 fbmessenger Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./fbmessenger.toml` > `~/.config/fbmessenger/fbmessenger.toml`
//! > `/etc/fbmessenger/fbmessenger.toml` with environment variable overrides via
//! the `FBMESSENGER_` prefix.

// figment::Error is external and cannot be boxed without a wrapper.
#![allow(clippy::result_large_err)]

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::MessengerConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/fbmessenger/fbmessenger.toml`
/// 3. `~/.config/fbmessenger/fbmessenger.toml`
/// 4. `./fbmessenger.toml`
/// 5. `FBMESSENGER_*` environment variables
pub fn load_config() -> Result<MessengerConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<MessengerConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MessengerConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<MessengerConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MessengerConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used by [`load_config`] without extracting it.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(MessengerConfig::default()))
        .merge(Toml::file("/etc/fbmessenger/fbmessenger.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("fbmessenger/fbmessenger.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("fbmessenger.toml"))
        .merge(env_provider())
}

/// Environment provider mapping `FBMESSENGER_<SECTION>_<KEY>` to `section.key`.
///
/// Uses `Env::map()` rather than `Env::split("_")`: `FBMESSENGER_PAGE_ACCESS_TOKEN`
/// must map to `page.access_token`, not `page.access.token`.
fn env_provider() -> Env {
    Env::prefixed("FBMESSENGER_").map(|key| {
        key.as_str()
            .replacen("graph_", "graph.", 1)
            .replacen("page_", "page.", 1)
            .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_nested_keys() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("FBMESSENGER_GRAPH_BASE_URL", "http://127.0.0.1:9999");
            jail.set_env("FBMESSENGER_GRAPH_TIMEOUT_SECS", "5");
            jail.set_env("FBMESSENGER_PAGE_ACCESS_TOKEN", "env-token");

            let config = load_config()?;
            assert_eq!(config.graph.base_url, "http://127.0.0.1:9999");
            assert_eq!(config.graph.timeout_secs, 5);
            assert_eq!(config.page.access_token.as_deref(), Some("env-token"));
            Ok(())
        });
    }

    #[test]
    fn local_file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "fbmessenger.toml",
                r#"
[graph]
api_version = "v3.1"
"#,
            )?;

            let config = load_config()?;
            assert_eq!(config.graph.api_version, "v3.1");
            assert_eq!(config.graph.base_url, "https://graph.facebook.com");
            Ok(())
        });
    }

    #[test]
    fn env_beats_local_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("fbmessenger.toml", "[page]\naccess_token = \"file\"\n")?;
            jail.set_env("FBMESSENGER_PAGE_ACCESS_TOKEN", "env");

            let config = load_config()?;
            assert_eq!(config.page.access_token.as_deref(), Some("env"));
            Ok(())
        });
    }
}
