// SPDX-FileCopyrightText: 2026 fbmessenger Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for the fbmessenger client.
//!
//! Provides TOML configuration parsing with strict validation (`deny_unknown_fields`),
//! XDG file hierarchy lookup, `FBMESSENGER_*` environment variable overrides, and
//! miette diagnostics with typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use fbmessenger_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("Graph API root: {}", config.graph.api_root());
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{GraphConfig, MessengerConfig, PageConfig};
pub use validation::validate_config;

/// Load configuration from the XDG hierarchy and validate it.
///
/// Figment errors are converted to [`ConfigError`] diagnostics with source
/// spans where the offending file can be located.
pub fn load_and_validate() -> Result<MessengerConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(
            err,
            &collect_toml_sources(),
        )),
    }
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<MessengerConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = vec![("<inline>".to_string(), toml_content.to_string())];
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Read the TOML files the loader merges, for error span resolution.
fn collect_toml_sources() -> Vec<(String, String)> {
    let mut candidates = vec![std::path::PathBuf::from("/etc/fbmessenger/fbmessenger.toml")];
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("fbmessenger/fbmessenger.toml"));
    }
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join("fbmessenger.toml"));
    }

    candidates
        .into_iter()
        .filter_map(|path| {
            let content = std::fs::read_to_string(&path).ok()?;
            tracing::debug!(path = %path.display(), "read config source for diagnostics");
            Some((path.display().to_string(), content))
        })
        .collect()
}
