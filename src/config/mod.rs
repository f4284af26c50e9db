// spk-rs: Bedrock Setup CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 The spk-rs Authors
// SPDX-License-Identifier: MIT

//! Configuration management for spk-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults (setup::constants)
//! 2. local spk.toml (cwd)
//! 3. --ini FILE (repeatable)
//! 4. SPK_* env vars
//! 5. --set KEY=VAL overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! Section and key are separated by a double underscore:
//!
//! ```text
//! SPK_GLOBAL__OUTPUT_LOG_LEVEL=4   → global.output_log_level = 4
//! SPK_COMPONENT__NAME=traefik2     → component.name = "traefik2"
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};

use crate::error::Result;

use loader::ConfigLoader;
use types::{ComponentConfig, GlobalConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Default HLD component.
    pub component: ComponentConfig,
}

impl Config {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn from_str(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// One `section.key = value` line per option, for `spk options`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        vec![
            format!(
                "global.output_log_level = {}",
                self.global.output_log_level.as_u8()
            ),
            format!(
                "global.file_log_level = {}",
                self.global.file_log_level.as_u8()
            ),
            format!("global.log_file = {}", self.global.log_file.display()),
            format!("component.git_url = {}", self.component.git_url),
            format!("component.name = {}", self.component.name),
            format!("component.path = {}", self.component.path),
        ]
    }
}
