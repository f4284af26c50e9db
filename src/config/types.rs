// spk-rs: Bedrock Setup CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 The spk-rs Authors
// SPDX-License-Identifier: MIT

//! Configuration types for spk-rs.
//!
//! ```text
//! Config: GlobalConfig, ComponentConfig
//! defaults come from setup::constants
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;
use crate::setup::constants;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for stdout output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file.
    pub log_file: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: PathBuf::from(constants::SPK_LOG),
        }
    }
}

/// Defaults for the initial HLD component, used when the CLI flags are
/// omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComponentConfig {
    /// Git source of the default component.
    pub git_url: String,
    /// Name of the default component.
    pub name: String,
    /// Definition path of the default component inside its source repo.
    pub path: String,
}

impl Default for ComponentConfig {
    fn default() -> Self {
        Self {
            git_url: constants::HLD_DEFAULT_GIT_URL.to_string(),
            name: constants::HLD_DEFAULT_COMPONENT_NAME.to_string(),
            path: constants::HLD_DEFAULT_DEF_PATH.to_string(),
        }
    }
}
