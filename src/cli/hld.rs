// spk-rs: Bedrock Setup CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 The spk-rs Authors
// SPDX-License-Identifier: MIT

//! HLD command arguments.
//!
//! # Subcommands
//!
//! ```text
//! hld init [--git-push]
//!   → scaffold cwd as an HLD repository
//!   --component-git URL    source of the default component
//!   --component-name NAME  name of the default component
//!   --component-path PATH  definition path inside the source repo
//! ```
//!
//! The repository path is always the current working directory, not a
//! flag. Omitted component options fall back to the config defaults.

use clap::{Args, Subcommand};

/// Arguments for the `hld` command.
#[derive(Debug, Clone, Args)]
pub struct HldArgs {
    /// HLD subcommand.
    #[command(subcommand)]
    pub subcommand: HldSubcommand,
}

/// HLD subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum HldSubcommand {
    /// Initializes the current directory as an HLD repository.
    Init(InitArgs),
}

/// Arguments for the init subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct InitArgs {
    /// Git source of the default component.
    #[arg(long = "component-git", value_name = "URL")]
    pub component_git: Option<String>,

    /// Name of the default component.
    #[arg(long = "component-name", value_name = "NAME")]
    pub component_name: Option<String>,

    /// Definition path of the default component inside its source repo.
    #[arg(long = "component-path", value_name = "PATH")]
    pub component_path: Option<String>,

    /// Create a new branch, commit, push, and print a PR link.
    #[arg(short = 'p', long = "git-push")]
    pub git_push: bool,
}
