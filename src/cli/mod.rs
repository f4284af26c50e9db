// spk-rs: Bedrock Setup CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 The spk-rs Authors
// SPDX-License-Identifier: MIT

//! CLI module for spk-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! spk [global options] <command>
//! version
//! options
//! inis
//! hld init [--git-push] [--component-git URL]
//!          [--component-name NAME] [--component-path PATH]
//! ```

pub mod global;
pub mod hld;


use crate::cli::global::GlobalOptions;
use crate::cli::hld::HldArgs;
use clap::{Parser, Subcommand};

/// Bedrock Setup CLI - Rust Port
///
/// Scaffolding and automation for bedrock GitOps repositories.
#[derive(Debug, Parser)]
#[command(
    name = "spk",
    author,
    version,
    about = "Bedrock Setup CLI",
    long_about = "A scaffolding tool for bedrock GitOps workflows.\n\n\
                  `spk hld init` prepares the current directory as a\n\
                  high-level deployment (HLD) repository: it writes the\n\
                  manifest-generation pipeline, a default component\n\
                  manifest, and a .gitignore entry for the spk log. With\n\
                  --git-push it also creates a branch, commits, pushes,\n\
                  and prints a link for opening a pull request.",
    after_help = "CONFIG FILES:\n\n\
                  spk reads an optional `spk.toml` from the current\n\
                  directory for defaults such as the component source.\n\
                  Additional TOML files can be layered with --ini; later\n\
                  files override earlier ones, and --set key=value wins\n\
                  over everything."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the config files used by spk.
    Inis,

    /// Manages the high-level deployment repository.
    Hld(HldArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
