// spk-rs: Bedrock Setup CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 The spk-rs Authors
// SPDX-License-Identifier: MIT

//! HLD command implementation for spk-rs.
//!
//! ```text
//! run_hld_command
//!   opts from CLI flags + config defaults, repo path = cwd
//!        |
//!        v
//!   execute(opts, publisher, exit)
//!     validate path --> scaffold::initialize --> exit(0)
//!             \                 \
//!              '---- any error ---'--> log context + error, exit(1)
//! ```
//!
//! `execute` reports through the injected exit callback instead of
//! terminating the process, so its outcome is observable in tests.


use crate::cli::hld::{HldArgs, HldSubcommand, InitArgs};
use crate::config::Config;
use crate::error::{Result, validation_error};
use crate::git::publish::{GitPublisher, RemotePublisher};
use crate::scaffold::{ComponentDescriptor, initialize};
use std::path::Path;
use tracing::{debug, error};

/// Inputs to the HLD initialization workflow.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Target repository path. Must contain something other than whitespace.
    pub repo_path: String,
    /// Whether to publish the scaffold after writing it.
    pub git_push: bool,
    /// The default component to reference from the scaffold.
    pub component: ComponentDescriptor,
}

/// Run the HLD initialization workflow and report through `exit`.
///
/// `exit` receives 0 on success and 1 on any failure. Failures are
/// logged as two lines: a context message naming the target path,
/// followed by the error itself.
pub async fn execute<P: GitPublisher>(
    opts: &InitOptions,
    publisher: &P,
    exit: impl FnOnce(i32),
) {
    match run(opts, publisher).await {
        Ok(()) => exit(0),
        Err(err) => {
            error!(
                "Error occurred while initializing hld repository {}",
                opts.repo_path
            );
            error!("{err:#}");
            exit(1);
        }
    }
}

async fn run<P: GitPublisher>(opts: &InitOptions, publisher: &P) -> Result<()> {
    if opts.repo_path.trim().is_empty() {
        return Err(validation_error("project path is not provided").into());
    }
    initialize(
        Path::new(&opts.repo_path),
        opts.git_push,
        &opts.component,
        publisher,
    )
    .await
}

/// Main handler for the hld command.
///
/// Returns the status observed through the exit callback: 0 on success,
/// 1 on failure. A failing workflow has already logged its two-line
/// report by the time the status comes back, so callers map the status
/// to an exit code without printing anything further.
///
/// # Errors
///
/// Returns an error if the current working directory cannot be resolved.
pub async fn run_hld_command(args: &HldArgs, config: &Config) -> Result<i32> {
    match &args.subcommand {
        HldSubcommand::Init(init) => {
            let repo_path = std::env::current_dir()?.display().to_string();
            let opts = build_init_options(init, config, repo_path);
            debug!(
                git = %opts.component.git_url,
                name = %opts.component.name,
                path = %opts.component.path,
                "resolved component options"
            );

            let mut status = 0;
            execute(&opts, &RemotePublisher, |code| status = code).await;
            Ok(status)
        }
    }
}

/// Merge CLI flags with config defaults into workflow inputs.
fn build_init_options(init: &InitArgs, config: &Config, repo_path: String) -> InitOptions {
    InitOptions {
        repo_path,
        git_push: init.git_push,
        component: ComponentDescriptor {
            git_url: init
                .component_git
                .clone()
                .unwrap_or_else(|| config.component.git_url.clone()),
            name: init
                .component_name
                .clone()
                .unwrap_or_else(|| config.component.name.clone()),
            path: init
                .component_path
                .clone()
                .unwrap_or_else(|| config.component.path.clone()),
        },
    }
}
