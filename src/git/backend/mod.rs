// spk-rs: Bedrock Setup CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 The spk-rs Authors
// SPDX-License-Identifier: MIT

//! Git backend abstraction layer.
//!
//! ```text
//! GitQuery (read)   --> GixBackend (pure Rust gix)
//! mutations (write) --> ShellBackend (git CLI, async)
//! ```

use crate::error::{GitError, GixError, SpkResult};
use std::path::Path;

// --- Query Trait (Read-only operations) ---

/// Read-only git query operations.
///
/// Implementors provide methods to inspect repository state without
/// modification.
pub trait GitQuery {
    /// Check if path is inside a git work tree.
    fn is_git_repo(path: &Path) -> bool;

    /// Get current branch name (None if HEAD is detached).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or head resolution fails.
    fn current_branch(path: &Path) -> SpkResult<Option<String>>;
}

// --- GixBackend Implementation (Pure Rust) ---

/// Pure Rust git backend using gix.
///
/// Provides read-only operations without spawning subprocesses.
pub struct GixBackend;

impl GitQuery for GixBackend {
    fn is_git_repo(path: &Path) -> bool {
        gix::discover(path).is_ok()
    }

    fn current_branch(path: &Path) -> SpkResult<Option<String>> {
        let repo =
            gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;
        let head = repo
            .head_name()
            .map_err(|e| GitError::Gix(GixError::Head(e)))?;
        Ok(head.map(|name| name.shorten().to_string()))
    }
}

// --- ShellBackend Implementation (Git CLI) ---

/// Shell-based git backend using the git CLI through `tokio::process`.
///
/// Used for every operation that writes: branch creation, staging,
/// commits, and the one network-bound push.
pub struct ShellBackend;

impl ShellBackend {
    /// Check that the git binary is installed and on PATH.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::GitNotFound`] if no git executable can be located.
    pub fn ensure_git() -> SpkResult<()> {
        which::which("git").map_err(|_| GitError::GitNotFound)?;
        Ok(())
    }

    /// Execute a git command. Sets `GCM_INTERACTIVE=never` and
    /// `GIT_TERMINAL_PROMPT=0` so nothing ever blocks on a credential
    /// prompt.
    pub(crate) async fn git_command(args: &[&str], cwd: &Path) -> SpkResult<String> {
        use tokio::process::Command;

        let output = Command::new("git")
            .args(args)
            .current_dir(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .await
            .map_err(|e| std::io::Error::new(e.kind(), format!("failed to execute git: {e}")))?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
