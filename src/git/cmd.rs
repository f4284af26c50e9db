// spk-rs: Bedrock Setup CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 The spk-rs Authors
// SPDX-License-Identifier: MIT

//! Git mutations using the shell backend.
//!
//! ```text
//! cmd.rs --> ShellBackend --> git (checkout -b, add, commit, push)
//! ```

use crate::error::{GitError, SpkResult};
use std::path::Path;

use super::backend::ShellBackend;

/// Create and check out a new branch.
///
/// # Errors
///
/// Returns a `GitError` if the branch already exists or checkout fails.
pub async fn checkout_new_branch(repo_path: &Path, branch: &str) -> SpkResult<()> {
    ShellBackend::git_command(&["checkout", "-q", "-b", branch], repo_path).await?;
    Ok(())
}

/// Stage everything under the given pathspec.
///
/// # Errors
///
/// Returns a `GitError` if staging fails.
pub async fn stage(repo_path: &Path, pathspec: &str) -> SpkResult<()> {
    ShellBackend::git_command(&["add", pathspec], repo_path).await?;
    Ok(())
}

/// Commit staged changes.
///
/// # Errors
///
/// Returns [`GitError::NothingToCommit`] when the working tree is clean,
/// or a `GitError` if the commit fails.
pub async fn commit(repo_path: &Path, message: &str) -> SpkResult<()> {
    let status = ShellBackend::git_command(&["status", "--porcelain"], repo_path).await?;
    if status.is_empty() {
        return Err(GitError::NothingToCommit {
            path: repo_path.display().to_string(),
        }
        .into());
    }
    ShellBackend::git_command(&["commit", "-q", "-m", message], repo_path).await?;
    Ok(())
}

/// Push a branch to origin, setting the upstream.
///
/// # Errors
///
/// Returns [`GitError::PushFailed`] if the remote rejects the push or is
/// unreachable.
pub async fn push_branch(repo_path: &Path, branch: &str) -> SpkResult<()> {
    if let Err(e) = ShellBackend::git_command(&["push", "-q", "-u", "origin", branch], repo_path).await
    {
        let message = match &e {
            crate::error::SpkError::Git(g) => match g.as_ref() {
                GitError::CommandFailed { message, .. } => message.clone(),
                other => other.to_string(),
            },
            other => other.to_string(),
        };
        return Err(GitError::PushFailed {
            branch: branch.to_string(),
            message,
        }
        .into());
    }
    Ok(())
}

/// Read the fetch URL of the 'origin' remote.
///
/// # Errors
///
/// Returns [`GitError::NoOriginRemote`] when no origin remote is
/// configured.
pub async fn origin_url(repo_path: &Path) -> SpkResult<String> {
    let url = ShellBackend::git_command(&["config", "--get", "remote.origin.url"], repo_path)
        .await
        .map_err(|_| GitError::NoOriginRemote {
            path: repo_path.display().to_string(),
        })?;
    if url.is_empty() {
        return Err(GitError::NoOriginRemote {
            path: repo_path.display().to_string(),
        }
        .into());
    }
    Ok(url)
}
