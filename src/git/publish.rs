// spk-rs: Bedrock Setup CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 The spk-rs Authors
// SPDX-License-Identifier: MIT

//! Branch publishing: the checkout → commit → push → PR-link chain.
//!
//! ```text
//! checkout_commit_push_create_pr_link(branch, dir)
//!   base = current_branch(dir)        (gix)
//!   git checkout -b <branch>
//!   git add <dir>
//!   git commit
//!   git push -u origin <branch>
//!   url  = remote.origin.url
//!   link = GitHost::from_url(url).pr_link(base, branch)
//! ```
//!
//! The steps are awaited one after the other; a failure anywhere in the
//! chain propagates to the caller, and files written before it stay on
//! disk.

use crate::error::{GitError, SpkResult};
use std::future::Future;
use std::path::Path;
use tracing::{debug, info};

use super::backend::ShellBackend;
use super::cmd::{checkout_new_branch, commit, origin_url, push_branch, stage};
use super::query::{current_branch, is_git_repo};

/// Commit message used when publishing a freshly scaffolded repository.
const PUBLISH_COMMIT_MESSAGE: &str = "Initializing HLD repository.";

/// Branch assumed as merge target when HEAD was detached.
const FALLBACK_BASE_BRANCH: &str = "master";

/// URL for opening a pull request against the base branch.
///
/// Opaque to callers: the init workflow only logs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestLink(String);

impl PullRequestLink {
    /// The link as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PullRequestLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Git hosting service, detected from the origin URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitHost {
    /// dev.azure.com or *.visualstudio.com.
    AzureDevOps,
    /// github.com.
    GitHub,
    /// Anything else; the bare remote URL is the best link available.
    Other,
}

impl GitHost {
    /// Detect the hosting service from a remote URL.
    #[must_use]
    pub fn from_url(url: &str) -> Self {
        if url.contains("dev.azure.com") || url.contains("visualstudio.com") {
            Self::AzureDevOps
        } else if url.contains("github.com") {
            Self::GitHub
        } else {
            Self::Other
        }
    }

    /// Build the link for opening a PR from `branch` into `base`.
    #[must_use]
    pub fn pr_link(self, url: &str, base: &str, branch: &str) -> PullRequestLink {
        let repo = url.trim_end_matches(".git");
        let link = match self {
            Self::AzureDevOps => {
                format!("{repo}/pullrequestcreate?sourceRef={branch}&targetRef={base}")
            }
            Self::GitHub => format!("{repo}/compare/{branch}?expand=1"),
            Self::Other => repo.to_string(),
        };
        PullRequestLink(link)
    }
}

/// The publish half of repository initialization, seen from the
/// workflow's side: create a branch, commit, push, hand back a PR link.
///
/// The workflow never inspects the link; it only propagates failures.
/// Production wiring uses [`RemotePublisher`], tests substitute an
/// observer.
pub trait GitPublisher {
    /// Publish pending changes under `directory` on a new `branch`.
    ///
    /// # Errors
    ///
    /// Returns a git-layer error (auth, network, nothing to commit,
    /// non-fast-forward) when any step of the chain fails.
    fn publish(
        &self,
        branch: &str,
        directory: &Path,
    ) -> impl Future<Output = SpkResult<PullRequestLink>>;
}

/// [`GitPublisher`] backed by the real git CLI and remote.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemotePublisher;

impl GitPublisher for RemotePublisher {
    async fn publish(&self, branch: &str, directory: &Path) -> SpkResult<PullRequestLink> {
        checkout_commit_push_create_pr_link(branch, directory).await
    }
}

/// Create a branch, commit all pending changes under `directory`, push
/// the branch to origin, and return a link for opening a pull request.
///
/// # Errors
///
/// Returns a `GitError` if the path is not a git repository, the git
/// binary is missing, the working tree is clean, or any git step fails
/// (auth, network, non-fast-forward). No step is retried.
pub async fn checkout_commit_push_create_pr_link(
    branch: &str,
    directory: &Path,
) -> SpkResult<PullRequestLink> {
    ShellBackend::ensure_git()?;

    if !is_git_repo(directory) {
        return Err(GitError::RepoNotFound {
            path: directory.display().to_string(),
        }
        .into());
    }

    let base = current_branch(directory)?.unwrap_or_else(|| FALLBACK_BASE_BRANCH.to_string());
    debug!(base = %base, branch = %branch, "publishing scaffolded repository");

    checkout_new_branch(directory, branch).await?;
    stage(directory, ".").await?;
    commit(directory, PUBLISH_COMMIT_MESSAGE).await?;
    push_branch(directory, branch).await?;

    let url = origin_url(directory).await?;
    let link = GitHost::from_url(&url).pr_link(&url, &base, branch);
    info!("Link to create PR: {link}");
    Ok(link)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::{GitPublisher, PullRequestLink};
    use crate::error::{GitError, SpkResult};
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    /// Publisher double that records invocations and optionally fails.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingPublisher {
        pub(crate) calls: Mutex<Vec<(String, PathBuf)>>,
        pub(crate) fail_with: Option<String>,
    }

    impl RecordingPublisher {
        pub(crate) fn failing(message: &str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_with: Some(message.to_string()),
            }
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl GitPublisher for RecordingPublisher {
        async fn publish(&self, branch: &str, directory: &Path) -> SpkResult<PullRequestLink> {
            self.calls
                .lock()
                .unwrap()
                .push((branch.to_string(), directory.to_path_buf()));
            match &self.fail_with {
                Some(message) => Err(GitError::PushFailed {
                    branch: branch.to_string(),
                    message: message.clone(),
                }
                .into()),
                None => Ok(PullRequestLink(
                    "https://github.com/example/hld/compare/spk-hld-init?expand=1".to_string(),
                )),
            }
        }
    }
}
