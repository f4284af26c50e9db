// spk-rs: Bedrock Setup CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 The spk-rs Authors
// SPDX-License-Identifier: MIT

//! Read-only git queries using the gix backend.

use crate::error::SpkResult;
use std::path::Path;

use super::backend::{GitQuery, GixBackend};

/// Check if path is inside a git work tree.
#[must_use]
pub fn is_git_repo(path: &Path) -> bool {
    GixBackend::is_git_repo(path)
}

/// Get current branch name (None if HEAD is detached).
///
/// # Errors
///
/// Returns a `GitError` if repository discovery or head resolution fails.
pub fn current_branch(path: &Path) -> SpkResult<Option<String>> {
    GixBackend::current_branch(path)
}
