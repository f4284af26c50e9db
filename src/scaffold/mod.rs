// spk-rs: Bedrock Setup CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 The spk-rs Authors
// SPDX-License-Identifier: MIT

//! Template writer for HLD repository initialization.
//!
//! ```text
//! initialize(repo, push, component)
//!   manifest-generation.yaml   fixed template, always overwritten
//!   component.yaml             parametrized, always overwritten
//!   .gitignore                 append spk.log entry if absent
//!   [push] --> git::publish    branch "spk-hld-init", directory "."
//! ```
//!
//! The two YAML files are deterministic: running the writer twice with
//! the same inputs produces byte-identical content. The `.gitignore`
//! merge never removes a pre-existing rule.

pub mod templates;

#[cfg(test)]
mod tests;

use crate::error::{FsError, Result, SpkResult};
use crate::git::publish::GitPublisher;
use crate::setup::constants;
use std::path::Path;
use tracing::{debug, info};

use templates::{COMPONENT_FILENAME, HLD_PIPELINE_FILENAME, HLD_PIPELINE_YAML, component_yaml};

/// Source of the initial component in a scaffolded HLD repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDescriptor {
    /// Git URL the component definition comes from.
    pub git_url: String,
    /// Component name.
    pub name: String,
    /// Definition path inside the source repository.
    pub path: String,
}

/// Write the fixed manifest-generation pipeline definition.
///
/// Always overwrites an existing file.
///
/// # Errors
///
/// Returns an `FsError` if the file cannot be written.
pub async fn generate_hld_pipeline_yaml(repo_path: &Path) -> SpkResult<()> {
    let target = repo_path.join(HLD_PIPELINE_FILENAME);
    debug!(path = %target.display(), "writing pipeline definition");
    tokio::fs::write(&target, HLD_PIPELINE_YAML)
        .await
        .map_err(|e| FsError::from_io(target.display().to_string(), e))?;
    Ok(())
}

/// Write the default component manifest for the given component.
///
/// Always overwrites an existing file.
///
/// # Errors
///
/// Returns an `FsError` if the file cannot be written.
pub async fn generate_default_component_yaml(
    repo_path: &Path,
    component: &ComponentDescriptor,
) -> SpkResult<()> {
    let target = repo_path.join(COMPONENT_FILENAME);
    debug!(path = %target.display(), component = %component.name, "writing component manifest");
    tokio::fs::write(&target, component_yaml(component))
        .await
        .map_err(|e| FsError::from_io(target.display().to_string(), e))?;
    Ok(())
}

/// Ensure `.gitignore` contains an entry for the given filename.
///
/// Creates the file when absent. When present, the entry is appended
/// only if no existing line matches it exactly; unrelated rules are
/// never touched.
///
/// # Errors
///
/// Returns an `FsError` if the file cannot be read or written.
pub async fn generate_gitignore(repo_path: &Path, entry: &str) -> SpkResult<()> {
    let target = repo_path.join(".gitignore");

    if !target.exists() {
        debug!(path = %target.display(), entry, "creating .gitignore");
        tokio::fs::write(&target, format!("{entry}\n"))
            .await
            .map_err(|e| FsError::from_io(target.display().to_string(), e))?;
        return Ok(());
    }

    let existing = tokio::fs::read_to_string(&target)
        .await
        .map_err(|e| FsError::from_io(target.display().to_string(), e))?;

    if existing.lines().any(|line| line.trim() == entry) {
        debug!(path = %target.display(), entry, ".gitignore entry already present");
        return Ok(());
    }

    let mut merged = existing;
    if !merged.is_empty() && !merged.ends_with('\n') {
        merged.push('\n');
    }
    merged.push_str(entry);
    merged.push('\n');

    debug!(path = %target.display(), entry, "appending .gitignore entry");
    tokio::fs::write(&target, merged)
        .await
        .map_err(|e| FsError::from_io(target.display().to_string(), e))?;
    Ok(())
}

/// Materialize the HLD scaffold under `repo_path`, then publish it iff
/// `git_push` is set.
///
/// The publisher is handed the fixed branch name and the current
/// directory as its commit scope, matching how the command is run from
/// the repository root.
///
/// # Errors
///
/// Propagates filesystem errors from the template writes and git errors
/// from the publish step. Files written before a later failure stay on
/// disk.
pub async fn initialize<P: GitPublisher>(
    repo_path: &Path,
    git_push: bool,
    component: &ComponentDescriptor,
    publisher: &P,
) -> Result<()> {
    info!("Initializing HLD repository.");

    generate_hld_pipeline_yaml(repo_path).await?;
    generate_default_component_yaml(repo_path, component).await?;
    generate_gitignore(repo_path, constants::SPK_LOG).await?;

    if git_push {
        publisher
            .publish(constants::HLD_INIT_BRANCH, Path::new("."))
            .await?;
    }

    Ok(())
}
