// spk-rs: Bedrock Setup CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 The spk-rs Authors
// SPDX-License-Identifier: MIT

use super::publish::{GitHost, checkout_commit_push_create_pr_link};
use crate::error::{GitError, SpkError};
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn run_git(args: &[&str], cwd: &Path) {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

fn init_test_repo_with_commit(path: &Path) {
    run_git(&["init", "--quiet", "-b", "master"], path);
    run_git(&["config", "user.email", "test@example.com"], path);
    run_git(&["config", "user.name", "Test"], path);
    run_git(
        &["commit", "--allow-empty", "-m", "Initial commit", "--quiet"],
        path,
    );
}

#[test]
fn test_host_detection() {
    assert_eq!(
        GitHost::from_url("https://dev.azure.com/org/project/_git/hld"),
        GitHost::AzureDevOps
    );
    assert_eq!(
        GitHost::from_url("https://myorg.visualstudio.com/project/_git/hld"),
        GitHost::AzureDevOps
    );
    assert_eq!(
        GitHost::from_url("https://github.com/myorg/hld.git"),
        GitHost::GitHub
    );
    assert_eq!(
        GitHost::from_url("https://git.example.com/hld.git"),
        GitHost::Other
    );
}

#[test]
fn test_pr_link_github() {
    let link = GitHost::GitHub.pr_link(
        "https://github.com/myorg/hld.git",
        "master",
        "spk-hld-init",
    );
    insta::assert_snapshot!(
        link.as_str(),
        @"https://github.com/myorg/hld/compare/spk-hld-init?expand=1"
    );
}

#[test]
fn test_pr_link_azure_devops() {
    let link = GitHost::AzureDevOps.pr_link(
        "https://dev.azure.com/org/project/_git/hld",
        "master",
        "spk-hld-init",
    );
    insta::assert_snapshot!(
        link.as_str(),
        @"https://dev.azure.com/org/project/_git/hld/pullrequestcreate?sourceRef=spk-hld-init&targetRef=master"
    );
}

#[test]
fn test_pr_link_unknown_host_is_bare_url() {
    let link = GitHost::Other.pr_link("https://git.example.com/hld.git", "master", "topic");
    assert_eq!(link.as_str(), "https://git.example.com/hld");
}

#[tokio::test]
async fn test_publish_outside_repo_fails() {
    let temp = temp_dir();
    let err = checkout_commit_push_create_pr_link("spk-hld-init", temp.path())
        .await
        .expect_err("should fail outside a repo");
    match err {
        SpkError::Git(g) => assert!(matches!(*g, GitError::RepoNotFound { .. })),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_publish_clean_tree_is_nothing_to_commit() {
    let temp = temp_dir();
    init_test_repo_with_commit(temp.path());

    let err = checkout_commit_push_create_pr_link("spk-hld-init", temp.path())
        .await
        .expect_err("clean tree should not publish");
    match err {
        SpkError::Git(g) => assert!(matches!(*g, GitError::NothingToCommit { .. })),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_publish_without_origin_fails_after_commit() {
    let temp = temp_dir();
    init_test_repo_with_commit(temp.path());
    std::fs::write(temp.path().join("component.yaml"), "name: hld").unwrap();

    let err = checkout_commit_push_create_pr_link("spk-hld-init", temp.path())
        .await
        .expect_err("push without origin should fail");
    match err {
        SpkError::Git(g) => assert!(matches!(*g, GitError::PushFailed { .. })),
        other => panic!("unexpected error: {other}"),
    }
}
