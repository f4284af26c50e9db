// spk-rs: Bedrock Setup CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 The spk-rs Authors
// SPDX-License-Identifier: MIT

use super::templates::{COMPONENT_FILENAME, HLD_PIPELINE_FILENAME, component_yaml};
use super::{
    ComponentDescriptor, generate_default_component_yaml, generate_gitignore,
    generate_hld_pipeline_yaml, initialize,
};
use crate::git::publish::test_support::RecordingPublisher;
use crate::setup::constants;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn sample_component() -> ComponentDescriptor {
    ComponentDescriptor {
        git_url: "https://github.com/microsoft/fabrikate-definitions.git".to_string(),
        name: "traefik2".to_string(),
        path: "definitions/traefik2".to_string(),
    }
}

#[test]
fn test_component_yaml_rendering() {
    insta::assert_snapshot!(component_yaml(&sample_component()), @r"
    name: default-component
    subcomponents:
      - name: traefik2
        method: git
        source: https://github.com/microsoft/fabrikate-definitions.git
        path: definitions/traefik2
    ");
}

#[tokio::test]
async fn test_pipeline_yaml_is_written_and_overwritten() {
    let temp = temp_dir();
    let target = temp.path().join(HLD_PIPELINE_FILENAME);

    std::fs::write(&target, "stale content").unwrap();
    generate_hld_pipeline_yaml(temp.path()).await.unwrap();

    let written = std::fs::read_to_string(&target).unwrap();
    assert!(written.starts_with("trigger:"));
    assert!(!written.contains("stale content"));
}

#[tokio::test]
async fn test_component_yaml_is_deterministic() {
    let temp = temp_dir();
    let component = sample_component();

    generate_default_component_yaml(temp.path(), &component)
        .await
        .unwrap();
    let first = std::fs::read_to_string(temp.path().join(COMPONENT_FILENAME)).unwrap();

    generate_default_component_yaml(temp.path(), &component)
        .await
        .unwrap();
    let second = std::fs::read_to_string(temp.path().join(COMPONENT_FILENAME)).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_gitignore_created_when_absent() {
    let temp = temp_dir();
    generate_gitignore(temp.path(), constants::SPK_LOG)
        .await
        .unwrap();

    let content = std::fs::read_to_string(temp.path().join(".gitignore")).unwrap();
    assert_eq!(content, "spk.log\n");
}

#[tokio::test]
async fn test_gitignore_preserves_unrelated_entries() {
    let temp = temp_dir();
    let target = temp.path().join(".gitignore");
    std::fs::write(&target, "node_modules/\n*.tmp\n").unwrap();

    generate_gitignore(temp.path(), constants::SPK_LOG)
        .await
        .unwrap();

    let content = std::fs::read_to_string(&target).unwrap();
    assert_eq!(content, "node_modules/\n*.tmp\nspk.log\n");
}

#[tokio::test]
async fn test_gitignore_appends_newline_before_entry() {
    let temp = temp_dir();
    let target = temp.path().join(".gitignore");
    std::fs::write(&target, "node_modules/").unwrap();

    generate_gitignore(temp.path(), constants::SPK_LOG)
        .await
        .unwrap();

    let content = std::fs::read_to_string(&target).unwrap();
    assert_eq!(content, "node_modules/\nspk.log\n");
}

#[tokio::test]
async fn test_gitignore_untouched_when_entry_present() {
    let temp = temp_dir();
    let target = temp.path().join(".gitignore");
    std::fs::write(&target, "spk.log\nnode_modules/\n").unwrap();

    generate_gitignore(temp.path(), constants::SPK_LOG)
        .await
        .unwrap();

    let content = std::fs::read_to_string(&target).unwrap();
    assert_eq!(content, "spk.log\nnode_modules/\n");
}

#[tokio::test]
async fn test_gitignore_substring_match_does_not_count() {
    let temp = temp_dir();
    let target = temp.path().join(".gitignore");
    std::fs::write(&target, "logs/spk.log.bak\n").unwrap();

    generate_gitignore(temp.path(), constants::SPK_LOG)
        .await
        .unwrap();

    let content = std::fs::read_to_string(&target).unwrap();
    assert_eq!(content, "logs/spk.log.bak\nspk.log\n");
}

#[tokio::test]
async fn test_initialize_writes_three_files_without_push() {
    let temp = temp_dir();
    let publisher = RecordingPublisher::default();

    initialize(temp.path(), false, &sample_component(), &publisher)
        .await
        .unwrap();

    assert!(temp.path().join(HLD_PIPELINE_FILENAME).exists());
    assert!(temp.path().join(COMPONENT_FILENAME).exists());
    assert!(temp.path().join(".gitignore").exists());
    assert_eq!(publisher.call_count(), 0);
}

#[tokio::test]
async fn test_initialize_publishes_with_fixed_branch_and_cwd() {
    let temp = temp_dir();
    let publisher = RecordingPublisher::default();

    initialize(temp.path(), true, &sample_component(), &publisher)
        .await
        .unwrap();

    let calls = publisher.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "spk-hld-init");
    assert_eq!(calls[0].1, std::path::PathBuf::from("."));
}

#[tokio::test]
async fn test_initialize_propagates_publish_failure_after_writes() {
    let temp = temp_dir();
    let publisher = RecordingPublisher::failing("network unreachable");

    let result = initialize(temp.path(), true, &sample_component(), &publisher).await;
    assert!(result.is_err());

    // files written before the publish failure stay on disk
    assert!(temp.path().join(HLD_PIPELINE_FILENAME).exists());
    assert!(temp.path().join(COMPONENT_FILENAME).exists());
    assert!(temp.path().join(".gitignore").exists());
}
