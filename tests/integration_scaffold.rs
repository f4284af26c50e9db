// spk-rs: Bedrock Setup CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 The spk-rs Authors
// SPDX-License-Identifier: MIT

//! Integration tests for the template writer.
//!
//! Covers determinism of the generated files and the `.gitignore`
//! merge policy across repeated initializations.

use spk_rs::error::SpkResult;
use spk_rs::git::publish::{GitPublisher, PullRequestLink};
use spk_rs::scaffold::templates::{COMPONENT_FILENAME, HLD_PIPELINE_FILENAME};
use spk_rs::scaffold::{ComponentDescriptor, initialize};
use std::path::Path;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Publisher that must never be reached.
struct UnreachablePublisher;

impl GitPublisher for UnreachablePublisher {
    async fn publish(&self, _branch: &str, _directory: &Path) -> SpkResult<PullRequestLink> {
        panic!("publisher must not be invoked without --git-push");
    }
}

fn sample_component() -> ComponentDescriptor {
    ComponentDescriptor {
        git_url: "https://github.com/microsoft/fabrikate-definitions.git".to_string(),
        name: "traefik2".to_string(),
        path: "definitions/traefik2".to_string(),
    }
}

#[tokio::test]
async fn scaffold_writes_expected_component_manifest() {
    let temp = temp_dir();
    initialize(temp.path(), false, &sample_component(), &UnreachablePublisher)
        .await
        .unwrap();

    let manifest = std::fs::read_to_string(temp.path().join(COMPONENT_FILENAME)).unwrap();
    insta::assert_snapshot!(manifest, @r"
    name: default-component
    subcomponents:
      - name: traefik2
        method: git
        source: https://github.com/microsoft/fabrikate-definitions.git
        path: definitions/traefik2
    ");
}

#[tokio::test]
async fn scaffold_pipeline_is_parameterless() {
    let temp_a = temp_dir();
    let temp_b = temp_dir();

    initialize(temp_a.path(), false, &sample_component(), &UnreachablePublisher)
        .await
        .unwrap();

    let other = ComponentDescriptor {
        git_url: "https://example.com/defs.git".to_string(),
        name: "nginx".to_string(),
        path: "definitions/nginx".to_string(),
    };
    initialize(temp_b.path(), false, &other, &UnreachablePublisher)
        .await
        .unwrap();

    // the pipeline definition does not depend on the component
    let a = std::fs::read_to_string(temp_a.path().join(HLD_PIPELINE_FILENAME)).unwrap();
    let b = std::fs::read_to_string(temp_b.path().join(HLD_PIPELINE_FILENAME)).unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn scaffold_twice_is_idempotent() {
    let temp = temp_dir();
    let component = sample_component();

    initialize(temp.path(), false, &component, &UnreachablePublisher)
        .await
        .unwrap();
    let pipeline_first = std::fs::read_to_string(temp.path().join(HLD_PIPELINE_FILENAME)).unwrap();
    let manifest_first = std::fs::read_to_string(temp.path().join(COMPONENT_FILENAME)).unwrap();
    let gitignore_first = std::fs::read_to_string(temp.path().join(".gitignore")).unwrap();

    initialize(temp.path(), false, &component, &UnreachablePublisher)
        .await
        .unwrap();
    let pipeline_second = std::fs::read_to_string(temp.path().join(HLD_PIPELINE_FILENAME)).unwrap();
    let manifest_second = std::fs::read_to_string(temp.path().join(COMPONENT_FILENAME)).unwrap();
    let gitignore_second = std::fs::read_to_string(temp.path().join(".gitignore")).unwrap();

    assert_eq!(pipeline_first, pipeline_second);
    assert_eq!(manifest_first, manifest_second);
    assert_eq!(gitignore_first, gitignore_second);
}

// Scenario D: pre-existing .gitignore with unrelated entries
#[tokio::test]
async fn scaffold_merges_existing_gitignore() {
    let temp = temp_dir();
    std::fs::write(temp.path().join(".gitignore"), "target/\n*.swp\n").unwrap();

    initialize(temp.path(), false, &sample_component(), &UnreachablePublisher)
        .await
        .unwrap();

    let content = std::fs::read_to_string(temp.path().join(".gitignore")).unwrap();
    assert_eq!(content, "target/\n*.swp\nspk.log\n");
}
