// spk-rs: Bedrock Setup CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 The spk-rs Authors
// SPDX-License-Identifier: MIT

//! Fixed file templates for the HLD repository scaffold.

use super::ComponentDescriptor;

/// Pipeline definition written to the HLD repository root.
pub const HLD_PIPELINE_FILENAME: &str = "manifest-generation.yaml";

/// Component manifest written to the HLD repository root.
pub const COMPONENT_FILENAME: &str = "component.yaml";

/// Azure pipeline that renders the HLD into resource manifests and
/// pushes them to the materialized manifest repository. Fixed content,
/// no parameters.
pub const HLD_PIPELINE_YAML: &str = r#"trigger:
  branches:
    include:
      - master
variables:
  - group: spk-vg
pool:
  vmImage: ubuntu-latest
steps:
  - checkout: self
    persistCredentials: true
    clean: true
  - bash: |
      curl $BEDROCK_BUILD_SCRIPT > build.sh
      chmod +x ./build.sh
    displayName: Download Bedrock orchestration script
    env:
      BEDROCK_BUILD_SCRIPT: https://raw.githubusercontent.com/Microsoft/bedrock/master/gitops/azure-devops/build.sh
  - task: ShellScript@2
    displayName: Validate fabrikate definitions
    inputs:
      scriptPath: build.sh
    condition: eq(variables['Build.Reason'], 'PullRequest')
    env:
      VERIFY_ONLY: 1
  - task: ShellScript@2
    displayName: Transform fabrikate definitions and publish to YAML manifests to repo
    inputs:
      scriptPath: build.sh
    condition: ne(variables['Build.Reason'], 'PullRequest')
    env:
      COMMIT_MESSAGE: $(Build.SourceVersionMessage)
      REPO: $(MANIFEST_REPO)
      BRANCH_NAME: $(Build.SourceBranchName)
"#;

/// Render the default component manifest for the scaffolded HLD.
#[must_use]
pub fn component_yaml(component: &ComponentDescriptor) -> String {
    format!(
        r"name: default-component
subcomponents:
  - name: {name}
    method: git
    source: {source}
    path: {path}
",
        name = component.name,
        source = component.git_url,
        path = component.path,
    )
}
