// spk-rs: Bedrock Setup CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 The spk-rs Authors
// SPDX-License-Identifier: MIT

//! Fixed defaults for the quick-start setup flow.
//!
//! Configuration literals only, no runtime state. The `hld init`
//! workflow uses [`HLD_INIT_BRANCH`], [`SPK_LOG`] and the
//! `HLD_DEFAULT_*` values; the rest belongs to the wider setup wizard.

/// Default manifest repository name.
pub const MANIFEST_REPO: &str = "quick-start-manifest";

/// Default HLD repository name.
pub const HLD_REPO: &str = "quick-start-hld";

/// Default Helm chart repository name.
pub const HELM_REPO: &str = "quick-start-helm";

/// Default application repository name.
pub const APP_REPO: &str = "quick-start-app";

/// Default Azure DevOps project name.
pub const DEFAULT_PROJECT_NAME: &str = "BedrockRocks";

/// Default lifecycle pipeline name for the application repository.
pub const APP_REPO_LIFECYCLE: &str = "quick-start-lifecycle";

/// Default terraform workspace name.
pub const WORKSPACE: &str = "quick-start-env";

/// Service principal display name.
pub const SP_USER_NAME: &str = "service_account";

/// Default resource group name.
pub const RESOURCE_GROUP: &str = "quick-start-rg";

/// Default resource group location.
pub const RESOURCE_GROUP_LOCATION: &str = "westus2";

/// Default container registry name.
pub const ACR_NAME: &str = "quickStartACR";

/// Default variable group name.
pub const VARIABLE_GROUP: &str = "quick-start-vg";

/// Log file written by the setup wizard.
pub const SETUP_LOG: &str = "setup.log";

/// Log file ignored in scaffolded repositories.
pub const SPK_LOG: &str = "spk.log";

/// Branch created when pushing a freshly initialized HLD repository.
pub const HLD_INIT_BRANCH: &str = "spk-hld-init";

/// Default git source for the initial HLD component.
pub const HLD_DEFAULT_GIT_URL: &str = "https://github.com/microsoft/fabrikate-definitions.git";

/// Default name for the initial HLD component.
pub const HLD_DEFAULT_COMPONENT_NAME: &str = "traefik2";

/// Default definition path for the initial HLD component.
pub const HLD_DEFAULT_DEF_PATH: &str = "definitions/traefik2";
