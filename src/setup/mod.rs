// spk-rs: Bedrock Setup CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 The spk-rs Authors
// SPDX-License-Identifier: MIT

//! Setup wizard state and defaults.
//!
//! ```text
//! RequestContext
//!   identity     org / project / token / workspace / subscription
//!   intent       to_create_app_repo, to_create_sp
//!   progress     SetupStep -> StepState
//!                  NotStarted | Completed(data) | Failed(error)
//!   summary()    one line per step for end-of-run reporting
//! ```
//!
//! The wizard itself lives outside this crate; `RequestContext` is the
//! data contract it mutates step by step. Progress is monotonic within
//! a run: a completed step never reverts, and the first recorded
//! failure halts the flow.

pub mod constants;


use serde::{Deserialize, Serialize};

/// Outcome of one provisioning step.
///
/// A tagged state instead of a boolean flag, so "has this step run"
/// and "did it fail" are mutually exclusive by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState<T = ()> {
    /// The step has not run yet.
    #[default]
    NotStarted,
    /// The step ran to completion, with whatever it produced.
    Completed(T),
    /// The step failed with a terminal error message.
    Failed(String),
}

impl<T> StepState<T> {
    /// Whether the step ran to completion.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    /// Whether the step failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The failure message, if the step failed.
    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Credentials produced when the service principal step completes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePrincipal {
    pub id: String,
    pub password: String,
    pub tenant_id: String,
}

/// One provisioning step of the setup wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupStep {
    Project,
    ScaffoldHld,
    ScaffoldManifest,
    ScaffoldHelm,
    ScaffoldAppService,
    HldToManifestPipeline,
    ServicePrincipal,
    ResourceGroup,
    Acr,
}

impl SetupStep {
    /// All steps in wizard order.
    pub const ALL: [Self; 9] = [
        Self::Project,
        Self::ScaffoldHld,
        Self::ScaffoldManifest,
        Self::ScaffoldHelm,
        Self::ScaffoldAppService,
        Self::HldToManifestPipeline,
        Self::ServicePrincipal,
        Self::ResourceGroup,
        Self::Acr,
    ];

    /// Human-readable step name for summaries.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Project => "project creation",
            Self::ScaffoldHld => "HLD repository scaffold",
            Self::ScaffoldManifest => "manifest repository scaffold",
            Self::ScaffoldHelm => "helm chart scaffold",
            Self::ScaffoldAppService => "app service scaffold",
            Self::HldToManifestPipeline => "HLD to manifest pipeline",
            Self::ServicePrincipal => "service principal",
            Self::ResourceGroup => "resource group",
            Self::Acr => "container registry",
        }
    }
}

/// Running state of the multi-step setup flow.
///
/// Created empty at wizard start, mutated in place by each step, read
/// at the end for a summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestContext {
    /// Azure DevOps organization name.
    pub org_name: String,
    /// Azure DevOps project name.
    pub project_name: String,
    /// Personal access token.
    pub access_token: String,
    /// Terraform workspace name.
    pub workspace: String,
    /// Azure subscription id, once known.
    pub subscription_id: Option<String>,
    /// Container registry name, once chosen.
    pub acr_name: Option<String>,
    /// Whether the wizard should create an application repository.
    pub to_create_app_repo: bool,
    /// Whether the wizard should create a service principal.
    pub to_create_sp: bool,

    project: StepState,
    scaffold_hld: StepState,
    scaffold_manifest: StepState,
    scaffold_helm: StepState,
    scaffold_app_service: StepState,
    hld_to_manifest_pipeline: StepState,
    service_principal: StepState<ServicePrincipal>,
    resource_group: StepState,
    acr: StepState,
}

impl RequestContext {
    /// Create an empty context for the given organization and project.
    #[must_use]
    pub fn new(org_name: impl Into<String>, project_name: impl Into<String>) -> Self {
        Self {
            org_name: org_name.into(),
            project_name: project_name.into(),
            workspace: constants::WORKSPACE.to_string(),
            ..Self::default()
        }
    }

    /// Mark a step completed. Completion is monotonic: a completed
    /// step is never downgraded, and a recorded failure stays.
    ///
    /// The service principal step carries credentials and is completed
    /// through [`Self::complete_service_principal`]; asking for it here
    /// is a no-op.
    pub fn complete_step(&mut self, step: SetupStep) {
        if let Some(slot) = self.plain_step_mut(step)
            && matches!(slot, StepState::NotStarted)
        {
            *slot = StepState::Completed(());
        }
    }

    /// Mark the service principal step completed with its credentials.
    pub fn complete_service_principal(&mut self, credentials: ServicePrincipal) {
        if matches!(self.service_principal, StepState::NotStarted) {
            self.service_principal = StepState::Completed(credentials);
        }
    }

    /// Record a step failure. Only the first failure is kept.
    pub fn fail_step(&mut self, step: SetupStep, error: impl Into<String>) {
        if self.is_halted() {
            return;
        }
        if step == SetupStep::ServicePrincipal {
            if matches!(self.service_principal, StepState::NotStarted) {
                self.service_principal = StepState::Failed(error.into());
            }
            return;
        }
        if let Some(slot) = self.plain_step_mut(step)
            && matches!(slot, StepState::NotStarted)
        {
            *slot = StepState::Failed(error.into());
        }
    }

    /// Whether the step ran to completion.
    #[must_use]
    pub fn is_completed(&self, step: SetupStep) -> bool {
        match step {
            SetupStep::ServicePrincipal => self.service_principal.is_completed(),
            _ => self
                .plain_step(step)
                .is_some_and(StepState::is_completed),
        }
    }

    /// Whether any step has failed; once true, the flow is expected to halt.
    #[must_use]
    pub fn is_halted(&self) -> bool {
        self.error().is_some()
    }

    /// The first recorded failure message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        SetupStep::ALL.iter().find_map(|step| match step {
            SetupStep::ServicePrincipal => self.service_principal.failure(),
            _ => self.plain_step(*step).and_then(StepState::failure),
        })
    }

    /// Credentials from the service principal step, if it completed.
    #[must_use]
    pub const fn service_principal(&self) -> Option<&ServicePrincipal> {
        match &self.service_principal {
            StepState::Completed(sp) => Some(sp),
            _ => None,
        }
    }

    /// One line per step for the end-of-run summary.
    #[must_use]
    pub fn summary(&self) -> Vec<String> {
        SetupStep::ALL
            .iter()
            .map(|step| {
                let state = match step {
                    SetupStep::ServicePrincipal => match &self.service_principal {
                        StepState::NotStarted => "not started".to_string(),
                        StepState::Completed(_) => "completed".to_string(),
                        StepState::Failed(e) => format!("failed: {e}"),
                    },
                    _ => match self.plain_step(*step) {
                        None | Some(StepState::NotStarted) => "not started".to_string(),
                        Some(StepState::Completed(())) => "completed".to_string(),
                        Some(StepState::Failed(e)) => format!("failed: {e}"),
                    },
                };
                let label = step.label();
                format!("{label:<32} {state}")
            })
            .collect()
    }

    // The service principal step carries credentials and has its own
    // accessors; it is None here.
    const fn plain_step(&self, step: SetupStep) -> Option<&StepState> {
        match step {
            SetupStep::Project => Some(&self.project),
            SetupStep::ScaffoldHld => Some(&self.scaffold_hld),
            SetupStep::ScaffoldManifest => Some(&self.scaffold_manifest),
            SetupStep::ScaffoldHelm => Some(&self.scaffold_helm),
            SetupStep::ScaffoldAppService => Some(&self.scaffold_app_service),
            SetupStep::HldToManifestPipeline => Some(&self.hld_to_manifest_pipeline),
            SetupStep::ServicePrincipal => None,
            SetupStep::ResourceGroup => Some(&self.resource_group),
            SetupStep::Acr => Some(&self.acr),
        }
    }

    const fn plain_step_mut(&mut self, step: SetupStep) -> Option<&mut StepState> {
        match step {
            SetupStep::Project => Some(&mut self.project),
            SetupStep::ScaffoldHld => Some(&mut self.scaffold_hld),
            SetupStep::ScaffoldManifest => Some(&mut self.scaffold_manifest),
            SetupStep::ScaffoldHelm => Some(&mut self.scaffold_helm),
            SetupStep::ScaffoldAppService => Some(&mut self.scaffold_app_service),
            SetupStep::HldToManifestPipeline => Some(&mut self.hld_to_manifest_pipeline),
            SetupStep::ServicePrincipal => None,
            SetupStep::ResourceGroup => Some(&mut self.resource_group),
            SetupStep::Acr => Some(&mut self.acr),
        }
    }
}
