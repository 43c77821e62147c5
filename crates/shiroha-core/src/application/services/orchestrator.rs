//! Project Orchestrator - the whole `shiroha new` flow.
//!
//! ```text
//! scaffold ─► next steps ─► confirm ─┬─ declined ─► done
//!                                     └─ affirmed ─► go mod tidy (fatal)
//!                                                   ─► swag init (warning only)
//!                                                   ─► go run   (fatal)
//! ```
//!
//! Each finished stage is reported to a [`StageObserver`] so the caller can
//! render progress. The orchestrator itself prints nothing.

use std::fmt;
use std::path::Path;
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ports::{Prompter, StageObserver},
        services::{ScaffoldReport, ScaffoldService, ToolingService},
    },
    domain::{ENTRYPOINT, TemplateVariant},
    error::ShirohaResult,
};

/// Question asked after the skeleton is written.
pub const RUN_QUESTION: &str =
    "Do you want to enter the directory, run 'go mod tidy' and start the project?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Scaffold,
    NextSteps,
    Confirm,
    SyncDependencies,
    GenerateDocs,
    Run,
}

impl Stage {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Scaffold => "scaffold",
            Self::NextSteps => "next steps",
            Self::Confirm => "confirm",
            Self::SyncDependencies => "go mod tidy",
            Self::GenerateDocs => "swag init",
            Self::Run => "go run",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome {
    Completed,
    Skipped,
    /// Failed, but the flow continued.
    Warning(String),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport {
    pub stage: Stage,
    pub outcome: StageOutcome,
    /// Extra lines for the user (the next-step commands).
    pub notes: Vec<String>,
}

impl StageReport {
    pub fn new(stage: Stage, outcome: StageOutcome) -> Self {
        Self {
            stage,
            outcome,
            notes: Vec::new(),
        }
    }

    pub fn with_notes(mut self, notes: Vec<String>) -> Self {
        self.notes = notes;
        self
    }
}

/// How the confirmation step is answered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Confirmation {
    /// Ask through the prompter.
    #[default]
    Ask,
    /// `--yes`
    AssumeYes,
    /// `--no-run`
    AssumeNo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrchestratorOptions {
    pub variant: TemplateVariant,
    pub generate_docs: bool,
    pub confirmation: Confirmation,
}

impl OrchestratorOptions {
    /// Docs generation follows the variant unless overridden.
    pub fn for_variant(variant: TemplateVariant) -> Self {
        Self {
            variant,
            generate_docs: variant.has_api_docs(),
            confirmation: Confirmation::Ask,
        }
    }

    pub fn generate_docs(mut self, enabled: bool) -> Self {
        self.generate_docs = enabled;
        self
    }

    pub fn confirmation(mut self, confirmation: Confirmation) -> Self {
        self.confirmation = confirmation;
        self
    }
}

impl Default for OrchestratorOptions {
    fn default() -> Self {
        Self::for_variant(TemplateVariant::default())
    }
}

/// Summary of an orchestrator run that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrchestratorReport {
    pub scaffold: ScaffoldReport,
    /// The user agreed and the server was started (and has exited).
    pub ran: bool,
    /// Non-fatal docs generation failure, if any.
    pub docs_warning: Option<String>,
}

pub struct ProjectOrchestrator {
    scaffold: ScaffoldService,
    tooling: ToolingService,
    prompter: Box<dyn Prompter>,
}

impl ProjectOrchestrator {
    pub fn new(
        scaffold: ScaffoldService,
        tooling: ToolingService,
        prompter: Box<dyn Prompter>,
    ) -> Self {
        Self {
            scaffold,
            tooling,
            prompter,
        }
    }

    #[instrument(skip_all, fields(project = %project_name, variant = %options.variant))]
    pub fn run(
        &self,
        project_name: &str,
        output_dir: &Path,
        options: OrchestratorOptions,
        observer: &dyn StageObserver,
    ) -> ShirohaResult<OrchestratorReport> {
        let scaffold = self
            .scaffold
            .scaffold(project_name, output_dir, options.variant)
            .inspect_err(|e| fail(observer, Stage::Scaffold, e))?;
        observer.on_stage(&StageReport::new(Stage::Scaffold, StageOutcome::Completed));

        observer.on_stage(
            &StageReport::new(Stage::NextSteps, StageOutcome::Completed)
                .with_notes(next_steps(scaffold.project_name.as_str())),
        );

        let mut report = OrchestratorReport {
            scaffold,
            ran: false,
            docs_warning: None,
        };

        if !self.confirm(options.confirmation, observer)? {
            info!("Run declined");
            observer.on_stage(&StageReport::new(Stage::Confirm, StageOutcome::Skipped));
            return Ok(report);
        }
        observer.on_stage(&StageReport::new(Stage::Confirm, StageOutcome::Completed));

        let root = report.scaffold.project_root.clone();

        self.tooling
            .sync_dependencies(&root)
            .inspect_err(|e| fail(observer, Stage::SyncDependencies, e))?;
        observer.on_stage(&StageReport::new(
            Stage::SyncDependencies,
            StageOutcome::Completed,
        ));

        if options.generate_docs {
            match self.tooling.generate_docs(&root) {
                Ok(_) => observer.on_stage(&StageReport::new(
                    Stage::GenerateDocs,
                    StageOutcome::Completed,
                )),
                Err(e) => {
                    warn!(error = %e, "Docs generation failed, continuing");
                    observer.on_stage(&StageReport::new(
                        Stage::GenerateDocs,
                        StageOutcome::Warning(e.to_string()),
                    ));
                    report.docs_warning = Some(e.to_string());
                }
            }
        } else {
            observer.on_stage(&StageReport::new(Stage::GenerateDocs, StageOutcome::Skipped));
        }

        self.tooling
            .run_server(&root)
            .inspect_err(|e| fail(observer, Stage::Run, e))?;
        observer.on_stage(&StageReport::new(Stage::Run, StageOutcome::Completed));

        report.ran = true;
        Ok(report)
    }

    fn confirm(
        &self,
        confirmation: Confirmation,
        observer: &dyn StageObserver,
    ) -> ShirohaResult<bool> {
        match confirmation {
            Confirmation::AssumeYes => Ok(true),
            Confirmation::AssumeNo => Ok(false),
            Confirmation::Ask => self
                .prompter
                .confirm(RUN_QUESTION)
                .inspect_err(|e| fail(observer, Stage::Confirm, e)),
        }
    }
}

/// Commands the user would type to continue by hand.
pub fn next_steps(project_name: &str) -> Vec<String> {
    vec![
        format!("cd {project_name}"),
        "go mod tidy".to_string(),
        format!("go run {ENTRYPOINT}"),
    ]
}

fn fail(observer: &dyn StageObserver, stage: Stage, err: &crate::error::ShirohaError) {
    observer.on_stage(&StageReport::new(
        stage,
        StageOutcome::Failed(err.to_string()),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_steps_match_manual_flow() {
        assert_eq!(
            next_steps("demo"),
            ["cd demo", "go mod tidy", "go run cmd/server.go"]
        );
    }

    #[test]
    fn docs_follow_variant_unless_overridden() {
        assert!(!OrchestratorOptions::for_variant(TemplateVariant::Basic).generate_docs);
        assert!(OrchestratorOptions::for_variant(TemplateVariant::Swagger).generate_docs);
        assert!(
            OrchestratorOptions::for_variant(TemplateVariant::Basic)
                .generate_docs(true)
                .generate_docs
        );
    }

    #[test]
    fn stage_labels_name_the_tool() {
        assert_eq!(Stage::SyncDependencies.to_string(), "go mod tidy");
        assert_eq!(Stage::GenerateDocs.to_string(), "swag init");
    }
}
