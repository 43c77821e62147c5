//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `shiroha-adapters` crate provides implementations; the CLI crate
//! provides the interactive prompt.

use std::path::Path;

use crate::application::services::orchestrator::StageReport;
use crate::domain::{
    CommandOutput, CommandSpec, ProjectStructure, RenderContext, TemplateSet, TemplateVariant,
};
use crate::error::ShirohaResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `shiroha_adapters::filesystem::LocalFilesystem` (production)
/// - `shiroha_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Writes truncate existing files. There is no removal operation: a failed
/// scaffold leaves whatever it already wrote.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ShirohaResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> ShirohaResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template storage and retrieval.
///
/// Implemented by:
/// - `shiroha_adapters::template_store::InMemoryStore` (built-in templates)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Get the template set for a variant.
    fn get(&self, variant: TemplateVariant) -> ShirohaResult<TemplateSet>;

    /// List all available template sets.
    fn list(&self) -> ShirohaResult<Vec<TemplateSet>>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `shiroha_adapters::renderer::SimpleRenderer` (placeholder substitution)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render a template set into a project structure rooted at
    /// `project_root` (the `<root>/<name>` directory).
    fn render(
        &self,
        set: &TemplateSet,
        context: &RenderContext,
        project_root: &Path,
    ) -> ShirohaResult<ProjectStructure>;
}

/// Port for starting external programs.
///
/// Implemented by:
/// - `shiroha_adapters::process::SystemCommandRunner` (production)
/// - `shiroha_adapters::process::RecordingRunner` (testing)
///
/// Both methods block until the program exits. A program that cannot be
/// started is an `Err(CommandLaunch)`; a program that exits non-zero is an
/// `Ok` whose [`CommandOutput`] carries the code, so callers decide fatality.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run with stdout and stderr captured and combined.
    fn run_captured(&self, spec: &CommandSpec) -> ShirohaResult<CommandOutput>;

    /// Run in the foreground, sharing the parent's stdio.
    fn run_inherited(&self, spec: &CommandSpec) -> ShirohaResult<CommandOutput>;
}

/// Port for discovering the installed toolchain version string.
#[cfg_attr(test, mockall::automock)]
pub trait ToolchainProbe: Send + Sync {
    /// Raw version text such as `go1.22.4`, or `None` when unavailable.
    fn detect_version(&self) -> Option<String>;
}

/// Port for yes/no questions.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter: Send + Sync {
    fn confirm(&self, question: &str) -> ShirohaResult<bool>;
}

/// Receives one report per finished orchestrator stage.
#[cfg_attr(test, mockall::automock)]
pub trait StageObserver {
    fn on_stage(&self, report: &StageReport);
}
