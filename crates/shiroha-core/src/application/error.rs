//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the outside world
//! (filesystem, subprocesses, prompts), not business logic. Business logic
//! errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// The external program could not be started at all.
    #[error("Failed to start '{command}': {reason}")]
    CommandLaunch { command: String, reason: String },

    /// The external program ran and exited unsuccessfully.
    #[error("{command} failed: {status}\nOutput: {output}")]
    CommandFailed {
        command: String,
        status: String,
        output: String,
    },

    /// `run` was asked to start a project that has no entrypoint.
    #[error("entrypoint not found: {}", path.display())]
    EntrypointMissing { path: PathBuf },

    /// Reading the user's answer failed.
    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// No template set is registered for the requested variant.
    #[error("No template set registered for variant '{variant}'")]
    TemplateVariantMissing { variant: String },

    /// Store access failed (lock poisoned).
    #[error("Template store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before the failure were left in place".into(),
            ],
            Self::CommandLaunch { command, .. } => {
                let program = command.split_whitespace().next().unwrap_or(command);
                let mut hints = vec![format!("Make sure '{program}' is installed and on PATH")];
                if program.ends_with("swag") {
                    hints.push(
                        "Install it with: go install github.com/swaggo/swag/cmd/swag@latest".into(),
                    );
                } else {
                    hints.push("Install Go from https://go.dev/dl/".into());
                }
                hints
            }
            Self::CommandFailed { .. } => vec![
                "Check the command output above".into(),
                "Run 'go mod tidy' in the project directory and try again".into(),
            ],
            Self::EntrypointMissing { .. } => vec![
                "Run this command from a project generated by shiroha".into(),
                "Or from its 'cmd' folder".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Pass --yes or --no-run when stdin is not a terminal".into(),
            ],
            Self::TemplateVariantMissing { .. } => vec![
                "Try: shiroha list to see available templates".into(),
            ],
            Self::StoreLockError => vec![
                "The template store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Filesystem,
            Self::CommandLaunch { .. } | Self::CommandFailed { .. } => ErrorCategory::Subprocess,
            Self::EntrypointMissing { .. } => ErrorCategory::Validation,
            Self::TemplateVariantMissing { .. } => ErrorCategory::NotFound,
            Self::PromptFailed { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
