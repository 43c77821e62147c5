// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside reports and test assertions)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("invalid choice: {choice}, please enter 1-{max}")]
    InvalidPlatformChoice { choice: String, max: usize },

    #[error("Cannot derive a project name from {}", path.display())]
    InvalidProjectRoot { path: PathBuf },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Duplicate path in template set: {path}")]
    DuplicatePath { path: String },

    #[error("Template set '{variant}' has no files")]
    EmptyTemplateSet { variant: String },

    #[error("Nothing to generate under {}", root.display())]
    EmptyStructure { root: PathBuf },

    #[error("Unknown template variant '{0}'")]
    UnknownVariant(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { .. } => vec![
                "Use ASCII letters, digits, '-', '_' or '.'".into(),
                "Do not start the name with '.' or '-'".into(),
                "Examples: demo, user-api, order_service".into(),
            ],
            Self::InvalidPlatformChoice { max, .. } => vec![
                format!("Enter a number between 1 and {max}"),
                "Try: shiroha list to see the supported platforms".into(),
            ],
            Self::InvalidProjectRoot { path } => vec![
                format!("'{}' has no directory name", path.display()),
                "Run the command from inside the generated project".into(),
            ],
            Self::UnknownVariant(_) => vec!["Available variants: basic, swagger".into()],
            Self::EmptyTemplateSet { .. }
            | Self::EmptyStructure { .. }
            | Self::DuplicatePath { .. } => vec![
                "The built-in templates are corrupted".into(),
                "Please report this issue".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. }
            | Self::InvalidPlatformChoice { .. }
            | Self::InvalidProjectRoot { .. }
            | Self::UnknownVariant(_) => ErrorCategory::Validation,
            Self::AbsolutePathNotAllowed { .. }
            | Self::DuplicatePath { .. }
            | Self::EmptyTemplateSet { .. }
            | Self::EmptyStructure { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
