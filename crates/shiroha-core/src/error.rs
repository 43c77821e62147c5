//! Unified error handling for Shiroha Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Shiroha Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShirohaError {
    /// Errors from the domain layer (business rule violations).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O and subprocess failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl ShirohaError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// True when the failure came from an external program.
    pub fn is_subprocess(&self) -> bool {
        self.category() == ErrorCategory::Subprocess
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Filesystem,
    Subprocess,
    Internal,
}

/// Convenient result type alias.
pub type ShirohaResult<T> = Result<T, ShirohaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_display_without_prefix() {
        let err: ShirohaError = DomainError::InvalidPlatformChoice {
            choice: "9".into(),
            max: 5,
        }
        .into();
        assert_eq!(err.to_string(), "invalid choice: 9, please enter 1-5");
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn subprocess_failures_are_flagged() {
        let err: ShirohaError = ApplicationError::CommandFailed {
            command: "go mod tidy".into(),
            status: "exit status 1".into(),
            output: String::new(),
        }
        .into();
        assert!(err.is_subprocess());
    }
}
