//! Application layer for Shiroha.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (scaffold, build, tooling, the
//!   `new` flow)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    BuildService, Confirmation, OrchestratorOptions, OrchestratorReport, ProjectOrchestrator,
    ScaffoldReport, ScaffoldService, Stage, StageOutcome, StageReport, TemplateInfo,
    ToolingService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{
    CommandRunner, Filesystem, Prompter, StageObserver, TemplateRenderer, TemplateStore,
    ToolchainProbe,
};

pub use error::ApplicationError;
