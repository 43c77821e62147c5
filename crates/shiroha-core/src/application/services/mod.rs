//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "scaffold a project" or "build for windows".

pub mod build_service;
pub mod orchestrator;
pub mod scaffold_service;
pub mod tooling_service;

pub use build_service::BuildService;
pub use orchestrator::{
    Confirmation, OrchestratorOptions, OrchestratorReport, ProjectOrchestrator, Stage,
    StageOutcome, StageReport,
};
pub use scaffold_service::{ScaffoldReport, ScaffoldService, TemplateInfo};
pub use tooling_service::ToolingService;
