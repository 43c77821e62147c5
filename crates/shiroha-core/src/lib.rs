//! Shiroha Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Shiroha
//! Gin project scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            shiroha-cli (CLI)            │
//! │      (new, build, doc, run, list)       │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │  (Scaffold, Build, Tooling, Orchestrator)│
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │ (Filesystem, CommandRunner, Store, ...) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    shiroha-adapters (Infrastructure)    │
//! │ (LocalFilesystem, SystemCommandRunner)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ToolchainVersion, TemplateSet, BuildJob)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shiroha_core::prelude::*;
//!
//! let service = ScaffoldService::new(store, renderer, filesystem, probe);
//! let report = service.scaffold("demo", ".", TemplateVariant::Basic)?;
//! println!("go {}", report.version);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BuildService, Confirmation, OrchestratorOptions, ProjectOrchestrator, ScaffoldService,
        StageReport, ToolingService,
        ports::{
            CommandRunner, Filesystem, Prompter, StageObserver, TemplateRenderer, TemplateStore,
            ToolchainProbe,
        },
    };
    pub use crate::domain::{
        BuildJob, CommandOutput, CommandSpec, PlatformCatalog, PlatformTarget, ProjectName,
        ProjectStructure, RenderContext, TemplateSet, TemplateVariant, ToolchainCommands,
        ToolchainVersion,
    };
    pub use crate::error::{ShirohaError, ShirohaResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
