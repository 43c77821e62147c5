//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `shiroha-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateStore`: Template set retrieval
//!   - `TemplateRenderer`: Placeholder substitution
//!   - `CommandRunner`: External programs (`go`, `swag`)
//!   - `ToolchainProbe`: Installed toolchain version
//!   - `Prompter`: Confirmation questions
//!   - `StageObserver`: Orchestrator progress
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    CommandRunner, Filesystem, Prompter, StageObserver, TemplateRenderer, TemplateStore,
    ToolchainProbe,
};
