pub mod build_job;
pub mod command;
pub mod common;
pub mod project_structure;
pub mod template;

pub use crate::domain::DomainError;
pub use build_job::BuildJob;
pub use command::{CommandOutput, CommandSpec, ToolchainCommands};
pub use project_structure::ProjectStructure;
pub use template::{TemplateEntry, TemplateSet};
