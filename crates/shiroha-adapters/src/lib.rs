//! Infrastructure adapters for Shiroha.
//!
//! This crate implements the ports defined in `shiroha_core::application::ports`.
//! It contains all external dependencies and I/O operations: the real
//! filesystem, child processes, and the built-in Go templates. In-memory and
//! recording variants of each port live next to the real ones for tests.

pub mod builtin_templates;
pub mod filesystem;
pub mod process;
pub mod prompt;
pub mod renderer;
pub mod template_store;
pub mod toolchain;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{RecordingRunner, ScriptedResponse, SystemCommandRunner};
pub use prompt::ScriptedPrompter;
pub use renderer::SimpleRenderer;
pub use template_store::InMemoryStore;
pub use toolchain::{GoToolchainProbe, StaticToolchainProbe};
