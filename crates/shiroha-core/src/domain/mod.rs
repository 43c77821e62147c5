// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Shiroha.
//!
//! This module contains pure logic with no I/O. Filesystem access and
//! subprocesses are handled via ports (traits) defined in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, process, or network calls
//! - **Immutable catalogs**: platforms and templates are values passed in,
//!   never process-wide state
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod platform;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    build_job::{BIN_DIR, BuildJob, normalize_project_root},
    command::{CommandOutput, CommandSpec, DOCS_DIR, ENTRYPOINT, ENTRYPOINT_DIR, ToolchainCommands},
    common::RelativePath,
    project_structure::{DirectoryToCreate, FileToWrite, ProjectStructure},
    template::{
        DirectoryManifest, GO_VERSION_VAR, PROJECT_NAME_VAR, RenderContext, TemplateContent,
        TemplateEntry, TemplateSet, TemplateSource,
    },
};

pub use error::{DomainError, ErrorCategory};

pub use platform::{BUILTIN_PLATFORMS, PlatformCatalog, PlatformTarget};

pub use value_objects::{ProjectName, TargetArch, TargetOs, TemplateVariant, ToolchainVersion};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    // ========================================================================
    // Cross-entity behaviour
    // ========================================================================

    #[test]
    fn build_spec_carries_cross_compile_overrides() {
        let catalog = PlatformCatalog::builtin();
        let platform = *catalog.lookup("4").unwrap();
        let job = BuildJob::derive(platform, Path::new("/srv/demo/cmd")).unwrap();

        let spec = ToolchainCommands::default().build(&job);

        assert_eq!(spec.program, "go");
        assert_eq!(spec.env_value("GOOS"), Some("darwin"));
        assert_eq!(spec.env_value("GOARCH"), Some("arm64"));
        assert_eq!(spec.cwd.as_deref(), Some(Path::new("/srv/demo")));
        assert_eq!(spec.args[0], "build");
        assert_eq!(spec.args[1], "-o");
        assert!(spec.args[2].ends_with("demo"));
        assert_eq!(spec.args[3], "./cmd/server.go");
    }

    #[test]
    fn render_context_uses_resolved_version() {
        let name = DomainValidator::validate_project_name("demo").unwrap();
        let ctx = RenderContext::new(&name, ToolchainVersion::resolve("go1.9.7"));
        assert_eq!(ctx.render("go {{GO_VERSION}}"), "go 1.18");
    }

    #[test]
    fn validator_rejects_path_like_names() {
        assert!(DomainValidator::validate_project_name("../escape").is_err());
    }
}
