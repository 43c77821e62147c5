//! Scaffold Service - materializes a project skeleton.
//!
//! Workflow:
//! 1. Validate the project name (before any filesystem access)
//! 2. Create every manifest directory under `<root>/<name>`
//! 3. Resolve the Go version through the toolchain probe
//! 4. Render the template set and write each file in order
//!
//! Writes are not transactional. The first failure aborts the remaining work
//! and everything already created stays on disk.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{Filesystem, TemplateRenderer, TemplateStore, ToolchainProbe},
    domain::{
        DomainValidator as validator, ProjectName, ProjectStructure, RenderContext, TemplateSet,
        TemplateVariant, ToolchainVersion,
    },
    error::{ShirohaError, ShirohaResult},
};

/// Information about a template variant for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateInfo {
    pub name: String,
    pub description: String,
    pub directories: usize,
    pub files: usize,
    pub api_docs: bool,
}

/// What a successful scaffold produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub project_name: ProjectName,
    pub project_root: PathBuf,
    pub variant: TemplateVariant,
    pub version: ToolchainVersion,
    pub directories: usize,
    pub files: usize,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    toolchain: Box<dyn ToolchainProbe>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        toolchain: Box<dyn ToolchainProbe>,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
            toolchain,
        }
    }

    /// Scaffold a new project at `<output_dir>/<project_name>`.
    ///
    /// Existing files at the same paths are overwritten.
    #[instrument(
        skip_all,
        fields(
            project = %project_name.as_ref(),
            output_dir = %output_dir.as_ref().display(),
            variant = %variant
        )
    )]
    pub fn scaffold(
        &self,
        project_name: impl AsRef<str>,
        output_dir: impl AsRef<Path>,
        variant: TemplateVariant,
    ) -> ShirohaResult<ScaffoldReport> {
        let name = validator::validate_project_name(project_name.as_ref())?;
        let project_root = output_dir.as_ref().join(name.as_str());
        let set = self.template_set(variant)?;

        info!(root = %project_root.display(), "Creating project directories");
        for dir in set.manifest.iter() {
            let path = project_root.join(dir.as_path());
            debug!(path = %path.display(), "mkdir");
            self.filesystem.create_dir_all(&path)?;
        }

        let version = self.resolve_version();
        let context = RenderContext::new(&name, version);
        let structure = self.renderer.render(&set, &context, &project_root)?;
        validator::validate_project_structure(&structure)?;

        self.write_files(&structure)?;

        info!(
            files = structure.file_count(),
            directories = set.manifest.len(),
            "Scaffold completed successfully"
        );

        Ok(ScaffoldReport {
            project_name: name,
            project_root,
            variant,
            version,
            directories: set.manifest.len(),
            files: structure.file_count(),
        })
    }

    /// Render without touching the filesystem (`new --dry-run`).
    #[instrument(skip_all, fields(project = %project_name.as_ref(), variant = %variant))]
    pub fn plan(
        &self,
        project_name: impl AsRef<str>,
        output_dir: impl AsRef<Path>,
        variant: TemplateVariant,
    ) -> ShirohaResult<ProjectStructure> {
        let name = validator::validate_project_name(project_name.as_ref())?;
        let set = self.template_set(variant)?;
        let context = RenderContext::new(&name, self.resolve_version());
        let structure = self
            .renderer
            .render(&set, &context, &output_dir.as_ref().join(name.as_str()))?;
        validator::validate_project_structure(&structure)?;
        Ok(structure)
    }

    /// Version to embed in `go.mod`.
    ///
    /// Never fails: an unavailable toolchain resolves to the minimum.
    pub fn resolve_version(&self) -> ToolchainVersion {
        let detected = self.toolchain.detect_version().unwrap_or_else(|| {
            warn!(
                minimum = %ToolchainVersion::MINIMUM,
                "Could not detect the Go version, using the minimum"
            );
            String::new()
        });
        let version = ToolchainVersion::resolve(&detected);
        debug!(detected = %detected, resolved = %version, "Resolved Go version");
        version
    }

    /// List all available template variants.
    pub fn list_templates(&self) -> ShirohaResult<Vec<TemplateInfo>> {
        let sets = self.store.list()?;

        Ok(sets
            .into_iter()
            .map(|s| TemplateInfo {
                name: s.variant.to_string(),
                description: s.description.clone(),
                directories: s.manifest.len(),
                files: s.entries.len(),
                api_docs: s.variant.has_api_docs(),
            })
            .collect())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn template_set(&self, variant: TemplateVariant) -> ShirohaResult<TemplateSet> {
        let set = self.store.get(variant)?;
        validator::validate_template_set(&set).map_err(ShirohaError::Domain)?;
        Ok(set)
    }

    /// Write every file in order, stopping at the first failure.
    fn write_files(&self, structure: &ProjectStructure) -> ShirohaResult<()> {
        for file in structure.files() {
            let path = structure.root().join(&file.path);

            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }

            debug!(path = %path.display(), bytes = file.size(), "write");
            self.filesystem.write_file(&path, &file.content)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        ApplicationError,
        ports::output::{MockFilesystem, MockTemplateRenderer, MockTemplateStore, MockToolchainProbe},
    };
    use crate::domain::{DirectoryManifest, TemplateEntry};
    use mockall::predicate::*;

    fn small_set() -> TemplateSet {
        TemplateSet::new(
            TemplateVariant::Basic,
            DirectoryManifest::new(["cmd", "config"]),
        )
        .with_entry(TemplateEntry::parameterized(
            "go.mod",
            "module {{PROJECT_NAME}}\n\ngo {{GO_VERSION}}\n",
        ))
        .with_entry(TemplateEntry::literal("config.yaml", "server:\n  port: 8080"))
    }

    fn store() -> MockTemplateStore {
        let mut store = MockTemplateStore::new();
        store.expect_get().returning(|_| Ok(small_set()));
        store
    }

    fn renderer() -> MockTemplateRenderer {
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().returning(|set, ctx, root| {
            let mut structure = ProjectStructure::new(root);
            for dir in set.manifest.iter() {
                structure.add_directory(dir.as_path());
            }
            for entry in &set.entries {
                structure.add_file(entry.path.as_path(), entry.content.render(ctx));
            }
            Ok(structure)
        });
        renderer
    }

    fn probe(version: Option<&'static str>) -> MockToolchainProbe {
        let mut probe = MockToolchainProbe::new();
        probe
            .expect_detect_version()
            .returning(move || version.map(String::from));
        probe
    }

    #[test]
    fn invalid_name_fails_before_filesystem_access() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let service = ScaffoldService::new(
            Box::new(store()),
            Box::new(renderer()),
            Box::new(fs),
            Box::new(probe(Some("go1.22.4"))),
        );

        let err = service
            .scaffold("../evil", "/tmp", TemplateVariant::Basic)
            .unwrap_err();
        assert_eq!(err.category(), crate::error::ErrorCategory::Validation);
    }

    #[test]
    fn directory_failure_aborts_before_any_write() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all()
            .with(eq(Path::new("/out/demo/cmd")))
            .times(1)
            .returning(|p| {
                Err(ApplicationError::FilesystemError {
                    path: p.to_path_buf(),
                    reason: "permission denied".into(),
                }
                .into())
            });
        fs.expect_write_file().never();

        let mut toolchain = MockToolchainProbe::new();
        toolchain.expect_detect_version().never();

        let service = ScaffoldService::new(
            Box::new(store()),
            Box::new(renderer()),
            Box::new(fs),
            Box::new(toolchain),
        );

        let err = service
            .scaffold("demo", "/out", TemplateVariant::Basic)
            .unwrap_err();
        assert!(err.to_string().contains("/out/demo/cmd"));
    }

    #[test]
    fn files_are_written_with_resolved_version() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .with(
                eq(Path::new("/out/demo/go.mod")),
                eq("module demo\n\ngo 1.25\n"),
            )
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .with(eq(Path::new("/out/demo/config.yaml")), always())
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ScaffoldService::new(
            Box::new(store()),
            Box::new(renderer()),
            Box::new(fs),
            Box::new(probe(Some("go1.25.1"))),
        );

        let report = service
            .scaffold("demo", "/out", TemplateVariant::Basic)
            .unwrap();
        assert_eq!(report.version, ToolchainVersion::new(1, 25));
        assert_eq!(report.files, 2);
        assert_eq!(report.directories, 2);
        assert_eq!(report.project_root, Path::new("/out/demo"));
    }

    #[test]
    fn missing_toolchain_falls_back_to_minimum() {
        let service = ScaffoldService::new(
            Box::new(store()),
            Box::new(renderer()),
            Box::new(MockFilesystem::new()),
            Box::new(probe(None)),
        );
        assert_eq!(service.resolve_version(), ToolchainVersion::MINIMUM);
    }

    #[test]
    fn plan_never_touches_filesystem() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let service = ScaffoldService::new(
            Box::new(store()),
            Box::new(renderer()),
            Box::new(fs),
            Box::new(probe(Some("go1.21.0"))),
        );

        let structure = service.plan("demo", ".", TemplateVariant::Basic).unwrap();
        assert_eq!(structure.file_count(), 2);
        assert_eq!(
            structure.file("go.mod").unwrap().content,
            "module demo\n\ngo 1.21\n"
        );
    }

    #[test]
    fn missing_variant_is_reported() {
        let mut store = MockTemplateStore::new();
        store.expect_get().returning(|v| {
            Err(ApplicationError::TemplateVariantMissing {
                variant: v.to_string(),
            }
            .into())
        });

        let service = ScaffoldService::new(
            Box::new(store),
            Box::new(renderer()),
            Box::new(MockFilesystem::new()),
            Box::new(probe(None)),
        );

        let err = service
            .plan("demo", ".", TemplateVariant::Swagger)
            .unwrap_err();
        assert_eq!(err.category(), crate::error::ErrorCategory::NotFound);
    }
}
