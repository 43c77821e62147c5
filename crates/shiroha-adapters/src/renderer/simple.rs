//! Simple placeholder substitution renderer.

use std::path::Path;

use shiroha_core::{
    application::ports::TemplateRenderer,
    domain::{DomainValidator as validator, ProjectStructure, RenderContext, TemplateSet},
    error::{ShirohaError, ShirohaResult},
};
use tracing::{debug, instrument};

/// Renderer that replaces `{{KEY}}` placeholders from the [`RenderContext`].
///
/// Directories come from the set's manifest, files from its entries, both in
/// declaration order.
pub struct SimpleRenderer;

impl SimpleRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(variant = %set.variant, root = %project_root.display()))]
    fn render(
        &self,
        set: &TemplateSet,
        context: &RenderContext,
        project_root: &Path,
    ) -> ShirohaResult<ProjectStructure> {
        validator::validate_template_set(set).map_err(ShirohaError::Domain)?;

        let mut structure = ProjectStructure::new(project_root);

        for dir in set.manifest.iter() {
            structure.add_directory(dir.as_path());
        }

        for entry in &set.entries {
            structure.add_file(entry.path.as_path(), entry.content.render(context));
        }

        debug!(
            files = structure.file_count(),
            directories = structure.directory_count(),
            "Template rendered"
        );

        validator::validate_project_structure(&structure).map_err(ShirohaError::Domain)?;

        Ok(structure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiroha_core::domain::{
        DirectoryManifest, ProjectName, TemplateEntry, TemplateVariant, ToolchainVersion,
    };

    #[test]
    fn substitutes_name_and_version() {
        let set = TemplateSet::new(TemplateVariant::Basic, DirectoryManifest::new(["cmd"]))
            .with_entry(TemplateEntry::parameterized(
                "go.mod",
                "module {{PROJECT_NAME}}\n\ngo {{GO_VERSION}}\n",
            ))
            .with_entry(TemplateEntry::literal("README.md", "# {{PROJECT_NAME}}"));
        let ctx = RenderContext::new(
            &ProjectName::parse("demo").unwrap(),
            ToolchainVersion::new(1, 22),
        );

        let structure = SimpleRenderer::new()
            .render(&set, &ctx, Path::new("out/demo"))
            .unwrap();

        assert_eq!(structure.root(), Path::new("out/demo"));
        assert_eq!(structure.directory_count(), 1);
        assert_eq!(
            structure.file("go.mod").unwrap().content,
            "module demo\n\ngo 1.22\n"
        );
        // literal entries are copied through untouched
        assert_eq!(
            structure.file("README.md").unwrap().content,
            "# {{PROJECT_NAME}}"
        );
    }

    #[test]
    fn empty_set_is_rejected() {
        let set = TemplateSet::new(TemplateVariant::Basic, DirectoryManifest::default());
        let ctx = RenderContext::new(
            &ProjectName::parse("demo").unwrap(),
            ToolchainVersion::MINIMUM,
        );
        assert!(SimpleRenderer::new()
            .render(&set, &ctx, Path::new("demo"))
            .is_err());
    }
}
