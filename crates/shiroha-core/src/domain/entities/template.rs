//! Template domain model.
//!
//! A [`TemplateSet`] is everything needed to materialize one project skeleton:
//!
//! ```text
//! TemplateSet (aggregate)
//! ├── TemplateVariant          which flavour (basic / swagger)
//! ├── DirectoryManifest        directories created before any file
//! └── Vec<TemplateEntry>       files, in write order
//!      ├── RelativePath
//!      └── TemplateContent     Literal | Parameterized
//! ```
//!
//! Rendering is plain textual substitution driven by a [`RenderContext`].
//! There is no templating language: `{{PROJECT_NAME}}` and `{{GO_VERSION}}`
//! are replaced, every other character is copied through.

use std::collections::{HashMap, HashSet};

use crate::domain::{
    entities::common::RelativePath,
    error::DomainError,
    value_objects::{ProjectName, TemplateVariant, ToolchainVersion},
};

/// Placeholder for the project name.
pub const PROJECT_NAME_VAR: &str = "PROJECT_NAME";
/// Placeholder for the resolved `major.minor` Go version.
pub const GO_VERSION_VAR: &str = "GO_VERSION";

/// Context for template rendering.
///
/// Immutable after creation.
///
/// ## Built-in Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `PROJECT_NAME` | "demo" | User input |
/// | `GO_VERSION` | "1.22" | Version resolver |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(project_name: &ProjectName, version: ToolchainVersion) -> Self {
        let mut vars = HashMap::new();
        vars.insert(PROJECT_NAME_VAR.to_string(), project_name.to_string());
        vars.insert(GO_VERSION_VAR.to_string(), version.to_string());

        Self { variables: vars }
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// - `{{UNKNOWN}}` is left untouched
    /// - repeated placeholders are all replaced
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}

// ============================================================================
// Content Types
// ============================================================================

/// Content specification for a file.
#[derive(Debug, Clone)]
pub enum TemplateContent {
    /// Content used exactly as provided.
    Literal(TemplateSource),

    /// Content with `{{VARIABLE}}` placeholders to be substituted.
    Parameterized(TemplateSource),
}

impl TemplateContent {
    /// Produce the final file text for a context.
    pub fn render(&self, ctx: &RenderContext) -> String {
        match self {
            Self::Literal(source) => source.as_str().to_string(),
            Self::Parameterized(source) => ctx.render(source.as_str()),
        }
    }
}

/// Source of template content: either compile-time or runtime.
#[derive(Debug, Clone)]
pub enum TemplateSource {
    /// Compile-time string literal.
    Static(&'static str),

    /// Runtime-owned string.
    Owned(String),
}

impl From<&'static str> for TemplateSource {
    fn from(s: &'static str) -> Self {
        Self::Static(s)
    }
}

impl From<String> for TemplateSource {
    fn from(s: String) -> Self {
        Self::Owned(s)
    }
}

impl TemplateSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s,
        }
    }
}

// ============================================================================
// Entries, Manifest, Set
// ============================================================================

/// One generated file: where it goes and what it contains.
#[derive(Debug, Clone)]
pub struct TemplateEntry {
    pub path: RelativePath,
    pub content: TemplateContent,
}

impl TemplateEntry {
    pub fn new(path: impl Into<RelativePath>, content: TemplateContent) -> Self {
        Self {
            path: path.into(),
            content,
        }
    }

    /// File copied verbatim.
    pub fn literal(path: &str, text: &'static str) -> Self {
        Self::new(path, TemplateContent::Literal(text.into()))
    }

    /// File with placeholders.
    pub fn parameterized(path: &str, text: &'static str) -> Self {
        Self::new(path, TemplateContent::Parameterized(text.into()))
    }
}

/// Directories that must exist before any file is written.
///
/// Order is fixed so output and logs are deterministic, but creation does not
/// depend on it (every entry is created with all of its parents).
#[derive(Debug, Clone, Default)]
pub struct DirectoryManifest {
    directories: Vec<RelativePath>,
}

impl DirectoryManifest {
    pub fn new<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<RelativePath>,
    {
        Self {
            directories: dirs.into_iter().map(Into::into).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &RelativePath> {
        self.directories.iter()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.directories.iter().any(|d| d.as_str() == path)
    }

    pub fn len(&self) -> usize {
        self.directories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }
}

/// A complete, fixed project skeleton for one [`TemplateVariant`].
#[derive(Debug, Clone)]
pub struct TemplateSet {
    pub variant: TemplateVariant,
    pub description: String,
    pub manifest: DirectoryManifest,
    pub entries: Vec<TemplateEntry>,
}

impl TemplateSet {
    pub fn new(variant: TemplateVariant, manifest: DirectoryManifest) -> Self {
        Self {
            variant,
            description: String::new(),
            manifest,
            entries: Vec::new(),
        }
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    pub fn with_entry(mut self, entry: TemplateEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn entry(&self, path: &str) -> Option<&TemplateEntry> {
        self.entries.iter().find(|e| e.path.as_str() == path)
    }

    /// Validate all invariants.
    ///
    /// - at least one file
    /// - no file path appears twice
    /// - no directory appears twice
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyTemplateSet {
                variant: self.variant.to_string(),
            });
        }

        let mut seen = HashSet::new();
        for path in self.entries.iter().map(|e| e.path.as_str()) {
            if !seen.insert(path.clone()) {
                return Err(DomainError::DuplicatePath { path });
            }
        }

        let mut seen_dirs = HashSet::new();
        for path in self.manifest.iter().map(RelativePath::as_str) {
            if !seen_dirs.insert(path.clone()) {
                return Err(DomainError::DuplicatePath { path });
            }
        }

        Ok(())
    }
}
