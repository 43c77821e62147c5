//! Domain value objects: ProjectName, ToolchainVersion, TargetOs, TargetArch,
//! TemplateVariant.
//!
//! # Design
//!
//! These are pure value types: equality-by-value, no identity, no I/O.
//! Parsing is the only place invariants are checked; once a value exists it
//! is known to be valid.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ProjectName ──────────────────────────────────────────────────────────────

/// A validated project name.
///
/// The name is used verbatim as the Go module path, as the directory created
/// under the output root and inside generated titles, so it must be a single
/// well-formed path segment.
///
/// # Rules
///
/// | Rule | Rejected example |
/// |------|------------------|
/// | non-empty after trimming | `"   "` |
/// | only ASCII letters, digits, `-`, `_`, `.` | `"my app"`, `"a/b"` |
/// | does not start with `.` or `-` | `".hidden"`, `"-x"` |
/// | does not end with `.` | `"demo."` |
/// | no `..` | `"a..b"` |
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let name = raw.trim();
        let reject = |reason: &str| DomainError::InvalidProjectName {
            name: raw.to_string(),
            reason: reason.to_string(),
        };

        if name.is_empty() {
            return Err(reject("name cannot be empty"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(reject("name cannot contain path separators"));
        }
        if name.starts_with('.') || name.starts_with('-') {
            return Err(reject("name cannot start with '.' or '-'"));
        }
        if name.ends_with('.') {
            return Err(reject("name cannot end with '.'"));
        }
        if name.contains("..") {
            return Err(reject("name cannot contain '..'"));
        }
        if let Some(bad) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        {
            return Err(reject(&format!("character '{bad}' is not allowed")));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProjectName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ── ToolchainVersion ─────────────────────────────────────────────────────────

/// The `(major, minor)` Go version written into the generated `go.mod`.
///
/// Ordering is numeric and component-wise (major first, then minor), which
/// the derived `Ord` gives us from the field order. `1.9 < 1.18` holds here,
/// unlike a string comparison.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ToolchainVersion {
    major: u32,
    minor: u32,
}

impl ToolchainVersion {
    /// Lowest version ever embedded. Also the fallback for unparsable input.
    pub const MINIMUM: Self = Self::new(1, 18);

    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    pub const fn major(&self) -> u32 {
        self.major
    }

    pub const fn minor(&self) -> u32 {
        self.minor
    }

    /// Parse `<prefix><major>.<minor>[.<patch>...]`.
    ///
    /// The non-numeric prefix (`go`, `v`, `go version go`) is skipped. Each of
    /// the first two dot-separated fields must start with a digit; trailing
    /// text inside a field (`21rc1`) is ignored. Returns `None` when fewer
    /// than two numeric fields are present.
    pub fn parse(raw: &str) -> Option<Self> {
        let digits = raw.trim_start_matches(|c: char| !c.is_ascii_digit());
        let mut fields = digits.split('.');

        let major = leading_number(fields.next()?)?;
        let minor = leading_number(fields.next()?)?;
        Some(Self::new(major, minor))
    }

    /// Resolve the version to embed from a detected toolchain string.
    ///
    /// Never fails: malformed input yields [`Self::MINIMUM`], and anything
    /// older than the minimum is clamped up to it.
    pub fn resolve(detected: &str) -> Self {
        Self::parse(detected)
            .map(|v| v.max(Self::MINIMUM))
            .unwrap_or(Self::MINIMUM)
    }
}

/// Digits at the start of a field.
///
/// A field too large for `u32` is treated like a non-numeric one, so the
/// whole string counts as malformed and resolves to the minimum.
fn leading_number(field: &str) -> Option<u32> {
    let end = field
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(field.len(), |(i, _)| i);
    if end == 0 {
        return None;
    }
    field[..end].parse().ok()
}

impl Default for ToolchainVersion {
    fn default() -> Self {
        Self::MINIMUM
    }
}

impl fmt::Display for ToolchainVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

// ── TargetOs / TargetArch ────────────────────────────────────────────────────

/// Operating systems the build pipeline can cross-compile for (`GOOS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetOs {
    Linux,
    Darwin,
    Windows,
}

impl TargetOs {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Darwin => "darwin",
            Self::Windows => "windows",
        }
    }

    /// Suffix appended to the produced binary name.
    pub const fn executable_suffix(&self) -> &'static str {
        match self {
            Self::Windows => ".exe",
            Self::Linux | Self::Darwin => "",
        }
    }
}

impl fmt::Display for TargetOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CPU architectures (`GOARCH`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetArch {
    Amd64,
    Arm64,
}

impl TargetArch {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Amd64 => "amd64",
            Self::Arm64 => "arm64",
        }
    }
}

impl fmt::Display for TargetArch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── TemplateVariant ──────────────────────────────────────────────────────────

/// Which flavour of the Gin skeleton to generate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateVariant {
    /// Router, config loader and a `/test` route.
    #[default]
    Basic,
    /// Basic plus a sample handler, Swagger annotations and a `docs/` directory.
    Swagger,
}

impl TemplateVariant {
    pub const ALL: [Self; 2] = [Self::Basic, Self::Swagger];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Swagger => "swagger",
        }
    }

    /// Whether projects of this variant carry Swagger annotations for `swag`.
    pub const fn has_api_docs(&self) -> bool {
        matches!(self, Self::Swagger)
    }
}

impl fmt::Display for TemplateVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateVariant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" | "default" => Ok(Self::Basic),
            "swagger" | "swag" | "docs" => Ok(Self::Swagger),
            other => Err(DomainError::UnknownVariant(other.to_string())),
        }
    }
}
