//! Platform catalog for cross-compilation.
//!
//! The catalog is a fixed table built once at startup and handed to the
//! build service by value. Adding a platform means adding one row to
//! [`BUILTIN_PLATFORMS`]; nothing else changes.

use std::fmt;

use serde::Serialize;

use crate::domain::{
    error::DomainError,
    value_objects::{TargetArch, TargetOs},
};

/// One selectable build target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformTarget {
    /// Menu key the user types (`"1"`..`"5"`).
    pub selector: &'static str,
    pub os: TargetOs,
    pub arch: TargetArch,
    /// Human label shown in menus.
    pub description: &'static str,
}

impl fmt::Display for PlatformTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}

/// Rows of the built-in catalog, in menu order.
pub static BUILTIN_PLATFORMS: &[PlatformTarget] = &[
    PlatformTarget {
        selector: "1",
        os: TargetOs::Linux,
        arch: TargetArch::Amd64,
        description: "Linux (amd64)",
    },
    PlatformTarget {
        selector: "2",
        os: TargetOs::Linux,
        arch: TargetArch::Arm64,
        description: "Linux (arm64)",
    },
    PlatformTarget {
        selector: "3",
        os: TargetOs::Darwin,
        arch: TargetArch::Amd64,
        description: "macOS Intel (amd64)",
    },
    PlatformTarget {
        selector: "4",
        os: TargetOs::Darwin,
        arch: TargetArch::Arm64,
        description: "macOS Apple Silicon (arm64)",
    },
    PlatformTarget {
        selector: "5",
        os: TargetOs::Windows,
        arch: TargetArch::Amd64,
        description: "Windows (amd64)",
    },
];

/// Immutable selector → platform mapping.
#[derive(Debug, Clone)]
pub struct PlatformCatalog {
    targets: Vec<PlatformTarget>,
}

impl PlatformCatalog {
    /// The five platforms shipped with Shiroha.
    pub fn builtin() -> Self {
        Self {
            targets: BUILTIN_PLATFORMS.to_vec(),
        }
    }

    /// Look up a menu selection.
    ///
    /// Surrounding whitespace is ignored (the value usually comes from a
    /// line read on stdin). Any other key is rejected with the valid range.
    pub fn lookup(&self, selector: &str) -> Result<&PlatformTarget, DomainError> {
        let key = selector.trim();
        self.targets
            .iter()
            .find(|t| t.selector == key)
            .ok_or_else(|| DomainError::InvalidPlatformChoice {
                choice: key.to_string(),
                max: self.targets.len(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlatformTarget> {
        self.targets.iter()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl Default for PlatformCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
