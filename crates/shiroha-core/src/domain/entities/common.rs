use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A filesystem path guaranteed to stay **inside** the project directory.
///
/// Template entries and manifest directories are joined onto
/// `<root>/<project>`; an absolute path or a `..` component would let a
/// template write anywhere on disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Create a new relative path.
    ///
    /// # Panics
    /// Panics if the provided path is absolute or climbs out with `..`.
    /// Intended for compile-time template tables.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        match Self::try_new(path) {
            Ok(p) => p,
            Err(path) => panic!("RelativePath must stay inside the project: {path:?}"),
        }
    }

    /// Try to create a relative path.
    ///
    /// This is the non-panicking variant.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, PathBuf> {
        let path = path.into();
        let escapes = path
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes || path.as_os_str().is_empty() {
            Err(path)
        } else {
            Ok(Self(path))
        }
    }

    /// Borrow as a `Path`.
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Forward-slash form used in messages and tests.
    pub fn as_str(&self) -> String {
        self.0
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<&str> for RelativePath {
    fn from(s: &str) -> Self {
        RelativePath::new(s)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_accepts_relative() {
        let p = RelativePath::new("internal/router/main_router.go");
        assert_eq!(p.as_path(), Path::new("internal/router/main_router.go"));
    }

    #[test]
    #[should_panic]
    fn relative_path_rejects_absolute() {
        RelativePath::new("/etc/passwd");
    }

    #[test]
    fn try_new_rejects_parent_components() {
        assert!(RelativePath::try_new("../outside").is_err());
        assert!(RelativePath::try_new("cmd/../../outside").is_err());
        assert!(RelativePath::try_new("").is_err());
    }

    #[test]
    fn display_uses_forward_slashes() {
        let p = RelativePath::new(Path::new("pkg").join("jwt"));
        assert_eq!(p.to_string(), "pkg/jwt");
    }
}
