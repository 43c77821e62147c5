//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use shiroha_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ShirohaResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep one handle for assertions while the
/// service under test owns another. Failures can be injected for the N-th
/// `write_file` call or for any operation on a given path.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    writes: usize,
    fail_on_write: Option<usize>,
    fail_on_path: Option<PathBuf>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the `n`-th call to `write_file` (1-based) fail.
    pub fn fail_on_write_number(self, n: usize) -> Self {
        self.write_guard().fail_on_write = Some(n);
        self
    }

    /// Make every operation on `path` fail.
    pub fn fail_on_path(self, path: impl Into<PathBuf>) -> Self {
        self.write_guard().fail_on_path = Some(path.into());
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.read_guard().files.get(path.as_ref()).cloned()
    }

    /// Check a directory was created.
    pub fn has_directory(&self, path: impl AsRef<Path>) -> bool {
        self.read_guard().directories.contains(path.as_ref())
    }

    /// All files, sorted by path.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.read_guard().files.keys().cloned().collect()
    }

    /// Number of `write_file` calls seen so far, including failed ones.
    pub fn write_count(&self) -> usize {
        self.read_guard().writes
    }

    fn read_guard(&self) -> RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn injected(path: &Path, reason: &str) -> shiroha_core::error::ShirohaError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> ShirohaResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if inner.fail_on_path.as_deref() == Some(path) {
            return Err(injected(path, "injected failure"));
        }

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ShirohaResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.writes += 1;
        if inner.fail_on_write == Some(inner.writes) || inner.fail_on_path.as_deref() == Some(path)
        {
            return Err(injected(path, "injected failure"));
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(injected(path, "Parent directory does not exist"));
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.read_guard();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let handle = fs.clone();

        fs.create_dir_all(Path::new("demo/cmd")).unwrap();
        fs.write_file(Path::new("demo/cmd/server.go"), "package main")
            .unwrap();

        assert!(handle.has_directory("demo"));
        assert_eq!(
            handle.read_file("demo/cmd/server.go").as_deref(),
            Some("package main")
        );
    }

    #[test]
    fn nth_write_fails_and_is_counted() {
        let fs = MemoryFilesystem::new().fail_on_write_number(2);
        fs.create_dir_all(Path::new("d")).unwrap();

        fs.write_file(Path::new("d/a"), "1").unwrap();
        let err = fs.write_file(Path::new("d/b"), "2").unwrap_err();
        fs.write_file(Path::new("d/c"), "3").unwrap();

        assert!(err.to_string().contains("d/b"));
        assert_eq!(fs.write_count(), 3);
        assert_eq!(fs.list_files(), [PathBuf::from("d/a"), PathBuf::from("d/c")]);
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("nowhere/file"), "").is_err());
    }
}
