use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// Final project structure ready for materialization.
///
/// This is the output of the template rendering process. Paths inside are
/// relative to `root` (which is `<output dir>/<project name>`).
#[derive(Debug, Clone)]
pub struct ProjectStructure {
    pub(crate) root: PathBuf,
    pub(crate) directories: Vec<DirectoryToCreate>,
    pub(crate) files: Vec<FileToWrite>,
}

impl ProjectStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            directories: Vec::new(),
            files: Vec::new(),
        }
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: String) {
        self.files.push(FileToWrite {
            path: path.into(),
            content,
        });
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.directories
            .push(DirectoryToCreate { path: path.into() });
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: String) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_directory(path);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::EmptyStructure {
                root: self.root.clone(),
            });
        }

        let mut seen = HashSet::new();
        let paths = self
            .directories
            .iter()
            .map(|d| &d.path)
            .chain(self.files.iter().map(|f| &f.path));

        for path in paths {
            let path_str = path.display().to_string();
            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed { path: path_str });
            }
            if !seen.insert(path_str.clone()) {
                return Err(DomainError::DuplicatePath { path: path_str });
            }
        }

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.files.iter()
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.directories.iter()
    }

    /// Content of a rendered file, looked up by its relative path.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&FileToWrite> {
        self.files.iter().find(|f| f.path == path.as_ref())
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn directory_count(&self) -> usize {
        self.directories.len()
    }
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
}

impl FileToWrite {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

#[derive(Debug, Clone)]
pub struct DirectoryToCreate {
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structure_without_files_is_invalid() {
        let s = ProjectStructure::new("out/demo").with_directory("cmd");
        let err = s.validate().unwrap_err();
        assert_eq!(
            err,
            DomainError::EmptyStructure {
                root: PathBuf::from("out/demo")
            }
        );
        assert_eq!(err.to_string(), "Nothing to generate under out/demo");
    }

    #[test]
    fn absolute_entries_are_rejected() {
        let s = ProjectStructure::new("out/demo").with_file("/etc/passwd", String::new());
        assert!(matches!(
            s.validate(),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn file_lookup_by_relative_path() {
        let s = ProjectStructure::new("out/demo")
            .with_directory("config")
            .with_file("config.yaml", "server:\n  port: 8080".into());
        assert!(s.validate().is_ok());
        assert_eq!(s.file("config.yaml").map(|f| f.size()), Some(20));
        assert_eq!(s.directory_count(), 1);
    }
}
