use std::path::{Component, Path, PathBuf};

use crate::domain::{
    entities::command::ENTRYPOINT_DIR, error::DomainError, platform::PlatformTarget,
};

/// Folder (under the project root) that receives compiled binaries.
pub const BIN_DIR: &str = "bin";

/// Everything derived for one build invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildJob {
    pub project_root: PathBuf,
    pub project_name: String,
    pub platform: PlatformTarget,
    /// `<project_root>/bin/<project_name>[.exe]`
    pub output_path: PathBuf,
}

impl BuildJob {
    /// Derive a job from the directory the user invoked the build from.
    ///
    /// The project name is the base name of the (normalized) root.
    pub fn derive(platform: PlatformTarget, invoked_from: &Path) -> Result<Self, DomainError> {
        let project_root = normalize_project_root(invoked_from);
        let project_name = project_root
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| DomainError::InvalidProjectRoot {
                path: project_root.clone(),
            })?
            .to_string();

        let binary = format!("{project_name}{}", platform.os.executable_suffix());
        let output_path = project_root.join(BIN_DIR).join(binary);

        Ok(Self {
            project_root,
            project_name,
            platform,
            output_path,
        })
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.project_root.join(BIN_DIR)
    }
}

/// Step out of the entrypoint folder.
///
/// `.` and `..` are resolved first, then running from `<project>/cmd` is
/// treated as running from `<project>`. This is a name heuristic only: any
/// directory called `cmd` is ascended.
pub fn normalize_project_root(dir: &Path) -> PathBuf {
    let dir = lexically_normalize(dir);
    let dir = dir.as_path();
    let in_entrypoint_dir = dir
        .file_name()
        .is_some_and(|name| name == ENTRYPOINT_DIR);

    match dir.parent() {
        Some(parent) if in_entrypoint_dir => parent.to_path_buf(),
        _ => dir.to_path_buf(),
    }
}

/// Resolve `.` and `..` without touching the filesystem.
///
/// `..` at the root stays at the root; leading `..` in a relative path is
/// kept.
fn lexically_normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::platform::PlatformCatalog;

    fn job(selector: &str, root: &str) -> BuildJob {
        let catalog = PlatformCatalog::builtin();
        let platform = *catalog.lookup(selector).unwrap();
        BuildJob::derive(platform, Path::new(root)).unwrap()
    }

    #[test]
    fn windows_output_gets_exe() {
        let job = job("5", "/work/demo");
        assert_eq!(job.output_path, Path::new("/work/demo/bin/demo.exe"));
    }

    #[test]
    fn unix_targets_have_no_suffix() {
        for selector in ["1", "2", "3", "4"] {
            let job = job(selector, "/work/demo");
            assert_eq!(job.output_path, Path::new("/work/demo/bin/demo"));
        }
    }

    #[test]
    fn cmd_folder_resolves_to_project_root() {
        let job = job("1", "/work/demo/cmd");
        assert_eq!(job.project_root, Path::new("/work/demo"));
        assert_eq!(job.project_name, "demo");
        assert_eq!(job.bin_dir(), Path::new("/work/demo/bin"));
    }

    #[test]
    fn only_one_level_is_ascended() {
        assert_eq!(
            normalize_project_root(Path::new("/work/cmd/cmd")),
            Path::new("/work/cmd")
        );
        assert_eq!(
            normalize_project_root(Path::new("/work/demo/internal")),
            Path::new("/work/demo/internal")
        );
    }

    #[test]
    fn parent_components_are_resolved_before_naming() {
        let up = job("1", "/work/demo/cmd/..");
        assert_eq!(up.project_root, Path::new("/work/demo"));
        assert_eq!(up.project_name, "demo");
        assert_eq!(up.output_path, Path::new("/work/demo/bin/demo"));

        let detour = job("1", "/work/demo/internal/../cmd/.");
        assert_eq!(detour.project_root, Path::new("/work/demo"));
    }

    #[test]
    fn lexical_normalization_edges() {
        assert_eq!(lexically_normalize(Path::new("/..")), Path::new("/"));
        assert_eq!(lexically_normalize(Path::new("../a/./b/..")), Path::new("../a"));
        assert_eq!(lexically_normalize(Path::new("a/..")), Path::new("."));
    }

    #[test]
    fn root_without_name_is_rejected() {
        let platform = *PlatformCatalog::builtin().lookup("1").unwrap();
        assert!(matches!(
            BuildJob::derive(platform, Path::new("/")),
            Err(DomainError::InvalidProjectRoot { .. })
        ));
    }
}
