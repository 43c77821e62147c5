//! Build Service - cross-compiles a generated project.
//!
//! `build(selector, dir)`:
//! 1. Look the selector up in the platform catalog (no subprocess on failure)
//! 2. Normalize the project root (`<project>/cmd` -> `<project>`)
//! 3. Derive `<root>/bin/<name>[.exe]` and make sure `bin` exists
//! 4. Run `go build` with `GOOS`/`GOARCH` layered over the inherited env

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, Filesystem},
    },
    domain::{BuildJob, PlatformCatalog, ToolchainCommands},
    error::ShirohaResult,
};

pub struct BuildService {
    catalog: PlatformCatalog,
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
    commands: ToolchainCommands,
}

impl BuildService {
    pub fn new(
        catalog: PlatformCatalog,
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn CommandRunner>,
        commands: ToolchainCommands,
    ) -> Self {
        Self {
            catalog,
            filesystem,
            runner,
            commands,
        }
    }

    pub fn catalog(&self) -> &PlatformCatalog {
        &self.catalog
    }

    /// Resolve a menu selection and directory into a build job.
    pub fn plan(&self, selector: &str, invoked_from: &Path) -> ShirohaResult<BuildJob> {
        let platform = *self.catalog.lookup(selector)?;
        let job = BuildJob::derive(platform, invoked_from)?;
        debug!(
            root = %job.project_root.display(),
            output = %job.output_path.display(),
            platform = %job.platform,
            "Planned build"
        );
        Ok(job)
    }

    /// Plan and execute in one step.
    pub fn build(&self, selector: &str, invoked_from: &Path) -> ShirohaResult<PathBuf> {
        let job = self.plan(selector, invoked_from)?;
        self.execute(&job)
    }

    /// Run the compiler for an already planned job.
    ///
    /// Returns the path of the produced binary. A non-zero exit becomes
    /// [`ApplicationError::CommandFailed`] carrying the compiler output.
    #[instrument(skip_all, fields(platform = %job.platform, output = %job.output_path.display()))]
    pub fn execute(&self, job: &BuildJob) -> ShirohaResult<PathBuf> {
        self.filesystem.create_dir_all(&job.bin_dir())?;

        let spec = self.commands.build(job);
        info!(command = %spec, "Building {}", job.platform.description);
        let output = self.runner.run_captured(&spec)?;

        if !output.is_success() {
            return Err(ApplicationError::CommandFailed {
                command: "build".into(),
                status: output.status_text(),
                output: output.output,
            }
            .into());
        }

        info!("Build finished");
        Ok(job.output_path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::{MockCommandRunner, MockFilesystem};
    use crate::domain::{CommandOutput, DomainError};
    use crate::error::ShirohaError;
    use mockall::predicate::*;

    fn service(fs: MockFilesystem, runner: MockCommandRunner) -> BuildService {
        BuildService::new(
            PlatformCatalog::builtin(),
            Box::new(fs),
            Box::new(runner),
            ToolchainCommands::default(),
        )
    }

    #[test]
    fn unknown_selector_starts_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        let mut runner = MockCommandRunner::new();
        runner.expect_run_captured().never();

        let err = service(fs, runner)
            .build("9", Path::new("/work/demo"))
            .unwrap_err();

        assert_eq!(
            err,
            ShirohaError::Domain(DomainError::InvalidPlatformChoice {
                choice: "9".into(),
                max: 5
            })
        );
        assert!(err.to_string().contains("1-5"));
    }

    #[test]
    fn windows_build_from_cmd_folder() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all()
            .with(eq(Path::new("/work/demo/bin")))
            .times(1)
            .returning(|_| Ok(()));

        let mut runner = MockCommandRunner::new();
        runner
            .expect_run_captured()
            .withf(|spec| {
                spec.env_value("GOOS") == Some("windows")
                    && spec.env_value("GOARCH") == Some("amd64")
                    && spec.cwd.as_deref() == Some(Path::new("/work/demo"))
            })
            .times(1)
            .returning(|_| Ok(CommandOutput::success()));

        let out = service(fs, runner)
            .build(" 5 ", Path::new("/work/demo/cmd"))
            .unwrap();
        assert_eq!(out, Path::new("/work/demo/bin/demo.exe"));
    }

    #[test]
    fn compiler_failure_carries_output() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run_captured()
            .returning(|_| Ok(CommandOutput::failure(1, "undefined: gin")));

        let err = service(fs, runner)
            .build("1", Path::new("/work/demo"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "build failed: exit status 1\nOutput: undefined: gin"
        );
    }

    #[test]
    fn launch_failure_propagates() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        let mut runner = MockCommandRunner::new();
        runner.expect_run_captured().returning(|spec| {
            Err(ApplicationError::CommandLaunch {
                command: spec.to_string(),
                reason: "not found".into(),
            }
            .into())
        });

        let err = service(fs, runner)
            .build("2", Path::new("/work/demo"))
            .unwrap_err();
        assert!(err.is_subprocess());
    }
}
