//! Tooling Service - the `go` / `swag` steps run against an existing project.
//!
//! All commands here run in the foreground with the user's terminal attached,
//! so there is no captured output to report on failure.

use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, Filesystem},
    },
    domain::{CommandSpec, DOCS_DIR, ENTRYPOINT, ToolchainCommands, normalize_project_root},
    error::ShirohaResult,
};

pub struct ToolingService {
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
    commands: ToolchainCommands,
}

impl ToolingService {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn CommandRunner>,
        commands: ToolchainCommands,
    ) -> Self {
        Self {
            filesystem,
            runner,
            commands,
        }
    }

    /// `go mod tidy` in the project directory.
    #[instrument(skip_all, fields(root = %project_root.display()))]
    pub fn sync_dependencies(&self, project_root: &Path) -> ShirohaResult<()> {
        let spec = self.commands.mod_tidy(project_root);
        self.run_foreground(&spec)
    }

    /// `swag init -g cmd/server.go -o docs`.
    ///
    /// Accepts the project root or its `cmd` folder. Returns the docs folder.
    #[instrument(skip_all, fields(dir = %dir.display()))]
    pub fn generate_docs(&self, dir: &Path) -> ShirohaResult<PathBuf> {
        let root = normalize_project_root(dir);
        let spec = self.commands.swag_init(&root);
        self.run_foreground(&spec)?;
        Ok(root.join(DOCS_DIR))
    }

    /// `go run cmd/server.go`, blocking until the server exits.
    ///
    /// The entrypoint is checked first so a wrong directory fails without
    /// spawning anything.
    #[instrument(skip_all, fields(dir = %dir.display()))]
    pub fn run_server(&self, dir: &Path) -> ShirohaResult<()> {
        let root = normalize_project_root(dir);
        let entrypoint = root.join(ENTRYPOINT);
        if !self.filesystem.exists(&entrypoint) {
            return Err(ApplicationError::EntrypointMissing { path: entrypoint }.into());
        }

        let spec = self.commands.run(&root);
        self.run_foreground(&spec)
    }

    fn run_foreground(&self, spec: &CommandSpec) -> ShirohaResult<()> {
        info!(command = %spec, "Running");
        let output = self.runner.run_inherited(spec)?;
        if output.is_success() {
            return Ok(());
        }

        Err(ApplicationError::CommandFailed {
            command: spec.to_string(),
            status: output.status_text(),
            output: output.output,
        }
        .into())
    }
}
