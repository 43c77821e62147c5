//! Command handlers, one module per subcommand.
//!
//! Handlers translate parsed arguments into calls on the core services and
//! render the results. The adapters are wired here, once per invocation.

use std::path::{Path, PathBuf};

use shiroha_adapters::{
    GoToolchainProbe, InMemoryStore, LocalFilesystem, SimpleRenderer, SystemCommandRunner,
};
use shiroha_core::{
    application::{BuildService, ScaffoldService, ToolingService},
    domain::PlatformCatalog,
};

use crate::{
    config::AppConfig,
    error::{CliResult, IntoCli},
};

pub mod build;
pub mod completions;
pub mod config;
pub mod doc;
pub mod init;
pub mod list;
pub mod new;
pub mod run;

pub(crate) fn scaffold_service(config: &AppConfig) -> CliResult<ScaffoldService> {
    let probe = GoToolchainProbe::new(
        Box::new(SystemCommandRunner::new()),
        config.toolchain_commands(),
    );
    Ok(ScaffoldService::new(
        Box::new(InMemoryStore::with_builtin()?),
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(probe),
    ))
}

pub(crate) fn tooling_service(config: &AppConfig) -> ToolingService {
    ToolingService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(SystemCommandRunner::new()),
        config.toolchain_commands(),
    )
}

pub(crate) fn build_service(config: &AppConfig) -> BuildService {
    BuildService::new(
        PlatformCatalog::builtin(),
        Box::new(LocalFilesystem::new()),
        Box::new(SystemCommandRunner::new()),
        config.toolchain_commands(),
    )
}

/// `--dir` or the working directory, made absolute.
///
/// The project name is derived from the last path component, so `.` has to
/// be resolved first.
pub(crate) fn project_dir(dir: Option<&Path>) -> CliResult<PathBuf> {
    match dir {
        Some(dir) => std::path::absolute(dir)
            .with_cli_context(|| format!("resolving '{}'", dir.display())),
        None => std::env::current_dir().with_cli_context(|| "reading the working directory"),
    }
}
