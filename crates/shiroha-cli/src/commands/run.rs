//! `shiroha run` - start the generated server in the foreground.

use tracing::instrument;

use shiroha_core::domain::ENTRYPOINT;

use crate::{
    cli::ProjectDirArgs,
    commands::{project_dir, tooling_service},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: ProjectDirArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let dir = project_dir(args.dir.as_deref())?;

    output.info(&format!("Starting project server (go run {ENTRYPOINT})..."))?;
    tooling_service(&config).run_server(&dir)?;
    Ok(())
}
