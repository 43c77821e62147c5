//! `shiroha doc` - generate Swagger documentation with `swag init`.

use tracing::instrument;

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

    output.info("Generating Swagger documentation...")?;
    let docs = tooling_service(&config).generate_docs(&dir)?;
    output.success(&format!(
        "Swagger documentation generated in {}",
        docs.display()
    ))?;
    Ok(())
}
