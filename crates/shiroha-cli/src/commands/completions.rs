//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::{Generator, generate, shells};

use crate::cli::{Cli, CompletionsArgs, Shell};

const BIN_NAME: &str = "shiroha";

pub fn execute(args: CompletionsArgs) -> crate::error::CliResult<()> {
    let mut out = std::io::stdout();
    match args.shell {
        Shell::Bash => write_to(shells::Bash, &mut out),
        Shell::Zsh => write_to(shells::Zsh, &mut out),
        Shell::Fish => write_to(shells::Fish, &mut out),
        Shell::PowerShell => write_to(shells::PowerShell, &mut out),
        Shell::Elvish => write_to(shells::Elvish, &mut out),
    }
    Ok(())
}

fn write_to(shell: impl Generator, out: &mut dyn std::io::Write) {
    generate(shell, &mut Cli::command(), BIN_NAME, out);
}
