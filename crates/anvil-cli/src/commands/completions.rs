//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{BIN_NAME, Cli, CompletionsArgs};

pub fn execute(args: CompletionsArgs) -> crate::error::CliResult<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, BIN_NAME, &mut std::io::stdout());
    Ok(())
}
