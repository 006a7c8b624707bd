#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;

use arctl::cli::{Cli, Commands};
use arctl::{commands, logging};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match &cli.command {
        Commands::Agent { command } => {
            commands::agent::execute(command)?;
        }
        Commands::Config { command } => {
            commands::config::execute(command)?;
        }
    }

    Ok(())
}
