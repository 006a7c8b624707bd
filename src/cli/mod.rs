use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod flags;
pub use flags::ResolveFlags;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Validate a configuration file
    Validate {
        /// Path to the config file to validate
        file: PathBuf,
    },

    /// Show effective configuration after merging all sources
    Show {
        /// Project directory whose .arctl.toml is merged
        #[arg(default_value = ".")]
        project_dir: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum AgentCommands {
    /// Resolve the images needed to build an agent
    Build(ResolveFlags),

    /// Check credentials and resolve the images needed to run an agent
    Run(ResolveFlags),
}

#[derive(Parser, Debug)]
#[command(name = "arctl")]
#[command(about = "Build and run agents with their MCP servers as container images", long_about = None)]
#[command(version = crate::version::VERSION)]
#[command(after_help = "\
EXAMPLES:
  arctl agent build                       Resolve images for the agent in .
  arctl agent build ./my-agent --image ghcr.io/me/agent:v1
  arctl agent run ./my-agent --json       Check credentials, print the run plan
  arctl config show                       Show the effective configuration")]
pub struct Cli {
    /// Show debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Agent build and run commands
    Agent {
        #[command(subcommand)]
        command: AgentCommands,
    },

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}
