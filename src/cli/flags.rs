use clap::Parser;
use std::path::PathBuf;

/// Flags shared by the agent build and run commands.
#[derive(Parser, Debug, Clone, Default)]
pub struct ResolveFlags {
    /// Agent project directory (contains agent.toml)
    #[arg(default_value = ".")]
    pub project_dir: PathBuf,

    /// Full image reference for the agent, overriding the manifest
    #[arg(long)]
    pub image: Option<String>,

    /// Registry prefix for computed image names (e.g. ghcr.io/myorg)
    #[arg(long)]
    pub registry: Option<String>,

    /// Print the resolved plan as JSON
    #[arg(long)]
    pub json: bool,
}
