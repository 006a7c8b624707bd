use crate::cli::ConfigCommands;
use crate::config::{Config, CONFIG_FILE};
use crate::error::Result;
use std::path::Path;

pub fn execute(command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Validate { file } => validate(file),
        ConfigCommands::Show { project_dir } => show(project_dir),
    }
}

fn validate(file: &Path) -> Result<()> {
    println!("Validating {}...", file.display());

    match Config::from_file(file) {
        Ok(config) => {
            println!("✓ Configuration is valid!");
            if !config.docker.registry.is_empty() {
                println!("  registry: {}", config.docker.registry);
            }
            Ok(())
        }
        Err(e) => {
            println!("✗ Configuration is invalid!");
            Err(e)
        }
    }
}

fn show(project_dir: &Path) -> Result<()> {
    crate::project::validate_project_dir(project_dir)?;
    let config = Config::load(project_dir)?;

    println!("Effective Configuration:");
    println!(
        "(CLI > Environment > Project {} > Global ~/{} > Defaults)\n",
        CONFIG_FILE, CONFIG_FILE
    );
    print!("{}", config.to_toml()?);
    println!(
        "\nComputed images use registry: {}",
        config.registry().normalized()
    );

    Ok(())
}
