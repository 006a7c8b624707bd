use crate::error::{ArctlError, Result};
use crate::image::RegistryConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of both the global (`~/.arctl.toml`) and project config files
pub const CONFIG_FILE: &str = ".arctl.toml";

/// Environment variable overriding the configured registry
pub const REGISTRY_ENV: &str = "ARCTL_DOCKER_REGISTRY";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub docker: DockerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DockerConfig {
    /// Registry host/path prefix for computed image names
    #[serde(default)]
    pub registry: String,
}

impl Config {
    /// Load configuration with precedence:
    /// 1. CLI flags (applied later via with_cli_overrides)
    /// 2. Environment variables
    /// 3. Project config (.arctl.toml in project root)
    /// 4. Global config (~/.arctl.toml)
    /// 5. Built-in defaults
    pub fn load(project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        // 1. Load global config
        if let Some(home) = home_dir() {
            let global_config = home.join(CONFIG_FILE);
            if global_config.exists() {
                tracing::debug!("Loading global config {}", global_config.display());
                config = config.merge(Self::from_file(&global_config)?);
            }
        }

        // 2. Load project config
        let project_config = project_root.join(CONFIG_FILE);
        if project_config.exists() {
            tracing::debug!("Loading project config {}", project_config.display());
            config = config.merge(Self::from_file(&project_config)?);
        }

        // 3. Apply environment variables
        config = config.merge_env();

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(mut self, other: Self) -> Self {
        if !other.docker.registry.is_empty() {
            self.docker.registry = other.docker.registry;
        }

        self
    }

    /// Apply environment variable overrides
    fn merge_env(mut self) -> Self {
        if let Ok(registry) = std::env::var(REGISTRY_ENV) {
            if !registry.is_empty() {
                self.docker.registry = registry;
            }
        }

        self
    }

    /// Apply CLI overrides (highest precedence)
    pub fn with_cli_overrides(mut self, registry: Option<&str>) -> Self {
        if let Some(registry) = registry {
            self.docker.registry = registry.to_string();
        }

        self
    }

    /// Registry configuration to thread into image name resolution
    pub fn registry(&self) -> RegistryConfig {
        RegistryConfig::new(self.docker.registry.as_str())
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            ArctlError::InvalidConfig(format!("Failed to serialize configuration: {}", e))
        })
    }
}

/// Get the home directory
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}
