use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArctlError {
    #[error("project directory does not exist: {}", .0.display())]
    NotExist(PathBuf),

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("{0} environment variable is not set")]
    MissingCredential(&'static str),

    #[error("Agent manifest not found: {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("Invalid agent manifest: {0}")]
    InvalidManifest(String),

    #[error("Failed to parse TOML: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ArctlError>;
