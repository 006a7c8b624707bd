//! Agent manifest data structures and the `agent.toml` loader.
//!
//! # Example
//!
//! ```toml
//! name = "weather-agent"
//! model_provider = "openai"
//! model_name = "gpt-4o"
//!
//! [[mcp_servers]]
//! type = "command"
//! name = "weather"
//! build = "mcp/weather"
//!
//! [[mcp_servers]]
//! type = "registry"
//! name = "filesystem"
//! registry_server_name = "io.example/filesystem"
//! ```

use crate::error::{ArctlError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// File name of the agent manifest inside a project directory
pub const MANIFEST_FILE: &str = "agent.toml";

/// Type tag of MCP servers resolved against a remote registry
pub const REGISTRY_SERVER_TYPE: &str = "registry";

/// An agent manifest loaded from `agent.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentManifest {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Explicit image reference for the agent (optional)
    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub language: String,

    #[serde(default)]
    pub framework: String,

    #[serde(default)]
    pub model_provider: String,

    #[serde(default)]
    pub model_name: String,

    /// Declared MCP server dependencies, in declaration order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mcp_servers: Option<Vec<McpServerType>>,
}

/// One declared MCP server dependency.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct McpServerType {
    #[serde(rename = "type")]
    pub server_type: String,

    pub name: String,

    /// Prebuilt image for a command server (overrides the computed sidecar name)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,

    /// Build context, relative to the project root, for a command server
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub build: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub command: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,

    /// Endpoint of a remote server
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub registry_url: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub registry_server_name: String,
}

/// How an MCP server is provided to the agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum McpServerKind {
    /// Built and run locally as a sidecar container
    Command,
    /// Reached over the network
    Remote,
    /// Resolved against a remote MCP registry
    Registry,
    /// Any tag this version does not know about
    Other(String),
}

impl McpServerType {
    pub fn new(server_type: &str, name: &str) -> Self {
        Self {
            server_type: server_type.to_string(),
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Typed view of the type tag. Tags are matched exactly.
    pub fn kind(&self) -> McpServerKind {
        match self.server_type.as_str() {
            "command" => McpServerKind::Command,
            "remote" => McpServerKind::Remote,
            REGISTRY_SERVER_TYPE => McpServerKind::Registry,
            other => McpServerKind::Other(other.to_string()),
        }
    }
}

impl AgentManifest {
    /// Declared MCP servers, empty when none are declared
    pub fn servers(&self) -> &[McpServerType] {
        self.mcp_servers.as_deref().unwrap_or_default()
    }
}

/// Whether any declared MCP server must be resolved against a remote registry
pub fn has_registry_servers(manifest: &AgentManifest) -> bool {
    manifest
        .servers()
        .iter()
        .any(|server| server.server_type == REGISTRY_SERVER_TYPE)
}

/// Load the agent manifest from a project directory
pub fn load_manifest(project_dir: &Path) -> Result<AgentManifest> {
    let path = project_dir.join(MANIFEST_FILE);
    if !path.is_file() {
        return Err(ArctlError::ManifestNotFound(path));
    }

    let contents = std::fs::read_to_string(&path)?;
    let manifest = parse_manifest(&contents)?;
    tracing::debug!(
        "Loaded manifest for agent '{}' from {}",
        manifest.name,
        path.display()
    );

    Ok(manifest)
}

/// Parse manifest TOML and check the agent has a name
pub fn parse_manifest(contents: &str) -> Result<AgentManifest> {
    let manifest: AgentManifest = toml::from_str(contents)?;

    if manifest.name.is_empty() {
        return Err(ArctlError::InvalidManifest(
            "agent name cannot be empty".to_string(),
        ));
    }

    Ok(manifest)
}
