//! Container image reference resolution for agents and their MCP server sidecars.
//!
//! Image references follow `[registry/]repository[:tag|@digest]`. Explicit
//! references (from a flag or the manifest) are passed through untouched;
//! only computed defaults are built from the configured registry.

/// Registry used when none is configured
pub const DEFAULT_REGISTRY: &str = "localhost:5001";

/// Name substituted for an empty agent name in sidecar images
const DEFAULT_AGENT_NAME: &str = "agent";

const DEFAULT_TAG: &str = "latest";

/// The configured container registry host/path prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    prefix: String,
}

impl RegistryConfig {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The raw configured value, before normalization
    pub fn raw(&self) -> &str {
        &self.prefix
    }

    /// Registry prefix ready to be joined with a repository name.
    ///
    /// Empty falls back to [`DEFAULT_REGISTRY`]; otherwise exactly one
    /// trailing `/` is removed.
    pub fn normalized(&self) -> &str {
        if self.prefix.is_empty() {
            return DEFAULT_REGISTRY;
        }
        self.prefix.strip_suffix('/').unwrap_or(self.prefix.as_str())
    }
}

/// Resolve the image reference for an agent.
///
/// Precedence: `flag_image`, then `manifest_image`, then
/// `{registry}/{agent_name}:latest`.
pub fn construct_image_name(
    registry: &RegistryConfig,
    flag_image: &str,
    manifest_image: &str,
    agent_name: &str,
) -> String {
    if !flag_image.is_empty() {
        tracing::debug!("Using image from flag: {}", flag_image);
        return flag_image.to_string();
    }
    if !manifest_image.is_empty() {
        tracing::debug!("Using image from manifest: {}", manifest_image);
        return manifest_image.to_string();
    }

    format!("{}/{}:{}", registry.normalized(), agent_name, DEFAULT_TAG)
}

/// Resolve the image reference for an MCP server sidecar of an agent.
pub fn construct_mcp_server_image_name(
    registry: &RegistryConfig,
    agent_name: &str,
    server_name: &str,
) -> String {
    let agent_name = if agent_name.is_empty() {
        DEFAULT_AGENT_NAME
    } else {
        agent_name
    };

    format!(
        "{}/{}-{}:{}",
        registry.normalized(),
        agent_name,
        server_name,
        DEFAULT_TAG
    )
}
