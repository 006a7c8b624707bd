//! Build and run plans: the resolved preconditions handed to the container executor.

use crate::config::Config;
use crate::credentials::{required_env_var, validate_api_key};
use crate::error::Result;
use crate::image::{construct_image_name, construct_mcp_server_image_name, RegistryConfig};
use crate::manifest::{has_registry_servers, load_manifest, AgentManifest, McpServerKind};
use crate::project::Project;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Image for an MCP server that runs as a sidecar container.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SidecarImage {
    pub server: String,
    pub image: String,

    /// Build context when the server is built from source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_context: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildPlan {
    pub agent: String,
    pub project_dir: PathBuf,
    pub image: String,
    pub mcp_server_images: Vec<SidecarImage>,
    pub needs_registry_resolution: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunPlan {
    #[serde(flatten)]
    pub build: BuildPlan,
    pub model_provider: String,

    /// Credential variable forwarded into the agent container
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_env: Option<&'static str>,
    pub remote_servers: Vec<String>,
    pub registry_servers: Vec<String>,
}

impl BuildPlan {
    /// Load the project's manifest and resolve every image the build needs
    pub fn resolve(project: &Project, config: &Config, flag_image: Option<&str>) -> Result<Self> {
        let manifest = load_manifest(project.root())?;
        Ok(Self::from_manifest(
            project,
            &manifest,
            &config.registry(),
            flag_image.unwrap_or_default(),
        ))
    }

    fn from_manifest(
        project: &Project,
        manifest: &AgentManifest,
        registry: &RegistryConfig,
        flag_image: &str,
    ) -> Self {
        let image = construct_image_name(registry, flag_image, &manifest.image, &manifest.name);

        let mcp_server_images = manifest
            .servers()
            .iter()
            .filter(|server| server.kind() == McpServerKind::Command)
            .map(|server| {
                let image = if server.image.is_empty() {
                    construct_mcp_server_image_name(registry, &manifest.name, &server.name)
                } else {
                    server.image.clone()
                };
                let build_context = (!server.build.is_empty())
                    .then(|| project.root().join(&server.build));

                SidecarImage {
                    server: server.name.clone(),
                    image,
                    build_context,
                }
            })
            .collect();

        let needs_registry_resolution = has_registry_servers(manifest);
        if needs_registry_resolution {
            tracing::info!(
                "Agent '{}' declares registry MCP servers; they will be resolved before start",
                manifest.name
            );
        }

        Self {
            agent: manifest.name.clone(),
            project_dir: project.root().to_path_buf(),
            image,
            mcp_server_images,
            needs_registry_resolution,
        }
    }
}

impl RunPlan {
    /// Validate provider credentials, then resolve images
    pub fn resolve(project: &Project, config: &Config, flag_image: Option<&str>) -> Result<Self> {
        let manifest = load_manifest(project.root())?;

        validate_api_key(&manifest.model_provider)?;

        let build = BuildPlan::from_manifest(
            project,
            &manifest,
            &config.registry(),
            flag_image.unwrap_or_default(),
        );

        let names_of = |kind: McpServerKind| -> Vec<String> {
            manifest
                .servers()
                .iter()
                .filter(|server| server.kind() == kind)
                .map(|server| server.name.clone())
                .collect()
        };

        Ok(Self {
            build,
            model_provider: manifest.model_provider.clone(),
            credential_env: required_env_var(&manifest.model_provider),
            remote_servers: names_of(McpServerKind::Remote),
            registry_servers: names_of(McpServerKind::Registry),
        })
    }
}

impl fmt::Display for BuildPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Agent: {}", self.agent)?;
        writeln!(f, "  Project: {}", self.project_dir.display())?;
        writeln!(f, "  Image: {}", self.image)?;

        if !self.mcp_server_images.is_empty() {
            writeln!(f, "\nMCP server images:")?;
            for sidecar in &self.mcp_server_images {
                match &sidecar.build_context {
                    Some(context) => writeln!(
                        f,
                        "  - {}: {} (build {})",
                        sidecar.server,
                        sidecar.image,
                        context.display()
                    )?,
                    None => writeln!(f, "  - {}: {}", sidecar.server, sidecar.image)?,
                }
            }
        }

        let registry = if self.needs_registry_resolution {
            "required"
        } else {
            "not required"
        };
        writeln!(f, "\nRegistry resolution: {}", registry)
    }
}

impl fmt::Display for RunPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.build)?;

        if !self.model_provider.is_empty() {
            match self.credential_env {
                Some(var) => writeln!(f, "Model provider: {} ({})", self.model_provider, var)?,
                None => writeln!(f, "Model provider: {}", self.model_provider)?,
            }
        }
        if !self.remote_servers.is_empty() {
            writeln!(f, "Remote MCP servers: {}", self.remote_servers.join(", "))?;
        }
        if !self.registry_servers.is_empty() {
            writeln!(f, "Registry MCP servers: {}", self.registry_servers.join(", "))?;
        }

        Ok(())
    }
}
