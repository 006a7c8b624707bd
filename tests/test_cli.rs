use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

const WEATHER_MANIFEST: &str = r#"
name = "weather-agent"
model_provider = "openai"

[[mcp_servers]]
type = "command"
name = "weather"
build = "mcp/weather"

[[mcp_servers]]
type = "registry"
name = "filesystem"
"#;

/// Command with an isolated HOME and no inherited registry or provider keys
fn arctl(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("arctl"));
    cmd.env("HOME", home)
        .env_remove("ARCTL_DOCKER_REGISTRY")
        .env_remove("RUST_LOG")
        .env_remove("OPENAI_API_KEY")
        .env_remove("ANTHROPIC_API_KEY")
        .env_remove("GOOGLE_API_KEY")
        .env_remove("AZUREOPENAI_API_KEY");
    cmd
}

fn agent_project(manifest: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("agent.toml"), manifest).unwrap();
    dir
}

#[test]
fn test_help_output() {
    let home = tempfile::tempdir().unwrap();
    arctl(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("agent"));
}

#[test]
fn test_version_output() {
    let home = tempfile::tempdir().unwrap();
    arctl(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("arctl "));
}

#[test]
fn test_build_missing_project_dir() {
    let home = tempfile::tempdir().unwrap();
    let missing = home.path().join("nonexistent");

    arctl(home.path())
        .args(["agent", "build"])
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_build_project_dir_is_file() {
    let home = tempfile::tempdir().unwrap();
    let file = home.path().join("agent.toml");
    std::fs::write(&file, "name = \"x\"").unwrap();

    arctl(home.path())
        .args(["agent", "build"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn test_build_missing_manifest() {
    let home = tempfile::tempdir().unwrap();
    let project = tempfile::tempdir().unwrap();

    arctl(home.path())
        .args(["agent", "build"])
        .arg(project.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Agent manifest not found"));
}

#[test]
fn test_build_default_images() {
    let home = tempfile::tempdir().unwrap();
    let project = agent_project(WEATHER_MANIFEST);

    arctl(home.path())
        .args(["agent", "build"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Image: localhost:5001/weather-agent:latest",
        ))
        .stdout(predicate::str::contains(
            "weather: localhost:5001/weather-agent-weather:latest",
        ))
        .stdout(predicate::str::contains("Registry resolution: required"));
}

#[test]
fn test_build_image_flag_wins() {
    let home = tempfile::tempdir().unwrap();
    let project = agent_project(
        "name = \"myagent\"\nimage = \"docker.io/user/agent@sha256:abc123\"\n",
    );

    arctl(home.path())
        .args(["agent", "build"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Image: docker.io/user/agent@sha256:abc123",
        ));

    arctl(home.path())
        .args(["agent", "build", "--image", "ghcr.io/myorg/myagent:v1.0"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Image: ghcr.io/myorg/myagent:v1.0"));
}

#[test]
fn test_build_registry_sources() {
    let home = tempfile::tempdir().unwrap();
    let project = agent_project("name = \"myagent\"\n");
    std::fs::write(
        project.path().join(".arctl.toml"),
        "[docker]\nregistry = \"gcr.io/myproject/\"\n",
    )
    .unwrap();

    arctl(home.path())
        .args(["agent", "build"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Image: gcr.io/myproject/myagent:latest",
        ));

    arctl(home.path())
        .env("ARCTL_DOCKER_REGISTRY", "ghcr.io/env")
        .args(["agent", "build"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Image: ghcr.io/env/myagent:latest"));

    arctl(home.path())
        .env("ARCTL_DOCKER_REGISTRY", "ghcr.io/env")
        .args(["agent", "build", "--registry", "ghcr.io/flag"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Image: ghcr.io/flag/myagent:latest"));
}

#[test]
fn test_build_json_output() {
    let home = tempfile::tempdir().unwrap();
    let project = agent_project(WEATHER_MANIFEST);

    let output = arctl(home.path())
        .args(["agent", "build", "--json"])
        .arg(project.path())
        .assert()
        .success();

    let plan: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(plan["agent"], "weather-agent");
    assert_eq!(plan["image"], "localhost:5001/weather-agent:latest");
    assert_eq!(plan["needs_registry_resolution"], true);
    assert_eq!(plan["mcp_server_images"][0]["server"], "weather");
    assert_eq!(
        plan["mcp_server_images"][0]["image"],
        "localhost:5001/weather-agent-weather:latest"
    );
}

#[test]
fn test_run_requires_provider_key() {
    let home = tempfile::tempdir().unwrap();
    let project = agent_project(WEATHER_MANIFEST);

    arctl(home.path())
        .args(["agent", "run"])
        .arg(project.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}

#[test]
fn test_run_with_provider_key() {
    let home = tempfile::tempdir().unwrap();
    let project = agent_project(WEATHER_MANIFEST);

    arctl(home.path())
        .env("OPENAI_API_KEY", "sk-test-secret")
        .args(["agent", "run"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Model provider: openai (OPENAI_API_KEY)"))
        .stdout(predicate::str::contains("Registry MCP servers: filesystem"))
        .stdout(predicate::str::contains("sk-test-secret").not());
}

#[test]
fn test_run_unknown_provider_passes() {
    let home = tempfile::tempdir().unwrap();
    let project = agent_project("name = \"myagent\"\nmodel_provider = \"ollama\"\n");

    arctl(home.path())
        .args(["agent", "run"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Model provider: ollama"));
}

#[test]
fn test_config_show() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(
        home.path().join(".arctl.toml"),
        "[docker]\nregistry = \"ghcr.io/global/\"\n",
    )
    .unwrap();
    let project = tempfile::tempdir().unwrap();

    arctl(home.path())
        .args(["config", "show"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("registry = \"ghcr.io/global/\""))
        .stdout(predicate::str::contains(
            "Computed images use registry: ghcr.io/global",
        ));
}

#[test]
fn test_config_validate_invalid() {
    let home = tempfile::tempdir().unwrap();
    let file = home.path().join("broken.toml");
    std::fs::write(&file, "[docker\nregistry = ").unwrap();

    arctl(home.path())
        .args(["config", "validate"])
        .arg(&file)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"));
}
