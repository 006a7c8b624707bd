use crate::cli::{AgentCommands, ResolveFlags};
use crate::config::Config;
use crate::error::Result;
use crate::plan::{BuildPlan, RunPlan};
use crate::project::Project;
use serde::Serialize;
use std::fmt::Display;

pub fn execute(command: &AgentCommands) -> Result<()> {
    match command {
        AgentCommands::Build(flags) => build(flags),
        AgentCommands::Run(flags) => run(flags),
    }
}

fn build(flags: &ResolveFlags) -> Result<()> {
    let (project, config) = open_project(flags)?;
    let plan = BuildPlan::resolve(&project, &config, flags.image.as_deref())?;
    print_plan(&plan, flags.json)
}

fn run(flags: &ResolveFlags) -> Result<()> {
    let (project, config) = open_project(flags)?;
    let plan = RunPlan::resolve(&project, &config, flags.image.as_deref())?;
    print_plan(&plan, flags.json)
}

/// Open the project directory and load its config with CLI overrides applied
fn open_project(flags: &ResolveFlags) -> Result<(Project, Config)> {
    let project = Project::open(&flags.project_dir)?;
    let config = Config::load(project.root())?.with_cli_overrides(flags.registry.as_deref());
    Ok((project, config))
}

fn print_plan<P: Serialize + Display>(plan: &P, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(plan)?);
    } else {
        print!("{}", plan);
    }
    Ok(())
}
