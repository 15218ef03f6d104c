//! Subcommand implementations.
//!
//! Each handler is a thin composition of the core, codegen and github crates
//! and returns its printable output, keeping stdout writes in one place.

#![allow(clippy::print_stdout)]

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use agp_matrix_codegen::VersionsResource;
use agp_matrix_core::tasks::VerificationPlan;
use agp_matrix_core::{Error, MatrixConfig, Result, materialize};
use agp_matrix_github::{matrix_line, matrix_task_names};

use crate::cli::{Cli, Commands};

/// Execute the parsed command line.
///
/// # Errors
///
/// Propagates any configuration or I/O error from the pipeline.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate {
            build_version,
            output_dir,
        } => {
            generate(&cli.config, build_version.as_deref(), &output_dir)?;
        }
        Commands::Tasks => {
            let plan = verification_plan(&cli.config)?;
            print!("{}", render_tasks(&plan));
        }
        Commands::Matrix => {
            println!("{}", matrix_output(&cli.config)?);
        }
    }
    Ok(())
}

/// Load the configuration and write the versions resource.
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Fails on configuration errors (duplicate versions, missing build version,
/// unregistered latest-known guard) before anything is written, and on I/O
/// errors from the write itself.
pub fn generate(
    config_path: &Path,
    build_version: Option<&str>,
    output_dir: &Path,
) -> Result<PathBuf> {
    let config = MatrixConfig::load(config_path)?;
    let version = config.resolve_build_version(build_version)?;
    let registry = config.into_registry()?;
    tracing::debug!(version = %version, versions = registry.len(), "Generating versions resource");

    let resource = VersionsResource::new(version, &registry);
    resource.write(output_dir)
}

/// Load the configuration and materialize the verification plan.
///
/// # Errors
///
/// Fails on configuration errors, including post-normalization task name
/// collisions.
pub fn verification_plan(config_path: &Path) -> Result<VerificationPlan> {
    let registry = MatrixConfig::load(config_path)?.into_registry()?;
    materialize(&registry)
}

/// Render the verification plan for human inspection.
#[must_use]
pub fn render_tasks(plan: &VerificationPlan) -> String {
    let mut out = String::new();
    for task in &plan.tasks {
        let _ = writeln!(out, "{} ({})", task.name, task.group);
        let _ = writeln!(out, "  {}", task.description);
        for (key, value) in &task.system_properties {
            let _ = writeln!(out, "  {key}={value}");
        }
    }
    let _ = writeln!(
        out,
        "{} depends on: {}",
        plan.check.name,
        plan.check.depends_on.join(", ")
    );
    out
}

/// Load the configuration and produce the GitHub Actions matrix line.
///
/// # Errors
///
/// Fails on configuration errors; an emitter failure is reported as a
/// configuration error carrying the emitter's message.
pub fn matrix_output(config_path: &Path) -> Result<String> {
    let plan = verification_plan(config_path)?;
    let names = matrix_task_names(&plan);
    matrix_line(&names)
        .map_err(|e| Error::config(format!("GitHub Actions matrix emission failed: {e}")))
}
