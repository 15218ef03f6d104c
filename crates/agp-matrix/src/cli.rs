//! CLI argument definitions and exit-code mapping.

use agp_matrix_codegen::DEFAULT_OUTPUT_DIR;
use agp_matrix_core::Error;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Successful exit.
pub const EXIT_OK: i32 = 0;
/// Configuration error exit code (duplicates, missing version, bad config).
pub const EXIT_CONFIG: i32 = 2;
/// I/O or internal error exit code.
pub const EXIT_IO: i32 = 3;

/// Generate the AGP multi-version test matrix artifacts.
#[derive(Debug, Parser)]
#[command(name = "agp-matrix", version, about, long_about = None)]
pub struct Cli {
    /// Path to the version matrix configuration file.
    #[arg(
        long,
        global = true,
        default_value = "versions.toml",
        env = "AGP_MATRIX_CONFIG"
    )]
    pub config: PathBuf,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write the versions.json resource consumed by the test runtime.
    Generate {
        /// Version of the plugin under test; overrides the config file.
        #[arg(long, env = "AGP_MATRIX_BUILD_VERSION")]
        build_version: Option<String>,

        /// Directory the resource is written into.
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,
    },

    /// List the materialized version-specific verification tasks.
    Tasks,

    /// Print the GitHub Actions build-matrix line.
    Matrix,
}

/// Parse command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Map an error to the process exit code.
#[must_use]
pub fn exit_code_for(error: &Error) -> i32 {
    match error {
        Error::Io { .. } | Error::Json(_) => EXIT_IO,
        _ => EXIT_CONFIG,
    }
}
