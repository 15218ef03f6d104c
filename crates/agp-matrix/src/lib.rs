//! # agp-matrix
//!
//! Command-line front end for the AGP multi-version test matrix generator.
//!
//! The tool is a one-shot, synchronous pipeline: it loads the declarative
//! version registry from `versions.toml`, and depending on the subcommand
//! writes the `versions.json` test resource, lists the materialized
//! verification tasks, or prints the GitHub Actions build-matrix line.

pub mod cli;
pub mod commands;
