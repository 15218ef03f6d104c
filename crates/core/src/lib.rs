//! # agp-matrix-core
//!
//! Core types for the AGP multi-version test matrix: the registry of Android
//! Gradle Plugin versions under test, the configuration file it is declared
//! in, and the materialization of version-specific verification tasks.
//!
//! The registry follows a strict two-phase model: versions are declared
//! through [`VersionRegistryBuilder`], and every downstream consumer (resource
//! generation, task materialization, matrix emission) only ever sees the
//! finalized, immutable [`VersionRegistry`].

pub mod config;
pub mod error;
pub mod registry;
pub mod tasks;

pub use config::MatrixConfig;
pub use error::{Error, Result};
pub use registry::{AgpVersion, VersionRegistry, VersionRegistryBuilder};
pub use tasks::{TaskDescriptor, VerificationPlan, materialize};
