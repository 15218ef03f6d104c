//! # agp-matrix-codegen
//!
//! Generates the `versions.json` resource describing the version matrix, for
//! consumption by the multi-version test runtime.
//!
//! Generation is a pure function of the build version and the finalized
//! registry: identical inputs always produce byte-identical output, which is
//! what makes the artifact safe for build caching and incremental rebuilds.
//! The file is written atomically, so a failed run never leaves a partial
//! resource that looks like a successful one.

pub mod resource;

pub use resource::{DEFAULT_OUTPUT_DIR, RESOURCE_FILE_NAME, VersionsResource};
