//! Declarative configuration of the version matrix.
//!
//! The matrix is declared in a TOML file (by convention `versions.toml`):
//!
//! ```toml
//! version = "2.3.1"
//! latest-known-agp = "8.0"
//!
//! [[agp]]
//! name = "7.0"
//! gradle-versions = ["8.0", "8.1"]
//!
//! [[agp]]
//! name = "8.0"
//! gradle-versions = ["8.4"]
//! ```
//!
//! `[[agp]]` order defines registry insertion order. The optional
//! `latest-known-agp` guard fails configuration unless that version is
//! registered, so the matrix cannot silently fall behind a plugin release.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::registry::{AgpVersion, VersionRegistry};

/// Parsed contents of a `versions.toml` configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct MatrixConfig {
    /// Version of the plugin under test.
    pub version: Option<String>,
    /// Guard: the most recent AGP version the project claims to support.
    pub latest_known_agp: Option<String>,
    /// Registered AGP versions, in declaration order.
    #[serde(default)]
    pub agp: Vec<AgpVersion>,
}

impl MatrixConfig {
    /// Load and parse a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::TomlParse`] if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| Error::io("read configuration", Some(path.to_path_buf()), e))?;
        let config: Self = toml::from_str(&raw)?;
        tracing::debug!(
            path = %path.display(),
            versions = config.agp.len(),
            "Loaded matrix configuration"
        );
        Ok(config)
    }

    /// Resolve the build version, with a CLI override taking precedence over
    /// the configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingBuildVersion`] if neither is set.
    pub fn resolve_build_version(&self, cli_override: Option<&str>) -> Result<String> {
        cli_override
            .map(str::to_string)
            .or_else(|| self.version.clone())
            .ok_or(Error::MissingBuildVersion)
    }

    /// Build the immutable version registry from the declared entries and run
    /// the `latest-known-agp` guard against it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateVersion`] if two entries share a name, and
    /// [`Error::LatestVersionNotRegistered`] if the guard version is absent.
    pub fn into_registry(self) -> Result<VersionRegistry> {
        let mut builder = VersionRegistry::builder();
        for entry in self.agp {
            builder.add_entry(entry)?;
        }
        let registry = builder.finalize();

        if let Some(latest) = self.latest_known_agp
            && !registry.contains(&latest)
        {
            return Err(Error::LatestVersionNotRegistered { version: latest });
        }

        Ok(registry)
    }
}
