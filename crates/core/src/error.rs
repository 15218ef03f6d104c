//! Error types for the agp-matrix toolchain.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for agp-matrix operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building the version registry or generating
/// its derived artifacts.
///
/// Every variant is a configuration-time, fatal failure: the whole generation
/// pipeline aborts and the error is surfaced verbatim to the invoking build.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// An AGP version was registered twice.
    #[error("AGP version '{name}' is already registered")]
    #[diagnostic(
        code(agp_matrix::registry::duplicate_version),
        help("Each [[agp]] entry must have a unique name; remove the duplicate")
    )]
    DuplicateVersion {
        /// The version name that was registered twice
        name: String,
    },

    /// Two distinct AGP versions normalize to the same task name.
    #[error("versions '{first}' and '{second}' both produce task '{task}'")]
    #[diagnostic(
        code(agp_matrix::tasks::duplicate_task_name),
        help(
            "Task names are derived by replacing '.' and '-' with '_'; \
             rename one of the versions so the derived names differ"
        )
    )]
    DuplicateTaskName {
        /// The colliding derived task name
        task: String,
        /// The version registered first
        first: String,
        /// The version whose task name collided
        second: String,
    },

    /// The build version was never configured.
    #[error("no build version configured")]
    #[diagnostic(
        code(agp_matrix::config::missing_build_version),
        help("Set 'version' in the configuration file or pass --build-version")
    )]
    MissingBuildVersion,

    /// The declared latest known AGP version is absent from the registry.
    #[error("latest known AGP version '{version}' is not registered")]
    #[diagnostic(
        code(agp_matrix::config::latest_not_registered),
        help("The project must be updated to test against this AGP version; add an [[agp]] entry for it")
    )]
    LatestVersionNotRegistered {
        /// The guard version missing from the registry
        version: String,
    },

    /// Configuration error.
    #[error("configuration error: {message}")]
    #[diagnostic(code(agp_matrix::config::invalid))]
    Config {
        /// The error message
        message: String,
        /// The configuration file involved, if any
        path: Option<PathBuf>,
    },

    /// Filesystem operation failed.
    #[error("I/O error during {operation}: {source}")]
    #[diagnostic(
        code(agp_matrix::io),
        help("Check that the destination exists and is writable")
    )]
    Io {
        /// The operation that failed (e.g. "write", "rename")
        operation: String,
        /// The path involved, if known
        path: Option<PathBuf>,
        /// The underlying source error
        #[source]
        source: std::io::Error,
    },

    /// Wrapped JSON serialization error.
    #[error("JSON error: {0}")]
    #[diagnostic(code(agp_matrix::json))]
    Json(#[from] serde_json::Error),

    /// Wrapped TOML parsing error.
    #[error("TOML parse error: {0}")]
    #[diagnostic(code(agp_matrix::config::toml_parse))]
    TomlParse(#[from] toml::de::Error),
}

impl Error {
    /// Create a new duplicate version error.
    #[must_use]
    pub fn duplicate_version(name: impl Into<String>) -> Self {
        Self::DuplicateVersion { name: name.into() }
    }

    /// Create a new duplicate task name error.
    #[must_use]
    pub fn duplicate_task_name(
        task: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::DuplicateTaskName {
            task: task.into(),
            first: first.into(),
            second: second.into(),
        }
    }

    /// Create a new configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    /// Create a new configuration error pointing at a file.
    #[must_use]
    pub fn config_at(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a new I/O error with operation and path context.
    #[must_use]
    pub fn io(
        operation: impl Into<String>,
        path: Option<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            operation: operation.into(),
            path,
            source,
        }
    }
}
