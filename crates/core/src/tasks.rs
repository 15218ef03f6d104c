//! Materialization of version-specific verification tasks.
//!
//! For every registered AGP version a `testAndroid<normalized>` task is
//! derived and wired under the aggregate `check` task, so invoking the
//! aggregate runs the whole matrix. Each task carries the system-property map
//! its executor must apply; `org.gradle.android.testVersion` is the signal
//! the test runtime branches on.
//!
//! Materialization only accepts a finalized [`VersionRegistry`], never a
//! builder still open for mutation.

use std::collections::{BTreeMap, HashMap};

use crate::error::{Error, Result};
use crate::registry::{AgpVersion, VersionRegistry};

/// Name of the base test task that always runs, independent of version.
pub const BASE_TEST_TASK: &str = "test";

/// Name of the aggregate verification task.
pub const AGGREGATE_TASK: &str = "check";

/// Prefix of every derived version-specific task name.
pub const TEST_TASK_PREFIX: &str = "testAndroid";

/// Task group the derived tasks are reported under.
pub const VERIFICATION_GROUP: &str = "verification";

/// System property the test runtime reads to select version-specific
/// behavior.
pub const TEST_VERSION_PROPERTY: &str = "org.gradle.android.testVersion";

const ZULU_JDK_ENV: &str = "ZULU_JDK";
const ZULU_ALT_JDK_ENV: &str = "ZULU_ALT_JDK";
const ZULU_PATH_PROPERTY: &str = "org.gradle.android.java_zulu_path";
const ZULU_ALT_PATH_PROPERTY: &str = "org.gradle.android.java_zulu_alt_path";

/// Replace every `.` and `-` in a version name with `_`.
///
/// Total and deterministic for any input string.
#[must_use]
pub fn normalize_version(version: &str) -> String {
    version
        .chars()
        .map(|c| if c == '.' || c == '-' { '_' } else { c })
        .collect()
}

/// Derive the task name for a version, e.g. `"7.0"` -> `"testAndroid7_0"`.
#[must_use]
pub fn test_task_name(version: &str) -> String {
    format!("{TEST_TASK_PREFIX}{}", normalize_version(version))
}

/// A materialized version-specific verification task.
///
/// Descriptors are ephemeral: they are recomputed from the registry on every
/// run and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDescriptor {
    /// Derived task name.
    pub name: String,
    /// The version entry this task is bound to.
    pub version: AgpVersion,
    /// Human-readable task description.
    pub description: String,
    /// Task group.
    pub group: &'static str,
    /// System properties the executor must apply to the task's environment.
    pub system_properties: BTreeMap<String, String>,
}

/// The aggregate task depending on every materialized version task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateTask {
    /// Aggregate task name.
    pub name: &'static str,
    /// Names of the version-specific tasks, in registry order.
    pub depends_on: Vec<String>,
}

/// Output of task materialization: the per-version tasks plus the aggregate
/// wiring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationPlan {
    /// Version-specific tasks, in registry order.
    pub tasks: Vec<TaskDescriptor>,
    /// The aggregate `check` task.
    pub check: AggregateTask,
}

/// Materialize one verification task per registered version.
///
/// # Errors
///
/// Returns [`Error::DuplicateTaskName`] if two distinct versions normalize to
/// the same task name (e.g. `"1.0"` and `"1-0"`). A collision is never
/// silently overwritten: it would hide a real test from running.
pub fn materialize(registry: &VersionRegistry) -> Result<VerificationPlan> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    let mut tasks = Vec::with_capacity(registry.len());

    for entry in registry {
        let name = test_task_name(&entry.name);
        if let Some(first) = seen.insert(name.clone(), entry.name.as_str()) {
            return Err(Error::duplicate_task_name(name, first, entry.name.as_str()));
        }

        tasks.push(TaskDescriptor {
            name,
            version: entry.clone(),
            description: format!("Runs the multi-version tests for AGP {}", entry.name),
            group: VERIFICATION_GROUP,
            system_properties: system_properties_for(&entry.name),
        });
    }

    let check = AggregateTask {
        name: AGGREGATE_TASK,
        depends_on: tasks.iter().map(|t| t.name.clone()).collect(),
    };

    tracing::debug!(tasks = tasks.len(), "Materialized verification plan");
    Ok(VerificationPlan { tasks, check })
}

fn system_properties_for(version: &str) -> BTreeMap<String, String> {
    let mut properties = BTreeMap::new();
    properties.insert(TEST_VERSION_PROPERTY.to_string(), version.to_string());
    if let Ok(path) = std::env::var(ZULU_JDK_ENV) {
        properties.insert(ZULU_PATH_PROPERTY.to_string(), path);
    }
    if let Ok(path) = std::env::var(ZULU_ALT_JDK_ENV) {
        properties.insert(ZULU_ALT_PATH_PROPERTY.to_string(), path);
    }
    properties
}
