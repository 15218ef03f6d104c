//! Registry of Android Gradle Plugin versions under test.
//!
//! The registry is built in two phases. During configuration, versions are
//! declared through [`VersionRegistryBuilder::add`], which rejects duplicate
//! names. Calling [`VersionRegistryBuilder::finalize`] consumes the builder
//! and produces the immutable [`VersionRegistry`] that every downstream step
//! reads. Task materialization cannot observe a half-built registry because
//! only the finalized type exposes readers.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A named AGP version together with the Gradle versions it is tested
/// against.
///
/// `gradle_versions` preserves declaration order and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct AgpVersion {
    /// The AGP version name, e.g. `"8.0"` or `"8.1.0-alpha01"`.
    pub name: String,
    /// Compatible Gradle versions, in declaration order.
    #[serde(default)]
    pub gradle_versions: Vec<String>,
}

impl AgpVersion {
    /// Create a new version entry.
    pub fn new<I, S>(name: impl Into<String>, gradle_versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            gradle_versions: gradle_versions.into_iter().map(Into::into).collect(),
        }
    }
}

/// Builder for a [`VersionRegistry`].
///
/// Insertion order is preserved and is semantically meaningful: it drives the
/// key order of the generated resource and the task order of the CI matrix.
#[derive(Debug, Default)]
pub struct VersionRegistryBuilder {
    entries: Vec<AgpVersion>,
}

impl VersionRegistryBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an AGP version.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateVersion`] if a version with the same name
    /// has already been registered.
    pub fn add<I, S>(&mut self, name: impl Into<String>, gradle_versions: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_entry(AgpVersion::new(name, gradle_versions))
    }

    /// Register an already-constructed version entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateVersion`] if a version with the same name
    /// has already been registered.
    pub fn add_entry(&mut self, entry: AgpVersion) -> Result<&mut Self> {
        if self.entries.iter().any(|e| e.name == entry.name) {
            return Err(Error::duplicate_version(entry.name));
        }
        self.entries.push(entry);
        Ok(self)
    }

    /// Finalize the registry, making it immutable.
    #[must_use]
    pub fn finalize(self) -> VersionRegistry {
        VersionRegistry {
            entries: self.entries,
        }
    }
}

/// Immutable, insertion-ordered collection of registered AGP versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRegistry {
    entries: Vec<AgpVersion>,
}

impl VersionRegistry {
    /// Start building a registry.
    #[must_use]
    pub fn builder() -> VersionRegistryBuilder {
        VersionRegistryBuilder::new()
    }

    /// Iterate over all entries in insertion order.
    ///
    /// The iterator is restartable: each call starts from the first entry.
    pub fn iter(&self) -> std::slice::Iter<'_, AgpVersion> {
        self.entries.iter()
    }

    /// Look up an entry by version name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AgpVersion> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Check whether a version name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of registered versions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a VersionRegistry {
    type Item = &'a AgpVersion;
    type IntoIter = std::slice::Iter<'a, AgpVersion>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_registry() -> VersionRegistry {
        let mut builder = VersionRegistry::builder();
        builder.add("7.0", ["8.0", "8.1"]).unwrap();
        builder.add("8.0", ["8.4"]).unwrap();
        builder.finalize()
    }

    #[test]
    fn test_builder_preserves_insertion_order() {
        let registry = sample_registry();
        let names: Vec<_> = registry.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["7.0", "8.0"]);
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let mut builder = VersionRegistry::builder();
        builder.add("7.0", ["8.0"]).unwrap();
        let err = builder.add("7.0", ["8.4"]).unwrap_err();
        assert!(matches!(err, Error::DuplicateVersion { name } if name == "7.0"));
    }

    #[test]
    fn test_duplicate_rejection_keeps_first_entry() {
        let mut builder = VersionRegistry::builder();
        builder.add("7.0", ["8.0"]).unwrap();
        let _ = builder.add("7.0", ["8.4"]);
        let registry = builder.finalize();
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("7.0").unwrap().gradle_versions,
            vec!["8.0".to_string()]
        );
    }

    #[test]
    fn test_iter_is_restartable() {
        let registry = sample_registry();
        let first: Vec<_> = registry.iter().map(|e| e.name.clone()).collect();
        let second: Vec<_> = registry.iter().map(|e| e.name.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_registry() {
        let registry = VersionRegistry::builder().finalize();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.iter().count(), 0);
    }

    #[test]
    fn test_empty_gradle_versions_allowed() {
        let mut builder = VersionRegistry::builder();
        builder.add("9.0", Vec::<String>::new()).unwrap();
        let registry = builder.finalize();
        assert!(registry.get("9.0").unwrap().gradle_versions.is_empty());
    }

    #[test]
    fn test_contains_and_get() {
        let registry = sample_registry();
        assert!(registry.contains("7.0"));
        assert!(!registry.contains("7.1"));
        assert_eq!(registry.get("8.0").unwrap().gradle_versions, vec!["8.4"]);
    }
}
