//! The `versions.json` resource artifact.

use std::fs;
use std::path::{Path, PathBuf};

use agp_matrix_core::registry::VersionRegistry;
use agp_matrix_core::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// File name of the generated resource.
pub const RESOURCE_FILE_NAME: &str = "versions.json";

/// Default output directory, matching where the build expects generated
/// test resources.
pub const DEFAULT_OUTPUT_DIR: &str = "build/generated-resources/main";

/// The structured content of `versions.json`.
///
/// Key order of `supportedVersions` is registry insertion order; serialization
/// is deterministic so that unchanged inputs yield byte-identical files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionsResource {
    version: String,
    #[serde(rename = "supportedVersions")]
    supported_versions: IndexMap<String, Vec<String>>,
}

impl VersionsResource {
    /// Build the resource from the build version and the finalized registry.
    #[must_use]
    pub fn new(build_version: impl Into<String>, registry: &VersionRegistry) -> Self {
        Self {
            version: build_version.into(),
            supported_versions: registry
                .iter()
                .map(|entry| (entry.name.clone(), entry.gradle_versions.clone()))
                .collect(),
        }
    }

    /// The build version recorded in the resource.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The name -> compatible-versions mapping, in registry order.
    #[must_use]
    pub fn supported_versions(&self) -> &IndexMap<String, Vec<String>> {
        &self.supported_versions
    }

    /// Serialize to the canonical pretty-printed UTF-8 encoding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if serialization fails.
    pub fn to_pretty_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = serde_json::to_vec_pretty(self)?;
        bytes.push(b'\n');
        Ok(bytes)
    }

    /// Write the resource to `<output_dir>/versions.json`, fully replacing
    /// any prior content.
    ///
    /// The content is first written to a temporary file in the destination
    /// directory and then renamed over the target, so a failure cannot leave
    /// a partial `versions.json` behind. Returns the path written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the destination cannot be created or written.
    pub fn write(&self, output_dir: &Path) -> Result<PathBuf> {
        let bytes = self.to_pretty_bytes()?;
        let destination = output_dir.join(RESOURCE_FILE_NAME);
        let staging = output_dir.join(format!("{RESOURCE_FILE_NAME}.tmp"));

        fs::create_dir_all(output_dir)
            .map_err(|e| Error::io("create directory", Some(output_dir.to_path_buf()), e))?;
        fs::write(&staging, &bytes).map_err(|e| Error::io("write", Some(staging.clone()), e))?;
        fs::rename(&staging, &destination)
            .map_err(|e| Error::io("rename", Some(destination.clone()), e))?;

        tracing::info!(path = %destination.display(), "Generated versions resource");
        Ok(destination)
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
    fn test_resource_copies_registry_contents() {
        let resource = VersionsResource::new("2.3.1", &sample_registry());
        assert_eq!(resource.version(), "2.3.1");
        assert_eq!(
            resource.supported_versions().get("7.0"),
            Some(&vec!["8.0".to_string(), "8.1".to_string()])
        );
    }

    #[test]
    fn test_pretty_encoding_matches_expected_layout() {
        let resource = VersionsResource::new("2.3.1", &sample_registry());
        let text = String::from_utf8(resource.to_pretty_bytes().unwrap()).unwrap();
        let expected = r#"{
  "version": "2.3.1",
  "supportedVersions": {
    "7.0": [
      "8.0",
      "8.1"
    ],
    "8.0": [
      "8.4"
    ]
  }
}
"#;
        assert_eq!(text, expected);
    }

    #[test]
    fn test_encoding_is_idempotent() {
        let resource = VersionsResource::new("2.3.1", &sample_registry());
        assert_eq!(
            resource.to_pretty_bytes().unwrap(),
            resource.to_pretty_bytes().unwrap()
        );
    }

    #[test]
    fn test_round_trip() {
        let resource = VersionsResource::new("2.3.1", &sample_registry());
        let bytes = resource.to_pretty_bytes().unwrap();
        let parsed: VersionsResource = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed, resource);
    }

    #[test]
    fn test_key_order_follows_registry_insertion_order() {
        let mut builder = VersionRegistry::builder();
        builder.add("8.0", ["8.4"]).unwrap();
        builder.add("7.0", ["8.0"]).unwrap();
        let resource = VersionsResource::new("1.0", &builder.finalize());

        let text = String::from_utf8(resource.to_pretty_bytes().unwrap()).unwrap();
        let pos_80 = text.find("\"8.0\":").unwrap();
        let pos_70 = text.find("\"7.0\":").unwrap();
        assert!(pos_80 < pos_70, "declared-first key must serialize first");
    }

    #[test]
    fn test_empty_registry_serializes_empty_object() {
        let resource = VersionsResource::new("1.0", &VersionRegistry::builder().finalize());
        let text = String::from_utf8(resource.to_pretty_bytes().unwrap()).unwrap();
        assert!(text.contains("\"supportedVersions\": {}"));
    }

    #[test]
    fn test_empty_gradle_versions_serialize_as_empty_array() {
        let mut builder = VersionRegistry::builder();
        builder.add("9.0", Vec::<String>::new()).unwrap();
        let resource = VersionsResource::new("1.0", &builder.finalize());
        let text = String::from_utf8(resource.to_pretty_bytes().unwrap()).unwrap();
        assert!(text.contains("\"9.0\": []"));
    }
}
