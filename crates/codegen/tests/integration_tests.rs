//! Filesystem integration tests for resource generation.

use agp_matrix_codegen::{RESOURCE_FILE_NAME, VersionsResource};
use agp_matrix_core::{Error, VersionRegistry};
use std::fs;

fn sample_registry() -> VersionRegistry {
    let mut builder = VersionRegistry::builder();
    builder.add("7.0", ["8.0", "8.1"]).unwrap();
    builder.add("8.0", ["8.4"]).unwrap();
    builder.finalize()
}

#[test]
fn write_produces_the_resource_file() {
    let dir = tempfile::tempdir().unwrap();
    let resource = VersionsResource::new("2.3.1", &sample_registry());

    let path = resource.write(dir.path()).unwrap();

    assert_eq!(path, dir.path().join(RESOURCE_FILE_NAME));
    let written = fs::read(&path).unwrap();
    assert_eq!(written, resource.to_pretty_bytes().unwrap());
}

#[test]
fn write_creates_missing_output_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("build/generated-resources/main");
    let resource = VersionsResource::new("2.3.1", &sample_registry());

    let path = resource.write(&nested).unwrap();
    assert!(path.exists());
}

#[test]
fn write_fully_replaces_prior_content() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join(RESOURCE_FILE_NAME);
    fs::write(&target, "stale content that is much longer than the real resource would ever be, left over from an earlier run").unwrap();

    let resource = VersionsResource::new("2.3.1", &sample_registry());
    resource.write(dir.path()).unwrap();

    let written = fs::read(&target).unwrap();
    assert_eq!(written, resource.to_pretty_bytes().unwrap());
}

#[test]
fn repeated_writes_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let resource = VersionsResource::new("2.3.1", &sample_registry());

    let path = resource.write(dir.path()).unwrap();
    let first = fs::read(&path).unwrap();
    resource.write(dir.path()).unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn unwritable_destination_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    // A regular file where the output directory should be.
    let blocked = dir.path().join("output");
    fs::write(&blocked, "").unwrap();

    let resource = VersionsResource::new("2.3.1", &sample_registry());
    let err = resource.write(&blocked).unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
    assert!(!blocked.join(RESOURCE_FILE_NAME).exists());
}

#[test]
fn no_staging_file_remains_after_write() {
    let dir = tempfile::tempdir().unwrap();
    let resource = VersionsResource::new("2.3.1", &sample_registry());

    resource.write(dir.path()).unwrap();

    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(leftovers, vec![RESOURCE_FILE_NAME]);
}
