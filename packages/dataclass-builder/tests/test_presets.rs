//! Builder presets loaded from files

mod common;

use common::*;
use dataclass_builder::{Builder, BuilderFactory, ErrorKind, Slot, REQUIRED};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn preset_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_factory_from_yaml_file() {
    let file = preset_file("x: 5.8\nw: 100.0\n");
    let factory = BuilderFactory::<PointBuilder>::from_yaml_file(file.path()).unwrap();
    let mut builder = factory.builder().unwrap();
    assert_eq!(builder.x, Slot::Set(5.8));
    assert_eq!(builder.y, REQUIRED);
    builder.y = 8.1.into();
    assert_eq!(builder.build().unwrap(), Point { x: 5.8, y: 8.1, w: 100.0 });
}

#[test]
fn test_yaml_collections() {
    let file = preset_file("sequence: [1, 2, 3]\nmapping:\n  one: 1.0\n");
    let factory = BuilderFactory::<CollectionsBuilder>::from_yaml_file(file.path()).unwrap();
    let collections = factory.build().unwrap();
    assert_eq!(collections.sequence, vec![1, 2, 3]);
    assert_eq!(collections.mapping.get("one"), Some(&1.0));
    assert!(collections.tags.is_empty());
}

#[test]
fn test_yaml_file_with_unknown_field() {
    let file = preset_file("radius: 1.0\nradious: 2.0\n");
    let err = BuilderFactory::<CircleBuilder>::from_yaml_file(file.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UndefinedField);
    assert_eq!(
        err.to_string(),
        "dataclass 'Circle' does not define field 'radious'. Did you mean 'radius'?"
    );
}

#[test]
fn test_yaml_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = BuilderFactory::<PointBuilder>::from_yaml_file(dir.path().join("absent.yaml")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IO);
}

#[test]
fn test_yaml_round_trip_through_file() {
    let factory = BuilderFactory::<TypesBuilder>::new()
        .preset("int_", 3)
        .unwrap()
        .preset("str_", "text")
        .unwrap();
    let file = preset_file(&factory.to_yaml().unwrap());
    let loaded = BuilderFactory::<TypesBuilder>::from_yaml_file(file.path()).unwrap();
    assert_eq!(loaded.presets(), factory.presets());

    let builder = loaded.builder_with([("float_", 0.5)]).unwrap();
    assert_eq!(
        builder.build().unwrap(),
        Types { int_: 3, float_: 0.5, str_: "text".to_string() }
    );
}
