//! Integration tests for converting declaration metadata into schema and
//! parameter nodes.

use oasforge::{Accessor, AccessorReturn, Converter, EnumInfo, MetadataTree, Parameter, Schema};
use serde_json::json;

#[test]
fn parameter_metadata_materializes_with_native_default() {
    //* Given
    let converter = Converter::default();
    let tree = MetadataTree::generic()
        .entry("name", "age")
        .entry("defaultValue", "25")
        .entry("type", "integer")
        .entry("format", "int32");

    //* When
    let parameter: Parameter = converter.convert(&tree).expect("parameter should convert");

    //* Then
    assert_eq!(
        serde_json::to_value(&parameter).expect("parameter should serialize"),
        json!({"name": "age", "default": 25}),
        "the default should be a native integer and declaration-only fields should be dropped"
    );
}

#[test]
fn parameter_with_nested_schema_converts_in_one_pass() {
    //* Given
    let converter = Converter::default();
    let tree = MetadataTree::generic()
        .entry("name", "page")
        .entry("in", "query")
        .entry("description", "page number")
        .entry(
            "schema",
            MetadataTree::generic()
                .entry("type", "integer")
                .entry("format", "int32"),
        );

    //* When
    let parameter: Parameter = converter.convert(&tree).expect("parameter should convert");

    //* Then
    assert_eq!(
        serde_json::to_value(&parameter).expect("parameter should serialize"),
        json!({
            "name": "page",
            "in": "query",
            "description": "page number",
            "schema": {"type": "integer", "format": "int32"}
        })
    );
}

#[test]
fn schema_metadata_normalizes_default_and_enumeration() {
    //* Given
    let converter = Converter::default();
    let tree = MetadataTree::generic()
        .entry("type", "integer")
        .entry("format", "int32")
        .entry("defaultValue", "1")
        .entry(
            "allowableValues",
            vec!["1".into(), "2".into(), "3".into()],
        );

    //* When
    let schema: Schema = converter.convert(&tree).expect("schema should convert");

    //* Then
    assert_eq!(
        serde_json::to_value(&schema).expect("schema should serialize"),
        json!({
            "type": "integer",
            "format": "int32",
            "enum": [1, 2, 3],
            "default": 1
        }),
        "raw default and enumeration strings should become native integers"
    );
}

#[test]
fn enum_capability_selects_the_raw_value_parse() {
    //* Given
    let converter = Converter::default();
    let info = EnumInfo::new("com.example.Priority").raw_value_accessor(Accessor::new(
        "getCode",
        AccessorReturn::Scalar {
            type_name: "long".to_string(),
            is_array: false,
        },
    ));
    let tree = MetadataTree::generic()
        .entry("defaultValue", "40")
        .entry("allowableValues", vec!["10".into(), "40".into()]);

    //* When
    let schema: Schema = converter
        .convert_with(&tree, Some(&info))
        .expect("schema should convert");

    //* Then
    assert_eq!(
        serde_json::to_value(&schema).expect("schema should serialize"),
        json!({"enum": [10, 40], "default": 40}),
        "the enum's raw-value accessor should drive the numeric parse"
    );
}

#[test]
fn unparseable_default_survives_as_its_raw_spelling() {
    //* Given
    let converter = Converter::default();
    let tree = MetadataTree::generic()
        .entry("name", "filter")
        .entry("defaultValue", "{oops");

    //* When
    let parameter: Parameter = converter.convert(&tree).expect("parameter should convert");

    //* Then
    assert_eq!(
        parameter.default,
        Some(json!("{oops")),
        "conversion should degrade to the raw string instead of failing"
    );
}
