//! Integration tests for parsing renderer properties into typed rendering
//! options.

use indexmap::IndexMap;
use oasforge::{OptionKind, OptionValue, ViewOptions};

/// The option table a browser-based documentation renderer would declare.
const TABLE: &[(&str, OptionKind)] = &[
    ("deepLinking", OptionKind::Bool),
    ("docExpansion", OptionKind::Enum(&["LIST", "FULL", "NONE"])),
    ("defaultModelsExpandDepth", OptionKind::UInt),
    ("specUrl", OptionKind::QuotedStr),
];

const PREFIX: &str = "views.swagger-ui.";

/// Builds a property map from literal key and value pairs.
fn properties(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}

#[test]
fn renderer_properties_parse_into_typed_options() {
    //* Given
    let defaults = [
        ("deepLinking", OptionValue::Bool(true)),
        ("defaultModelsExpandDepth", OptionValue::UInt(1)),
    ];
    let properties = properties(&[
        ("views.swagger-ui.docExpansion", "full"),
        ("views.swagger-ui.defaultModelsExpandDepth", "3"),
        ("views.redoc.docExpansion", "none"),
    ]);

    //* When
    let options = ViewOptions::from_properties(PREFIX, TABLE, &defaults, &properties);

    //* Then
    assert_eq!(
        options.get("deepLinking"),
        Some(&OptionValue::Bool(true)),
        "a default without an overriding property should survive"
    );
    assert_eq!(
        options.get("docExpansion"),
        Some(&OptionValue::Str("FULL".to_string())),
        "enumerated options should store the canonical spelling"
    );
    assert_eq!(options.get("defaultModelsExpandDepth"), Some(&OptionValue::UInt(3)));
    assert_eq!(
        options.get("specUrl"),
        None,
        "options of another renderer's prefix should not leak in"
    );
}

#[test]
fn options_render_as_html_attributes() {
    //* Given
    let properties = properties(&[
        ("views.swagger-ui.deepLinking", "TRUE"),
        ("views.swagger-ui.specUrl", "/openapi/pets.yml"),
    ]);

    //* When
    let options = ViewOptions::from_properties(PREFIX, TABLE, &[], &properties);

    //* Then
    assert_eq!(
        options.to_html_attributes(),
        "deepLinking=\"true\" specUrl=\"\"/openapi/pets.yml\"\"",
        "booleans lowercase and quoted strings keep their literal quotes"
    );
}

#[test]
fn unparseable_property_values_keep_the_defaults() {
    //* Given
    let defaults = [("defaultModelsExpandDepth", OptionValue::UInt(1))];
    let properties = properties(&[("views.swagger-ui.defaultModelsExpandDepth", "-2")]);

    //* When
    let options = ViewOptions::from_properties(PREFIX, TABLE, &defaults, &properties);

    //* Then
    assert_eq!(
        options.get("defaultModelsExpandDepth"),
        Some(&OptionValue::UInt(1)),
        "a negative depth should be skipped rather than clear the default"
    );
}
