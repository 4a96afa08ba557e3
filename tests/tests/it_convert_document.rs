//! Integration tests for assembling a document from converted metadata and
//! serializing it.

use oasforge::{
    ConstructKind, Converter, Info, MetadataNode, MetadataTree, OpenApi, SecurityRequirement,
    Server, flatten,
};
use serde_json::json;

/// Builds server metadata with one templated variable.
fn build_server_tree() -> MetadataTree {
    MetadataTree::new(ConstructKind::Server)
        .entry("url", "https://{env}.example.com")
        .entry("description", "per-environment endpoint")
        .entry(
            "variables",
            vec![MetadataNode::Tree(
                MetadataTree::new(ConstructKind::ServerVariable)
                    .entry("name", "env")
                    .entry("defaultValue", "prod")
                    .entry("allowableValues", vec!["prod".into(), "staging".into()]),
            )],
        )
}

/// Converts every element of a flattened sequence member.
fn convert_all<T: oasforge::Materialize>(converter: &Converter, entries: &serde_json::Value) -> Vec<T> {
    entries
        .as_array()
        .expect("the member should flatten to a sequence")
        .iter()
        .map(|entry| {
            let map = entry.as_object().expect("entries should be mappings").clone();
            converter.materialize(map).expect("entry should convert")
        })
        .collect()
}

#[test]
fn server_variables_take_document_field_names() {
    //* Given
    let converter = Converter::default();
    let tree = MetadataTree::generic().entry("servers", vec![MetadataNode::Tree(build_server_tree())]);

    //* When
    let flat = flatten(&tree);
    let servers: Vec<Server> = convert_all(&converter, &flat["servers"]);

    //* Then
    assert_eq!(
        serde_json::to_value(&servers).expect("servers should serialize"),
        json!([{
            "url": "https://{env}.example.com",
            "description": "per-environment endpoint",
            "variables": {
                "env": {"enum": ["prod", "staging"], "default": "prod"}
            }
        }]),
        "variables should be keyed by name with the declaration spellings renamed"
    );
}

#[test]
fn security_requirements_convert_to_name_scope_mappings() {
    //* Given
    let converter = Converter::default();
    let tree = MetadataTree::generic().entry(
        "security",
        vec![
            MetadataNode::Tree(
                MetadataTree::new(ConstructKind::SecurityRequirement)
                    .entry("name", "petstore_auth")
                    .entry("scopes", vec!["read:pets".into(), "write:pets".into()]),
            ),
            MetadataNode::Tree(
                MetadataTree::new(ConstructKind::SecurityRequirement).entry("name", "api_key"),
            ),
        ],
    );

    //* When
    let flat = flatten(&tree);
    let security: Vec<SecurityRequirement> = convert_all(&converter, &flat["security"]);

    //* Then
    assert_eq!(security.len(), 2);
    assert_eq!(
        security[0].get("petstore_auth"),
        Some(&["read:pets".to_string(), "write:pets".to_string()][..])
    );
    assert_eq!(
        security[1].get("api_key"),
        Some(&[][..]),
        "a requirement without scopes should map to an empty scope list"
    );
}

#[test]
fn document_serializes_converted_parts_to_yaml() {
    //* Given
    let converter = Converter::default();
    let server_flat = flatten(
        &MetadataTree::new(ConstructKind::Server)
            .entry("url", "https://api.example.com")
            .entry("description", "production"),
    );
    let security_flat = flatten(
        &MetadataTree::generic().entry(
            "security",
            vec![MetadataNode::Tree(
                MetadataTree::new(ConstructKind::SecurityRequirement)
                    .entry("name", "petstore_auth")
                    .entry("scopes", vec!["read:pets".into()]),
            )],
        ),
    );

    //* When
    let server: Server = converter.materialize(server_flat).expect("server should convert");
    let requirements: Vec<SecurityRequirement> = convert_all(&converter, &security_flat["security"]);
    let document = OpenApi::new(Info::new("Pet Store", "1.0.0"))
        .servers(vec![server])
        .security(requirements);
    let yaml = serde_norway::to_string(&document).expect("document should serialize");

    //* Then
    let expected = "\
openapi: 3.0.1
info:
  title: Pet Store
  version: 1.0.0
servers:
- url: https://api.example.com
  description: production
security:
- petstore_auth:
  - read:pets
";
    assert_eq!(yaml, expected);
}

#[test]
fn document_round_trips_through_yaml() {
    //* Given
    let converter = Converter::default();
    let tree = MetadataTree::generic().entry("servers", vec![MetadataNode::Tree(build_server_tree())]);
    let flat = flatten(&tree);
    let servers: Vec<Server> = convert_all(&converter, &flat["servers"]);
    let document = OpenApi::new(Info::new("Pet Store", "1.0.0")).servers(servers);

    //* When
    let yaml = serde_norway::to_string(&document).expect("document should serialize");
    let parsed: OpenApi = serde_norway::from_str(&yaml).expect("document should parse back");

    //* Then
    assert_eq!(
        serde_norway::to_string(&parsed).expect("parsed document should serialize"),
        yaml,
        "serializing the parsed document should reproduce the original text"
    );
}
