//! Integration tests for converting response metadata, including the repair
//! of content declarations into a keyed media-type collection.

use oasforge::{ConstructKind, Converter, MetadataNode, MetadataTree, Response};
use serde_json::json;

/// Builds a content declaration with the given media type and schema type.
fn content_tree(media_type: &str, schema_type: &str) -> MetadataTree {
    MetadataTree::generic()
        .entry("mediaType", media_type)
        .entry("schema", MetadataTree::generic().entry("type", schema_type))
}

#[test]
fn single_content_declaration_is_keyed_by_its_media_type() {
    //* Given
    let converter = Converter::default();
    let tree = MetadataTree::generic()
        .entry("description", "the pet")
        .entry(
            "content",
            vec![MetadataNode::Tree(content_tree("application/xml", "object"))],
        );

    //* When
    let response: Response = converter.convert(&tree).expect("response should convert");

    //* Then
    let content = response.content.expect("content should be present");
    assert_eq!(content.len(), 1, "one declaration should yield one entry");
    assert!(
        content.contains_key("application/xml"),
        "the entry should be keyed by the declared media type"
    );
}

#[test]
fn content_without_a_media_type_defaults_to_json() {
    //* Given
    let converter = Converter::default();
    let tree = MetadataTree::generic()
        .entry("description", "ok")
        .entry(
            "content",
            vec![MetadataNode::Tree(
                MetadataTree::generic().entry("schema", MetadataTree::generic().entry("type", "string")),
            )],
        );

    //* When
    let response: Response = converter.convert(&tree).expect("response should convert");

    //* Then
    let content = response.content.expect("content should be present");
    assert!(
        content.contains_key("application/json"),
        "a declaration without a media type should land under application/json"
    );
}

#[test]
fn multiple_content_declarations_key_each_media_type() {
    //* Given
    let converter = Converter::default();
    let tree = MetadataTree::generic()
        .entry("description", "the pet")
        .entry(
            "content",
            vec![
                MetadataNode::Tree(content_tree("application/json", "object")),
                MetadataNode::Tree(content_tree("application/xml", "object")),
                MetadataNode::Tree(content_tree("text/plain", "string")),
            ],
        );

    //* When
    let response: Response = converter.convert(&tree).expect("response should convert");

    //* Then
    let content = response.content.expect("content should be present");
    assert_eq!(content.len(), 3, "every declaration should keep its own entry");
    for media_type in ["application/json", "application/xml", "text/plain"] {
        assert!(content.contains_key(media_type), "missing entry for {media_type}");
    }
}

#[test]
fn extension_constructs_reattach_to_the_response() {
    //* Given
    let converter = Converter::default();
    let tree = MetadataTree::generic()
        .entry("description", "throttled")
        .entry(
            "extensions",
            vec![
                MetadataNode::Tree(
                    MetadataTree::new(ConstructKind::Extension)
                        .entry("x-rate-limit", "100"),
                ),
                MetadataNode::Tree(
                    MetadataTree::new(ConstructKind::Extension)
                        .entry("internal-id", "throttle-policy"),
                ),
            ],
        );

    //* When
    let response: Response = converter.convert(&tree).expect("response should convert");

    //* Then
    assert_eq!(
        serde_json::to_value(&response).expect("response should serialize"),
        json!({
            "description": "throttled",
            "x-rate-limit": "100",
            "internal-id": "throttle-policy"
        }),
        "merged extensions should reattach wholesale, unprefixed keys included"
    );
}
