//! Response and media type entities.

use super::{Schema, extensions::Extensions, map::Map, schema::RefOr};

/// A map of media type names to their content definitions.
///
/// Common media types:
/// - `application/json` - JSON formatted payloads
/// - `application/yaml` - YAML formatted payloads
/// - `text/plain` - Plain text payloads
pub type Content = Map<String, MediaType>;

/// Describes a single response from an operation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Response {
    /// A description of the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// A map of media types to their content definitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,

    /// Extension properties.
    #[serde(skip_serializing_if = "Option::is_none", flatten)]
    pub extensions: Option<Extensions>,
}

impl Response {
    /// Creates a new empty response.
    pub fn new() -> Self {
        Self {
            description: None,
            content: None,
            extensions: None,
        }
    }

    /// Sets the description for the response.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the content (media types) for the response.
    pub fn content(mut self, content: Content) -> Self {
        self.content = Some(content);
        self
    }

    /// Sets the extensions.
    pub fn extensions(mut self, extensions: Extensions) -> Self {
        self.extensions = Some(extensions);
        self
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new()
    }
}

/// A media type and its schema.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MediaType {
    /// The schema for this media type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<RefOr<Schema>>,

    /// Example value for this media type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,

    /// Extension properties.
    #[serde(skip_serializing_if = "Option::is_none", flatten)]
    pub extensions: Option<Extensions>,
}

impl MediaType {
    /// Creates a new empty media type.
    pub fn new() -> Self {
        Self {
            schema: None,
            example: None,
            extensions: None,
        }
    }

    /// Sets the schema for the media type.
    pub fn schema(mut self, schema: RefOr<Schema>) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Sets the example value.
    pub fn example(mut self, example: serde_json::Value) -> Self {
        self.example = Some(example);
        self
    }

    /// Sets the extensions.
    pub fn extensions(mut self, extensions: Extensions) -> Self {
        self.extensions = Some(extensions);
        self
    }
}

impl Default for MediaType {
    fn default() -> Self {
        Self::new()
    }
}
