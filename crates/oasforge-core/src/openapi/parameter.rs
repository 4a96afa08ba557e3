//! Parameter entity for operation inputs.

use super::{Schema, extensions::Extensions, schema::RefOr};

/// Describes a single operation parameter.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Parameter {
    /// The name of the parameter.
    pub name: String,

    /// The location of the parameter.
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub in_: Option<ParameterIn>,

    /// A description of the parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the parameter is required.
    #[serde(
        default,
        deserialize_with = "super::de::bool_or_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub required: Option<bool>,

    /// Whether the parameter is deprecated.
    #[serde(
        default,
        deserialize_with = "super::de::bool_or_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub deprecated: Option<bool>,

    /// The schema for the parameter value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<RefOr<Schema>>,

    /// Default value for the parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,

    /// Example value for the parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,

    /// Extension properties.
    #[serde(skip_serializing_if = "Option::is_none", flatten)]
    pub extensions: Option<Extensions>,
}

impl Parameter {
    /// Creates a new parameter with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            in_: None,
            description: None,
            required: None,
            deprecated: None,
            schema: None,
            default: None,
            example: None,
            extensions: None,
        }
    }

    /// Sets the parameter location.
    pub fn in_(mut self, in_: ParameterIn) -> Self {
        self.in_ = Some(in_);
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets whether the parameter is required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Sets the deprecated flag.
    pub fn deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = Some(deprecated);
        self
    }

    /// Sets the schema.
    pub fn schema(mut self, schema: RefOr<Schema>) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Sets the default value.
    pub fn default_value(mut self, value: serde_json::Value) -> Self {
        self.default = Some(value);
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

/// The location of the parameter in the request.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterIn {
    /// Query string parameter.
    Query,
    /// Header parameter.
    Header,
    /// Path template parameter.
    Path,
    /// Cookie parameter.
    Cookie,
}
