//! Server and server variable entities.

use super::{extensions::Extensions, map::Map};

/// Describes a server the API is reachable on.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Server {
    /// The URL of the server, optionally templated with `{variable}` markers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// A description of the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Values for the variables in the templated URL, keyed by variable name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Map<String, ServerVariable>>,

    /// Extension properties.
    #[serde(skip_serializing_if = "Option::is_none", flatten)]
    pub extensions: Option<Extensions>,
}

impl Server {
    /// Creates a new server with the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the URL template variables.
    pub fn variables(mut self, variables: Map<String, ServerVariable>) -> Self {
        self.variables = Some(variables);
        self
    }

    /// Sets the extensions.
    pub fn extensions(mut self, extensions: Extensions) -> Self {
        self.extensions = Some(extensions);
        self
    }
}

/// A variable used in a templated server URL.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct ServerVariable {
    /// The values the variable may take.
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,

    /// The value used when the caller supplies none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// A description of the variable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Extension properties.
    #[serde(skip_serializing_if = "Option::is_none", flatten)]
    pub extensions: Option<Extensions>,
}

impl ServerVariable {
    /// Creates a new empty server variable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the values the variable may take.
    pub fn enum_values(mut self, enum_values: Vec<String>) -> Self {
        self.enum_values = Some(enum_values);
        self
    }

    /// Sets the default value.
    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the extensions.
    pub fn extensions(mut self, extensions: Extensions) -> Self {
        self.extensions = Some(extensions);
        self
    }
}
