//! Components container for reusable definitions.

use super::{Parameter, Response, Schema, map::Map, schema::RefOr};

/// Reusable component definitions.
///
/// Components allow defining reusable schemas, parameters, and responses that can
/// be referenced from multiple locations in the document.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Components {
    /// Reusable schema definitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schemas: Option<Map<String, RefOr<Schema>>>,

    /// Reusable response definitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses: Option<Map<String, RefOr<Response>>>,

    /// Reusable parameter definitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Map<String, RefOr<Parameter>>>,
}

impl Components {
    /// Creates a new empty components container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the schemas.
    pub fn schemas(mut self, schemas: Map<String, RefOr<Schema>>) -> Self {
        self.schemas = Some(schemas);
        self
    }

    /// Sets the responses.
    pub fn responses(mut self, responses: Map<String, RefOr<Response>>) -> Self {
        self.responses = Some(responses);
        self
    }

    /// Sets the parameters.
    pub fn parameters(mut self, parameters: Map<String, RefOr<Parameter>>) -> Self {
        self.parameters = Some(parameters);
        self
    }
}
