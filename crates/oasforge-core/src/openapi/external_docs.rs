//! External documentation entity.

use super::extensions::Extensions;

/// Links to external documentation.
///
/// This struct represents a reference to external documentation resources
/// that provide additional information about the API.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExternalDocs {
    /// A description of the target documentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The URL for the target documentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Extension properties.
    #[serde(skip_serializing_if = "Option::is_none", flatten)]
    pub extensions: Option<Extensions>,
}

impl ExternalDocs {
    /// Creates a new `ExternalDocs` with the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            description: None,
            url: Some(url.into()),
            extensions: None,
        }
    }

    /// Sets the description for the external documentation.
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
