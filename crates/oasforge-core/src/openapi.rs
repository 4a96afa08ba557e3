//! OpenAPI document types and structures.
//!
//! This module provides the core types for representing an OpenAPI-style document,
//! which describes an HTTP API in a machine-readable format.

mod de;

pub mod components;
pub mod extensions;
pub mod external_docs;
pub mod info;
pub mod map;
pub mod parameter;
pub mod response;
pub mod schema;
pub mod security;
pub mod server;
pub mod tag;

pub use self::{
    components::Components,
    extensions::Extensions,
    external_docs::ExternalDocs,
    info::{Contact, Info, License},
    map::Map,
    parameter::{Parameter, ParameterIn},
    response::{Content, MediaType, Response},
    schema::{
        AdditionalProperties, Array, KnownFormat, Object, Ref, RefOr, Schema, SchemaFormat,
        SchemaType,
    },
    security::SecurityRequirement,
    server::{Server, ServerVariable},
    tag::Tag,
};

/// The root object of an OpenAPI document.
///
/// This is the main entry point for a document, carrying the metadata, servers,
/// security requirements, and reusable component definitions produced for an API.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OpenApi {
    /// The OpenAPI version the document targets.
    pub openapi: String,

    /// Core metadata about the API.
    pub info: Info,

    /// The servers the API is reachable on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<Server>>,

    /// Reusable component definitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,

    /// Security requirements that apply to the whole API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<SecurityRequirement>>,

    /// Tags for organizing operations into groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    /// External documentation reference.
    #[serde(rename = "externalDocs", skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocs>,

    /// Extension properties.
    #[serde(skip_serializing_if = "Option::is_none", flatten)]
    pub extensions: Option<Extensions>,
}

impl OpenApi {
    /// The OpenAPI version emitted by default.
    pub const DEFAULT_VERSION: &str = "3.0.1";

    /// Creates a new OpenAPI document with the given info.
    pub fn new(info: Info) -> Self {
        Self {
            openapi: Self::DEFAULT_VERSION.to_string(),
            info,
            servers: None,
            components: None,
            security: None,
            tags: None,
            external_docs: None,
            extensions: None,
        }
    }

    /// Sets the servers.
    pub fn servers(mut self, servers: Vec<Server>) -> Self {
        self.servers = Some(servers);
        self
    }

    /// Sets the components.
    pub fn components(mut self, components: Components) -> Self {
        self.components = Some(components);
        self
    }

    /// Sets the document-wide security requirements.
    pub fn security(mut self, security: Vec<SecurityRequirement>) -> Self {
        self.security = Some(security);
        self
    }

    /// Sets the tags.
    pub fn tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Sets the external documentation.
    pub fn external_docs(mut self, external_docs: ExternalDocs) -> Self {
        self.external_docs = Some(external_docs);
        self
    }

    /// Sets the extensions.
    pub fn extensions(mut self, extensions: Extensions) -> Self {
        self.extensions = Some(extensions);
        self
    }
}
