//! # oasforge
//!
//! Convert declaration metadata into OpenAPI documents.
//!
//! This crate provides the main API for working with oasforge, re-exporting
//! the document model from the `oasforge-core` crate and the conversion
//! engine from `oasforge-convert`.

// Re-export the openapi module for access to builders and internal types
pub use oasforge_core::openapi;
// Re-export all document model types at the crate root for convenience
pub use oasforge_core::{
    AdditionalProperties, Array, Components, Contact, Content, Extensions, ExternalDocs, Info,
    KnownFormat, License, Map, MediaType, Object, OpenApi, Parameter, ParameterIn, Ref, RefOr,
    Response, Schema, SchemaFormat, SchemaType, SecurityRequirement, Server, ServerVariable, Tag,
};
// Re-export the conversion engine alongside the model it produces
pub use oasforge_convert::{
    Accessor, AccessorReturn, ArrayMode, ConstructKind, ConvertError, Converter, EnumInfo,
    EnumValues, FlatMap, Materialize, MetadataNode, MetadataTree, Normalized, OptionKind,
    OptionValue, ParseError, Settings, TargetKind, TypeFormatPair, TypedValue, UnknownFields,
    ViewOptions, flatten, normalize, resolve,
};
