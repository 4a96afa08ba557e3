//! # oasforge-core
//!
//! Core types for oasforge - OpenAPI document support.
//!
//! This crate provides the fundamental types for representing an OpenAPI-style
//! document: schemas, responses, parameters, servers, security requirements and
//! the surrounding assembly types, in a machine-readable format.

pub mod openapi;

// Re-export main types at the crate root for convenience
pub use openapi::{
    AdditionalProperties, Array, Components, Contact, Content, Extensions, ExternalDocs, Info,
    KnownFormat, License, Map, MediaType, Object, OpenApi, Parameter, ParameterIn, Ref, RefOr,
    Response, Schema, SchemaFormat, SchemaType, SecurityRequirement, Server, ServerVariable, Tag,
};
