//! # oasforge-convert
//!
//! Metadata-to-document conversion engine for oasforge.
//!
//! The engine turns the weakly typed metadata trees produced by source
//! inspection into typed OpenAPI document nodes. It flattens nested metadata
//! records into document-field mappings, resolves schema types and formats
//! for source-language scalars, normalizes raw strings into native values,
//! and materializes flat mappings as typed nodes, repairing the pieces a
//! purely structural binding cannot express. A lightweight rendering-option
//! transform rounds out the conversion family.
//!
//! Conversion never aborts a document build: structural mismatches surface
//! as typed errors for the caller to report, and every other failure
//! degrades to the raw string with a diagnostic.

pub mod converter;
pub mod error;
pub mod flatten;
pub mod materialize;
pub mod metadata;
pub mod normalize;
pub mod settings;
pub mod type_format;
pub mod view;

pub use self::{
    converter::Converter,
    error::{ConvertError, ParseError},
    flatten::{FlatMap, flatten},
    materialize::{Materialize, TargetKind},
    metadata::{Accessor, AccessorReturn, ConstructKind, EnumInfo, MetadataNode, MetadataTree},
    normalize::{ArrayMode, Normalized, TypedValue, normalize},
    settings::{EnumValues, Settings, UnknownFields},
    type_format::{TypeFormatPair, resolve},
    view::{OptionKind, OptionValue, ViewOptions},
};
