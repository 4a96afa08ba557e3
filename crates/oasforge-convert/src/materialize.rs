//! Typed document node materialization.
//!
//! Materialization binds a flat mapping onto a typed document node, then
//! repairs the pieces a purely structural binding cannot express: media-type
//! collections with a singular spelling, vendor extensions attached
//! wholesale, and raw default/enumeration strings re-normalized against the
//! node's resolved type and format.

use std::fmt;

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use oasforge_core::{
    Contact, Content, Extensions, ExternalDocs, Info, License, Map, MediaType, Object, Parameter,
    Response, Schema, SchemaFormat, SchemaType, SecurityRequirement, Server, ServerVariable, Tag,
};

use crate::{
    converter::Converter,
    error::ConvertError,
    flatten::FlatMap,
    metadata::EnumInfo,
    normalize::{ArrayMode, normalize},
    settings::UnknownFields,
};

/// The media-type key used when an entry does not declare one.
const DEFAULT_MEDIA_TYPE: &str = "application/json";

/// Flat keys consumed by the repair steps rather than bound structurally.
const REPAIR_KEYS: [&str; 3] = ["defaultValue", "allowableValues", "extensions"];

/// The document kinds a flat mapping can materialize as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// A schema node.
    Schema,
    /// A response node.
    Response,
    /// A media-type node.
    MediaType,
    /// A parameter node.
    Parameter,
    /// A security requirement node.
    SecurityRequirement,
    /// A server node.
    Server,
    /// A server variable node.
    ServerVariable,
    /// A tag node.
    Tag,
    /// An external documentation node.
    ExternalDocs,
    /// An info node.
    Info,
    /// A contact node.
    Contact,
    /// A license node.
    License,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TargetKind::Schema => "schema",
            TargetKind::Response => "response",
            TargetKind::MediaType => "media type",
            TargetKind::Parameter => "parameter",
            TargetKind::SecurityRequirement => "security requirement",
            TargetKind::Server => "server",
            TargetKind::ServerVariable => "server variable",
            TargetKind::Tag => "tag",
            TargetKind::ExternalDocs => "external documentation",
            TargetKind::Info => "info",
            TargetKind::Contact => "contact",
            TargetKind::License => "license",
        };
        f.write_str(name)
    }
}

/// A document node type a flat mapping can materialize into.
///
/// The setter hooks cover the slots the repair steps write through; a kind
/// without such a slot keeps the no-op default.
pub trait Materialize: DeserializeOwned + Serialize {
    /// The document kind this type materializes as.
    const KIND: TargetKind;

    /// Replaces the node's vendor extensions.
    fn set_extensions(&mut self, _extensions: Extensions) {}

    /// Replaces the node's default value. A JSON null clears the slot.
    fn set_default(&mut self, _value: Value) {}

    /// Replaces the node's enumerated values.
    fn set_enum_values(&mut self, _values: Vec<Value>) {}

    /// Replaces the node's media-type entries.
    fn set_content(&mut self, _content: Content) {}
}

impl Materialize for Schema {
    const KIND: TargetKind = TargetKind::Schema;

    fn set_extensions(&mut self, extensions: Extensions) {
        match self {
            Schema::Object(object) => object.extensions = Some(extensions),
            Schema::Array(array) => array.extensions = Some(extensions),
        }
    }

    fn set_default(&mut self, value: Value) {
        if let Schema::Object(object) = self {
            object.default = if value.is_null() { None } else { Some(value) };
        }
    }

    fn set_enum_values(&mut self, values: Vec<Value>) {
        if let Schema::Object(object) = self {
            object.enum_values = Some(values);
        }
    }
}

impl Materialize for Response {
    const KIND: TargetKind = TargetKind::Response;

    fn set_extensions(&mut self, extensions: Extensions) {
        self.extensions = Some(extensions);
    }

    fn set_content(&mut self, content: Content) {
        self.content = Some(content);
    }
}

impl Materialize for MediaType {
    const KIND: TargetKind = TargetKind::MediaType;

    fn set_extensions(&mut self, extensions: Extensions) {
        self.extensions = Some(extensions);
    }
}

impl Materialize for Parameter {
    const KIND: TargetKind = TargetKind::Parameter;

    fn set_extensions(&mut self, extensions: Extensions) {
        self.extensions = Some(extensions);
    }

    fn set_default(&mut self, value: Value) {
        self.default = if value.is_null() { None } else { Some(value) };
    }
}

impl Materialize for SecurityRequirement {
    const KIND: TargetKind = TargetKind::SecurityRequirement;
}

impl Materialize for Server {
    const KIND: TargetKind = TargetKind::Server;

    fn set_extensions(&mut self, extensions: Extensions) {
        self.extensions = Some(extensions);
    }
}

impl Materialize for ServerVariable {
    const KIND: TargetKind = TargetKind::ServerVariable;

    fn set_extensions(&mut self, extensions: Extensions) {
        self.extensions = Some(extensions);
    }
}

impl Materialize for Tag {
    const KIND: TargetKind = TargetKind::Tag;

    fn set_extensions(&mut self, extensions: Extensions) {
        self.extensions = Some(extensions);
    }
}

impl Materialize for ExternalDocs {
    const KIND: TargetKind = TargetKind::ExternalDocs;

    fn set_extensions(&mut self, extensions: Extensions) {
        self.extensions = Some(extensions);
    }
}

impl Materialize for Info {
    const KIND: TargetKind = TargetKind::Info;

    fn set_extensions(&mut self, extensions: Extensions) {
        self.extensions = Some(extensions);
    }
}

impl Materialize for Contact {
    const KIND: TargetKind = TargetKind::Contact;
}

impl Materialize for License {
    const KIND: TargetKind = TargetKind::License;
}

impl Converter {
    /// Materializes a flat mapping as a typed document node.
    pub fn materialize<T: Materialize>(&self, flat: FlatMap) -> Result<T, ConvertError> {
        self.materialize_with(flat, None)
    }

    /// Materializes a flat mapping as a typed document node, resolving
    /// default and enumerated values against the given enum capability.
    pub fn materialize_with<T: Materialize>(
        &self,
        flat: FlatMap,
        enum_info: Option<&EnumInfo>,
    ) -> Result<T, ConvertError> {
        let default_raw = flat
            .get("defaultValue")
            .and_then(Value::as_str)
            .map(str::to_string);
        let allowable = flat.get("allowableValues").and_then(Value::as_array).cloned();
        let extensions = flat.get("extensions").and_then(Value::as_object).cloned();

        let mut node = self.bind::<T>(&flat)?;

        if let Some(extensions) = extensions {
            let map: Map<String, Value> = extensions.into_iter().collect();
            node.set_extensions(Extensions::from(map));
        }

        if default_raw.is_some() || allowable.is_some() {
            let (schema_type, format) = self.derive_type_format(&flat, enum_info);
            if let Some(raw) = default_raw {
                match normalize(Some(&raw), schema_type.as_ref(), format.as_ref(), ArrayMode::Json)
                {
                    Ok(normalized) => node.set_default(normalized.into_json()),
                    Err(error) => {
                        tracing::warn!(
                            %error,
                            %raw,
                            "default value is not valid JSON, keeping the raw string"
                        );
                        node.set_default(Value::String(raw));
                    }
                }
            }
            if let Some(items) = allowable {
                let values: Vec<Value> = items
                    .iter()
                    .map(|item| {
                        let Some(raw) = item.as_str() else {
                            return item.clone();
                        };
                        match normalize(
                            Some(raw),
                            schema_type.as_ref(),
                            format.as_ref(),
                            ArrayMode::Json,
                        ) {
                            Ok(normalized) => normalized.into_json(),
                            Err(_) => Value::String(raw.to_string()),
                        }
                    })
                    .collect();
                if !values.is_empty() {
                    node.set_enum_values(values);
                }
            }
        }

        if self.settings().unknown_fields == UnknownFields::Strict {
            warn_unknown::<T>(&node, &flat);
        }

        Ok(node)
    }

    /// Normalizes a raw default value against a schema object's own type and
    /// format and stores the result on it. The raw string is kept when it
    /// does not parse.
    pub fn apply_default(
        &self,
        object: &mut Object,
        raw: &str,
        enum_info: Option<&EnumInfo>,
        mode: ArrayMode,
    ) {
        let (schema_type, format) = match enum_info {
            Some(info) => {
                let pair =
                    self.resolve_enum(info, object.schema_type.as_ref(), object.format.as_ref());
                (Some(pair.schema_type), pair.format)
            }
            None => (object.schema_type.clone(), object.format.clone()),
        };
        match normalize(Some(raw), schema_type.as_ref(), format.as_ref(), mode) {
            Ok(normalized) => {
                let value = normalized.into_json();
                object.default = if value.is_null() { None } else { Some(value) };
            }
            Err(error) => {
                tracing::warn!(%error, raw, "default value is not valid JSON, keeping the raw string");
                object.default = Some(Value::String(raw.to_string()));
            }
        }
    }

    /// Binds the flat mapping structurally. A response's media-type
    /// collection arrives spelled as a sequence or as a single entry map,
    /// neither of which binds onto the keyed collection, so `content` is
    /// diverted before the bind and rebuilt entry by entry.
    fn bind<T: Materialize>(&self, flat: &FlatMap) -> Result<T, ConvertError> {
        if T::KIND == TargetKind::Response && flat.contains_key("content") {
            return self.repair_response_content(flat);
        }
        serde_json::from_value::<T>(Value::Object(flat.clone())).map_err(|source| {
            ConvertError::StructuralMismatch {
                target: T::KIND,
                source,
            }
        })
    }

    fn repair_response_content<T: Materialize>(&self, flat: &FlatMap) -> Result<T, ConvertError> {
        let mut rest = flat.clone();
        let diverted = rest.remove("content");
        let mut node = serde_json::from_value::<T>(Value::Object(rest)).map_err(|source| {
            ConvertError::StructuralMismatch {
                target: T::KIND,
                source,
            }
        })?;

        let mut content = Content::new();
        match diverted {
            Some(Value::Array(entries)) => {
                for entry in entries {
                    self.insert_media_type(&mut content, entry);
                }
            }
            Some(entry) => self.insert_media_type(&mut content, entry),
            None => {}
        }
        node.set_content(content);
        Ok(node)
    }

    fn insert_media_type(&self, content: &mut Content, entry: Value) {
        let Value::Object(mut map) = entry else {
            tracing::warn!("media type entry is not a mapping, skipping it");
            return;
        };
        let name = match map.remove("mediaType") {
            Some(Value::String(name)) => name,
            _ => DEFAULT_MEDIA_TYPE.to_string(),
        };
        match self.materialize::<MediaType>(map) {
            Ok(media_type) => {
                content.insert(name, media_type);
            }
            Err(error) => {
                tracing::warn!(%error, media_type = name, "cannot convert media type entry, skipping it");
            }
        }
    }

    /// Derives the (type, format) pair the default and enumerated values
    /// normalize under, from the flat mapping's own declarations and the
    /// enum capability when one is supplied.
    fn derive_type_format(
        &self,
        flat: &FlatMap,
        enum_info: Option<&EnumInfo>,
    ) -> (Option<SchemaType>, Option<SchemaFormat>) {
        let declared_type = flat
            .get("type")
            .and_then(|value| serde_json::from_value::<SchemaType>(value.clone()).ok());
        let declared_format = flat
            .get("format")
            .and_then(|value| serde_json::from_value::<SchemaFormat>(value.clone()).ok());
        match enum_info {
            Some(info) => {
                let pair = self.resolve_enum(info, declared_type.as_ref(), declared_format.as_ref());
                (Some(pair.schema_type), pair.format)
            }
            None => (declared_type, declared_format),
        }
    }
}

/// Reports flat keys the bound node has no counterpart for. Repair-step
/// keys, vendor extension keys, and null values are expected and skipped.
fn warn_unknown<T: Materialize>(node: &T, flat: &FlatMap) {
    let Ok(Value::Object(bound)) = serde_json::to_value(node) else {
        return;
    };
    for (key, value) in flat {
        if REPAIR_KEYS.contains(&key.as_str())
            || key.starts_with("x-")
            || value.is_null()
            || bound.contains_key(key)
        {
            continue;
        }
        tracing::warn!(
            target_kind = %T::KIND,
            key,
            "flat value carries a field the target kind does not declare"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metadata::{Accessor, AccessorReturn, MetadataTree},
        settings::Settings,
    };
    use serde_json::json;

    fn flat_of(value: Value) -> FlatMap {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object literal, got {other}"),
        }
    }

    #[test]
    fn parameter_default_value_materializes_natively_typed() {
        //* Given
        let converter = Converter::default();
        let tree = MetadataTree::generic()
            .entry("name", "age")
            .entry("defaultValue", "25")
            .entry("type", "integer")
            .entry("format", "int32");

        //* When
        let parameter: Parameter = converter.convert(&tree).unwrap();

        //* Then
        assert_eq!(parameter.name, "age");
        assert_eq!(
            parameter.default,
            Some(json!(25)),
            "the default should be re-normalized to a native integer"
        );
    }

    #[test]
    fn response_with_singular_content_is_repaired() {
        //* Given
        let converter = Converter::default();
        let flat = flat_of(json!({
            "description": "A pet",
            "content": {
                "mediaType": "application/json",
                "schema": {"type": "object"}
            }
        }));

        //* When
        let response: Response = converter.materialize(flat).unwrap();

        //* Then
        assert_eq!(response.description.as_deref(), Some("A pet"));
        let content = response.content.expect("content should be rebuilt");
        assert_eq!(content.len(), 1, "singular content should produce exactly one entry");
        assert!(
            content.contains_key("application/json"),
            "the entry should be keyed by its declared media type"
        );
        assert!(content["application/json"].schema.is_some());
    }

    #[test]
    fn response_content_sequence_is_keyed_per_entry() {
        //* Given
        let converter = Converter::default();
        let flat = flat_of(json!({
            "description": "ok",
            "content": [
                {"mediaType": "text/plain", "schema": {"type": "string"}},
                {"mediaType": "application/xml", "schema": {"type": "object"}},
                {"schema": {"type": "integer"}}
            ]
        }));

        //* When
        let response: Response = converter.materialize(flat).unwrap();

        //* Then
        let content = response.content.expect("content should be rebuilt");
        assert_eq!(content.len(), 3);
        assert!(content.contains_key("text/plain"));
        assert!(content.contains_key("application/xml"));
        assert!(
            content.contains_key("application/json"),
            "entries without a media type should default to application/json"
        );
    }

    #[test]
    fn extensions_reattach_wholesale_without_key_filtering() {
        //* Given
        let converter = Converter::default();
        let flat = flat_of(json!({
            "name": "pets",
            "extensions": {"internal-id": 7, "x-owner": "platform"}
        }));

        //* When
        let tag: Tag = converter.materialize(flat).unwrap();

        //* Then
        let extensions = tag.extensions.expect("extensions should be attached");
        assert_eq!(
            extensions.get("internal-id"),
            Some(&json!(7)),
            "re-attachment should keep keys the wire filter would drop"
        );
        assert_eq!(extensions.get("x-owner"), Some(&json!("platform")));
    }

    #[test]
    fn unparseable_default_value_keeps_the_raw_string() {
        //* Given
        let converter = Converter::default();
        let flat = flat_of(json!({
            "name": "filter",
            "defaultValue": "{not json"
        }));

        //* When
        let parameter: Parameter = converter.materialize(flat).unwrap();

        //* Then
        assert_eq!(
            parameter.default,
            Some(json!("{not json")),
            "a default that fails to normalize should survive as its raw spelling"
        );
    }

    #[test]
    fn empty_default_value_clears_the_slot() {
        //* Given
        let converter = Converter::default();
        let flat = flat_of(json!({
            "name": "filter",
            "defaultValue": "",
            "type": "string"
        }));

        //* When
        let parameter: Parameter = converter.materialize(flat).unwrap();

        //* Then
        assert_eq!(parameter.default, None);
    }

    #[test]
    fn allowable_values_normalize_element_by_element() {
        //* Given
        let converter = Converter::default();
        let flat = flat_of(json!({
            "type": "integer",
            "format": "int32",
            "allowableValues": ["1", "2", "many"]
        }));

        //* When
        let schema: Schema = converter.materialize(flat).unwrap();

        //* Then
        let Schema::Object(object) = schema else {
            panic!("expected an object schema");
        };
        assert_eq!(
            object.enum_values,
            Some(vec![json!(1), json!(2), json!("many")]),
            "elements that fail to normalize should fall back individually"
        );
    }

    #[test]
    fn enum_capability_drives_default_normalization() {
        //* Given
        let converter = Converter::default();
        let info = EnumInfo::new("com.example.Priority").raw_value_accessor(Accessor::new(
            "getCode",
            AccessorReturn::Scalar {
                type_name: "int".to_string(),
                is_array: false,
            },
        ));
        let flat = flat_of(json!({"defaultValue": "2"}));

        //* When
        let schema: Schema = converter.materialize_with(flat, Some(&info)).unwrap();

        //* Then
        let Schema::Object(object) = schema else {
            panic!("expected an object schema");
        };
        assert_eq!(
            object.default,
            Some(json!(2)),
            "the enum's raw-value accessor should select the integer parse"
        );
    }

    #[test]
    fn structural_mismatch_is_fatal() {
        //* Given
        let converter = Converter::default();
        let flat = flat_of(json!({"version": "1.0.0"}));

        //* When
        let info = converter.materialize::<Info>(flat);

        //* Then
        let error = info.expect_err("a missing required field should fail the conversion");
        assert!(
            matches!(
                error,
                ConvertError::StructuralMismatch {
                    target: TargetKind::Info,
                    ..
                }
            ),
            "the error should carry the target kind, got {error}"
        );
    }

    #[test]
    fn strict_mode_still_materializes_unknown_fields() {
        //* Given
        let converter = Converter::new(Settings::new().unknown_fields(UnknownFields::Strict));
        let flat = flat_of(json!({
            "name": "pets",
            "nonsense": "ignored"
        }));

        //* When
        let tag: Tag = converter.materialize(flat).unwrap();

        //* Then
        assert_eq!(tag.name, "pets", "unknown fields warn but never fail the conversion");
    }

    #[test]
    fn apply_default_uses_the_schema_own_type() {
        //* Given
        let converter = Converter::default();
        let mut object = Object::new()
            .schema_type(SchemaType::Number)
            .format(SchemaFormat::KnownFormat(oasforge_core::KnownFormat::Double));

        //* When
        converter.apply_default(&mut object, "3.14", None, ArrayMode::Json);

        //* Then
        assert_eq!(object.default, Some(json!(3.14)));
    }

    #[test]
    fn apply_default_splits_simple_arrays() {
        //* Given
        let converter = Converter::default();
        let mut object = Object::new().schema_type(SchemaType::Array);

        //* When
        converter.apply_default(&mut object, "a,b", None, ArrayMode::Simple);

        //* Then
        assert_eq!(object.default, Some(json!(["a", "b"])));
    }
}
