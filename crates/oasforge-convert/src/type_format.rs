//! Schema type and format resolution for source-language scalar types.

use oasforge_core::{KnownFormat, SchemaFormat, SchemaType};

use crate::{
    converter::Converter,
    metadata::{Accessor, AccessorReturn, EnumInfo},
    settings::EnumValues,
};

/// A resolved schema type together with its format, when one applies.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeFormatPair {
    /// The schema type.
    pub schema_type: SchemaType,
    /// The schema format.
    pub format: Option<SchemaFormat>,
}

impl TypeFormatPair {
    fn known(schema_type: SchemaType, format: Option<KnownFormat>) -> Self {
        Self {
            schema_type,
            format: format.map(SchemaFormat::from),
        }
    }
}

/// Resolves a source-language scalar type name to a schema type and format.
///
/// The table covers the qualified names the inspection layer reports for
/// scalar types; unknown names resolve to a plain object with no format. The
/// resolution is a pure lookup, `is_array` only disambiguates byte payloads,
/// which map to a base64 string when declared as an array.
pub fn resolve(type_name: &str, is_array: bool) -> TypeFormatPair {
    match type_name {
        "java.lang.String" | "char" | "java.lang.Character" => {
            TypeFormatPair::known(SchemaType::String, None)
        }
        "boolean" | "java.lang.Boolean" => TypeFormatPair::known(SchemaType::Boolean, None),
        "int" | "java.lang.Integer" | "short" | "java.lang.Short" => {
            TypeFormatPair::known(SchemaType::Integer, Some(KnownFormat::Int32))
        }
        "long" | "java.lang.Long" => {
            TypeFormatPair::known(SchemaType::Integer, Some(KnownFormat::Int64))
        }
        "java.math.BigInteger" => TypeFormatPair::known(SchemaType::Integer, None),
        "float" | "java.lang.Float" => {
            TypeFormatPair::known(SchemaType::Number, Some(KnownFormat::Float))
        }
        "double" | "java.lang.Double" => {
            TypeFormatPair::known(SchemaType::Number, Some(KnownFormat::Double))
        }
        "java.lang.Number" | "java.math.BigDecimal" => {
            TypeFormatPair::known(SchemaType::Number, None)
        }
        "byte" | "java.lang.Byte" => {
            if is_array {
                TypeFormatPair::known(SchemaType::String, Some(KnownFormat::Byte))
            } else {
                TypeFormatPair::known(SchemaType::Integer, Some(KnownFormat::Int32))
            }
        }
        "java.net.URI" => TypeFormatPair::known(SchemaType::String, Some(KnownFormat::Uri)),
        "java.net.URL" => TypeFormatPair::known(SchemaType::String, Some(KnownFormat::Url)),
        "java.util.UUID" => TypeFormatPair::known(SchemaType::String, Some(KnownFormat::Uuid)),
        "java.io.File" => TypeFormatPair::known(SchemaType::String, Some(KnownFormat::Binary)),
        "java.time.LocalDate" => TypeFormatPair::known(SchemaType::String, Some(KnownFormat::Date)),
        "java.time.LocalTime" => {
            TypeFormatPair::known(SchemaType::String, Some(KnownFormat::PartialTime))
        }
        "java.util.Date"
        | "java.util.Calendar"
        | "java.time.Instant"
        | "java.time.LocalDateTime"
        | "java.time.OffsetDateTime"
        | "java.time.ZonedDateTime"
        | "javax.xml.datatype.XMLGregorianCalendar" => {
            TypeFormatPair::known(SchemaType::String, Some(KnownFormat::DateTime))
        }
        _ => TypeFormatPair::known(SchemaType::Object, None),
    }
}

impl Converter {
    /// Resolves the schema type and format for an enum type.
    ///
    /// An explicitly declared non-string type wins unchanged. Otherwise the
    /// enum's first raw-value accessor decides: one returning another enum
    /// recurses into that enum, one returning a scalar resolves through the
    /// scalar table. An enum without accessors, or one serialized by constant
    /// name, stays a string.
    pub fn resolve_enum(
        &self,
        info: &EnumInfo,
        declared_type: Option<&SchemaType>,
        declared_format: Option<&SchemaFormat>,
    ) -> TypeFormatPair {
        if let Some(declared) = declared_type
            && *declared != SchemaType::String
        {
            return TypeFormatPair {
                schema_type: declared.clone(),
                format: declared_format.cloned(),
            };
        }
        if self.settings().enum_values == EnumValues::Name {
            return TypeFormatPair {
                schema_type: SchemaType::String,
                format: declared_format.cloned(),
            };
        }

        let accessors = info.raw_value_accessors();
        if accessors.len() > 1 {
            tracing::warn!(
                enum_type = info.type_name(),
                accessor = accessors[0].name(),
                "multiple raw value accessors declared, using the first"
            );
        }
        match accessors.first().map(Accessor::returns) {
            Some(AccessorReturn::Scalar { type_name, is_array }) => resolve(type_name, *is_array),
            Some(AccessorReturn::Enum(inner)) => self.resolve_enum(inner, None, declared_format),
            None => TypeFormatPair {
                schema_type: SchemaType::String,
                format: declared_format.cloned(),
            },
        }
    }
}
