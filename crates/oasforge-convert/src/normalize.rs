//! Raw string normalization into typed values.
//!
//! Declared metadata values arrive as strings regardless of their schema
//! type. [`normalize`] turns such a string into the native value its schema
//! type and format call for. The only failure surfaced to the caller is a
//! malformed embedded JSON object; every other parse failure is logged and
//! degrades to the raw string, downstream consumers always receive a value.

use rust_decimal::Decimal;
use serde_json::Value;

use oasforge_core::{KnownFormat, SchemaFormat, SchemaType};

use crate::error::ParseError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S%.f";

/// How an array-typed raw value is spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrayMode {
    /// A JSON array literal.
    #[default]
    Json,
    /// A comma-separated list of plain strings.
    Simple,
}

/// The outcome of normalizing a raw string.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    /// No value: absent input, or an empty string under a typed parse.
    Null,
    /// A successfully typed value.
    Value(TypedValue),
    /// The raw spelling, kept verbatim after a failed typed parse.
    Fallback(String),
}

impl Normalized {
    /// Converts the outcome into its JSON representation.
    pub fn into_json(self) -> Value {
        match self {
            Normalized::Null => Value::Null,
            Normalized::Value(value) => value.into_json(),
            Normalized::Fallback(raw) => Value::String(raw),
        }
    }
}

/// A raw string parsed into the native value its schema type calls for.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    /// A plain string, kept as written.
    String(String),
    /// A `uri`-format string.
    Uri(url::Url),
    /// A `url`-format string.
    Url(url::Url),
    /// A `uuid`-format string.
    Uuid(uuid::Uuid),
    /// A `date`-format string.
    Date(chrono::NaiveDate),
    /// A `date-time`-format string.
    DateTime(chrono::DateTime<chrono::FixedOffset>),
    /// A `partial-time`-format string.
    Time(chrono::NaiveTime),
    /// A boolean.
    Boolean(bool),
    /// An `int32`-format integer.
    Int32(i32),
    /// An `int64`-format integer.
    Int64(i64),
    /// An integer of unspecified width.
    Integer(serde_json::Number),
    /// A `float`-format number.
    Float(f32),
    /// A `double`-format number.
    Double(f64),
    /// A number of unspecified width.
    Decimal(Decimal),
    /// A JSON array literal.
    Array(Vec<Value>),
    /// A comma-separated list of plain strings.
    StringList(Vec<String>),
    /// An embedded JSON object.
    Object(serde_json::Map<String, Value>),
}

impl TypedValue {
    /// Converts the typed value into its JSON representation.
    pub fn into_json(self) -> Value {
        match self {
            TypedValue::String(value) => Value::String(value),
            TypedValue::Uri(value) => Value::String(value.to_string()),
            TypedValue::Url(value) => Value::String(value.to_string()),
            TypedValue::Uuid(value) => Value::String(value.to_string()),
            TypedValue::Date(value) => Value::String(value.format(DATE_FORMAT).to_string()),
            TypedValue::DateTime(value) => Value::String(value.to_rfc3339()),
            TypedValue::Time(value) => Value::String(value.format(TIME_FORMAT).to_string()),
            TypedValue::Boolean(value) => Value::Bool(value),
            TypedValue::Int32(value) => Value::Number(value.into()),
            TypedValue::Int64(value) => Value::Number(value.into()),
            TypedValue::Integer(value) => Value::Number(value),
            TypedValue::Float(value) => {
                serde_json::Number::from_f64(f64::from(value)).map_or(Value::Null, Value::Number)
            }
            TypedValue::Double(value) => {
                serde_json::Number::from_f64(value).map_or(Value::Null, Value::Number)
            }
            TypedValue::Decimal(value) => value
                .to_string()
                .parse::<serde_json::Number>()
                .map_or_else(|_| Value::String(value.to_string()), Value::Number),
            TypedValue::Array(items) => Value::Array(items),
            TypedValue::StringList(items) => {
                Value::Array(items.into_iter().map(Value::String).collect())
            }
            TypedValue::Object(map) => Value::Object(map),
        }
    }
}

/// Normalizes a raw string into the value its schema type and format call
/// for.
///
/// An absent value is `Null`, never an error. An object (or untyped) value
/// parses as embedded JSON and surfaces [`ParseError`] when malformed, the
/// one recoverable failure of this function. Everything downstream of those
/// two cases parses under an internal catch: a value that does not parse is
/// logged and kept as its raw spelling.
pub fn normalize(
    raw: Option<&str>,
    schema_type: Option<&SchemaType>,
    format: Option<&SchemaFormat>,
    mode: ArrayMode,
) -> Result<Normalized, ParseError> {
    let Some(raw) = raw else {
        return Ok(Normalized::Null);
    };
    let Some(schema_type) = schema_type else {
        return parse_object(raw);
    };
    if *schema_type == SchemaType::Object {
        return parse_object(raw);
    }
    if *schema_type == SchemaType::Array && mode == ArrayMode::Simple {
        return Ok(Normalized::Value(TypedValue::StringList(split_simple(raw))));
    }
    if raw.is_empty() {
        return Ok(Normalized::Null);
    }
    Ok(match schema_type {
        SchemaType::String => normalize_string(raw, format),
        SchemaType::Boolean => normalize_boolean(raw, format),
        SchemaType::Array => normalize_array(raw, format),
        SchemaType::Integer => normalize_integer(raw, format),
        SchemaType::Number => normalize_number(raw, format),
        // Unrecognized combinations keep the raw spelling unchanged.
        _ => Normalized::Value(TypedValue::String(raw.to_string())),
    })
}

fn parse_object(raw: &str) -> Result<Normalized, ParseError> {
    let map = serde_json::from_str::<serde_json::Map<String, Value>>(raw)?;
    Ok(Normalized::Value(TypedValue::Object(map)))
}

/// Splits a comma-separated value the way the upstream declaration syntax
/// does: trailing empty segments are dropped, but a value with no separator
/// at all is kept verbatim, empty or not.
fn split_simple(raw: &str) -> Vec<String> {
    let mut parts: Vec<String> = raw.split(',').map(str::to_string).collect();
    if parts.len() > 1 {
        while parts.last().is_some_and(String::is_empty) {
            parts.pop();
        }
    }
    parts
}

fn normalize_string(raw: &str, format: Option<&SchemaFormat>) -> Normalized {
    let parsed = match format {
        Some(SchemaFormat::KnownFormat(KnownFormat::Uri)) => {
            url::Url::parse(raw).ok().map(TypedValue::Uri)
        }
        Some(SchemaFormat::KnownFormat(KnownFormat::Url)) => {
            url::Url::parse(raw).ok().map(TypedValue::Url)
        }
        Some(SchemaFormat::KnownFormat(KnownFormat::Uuid)) => {
            uuid::Uuid::parse_str(raw).ok().map(TypedValue::Uuid)
        }
        Some(SchemaFormat::KnownFormat(KnownFormat::Date)) => {
            chrono::NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .ok()
                .map(TypedValue::Date)
        }
        Some(SchemaFormat::KnownFormat(KnownFormat::DateTime)) => {
            chrono::DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(TypedValue::DateTime)
        }
        Some(SchemaFormat::KnownFormat(KnownFormat::PartialTime)) => {
            chrono::NaiveTime::parse_from_str(raw, TIME_FORMAT)
                .ok()
                .map(TypedValue::Time)
        }
        _ => return Normalized::Value(TypedValue::String(raw.to_string())),
    };
    parsed.map_or_else(|| fallback(raw, &SchemaType::String, format), Normalized::Value)
}

fn normalize_boolean(raw: &str, format: Option<&SchemaFormat>) -> Normalized {
    if raw.eq_ignore_ascii_case("true") {
        Normalized::Value(TypedValue::Boolean(true))
    } else if raw.eq_ignore_ascii_case("false") {
        Normalized::Value(TypedValue::Boolean(false))
    } else {
        fallback(raw, &SchemaType::Boolean, format)
    }
}

fn normalize_array(raw: &str, format: Option<&SchemaFormat>) -> Normalized {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => Normalized::Value(TypedValue::Array(items)),
        Ok(Value::Null) | Err(_) => fallback(raw, &SchemaType::Array, format),
        // a lone JSON scalar reads as a one-element list
        Ok(single) => Normalized::Value(TypedValue::Array(vec![single])),
    }
}

fn normalize_integer(raw: &str, format: Option<&SchemaFormat>) -> Normalized {
    match format {
        Some(SchemaFormat::KnownFormat(KnownFormat::Int32)) => match raw.parse::<i32>() {
            Ok(value) => Normalized::Value(TypedValue::Int32(value)),
            Err(_) => fallback(raw, &SchemaType::Integer, format),
        },
        Some(SchemaFormat::KnownFormat(KnownFormat::Int64)) => match raw.parse::<i64>() {
            Ok(value) => Normalized::Value(TypedValue::Int64(value)),
            Err(_) => fallback(raw, &SchemaType::Integer, format),
        },
        _ => raw
            .parse::<i128>()
            .ok()
            .and_then(serde_json::Number::from_i128)
            .map_or_else(
                || fallback(raw, &SchemaType::Integer, format),
                |number| Normalized::Value(TypedValue::Integer(number)),
            ),
    }
}

fn normalize_number(raw: &str, format: Option<&SchemaFormat>) -> Normalized {
    match format {
        Some(SchemaFormat::KnownFormat(KnownFormat::Float)) => match raw.parse::<f32>() {
            Ok(value) if value.is_finite() => Normalized::Value(TypedValue::Float(value)),
            _ => fallback(raw, &SchemaType::Number, format),
        },
        Some(SchemaFormat::KnownFormat(KnownFormat::Double)) => match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => Normalized::Value(TypedValue::Double(value)),
            _ => fallback(raw, &SchemaType::Number, format),
        },
        _ => raw
            .parse::<Decimal>()
            .or_else(|_| Decimal::from_scientific(raw))
            .map_or_else(
                |_| fallback(raw, &SchemaType::Number, format),
                |value| Normalized::Value(TypedValue::Decimal(value)),
            ),
    }
}

fn fallback(raw: &str, schema_type: &SchemaType, format: Option<&SchemaFormat>) -> Normalized {
    tracing::warn!(
        raw,
        ?schema_type,
        ?format,
        "value does not parse under its declared type, keeping the raw string"
    );
    Normalized::Fallback(raw.to_string())
}
