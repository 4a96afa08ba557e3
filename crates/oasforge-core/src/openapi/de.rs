//! Lenient deserialization helpers for scalar fields.
//!
//! Flattened metadata often carries numbers and booleans as raw strings
//! (`"true"`, `"25"`). These helpers accept both the native JSON scalar and its
//! string spelling, so document nodes can be built from either source. A string
//! that does not parse is still a deserialization error.

use serde::Deserialize;

pub(crate) fn bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        Str(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(value)) => Ok(Some(value)),
        Some(BoolOrString::Str(raw)) if raw.eq_ignore_ascii_case("true") => Ok(Some(true)),
        Some(BoolOrString::Str(raw)) if raw.eq_ignore_ascii_case("false") => Ok(Some(false)),
        Some(BoolOrString::Str(raw)) => Err(serde::de::Error::custom(format!(
            "invalid boolean value: {raw:?}"
        ))),
    }
}

pub(crate) fn f64_or_string<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Str(String),
    }

    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(value)) => Ok(Some(value)),
        Some(NumberOrString::Str(raw)) => raw
            .parse::<f64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid number value: {raw:?}"))),
    }
}

pub(crate) fn usize_or_string<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(usize),
        Str(String),
    }

    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(value)) => Ok(Some(value)),
        Some(NumberOrString::Str(raw)) => raw
            .parse::<usize>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid integer value: {raw:?}"))),
    }
}
