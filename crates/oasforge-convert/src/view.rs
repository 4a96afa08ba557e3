//! Rendering option transformation.
//!
//! Documentation renderers are configured through flat string properties.
//! [`ViewOptions::from_properties`] parses the properties scoped to one
//! renderer into typed option values, driven by a converter-per-key table
//! the renderer declares.

use std::fmt;

use indexmap::IndexMap;

/// A typed rendering option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// A boolean option.
    Bool(bool),
    /// An unsigned numeric option.
    UInt(u64),
    /// A plain string option.
    Str(String),
    /// A string option rendered inside literal quotes.
    QuotedStr(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(value) => write!(f, "{value}"),
            OptionValue::UInt(value) => write!(f, "{value}"),
            OptionValue::Str(value) => f.write_str(value),
            OptionValue::QuotedStr(value) => write!(f, "\"{value}\""),
        }
    }
}

/// The converter an option key parses through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Boolean, any spelling other than `true` reads as `false`.
    Bool,
    /// Unsigned numeric.
    UInt,
    /// Plain string, kept as written.
    Str,
    /// String rendered inside literal quotes.
    QuotedStr,
    /// One of an enumerated set of uppercase spellings.
    Enum(&'static [&'static str]),
}

impl OptionKind {
    fn parse(self, raw: &str) -> Option<OptionValue> {
        match self {
            OptionKind::Bool => Some(OptionValue::Bool(raw.eq_ignore_ascii_case("true"))),
            OptionKind::UInt => raw.parse().ok().map(OptionValue::UInt),
            OptionKind::Str => Some(OptionValue::Str(raw.to_string())),
            OptionKind::QuotedStr => Some(OptionValue::QuotedStr(raw.to_string())),
            OptionKind::Enum(allowed) => {
                let spelling = raw.to_ascii_uppercase();
                allowed
                    .iter()
                    .find(|candidate| **candidate == spelling)
                    .map(|candidate| OptionValue::Str((*candidate).to_string()))
            }
        }
    }
}

/// Typed rendering options parsed from flat string properties.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewOptions {
    options: IndexMap<String, OptionValue>,
}

impl ViewOptions {
    /// Parses the properties scoped under `prefix` into typed options.
    ///
    /// Defaults seed the result first, so any matching property overrides
    /// its default. Properties outside the prefix, and prefixed keys without
    /// a table entry, are skipped. A value its converter cannot parse is
    /// logged and skipped, leaving the default (if any) in place.
    pub fn from_properties(
        prefix: &str,
        table: &[(&str, OptionKind)],
        defaults: &[(&str, OptionValue)],
        properties: &IndexMap<String, String>,
    ) -> Self {
        let mut options: IndexMap<String, OptionValue> = defaults
            .iter()
            .map(|(key, value)| ((*key).to_string(), value.clone()))
            .collect();
        for (key, raw) in properties {
            let Some(name) = key.strip_prefix(prefix) else {
                continue;
            };
            let Some((_, kind)) = table.iter().find(|(option, _)| *option == name) else {
                continue;
            };
            match kind.parse(raw) {
                Some(value) => {
                    options.insert(name.to_string(), value);
                }
                None => {
                    tracing::warn!(option = name, raw, "rendering option does not parse, skipping it");
                }
            }
        }
        Self { options }
    }

    /// Returns the parsed value of an option.
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.options.get(name)
    }

    /// Iterates the options in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &OptionValue)> {
        self.options.iter()
    }

    /// Returns the number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns `true` if no option is set.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Renders the options as a space-joined `key="value"` attribute string.
    pub fn to_html_attributes(&self) -> String {
        self.options
            .iter()
            .map(|(key, value)| format!("{key}=\"{value}\""))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
