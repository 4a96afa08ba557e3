//! Conversion settings.

/// Immutable settings governing a [`Converter`](crate::Converter).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    /// How flat keys with no counterpart in the target kind are handled.
    pub unknown_fields: UnknownFields,
    /// How enum constants are serialized into documents.
    pub enum_values: EnumValues,
}

impl Settings {
    /// Creates settings with the default policies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the unknown-field policy.
    pub fn unknown_fields(mut self, unknown_fields: UnknownFields) -> Self {
        self.unknown_fields = unknown_fields;
        self
    }

    /// Sets the enum serialization policy.
    pub fn enum_values(mut self, enum_values: EnumValues) -> Self {
        self.enum_values = enum_values;
        self
    }
}

/// Policy for flat keys the target kind has no field for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownFields {
    /// Ignore unknown keys.
    #[default]
    Lenient,
    /// Warn about unknown keys, without failing the conversion.
    Strict,
}

/// Policy for serializing enum constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumValues {
    /// Serialize the constant's raw value, as reported by its accessor.
    #[default]
    RawValue,
    /// Serialize the constant's declared name.
    Name,
}
