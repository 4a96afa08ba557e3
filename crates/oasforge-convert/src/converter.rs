//! The conversion engine handle.

use crate::{
    error::ConvertError,
    flatten::flatten,
    materialize::Materialize,
    metadata::{EnumInfo, MetadataTree},
    settings::Settings,
};

/// The metadata-to-document conversion engine.
///
/// A converter holds only immutable settings, so it is cheap to clone and
/// safe to share across threads; every conversion is an independent
/// in-memory transform of the tree it is handed.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    settings: Settings,
}

impl Converter {
    /// Creates a converter with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Returns the converter's settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Converts a metadata tree into a typed document node.
    pub fn convert<T: Materialize>(&self, tree: &MetadataTree) -> Result<T, ConvertError> {
        self.materialize(flatten(tree))
    }

    /// Converts a metadata tree into a typed document node, resolving
    /// default and enumerated values against the given enum capability.
    pub fn convert_with<T: Materialize>(
        &self,
        tree: &MetadataTree,
        enum_info: Option<&EnumInfo>,
    ) -> Result<T, ConvertError> {
        self.materialize_with(flatten(tree), enum_info)
    }
}
