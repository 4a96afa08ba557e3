//! Error types for the conversion engine.

use crate::materialize::TargetKind;

/// A fatal conversion failure.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The flattened metadata does not structurally match the target kind.
    #[error("cannot convert flattened metadata to {target}: {source}")]
    StructuralMismatch {
        /// The document kind the conversion targeted.
        target: TargetKind,
        /// The underlying structural error.
        source: serde_json::Error,
    },
}

/// A recoverable failure to parse an embedded JSON value.
///
/// Callers are expected to catch this and fall back to carrying the raw
/// string; it never aborts a conversion on its own.
#[derive(Debug, thiserror::Error)]
#[error("malformed embedded JSON: {0}")]
pub struct ParseError(#[from] serde_json::Error);
