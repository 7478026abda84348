use thiserror::Error;

use crate::schema::RecordKind;

/// Errors raised by the metadata engine.
///
/// Per-field decode problems during deserialization are not errors: they are
/// logged and the field falls back to a safe value.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The tree node's tag is neither `game` nor `folder`
    #[error("Unrecognized node kind: '{0}'")]
    UnrecognizedNodeKind(String),

    /// The key is not part of the record kind's schema
    #[error("Unknown {kind} field: '{key}'")]
    UnknownField { kind: RecordKind, key: String },

    /// The value does not match the field's grammar
    #[error("Invalid value for '{key}': '{value}'")]
    InvalidValue { key: String, value: String },
}

impl MetadataError {
    pub fn unrecognized_node(tag: impl Into<String>) -> Self {
        Self::UnrecognizedNodeKind(tag.into())
    }

    pub fn unknown_field(kind: RecordKind, key: impl Into<String>) -> Self {
        Self::UnknownField {
            kind,
            key: key.into(),
        }
    }

    pub fn invalid_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: value.into(),
        }
    }
}
