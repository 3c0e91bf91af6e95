//! Error types for the format layer.

use studio_model::ProjectKind;
use thiserror::Error;

/// Result type for format operations.
pub type FormatResult<T> = Result<T, FormatError>;

/// Errors raised while loading or serializing persisted content.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Content is not parseable or a required field is missing.
    #[error("malformed project content: {0}")]
    Parse(#[from] serde_json::Error),

    /// A control carries both or neither of its content variants.
    #[error("on window {window}: control {control} must have exactly one of text or display")]
    ControlContent { window: String, control: String },

    /// Serialization addressed to the wrong project kind.
    #[error("operation requires a {expected} project")]
    WrongKind { expected: ProjectKind },
}
