//! Error types for the model layer.

use crate::ProjectKind;
use studio_types::{BindingId, ComponentId, ControlId, ImageId, WindowId};
use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur when mutating the project graph.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Deletion blocked by live references. `sites` enumerates every
    /// reference site, one path per line.
    #[error("the {subject} is used:\n{}", .sites.join("\n"))]
    Usage { subject: String, sites: Vec<String> },

    /// Operation addressed to the wrong project kind.
    #[error("operation requires a {expected} project")]
    KindMismatch { expected: ProjectKind },

    #[error("unknown component: {0}")]
    UnknownComponent(ComponentId),

    #[error("unknown image: {0}")]
    UnknownImage(ImageId),

    #[error("unknown window: {0}")]
    UnknownWindow(WindowId),

    #[error("unknown control: {0}")]
    UnknownControl(ControlId),

    #[error("unknown binding: {0}")]
    UnknownBinding(BindingId),
}
