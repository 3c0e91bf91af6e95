//! Error types for the sync layer.

use thiserror::Error;

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors that can occur while planning or executing a sync.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Deploy attempted on a dirty project.
    #[error("project must be saved before deploy")]
    NotSaved,

    /// Resource store I/O failure, surfaced verbatim.
    #[error("remote error: {0}")]
    Remote(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The project failed validation; save is blocked.
    #[error(transparent)]
    Validation(#[from] studio_validate::ValidationError),

    /// Persisted content error.
    #[error(transparent)]
    Format(#[from] studio_format::FormatError),

    /// Model mutation error.
    #[error(transparent)]
    Model(#[from] studio_model::ModelError),
}
