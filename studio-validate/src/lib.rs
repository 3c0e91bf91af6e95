//! Structural validation of project graphs.
//!
//! [`validate`] runs every invariant check and appends every violation it
//! finds — it never stops at the first failure. Messages are human-readable
//! and name the offending entity path (`On window w1: on control c2: …`).
//! An empty message list means the project may be saved.
//!
//! Checked invariants:
//! 1. Persisted ids present and unique among siblings at every scope.
//! 2. Every cross-reference resolves to an existing entity or is null.
//! 3. Desktop and mobile default windows are set (UI projects).
//! 4. Enum-typed display maps have unique values.
//! 5. Range-typed display maps are valid, inside the attribute's declared
//!    bounds, and mutually non-overlapping.

mod ids;
mod ui;
mod vpanel;

use studio_model::{Project, ProjectData};
use thiserror::Error;

/// Aggregated validation failure; blocks save, nothing else.
#[derive(Debug, Error)]
#[error("project failed validation:\n{}", .messages.join("\n"))]
pub struct ValidationError {
    pub messages: Vec<String>,
}

/// Runs all checks and returns every violation found.
pub fn validate(project: &Project) -> Vec<String> {
    let mut msgs = Vec::new();

    if project.name.is_empty() {
        msgs.push("Project has no name".to_string());
    }

    match &project.data {
        ProjectData::Ui(ui) => ui::validate(ui, &mut msgs),
        ProjectData::Vpanel(vpanel) => vpanel::validate(vpanel, &mut msgs),
    }

    msgs
}

/// Returns `Err(ValidationError)` when [`validate`] finds anything.
pub fn ensure_valid(project: &Project) -> Result<(), ValidationError> {
    let messages = validate(project);
    if messages.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { messages })
    }
}
