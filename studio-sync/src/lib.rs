//! Import reconciliation and deploy planning.
//!
//! Both halves of this crate consume a built project graph and emit ordered
//! operation lists:
//! - [`import`] diffs the current wiring against a candidate component set
//!   and plans the edits (and binding deletions) that reconcile them.
//! - [`deploy`] computes the full list of remote resource writes and stale-key
//!   deletions representing a project snapshot.
//!
//! Plans are data; execution goes through the collaborator interfaces —
//! [`ResourceStore`] for the remote namespace, [`CommandSink`] for the
//! surrounding command layer — or the [`service`] helpers, which also carry
//! the save wrapper (validate-then-serialize on one snapshot).

pub mod deploy;
mod error;
pub mod import;
mod metadata;
mod operations;
pub mod service;
mod store;

pub use deploy::{plan_deploy, DeployPlan};
pub use error::{SyncError, SyncResult};
pub use import::{
    candidates_from_instances, candidates_from_vpanel, plan_import, CandidateComponent,
    ComponentInstance, ImportPlan,
};
pub use metadata::MetadataProvider;
pub use operations::{CommandSink, DeployOperation, ImportOperation};
pub use store::{MemoryResourceStore, ResourceStore};
