//! In-memory project model for Home Studio.
//!
//! Defines the entity graph a loaded project becomes:
//! - [`Project`] — name, timestamps, dirty flag, and the kind-specific graph
//! - [`UiProject`] — components, images, windows (with controls), default windows
//! - [`VpanelProject`] — components and bindings
//!
//! Collections are keyed by opaque ids ([`studio_types`] UUID v7 newtypes),
//! so iteration follows creation order. Cross-references between entities are
//! opaque ids too, resolved against the owning project's collections; a
//! reference may dangle after a mutation — the validator reports that, the
//! model does not enforce it eagerly.
//!
//! The model never mutates itself: every change goes through a named
//! operation issued by the surrounding command layer. Mutations are
//! synchronous and atomic; anything that can fail returns a typed
//! [`ModelError`] before touching state.

mod binding;
mod component;
mod error;
mod image;
mod project;
mod usage;
mod window;

pub use binding::Binding;
pub use component::Component;
pub use error::{ModelError, ModelResult};
pub use image::Image;
pub use project::{Project, ProjectData, ProjectKind, UiProject, VpanelProject};
pub use window::{
    ActionSlot, Control, ControlAction, ControlContent, ControlContentKind, ControlDisplay,
    ControlText, DisplayMapping, TextContextItem, Window,
};
