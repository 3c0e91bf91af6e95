//! Core type definitions for the Home Studio project engine.
//!
//! This crate defines the fundamental types shared by every other crate:
//! - Opaque entity identifiers (UUID v7, regenerated on every load)
//! - Plugin descriptors and class metadata (attributes, actions)
//!
//! Opaque ids are process-local and intentionally carry no serde support:
//! they must never appear in a persisted project file. The persisted identity
//! of an entity is its human-assigned string id, owned by the entity itself.

mod ids;
mod plugin;

pub use ids::{
    BindingId, ComponentId, ControlId, ImageId, ItemId, OperationId, ProjectId, WindowId,
};
pub use plugin::{ActionSpec, AttributeSpec, AttributeType, PluginClass, PluginDescriptor, PluginUsage};
