//! Operation records emitted by the reconciler and the deploy planner.
//!
//! Plans are inert data: the surrounding command layer (or the [`crate::service`]
//! helpers) executes them. Import operations address entities by opaque id —
//! they are only meaningful against the exact project instance they were
//! planned for.

use studio_model::ActionSlot;
use studio_types::{BindingId, ComponentId, ControlId, ItemId, OperationId, PluginDescriptor, WindowId};

/// One reconciliation edit.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportOperation {
    /// Remove an incompatible component-action binding from a control slot.
    DeleteControlAction {
        window: WindowId,
        control: ControlId,
        slot: ActionSlot,
    },
    /// Remove an incompatible text-context item.
    DeleteControlContext {
        window: WindowId,
        control: ControlId,
        item: ItemId,
    },
    /// Clear an incompatible display binding (component + attribute).
    DeleteControlDisplay { window: WindowId, control: ControlId },
    /// Remove an incompatible VPanel binding.
    DeleteBinding { binding: BindingId },
    /// Replace an existing component's plugin, keeping its opaque id — and
    /// therefore every still-valid binding to it.
    ReplacePlugin {
        component: ComponentId,
        plugin: PluginDescriptor,
    },
    /// Create a component for a candidate with no existing counterpart.
    CreateComponent { id: String, plugin: PluginDescriptor },
    /// Delete a component absent from the candidate set. Deletion cascades
    /// over any binding still referencing it, so every planned binding
    /// deletion precedes this.
    DeleteComponent { component: ComponentId },
}

/// One planned remote resource mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct DeployOperation {
    pub uid: OperationId,
    /// Strictly increasing emission index, 1..N. Enabled operations must be
    /// executed in non-decreasing order.
    pub order: u32,
    /// The caller may disable individual operations before execution.
    pub enabled: bool,
    pub description: String,
    pub key: String,
    /// Resource content; empty content deletes the key.
    pub content: String,
}

impl DeployOperation {
    pub(crate) fn new(order: u32, key: String, content: String) -> Self {
        let verb = if content.is_empty() { "Delete" } else { "Set" };
        Self {
            uid: OperationId::new(),
            order,
            enabled: true,
            description: format!("{verb} resource {key}"),
            key,
            content,
        }
    }

    /// Returns true when this operation deletes its key.
    pub fn is_delete(&self) -> bool {
        self.content.is_empty()
    }
}

/// Command-layer collaborator: receives planned operations for execution and
/// for propagating the resulting mutations into any external view layer.
pub trait CommandSink {
    fn import_operation(&mut self, operation: &ImportOperation);
    fn deploy_operation(&mut self, operation: &DeployOperation);
}
