//! Deploy planning.
//!
//! Computes the ordered list of remote resource mutations representing a
//! full project snapshot: stale-key deletions first, then one write per
//! entity, then (UI projects) the `default_window` write. The remote key
//! listing is a best-effort snapshot read once before planning — nothing
//! coordinates against concurrent writers to the same namespace.

use crate::error::{SyncError, SyncResult};
use crate::operations::{CommandSink, DeployOperation};
use serde::Serialize;
use std::collections::HashSet;
use studio_format::schema::{BindingSchema, ComponentSchema, WindowSchema};
use studio_format::{serialize_vpanel, window_to_schema};
use studio_model::{Project, ProjectData, UiProject};
use tracing::debug;

/// An ordered deploy plan against one remote entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeployPlan {
    /// The remote entity the plan targets. Always passed in explicitly,
    /// never resolved from ambient state.
    pub entity_id: String,
    pub operations: Vec<DeployOperation>,
}

impl DeployPlan {
    /// Hands every planned operation to the command sink, in order.
    pub fn submit(&self, sink: &mut dyn CommandSink) {
        for operation in &self.operations {
            sink.deploy_operation(operation);
        }
    }

    fn push(&mut self, key: String, content: String) {
        let order = self.operations.len() as u32 + 1;
        self.operations.push(DeployOperation::new(order, key, content));
    }
}

#[derive(Serialize)]
struct WindowPayload {
    window: WindowSchema,
}

#[derive(Serialize)]
struct DefaultWindowPayload {
    desktop: Option<String>,
    mobile: Option<String>,
}

#[derive(Serialize)]
struct ComponentPayload {
    component: ComponentSchema,
}

#[derive(Serialize)]
struct BindingPayload {
    binding: BindingSchema,
}

/// Plans a full-project deploy against the given remote entity and its key
/// snapshot. Fails with `NotSaved` when the project is dirty.
pub fn plan_deploy(
    project: &Project,
    entity_id: &str,
    existing_keys: &[String],
) -> SyncResult<DeployPlan> {
    if project.dirty {
        return Err(SyncError::NotSaved);
    }

    let mut plan = match &project.data {
        ProjectData::Ui(ui) => plan_ui(ui, existing_keys)?,
        ProjectData::Vpanel(_) => plan_vpanel(project, existing_keys)?,
    };
    plan.entity_id = entity_id.to_string();

    debug!(
        project = %project.uid,
        entity = entity_id,
        operations = plan.operations.len(),
        "deploy planned"
    );
    Ok(plan)
}

fn plan_ui(ui: &UiProject, existing_keys: &[String]) -> SyncResult<DeployPlan> {
    let mut plan = DeployPlan::default();

    let rewritten: HashSet<String> = ui
        .images
        .values()
        .map(|image| format!("image.{}", image.id))
        .chain(ui.windows.values().map(|window| format!("window.{}", window.id)))
        .collect();

    // Stale images and windows go first, then every current entity is
    // rewritten, then the default-window pointer.
    for key in existing_keys {
        let stale = (key.starts_with("image.") || key.starts_with("window."))
            && !rewritten.contains(key);
        if stale {
            plan.push(key.clone(), String::new());
        }
    }

    for image in ui.images.values() {
        plan.push(
            format!("image.{}", image.id),
            image.content.clone().unwrap_or_default(),
        );
    }

    for window in ui.windows.values() {
        let content = serde_json::to_string(&WindowPayload {
            window: window_to_schema(ui, window),
        })?;
        plan.push(format!("window.{}", window.id), content);
    }

    let defaults = DefaultWindowPayload {
        desktop: ui
            .desktop_default_window
            .and_then(|uid| ui.windows.get(&uid))
            .map(|w| w.id.clone()),
        mobile: ui
            .mobile_default_window
            .and_then(|uid| ui.windows.get(&uid))
            .map(|w| w.id.clone()),
    };
    plan.push(
        "default_window".to_string(),
        serde_json::to_string(&defaults)?,
    );

    Ok(plan)
}

fn plan_vpanel(project: &Project, existing_keys: &[String]) -> SyncResult<DeployPlan> {
    let mut plan = DeployPlan::default();
    let schema = serialize_vpanel(project)?;

    let binding_key = |binding: &BindingSchema| {
        format!(
            "binding.{}.{}.{}.{}",
            binding.remote_id.as_deref().unwrap_or(""),
            binding.remote_attribute,
            binding.local_id.as_deref().unwrap_or(""),
            binding.local_action
        )
    };

    let rewritten: HashSet<String> = schema
        .components
        .iter()
        .map(|component| format!("component.{}", component.id))
        .chain(schema.bindings.iter().map(binding_key))
        .collect();

    for key in existing_keys {
        let stale = (key.starts_with("component.") || key.starts_with("binding."))
            && !rewritten.contains(key);
        if stale {
            plan.push(key.clone(), String::new());
        }
    }

    for component in &schema.components {
        let content = serde_json::to_string(&ComponentPayload {
            component: component.clone(),
        })?;
        plan.push(format!("component.{}", component.id), content);
    }

    for binding in &schema.bindings {
        let key = binding_key(binding);
        let content = serde_json::to_string(&BindingPayload {
            binding: binding.clone(),
        })?;
        plan.push(key, content);
    }

    Ok(plan)
}
