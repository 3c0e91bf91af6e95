//! Import reconciliation.
//!
//! Diffs a project's current component wiring against a candidate component
//! set and plans the edits bringing them in line:
//! 1. delete every binding-like reference the candidate set no longer
//!    satisfies (with a message naming its location),
//! 2. replace the plugin of every component whose persisted id matches a
//!    candidate (keeping its opaque id, so surviving bindings stay valid),
//!    create a component for every unmatched candidate,
//! 3. delete every existing component absent from the candidate set.
//!
//! All binding deletions for a component are emitted strictly before that
//! component's own delete: component deletion cascades over remaining
//! references, and cascading must be complete before the delete fires.
//! Collections iterate in opaque-id (creation) order and candidates in input
//! order, so identical inputs plan identical operation lists.

use crate::metadata::MetadataProvider;
use crate::operations::{CommandSink, ImportOperation};
use studio_model::{
    ActionSlot, Component, ControlAction, ControlContent, Project, ProjectData, UiProject,
    VpanelProject,
};
use studio_types::{PluginDescriptor, PluginUsage};
use tracing::debug;

/// One entry of a candidate component set: a persisted id plus the plugin
/// descriptor that would back it.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateComponent {
    pub id: String,
    pub plugin: PluginDescriptor,
}

impl CandidateComponent {
    pub fn new(id: impl Into<String>, plugin: PluginDescriptor) -> Self {
        Self {
            id: id.into(),
            plugin,
        }
    }
}

/// A planned reconciliation: warnings for the user, operations for the
/// command layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportPlan {
    pub messages: Vec<String>,
    pub operations: Vec<ImportOperation>,
}

impl ImportPlan {
    /// Hands every planned operation to the command sink, in order.
    pub fn submit(&self, sink: &mut dyn CommandSink) {
        for operation in &self.operations {
            sink.import_operation(operation);
        }
    }
}

/// Builds a candidate set from another project's components, keeping only
/// plugins of the requested usage.
pub fn candidates_from_vpanel(vpanel: &VpanelProject, usage: PluginUsage) -> Vec<CandidateComponent> {
    vpanel
        .components
        .values()
        .filter(|component| component.plugin.usage == usage)
        .map(|component| CandidateComponent::new(component.id.clone(), component.plugin.clone()))
        .collect()
}

/// A live component instance reported by a deployment, before its class
/// metadata is known.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentInstance {
    pub id: String,
    pub library: String,
    pub kind: String,
    pub version: String,
    pub config: serde_json::Value,
}

/// Builds a candidate set from live component instances, pulling class
/// metadata from the provider. Instances whose plugin the provider cannot
/// describe are dropped.
pub fn candidates_from_instances(
    provider: &dyn MetadataProvider,
    usage: PluginUsage,
    instances: &[ComponentInstance],
) -> Vec<CandidateComponent> {
    instances
        .iter()
        .filter_map(|instance| {
            let clazz = provider.describe(&instance.library, &instance.kind)?;
            Some(CandidateComponent::new(
                instance.id.clone(),
                PluginDescriptor {
                    library: instance.library.clone(),
                    name: instance.kind.clone(),
                    usage,
                    version: instance.version.clone(),
                    config: instance.config.clone(),
                    clazz,
                },
            ))
        })
        .collect()
}

/// Plans the reconciliation of `project` against `candidates`.
pub fn plan_import(project: &Project, candidates: &[CandidateComponent]) -> ImportPlan {
    let plan = match &project.data {
        ProjectData::Ui(ui) => plan_ui(ui, candidates),
        ProjectData::Vpanel(vpanel) => plan_vpanel(vpanel, candidates),
    };
    debug!(
        project = %project.uid,
        candidates = candidates.len(),
        operations = plan.operations.len(),
        "import planned"
    );
    plan
}

fn plan_ui(ui: &UiProject, candidates: &[CandidateComponent]) -> ImportPlan {
    let mut plan = ImportPlan::default();

    // Step 1: bindings the candidate set no longer satisfies.
    for window in ui.windows.values() {
        for control in window.controls.values() {
            for slot in ActionSlot::ALL {
                let Some(ControlAction::Component {
                    component: Some(component),
                    action,
                }) = control.action(slot)
                else {
                    continue;
                };
                let old = ui.components.get(component);
                if !is_component_action(candidates, old, action.as_deref()) {
                    plan.messages
                        .push(format!(" - {}/{}/{}", window.id, control.id, slot));
                    plan.operations.push(ImportOperation::DeleteControlAction {
                        window: window.uid,
                        control: control.uid,
                        slot,
                    });
                }
            }

            match &control.content {
                ControlContent::Text(text) => {
                    for item in &text.context {
                        let old = item.component.and_then(|c| ui.components.get(&c));
                        if !is_component_attribute(candidates, old, item.attribute.as_deref()) {
                            plan.messages.push(format!(
                                " - {}/{}/text/{}",
                                window.id, control.id, item.id
                            ));
                            plan.operations.push(ImportOperation::DeleteControlContext {
                                window: window.uid,
                                control: control.uid,
                                item: item.uid,
                            });
                        }
                    }
                }
                ControlContent::Display(display) => {
                    let old = display.component.and_then(|c| ui.components.get(&c));
                    if !is_component_attribute(candidates, old, display.attribute.as_deref()) {
                        plan.messages
                            .push(format!(" - {}/{}/display", window.id, control.id));
                        plan.operations.push(ImportOperation::DeleteControlDisplay {
                            window: window.uid,
                            control: control.uid,
                        });
                    }
                }
            }
        }
    }

    plan_components(
        &mut plan,
        ui.components.values(),
        candidates,
    );
    plan
}

fn plan_vpanel(vpanel: &VpanelProject, candidates: &[CandidateComponent]) -> ImportPlan {
    let mut plan = ImportPlan::default();

    for binding in vpanel.bindings.values() {
        let remote = binding.remote.and_then(|c| vpanel.components.get(&c));
        let local = binding.local.and_then(|c| vpanel.components.get(&c));

        let attribute_ok =
            is_component_attribute(candidates, remote, Some(&binding.remote_attribute));
        let action_ok = is_component_action(candidates, local, Some(&binding.local_action));

        if !attribute_ok || !action_ok {
            let remote_id = remote.map(|c| c.id.as_str()).unwrap_or("?");
            let local_id = local.map(|c| c.id.as_str()).unwrap_or("?");
            plan.messages.push(format!(
                " - binding {remote_id}.{} -> {local_id}.{}",
                binding.remote_attribute, binding.local_action
            ));
            plan.operations.push(ImportOperation::DeleteBinding {
                binding: binding.uid,
            });
        }
    }

    plan_components(&mut plan, vpanel.components.values(), candidates);
    plan
}

/// Steps 2 and 3, shared by both variants: replace or create per candidate,
/// then delete existing components the candidate set dropped.
fn plan_components<'a>(
    plan: &mut ImportPlan,
    existing: impl Iterator<Item = &'a Component> + Clone,
    candidates: &[CandidateComponent],
) {
    for candidate in candidates {
        match existing.clone().find(|c| c.id == candidate.id) {
            Some(component) => plan.operations.push(ImportOperation::ReplacePlugin {
                component: component.uid,
                plugin: candidate.plugin.clone(),
            }),
            None => plan.operations.push(ImportOperation::CreateComponent {
                id: candidate.id.clone(),
                plugin: candidate.plugin.clone(),
            }),
        }
    }

    for component in existing {
        if !candidates.iter().any(|c| c.id == component.id) {
            plan.operations.push(ImportOperation::DeleteComponent {
                component: component.uid,
            });
        }
    }
}

/// True when the candidate set still satisfies an action binding to
/// `old`. A dangling or absent old reference is left alone; a named action
/// must exist on the candidate and declare zero parameter types — an action
/// accepting any parameters is always incompatible with this binding style.
fn is_component_action(
    candidates: &[CandidateComponent],
    old: Option<&Component>,
    action: Option<&str>,
) -> bool {
    let Some(old) = old else {
        return true;
    };
    let Some(candidate) = candidates.iter().find(|c| c.id == old.id) else {
        return false;
    };
    let Some(action) = action else {
        return true;
    };
    match candidate.plugin.clazz.action(action) {
        Some(spec) => spec.is_parameterless(),
        None => false,
    }
}

/// True when the candidate set still satisfies an attribute binding to
/// `old`: an attribute of that name must exist on the candidate with a
/// declared type identical to the previously bound one.
fn is_component_attribute(
    candidates: &[CandidateComponent],
    old: Option<&Component>,
    attribute: Option<&str>,
) -> bool {
    let Some(old) = old else {
        return true;
    };
    let Some(candidate) = candidates.iter().find(|c| c.id == old.id) else {
        return false;
    };
    let Some(attribute) = attribute else {
        return true;
    };
    let Some(new_attribute) = candidate.plugin.clazz.attribute(attribute) else {
        return false;
    };
    let Some(old_attribute) = old.plugin.clazz.attribute(attribute) else {
        return false;
    };
    new_attribute.kind == old_attribute.kind
}
