//! Save, deploy-execution and import-application wrappers.
//!
//! These are the operations the command layer calls. Save captures one
//! consistent snapshot: it validates exactly the value that is then
//! serialized, with no intervening mutation, and only clears the dirty flag
//! once the write succeeded. Execution helpers are not transactional — a
//! mid-sequence failure leaves prior operations applied, and the caller
//! surfaces the partial state.

use crate::deploy::DeployPlan;
use crate::error::SyncResult;
use crate::import::ImportPlan;
use crate::operations::ImportOperation;
use crate::store::ResourceStore;
use studio_format::serialize_to_string;
use studio_model::{Project, ProjectData, ProjectKind};
use studio_validate::ensure_valid;
use tracing::{debug, info};

/// Creates an empty project of the given kind.
pub fn new_project(kind: ProjectKind, name: impl Into<String>) -> Project {
    let project = match kind {
        ProjectKind::Ui => Project::new_ui(name),
        ProjectKind::Vpanel => Project::new_vpanel(name),
    };
    debug!(project = %project.uid, "project created");
    project
}

/// Opens persisted content as the given project kind.
pub fn open_project(kind: ProjectKind, content: &str) -> SyncResult<Project> {
    Ok(studio_format::open(kind, content)?)
}

/// Validates and serializes the project in one synchronous step, writes the
/// content under `project.<kind>.<name>`, then marks the project saved.
/// Returns the key written. Any failure before the write leaves the project
/// untouched.
pub async fn save(
    project: &mut Project,
    store: &dyn ResourceStore,
    entity_id: &str,
) -> SyncResult<String> {
    ensure_valid(project)?;
    let content = serialize_to_string(project)?;

    let key = format!("project.{}.{}", project.kind(), project.name);
    store.set(entity_id, &key, &content).await?;

    project.mark_saved();
    info!(project = %project.uid, %key, "project saved");
    Ok(key)
}

/// Executes the enabled operations of a deploy plan, in order, against the
/// plan's target entity. Returns how many were applied. Not transactional:
/// on failure the error propagates and prior writes stay applied.
pub async fn execute_deploy(plan: &DeployPlan, store: &dyn ResourceStore) -> SyncResult<usize> {
    let mut applied = 0;
    for operation in plan.operations.iter().filter(|op| op.enabled) {
        store
            .set(&plan.entity_id, &operation.key, &operation.content)
            .await?;
        applied += 1;
        debug!(order = operation.order, key = %operation.key, "deploy operation applied");
    }
    info!(applied, total = plan.operations.len(), "deploy executed");
    Ok(applied)
}

/// Applies a reconciliation plan to the project through its named mutation
/// operations, then marks it modified. Each operation is atomic; the
/// sequence as a whole is not.
pub fn apply_import(project: &mut Project, plan: &ImportPlan) -> SyncResult<()> {
    for operation in &plan.operations {
        apply_operation(project, operation)?;
    }
    if !plan.operations.is_empty() {
        project.touch();
    }
    debug!(
        project = %project.uid,
        operations = plan.operations.len(),
        "import applied"
    );
    Ok(())
}

fn apply_operation(project: &mut Project, operation: &ImportOperation) -> SyncResult<()> {
    match operation {
        ImportOperation::DeleteControlAction {
            window,
            control,
            slot,
        } => project
            .ui_mut()?
            .set_control_action(*window, *control, *slot, None)?,
        ImportOperation::DeleteControlContext {
            window,
            control,
            item,
        } => project
            .ui_mut()?
            .remove_text_context_item(*window, *control, *item)?,
        ImportOperation::DeleteControlDisplay { window, control } => {
            project.ui_mut()?.clear_display_binding(*window, *control)?;
        }
        ImportOperation::DeleteBinding { binding } => {
            project.vpanel_mut()?.remove_binding(*binding)?;
        }
        ImportOperation::ReplacePlugin { component, plugin } => match &mut project.data {
            ProjectData::Ui(ui) => ui.set_component_plugin(*component, plugin.clone())?,
            ProjectData::Vpanel(vpanel) => {
                vpanel.set_component_plugin(*component, plugin.clone())?;
            }
        },
        ImportOperation::CreateComponent { id, plugin } => match &mut project.data {
            ProjectData::Ui(ui) => {
                ui.add_component(id.clone(), plugin.clone());
            }
            ProjectData::Vpanel(vpanel) => {
                vpanel.add_component(id.clone(), plugin.clone());
            }
        },
        ImportOperation::DeleteComponent { component } => match &mut project.data {
            ProjectData::Ui(ui) => ui.remove_component(*component)?,
            ProjectData::Vpanel(vpanel) => vpanel.remove_component(*component)?,
        },
    }
    Ok(())
}
