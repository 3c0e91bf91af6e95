//! Two-phase project loading.
//!
//! Phase 1 instantiates leaf entities (components, images, window shells),
//! assigning fresh opaque ids and filling one persisted-id→opaque-id table
//! per kind. Phase 2 builds controls, bindings and default-window references
//! through those tables — every window exists by then, so forward references
//! resolve like any other. The tables are locals of the load functions and
//! die with them.
//!
//! An unresolvable reference loads as `None`; the validator reports it,
//! loading does not fail on it.

use crate::error::{FormatError, FormatResult};
use crate::schema::{
    ActionSchema, ControlSchema, UiProjectSchema, VpanelProjectSchema,
};
use std::collections::{BTreeMap, HashMap};
use studio_model::{
    Binding, Component, Control, ControlAction, ControlContent, ControlDisplay, ControlText,
    DisplayMapping, Image, Project, ProjectData, ProjectKind, TextContextItem, UiProject,
    VpanelProject, Window,
};
use studio_types::{ComponentId, ControlId, ImageId, ItemId, ProjectId, WindowId};
use tracing::debug;

/// Opens persisted content as the given project kind.
pub fn open(kind: ProjectKind, content: &str) -> FormatResult<Project> {
    match kind {
        ProjectKind::Ui => open_ui(content),
        ProjectKind::Vpanel => open_vpanel(content),
    }
}

/// Parses persisted UI project content into a clean (non-dirty) project.
pub fn open_ui(content: &str) -> FormatResult<Project> {
    let schema: UiProjectSchema = serde_json::from_str(content)?;
    let mut ui = UiProject::default();

    // Phase 1: leaves. Duplicate persisted ids keep their first table entry,
    // matching the original's first-match resolution.
    let mut components: HashMap<String, ComponentId> = HashMap::new();
    for raw in &schema.components {
        let component = Component::new(raw.id.clone(), raw.plugin.clone());
        components.entry(raw.id.clone()).or_insert(component.uid);
        ui.components.insert(component.uid, component);
    }

    let mut images: HashMap<String, ImageId> = HashMap::new();
    for raw in &schema.images {
        let image = Image {
            uid: ImageId::new(),
            id: raw.id.clone(),
            content: raw.content.clone(),
        };
        images.entry(raw.id.clone()).or_insert(image.uid);
        ui.images.insert(image.uid, image);
    }

    let mut windows: HashMap<String, WindowId> = HashMap::new();
    let mut shells: Vec<(WindowId, &crate::schema::WindowSchema)> = Vec::new();
    for raw in &schema.windows {
        let window = Window {
            uid: WindowId::new(),
            id: raw.id.clone(),
            height: raw.height,
            width: raw.width,
            style: raw.style.clone(),
            background: resolve(&images, raw.background_resource_id.as_deref()),
            controls: BTreeMap::new(),
        };
        windows.entry(raw.id.clone()).or_insert(window.uid);
        shells.push((window.uid, raw));
        ui.windows.insert(window.uid, window);
    }

    // Phase 2: controls, now that every window exists.
    for (window_uid, raw) in shells {
        let mut controls: BTreeMap<ControlId, Control> = BTreeMap::new();
        for raw_control in &raw.controls {
            let control = load_control(raw_control, &raw.id, &components, &images, &windows)?;
            controls.insert(control.uid, control);
        }
        if let Some(window) = ui.windows.get_mut(&window_uid) {
            window.controls = controls;
        }
    }

    let desktop = schema
        .desktop_default_window
        .as_deref()
        .or(schema.default_window.as_deref());
    let mobile = schema
        .mobile_default_window
        .as_deref()
        .or(schema.default_window.as_deref());
    ui.desktop_default_window = resolve(&windows, desktop);
    ui.mobile_default_window = resolve(&windows, mobile);

    let project = Project {
        uid: ProjectId::new(),
        name: schema.name,
        created_at: schema.creation_date,
        updated_at: schema.last_update,
        dirty: false,
        data: ProjectData::Ui(ui),
    };
    debug!(project = %project.uid, name = %project.name, "ui project opened");
    Ok(project)
}

/// Parses persisted VPanel project content into a clean project.
pub fn open_vpanel(content: &str) -> FormatResult<Project> {
    let schema: VpanelProjectSchema = serde_json::from_str(content)?;
    let mut vpanel = VpanelProject::default();

    let mut components: HashMap<String, ComponentId> = HashMap::new();
    for raw in &schema.components {
        let component = Component::new(raw.id.clone(), raw.plugin.clone());
        components.entry(raw.id.clone()).or_insert(component.uid);
        vpanel.components.insert(component.uid, component);
    }

    for raw in &schema.bindings {
        let binding = Binding::new(
            resolve(&components, raw.remote_id.as_deref()),
            raw.remote_attribute.clone(),
            resolve(&components, raw.local_id.as_deref()),
            raw.local_action.clone(),
        );
        vpanel.bindings.insert(binding.uid, binding);
    }

    let project = Project {
        uid: ProjectId::new(),
        name: schema.name,
        created_at: schema.creation_date,
        updated_at: schema.last_update,
        dirty: false,
        data: ProjectData::Vpanel(vpanel),
    };
    debug!(project = %project.uid, name = %project.name, "vpanel project opened");
    Ok(project)
}

fn load_control(
    raw: &ControlSchema,
    window_id: &str,
    components: &HashMap<String, ComponentId>,
    images: &HashMap<String, ImageId>,
    windows: &HashMap<String, WindowId>,
) -> FormatResult<Control> {
    let content = match (&raw.text, &raw.display) {
        (Some(text), None) => ControlContent::Text(ControlText {
            format: text.format.clone(),
            context: text
                .context
                .iter()
                .map(|item| TextContextItem {
                    uid: ItemId::new(),
                    id: item.id.clone(),
                    component: resolve(components, item.component_id.as_deref()),
                    attribute: item.component_attribute.clone(),
                })
                .collect(),
        }),
        (None, Some(display)) => ControlContent::Display(ControlDisplay {
            component: resolve(components, display.component_id.as_deref()),
            attribute: display.component_attribute.clone(),
            default_image: resolve(images, display.default_resource_id.as_deref()),
            map: display
                .map
                .iter()
                .map(|item| DisplayMapping {
                    uid: ItemId::new(),
                    min: item.min,
                    max: item.max,
                    value: item.value.clone(),
                    image: resolve(images, item.resource_id.as_deref()),
                })
                .collect(),
        }),
        _ => {
            return Err(FormatError::ControlContent {
                window: window_id.to_string(),
                control: raw.id.clone(),
            });
        }
    };

    Ok(Control {
        uid: ControlId::new(),
        id: raw.id.clone(),
        x: raw.x,
        y: raw.y,
        height: raw.height,
        width: raw.width,
        style: raw.style.clone(),
        content,
        primary_action: load_action(raw.primary_action.as_ref(), components, windows),
        secondary_action: load_action(raw.secondary_action.as_ref(), components, windows),
    })
}

fn load_action(
    raw: Option<&ActionSchema>,
    components: &HashMap<String, ComponentId>,
    windows: &HashMap<String, WindowId>,
) -> Option<ControlAction> {
    let action = raw?;
    if let Some(component) = &action.component {
        return Some(ControlAction::Component {
            component: resolve(components, component.component_id.as_deref()),
            action: component.component_action.clone(),
        });
    }
    let window = action.window.as_ref()?;
    Some(ControlAction::Window {
        window: resolve(windows, window.id.as_deref()),
        popup: window.popup,
    })
}

fn resolve<T: Copy>(table: &HashMap<String, T>, id: Option<&str>) -> Option<T> {
    id.and_then(|id| table.get(id).copied())
}
