//! Serialization back to the persisted schema.
//!
//! Every opaque reference is translated through the referenced entity's own
//! persisted id; a null reference — or one left dangling by an earlier
//! mutation — serializes as `null`.

use crate::error::{FormatError, FormatResult};
use crate::schema::{
    ActionSchema, BindingSchema, ComponentActionSchema, ComponentSchema, ContextItemSchema,
    ControlSchema, DisplaySchema, ImageSchema, MappingSchema, TextSchema, UiProjectSchema,
    VpanelProjectSchema, WindowActionSchema, WindowSchema,
};
use std::collections::BTreeMap;
use studio_model::{
    Component, Control, ControlAction, ControlContent, Image, Project, ProjectKind, UiProject,
    Window,
};
use studio_types::{ComponentId, ImageId, WindowId};

/// Serializes a project to its canonical JSON string.
pub fn serialize_to_string(project: &Project) -> FormatResult<String> {
    let value = match project.kind() {
        ProjectKind::Ui => serde_json::to_string(&serialize_ui(project)?)?,
        ProjectKind::Vpanel => serde_json::to_string(&serialize_vpanel(project)?)?,
    };
    Ok(value)
}

/// Serializes a UI project to its persisted schema.
pub fn serialize_ui(project: &Project) -> FormatResult<UiProjectSchema> {
    let ui = project.ui().map_err(|_| FormatError::WrongKind {
        expected: ProjectKind::Ui,
    })?;

    Ok(UiProjectSchema {
        name: project.name.clone(),
        creation_date: project.created_at,
        last_update: project.updated_at,
        components: ui.components.values().map(component_to_schema).collect(),
        images: ui.images.values().map(image_to_schema).collect(),
        windows: ui
            .windows
            .values()
            .map(|window| window_to_schema(ui, window))
            .collect(),
        desktop_default_window: window_ref(&ui.windows, ui.desktop_default_window),
        mobile_default_window: window_ref(&ui.windows, ui.mobile_default_window),
        default_window: None,
    })
}

/// Serializes a VPanel project to its persisted schema.
pub fn serialize_vpanel(project: &Project) -> FormatResult<VpanelProjectSchema> {
    let vpanel = project.vpanel().map_err(|_| FormatError::WrongKind {
        expected: ProjectKind::Vpanel,
    })?;

    Ok(VpanelProjectSchema {
        name: project.name.clone(),
        creation_date: project.created_at,
        last_update: project.updated_at,
        components: vpanel.components.values().map(component_to_schema).collect(),
        bindings: vpanel
            .bindings
            .values()
            .map(|binding| BindingSchema {
                remote_id: component_ref(&vpanel.components, binding.remote),
                remote_attribute: binding.remote_attribute.clone(),
                local_id: component_ref(&vpanel.components, binding.local),
                local_action: binding.local_action.clone(),
            })
            .collect(),
    })
}

/// Serializes one window with its controls. Also used by the deploy planner
/// for `window.<id>` resource payloads.
pub fn window_to_schema(ui: &UiProject, window: &Window) -> WindowSchema {
    WindowSchema {
        id: window.id.clone(),
        height: window.height,
        width: window.width,
        style: window.style.clone(),
        background_resource_id: image_ref(&ui.images, window.background),
        controls: window
            .controls
            .values()
            .map(|control| control_to_schema(ui, control))
            .collect(),
    }
}

fn component_to_schema(component: &Component) -> ComponentSchema {
    ComponentSchema {
        id: component.id.clone(),
        plugin: component.plugin.clone(),
    }
}

fn image_to_schema(image: &Image) -> ImageSchema {
    ImageSchema {
        id: image.id.clone(),
        content: image.content.clone(),
    }
}

fn control_to_schema(ui: &UiProject, control: &Control) -> ControlSchema {
    let (text, display) = match &control.content {
        ControlContent::Text(text) => (
            Some(TextSchema {
                format: text.format.clone(),
                context: text
                    .context
                    .iter()
                    .map(|item| ContextItemSchema {
                        id: item.id.clone(),
                        component_id: component_ref(&ui.components, item.component),
                        component_attribute: item.attribute.clone(),
                    })
                    .collect(),
            }),
            None,
        ),
        ControlContent::Display(display) => (
            None,
            Some(DisplaySchema {
                component_id: component_ref(&ui.components, display.component),
                component_attribute: display.attribute.clone(),
                default_resource_id: image_ref(&ui.images, display.default_image),
                map: display
                    .map
                    .iter()
                    .map(|item| MappingSchema {
                        max: item.max,
                        min: item.min,
                        resource_id: image_ref(&ui.images, item.image),
                        value: item.value.clone(),
                    })
                    .collect(),
            }),
        ),
    };

    ControlSchema {
        id: control.id.clone(),
        height: control.height,
        width: control.width,
        x: control.x,
        y: control.y,
        style: control.style.clone(),
        display,
        text,
        primary_action: action_to_schema(ui, control.primary_action.as_ref()),
        secondary_action: action_to_schema(ui, control.secondary_action.as_ref()),
    }
}

fn action_to_schema(ui: &UiProject, action: Option<&ControlAction>) -> Option<ActionSchema> {
    match action? {
        ControlAction::Component { component, action } => Some(ActionSchema {
            component: Some(ComponentActionSchema {
                component_id: component_ref(&ui.components, *component),
                component_action: action.clone(),
            }),
            window: None,
        }),
        ControlAction::Window { window, popup } => Some(ActionSchema {
            component: None,
            window: Some(WindowActionSchema {
                id: window_ref(&ui.windows, *window),
                popup: *popup,
            }),
        }),
    }
}

fn component_ref(
    components: &BTreeMap<ComponentId, Component>,
    uid: Option<ComponentId>,
) -> Option<String> {
    uid.and_then(|uid| components.get(&uid)).map(|c| c.id.clone())
}

fn image_ref(images: &BTreeMap<ImageId, Image>, uid: Option<ImageId>) -> Option<String> {
    uid.and_then(|uid| images.get(&uid)).map(|i| i.id.clone())
}

fn window_ref(windows: &BTreeMap<WindowId, Window>, uid: Option<WindowId>) -> Option<String> {
    uid.and_then(|uid| windows.get(&uid)).map(|w| w.id.clone())
}
