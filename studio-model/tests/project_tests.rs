use serde_json::json;
use studio_model::{
    Binding, ControlAction, ControlContentKind, ModelError, Project, ProjectKind, TextContextItem,
};
use studio_types::{
    ActionSpec, AttributeSpec, AttributeType, PluginClass, PluginDescriptor, PluginUsage,
};

fn make_plugin() -> PluginDescriptor {
    PluginDescriptor {
        library: "hw".to_string(),
        name: "dimmer".to_string(),
        usage: PluginUsage::Ui,
        version: "1.0".to_string(),
        config: json!({}),
        clazz: PluginClass {
            attributes: vec![AttributeSpec {
                name: "level".to_string(),
                kind: AttributeType::Range { min: 0.0, max: 100.0 },
            }],
            actions: vec![ActionSpec {
                name: "toggle".to_string(),
                types: vec![],
            }],
        },
    }
}

// ── Lifecycle ────────────────────────────────────────────────────

#[test]
fn new_projects_start_dirty() {
    assert!(Project::new_ui("a").dirty);
    assert!(Project::new_vpanel("b").dirty);
}

#[test]
fn kind_follows_data() {
    assert_eq!(Project::new_ui("a").kind(), ProjectKind::Ui);
    assert_eq!(Project::new_vpanel("b").kind(), ProjectKind::Vpanel);
}

#[test]
fn kind_accessors_reject_the_other_variant() {
    let mut project = Project::new_ui("a");
    assert!(matches!(
        project.vpanel_mut(),
        Err(ModelError::KindMismatch { .. })
    ));
    assert!(project.ui_mut().is_ok());
}

#[test]
fn mark_saved_clears_dirty_and_touch_sets_it() {
    let mut project = Project::new_ui("a");
    project.mark_saved();
    assert!(!project.dirty);
    project.touch();
    assert!(project.dirty);
}

// ── Components ───────────────────────────────────────────────────

#[test]
fn add_and_find_component() {
    let mut project = Project::new_ui("a");
    let ui = project.ui_mut().unwrap();
    let uid = ui.add_component("lamp", make_plugin());

    assert_eq!(ui.component(uid).unwrap().id, "lamp");
    assert_eq!(ui.find_component("lamp").unwrap().uid, uid);
    assert!(ui.find_component("other").is_none());
}

#[test]
fn set_component_plugin_keeps_opaque_id() {
    let mut project = Project::new_ui("a");
    let ui = project.ui_mut().unwrap();
    let uid = ui.add_component("lamp", make_plugin());

    let mut replacement = make_plugin();
    replacement.version = "2.0".to_string();
    ui.set_component_plugin(uid, replacement).unwrap();

    let component = ui.component(uid).unwrap();
    assert_eq!(component.uid, uid);
    assert_eq!(component.plugin.version, "2.0");
}

#[test]
fn set_component_plugin_unknown_component() {
    let mut project = Project::new_ui("a");
    let ui = project.ui_mut().unwrap();
    let result = ui.set_component_plugin(studio_types::ComponentId::new(), make_plugin());
    assert!(matches!(result, Err(ModelError::UnknownComponent(_))));
}

#[test]
fn remove_component_cascades_over_ui_references() {
    let mut project = Project::new_ui("a");
    let ui = project.ui_mut().unwrap();
    let component = ui.add_component("lamp", make_plugin());
    let window = ui.add_window();

    // An action binding, a text-context item and a display binding, all
    // referencing the component.
    let action_control = ui
        .add_control(window, 0.0, 0.0, ControlContentKind::Text)
        .unwrap();
    ui.set_control_action(
        window,
        action_control,
        studio_model::ActionSlot::Primary,
        Some(ControlAction::Component {
            component: Some(component),
            action: Some("toggle".to_string()),
        }),
    )
    .unwrap();

    {
        let control = ui
            .windows
            .get_mut(&window)
            .unwrap()
            .controls
            .get_mut(&action_control)
            .unwrap();
        control.text_mut().unwrap().context.push(TextContextItem::new(
            "value",
            Some(component),
            Some("level".to_string()),
        ));
    }

    let display_control = ui
        .add_control(window, 10.0, 10.0, ControlContentKind::Display)
        .unwrap();
    {
        let control = ui
            .windows
            .get_mut(&window)
            .unwrap()
            .controls
            .get_mut(&display_control)
            .unwrap();
        let display = control.display_mut().unwrap();
        display.component = Some(component);
        display.attribute = Some("level".to_string());
    }

    ui.remove_component(component).unwrap();

    assert!(ui.component(component).is_none());
    let window = ui.windows.values().next().unwrap();
    let action_control = &window.controls[&action_control];
    assert!(action_control.primary_action.is_none());
    assert!(action_control.text().unwrap().context.is_empty());
    let display = window.controls[&display_control].display().unwrap();
    assert!(display.component.is_none());
    assert!(display.attribute.is_none());
}

#[test]
fn remove_component_cascades_over_vpanel_bindings() {
    let mut project = Project::new_vpanel("a");
    let vpanel = project.vpanel_mut().unwrap();
    let sensor = vpanel.add_component("sensor", make_plugin());
    let lamp = vpanel.add_component("lamp", make_plugin());
    vpanel.add_binding(Binding::new(
        Some(sensor),
        "level",
        Some(lamp),
        "toggle",
    ));

    vpanel.remove_component(sensor).unwrap();

    assert!(vpanel.component(sensor).is_none());
    assert!(vpanel.bindings.is_empty());
    assert!(vpanel.component(lamp).is_some());
}

// ── Windows & controls ───────────────────────────────────────────

#[test]
fn new_windows_get_defaults_and_generated_id() {
    let mut project = Project::new_ui("a");
    let ui = project.ui_mut().unwrap();
    let uid = ui.add_window();

    let window = ui.window(uid).unwrap();
    assert_eq!((window.width, window.height), (500, 500));
    assert!(window.id.starts_with("window_"));
    assert!(window.controls.is_empty());
}

#[test]
fn controls_are_placed_fractionally() {
    let mut project = Project::new_ui("a");
    let ui = project.ui_mut().unwrap();
    let window = ui.add_window();
    let control = ui
        .add_control(window, 250.0, 125.0, ControlContentKind::Text)
        .unwrap();

    let control = &ui.window(window).unwrap().controls[&control];
    assert_eq!(control.x, 0.5);
    assert_eq!(control.y, 0.25);
    assert_eq!((control.width, control.height), (50, 50));
    assert!(control.text().is_some());
    assert!(control.display().is_none());
}

#[test]
fn add_control_on_unknown_window() {
    let mut project = Project::new_ui("a");
    let ui = project.ui_mut().unwrap();
    let result = ui.add_control(
        studio_types::WindowId::new(),
        0.0,
        0.0,
        ControlContentKind::Text,
    );
    assert!(matches!(result, Err(ModelError::UnknownWindow(_))));
}

#[test]
fn remove_control_unknown_control() {
    let mut project = Project::new_ui("a");
    let ui = project.ui_mut().unwrap();
    let window = ui.add_window();
    let result = ui.remove_control(window, studio_types::ControlId::new());
    assert!(matches!(result, Err(ModelError::UnknownControl(_))));
}

// ── Bindings ─────────────────────────────────────────────────────

#[test]
fn remove_binding_unknown_binding() {
    let mut project = Project::new_vpanel("a");
    let vpanel = project.vpanel_mut().unwrap();
    let result = vpanel.remove_binding(studio_types::BindingId::new());
    assert!(matches!(result, Err(ModelError::UnknownBinding(_))));
}

#[test]
fn binding_references_either_endpoint() {
    let remote = studio_types::ComponentId::new();
    let local = studio_types::ComponentId::new();
    let binding = Binding::new(Some(remote), "level", Some(local), "toggle");
    assert!(binding.references(remote));
    assert!(binding.references(local));
    assert!(!binding.references(studio_types::ComponentId::new()));
}
