use pretty_assertions::assert_eq;
use studio_format::{open, open_ui, open_vpanel, serialize_to_string, serialize_ui, serialize_vpanel, FormatError};
use studio_model::{ControlAction, ControlContent, ProjectKind};

fn ui_fixture() -> String {
    r#"{
        "Name": "living room",
        "CreationDate": "2024-03-01T10:00:00Z",
        "LastUpdate": "2024-06-15T08:30:00Z",
        "Components": [
            {
                "Id": "lamp",
                "Plugin": {
                    "library": "hw",
                    "type": "dimmer",
                    "usage": "ui",
                    "version": "1.0",
                    "config": {},
                    "clazz": {
                        "attributes": [
                            {"name": "level", "type": {"primitive": "range", "min": 0.0, "max": 100.0}}
                        ],
                        "actions": [
                            {"name": "toggle", "types": []}
                        ]
                    }
                }
            }
        ],
        "Images": [
            {"Id": "bulb_on", "Content": "aGVsbG8="},
            {"Id": "bulb_off", "Content": "d29ybGQ="}
        ],
        "Windows": [
            {
                "id": "main",
                "height": 600,
                "width": 800,
                "style": "dark",
                "background_resource_id": "bulb_off",
                "controls": [
                    {
                        "id": "label",
                        "height": 40,
                        "width": 120,
                        "x": 0.1,
                        "y": 0.2,
                        "style": "",
                        "display": null,
                        "text": {
                            "format": "level: {value}",
                            "context": [
                                {"id": "value", "component_id": "lamp", "component_attribute": "level"}
                            ]
                        },
                        "primary_action": {
                            "component": null,
                            "window": {"id": "settings", "popup": true}
                        },
                        "secondary_action": null
                    },
                    {
                        "id": "indicator",
                        "height": 50,
                        "width": 50,
                        "x": 0.5,
                        "y": 0.5,
                        "style": "",
                        "display": {
                            "component_id": "lamp",
                            "component_attribute": "level",
                            "default_resource_id": "bulb_off",
                            "map": [
                                {"min": 50.0, "max": 100.0, "resource_id": "bulb_on", "value": null}
                            ]
                        },
                        "text": null,
                        "primary_action": {
                            "component": {"component_id": "lamp", "component_action": "toggle"},
                            "window": null
                        },
                        "secondary_action": null
                    }
                ]
            },
            {
                "id": "settings",
                "height": 400,
                "width": 400,
                "style": "",
                "background_resource_id": null,
                "controls": []
            }
        ],
        "DesktopDefaultWindow": "main",
        "MobileDefaultWindow": "settings"
    }"#
    .to_string()
}

fn vpanel_fixture() -> String {
    r#"{
        "Name": "panel",
        "CreationDate": "2024-01-01T00:00:00Z",
        "LastUpdate": "2024-01-02T00:00:00Z",
        "Components": [
            {
                "Id": "sensor",
                "Plugin": {
                    "library": "hw",
                    "type": "contact",
                    "usage": "vpanel",
                    "version": "1.0",
                    "config": {},
                    "clazz": {
                        "attributes": [{"name": "state", "type": {"primitive": "boolean"}}],
                        "actions": []
                    }
                }
            },
            {
                "Id": "relay",
                "Plugin": {
                    "library": "hw",
                    "type": "relay",
                    "usage": "vpanel",
                    "version": "1.0",
                    "config": {},
                    "clazz": {
                        "attributes": [],
                        "actions": [{"name": "toggle", "types": []}]
                    }
                }
            }
        ],
        "Bindings": [
            {"remote_id": "sensor", "remote_attribute": "state", "local_id": "relay", "local_action": "toggle"}
        ]
    }"#
    .to_string()
}

// ── Loading ──────────────────────────────────────────────────────

#[test]
fn open_builds_a_clean_cross_referenced_graph() {
    let project = open_ui(&ui_fixture()).unwrap();
    assert!(!project.dirty);
    assert_eq!(project.name, "living room");

    let ui = project.ui().unwrap();
    assert_eq!(ui.components.len(), 1);
    assert_eq!(ui.images.len(), 2);
    assert_eq!(ui.windows.len(), 2);

    let main = ui.find_window("main").unwrap();
    let background = main.background.expect("background resolved");
    assert_eq!(ui.image(background).unwrap().id, "bulb_off");

    let lamp = ui.find_component("lamp").unwrap();
    let indicator = main.controls.values().find(|c| c.id == "indicator").unwrap();
    let display = indicator.display().unwrap();
    assert_eq!(display.component, Some(lamp.uid));
    assert_eq!(display.attribute.as_deref(), Some("level"));
    assert_eq!(display.map.len(), 1);
    assert_eq!(ui.image(display.map[0].image.unwrap()).unwrap().id, "bulb_on");

    assert_eq!(ui.desktop_default_window, Some(main.uid));
    assert_eq!(
        ui.mobile_default_window,
        Some(ui.find_window("settings").unwrap().uid)
    );
}

#[test]
fn navigation_actions_resolve_forward_references() {
    // The "label" control on the first window navigates to "settings",
    // defined later in the file.
    let project = open_ui(&ui_fixture()).unwrap();
    let ui = project.ui().unwrap();
    let settings = ui.find_window("settings").unwrap().uid;
    let label = ui
        .find_window("main")
        .unwrap()
        .controls
        .values()
        .find(|c| c.id == "label")
        .unwrap();

    match label.primary_action.as_ref().unwrap() {
        ControlAction::Window { window, popup } => {
            assert_eq!(*window, Some(settings));
            assert!(*popup);
        }
        other => panic!("expected window action, got {other:?}"),
    }
}

#[test]
fn opaque_ids_are_regenerated_per_open() {
    let content = ui_fixture();
    let a = open_ui(&content).unwrap();
    let b = open_ui(&content).unwrap();
    assert_ne!(a.uid, b.uid);
    assert_ne!(
        a.ui().unwrap().components.values().next().unwrap().uid,
        b.ui().unwrap().components.values().next().unwrap().uid
    );
}

#[test]
fn unresolvable_references_load_as_null() {
    let content = ui_fixture().replace("\"background_resource_id\": \"bulb_off\"", "\"background_resource_id\": \"missing\"");
    let project = open_ui(&content).unwrap();
    let ui = project.ui().unwrap();
    assert!(ui.find_window("main").unwrap().background.is_none());
}

#[test]
fn legacy_default_window_populates_both_defaults() {
    let content = ui_fixture()
        .replace("\"DesktopDefaultWindow\": \"main\",", "")
        .replace(
            "\"MobileDefaultWindow\": \"settings\"",
            "\"DefaultWindow\": \"main\"",
        );
    let project = open_ui(&content).unwrap();
    let ui = project.ui().unwrap();
    let main = ui.find_window("main").unwrap().uid;
    assert_eq!(ui.desktop_default_window, Some(main));
    assert_eq!(ui.mobile_default_window, Some(main));
}

#[test]
fn open_rejects_garbage() {
    assert!(matches!(open_ui("not json"), Err(FormatError::Parse(_))));
}

#[test]
fn open_rejects_missing_name() {
    let content = ui_fixture().replace("\"Name\": \"living room\",", "");
    assert!(matches!(open_ui(&content), Err(FormatError::Parse(_))));
}

#[test]
fn open_rejects_control_without_content() {
    let content = r#"{
        "Name": "p",
        "CreationDate": "2024-01-01T00:00:00Z",
        "LastUpdate": "2024-01-01T00:00:00Z",
        "Components": [],
        "Images": [],
        "Windows": [
            {
                "id": "main",
                "height": 100,
                "width": 100,
                "style": "",
                "background_resource_id": null,
                "controls": [
                    {
                        "id": "empty",
                        "height": 10,
                        "width": 10,
                        "x": 0.0,
                        "y": 0.0,
                        "style": "",
                        "display": null,
                        "text": null,
                        "primary_action": null,
                        "secondary_action": null
                    }
                ]
            }
        ],
        "DesktopDefaultWindow": "main",
        "MobileDefaultWindow": "main"
    }"#;
    let err = open_ui(content).unwrap_err();
    assert!(matches!(err, FormatError::ControlContent { .. }));
    assert!(err.to_string().contains("empty"));
}

#[test]
fn open_dispatches_on_kind() {
    assert_eq!(
        open(ProjectKind::Ui, &ui_fixture()).unwrap().kind(),
        ProjectKind::Ui
    );
    assert_eq!(
        open(ProjectKind::Vpanel, &vpanel_fixture()).unwrap().kind(),
        ProjectKind::Vpanel
    );
}

// ── Round trip ───────────────────────────────────────────────────

#[test]
fn ui_round_trip_is_structurally_stable() {
    let first = open_ui(&ui_fixture()).unwrap();
    let serialized = serialize_ui(&first).unwrap();

    let second = open_ui(&serialize_to_string(&first).unwrap()).unwrap();
    let reserialized = serialize_ui(&second).unwrap();

    assert_eq!(reserialized, serialized);
}

#[test]
fn ui_serialization_keeps_legacy_field_names() {
    let project = open_ui(&ui_fixture()).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&serialize_to_string(&project).unwrap()).unwrap();

    assert_eq!(value["Name"], "living room");
    assert_eq!(value["Components"][0]["Id"], "lamp");
    assert_eq!(value["Images"][0]["Id"], "bulb_on");
    assert_eq!(value["Windows"][0]["background_resource_id"], "bulb_off");
    assert_eq!(value["Windows"][0]["controls"][0]["primary_action"]["window"]["id"], "settings");
    assert_eq!(value["DesktopDefaultWindow"], "main");
    assert_eq!(value["MobileDefaultWindow"], "settings");
    // The legacy alias is never written back.
    assert!(value.get("DefaultWindow").is_none());
}

#[test]
fn dangling_references_serialize_as_null() {
    let mut project = open_ui(&ui_fixture()).unwrap();
    {
        let ui = project.ui_mut().unwrap();
        let main = ui.find_window("main").unwrap().uid;
        // Remove the background image from under the window.
        let background = ui.window(main).unwrap().background.unwrap();
        let display_images: Vec<_> = ui
            .windows
            .values_mut()
            .flat_map(|w| w.controls.values_mut())
            .filter_map(|c| match &mut c.content {
                ControlContent::Display(d) => Some(d),
                ControlContent::Text(_) => None,
            })
            .collect();
        for display in display_images {
            display.default_image = None;
            for item in &mut display.map {
                item.image = None;
            }
        }
        ui.images.remove(&background);
    }

    let value: serde_json::Value =
        serde_json::from_str(&serialize_to_string(&project).unwrap()).unwrap();
    assert_eq!(value["Windows"][0]["background_resource_id"], serde_json::Value::Null);
}

#[test]
fn vpanel_round_trip_is_structurally_stable() {
    let first = open_vpanel(&vpanel_fixture()).unwrap();
    let serialized = serialize_vpanel(&first).unwrap();

    let second = open_vpanel(&serialize_to_string(&first).unwrap()).unwrap();
    let reserialized = serialize_vpanel(&second).unwrap();

    assert_eq!(reserialized, serialized);
    assert_eq!(serialized.bindings.len(), 1);
    assert_eq!(serialized.bindings[0].remote_id.as_deref(), Some("sensor"));
}

#[test]
fn serialize_rejects_the_wrong_kind() {
    let ui = open_ui(&ui_fixture()).unwrap();
    assert!(matches!(
        serialize_vpanel(&ui),
        Err(FormatError::WrongKind { .. })
    ));
    let vpanel = open_vpanel(&vpanel_fixture()).unwrap();
    assert!(matches!(
        serialize_ui(&vpanel),
        Err(FormatError::WrongKind { .. })
    ));
}
