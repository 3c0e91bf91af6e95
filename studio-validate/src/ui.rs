//! UI project checks: id scopes, reference resolution, default windows,
//! display-map consistency against the bound attribute's declared type.

use crate::ids::check_ids;
use studio_model::{
    Control, ControlAction, ControlContent, ControlDisplay, UiProject, Window,
};
use studio_types::AttributeType;

pub(crate) fn validate(ui: &UiProject, msgs: &mut Vec<String>) {
    if ui.desktop_default_window.is_none() {
        msgs.push("No desktop default window".to_string());
    } else if resolve_window(ui, ui.desktop_default_window).is_none() {
        msgs.push("Desktop default window not found".to_string());
    }

    if ui.mobile_default_window.is_none() {
        msgs.push("No mobile default window".to_string());
    } else if resolve_window(ui, ui.mobile_default_window).is_none() {
        msgs.push("Mobile default window not found".to_string());
    }

    {
        let check = check_ids(ui.components.values().map(|c| Some(c.id.as_str())));
        if check.no_id > 0 {
            msgs.push(format!("{} components have no id", check.no_id));
        }
        for id in check.duplicates {
            msgs.push(format!("Duplicate component id: {id}"));
        }
    }

    {
        let check = check_ids(ui.images.values().map(|i| Some(i.id.as_str())));
        if check.no_id > 0 {
            msgs.push(format!("{} images have no id", check.no_id));
        }
        for id in check.duplicates {
            msgs.push(format!("Duplicate image id: {id}"));
        }
    }

    {
        let check = check_ids(ui.windows.values().map(|w| Some(w.id.as_str())));
        if check.no_id > 0 {
            msgs.push(format!("{} windows have no id", check.no_id));
        }
        for id in check.duplicates {
            msgs.push(format!("Duplicate window id: {id}"));
        }
    }

    for window in ui.windows.values() {
        validate_window(ui, window, msgs);
    }
}

fn validate_window(ui: &UiProject, window: &Window, msgs: &mut Vec<String>) {
    if let Some(background) = window.background {
        if !ui.images.contains_key(&background) {
            msgs.push(format!("On window {}: background image not found", window.id));
        }
    }

    {
        let check = check_ids(window.controls.values().map(|c| Some(c.id.as_str())));
        if check.no_id > 0 {
            msgs.push(format!(
                "On window {}: {} controls have no id",
                window.id, check.no_id
            ));
        }
        for id in check.duplicates {
            msgs.push(format!("On window {}: duplicate control id: {id}", window.id));
        }
    }

    for control in window.controls.values() {
        validate_control(ui, window, control, msgs);
    }
}

fn validate_control(ui: &UiProject, window: &Window, control: &Control, msgs: &mut Vec<String>) {
    let path = format!("On window {}: on control {}", window.id, control.id);

    match &control.content {
        ControlContent::Text(text) => {
            let check = check_ids(text.context.iter().map(|i| Some(i.id.as_str())));
            if check.no_id > 0 {
                msgs.push(format!(
                    "{path}: {} text context items have no id",
                    check.no_id
                ));
            }
            for id in check.duplicates {
                msgs.push(format!("{path}: duplicate text context item id: {id}"));
            }

            for item in &text.context {
                if let Some(component) = item.component {
                    if !ui.components.contains_key(&component) {
                        msgs.push(format!(
                            "{path}: text context item {} component not found",
                            item.id
                        ));
                    }
                }
            }
        }
        ControlContent::Display(display) => {
            validate_display(ui, &path, display, msgs);
        }
    }

    for (slot, action) in [
        ("primaryAction", control.primary_action.as_ref()),
        ("secondaryAction", control.secondary_action.as_ref()),
    ] {
        match action {
            Some(ControlAction::Component {
                component: Some(component),
                ..
            }) if !ui.components.contains_key(component) => {
                msgs.push(format!("{path}: {slot} component not found"));
            }
            Some(ControlAction::Window {
                window: Some(target),
                ..
            }) if !ui.windows.contains_key(target) => {
                msgs.push(format!("{path}: {slot} window not found"));
            }
            _ => {}
        }
    }
}

fn validate_display(ui: &UiProject, path: &str, display: &ControlDisplay, msgs: &mut Vec<String>) {
    if let Some(default_image) = display.default_image {
        if !ui.images.contains_key(&default_image) {
            msgs.push(format!("{path}: default image not found"));
        }
    }
    for item in &display.map {
        if let Some(image) = item.image {
            if !ui.images.contains_key(&image) {
                msgs.push(format!("{path}: display map item image not found"));
            }
        }
    }

    let Some(component) = display.component else {
        return;
    };
    let Some(component) = ui.components.get(&component) else {
        msgs.push(format!("{path}: display component not found"));
        return;
    };
    let Some(attribute) = display.attribute.as_deref() else {
        return;
    };
    let Some(attribute) = component.plugin.clazz.attribute(attribute) else {
        msgs.push(format!(
            "{path}: attribute {attribute} not found on component {}",
            component.id
        ));
        return;
    };

    match &attribute.kind {
        AttributeType::Enum { .. } => {
            let check = check_ids(display.map.iter().map(|i| i.value.as_deref()));
            if check.no_id > 0 {
                msgs.push(format!(
                    "{path}: {} display map items have no value",
                    check.no_id
                ));
            }
            for value in check.duplicates {
                msgs.push(format!("{path}: duplicate display map item value: {value}"));
            }
        }
        AttributeType::Range { min, max } => {
            validate_ranges(path, display, *min, *max, msgs);
        }
        AttributeType::Text | AttributeType::Boolean => {}
    }
}

fn validate_ranges(
    path: &str,
    display: &ControlDisplay,
    attr_min: f64,
    attr_max: f64,
    msgs: &mut Vec<String>,
) {
    let mut ranges: Vec<(f64, f64)> = Vec::new();
    for item in &display.map {
        match (item.min, item.max) {
            (Some(min), Some(max)) => ranges.push((min, max)),
            _ => msgs.push(format!("{path}: display map item has no range")),
        }
    }

    // Sort by lower bound, then a single pass flags invalid ranges, ranges
    // escaping the attribute bounds, and overlaps with the previous range.
    ranges.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut prev: Option<(f64, f64)> = None;
    for (min, max) in ranges {
        if min > max {
            msgs.push(format!("{path}: Range [{min}-{max}] is invalid"));
            continue;
        }
        if min < attr_min || max > attr_max {
            msgs.push(format!(
                "{path}: Range [{min}-{max}] is outside attribute type boundaries [{attr_min}-{attr_max}]"
            ));
        }
        if let Some((prev_min, prev_max)) = prev {
            if min <= prev_max {
                msgs.push(format!(
                    "{path}: Range [{min}-{max}] overlap range [{prev_min}-{prev_max}]"
                ));
            }
        }
        prev = Some((min, max));
    }
}

fn resolve_window(ui: &UiProject, window: Option<studio_types::WindowId>) -> Option<&Window> {
    window.and_then(|uid| ui.windows.get(&uid))
}
