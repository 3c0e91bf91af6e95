//! Reference-site enumeration for deletion checks.
//!
//! Each report walks the whole graph and returns one path per reference
//! site, in the ` - window/control/field` shape surfaced verbatim inside
//! `ModelError::Usage` messages.

use crate::project::UiProject;
use crate::window::{ActionSlot, ControlAction, ControlContent};
use studio_types::{ComponentId, ImageId, WindowId};

impl UiProject {
    /// Every site referencing a component: control actions, text-context
    /// items and display bindings.
    pub fn component_usage(&self, component: ComponentId) -> Vec<String> {
        let mut usage = Vec::new();

        for window in self.windows.values() {
            for control in window.controls.values() {
                for slot in ActionSlot::ALL {
                    let targets = matches!(
                        control.action(slot),
                        Some(ControlAction::Component {
                            component: Some(c),
                            ..
                        }) if *c == component
                    );
                    if targets {
                        usage.push(format!(" - {}/{}/{}", window.id, control.id, slot));
                    }
                }

                match &control.content {
                    ControlContent::Text(text) => {
                        for item in &text.context {
                            if item.component == Some(component) {
                                usage.push(format!(
                                    " - {}/{}/text/{}",
                                    window.id, control.id, item.id
                                ));
                            }
                        }
                    }
                    ControlContent::Display(display) => {
                        if display.component == Some(component) {
                            usage.push(format!(" - {}/{}/display", window.id, control.id));
                        }
                    }
                }
            }
        }

        usage
    }

    /// Every site referencing an image: window backgrounds, display defaults
    /// and display mappings (one site per control for mappings).
    pub fn image_usage(&self, image: ImageId) -> Vec<String> {
        let mut usage = Vec::new();

        for window in self.windows.values() {
            if window.background == Some(image) {
                usage.push(format!(" - {}/backgroundResource", window.id));
            }

            for control in window.controls.values() {
                let ControlContent::Display(display) = &control.content else {
                    continue;
                };

                if display.default_image == Some(image) {
                    usage.push(format!(" - {}/{}/defaultResource", window.id, control.id));
                }

                if display.map.iter().any(|item| item.image == Some(image)) {
                    usage.push(format!(" - {}/{}/display/mapping", window.id, control.id));
                }
            }
        }

        usage
    }

    /// Every site referencing a window: the default-window slots and
    /// navigation actions.
    pub fn window_usage(&self, window: WindowId) -> Vec<String> {
        let mut usage = Vec::new();

        if self.desktop_default_window == Some(window) {
            usage.push(" - desktopDefaultWindow".to_string());
        }
        if self.mobile_default_window == Some(window) {
            usage.push(" - mobileDefaultWindow".to_string());
        }

        for iter_window in self.windows.values() {
            for control in iter_window.controls.values() {
                for slot in ActionSlot::ALL {
                    let targets = matches!(
                        control.action(slot),
                        Some(ControlAction::Window {
                            window: Some(w),
                            ..
                        }) if *w == window
                    );
                    if targets {
                        usage.push(format!(" - {}/{}/{}", iter_window.id, control.id, slot));
                    }
                }
            }
        }

        usage
    }
}
