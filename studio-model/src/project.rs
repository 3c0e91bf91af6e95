//! The project aggregate and its named mutation operations.

use crate::error::{ModelError, ModelResult};
use crate::{
    Binding, Component, ControlAction, ControlContent, ControlContentKind, Image, Window,
};
use crate::window::{ActionSlot, Control};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fmt;
use studio_types::{
    BindingId, ComponentId, ControlId, ImageId, ItemId, PluginDescriptor, ProjectId, WindowId,
};

/// The two project kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    Vpanel,
    Ui,
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectKind::Vpanel => write!(f, "vpanel"),
            ProjectKind::Ui => write!(f, "ui"),
        }
    }
}

/// An open project: identity, timestamps, dirty flag, and the kind-specific
/// entity graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    /// Opaque id, regenerated on every open. Never persisted.
    pub uid: ProjectId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// True when in-memory state diverged from the persisted content.
    pub dirty: bool,
    pub data: ProjectData,
}

/// Kind-specific project content.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectData {
    Ui(UiProject),
    Vpanel(VpanelProject),
}

impl Project {
    /// Creates an empty UI project. New projects start dirty.
    pub fn new_ui(name: impl Into<String>) -> Self {
        Self::new_inner(name.into(), ProjectData::Ui(UiProject::default()))
    }

    /// Creates an empty VPanel project. New projects start dirty.
    pub fn new_vpanel(name: impl Into<String>) -> Self {
        Self::new_inner(name.into(), ProjectData::Vpanel(VpanelProject::default()))
    }

    fn new_inner(name: String, data: ProjectData) -> Self {
        let now = Utc::now();
        Self {
            uid: ProjectId::new(),
            name,
            created_at: now,
            updated_at: now,
            dirty: true,
            data,
        }
    }

    /// Returns the project kind.
    pub fn kind(&self) -> ProjectKind {
        match &self.data {
            ProjectData::Ui(_) => ProjectKind::Ui,
            ProjectData::Vpanel(_) => ProjectKind::Vpanel,
        }
    }

    /// Returns the UI graph, or `KindMismatch` for a VPanel project.
    pub fn ui(&self) -> ModelResult<&UiProject> {
        match &self.data {
            ProjectData::Ui(ui) => Ok(ui),
            ProjectData::Vpanel(_) => Err(ModelError::KindMismatch {
                expected: ProjectKind::Ui,
            }),
        }
    }

    /// Mutable access to the UI graph.
    pub fn ui_mut(&mut self) -> ModelResult<&mut UiProject> {
        match &mut self.data {
            ProjectData::Ui(ui) => Ok(ui),
            ProjectData::Vpanel(_) => Err(ModelError::KindMismatch {
                expected: ProjectKind::Ui,
            }),
        }
    }

    /// Returns the VPanel graph, or `KindMismatch` for a UI project.
    pub fn vpanel(&self) -> ModelResult<&VpanelProject> {
        match &self.data {
            ProjectData::Vpanel(vpanel) => Ok(vpanel),
            ProjectData::Ui(_) => Err(ModelError::KindMismatch {
                expected: ProjectKind::Vpanel,
            }),
        }
    }

    /// Mutable access to the VPanel graph.
    pub fn vpanel_mut(&mut self) -> ModelResult<&mut VpanelProject> {
        match &mut self.data {
            ProjectData::Vpanel(vpanel) => Ok(vpanel),
            ProjectData::Ui(_) => Err(ModelError::KindMismatch {
                expected: ProjectKind::Vpanel,
            }),
        }
    }

    /// Marks the project modified. Called by the command layer after every
    /// applied mutation.
    pub fn touch(&mut self) {
        self.dirty = true;
        self.updated_at = Utc::now();
    }

    /// Clears the dirty flag after a successful save.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }
}

/// The UI project graph: components, images, windows and default windows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiProject {
    pub components: BTreeMap<ComponentId, Component>,
    pub images: BTreeMap<ImageId, Image>,
    pub windows: BTreeMap<WindowId, Window>,
    pub desktop_default_window: Option<WindowId>,
    pub mobile_default_window: Option<WindowId>,
}

impl UiProject {
    // ── Lookups ──────────────────────────────────────────────────

    /// Looks a component up by opaque id.
    pub fn component(&self, uid: ComponentId) -> Option<&Component> {
        self.components.get(&uid)
    }

    /// Looks a component up by persisted id.
    pub fn find_component(&self, id: &str) -> Option<&Component> {
        self.components.values().find(|c| c.id == id)
    }

    /// Looks an image up by opaque id.
    pub fn image(&self, uid: ImageId) -> Option<&Image> {
        self.images.get(&uid)
    }

    /// Looks an image up by persisted id.
    pub fn find_image(&self, id: &str) -> Option<&Image> {
        self.images.values().find(|i| i.id == id)
    }

    /// Looks a window up by opaque id.
    pub fn window(&self, uid: WindowId) -> Option<&Window> {
        self.windows.get(&uid)
    }

    /// Looks a window up by persisted id.
    pub fn find_window(&self, id: &str) -> Option<&Window> {
        self.windows.values().find(|w| w.id == id)
    }

    // ── Component operations ─────────────────────────────────────

    /// Adds a component and returns its opaque id.
    pub fn add_component(&mut self, id: impl Into<String>, plugin: PluginDescriptor) -> ComponentId {
        let component = Component::new(id, plugin);
        let uid = component.uid;
        self.components.insert(uid, component);
        uid
    }

    /// Replaces a component's plugin descriptor, keeping its opaque id — and
    /// therefore every still-valid binding to it.
    pub fn set_component_plugin(
        &mut self,
        uid: ComponentId,
        plugin: PluginDescriptor,
    ) -> ModelResult<()> {
        let component = self
            .components
            .get_mut(&uid)
            .ok_or(ModelError::UnknownComponent(uid))?;
        component.plugin = plugin;
        Ok(())
    }

    /// Removes a component, cascade-removing every binding-like reference to
    /// it: control actions targeting it, text-context items reading it, and
    /// display bindings driven by it.
    pub fn remove_component(&mut self, uid: ComponentId) -> ModelResult<()> {
        if !self.components.contains_key(&uid) {
            return Err(ModelError::UnknownComponent(uid));
        }

        for window in self.windows.values_mut() {
            for control in window.controls.values_mut() {
                for slot in ActionSlot::ALL {
                    let targets = matches!(
                        control.action(slot),
                        Some(ControlAction::Component {
                            component: Some(c),
                            ..
                        }) if *c == uid
                    );
                    if targets {
                        control.set_action(slot, None);
                    }
                }

                match &mut control.content {
                    ControlContent::Text(text) => {
                        text.context.retain(|item| item.component != Some(uid));
                    }
                    ControlContent::Display(display) => {
                        if display.component == Some(uid) {
                            display.component = None;
                            display.attribute = None;
                        }
                    }
                }
            }
        }

        self.components.remove(&uid);
        Ok(())
    }

    // ── Image operations ─────────────────────────────────────────

    /// Adds an empty image and returns its opaque id.
    pub fn add_image(&mut self) -> ImageId {
        let image = Image::new();
        let uid = image.uid;
        self.images.insert(uid, image);
        uid
    }

    /// Sets an image's base64 content.
    pub fn set_image_content(&mut self, uid: ImageId, content: Option<String>) -> ModelResult<()> {
        let image = self.images.get_mut(&uid).ok_or(ModelError::UnknownImage(uid))?;
        image.content = content;
        Ok(())
    }

    /// Removes an image. Fails with `Usage` when any window background,
    /// display default or display mapping still references it.
    pub fn remove_image(&mut self, uid: ImageId) -> ModelResult<()> {
        if !self.images.contains_key(&uid) {
            return Err(ModelError::UnknownImage(uid));
        }
        let sites = self.image_usage(uid);
        if !sites.is_empty() {
            return Err(ModelError::Usage {
                subject: "image".to_string(),
                sites,
            });
        }
        self.images.remove(&uid);
        Ok(())
    }

    // ── Window operations ────────────────────────────────────────

    /// Adds an empty window and returns its opaque id.
    pub fn add_window(&mut self) -> WindowId {
        let window = Window::new();
        let uid = window.uid;
        self.windows.insert(uid, window);
        uid
    }

    /// Sets a window's background image reference.
    pub fn set_window_background(
        &mut self,
        uid: WindowId,
        background: Option<ImageId>,
    ) -> ModelResult<()> {
        let window = self.windows.get_mut(&uid).ok_or(ModelError::UnknownWindow(uid))?;
        window.background = background;
        Ok(())
    }

    /// Removes a window. Fails with `Usage` when it is a default window or a
    /// navigation action still targets it.
    pub fn remove_window(&mut self, uid: WindowId) -> ModelResult<()> {
        if !self.windows.contains_key(&uid) {
            return Err(ModelError::UnknownWindow(uid));
        }
        let sites = self.window_usage(uid);
        if !sites.is_empty() {
            return Err(ModelError::Usage {
                subject: "window".to_string(),
                sites,
            });
        }
        self.windows.remove(&uid);
        Ok(())
    }

    /// Sets the desktop default window.
    pub fn set_desktop_default(&mut self, window: Option<WindowId>) {
        self.desktop_default_window = window;
    }

    /// Sets the mobile default window.
    pub fn set_mobile_default(&mut self, window: Option<WindowId>) {
        self.mobile_default_window = window;
    }

    // ── Control operations ───────────────────────────────────────

    /// Adds a control at the given pixel location on a window.
    pub fn add_control(
        &mut self,
        window: WindowId,
        x_px: f64,
        y_px: f64,
        kind: ControlContentKind,
    ) -> ModelResult<ControlId> {
        let window = self
            .windows
            .get_mut(&window)
            .ok_or(ModelError::UnknownWindow(window))?;
        let control = Control::new(window, x_px, y_px, kind);
        let uid = control.uid;
        window.controls.insert(uid, control);
        Ok(uid)
    }

    /// Removes a control from a window.
    pub fn remove_control(&mut self, window: WindowId, control: ControlId) -> ModelResult<()> {
        let window = self
            .windows
            .get_mut(&window)
            .ok_or(ModelError::UnknownWindow(window))?;
        window
            .controls
            .remove(&control)
            .map(|_| ())
            .ok_or(ModelError::UnknownControl(control))
    }

    fn control_mut(&mut self, window: WindowId, control: ControlId) -> ModelResult<&mut Control> {
        let window = self
            .windows
            .get_mut(&window)
            .ok_or(ModelError::UnknownWindow(window))?;
        window
            .controls
            .get_mut(&control)
            .ok_or(ModelError::UnknownControl(control))
    }

    /// Replaces the action in one slot of a control.
    pub fn set_control_action(
        &mut self,
        window: WindowId,
        control: ControlId,
        slot: ActionSlot,
        action: Option<ControlAction>,
    ) -> ModelResult<()> {
        self.control_mut(window, control)?.set_action(slot, action);
        Ok(())
    }

    /// Removes one text-context item from a text control.
    pub fn remove_text_context_item(
        &mut self,
        window: WindowId,
        control: ControlId,
        item: ItemId,
    ) -> ModelResult<()> {
        if let Some(text) = self.control_mut(window, control)?.text_mut() {
            text.context.retain(|i| i.uid != item);
        }
        Ok(())
    }

    /// Clears the component binding of a display control, keeping its images.
    pub fn clear_display_binding(&mut self, window: WindowId, control: ControlId) -> ModelResult<()> {
        if let Some(display) = self.control_mut(window, control)?.display_mut() {
            display.component = None;
            display.attribute = None;
        }
        Ok(())
    }
}

/// The VPanel project graph: components and the bindings wiring them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VpanelProject {
    pub components: BTreeMap<ComponentId, Component>,
    pub bindings: BTreeMap<BindingId, Binding>,
}

impl VpanelProject {
    /// Looks a component up by opaque id.
    pub fn component(&self, uid: ComponentId) -> Option<&Component> {
        self.components.get(&uid)
    }

    /// Looks a component up by persisted id.
    pub fn find_component(&self, id: &str) -> Option<&Component> {
        self.components.values().find(|c| c.id == id)
    }

    /// Adds a component and returns its opaque id.
    pub fn add_component(&mut self, id: impl Into<String>, plugin: PluginDescriptor) -> ComponentId {
        let component = Component::new(id, plugin);
        let uid = component.uid;
        self.components.insert(uid, component);
        uid
    }

    /// Replaces a component's plugin descriptor, keeping its opaque id.
    pub fn set_component_plugin(
        &mut self,
        uid: ComponentId,
        plugin: PluginDescriptor,
    ) -> ModelResult<()> {
        let component = self
            .components
            .get_mut(&uid)
            .ok_or(ModelError::UnknownComponent(uid))?;
        component.plugin = plugin;
        Ok(())
    }

    /// Removes a component, cascade-removing every binding that still
    /// references it on either endpoint.
    pub fn remove_component(&mut self, uid: ComponentId) -> ModelResult<()> {
        if !self.components.contains_key(&uid) {
            return Err(ModelError::UnknownComponent(uid));
        }
        self.bindings.retain(|_, binding| !binding.references(uid));
        self.components.remove(&uid);
        Ok(())
    }

    /// Adds a binding and returns its opaque id.
    pub fn add_binding(&mut self, binding: Binding) -> BindingId {
        let uid = binding.uid;
        self.bindings.insert(uid, binding);
        uid
    }

    /// Removes a binding.
    pub fn remove_binding(&mut self, uid: BindingId) -> ModelResult<()> {
        self.bindings
            .remove(&uid)
            .map(|_| ())
            .ok_or(ModelError::UnknownBinding(uid))
    }
}
