//! Windows and the controls they own.
//!
//! A control shows exactly one kind of content — formatted text or an
//! attribute-driven image — modeled as the [`ControlContent`] tagged enum.
//! The same goes for a control action: either a component action invocation
//! or a window navigation, never both.

use std::collections::BTreeMap;
use std::fmt;
use studio_types::{ComponentId, ControlId, ImageId, ItemId, WindowId};

/// A presentation window.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    pub uid: WindowId,
    pub id: String,
    pub height: u32,
    pub width: u32,
    pub style: String,
    /// Background image, if any.
    pub background: Option<ImageId>,
    pub controls: BTreeMap<ControlId, Control>,
}

impl Window {
    /// Creates an empty 500x500 window with a generated persisted id.
    pub fn new() -> Self {
        let uid = WindowId::new();
        Self {
            uid,
            id: format!("window_{uid}"),
            height: 500,
            width: 500,
            style: String::new(),
            background: None,
            controls: BTreeMap::new(),
        }
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::new()
    }
}

/// A control placed on a window.
///
/// Position is fractional (`x`, `y` in `[0, 1]` relative to the window),
/// size is in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub uid: ControlId,
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub height: u32,
    pub width: u32,
    pub style: String,
    pub content: ControlContent,
    pub primary_action: Option<ControlAction>,
    pub secondary_action: Option<ControlAction>,
}

impl Control {
    /// Creates a 50x50 control at the given pixel location on `window`,
    /// with empty content of the requested kind.
    pub fn new(window: &Window, x_px: f64, y_px: f64, kind: ControlContentKind) -> Self {
        let uid = ControlId::new();
        Self {
            uid,
            id: format!("control_{uid}"),
            x: x_px / f64::from(window.width),
            y: y_px / f64::from(window.height),
            height: 50,
            width: 50,
            style: String::new(),
            content: match kind {
                ControlContentKind::Text => ControlContent::Text(ControlText::default()),
                ControlContentKind::Display => ControlContent::Display(ControlDisplay::default()),
            },
            primary_action: None,
            secondary_action: None,
        }
    }

    /// Returns the action in the given slot.
    pub fn action(&self, slot: ActionSlot) -> Option<&ControlAction> {
        match slot {
            ActionSlot::Primary => self.primary_action.as_ref(),
            ActionSlot::Secondary => self.secondary_action.as_ref(),
        }
    }

    /// Replaces the action in the given slot.
    pub fn set_action(&mut self, slot: ActionSlot, action: Option<ControlAction>) {
        match slot {
            ActionSlot::Primary => self.primary_action = action,
            ActionSlot::Secondary => self.secondary_action = action,
        }
    }

    /// Text content, if this is a text control.
    pub fn text(&self) -> Option<&ControlText> {
        match &self.content {
            ControlContent::Text(text) => Some(text),
            ControlContent::Display(_) => None,
        }
    }

    /// Mutable text content, if this is a text control.
    pub fn text_mut(&mut self) -> Option<&mut ControlText> {
        match &mut self.content {
            ControlContent::Text(text) => Some(text),
            ControlContent::Display(_) => None,
        }
    }

    /// Display content, if this is a display control.
    pub fn display(&self) -> Option<&ControlDisplay> {
        match &self.content {
            ControlContent::Display(display) => Some(display),
            ControlContent::Text(_) => None,
        }
    }

    /// Mutable display content, if this is a display control.
    pub fn display_mut(&mut self) -> Option<&mut ControlDisplay> {
        match &mut self.content {
            ControlContent::Display(display) => Some(display),
            ControlContent::Text(_) => None,
        }
    }
}

/// Which content a new control gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlContentKind {
    Text,
    Display,
}

/// The single content variant of a control.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlContent {
    Text(ControlText),
    Display(ControlDisplay),
}

/// Formatted text fed by component attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlText {
    /// Format string; context item ids are interpolated into it.
    pub format: String,
    pub context: Vec<TextContextItem>,
}

/// One named input of a text control's format string.
#[derive(Debug, Clone, PartialEq)]
pub struct TextContextItem {
    pub uid: ItemId,
    /// Persisted id, unique among the control's context items.
    pub id: String,
    pub component: Option<ComponentId>,
    pub attribute: Option<String>,
}

impl TextContextItem {
    pub fn new(
        id: impl Into<String>,
        component: Option<ComponentId>,
        attribute: Option<String>,
    ) -> Self {
        Self {
            uid: ItemId::new(),
            id: id.into(),
            component,
            attribute,
        }
    }
}

/// An image driven by a component attribute value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlDisplay {
    pub component: Option<ComponentId>,
    pub attribute: Option<String>,
    /// Shown when no mapping item matches the current value.
    pub default_image: Option<ImageId>,
    pub map: Vec<DisplayMapping>,
}

/// One display mapping item.
///
/// For a range-typed attribute `min`/`max` select the value interval; for an
/// enum-typed attribute `value` selects the member. The unused fields stay
/// `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayMapping {
    pub uid: ItemId,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub value: Option<String>,
    pub image: Option<ImageId>,
}

impl DisplayMapping {
    /// A range mapping item.
    pub fn range(min: f64, max: f64, image: Option<ImageId>) -> Self {
        Self {
            uid: ItemId::new(),
            min: Some(min),
            max: Some(max),
            value: None,
            image,
        }
    }

    /// An enum-value mapping item.
    pub fn value(value: impl Into<String>, image: Option<ImageId>) -> Self {
        Self {
            uid: ItemId::new(),
            min: None,
            max: None,
            value: Some(value.into()),
            image,
        }
    }
}

/// A control action: invoke a component action, or navigate to a window.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlAction {
    Component {
        component: Option<ComponentId>,
        action: Option<String>,
    },
    Window {
        window: Option<WindowId>,
        popup: bool,
    },
}

/// The two action slots of a control. `Display` renders the legacy path
/// segment used in messages and operation records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionSlot {
    Primary,
    Secondary,
}

impl ActionSlot {
    /// Both slots, in path order.
    pub const ALL: [ActionSlot; 2] = [ActionSlot::Primary, ActionSlot::Secondary];
}

impl fmt::Display for ActionSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionSlot::Primary => write!(f, "primaryAction"),
            ActionSlot::Secondary => write!(f, "secondaryAction"),
        }
    }
}
