//! The persisted schema, one struct per wire object.
//!
//! Top-level fields keep their legacy PascalCase names; window and control
//! fields are snake_case as the original files have them. Collections
//! tolerate absence (`#[serde(default)]`), references are `Option` and
//! serialize as `null` when unset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use studio_types::PluginDescriptor;

/// A persisted UI project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiProjectSchema {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "CreationDate")]
    pub creation_date: DateTime<Utc>,
    #[serde(rename = "LastUpdate")]
    pub last_update: DateTime<Utc>,
    #[serde(rename = "Components", default)]
    pub components: Vec<ComponentSchema>,
    #[serde(rename = "Images", default)]
    pub images: Vec<ImageSchema>,
    #[serde(rename = "Windows", default)]
    pub windows: Vec<WindowSchema>,
    #[serde(rename = "DesktopDefaultWindow", default)]
    pub desktop_default_window: Option<String>,
    #[serde(rename = "MobileDefaultWindow", default)]
    pub mobile_default_window: Option<String>,
    /// Legacy single-default field: populates both defaults when the split
    /// fields are absent. Read-only, never written back.
    #[serde(rename = "DefaultWindow", default, skip_serializing)]
    pub default_window: Option<String>,
}

/// A persisted VPanel project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VpanelProjectSchema {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "CreationDate")]
    pub creation_date: DateTime<Utc>,
    #[serde(rename = "LastUpdate")]
    pub last_update: DateTime<Utc>,
    #[serde(rename = "Components", default)]
    pub components: Vec<ComponentSchema>,
    #[serde(rename = "Bindings", default)]
    pub bindings: Vec<BindingSchema>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSchema {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Plugin")]
    pub plugin: PluginDescriptor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSchema {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Content")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingSchema {
    pub remote_id: Option<String>,
    pub remote_attribute: String,
    pub local_id: Option<String>,
    pub local_action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSchema {
    pub id: String,
    pub height: u32,
    pub width: u32,
    #[serde(default)]
    pub style: String,
    pub background_resource_id: Option<String>,
    #[serde(default)]
    pub controls: Vec<ControlSchema>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlSchema {
    pub id: String,
    pub height: u32,
    pub width: u32,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub style: String,
    pub display: Option<DisplaySchema>,
    pub text: Option<TextSchema>,
    pub primary_action: Option<ActionSchema>,
    pub secondary_action: Option<ActionSchema>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySchema {
    pub component_id: Option<String>,
    pub component_attribute: Option<String>,
    pub default_resource_id: Option<String>,
    #[serde(default)]
    pub map: Vec<MappingSchema>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingSchema {
    pub max: Option<f64>,
    pub min: Option<f64>,
    pub resource_id: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSchema {
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub context: Vec<ContextItemSchema>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextItemSchema {
    pub id: String,
    pub component_id: Option<String>,
    pub component_attribute: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionSchema {
    pub component: Option<ComponentActionSchema>,
    pub window: Option<WindowActionSchema>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentActionSchema {
    pub component_id: Option<String>,
    pub component_action: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowActionSchema {
    pub id: Option<String>,
    pub popup: bool,
}
