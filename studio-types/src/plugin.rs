//! Plugin descriptors and class metadata.
//!
//! A component references a plugin: the driver/ui module that implements it
//! on the target deployment. The descriptor carries the plugin's identity
//! (library, type, version), its configuration, and its class — the typed
//! attributes that can be read and the actions that can be invoked.
//!
//! These types are part of the persisted schema (a component's `Plugin`
//! field), so the serde names follow the legacy file format.

use serde::{Deserialize, Serialize};

/// Which project kind a plugin is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluginUsage {
    /// Hardware driver, wired in VPanel projects only.
    Driver,
    /// Virtual panel logic component.
    Vpanel,
    /// UI-facing component, bindable from windows and controls.
    Ui,
}

/// Descriptor of the plugin backing a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    pub library: String,
    #[serde(rename = "type")]
    pub name: String,
    pub usage: PluginUsage,
    pub version: String,
    /// Plugin configuration, opaque to the engine.
    #[serde(default)]
    pub config: serde_json::Value,
    pub clazz: PluginClass,
}

impl PluginDescriptor {
    /// Returns the `library.type` pair used to look a plugin up in the
    /// metadata provider.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.library, self.name)
    }
}

/// Class metadata: the attributes and actions a plugin exposes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginClass {
    #[serde(default)]
    pub attributes: Vec<AttributeSpec>,
    #[serde(default)]
    pub actions: Vec<ActionSpec>,
}

impl PluginClass {
    /// Looks up an attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&AttributeSpec> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Looks up an action by name.
    pub fn action(&self, name: &str) -> Option<&ActionSpec> {
        self.actions.iter().find(|a| a.name == name)
    }
}

/// A named, typed, readable attribute of a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AttributeType,
}

/// The declared type of an attribute.
///
/// Display controls bind against these: a `Range` attribute drives min/max
/// mapping items, an `Enum` attribute drives value mapping items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "primitive", rename_all = "snake_case")]
pub enum AttributeType {
    /// Numeric attribute bounded to `[min, max]`.
    Range { min: f64, max: f64 },
    /// Enumerated attribute restricted to a fixed value set.
    Enum { values: Vec<String> },
    /// Free-form text attribute.
    Text,
    /// Boolean attribute.
    Boolean,
}

impl AttributeType {
    /// Returns true for enumerated attributes.
    pub fn is_enum(&self) -> bool {
        matches!(self, Self::Enum { .. })
    }
}

/// A named, invokable action of a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionSpec {
    pub name: String,
    /// Declared parameter type names, in call order.
    #[serde(default)]
    pub types: Vec<String>,
}

impl ActionSpec {
    /// Returns true when the action takes no parameters — the only shape a
    /// control action binding can invoke.
    pub fn is_parameterless(&self) -> bool {
        self.types.is_empty()
    }
}
