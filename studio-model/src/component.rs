use studio_types::{ComponentId, PluginDescriptor};

/// A wired component instance.
///
/// `uid` is the process-local opaque id; `id` is the human-assigned persisted
/// id, unique among the project's components.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub uid: ComponentId,
    pub id: String,
    pub plugin: PluginDescriptor,
}

impl Component {
    /// Creates a component with a fresh opaque id.
    pub fn new(id: impl Into<String>, plugin: PluginDescriptor) -> Self {
        Self {
            uid: ComponentId::new(),
            id: id.into(),
            plugin,
        }
    }
}
