use studio_types::{BindingId, ComponentId};

/// A VPanel wiring binding: when the remote component's attribute changes,
/// the local component's action is invoked.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub uid: BindingId,
    pub remote: Option<ComponentId>,
    pub remote_attribute: String,
    pub local: Option<ComponentId>,
    pub local_action: String,
}

impl Binding {
    /// Creates a binding with a fresh opaque id.
    pub fn new(
        remote: Option<ComponentId>,
        remote_attribute: impl Into<String>,
        local: Option<ComponentId>,
        local_action: impl Into<String>,
    ) -> Self {
        Self {
            uid: BindingId::new(),
            remote,
            remote_attribute: remote_attribute.into(),
            local,
            local_action: local_action.into(),
        }
    }

    /// Returns true when the binding references the given component on
    /// either endpoint.
    pub fn references(&self, component: ComponentId) -> bool {
        self.remote == Some(component) || self.local == Some(component)
    }
}
