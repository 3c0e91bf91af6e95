//! Plugin metadata provider.

use studio_types::PluginClass;

/// Collaborator describing plugin classes by `(library, type)` pair.
///
/// Import candidate sets built from a live deployment get their class
/// metadata from here; candidates built from another project carry it
/// already.
pub trait MetadataProvider: Send + Sync {
    /// Returns the class descriptor for a plugin type, if known.
    fn describe(&self, library: &str, name: &str) -> Option<PluginClass>;
}
