//! Opaque identifier types used throughout the Home Studio core.
//!
//! Uses UUID v7 for time-ordered, globally unique identifiers. Entity
//! collections are keyed by these ids in `BTreeMap`s, so the derived `Ord`
//! makes iteration follow creation order — plans and diffs computed over the
//! same in-memory graph are therefore deterministic.
//!
//! None of these types implement serde traits: opaque ids are assigned at
//! load/creation time and discarded with the project, never persisted.

use std::fmt;
use uuid::Uuid;

macro_rules! opaque_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a fresh id with the current timestamp.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an id from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the underlying UUID.
            #[must_use]
            pub const fn as_uuid(&self) -> Uuid {
                self.0
            }

            /// Parses an id from a string.
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

opaque_id!(
    /// Identifier of an open project. Assigned when the project is created or
    /// opened; a project opened twice gets two distinct ids.
    ProjectId
);

opaque_id!(
    /// Identifier of a component within a project.
    ComponentId
);

opaque_id!(
    /// Identifier of an image resource within a UI project.
    ImageId
);

opaque_id!(
    /// Identifier of a window within a UI project.
    WindowId
);

opaque_id!(
    /// Identifier of a control within a window.
    ControlId
);

opaque_id!(
    /// Identifier of a per-control item: a text-context entry or a
    /// display-mapping entry.
    ItemId
);

opaque_id!(
    /// Identifier of a binding within a VPanel project.
    BindingId
);

opaque_id!(
    /// Identifier of a planned operation (import or deploy).
    OperationId
);
