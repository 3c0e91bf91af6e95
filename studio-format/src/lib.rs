//! Persisted project format: the legacy wire schema and its bidirectional
//! mapping to the in-memory graph.
//!
//! The schema structs in [`schema`] are the wire contract — field names must
//! round-trip byte-for-byte, so every legacy name is pinned with a serde
//! rename. Loading is two-phase: phase 1 instantiates leaf entities and
//! records per-kind persisted-id→opaque-id tables, phase 2 resolves every
//! cross-reference (forward references included) through those tables, which
//! are then dropped. Serializing walks the graph back, translating opaque
//! ids through the referenced entity's own persisted id; null or dangling
//! references serialize as `null`.
//!
//! Round-trip law: `open(serialize(p))` is structurally equivalent to `p`
//! for every persisted id, value and reference. Opaque ids differ.

mod error;
mod load;
mod save;
pub mod schema;

pub use error::{FormatError, FormatResult};
pub use load::{open, open_ui, open_vpanel};
pub use save::{
    serialize_to_string, serialize_ui, serialize_vpanel, window_to_schema,
};
