// ── Domain model ──
//
// Every type in this module is the canonical representation of an entity
// in the buildings document, or a view derived from it.

pub mod device;
pub mod node;
pub mod node_id;
pub mod sidebar;

// ── Re-exports ──────────────────────────────────────────────────────

pub use device::{Device, LOCATION_SEPARATOR, LocatedDevice, UNKNOWN_DEVICE_TYPE};
pub use node::{Building, HierarchyNode, NodeKind, UNNAMED};
pub use node_id::NodeId;
pub use sidebar::SidebarNode;
