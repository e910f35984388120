// facilities-core: Hierarchy transforms and dashboard state between facilities-api and the CLI.

pub mod address;
pub mod debounce;
pub mod error;
pub mod model;
pub mod search;
pub mod selection;
pub mod store;
pub mod transform;

// ── Primary re-exports ──────────────────────────────────────────────
pub use address::{Address, split_address};
pub use debounce::{DEFAULT_DEBOUNCE, DebounceHandle, Debouncer};
pub use error::CoreError;
pub use search::{DeviceFilter, filter_devices};
pub use selection::{GroupSelection, Selection};
pub use store::{DashboardStore, Snapshot, buildings_from_payload, load_buildings};
pub use transform::{
    BuildingSummary, CountKind, DeviceGroups, build_children, build_sidebar_tree, count,
    count_online, extract_all_devices, group_by_type, sorted_group_keys,
};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    Building, Device, HierarchyNode, LocatedDevice, NodeId, NodeKind, SidebarNode,
    UNKNOWN_DEVICE_TYPE, UNNAMED,
};
