// ── Hierarchy transform engine ──
//
// Pure, side-effect-free walks over the buildings tree. Every function
// returns a freshly built view and leaves its input untouched, so calling
// one twice on the same tree yields identical output.

mod count;
mod extract;
mod group;
mod sidebar;

pub use count::{BuildingSummary, CountKind, count, count_online};
pub use extract::extract_all_devices;
pub use group::{DeviceGroups, group_by_type, sorted_group_keys};
pub use sidebar::{build_children, build_sidebar_tree};
