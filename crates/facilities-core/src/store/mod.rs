// ── Dashboard data store ──
//
// Holds the buildings document of the latest fetch and the views derived
// from it. Swapped wholesale on every re-fetch.

mod dashboard_store;
mod refresh;
mod snapshot;

pub use dashboard_store::DashboardStore;
pub use refresh::{buildings_from_payload, load_buildings};
pub use snapshot::Snapshot;
