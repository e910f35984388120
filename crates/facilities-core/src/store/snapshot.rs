// ── Immutable fetch snapshot ──
//
// Derived views are computed on first access and cached for the lifetime
// of the snapshot. A new fetch produces a new snapshot, never a mutation.

use std::sync::{Arc, OnceLock};

use crate::model::{Building, LocatedDevice, SidebarNode};
use crate::transform::{
    BuildingSummary, DeviceGroups, build_sidebar_tree, extract_all_devices, group_by_type,
};

/// One fetched buildings document plus its memoized views.
#[derive(Debug, Default)]
pub struct Snapshot {
    version: u64,
    buildings: Arc<Vec<Building>>,
    devices: OnceLock<Vec<LocatedDevice>>,
    groups: OnceLock<DeviceGroups<LocatedDevice>>,
    sidebar: OnceLock<Vec<SidebarNode>>,
}

impl Snapshot {
    pub fn new(version: u64, buildings: Vec<Building>) -> Self {
        Self {
            version,
            buildings: Arc::new(buildings),
            ..Self::default()
        }
    }

    /// Monotonic counter, `0` for the empty snapshot a store starts with.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    /// Building whose id displays as `id`.
    pub fn building(&self, id: &str) -> Option<&Building> {
        self.buildings
            .iter()
            .find(|b| b.id.as_ref().is_some_and(|bid| *bid == *id))
    }

    pub fn summary(&self, building: &Building) -> BuildingSummary {
        BuildingSummary::of(building)
    }

    /// Every device, flattened and located.
    pub fn devices(&self) -> &[LocatedDevice] {
        self.devices
            .get_or_init(|| extract_all_devices(&self.buildings))
    }

    /// Devices bucketed by type.
    pub fn device_groups(&self) -> &DeviceGroups<LocatedDevice> {
        self.groups.get_or_init(|| group_by_type(self.devices()))
    }

    pub fn sidebar(&self) -> &[SidebarNode] {
        self.sidebar
            .get_or_init(|| build_sidebar_tree(&self.buildings))
    }
}
