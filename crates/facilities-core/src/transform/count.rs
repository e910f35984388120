// ── Recursive counts ──
//
// Each kind follows its own recursion rule. Floors only recurse into floors,
// spaces into floors and spaces, rooms into spaces and rooms, devices into
// every structural collection. Rooms hanging directly off a floor are not
// counted from the building.

use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

use crate::model::HierarchyNode;

/// Entity kind to count below a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CountKind {
    Floors,
    Spaces,
    Rooms,
    Devices,
}

/// Number of `kind` entities at and below `node`. `None` counts as zero.
pub fn count(node: Option<&HierarchyNode>, kind: CountKind) -> usize {
    let Some(node) = node else {
        return 0;
    };

    match kind {
        CountKind::Floors => node.floors.len() + count_in(&node.floors, kind),
        CountKind::Spaces => {
            node.spaces.len() + count_in(&node.floors, kind) + count_in(&node.spaces, kind)
        }
        CountKind::Rooms => {
            node.rooms.len() + count_in(&node.spaces, kind) + count_in(&node.rooms, kind)
        }
        CountKind::Devices => {
            node.devices.len()
                + count_in(&node.floors, kind)
                + count_in(&node.spaces, kind)
                + count_in(&node.rooms, kind)
        }
    }
}

fn count_in(nodes: &[HierarchyNode], kind: CountKind) -> usize {
    nodes.iter().map(|n| count(Some(n), kind)).sum()
}

/// Devices at and below `node` whose `isOnline` is exactly `true`.
pub fn count_online(node: Option<&HierarchyNode>) -> usize {
    let Some(node) = node else {
        return 0;
    };

    let own = node
        .devices
        .iter()
        .filter(|d| d.is_considered_online_for_counting())
        .count();

    own + node
        .structural_children()
        .map(|(_, child)| count_online(Some(child)))
        .sum::<usize>()
}

/// Everything a building card shows, computed in one place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildingSummary {
    pub floors: usize,
    pub spaces: usize,
    pub rooms: usize,
    pub devices: usize,
    pub online: usize,
}

impl BuildingSummary {
    pub fn of(node: &HierarchyNode) -> Self {
        Self {
            floors: count(Some(node), CountKind::Floors),
            spaces: count(Some(node), CountKind::Spaces),
            rooms: count(Some(node), CountKind::Rooms),
            devices: count(Some(node), CountKind::Devices),
            online: count_online(Some(node)),
        }
    }

    pub fn get(&self, kind: CountKind) -> usize {
        match kind {
            CountKind::Floors => self.floors,
            CountKind::Spaces => self.spaces,
            CountKind::Rooms => self.rooms,
            CountKind::Devices => self.devices,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::model::{Device, HierarchyNode};

    fn node(id: &str) -> HierarchyNode {
        HierarchyNode::new(id, id.to_uppercase())
    }

    #[test]
    fn none_counts_zero() {
        for kind in CountKind::iter() {
            assert_eq!(count(None, kind), 0);
        }
        assert_eq!(count_online(None), 0);
    }

    #[test]
    fn one_floor_two_devices() {
        let building = node("b1").with_floors(vec![
            node("f1").with_devices(vec![Device::new("d1"), Device::new("d2")]),
        ]);
        assert_eq!(count(Some(&building), CountKind::Devices), 2);
        assert_eq!(count(Some(&building), CountKind::Floors), 1);
    }

    #[test]
    fn floors_recurse_only_into_floors() {
        let building = node("b1").with_floors(vec![
            node("f1").with_floors(vec![node("mezzanine")]),
            node("f2").with_spaces(vec![node("s1").with_floors(vec![node("hidden")])]),
        ]);
        assert_eq!(count(Some(&building), CountKind::Floors), 3);
    }

    #[test]
    fn spaces_recurse_through_floors_and_spaces() {
        let building = node("b1")
            .with_spaces(vec![node("s0").with_spaces(vec![node("s0a")])])
            .with_floors(vec![node("f1").with_spaces(vec![node("s1"), node("s2")])])
            .with_rooms(vec![node("r1").with_spaces(vec![node("ignored")])]);
        assert_eq!(count(Some(&building), CountKind::Spaces), 4);
    }

    #[test]
    fn rooms_under_floors_are_not_counted_from_building() {
        let building = node("b1").with_floors(vec![
            node("f1")
                .with_rooms(vec![node("r-floor")])
                .with_spaces(vec![node("s1").with_rooms(vec![node("r-space")])]),
        ]);
        assert_eq!(count(Some(&building), CountKind::Rooms), 0);

        let floor = &building.floors[0];
        assert_eq!(count(Some(floor), CountKind::Rooms), 2);
    }

    #[test]
    fn rooms_recurse_through_spaces_and_rooms() {
        let building = node("b1")
            .with_rooms(vec![node("r1").with_rooms(vec![node("closet")])])
            .with_spaces(vec![node("s1").with_rooms(vec![node("r2"), node("r3")])]);
        assert_eq!(count(Some(&building), CountKind::Rooms), 4);
    }

    #[test]
    fn devices_recurse_everywhere_structural() {
        let building = node("b1")
            .with_devices(vec![Device::new("gw")])
            .with_floors(vec![node("f1").with_devices(vec![Device::new("d1")])])
            .with_spaces(vec![node("s1").with_rooms(vec![
                node("r1").with_devices(vec![Device::new("d2"), Device::new("d3")]),
            ])]);
        assert_eq!(count(Some(&building), CountKind::Devices), 4);
    }

    #[test]
    fn online_counts_only_explicit_true() {
        let building = node("b1")
            .with_devices(vec![Device::new("d1").online(true), Device::new("d2")])
            .with_floors(vec![node("f1").with_rooms(vec![node("r1").with_devices(vec![
                Device::new("d3").online(true),
                Device::new("d4").online(false),
            ])])]);
        assert_eq!(count_online(Some(&building)), 2);
    }

    #[test]
    fn summary_matches_individual_counts() {
        let building = node("b1").with_floors(vec![node("f1").with_spaces(vec![
            node("s1").with_rooms(vec![node("r1").with_devices(vec![
                Device::new("d1").online(true),
                Device::new("d2"),
            ])]),
        ])]);
        let summary = BuildingSummary::of(&building);
        assert_eq!(
            summary,
            BuildingSummary {
                floors: 1,
                spaces: 1,
                rooms: 0,
                devices: 2,
                online: 1,
            }
        );
        for kind in CountKind::iter() {
            assert_eq!(summary.get(kind), count(Some(&building), kind));
        }
    }

    #[test]
    fn counts_are_idempotent() {
        let building = node("b1").with_floors(vec![node("f1").with_devices(vec![Device::new("d1")])]);
        assert_eq!(BuildingSummary::of(&building), BuildingSummary::of(&building));
    }
}
