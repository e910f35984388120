// ── Device flattening ──
//
// Depth-first walk over every building. Each device is emitted once, tagged
// with its building and the names of every structural ancestor down to its
// direct parent. Children are visited floors, then spaces, then rooms.

use crate::model::{Building, Device, HierarchyNode, LOCATION_SEPARATOR, LocatedDevice, NodeId};

/// One step of a location path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PathSegment<'a> {
    id: Option<&'a NodeId>,
    name: &'a str,
}

impl<'a> PathSegment<'a> {
    fn of(node: &'a HierarchyNode) -> Self {
        Self {
            id: node.id.as_ref(),
            name: node.display_name(),
        }
    }
}

/// Ancestors of a device, root building first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct LocationPath<'a> {
    segments: Vec<PathSegment<'a>>,
}

impl<'a> LocationPath<'a> {
    fn building(&self) -> Option<&PathSegment<'a>> {
        self.segments.first()
    }

    /// Names joined with `" > "`.
    fn display(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.name)
            .collect::<Vec<_>>()
            .join(LOCATION_SEPARATOR)
    }

    fn locate(&self, device: &Device) -> LocatedDevice {
        let building = self.building();
        LocatedDevice {
            device: device.clone(),
            building_id: building.and_then(|b| b.id.cloned()),
            building_name: building.map(|b| b.name.to_owned()).unwrap_or_default(),
            location_path: self.display(),
        }
    }
}

/// Flatten every device in `buildings`, in stable depth-first order.
pub fn extract_all_devices(buildings: &[Building]) -> Vec<LocatedDevice> {
    let mut out = Vec::new();
    for building in buildings {
        let mut path = LocationPath::default();
        path.segments.push(PathSegment::of(building));
        collect(building, &mut path, &mut out);
    }
    out
}

fn collect<'a>(node: &'a HierarchyNode, path: &mut LocationPath<'a>, out: &mut Vec<LocatedDevice>) {
    out.extend(node.devices.iter().map(|device| path.locate(device)));

    for (_, child) in node.structural_children() {
        path.segments.push(PathSegment::of(child));
        collect(child, path, out);
        path.segments.pop();
    }
}
