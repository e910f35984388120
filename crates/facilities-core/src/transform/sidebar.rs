// ── Sidebar tree ──
//
// Projects the hierarchy onto structural nodes only. Devices never appear.
// Expansion does not depend on a node's role: a room with nested rooms is
// expanded like any other node.

use crate::model::{Building, HierarchyNode, NodeKind, SidebarNode};

/// One sidebar root per building, in input order.
pub fn build_sidebar_tree(buildings: &[Building]) -> Vec<SidebarNode> {
    buildings
        .iter()
        .map(|building| project(building, NodeKind::Building))
        .collect()
}

/// Floors, then spaces, then rooms of `node`, or `None` when there are none.
pub fn build_children(node: &HierarchyNode) -> Option<Vec<SidebarNode>> {
    let children: Vec<SidebarNode> = node
        .structural_children()
        .map(|(kind, child)| project(child, kind))
        .collect();
    (!children.is_empty()).then_some(children)
}

fn project(node: &HierarchyNode, kind: NodeKind) -> SidebarNode {
    SidebarNode {
        id: node.id.clone(),
        name: node.display_name().to_owned(),
        kind,
        children: build_children(node),
    }
}
