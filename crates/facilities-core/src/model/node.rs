// ── Hierarchy nodes ──
//
// One shape serves every structural role. Buildings, floors, spaces, and
// rooms all carry the same four optional child collections, and nothing in
// the model restricts which collections a node may own: a room can hold
// rooms, a space can hold floors.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use strum::{Display, EnumIter, EnumString};

use super::device::Device;
use super::node_id::NodeId;

/// Label shown for nodes without a name.
pub const UNNAMED: &str = "Unnamed";

/// Structural role of a node within the hierarchy.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NodeKind {
    Building,
    Floor,
    Space,
    Room,
}

/// A building, floor, space, or room.
///
/// Absent child collections deserialize as empty, as does an explicit
/// `null`. Fields the dashboard does not model are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<NodeId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Street address. Only meaningful on buildings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub floors: Vec<HierarchyNode>,

    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub spaces: Vec<HierarchyNode>,

    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub rooms: Vec<HierarchyNode>,

    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub devices: Vec<Device>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The root of a hierarchy. Same shape as every other node.
pub type Building = HierarchyNode;

impl HierarchyNode {
    /// Start a node with the given id and name.
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Name for display, falling back to [`UNNAMED`].
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED)
    }

    /// Structural children in traversal order: floors, then spaces, then rooms.
    pub fn structural_children(&self) -> impl Iterator<Item = (NodeKind, &HierarchyNode)> {
        let floors = self.floors.iter().map(|n| (NodeKind::Floor, n));
        let spaces = self.spaces.iter().map(|n| (NodeKind::Space, n));
        let rooms = self.rooms.iter().map(|n| (NodeKind::Room, n));
        floors.chain(spaces).chain(rooms)
    }

    /// `true` when the node owns no floors, spaces, or rooms.
    pub fn is_structural_leaf(&self) -> bool {
        self.floors.is_empty() && self.spaces.is_empty() && self.rooms.is_empty()
    }

    pub fn with_floors(mut self, floors: Vec<HierarchyNode>) -> Self {
        self.floors = floors;
        self
    }

    pub fn with_spaces(mut self, spaces: Vec<HierarchyNode>) -> Self {
        self.spaces = spaces;
        self
    }

    pub fn with_rooms(mut self, rooms: Vec<HierarchyNode>) -> Self {
        self.rooms = rooms;
        self
    }

    pub fn with_devices(mut self, devices: Vec<Device>) -> Self {
        self.devices = devices;
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

/// Treat `null` like a missing collection.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn missing_and_null_collections_are_empty() {
        let node: HierarchyNode = serde_json::from_value(json!({
            "id": "b1",
            "floors": null,
        }))
        .unwrap();
        assert!(node.floors.is_empty());
        assert!(node.spaces.is_empty());
        assert!(node.devices.is_empty());
        assert!(node.is_structural_leaf());
    }

    #[test]
    fn unknown_fields_are_preserved() {
        let input = json!({
            "id": "b1",
            "name": "HQ",
            "timezone": "Europe/Sofia",
            "floors": [{ "id": "f1", "level": 2 }],
        });
        let node: HierarchyNode = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(node.extra["timezone"], "Europe/Sofia");
        assert_eq!(node.floors[0].extra["level"], 2);
        assert_eq!(serde_json::to_value(&node).unwrap(), input);
    }

    #[test]
    fn display_name_falls_back() {
        let unnamed = HierarchyNode::default();
        assert_eq!(unnamed.display_name(), "Unnamed");
        assert_eq!(HierarchyNode::new("b1", "HQ").display_name(), "HQ");
    }

    #[test]
    fn structural_children_order() {
        let node = HierarchyNode::new("b1", "HQ")
            .with_rooms(vec![HierarchyNode::new("r1", "Lobby")])
            .with_spaces(vec![HierarchyNode::new("s1", "Apt 1")])
            .with_floors(vec![HierarchyNode::new("f1", "Floor 1")]);

        let kinds: Vec<NodeKind> = node.structural_children().map(|(k, _)| k).collect();
        assert_eq!(kinds, vec![NodeKind::Floor, NodeKind::Space, NodeKind::Room]);
    }

    #[test]
    fn node_kind_wire_names() {
        assert_eq!(NodeKind::Building.to_string(), "building");
        assert_eq!("room".parse::<NodeKind>().unwrap(), NodeKind::Room);
        assert_eq!(serde_json::to_value(NodeKind::Space).unwrap(), json!("space"));
    }
}
