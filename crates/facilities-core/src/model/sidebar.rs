// ── Sidebar projection ──

use serde::Serialize;

use super::node::NodeKind;
use super::node_id::NodeId;

/// Navigation tree node: structural nodes only, never devices.
///
/// `children` is `None` for a leaf so consumers can tell "nothing to expand"
/// apart from an empty list. It is never `Some(vec![])`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<NodeId>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub children: Option<Vec<SidebarNode>>,
}

impl SidebarNode {
    pub fn has_children(&self) -> bool {
        self.children.is_some()
    }

    /// Children as a slice, empty for leaves.
    pub fn children(&self) -> &[SidebarNode] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Number of nodes in this subtree, including this one.
    pub fn subtree_len(&self) -> usize {
        1 + self.children().iter().map(Self::subtree_len).sum::<usize>()
    }
}
