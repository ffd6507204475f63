//! Plain-data image of a tree, for writing to and rebuilding from files.

use serde::{Deserialize, Serialize};

use crate::error::TreeError;
use crate::kind::{NodeStatus, NodeType};
use crate::node::{AbstractTreeNode, Point, Size};
use crate::tree::AbsBehaviorTree;
use crate::uid::{Uid, UidGenerator};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    /// UID the node was registered with. Absent UIDs are minted on rebuild.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<Uid>,
    #[serde(default)]
    pub registration_name: String,
    #[serde(default)]
    pub instance_name: String,
    #[serde(default, rename = "type")]
    pub node_type: NodeType,
    #[serde(default)]
    pub status: NodeStatus,
    #[serde(default)]
    pub children: Vec<i16>,
    #[serde(default)]
    pub parameters: Vec<(String, String)>,
    #[serde(default)]
    pub pos: Point,
    #[serde(default)]
    pub size: Size,
}

impl NodeSnapshot {
    fn from_node(node: &AbstractTreeNode, uid: Option<Uid>) -> Self {
        Self {
            uid,
            registration_name: node.registration_name.clone(),
            instance_name: node.instance_name.clone(),
            node_type: node.node_type,
            status: node.status,
            children: node.children_index.clone(),
            parameters: node.parameters.clone(),
            pos: node.pos,
            size: node.size,
        }
    }

    fn into_node(self) -> AbstractTreeNode {
        AbstractTreeNode {
            registration_name: self.registration_name,
            instance_name: self.instance_name,
            node_type: self.node_type,
            status: self.status,
            size: self.size,
            pos: self.pos,
            children_index: self.children,
            parameters: self.parameters,
            ..AbstractTreeNode::default()
        }
    }
}

/// Nodes in position order. Visual handles are runtime state and are not captured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeSnapshot {
    pub nodes: Vec<NodeSnapshot>,
}

impl TreeSnapshot {
    pub fn from_tree(tree: &AbsBehaviorTree) -> Self {
        let uids = tree.uids().by_position(tree.nodes_count());
        let nodes = tree
            .nodes()
            .iter()
            .zip(uids)
            .map(|(n, uid)| NodeSnapshot::from_node(n, uid))
            .collect();
        Self { nodes }
    }

    /// Rebuilds a tree, appending nodes in snapshot order and resolving its root.
    pub fn into_tree(self, uids: &UidGenerator) -> Result<AbsBehaviorTree, TreeError> {
        let mut tree = AbsBehaviorTree::new();
        for snap in self.nodes {
            let uid = match snap.uid {
                Some(uid) => uid,
                None => uids.next()?,
            };
            tree.push_back(uid, snap.into_node())?;
        }
        tree.update_root_index();
        Ok(tree)
    }
}

impl From<&AbsBehaviorTree> for TreeSnapshot {
    fn from(tree: &AbsBehaviorTree) -> Self {
        Self::from_tree(tree)
    }
}
