//! The tree store: nodes in insertion order plus the UID table and the cached root.

use tracing::{debug, warn};

use crate::error::TreeError;
use crate::node::AbstractTreeNode;
use crate::uid::{Uid, UidRegistry};

/// Flat behavior tree. Nodes are addressed by position (their index in insertion
/// order) or by the [`Uid`] they were inserted with.
///
/// The store is append-only, so positions handed out by [`AbsBehaviorTree::push_back`]
/// stay valid for the lifetime of the tree.
#[derive(Debug, Clone, Default)]
pub struct AbsBehaviorTree {
    nodes: Vec<AbstractTreeNode>,
    uids: UidRegistry,
    root: Option<i16>,
}

impl AbsBehaviorTree {
    pub const MAX_NODES: usize = i16::MAX as usize + 1;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[AbstractTreeNode] {
        &self.nodes
    }

    /// Mutable access to every node. The slice cannot grow or shrink, so positions
    /// and UID mappings stay intact.
    pub fn nodes_mut(&mut self) -> &mut [AbstractTreeNode] {
        &mut self.nodes
    }

    pub fn uids(&self) -> &UidRegistry {
        &self.uids
    }

    /// Appends `node`, assigning it the next position, and maps `uid` to it.
    ///
    /// A UID that is already registered is silently remapped to the new node.
    /// Appending invalidates the cached root.
    pub fn push_back(&mut self, uid: Uid, mut node: AbstractTreeNode) -> Result<i16, TreeError> {
        let len = self.nodes.len();
        let index = i16::try_from(len).map_err(|_| TreeError::CapacityExceeded {
            len,
            max: Self::MAX_NODES,
        })?;

        node.index = index;
        debug!(%uid, index, name = %node.instance_name, "append node");
        self.nodes.push(node);
        if let Some(previous) = self.uids.register(uid, index) {
            debug!(%uid, previous, index, "uid remapped");
        }
        self.root = None;
        Ok(index)
    }

    pub fn uid_to_index(&self, uid: Uid) -> Option<i16> {
        self.uids.resolve(uid)
    }

    pub fn node_at(&self, index: i16) -> Option<&AbstractTreeNode> {
        let i = usize::try_from(index).ok()?;
        self.nodes.get(i)
    }

    pub fn node_at_mut(&mut self, index: i16) -> Option<&mut AbstractTreeNode> {
        let i = usize::try_from(index).ok()?;
        self.nodes.get_mut(i)
    }

    pub fn node_at_uid(&self, uid: Uid) -> Option<&AbstractTreeNode> {
        self.node_at(self.uid_to_index(uid)?)
    }

    pub fn node_at_uid_mut(&mut self, uid: Uid) -> Option<&mut AbstractTreeNode> {
        let index = self.uid_to_index(uid)?;
        self.node_at_mut(index)
    }

    /// First node (by position) with the given instance name. O(n).
    pub fn find_node(&self, instance_name: &str) -> Option<&AbstractTreeNode> {
        self.nodes.iter().find(|n| n.instance_name == instance_name)
    }

    /// Children of the node at `index`, skipping positions that do not resolve.
    pub fn children(&self, index: i16) -> impl Iterator<Item = &AbstractTreeNode> + '_ {
        self.node_at(index)
            .into_iter()
            .flat_map(|n| n.children_index.iter())
            .filter_map(move |&c| self.node_at(c))
    }

    /// Positions of every node that no other node lists as a child, in ascending order.
    /// A node listing itself does not count as referenced.
    pub fn root_candidates(&self) -> Vec<i16> {
        let mut referenced = vec![false; self.nodes.len()];
        for (parent, node) in self.nodes.iter().enumerate() {
            for &child in &node.children_index {
                let Ok(c) = usize::try_from(child) else {
                    continue;
                };
                if c == parent {
                    continue;
                }
                if let Some(slot) = referenced.get_mut(c) {
                    *slot = true;
                }
            }
        }

        referenced
            .iter()
            .enumerate()
            .filter(|(_, &r)| !r)
            .filter_map(|(i, _)| i16::try_from(i).ok())
            .collect()
    }

    /// Picks the first unreferenced node as root and caches it.
    ///
    /// Several candidates are tolerated (lowest position wins). No candidate leaves
    /// the tree without a root; both cases are logged, neither is an error.
    pub fn update_root_index(&mut self) -> Option<i16> {
        let candidates = self.root_candidates();
        self.root = candidates.first().copied();

        match candidates.len() {
            0 if !self.nodes.is_empty() => {
                warn!(nodes = self.nodes.len(), "no root candidate (every node is referenced)")
            }
            0 => debug!("empty tree has no root"),
            1 => debug!(root = candidates[0], "root resolved"),
            n => warn!(
                root = candidates[0],
                candidates = n,
                "multiple root candidates, picked the first"
            ),
        }
        self.root
    }

    pub fn root_index(&self) -> Option<i16> {
        self.root
    }

    pub fn root_node(&self) -> Option<&AbstractTreeNode> {
        self.node_at(self.root?)
    }

    pub fn root_node_mut(&mut self) -> Option<&mut AbstractTreeNode> {
        let root = self.root?;
        self.node_at_mut(root)
    }
}

/// Structural equality: node count, then per position the type, children and
/// parameters. Status, geometry, names and visual handles are ignored.
impl PartialEq for AbsBehaviorTree {
    fn eq(&self, other: &Self) -> bool {
        self.nodes.len() == other.nodes.len()
            && self
                .nodes
                .iter()
                .zip(other.nodes.iter())
                .all(|(a, b)| a.same_structure(b))
    }
}
