use core::fmt;

use crate::kind::NodeType;
use crate::tree::AbsBehaviorTree;

/// One structural difference between two trees, reported per position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeDiff {
    NodeCount { left: usize, right: usize },
    NodeType { index: i16, left: NodeType, right: NodeType },
    Children { index: i16, left: Vec<i16>, right: Vec<i16> },
    Parameters { index: i16 },
}

impl fmt::Display for TreeDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeDiff::NodeCount { left, right } => {
                write!(f, "node count differs: {left} vs {right}")
            }
            TreeDiff::NodeType { index, left, right } => {
                write!(f, "#{index}: type {left} vs {right}")
            }
            TreeDiff::Children { index, left, right } => {
                write!(f, "#{index}: children {left:?} vs {right:?}")
            }
            TreeDiff::Parameters { index } => write!(f, "#{index}: parameters differ"),
        }
    }
}

/// Lists every structural difference between `left` and `right`.
///
/// Positions beyond the shorter tree are only covered by the `NodeCount` entry.
/// The result is empty exactly when `left == right`.
pub fn structural_diff(left: &AbsBehaviorTree, right: &AbsBehaviorTree) -> Vec<TreeDiff> {
    let mut out = Vec::new();
    if left.nodes_count() != right.nodes_count() {
        out.push(TreeDiff::NodeCount {
            left: left.nodes_count(),
            right: right.nodes_count(),
        });
    }

    for (position, (a, b)) in left.nodes().iter().zip(right.nodes()).enumerate() {
        // Positions fit in i16 by construction of the store.
        let index = position as i16;
        if a.node_type != b.node_type {
            out.push(TreeDiff::NodeType {
                index,
                left: a.node_type,
                right: b.node_type,
            });
        }
        if a.children_index != b.children_index {
            out.push(TreeDiff::Children {
                index,
                left: a.children_index.clone(),
                right: b.children_index.clone(),
            });
        }
        if a.parameters != b.parameters {
            out.push(TreeDiff::Parameters { index });
        }
    }
    out
}
