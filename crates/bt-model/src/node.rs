#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::kind::{NodeStatus, NodeType};

/// Position value of a node that has not been placed in a tree yet.
pub const INVALID_INDEX: i16 = -1;

/// Top-left corner of a node on the editor canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Opaque, non-owning reference to a node object that lives in a visual layer.
///
/// The tree never dereferences it. Whoever owns the visual object must clear the
/// handle (see [`AbstractTreeNode::detach_visual`]) before destroying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisualHandle(u64);

impl VisualHandle {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// One node of an [`AbsBehaviorTree`](crate::AbsBehaviorTree).
#[derive(Debug, Clone)]
pub struct AbstractTreeNode {
    /// Position inside the owning tree, or [`INVALID_INDEX`].
    pub index: i16,
    /// Name of the node model this node was instantiated from.
    pub registration_name: String,
    /// Human-facing name, expected to be unique within a tree.
    pub instance_name: String,
    pub node_type: NodeType,
    pub status: NodeStatus,
    pub size: Size,
    pub pos: Point,
    /// Positions of the direct children, in execution order.
    pub children_index: Vec<i16>,
    pub visual: Option<VisualHandle>,
    /// Ordered key/value pairs; keys may repeat.
    pub parameters: Vec<(String, String)>,
}

impl Default for AbstractTreeNode {
    fn default() -> Self {
        Self {
            index: INVALID_INDEX,
            registration_name: String::new(),
            instance_name: String::new(),
            node_type: NodeType::Undefined,
            status: NodeStatus::Idle,
            size: Size::default(),
            pos: Point::default(),
            children_index: Vec::new(),
            visual: None,
            parameters: Vec::new(),
        }
    }
}

impl AbstractTreeNode {
    pub fn new(
        registration_name: impl Into<String>,
        instance_name: impl Into<String>,
        node_type: NodeType,
    ) -> Self {
        Self {
            registration_name: registration_name.into(),
            instance_name: instance_name.into(),
            node_type,
            ..Self::default()
        }
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = i16>) -> Self {
        self.children_index = children.into_iter().collect();
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push((key.into(), value.into()));
        self
    }

    pub fn with_geometry(mut self, pos: Point, size: Size) -> Self {
        self.pos = pos;
        self.size = size;
        self
    }

    pub fn is_placed(&self) -> bool {
        self.index != INVALID_INDEX
    }

    /// First value stored under `key`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Overwrites the first entry for `key`, or appends one. Returns the old value.
    pub fn set_param(&mut self, key: &str, value: impl Into<String>) -> Option<String> {
        let value = value.into();
        match self.parameters.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => Some(core::mem::replace(v, value)),
            None => {
                self.parameters.push((key.to_string(), value));
                None
            }
        }
    }

    pub fn attach_visual(&mut self, handle: VisualHandle) -> Option<VisualHandle> {
        self.visual.replace(handle)
    }

    pub fn detach_visual(&mut self) -> Option<VisualHandle> {
        self.visual.take()
    }

    /// Equality on the fields that make up tree structure: type, children, parameters.
    pub fn same_structure(&self, other: &Self) -> bool {
        self.node_type == other.node_type
            && self.children_index == other.children_index
            && self.parameters == other.parameters
    }
}
