//! Symbolic classifiers: node category, runtime status and editor mode.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseKindError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeType {
    Action,
    Decorator,
    Control,
    Condition,
    SubTree,
    Root,
    #[default]
    Undefined,
}

impl NodeType {
    pub const ALL: [NodeType; 7] = [
        NodeType::Action,
        NodeType::Decorator,
        NodeType::Control,
        NodeType::Condition,
        NodeType::SubTree,
        NodeType::Root,
        NodeType::Undefined,
    ];

    /// Maps a category name to its type. Unrecognized names fall back to `Undefined`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Action" => NodeType::Action,
            "Decorator" => NodeType::Decorator,
            "Control" => NodeType::Control,
            "Condition" => NodeType::Condition,
            "SubTree" => NodeType::SubTree,
            "Root" => NodeType::Root,
            _ => NodeType::Undefined,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeType::Action => "Action",
            NodeType::Decorator => "Decorator",
            NodeType::Control => "Control",
            NodeType::Condition => "Condition",
            NodeType::SubTree => "SubTree",
            NodeType::Root => "Root",
            NodeType::Undefined => "Undefined",
        }
    }

    /// Leaves never carry children in a well-formed tree.
    pub fn is_leaf(self) -> bool {
        matches!(
            self,
            NodeType::Action | NodeType::Condition | NodeType::SubTree
        )
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeStatus {
    #[default]
    Idle,
    Running,
    Success,
    Failure,
}

impl NodeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeStatus::Idle => "IDLE",
            NodeStatus::Running => "RUNNING",
            NodeStatus::Success => "SUCCESS",
            NodeStatus::Failure => "FAILURE",
        }
    }

    pub fn is_completed(self) -> bool {
        matches!(self, NodeStatus::Success | NodeStatus::Failure)
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeStatus {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IDLE" => Ok(NodeStatus::Idle),
            "RUNNING" => Ok(NodeStatus::Running),
            "SUCCESS" => Ok(NodeStatus::Success),
            "FAILURE" => Ok(NodeStatus::Failure),
            _ => Err(ParseKindError::new("node status", s)),
        }
    }
}

/// What the surrounding editor is doing with a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GraphicMode {
    #[default]
    Editor,
    Monitor,
    Replay,
}

impl GraphicMode {
    pub fn as_str(self) -> &'static str {
        match self {
            GraphicMode::Editor => "EDITOR",
            GraphicMode::Monitor => "MONITOR",
            GraphicMode::Replay => "REPLAY",
        }
    }
}

impl fmt::Display for GraphicMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GraphicMode {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EDITOR" => Ok(GraphicMode::Editor),
            "MONITOR" => Ok(GraphicMode::Monitor),
            "REPLAY" => Ok(GraphicMode::Replay),
            _ => Err(ParseKindError::new("graphic mode", s)),
        }
    }
}
