//! In-memory behavior tree model.
//!
//! A flat, position-addressed node store with stable UIDs, root discovery and
//! structural equality. Execution is out of scope: this crate only describes trees.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod diff;
pub mod dump;
pub mod error;
pub mod kind;
pub mod model;
pub mod node;
#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub mod snapshot;
pub mod tree;
pub mod uid;
pub mod validate;

pub use diff::{structural_diff, TreeDiff};
pub use dump::TreeDump;
pub use error::{ParseKindError, TreeError, UidError};
pub use kind::{GraphicMode, NodeStatus, NodeType};
pub use model::{NodeModelRegistry, ParamDecl, TreeNodeModel};
pub use node::{AbstractTreeNode, Point, Size, VisualHandle, INVALID_INDEX};
#[cfg(feature = "serde")]
pub use snapshot::{NodeSnapshot, TreeSnapshot};
pub use tree::AbsBehaviorTree;
pub use uid::{next_uid, Uid, UidGenerator, UidRegistry, DEFAULT_UID_START};
pub use validate::{validate, StructureIssue};
