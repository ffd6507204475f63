//! Opt-in structural checks.
//!
//! Root resolution on [`AbsBehaviorTree`] is deliberately permissive. Callers that
//! want a strict single-root tree run [`validate`] and decide what to do with the
//! issues it reports.

use core::fmt;
use std::collections::BTreeMap;

use crate::tree::AbsBehaviorTree;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureIssue {
    NoRoot,
    MultipleRoots(Vec<i16>),
    DanglingChild { parent: i16, child: i16 },
    SharedChild { child: i16, parents: Vec<i16> },
    DuplicateInstanceName { name: String, indexes: Vec<i16> },
}

impl StructureIssue {
    /// Issues that make the root ambiguous or the linkage unresolvable.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, StructureIssue::DuplicateInstanceName { .. })
    }
}

impl fmt::Display for StructureIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureIssue::NoRoot => f.write_str("no root: every node is referenced as a child"),
            StructureIssue::MultipleRoots(roots) => write!(f, "multiple roots: {roots:?}"),
            StructureIssue::DanglingChild { parent, child } => {
                write!(f, "#{parent} references missing child #{child}")
            }
            StructureIssue::SharedChild { child, parents } => {
                write!(f, "#{child} has several parents: {parents:?}")
            }
            StructureIssue::DuplicateInstanceName { name, indexes } => {
                write!(f, "instance name {name:?} used by {indexes:?}")
            }
        }
    }
}

pub fn validate(tree: &AbsBehaviorTree) -> Vec<StructureIssue> {
    let mut issues = Vec::new();
    if tree.is_empty() {
        return issues;
    }

    let roots = tree.root_candidates();
    match roots.len() {
        0 => issues.push(StructureIssue::NoRoot),
        1 => {}
        _ => issues.push(StructureIssue::MultipleRoots(roots)),
    }

    let mut parents: BTreeMap<i16, Vec<i16>> = BTreeMap::new();
    for (position, node) in tree.nodes().iter().enumerate() {
        let parent = position as i16;
        for &child in &node.children_index {
            if tree.node_at(child).is_none() {
                issues.push(StructureIssue::DanglingChild { parent, child });
            } else {
                parents.entry(child).or_default().push(parent);
            }
        }
    }
    issues.extend(
        parents
            .into_iter()
            .filter(|(_, p)| p.len() > 1)
            .map(|(child, parents)| StructureIssue::SharedChild { child, parents }),
    );

    let mut names: BTreeMap<&str, Vec<i16>> = BTreeMap::new();
    for (position, node) in tree.nodes().iter().enumerate() {
        names
            .entry(node.instance_name.as_str())
            .or_default()
            .push(position as i16);
    }
    issues.extend(
        names
            .into_iter()
            .filter(|(name, idx)| !name.is_empty() && idx.len() > 1)
            .map(|(name, indexes)| StructureIssue::DuplicateInstanceName {
                name: name.to_string(),
                indexes,
            }),
    );

    issues
}
