//! Node model registry: the templates nodes are instantiated from.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::kind::NodeType;
use crate::node::AbstractTreeNode;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParamDecl {
    pub label: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub default_value: String,
}

impl ParamDecl {
    pub fn new(label: impl Into<String>, default_value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            default_value: default_value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TreeNodeModel {
    pub node_type: NodeType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: Vec<ParamDecl>,
}

impl TreeNodeModel {
    pub fn new(node_type: NodeType, params: Vec<ParamDecl>) -> Self {
        Self { node_type, params }
    }
}

/// Read-only lookup from registration name to model, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeModelRegistry {
    models: BTreeMap<String, TreeNodeModel>,
}

impl NodeModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the standard control, decorator and action nodes.
    pub fn builtin() -> Self {
        use NodeType::*;

        let mut r = Self::new();
        r.register("Root", TreeNodeModel::new(Root, vec![]));
        r.register("Sequence", TreeNodeModel::new(Control, vec![]));
        r.register("SequenceStar", TreeNodeModel::new(Control, vec![]));
        r.register("Fallback", TreeNodeModel::new(Control, vec![]));
        r.register(
            "Parallel",
            TreeNodeModel::new(Control, vec![ParamDecl::new("threshold", "1")]),
        );
        r.register("Inverter", TreeNodeModel::new(Decorator, vec![]));
        r.register("ForceSuccess", TreeNodeModel::new(Decorator, vec![]));
        r.register("ForceFailure", TreeNodeModel::new(Decorator, vec![]));
        r.register(
            "Repeat",
            TreeNodeModel::new(Decorator, vec![ParamDecl::new("num_cycles", "1")]),
        );
        r.register(
            "RetryUntilSuccesful",
            TreeNodeModel::new(Decorator, vec![ParamDecl::new("num_attempts", "1")]),
        );
        r.register(
            "Timeout",
            TreeNodeModel::new(Decorator, vec![ParamDecl::new("msec", "1000")]),
        );
        r.register("AlwaysSuccess", TreeNodeModel::new(Action, vec![]));
        r.register("AlwaysFailure", TreeNodeModel::new(Action, vec![]));
        r.register(
            "SetBlackboard",
            TreeNodeModel::new(
                Action,
                vec![ParamDecl::new("key", ""), ParamDecl::new("value", "")],
            ),
        );
        r.register("SubTree", TreeNodeModel::new(SubTree, vec![]));
        r
    }

    /// Adds or replaces a model. Returns the model previously registered under `name`.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        model: TreeNodeModel,
    ) -> Option<TreeNodeModel> {
        self.models.insert(name.into(), model)
    }

    pub fn get(&self, name: &str) -> Option<&TreeNodeModel> {
        self.models.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TreeNodeModel)> + '_ {
        self.models.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Builds an unplaced node from the model registered as `registration_name`,
    /// with every declared parameter set to its default.
    pub fn instantiate(
        &self,
        registration_name: &str,
        instance_name: impl Into<String>,
    ) -> Option<AbstractTreeNode> {
        let model = self.get(registration_name)?;
        let mut node = AbstractTreeNode::new(registration_name, instance_name, model.node_type);
        node.parameters = model
            .params
            .iter()
            .map(|p| (p.label.clone(), p.default_value.clone()))
            .collect();
        Some(node)
    }
}

impl Extend<(String, TreeNodeModel)> for NodeModelRegistry {
    fn extend<I: IntoIterator<Item = (String, TreeNodeModel)>>(&mut self, iter: I) {
        self.models.extend(iter);
    }
}
