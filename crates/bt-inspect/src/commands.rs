//! Command bodies. Each returns the text to print and whether the command failed,
//! so `main` only deals with I/O and exit codes.

use std::fmt::Write as _;

use bt_model::{
    structural_diff, validate, AbsBehaviorTree, NodeModelRegistry, StructureIssue,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub failed: bool,
}

impl Outcome {
    fn ok(output: String) -> Self {
        Self {
            output,
            failed: false,
        }
    }
}

pub fn print_tree(tree: &AbsBehaviorTree, indent: usize) -> Outcome {
    match tree.root_index() {
        Some(_) => Outcome::ok(tree.debug_dump(indent).to_string()),
        None => Outcome {
            output: format!("no root found among {} nodes\n", tree.nodes_count()),
            failed: true,
        },
    }
}

pub fn check_tree(tree: &AbsBehaviorTree, strict: bool) -> Outcome {
    let issues = validate(tree);
    let mut output = String::new();
    let _ = writeln!(
        output,
        "{} nodes, root: {}",
        tree.nodes_count(),
        tree.root_index()
            .map_or_else(|| "none".to_string(), |r| format!("#{r}"))
    );
    for issue in &issues {
        let level = if issue.is_fatal() { "error" } else { "warning" };
        let _ = writeln!(output, "{level}: {issue}");
    }

    let failed = if strict {
        issues.iter().any(StructureIssue::is_fatal)
    } else {
        tree.root_index().is_none() && !tree.is_empty()
    };
    Outcome { output, failed }
}

pub fn diff_trees(left: &AbsBehaviorTree, right: &AbsBehaviorTree) -> Outcome {
    let diffs = structural_diff(left, right);
    if diffs.is_empty() {
        return Outcome::ok("structurally identical\n".to_string());
    }
    let mut output = String::new();
    for d in &diffs {
        let _ = writeln!(output, "{d}");
    }
    Outcome {
        output,
        failed: true,
    }
}

pub fn find_node(tree: &AbsBehaviorTree, instance_name: &str) -> Outcome {
    let Some(node) = tree.find_node(instance_name) else {
        return Outcome {
            output: format!("node not found: {instance_name}\n"),
            failed: true,
        };
    };

    let mut output = String::new();
    let uid = tree
        .uids()
        .uid_of(node.index)
        .map_or_else(|| "-".to_string(), |u| u.to_string());
    let _ = writeln!(
        output,
        "#{} uid={} {} ({}) status={}",
        node.index, uid, node.instance_name, node.node_type, node.status
    );
    let _ = writeln!(output, "  model: {}", node.registration_name);
    let _ = writeln!(output, "  children: {:?}", node.children_index);
    for (key, value) in &node.parameters {
        let _ = writeln!(output, "  {key} = {value}");
    }
    Outcome::ok(output)
}

pub fn list_models(registry: &NodeModelRegistry) -> Outcome {
    let mut output = String::new();
    for (name, model) in registry.iter() {
        let _ = write!(output, "{name} ({})", model.node_type);
        for p in &model.params {
            let _ = write!(output, " {}={:?}", p.label, p.default_value);
        }
        output.push('\n');
    }
    Outcome::ok(output)
}
