use core::fmt;

use tracing::info;

use crate::tree::AbsBehaviorTree;

/// Indented depth-first rendering of a tree, starting at its resolved root.
///
/// Produced by [`AbsBehaviorTree::debug_dump`]. Rendering never fails on bad
/// linkage: missing children, back-edges and nodes reached a second time are
/// printed as markers.
pub struct TreeDump<'a> {
    tree: &'a AbsBehaviorTree,
    indent: usize,
}

impl AbsBehaviorTree {
    pub fn debug_dump(&self, indent: usize) -> TreeDump<'_> {
        TreeDump { tree: self, indent }
    }

    /// Logs the dump line by line at `info` level.
    pub fn debug_print(&self) {
        let text = self.debug_dump(4).to_string();
        if text.is_empty() {
            info!("tree has no resolved root");
        }
        for line in text.lines() {
            info!("{line}");
        }
    }
}

struct Frame {
    position: usize,
    depth: usize,
    next_child: usize,
}

#[derive(Default)]
struct Walk {
    stack: Vec<Frame>,
    on_path: Vec<bool>,
    printed: Vec<bool>,
}

impl TreeDump<'_> {
    /// Prints one line for `index` and, for a node seen for the first time, opens
    /// a frame so its children get visited.
    fn enter(
        &self,
        f: &mut fmt::Formatter<'_>,
        walk: &mut Walk,
        index: i16,
        depth: usize,
    ) -> fmt::Result {
        let pad = depth * self.indent;
        let Some(node) = self.tree.node_at(index) else {
            return writeln!(f, "{:pad$}<missing #{index}>", "");
        };
        // node_at succeeded, so the index is a valid, non-negative position.
        let position = index as usize;
        if walk.on_path[position] {
            return writeln!(f, "{:pad$}<cycle #{index}>", "");
        }
        if walk.printed[position] {
            return writeln!(f, "{:pad$}<shared #{index}>", "");
        }

        writeln!(f, "{:pad$}{} ({})", "", node.instance_name, node.node_type)?;
        walk.on_path[position] = true;
        walk.printed[position] = true;
        walk.stack.push(Frame {
            position,
            depth,
            next_child: 0,
        });
        Ok(())
    }
}

impl fmt::Display for TreeDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.tree.root_index() else {
            return Ok(());
        };
        let len = self.tree.nodes_count();
        let mut walk = Walk {
            on_path: vec![false; len],
            printed: vec![false; len],
            ..Walk::default()
        };

        self.enter(f, &mut walk, root, 0)?;
        while let Some(frame) = walk.stack.last_mut() {
            let node = &self.tree.nodes()[frame.position];
            match node.children_index.get(frame.next_child) {
                Some(&child) => {
                    frame.next_child += 1;
                    let depth = frame.depth + 1;
                    self.enter(f, &mut walk, child, depth)?;
                }
                None => {
                    walk.on_path[frame.position] = false;
                    walk.stack.pop();
                }
            }
        }
        Ok(())
    }
}
