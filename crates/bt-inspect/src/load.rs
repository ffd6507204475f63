//! Snapshot files: JSON or YAML, picked by extension.

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::debug;

use bt_model::{AbsBehaviorTree, TreeSnapshot, UidGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(SnapshotFormat::Json),
            Some("yaml") | Some("yml") => Ok(SnapshotFormat::Yaml),
            other => bail!(
                "Unsupported snapshot extension {:?} for {}",
                other.unwrap_or(""),
                path.display()
            ),
        }
    }
}

pub fn read_snapshot(path: &Path) -> Result<TreeSnapshot> {
    let format = SnapshotFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let snapshot = match format {
        SnapshotFormat::Json => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON snapshot {}", path.display()))?,
        SnapshotFormat::Yaml => serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML snapshot {}", path.display()))?,
    };
    Ok(snapshot)
}

pub fn write_snapshot(path: &Path, snapshot: &TreeSnapshot) -> Result<()> {
    let content = match SnapshotFormat::from_path(path)? {
        SnapshotFormat::Json => serde_json::to_string_pretty(snapshot)?,
        SnapshotFormat::Yaml => serde_yaml::to_string(snapshot)?,
    };
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Reads a snapshot and rebuilds the tree, with its root resolved.
pub fn load_tree(path: &Path, uids: &UidGenerator) -> Result<AbsBehaviorTree> {
    let snapshot = read_snapshot(path)?;
    let tree = snapshot
        .into_tree(uids)
        .with_context(|| format!("Failed to rebuild tree from {}", path.display()))?;
    debug!(
        path = %path.display(),
        nodes = tree.nodes_count(),
        root = ?tree.root_index(),
        "loaded tree"
    );
    Ok(tree)
}
