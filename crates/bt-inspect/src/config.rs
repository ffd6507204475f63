//! Inspector configuration, loaded from .bt/config.yaml

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use bt_model::{NodeModelRegistry, TreeNodeModel, DEFAULT_UID_START};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectConfig {
    /// Config version
    pub version: Option<String>,

    /// Spaces per depth level when printing trees
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// First UID minted for snapshot nodes that carry none
    #[serde(default = "default_uid_start")]
    pub uid_start: u16,

    /// Treat ambiguous roots and broken linkage as errors in `check`
    #[serde(default)]
    pub strict: bool,

    /// Project node models, merged over the builtin ones
    #[serde(default)]
    pub models: BTreeMap<String, TreeNodeModel>,
}

fn default_indent() -> usize {
    4
}
fn default_uid_start() -> u16 {
    DEFAULT_UID_START
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            version: None,
            indent: default_indent(),
            uid_start: default_uid_start(),
            strict: false,
            models: BTreeMap::new(),
        }
    }
}

impl InspectConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    /// Load from project root (looks for .bt/config.yaml)
    pub fn load_from_project(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join(".bt/config.yaml");
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Builtin models with the project's models layered on top.
    pub fn registry(&self) -> NodeModelRegistry {
        let mut registry = NodeModelRegistry::builtin();
        registry.extend(self.models.clone());
        registry
    }
}
