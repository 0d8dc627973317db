//! Storage-mapping configuration
//!
//! Maps object kinds to their table name and multichannelling columns.
//! Built once at startup and passed by reference into the storage
//! collaborator; the engine itself never reads it. Replaces the
//! annotation-driven registries found in older CMS stacks with an
//! explicit, inspectable struct.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::channel::ObjectKind;
use crate::error::{ChannelInheritanceError, Result};

const CONFIG_FILE: &str = "multichannel.toml";

/// Default mapping template with comments, written on first init.
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# multichannel storage mapping
# One [[kind]] block per disinheritable object kind.

[[kind]]
kind = "folder"
table = "folder"
fields = ["channelset_id", "channel_id", "excluded", "disinherited_channels", "mc_exclude"]

[[kind]]
kind = "page"
table = "page"
fields = ["channelset_id", "channel_id", "excluded", "disinherited_channels", "mc_exclude"]

[[kind]]
kind = "file"
table = "contentfile"
fields = ["channelset_id", "channel_id", "excluded", "disinherited_channels", "mc_exclude"]
"#;

/// Table and column mapping for one object kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KindMapping {
    pub kind: ObjectKind,
    /// Backing table name
    pub table: String,
    /// Multichannelling columns on that table
    #[serde(default)]
    pub fields: Vec<String>,
}

/// Storage mapping for all disinheritable kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(rename = "kind", default)]
    pub kinds: Vec<KindMapping>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TEMPLATE).expect("default template parses")
    }
}

impl StorageConfig {
    /// Load the mapping from a base directory, defaults when absent.
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        toml::from_str(&content).map_err(|e| {
            ChannelInheritanceError::Internal(format!("{}: {}", path.display(), e))
        })
    }

    /// Save the mapping to a base directory.
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        fs::create_dir_all(base_dir)?;
        let content = toml::to_string_pretty(self)
            .map_err(|e| ChannelInheritanceError::Internal(e.to_string()))?;
        fs::write(base_dir.join(CONFIG_FILE), content)?;
        Ok(())
    }

    /// Write the commented default template if no file exists yet.
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;
        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }
        Ok(path)
    }

    /// Mapping for one kind.
    pub fn mapping(&self, kind: ObjectKind) -> Option<&KindMapping> {
        self.kinds.iter().find(|m| m.kind == kind)
    }

    /// Config file path inside a base directory.
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }
}
