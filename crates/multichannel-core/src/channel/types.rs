//! Channel and object identity types
//!
//! # Hierarchy
//! ```text
//! Node (root site, channel 0)
//! ├── channel A (overrides inherited content for site A)
//! │   └── channel A1
//! └── channel B
//! ```
//!
//! A channel inherits every object of its masters unless the object is
//! excluded from multichannelling or the channel is disinherited.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a channel in the channel tree.
///
/// Channel `0` is the master node (the root site); every other id is a
/// channel that overrides content inherited from its masters.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct ChannelId(pub u32);

impl ChannelId {
    /// The master node ("channel 0").
    pub const MASTER: ChannelId = ChannelId(0);

    /// Whether this is the master node.
    pub fn is_master(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a locally stored object row.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct ObjectId(pub u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a logical object family.
///
/// All localized variants of one object share the same channel-set id and
/// differ only in the channel they are valid for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct ChannelSetId(pub u64);

impl fmt::Display for ChannelSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node in the channel tree.
///
/// Owned by the tree collaborator; immutable for the duration of a
/// resolution. A channel may have multiple masters (the tree is a DAG of
/// masters), listed in inheritance order with the primary line first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    /// Channel id (0 for the master node)
    pub id: ChannelId,
    /// Display name (used in error parameters)
    pub name: String,
    /// Direct masters, primary inheritance line first; empty for the root
    #[serde(default)]
    pub masters: Vec<ChannelId>,
}

impl Channel {
    /// Create a channel with no masters (a root node).
    pub fn new(id: ChannelId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            masters: Vec::new(),
        }
    }

    /// Add a master channel (primary line is the first one added).
    pub fn with_master(mut self, master: ChannelId) -> Self {
        self.masters.push(master);
        self
    }

    /// The primary master, if any.
    pub fn primary_master(&self) -> Option<ChannelId> {
        self.masters.first().copied()
    }
}

/// Kind of a disinheritable object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectKind {
    /// Folder (container, owns a publish directory)
    Folder,
    /// Page (rendered content with a filename and nice URLs)
    Page,
    /// File (binary content with a filename)
    File,
}

impl ObjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::Page => "page",
            Self::File => "file",
        }
    }

    /// Whether objects of this kind can contain other objects.
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Folder)
    }

    /// Collision-check strategy for this kind.
    pub fn strategy(&self) -> &'static KindStrategy {
        KIND_STRATEGIES
            .iter()
            .find(|s| s.kind == *self)
            .expect("strategy table covers every kind")
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-kind collision-check behavior.
///
/// Folders collide on their publish directory, pages and files on their
/// computed publish path + filename; only pages carry nice URLs.
#[derive(Debug, Clone)]
pub struct KindStrategy {
    pub kind: ObjectKind,
    /// Compare the full publish path + filename
    pub compares_publish_path: bool,
    /// Compare nice/alternate URLs
    pub compares_nice_urls: bool,
    /// Compare the plain object name inside the same container
    pub compares_name: bool,
}

/// Collision strategies per object kind.
pub const KIND_STRATEGIES: &[KindStrategy] = &[
    KindStrategy {
        kind: ObjectKind::Folder,
        compares_publish_path: true,
        compares_nice_urls: false,
        compares_name: true,
    },
    KindStrategy {
        kind: ObjectKind::Page,
        compares_publish_path: true,
        compares_nice_urls: true,
        compares_name: false,
    },
    KindStrategy {
        kind: ObjectKind::File,
        compares_publish_path: true,
        compares_nice_urls: false,
        compares_name: false,
    },
];
