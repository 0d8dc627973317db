//! Candidate rows and the lookup collaborator
//!
//! The storage layer feeds the engine denormalized rows: one row per
//! (variant, disinherited channel) pair, so a variant with three
//! disinherited channels appears three times. The engine never queries
//! SQL itself; it goes through the [`CandidateLookup`] port.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::channel::{ChannelId, ChannelSetId, ObjectId, ObjectKind};
use crate::error::Result;
use crate::object::Disinheritable;

/// One denormalized row describing a localized variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRow {
    pub object_id: ObjectId,
    pub kind: ObjectKind,
    /// Channel this variant is valid for (0 = master)
    pub channel: ChannelId,
    pub channel_set_id: ChannelSetId,
    pub excluded: bool,
    /// One disinherited channel of the variant's family, or `None` for a
    /// variant without restrictions (denormalized, so a variant with
    /// several disinherited channels yields several rows)
    #[serde(default)]
    pub disinherited_channel: Option<ChannelId>,
    pub name: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub publish_path: String,
    #[serde(default)]
    pub nice_urls: Vec<String>,
    #[serde(default)]
    pub container_id: Option<ObjectId>,
}

impl CandidateRow {
    /// Denormalize an object into its candidate rows.
    pub fn from_object(object: &impl Disinheritable) -> Vec<CandidateRow> {
        let base = CandidateRow {
            object_id: object.id(),
            kind: object.kind(),
            channel: object.channel(),
            channel_set_id: object.channel_set_id(),
            excluded: object.is_excluded(),
            disinherited_channel: None,
            name: object.name().to_string(),
            filename: object.filename().to_string(),
            publish_path: object.publish_path().to_string(),
            nice_urls: object.nice_urls().to_vec(),
            container_id: object.container_id(),
        };
        if object.disinherited_channels().is_empty() {
            return vec![base];
        }
        object
            .disinherited_channels()
            .iter()
            .map(|channel| {
                let mut row = base.clone();
                row.disinherited_channel = Some(*channel);
                row
            })
            .collect()
    }

    /// Full computed publish path + filename, lowercased.
    pub fn full_publish_path(&self) -> String {
        let path = self.publish_path.trim_end_matches('/');
        format!("{}/{}", path, self.filename).to_lowercase()
    }
}

/// Collision query for the reinherit/creation name checks.
///
/// The checker populates the criteria the object's kind strategy calls
/// for; empty criteria never match. The object's own family is always
/// excluded from the comparison.
#[derive(Debug, Clone, Default)]
pub struct CollisionQuery {
    /// Lowercased full publish paths to compare against
    pub full_paths: Vec<String>,
    /// Nice/alternate URLs to compare against (lowercased)
    pub nice_urls: Vec<String>,
    /// Plain names to compare inside the same containers (lowercased)
    pub names: Vec<String>,
    /// Containers to restrict the name comparison to
    pub folders: Vec<ObjectId>,
    /// Channels in which a match counts as a collision
    pub channels: BTreeSet<ChannelId>,
    /// Logical family to exclude from the comparison
    pub exclude_family: ChannelSetId,
}

/// Query port backed by the storage layer.
pub trait CandidateLookup {
    /// All rows of one logical family.
    fn find_by_family(&self, family: ChannelSetId) -> Result<Vec<CandidateRow>>;

    /// Rows colliding with the query by name, path or nice URL.
    fn find_colliding(&self, query: &CollisionQuery) -> Result<Vec<CandidateRow>>;

    /// Rows of all objects directly inside a container.
    fn find_in_container(&self, container: ObjectId) -> Result<Vec<CandidateRow>>;

    /// Rows belonging to one object (several when it disinherits several
    /// channels).
    fn find_object(&self, id: ObjectId) -> Result<Vec<CandidateRow>>;
}

/// In-memory lookup used by tests and embedding callers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCandidateLookup {
    rows: Vec<CandidateRow>,
}

impl InMemoryCandidateLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_row(&mut self, row: CandidateRow) {
        self.rows.push(row);
    }

    /// Denormalize and add all rows of an object.
    pub fn add_object(&mut self, object: &impl Disinheritable) {
        self.rows.extend(CandidateRow::from_object(object));
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn matches(row: &CandidateRow, query: &CollisionQuery) -> bool {
        if row.channel_set_id == query.exclude_family {
            return false;
        }
        if !query.channels.is_empty() && !query.channels.contains(&row.channel) {
            return false;
        }
        let path = row.full_publish_path();
        if query.full_paths.iter().any(|p| *p == path) {
            return true;
        }
        if row
            .nice_urls
            .iter()
            .any(|url| query.nice_urls.iter().any(|q| q.eq_ignore_ascii_case(url)))
        {
            return true;
        }
        if !query.names.is_empty()
            && row
                .container_id
                .is_some_and(|c| query.folders.contains(&c))
            && query.names.iter().any(|n| n.eq_ignore_ascii_case(&row.name))
        {
            return true;
        }
        false
    }

    /// Deduplicate rows per object id, keeping stable order.
    fn dedup(rows: Vec<CandidateRow>) -> Vec<CandidateRow> {
        let mut seen: BTreeMap<ObjectId, usize> = BTreeMap::new();
        let mut out: Vec<CandidateRow> = Vec::new();
        for row in rows {
            if seen.insert(row.object_id, out.len()).is_none() {
                out.push(row);
            }
        }
        out
    }
}

impl CandidateLookup for InMemoryCandidateLookup {
    fn find_by_family(&self, family: ChannelSetId) -> Result<Vec<CandidateRow>> {
        Ok(self
            .rows
            .iter()
            .filter(|r| r.channel_set_id == family)
            .cloned()
            .collect())
    }

    fn find_colliding(&self, query: &CollisionQuery) -> Result<Vec<CandidateRow>> {
        Ok(Self::dedup(
            self.rows
                .iter()
                .filter(|r| Self::matches(r, query))
                .cloned()
                .collect(),
        ))
    }

    fn find_in_container(&self, container: ObjectId) -> Result<Vec<CandidateRow>> {
        Ok(self
            .rows
            .iter()
            .filter(|r| r.container_id == Some(container))
            .cloned()
            .collect())
    }

    fn find_object(&self, id: ObjectId) -> Result<Vec<CandidateRow>> {
        Ok(self
            .rows
            .iter()
            .filter(|r| r.object_id == id)
            .cloned()
            .collect())
    }
}
