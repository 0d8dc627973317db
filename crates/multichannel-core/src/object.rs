//! Disinheritable content objects
//!
//! Folders, pages and files all participate in multichannelling through
//! the same capability surface: a channel set mapping channels to local
//! object rows, an exclusion flag and a set of disinherited channels.
//! Exclusion/disinherit state is owned by the master variant; localized
//! copies carry a read-only mirror of it.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::channel::{ChannelId, ChannelSetId, ObjectId, ObjectKind};

/// Capability surface of any object participating in multichannelling.
pub trait Disinheritable {
    fn id(&self) -> ObjectId;
    fn kind(&self) -> ObjectKind;

    /// The channel this row is valid for (0 for the master variant).
    fn channel(&self) -> ChannelId;

    /// Logical family this variant belongs to.
    fn channel_set_id(&self) -> ChannelSetId;

    /// Channel -> local object id, one entry per localization; entry for
    /// the own channel always exists once the object is saved.
    fn channel_set(&self) -> &BTreeMap<ChannelId, ObjectId>;

    fn is_excluded(&self) -> bool;

    /// Channels explicitly removed from visibility (with their subtrees).
    /// Only meaningful while the object is not excluded.
    fn disinherited_channels(&self) -> &BTreeSet<ChannelId>;

    fn name(&self) -> &str;
    fn filename(&self) -> &str;

    /// Publish directory of the containing folder chain, without filename.
    fn publish_path(&self) -> &str;

    /// Alternate ("nice") URLs, pages only in practice.
    fn nice_urls(&self) -> &[String];

    /// Containing folder, `None` for a root folder.
    fn container_id(&self) -> Option<ObjectId>;

    /// Whether this row is the master variant of its family.
    fn is_master_variant(&self) -> bool {
        self.channel().is_master()
    }

    /// Full computed publish path + filename, lowercased for the
    /// case-insensitive collision comparison.
    fn full_publish_path(&self) -> String {
        let path = self.publish_path().trim_end_matches('/');
        format!("{}/{}", path, self.filename()).to_lowercase()
    }
}

/// Concrete disinheritable object row.
///
/// The storage collaborator maps table rows into this shape before calling
/// the engine; tests construct it directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectRecord {
    pub id: ObjectId,
    pub kind: ObjectKind,
    /// Channel this row is valid for (0 = master variant)
    pub channel: ChannelId,
    pub channel_set_id: ChannelSetId,
    /// Channel -> local object id for the whole family
    #[serde(default)]
    pub channel_set: BTreeMap<ChannelId, ObjectId>,
    #[serde(default)]
    pub excluded: bool,
    #[serde(default)]
    pub disinherited_channels: BTreeSet<ChannelId>,
    pub name: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub publish_path: String,
    #[serde(default)]
    pub nice_urls: Vec<String>,
    #[serde(default)]
    pub container_id: Option<ObjectId>,
    /// Last accepted transition
    pub updated_at: DateTime<Utc>,
}

impl ObjectRecord {
    /// Create a record valid in `channel`; registers itself in the
    /// channel set.
    pub fn new(
        id: ObjectId,
        kind: ObjectKind,
        channel: ChannelId,
        channel_set_id: ChannelSetId,
        name: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            id,
            kind,
            channel,
            channel_set_id,
            channel_set: BTreeMap::from([(channel, id)]),
            excluded: false,
            disinherited_channels: BTreeSet::new(),
            filename: name.to_lowercase(),
            publish_path: String::new(),
            nice_urls: Vec::new(),
            container_id: None,
            name,
            updated_at: Utc::now(),
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    pub fn with_publish_path(mut self, path: impl Into<String>) -> Self {
        self.publish_path = path.into();
        self
    }

    pub fn with_nice_url(mut self, url: impl Into<String>) -> Self {
        self.nice_urls.push(url.into());
        self
    }

    pub fn with_container(mut self, container: ObjectId) -> Self {
        self.container_id = Some(container);
        self
    }

    pub fn with_excluded(mut self) -> Self {
        self.excluded = true;
        self
    }

    pub fn with_disinherited<I: IntoIterator<Item = ChannelId>>(mut self, channels: I) -> Self {
        self.disinherited_channels.extend(channels);
        self
    }

    /// Register an already-existing localized copy of this family.
    pub fn with_localization(mut self, channel: ChannelId, id: ObjectId) -> Self {
        self.channel_set.insert(channel, id);
        self
    }

    /// Local object id of the variant valid in `channel`, if localized.
    pub fn variant_in(&self, channel: ChannelId) -> Option<ObjectId> {
        self.channel_set.get(&channel).copied()
    }

    /// Whether the family holds any localized copy besides this row.
    pub fn has_other_localizations(&self) -> bool {
        self.channel_set.keys().any(|c| *c != self.channel)
    }

    /// Apply an accepted inheritance transition. Callers go through
    /// [`transition::apply_change`](crate::transition::apply_change);
    /// this only mutates the row.
    pub(crate) fn set_inheritance(
        &mut self,
        excluded: bool,
        disinherited: BTreeSet<ChannelId>,
    ) {
        self.excluded = excluded;
        self.disinherited_channels = if excluded { BTreeSet::new() } else { disinherited };
        self.updated_at = Utc::now();
    }

    /// Register a newly created localized copy in the family.
    pub(crate) fn record_localization(&mut self, channel: ChannelId, id: ObjectId) {
        self.channel_set.insert(channel, id);
        self.updated_at = Utc::now();
    }
}

impl Disinheritable for ObjectRecord {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn kind(&self) -> ObjectKind {
        self.kind
    }

    fn channel(&self) -> ChannelId {
        self.channel
    }

    fn channel_set_id(&self) -> ChannelSetId {
        self.channel_set_id
    }

    fn channel_set(&self) -> &BTreeMap<ChannelId, ObjectId> {
        &self.channel_set
    }

    fn is_excluded(&self) -> bool {
        self.excluded
    }

    fn disinherited_channels(&self) -> &BTreeSet<ChannelId> {
        &self.disinherited_channels
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn filename(&self) -> &str {
        &self.filename
    }

    fn publish_path(&self) -> &str {
        &self.publish_path
    }

    fn nice_urls(&self) -> &[String] {
        &self.nice_urls
    }

    fn container_id(&self) -> Option<ObjectId> {
        self.container_id
    }
}
