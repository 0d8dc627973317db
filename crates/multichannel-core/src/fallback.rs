//! Multichannel fallback resolution
//!
//! Given the candidate rows of one logical family, determine per target
//! channel which variant is actually visible there: walk the target's
//! master chain upwards and take the first variant that is not hidden by
//! the family's exclusion/disinherit state. Results are deterministic and
//! independent of input row order; callers cache them keyed on
//! `(familyId, targetChannelSet)`.

use std::collections::{BTreeMap, BTreeSet};

use crate::candidate::CandidateRow;
use crate::channel::{ChannelId, ChannelTree, ObjectId};

/// Resolves the visible variant of a logical family per channel.
pub struct FallbackResolver<'a, T: ChannelTree> {
    tree: &'a T,
}

impl<'a, T: ChannelTree> FallbackResolver<'a, T> {
    pub fn new(tree: &'a T) -> Self {
        Self { tree }
    }

    /// Resolve the visible variant for every target channel.
    ///
    /// Channels without a visible variant are absent from the result map.
    pub fn resolve(
        &self,
        rows: &[CandidateRow],
        targets: &BTreeSet<ChannelId>,
    ) -> BTreeMap<ChannelId, ObjectId> {
        self.resolve_for(rows, targets, None)
    }

    /// Like [`resolve`](Self::resolve), but with the object actually being
    /// resolved, which wins the tie-break on inconsistent duplicate rows.
    pub fn resolve_for(
        &self,
        rows: &[CandidateRow],
        targets: &BTreeSet<ChannelId>,
        self_object: Option<ObjectId>,
    ) -> BTreeMap<ChannelId, ObjectId> {
        let variants = self.variants_per_channel(rows, self_object);
        if variants.is_empty() {
            return BTreeMap::new();
        }

        let root_object = self.family_root(&variants);
        let excluded = rows
            .iter()
            .any(|r| r.object_id == root_object && r.excluded);
        let disinherited: BTreeSet<ChannelId> = rows
            .iter()
            .filter(|r| r.object_id == root_object)
            .filter_map(|r| r.disinherited_channel)
            .collect();

        let mut resolved = BTreeMap::new();
        for target in targets {
            if let Some(object) = self.walk_chain(*target, &variants, excluded, &disinherited) {
                resolved.insert(*target, object);
            }
        }
        resolved
    }

    /// Walk the master chain of `target` and return the first variant not
    /// hidden relative to the request channel.
    fn walk_chain(
        &self,
        target: ChannelId,
        variants: &BTreeMap<ChannelId, ObjectId>,
        excluded: bool,
        disinherited: &BTreeSet<ChannelId>,
    ) -> Option<ObjectId> {
        let mut hidden_on_path = false;
        for visited in self.tree.master_chain(target) {
            // Once a disinherited channel lies between the request channel
            // and the candidate, every candidate further up is hidden too.
            if disinherited.contains(&visited) {
                hidden_on_path = true;
            }
            if let Some(object) = variants.get(&visited) {
                // Exclusion stops inheritance, not explicit copies: a
                // variant defined at the target channel itself stays
                // visible there.
                let hidden = hidden_on_path || (excluded && visited != target);
                if !hidden {
                    return Some(*object);
                }
                // Hidden candidate: treat as absent, keep walking up, but
                // never jump to a family member outside the chain.
            }
        }
        None
    }

    /// Deduplicate rows into one variant per channel, applying the
    /// tolerant tie-break on inconsistent duplicates.
    fn variants_per_channel(
        &self,
        rows: &[CandidateRow],
        self_object: Option<ObjectId>,
    ) -> BTreeMap<ChannelId, ObjectId> {
        let mut grouped: BTreeMap<ChannelId, BTreeSet<ObjectId>> = BTreeMap::new();
        for row in rows {
            grouped.entry(row.channel).or_default().insert(row.object_id);
        }

        grouped
            .into_iter()
            .map(|(channel, objects)| {
                let chosen = if objects.len() == 1 {
                    *objects.iter().next().unwrap()
                } else {
                    // Data inconsistency: several variants claim the same
                    // channel. Degrade tolerantly, do not raise.
                    let chosen = self_object
                        .filter(|id| objects.contains(id))
                        .unwrap_or_else(|| *objects.iter().next().unwrap());
                    let family = rows
                        .iter()
                        .find(|r| r.channel == channel)
                        .map(|r| r.channel_set_id)
                        .unwrap_or_default();
                    log::warn!(
                        "duplicate variants {:?} of channel set {} in channel {}, picking object {}",
                        objects,
                        family,
                        channel,
                        chosen
                    );
                    chosen
                };
                (channel, chosen)
            })
            .collect()
    }

    /// The family root: the variant whose channel sits topmost on the
    /// master chain.
    fn family_root(&self, variants: &BTreeMap<ChannelId, ObjectId>) -> ObjectId {
        variants
            .iter()
            .map(|(channel, object)| (*channel, *object))
            .min_by_key(|(channel, object)| (self.tree.master_chain(*channel).len(), *object))
            .map(|(_, object)| object)
            .expect("variants checked non-empty")
    }
}
