//! Visibility segment calculator
//!
//! A segment is the set of channels an object rooted at a start channel is
//! visible in: the start channel plus all descendants, minus the subtrees
//! rooted at disinherited channels. An excluded object is visible only in
//! its own channel. Segments are computed fresh per resolution and never
//! cached across requests.

use std::collections::{BTreeSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::channel::{ChannelId, ChannelTree};

/// Computed channel visibility of one object configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelTreeSegment {
    start: ChannelId,
    excluded: bool,
    /// Simplified restriction set (no restriction has a restricted ancestor)
    restrictions: BTreeSet<ChannelId>,
    visible: BTreeSet<ChannelId>,
}

impl ChannelTreeSegment {
    /// Compute the segment for an object rooted at `start` with the given
    /// exclusion state.
    pub fn compute(
        tree: &impl ChannelTree,
        start: ChannelId,
        excluded: bool,
        disinherited: &BTreeSet<ChannelId>,
    ) -> Self {
        if excluded {
            return Self {
                start,
                excluded: true,
                restrictions: BTreeSet::new(),
                visible: BTreeSet::from([start]),
            };
        }

        let restrictions = simplify_end_nodes(tree, disinherited);
        let mut visible = BTreeSet::new();
        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            if !visible.insert(current) {
                continue;
            }
            for child in tree.children_of(current) {
                // End nodes: do not descend into a disinherited subtree.
                if !restrictions.contains(&child) {
                    queue.push_back(child);
                }
            }
        }

        Self {
            start,
            excluded: false,
            restrictions,
            visible,
        }
    }

    pub fn start_channel(&self) -> ChannelId {
        self.start
    }

    pub fn is_excluded(&self) -> bool {
        self.excluded
    }

    /// All channels the configuration is visible in.
    pub fn all_visible_channels(&self) -> &BTreeSet<ChannelId> {
        &self.visible
    }

    pub fn contains(&self, channel: ChannelId) -> bool {
        self.visible.contains(&channel)
    }

    /// Simplified disinherited set (empty when excluded).
    pub fn restrictions(&self) -> &BTreeSet<ChannelId> {
        &self.restrictions
    }

    /// Whether both segments are visible in at least one common channel.
    pub fn intersects(&self, other: &ChannelTreeSegment) -> bool {
        self.visible.iter().any(|c| other.visible.contains(c))
    }

    /// Produce a more restrictive segment rooted at the same channel.
    ///
    /// Used to compose a container's visibility with a contained object's
    /// own state; the result is excluded if either side is, otherwise its
    /// restriction set is the union of both. Only meaningful when the
    /// other state belongs to an ancestor context of this segment's start.
    pub fn add_restrictions(
        &self,
        tree: &impl ChannelTree,
        other_excluded: bool,
        other_disinherited: &BTreeSet<ChannelId>,
    ) -> Self {
        let excluded = self.excluded || other_excluded;
        let mut combined = self.restrictions.clone();
        combined.extend(other_disinherited.iter().copied());
        Self::compute(tree, self.start, excluded, &combined)
    }
}

/// Strip disinherited channels that already have a disinherited ancestor;
/// their subtrees are pruned by the ancestor anyway.
fn simplify_end_nodes(
    tree: &impl ChannelTree,
    disinherited: &BTreeSet<ChannelId>,
) -> BTreeSet<ChannelId> {
    disinherited
        .iter()
        .copied()
        .filter(|channel| {
            !disinherited
                .iter()
                .any(|other| other != channel && tree.is_ancestor_or_self(*other, *channel))
        })
        .collect()
}
