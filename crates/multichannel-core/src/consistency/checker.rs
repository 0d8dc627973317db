//! Disinherit consistency checking
//!
//! Validates proposed changes to an object's exclusion/disinherit state and
//! proposed creations of new variants before anything is persisted. All
//! rejections carry a stable reason code; the caller must abandon the
//! write entirely on failure (check-then-act).

use std::collections::BTreeSet;

use crate::candidate::{CandidateLookup, CandidateRow, CollisionQuery};
use crate::channel::{ChannelId, ChannelSetId, ChannelTree, ObjectId, ObjectKind};
use crate::error::{ChannelInheritanceError, Result};
use crate::object::Disinheritable;
use crate::segment::ChannelTreeSegment;

/// Default bound for recursive descendant checks. Content trees are
/// shallow in practice; the bound exists to keep re-entrant checks finite.
pub const DEFAULT_RECURSION_LIMIT: u32 = 32;

/// Explicit recursion bound for descendant checks.
///
/// Replaces the ad-hoc "skip recursion" boolean: a guard at depth 0 never
/// descends, and the visited set stops re-entrant cycles through
/// inconsistent container data.
#[derive(Debug)]
pub struct RecursionGuard {
    remaining: u32,
    visited: BTreeSet<ObjectId>,
}

impl RecursionGuard {
    pub fn new(depth_limit: u32) -> Self {
        Self {
            remaining: depth_limit,
            visited: BTreeSet::new(),
        }
    }

    /// Guard that never descends (`skip_recursive`).
    pub fn disabled() -> Self {
        Self::new(0)
    }

    /// Whether any descent is allowed at all.
    pub fn active(&self) -> bool {
        self.remaining > 0
    }

    /// Try to descend into `id`; false when the bound is exhausted or the
    /// object was already visited on this path.
    fn descend(&mut self, id: ObjectId) -> bool {
        if self.remaining == 0 || !self.visited.insert(id) {
            return false;
        }
        self.remaining -= 1;
        true
    }

    fn ascend(&mut self, id: ObjectId) {
        self.visited.remove(&id);
        self.remaining += 1;
    }
}

/// Inheritance state of an object reconstructed from candidate rows.
#[derive(Debug, Clone)]
struct ObjectState {
    id: ObjectId,
    kind: ObjectKind,
    channel: ChannelId,
    family: ChannelSetId,
    excluded: bool,
    disinherited: BTreeSet<ChannelId>,
    name: String,
}

impl ObjectState {
    fn from_rows(rows: &[CandidateRow]) -> Option<Self> {
        let first = rows.first()?;
        Some(Self {
            id: first.object_id,
            kind: first.kind,
            channel: first.channel,
            family: first.channel_set_id,
            excluded: first.excluded,
            disinherited: rows.iter().filter_map(|r| r.disinherited_channel).collect(),
            name: first.name.clone(),
        })
    }
}

/// Validates exclusion/disinherit transitions against the channel tree
/// and the existing object population.
pub struct ConsistencyChecker<'a, T: ChannelTree, L: CandidateLookup> {
    tree: &'a T,
    lookup: &'a L,
}

impl<'a, T: ChannelTree, L: CandidateLookup> ConsistencyChecker<'a, T, L> {
    pub fn new(tree: &'a T, lookup: &'a L) -> Self {
        Self { tree, lookup }
    }

    /// Validate a proposed change of (excluded, disinherited channels) on
    /// an existing master object.
    ///
    /// `skip_recursive` disables the descent into nested containers; it
    /// must be set when the check runs from within an already-recursive
    /// call.
    pub fn check_change_consistency(
        &self,
        object: &impl Disinheritable,
        new_excluded: bool,
        new_disinherited: &BTreeSet<ChannelId>,
        skip_recursive: bool,
    ) -> Result<()> {
        let mut guard = if skip_recursive {
            RecursionGuard::disabled()
        } else {
            RecursionGuard::new(DEFAULT_RECURSION_LIMIT)
        };

        // Invariant: an object can never hide its own channel.
        if new_disinherited.contains(&object.channel()) {
            return Err(ChannelInheritanceError::DisinheritSelf {
                object: object.name().to_string(),
                channel: object.channel(),
            });
        }

        let original = ChannelTreeSegment::compute(
            self.tree,
            object.channel(),
            object.is_excluded(),
            object.disinherited_channels(),
        );
        let proposed = ChannelTreeSegment::compute(
            self.tree,
            object.channel(),
            new_excluded,
            new_disinherited,
        );

        let net_disinherited: BTreeSet<ChannelId> = original
            .all_visible_channels()
            .difference(proposed.all_visible_channels())
            .copied()
            .collect();
        let net_reinherited: BTreeSet<ChannelId> = proposed
            .all_visible_channels()
            .difference(original.all_visible_channels())
            .copied()
            .collect();

        if new_excluded && !object.is_excluded() {
            self.check_exclusion(object, &mut guard)?;
        }

        let parent = self.parent_state(object)?;
        if !new_excluded && object.is_excluded() {
            if let Some(parent) = parent.as_ref() {
                if parent.excluded {
                    return Err(ChannelInheritanceError::IncludeParentExcluded {
                        object: object.name().to_string(),
                        parent: parent.name.clone(),
                    });
                }
            }
        }

        self.check_net_disinherited(object, new_excluded, &proposed, &net_disinherited, &mut guard)?;
        self.check_net_reinherited(object, parent.as_ref(), &net_reinherited)?;
        Ok(())
    }

    /// Validate the inheritance state of an object that is about to be
    /// created (before anything is persisted).
    ///
    /// For a localized copy the family must not be excluded and the target
    /// channel must not be disinherited; for a new master object the
    /// container must be visible in the target channel.
    pub fn check_creation_consistency(
        &self,
        object: &impl Disinheritable,
        excluded: bool,
        disinherited: &BTreeSet<ChannelId>,
    ) -> Result<()> {
        if disinherited.contains(&object.channel()) {
            return Err(ChannelInheritanceError::DisinheritSelf {
                object: object.name().to_string(),
                channel: object.channel(),
            });
        }

        let family_rows = self.lookup.find_by_family(object.channel_set_id())?;
        let existing: Vec<&CandidateRow> = family_rows
            .iter()
            .filter(|r| r.object_id != object.id())
            .collect();

        if let Some(master) = self.family_master(&existing) {
            // Localized copy of an existing family.
            if master.excluded {
                return Err(ChannelInheritanceError::CreateMasterExcluded {
                    object: master.name.clone(),
                });
            }
            let master_segment = ChannelTreeSegment::compute(
                self.tree,
                master.channel,
                false,
                &master.disinherited,
            );
            if !master_segment.contains(object.channel()) {
                return Err(ChannelInheritanceError::CreateChannelDisinherited {
                    object: master.name.clone(),
                    channel: object.channel(),
                });
            }
            return Ok(());
        }

        // New master object placed into a channel.
        if let Some(container) = self.parent_state(object)? {
            if container.excluded && !excluded {
                return Err(ChannelInheritanceError::CreateContainerExcluded {
                    object: object.name().to_string(),
                    container: container.name.clone(),
                });
            }
            if !container.excluded {
                let container_segment = ChannelTreeSegment::compute(
                    self.tree,
                    container.channel,
                    false,
                    &container.disinherited,
                );
                if !container_segment.contains(object.channel()) {
                    return Err(ChannelInheritanceError::CreateContainerDisinherited {
                        object: object.name().to_string(),
                        container: container.name.clone(),
                        channel: object.channel(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Invariant 2: an excluded master cannot have localized variants, and
    /// (for containers) no descendant may hold a localization outside the
    /// object's own channel.
    fn check_exclusion(
        &self,
        object: &impl Disinheritable,
        guard: &mut RecursionGuard,
    ) -> Result<()> {
        if let Some(channel) = object
            .channel_set()
            .keys()
            .find(|c| **c != object.channel())
        {
            return Err(ChannelInheritanceError::ExcludeWithLocalization {
                object: object.name().to_string(),
                channel: *channel,
            });
        }

        if object.kind().is_container() && guard.active() {
            for row in self.lookup.find_in_container(object.id())? {
                if row.channel != object.channel() {
                    return Err(ChannelInheritanceError::ExcludeObstruction {
                        object: object.name().to_string(),
                        obstruction: row.name.clone(),
                        channel: row.channel,
                    });
                }
            }
        }
        Ok(())
    }

    fn check_net_disinherited(
        &self,
        object: &impl Disinheritable,
        new_excluded: bool,
        proposed: &ChannelTreeSegment,
        net_disinherited: &BTreeSet<ChannelId>,
        guard: &mut RecursionGuard,
    ) -> Result<()> {
        let children = if object.kind().is_container() && !net_disinherited.is_empty() {
            self.lookup.find_in_container(object.id())?
        } else {
            Vec::new()
        };

        for channel in net_disinherited {
            // A localized variant defined in the channel would be orphaned.
            if !new_excluded {
                if let Some(variant) = object.channel_set().get(channel) {
                    if *variant != object.id() {
                        return Err(ChannelInheritanceError::OrphanedLocalization {
                            object: object.name().to_string(),
                            channel: *channel,
                        });
                    }
                }
            }

            // A localized descendant rooted in the channel obstructs the
            // change (it would silently vanish from its own channel).
            if let Some(row) = children.iter().find(|r| r.channel == *channel) {
                return Err(ChannelInheritanceError::ObstructedByLocalized {
                    object: object.name().to_string(),
                    obstruction: row.name.clone(),
                    channel: *channel,
                });
            }
        }

        // Indirect orphaning inside nested containers.
        if !net_disinherited.is_empty() && object.kind().is_container() && guard.active() {
            self.check_descendants(object.id(), proposed, guard)?;
        }
        Ok(())
    }

    fn check_net_reinherited(
        &self,
        object: &impl Disinheritable,
        parent: Option<&ObjectState>,
        net_reinherited: &BTreeSet<ChannelId>,
    ) -> Result<()> {
        let parent_segment = match parent {
            Some(state) => Some(ChannelTreeSegment::compute(
                self.tree,
                state.channel,
                state.excluded,
                &state.disinherited,
            )),
            None => None,
        };

        for channel in net_reinherited {
            if let Some(segment) = parent_segment.as_ref() {
                if !segment.contains(*channel) {
                    return Err(ChannelInheritanceError::ReinheritFolderInvisible {
                        object: object.name().to_string(),
                        channel: *channel,
                    });
                }
            }

            let query = self.collision_query(object, *channel);
            if let Some(row) = self.lookup.find_colliding(&query)?.into_iter().next() {
                return Err(ChannelInheritanceError::ReincludeNameCollision {
                    object: object.name().to_string(),
                    conflicting: row.full_publish_path(),
                    channel: *channel,
                });
            }
        }
        Ok(())
    }

    /// Descend into a container and verify no localization of any nested
    /// object falls outside the restricted segment.
    fn check_descendants(
        &self,
        container: ObjectId,
        restricted: &ChannelTreeSegment,
        guard: &mut RecursionGuard,
    ) -> Result<()> {
        for child in self.child_states(container)? {
            let family_rows = self.lookup.find_by_family(child.family)?;
            for row in &family_rows {
                if !row.channel.is_master() && !restricted.contains(row.channel) {
                    return Err(ChannelInheritanceError::OrphanedLocalization {
                        object: row.name.clone(),
                        channel: row.channel,
                    });
                }
            }

            if child.kind.is_container() && guard.descend(child.id) {
                let child_segment =
                    restricted.add_restrictions(self.tree, child.excluded, &child.disinherited);
                let result = self.check_descendants(child.id, &child_segment, guard);
                guard.ascend(child.id);
                result?;
            }
        }
        Ok(())
    }

    /// Build the collision query for one channel per the kind strategy.
    fn collision_query(&self, object: &impl Disinheritable, channel: ChannelId) -> CollisionQuery {
        let strategy = object.kind().strategy();
        let mut query = CollisionQuery {
            channels: BTreeSet::from([channel]),
            exclude_family: object.channel_set_id(),
            ..Default::default()
        };
        if strategy.compares_publish_path {
            query.full_paths.push(object.full_publish_path());
        }
        if strategy.compares_nice_urls {
            query
                .nice_urls
                .extend(object.nice_urls().iter().map(|u| u.to_lowercase()));
        }
        if strategy.compares_name {
            query.names.push(object.name().to_lowercase());
            query.folders.extend(object.container_id());
        }
        query
    }

    fn parent_state(&self, object: &impl Disinheritable) -> Result<Option<ObjectState>> {
        match object.container_id() {
            Some(container) => self.object_state(container),
            None => Ok(None),
        }
    }

    fn object_state(&self, id: ObjectId) -> Result<Option<ObjectState>> {
        let rows = self.lookup.find_object(id)?;
        Ok(ObjectState::from_rows(&rows))
    }

    /// States of all objects directly inside a container, one per object.
    fn child_states(&self, container: ObjectId) -> Result<Vec<ObjectState>> {
        let rows = self.lookup.find_in_container(container)?;
        let mut ids: Vec<ObjectId> = rows.iter().map(|r| r.object_id).collect();
        ids.sort_unstable();
        ids.dedup();
        Ok(ids
            .into_iter()
            .filter_map(|id| {
                let object_rows: Vec<CandidateRow> = rows
                    .iter()
                    .filter(|r| r.object_id == id)
                    .cloned()
                    .collect();
                ObjectState::from_rows(&object_rows)
            })
            .collect())
    }

    /// The master variant among existing family rows: the row whose
    /// channel sits topmost on the master chain.
    fn family_master(&self, rows: &[&CandidateRow]) -> Option<ObjectState> {
        let master_id = rows
            .iter()
            .min_by_key(|r| (self.tree.master_chain(r.channel).len(), r.object_id))
            .map(|r| r.object_id)?;
        let master_rows: Vec<CandidateRow> = rows
            .iter()
            .filter(|r| r.object_id == master_id)
            .map(|r| (*r).clone())
            .collect();
        ObjectState::from_rows(&master_rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::InMemoryCandidateLookup;
    use crate::channel::test_support::linear_tree;
    use crate::channel::InMemoryChannelTree;
    use crate::object::ObjectRecord;

    fn set(ids: &[u32]) -> BTreeSet<ChannelId> {
        ids.iter().map(|i| ChannelId(*i)).collect()
    }

    fn folder(id: u64, family: u64, name: &str) -> ObjectRecord {
        ObjectRecord::new(
            ObjectId(id),
            ObjectKind::Folder,
            ChannelId::MASTER,
            ChannelSetId(family),
            name,
        )
    }

    fn page(id: u64, channel: u32, family: u64, name: &str) -> ObjectRecord {
        ObjectRecord::new(
            ObjectId(id),
            ObjectKind::Page,
            ChannelId(channel),
            ChannelSetId(family),
            name,
        )
    }

    fn checker<'a>(
        tree: &'a InMemoryChannelTree,
        lookup: &'a InMemoryCandidateLookup,
    ) -> ConsistencyChecker<'a, InMemoryChannelTree, InMemoryCandidateLookup> {
        ConsistencyChecker::new(tree, lookup)
    }

    #[test]
    fn test_rejects_disinheriting_own_channel() {
        let tree = linear_tree();
        let lookup = InMemoryCandidateLookup::new();
        let object = folder(1, 10, "news");

        let err = checker(&tree, &lookup)
            .check_change_consistency(&object, false, &set(&[0]), false)
            .unwrap_err();
        assert_eq!(err.reason_code(), "disinherit.channel.self");
    }

    #[test]
    fn test_exclude_rejected_with_existing_localization() {
        let tree = linear_tree();
        let lookup = InMemoryCandidateLookup::new();
        let object = page(1, 0, 10, "news").with_localization(ChannelId(2), ObjectId(5));

        let err = checker(&tree, &lookup)
            .check_change_consistency(&object, true, &BTreeSet::new(), false)
            .unwrap_err();
        assert_eq!(err.reason_code(), "disinherit.exclude.localization");
    }

    #[test]
    fn test_exclude_rejected_with_localized_descendant() {
        let tree = linear_tree();
        let mut lookup = InMemoryCandidateLookup::new();
        let object = folder(1, 10, "news");
        lookup.add_object(&page(2, 1, 11, "teaser").with_container(ObjectId(1)));

        let err = checker(&tree, &lookup)
            .check_change_consistency(&object, true, &BTreeSet::new(), false)
            .unwrap_err();
        assert_eq!(err.reason_code(), "disinherit.exclude.obstruction");

        // skip_recursive bypasses the exclusion-side descendant scan; the
        // localized child is still caught per net-disinherited channel.
        let err = checker(&tree, &lookup)
            .check_change_consistency(&object, true, &BTreeSet::new(), true)
            .unwrap_err();
        assert_eq!(err.reason_code(), "disinherit.obstructedby.localized");
    }

    #[test]
    fn test_reinclude_rejected_when_parent_excluded() {
        // Scenario: excluded object under an excluded parent folder must
        // not be reincluded.
        let tree = linear_tree();
        let mut lookup = InMemoryCandidateLookup::new();
        let parent = folder(1, 10, "root").with_excluded();
        lookup.add_object(&parent);
        let object = folder(2, 11, "news")
            .with_container(ObjectId(1))
            .with_excluded();

        let err = checker(&tree, &lookup)
            .check_change_consistency(&object, false, &BTreeSet::new(), false)
            .unwrap_err();
        assert_eq!(err.reason_code(), "disinherit.include.parent.excluded");
    }

    #[test]
    fn test_disinherit_rejected_when_localization_would_be_orphaned() {
        let tree = linear_tree();
        let lookup = InMemoryCandidateLookup::new();
        let object = page(1, 0, 10, "news").with_localization(ChannelId(1), ObjectId(7));

        let err = checker(&tree, &lookup)
            .check_change_consistency(&object, false, &set(&[1]), false)
            .unwrap_err();
        assert_eq!(err.reason_code(), "disinherit.orphaned.localization");
    }

    #[test]
    fn test_disinherit_rejected_by_localized_child() {
        // Scenario: disinherit channel 1 for a folder while a child page
        // is localized exactly there.
        let tree = linear_tree();
        let mut lookup = InMemoryCandidateLookup::new();
        let object = folder(1, 10, "news");
        lookup.add_object(
            &page(2, 1, 11, "index")
                .with_container(ObjectId(1))
                .with_publish_path("/news"),
        );

        let err = checker(&tree, &lookup)
            .check_change_consistency(&object, false, &set(&[1]), false)
            .unwrap_err();
        assert_eq!(err.reason_code(), "disinherit.obstructedby.localized");
    }

    #[test]
    fn test_disinherit_rejected_by_nested_localization() {
        // The obstructing localization sits one container level down and
        // is only caught by the recursive check.
        let tree = linear_tree();
        let mut lookup = InMemoryCandidateLookup::new();
        let object = folder(1, 10, "news");
        lookup.add_object(&folder(2, 11, "archive").with_container(ObjectId(1)));
        lookup.add_object(&page(3, 0, 12, "old").with_container(ObjectId(2)));
        lookup.add_object(
            &page(4, 2, 12, "old")
                .with_container(ObjectId(2))
                .with_localization(ChannelId(0), ObjectId(3)),
        );

        let err = checker(&tree, &lookup)
            .check_change_consistency(&object, false, &set(&[1]), false)
            .unwrap_err();
        assert_eq!(err.reason_code(), "disinherit.orphaned.localization");

        checker(&tree, &lookup)
            .check_change_consistency(&object, false, &set(&[1]), true)
            .unwrap();
    }

    #[test]
    fn test_reinherit_rejected_when_parent_not_visible() {
        let tree = linear_tree();
        let mut lookup = InMemoryCandidateLookup::new();
        lookup.add_object(&folder(1, 10, "root").with_disinherited([ChannelId(1)]));
        let object = page(2, 0, 11, "news")
            .with_container(ObjectId(1))
            .with_disinherited([ChannelId(1)]);

        let err = checker(&tree, &lookup)
            .check_change_consistency(&object, false, &BTreeSet::new(), false)
            .unwrap_err();
        assert_eq!(err.reason_code(), "reinherit.folder.invisible");
    }

    #[test]
    fn test_reinherit_rejected_on_publish_path_collision() {
        let tree = linear_tree();
        let mut lookup = InMemoryCandidateLookup::new();
        // A foreign page already publishes at the same path in channel 1.
        lookup.add_object(
            &page(9, 1, 20, "news")
                .with_publish_path("/content")
                .with_filename("news.html"),
        );
        let object = page(1, 0, 10, "news")
            .with_publish_path("/content")
            .with_filename("news.html")
            .with_disinherited([ChannelId(1)]);

        let err = checker(&tree, &lookup)
            .check_change_consistency(&object, false, &BTreeSet::new(), false)
            .unwrap_err();
        assert_eq!(err.reason_code(), "disinherit.reinclude.namecollision");
    }

    #[test]
    fn test_valid_disinherit_passes() {
        let tree = linear_tree();
        let lookup = InMemoryCandidateLookup::new();
        let object = page(1, 0, 10, "news");

        checker(&tree, &lookup)
            .check_change_consistency(&object, false, &set(&[2]), false)
            .unwrap();
    }

    #[test]
    fn test_valid_reinherit_passes() {
        let tree = linear_tree();
        let lookup = InMemoryCandidateLookup::new();
        let object = page(1, 0, 10, "news").with_disinherited([ChannelId(2)]);

        checker(&tree, &lookup)
            .check_change_consistency(&object, false, &BTreeSet::new(), false)
            .unwrap();
    }

    #[test]
    fn test_create_localized_copy_of_excluded_master() {
        let tree = linear_tree();
        let mut lookup = InMemoryCandidateLookup::new();
        lookup.add_object(&page(1, 0, 10, "news").with_excluded());
        let copy = page(2, 1, 10, "news");

        let err = checker(&tree, &lookup)
            .check_creation_consistency(&copy, false, &BTreeSet::new())
            .unwrap_err();
        assert_eq!(err.reason_code(), "create.master.excluded");
    }

    #[test]
    fn test_create_localized_copy_in_disinherited_channel() {
        let tree = linear_tree();
        let mut lookup = InMemoryCandidateLookup::new();
        lookup.add_object(&page(1, 0, 10, "news").with_disinherited([ChannelId(1)]));

        // Channel 2 is transitively disinherited through channel 1.
        let copy = page(2, 2, 10, "news");
        let err = checker(&tree, &lookup)
            .check_creation_consistency(&copy, false, &BTreeSet::new())
            .unwrap_err();
        assert_eq!(err.reason_code(), "create.channel.disinherited");
    }

    #[test]
    fn test_create_master_in_excluded_container() {
        let tree = linear_tree();
        let mut lookup = InMemoryCandidateLookup::new();
        lookup.add_object(&folder(1, 10, "root").with_excluded());
        let object = page(2, 0, 11, "news").with_container(ObjectId(1));

        let err = checker(&tree, &lookup)
            .check_creation_consistency(&object, false, &BTreeSet::new())
            .unwrap_err();
        assert_eq!(err.reason_code(), "create.container.excluded");

        // An object that is itself excluded may be created there.
        checker(&tree, &lookup)
            .check_creation_consistency(&object, true, &BTreeSet::new())
            .unwrap();
    }

    #[test]
    fn test_create_master_in_disinherited_channel_of_container() {
        let tree = linear_tree();
        let mut lookup = InMemoryCandidateLookup::new();
        lookup.add_object(&folder(1, 10, "root").with_disinherited([ChannelId(1)]));
        let object = ObjectRecord::new(
            ObjectId(2),
            ObjectKind::Page,
            ChannelId(1),
            ChannelSetId(11),
            "news",
        )
        .with_container(ObjectId(1));

        let err = checker(&tree, &lookup)
            .check_creation_consistency(&object, false, &BTreeSet::new())
            .unwrap_err();
        assert_eq!(err.reason_code(), "create.container.disinherited");
    }

    #[test]
    fn test_create_valid_localized_copy() {
        let tree = linear_tree();
        let mut lookup = InMemoryCandidateLookup::new();
        lookup.add_object(&page(1, 0, 10, "news"));
        let copy = page(2, 2, 10, "news");

        checker(&tree, &lookup)
            .check_creation_consistency(&copy, false, &BTreeSet::new())
            .unwrap();
    }

    #[test]
    fn test_recursion_guard_bound() {
        let mut guard = RecursionGuard::new(1);
        assert!(guard.active());
        assert!(guard.descend(ObjectId(1)));
        assert!(!guard.descend(ObjectId(2)));
        guard.ascend(ObjectId(1));
        assert!(guard.descend(ObjectId(2)));

        let mut disabled = RecursionGuard::disabled();
        assert!(!disabled.active());
        assert!(!disabled.descend(ObjectId(1)));
    }

    #[test]
    fn test_recursion_guard_stops_revisits() {
        let mut guard = RecursionGuard::new(8);
        assert!(guard.descend(ObjectId(1)));
        // A cycle through inconsistent container rows must not loop.
        assert!(!guard.descend(ObjectId(1)));
    }
}
