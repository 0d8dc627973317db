//! Accepted-transition application
//!
//! Inheritance state is only ever mutated through an accepted consistency
//! check: check, apply, stamp, invalidate. The surrounding transaction
//! (and the per-family write serialization it implies) is owned by the
//! caller; a rejected check must leave no trace.

use std::collections::BTreeSet;

use crate::candidate::CandidateLookup;
use crate::channel::{ChannelId, ChannelTree, ObjectId, ObjectKind};
use crate::consistency::ConsistencyChecker;
use crate::error::Result;
use crate::object::ObjectRecord;

/// Cache invalidation port of the storage collaborator.
///
/// Called after a successful transition so derived caches (resolved
/// fallback lists, rendered URLs) are dropped; never called on rejection.
pub trait CachePort {
    fn invalidate(&mut self, kind: ObjectKind, id: ObjectId);
}

/// No-op cache for callers without derived caches.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCache;

impl CachePort for NoopCache {
    fn invalidate(&mut self, _kind: ObjectKind, _id: ObjectId) {}
}

/// Check and apply a change of (excluded, disinherited channels) on a
/// master object.
pub fn apply_change<T: ChannelTree, L: CandidateLookup, C: CachePort>(
    checker: &ConsistencyChecker<'_, T, L>,
    object: &mut ObjectRecord,
    new_excluded: bool,
    new_disinherited: BTreeSet<ChannelId>,
    skip_recursive: bool,
    cache: &mut C,
) -> Result<()> {
    checker.check_change_consistency(object, new_excluded, &new_disinherited, skip_recursive)?;
    object.set_inheritance(new_excluded, new_disinherited);
    cache.invalidate(object.kind, object.id);
    Ok(())
}

/// Check a new object's inheritance state and register it in its family.
///
/// For a localized copy, `master` is the family's master record; the new
/// entry is added to its channel set on success.
pub fn apply_creation<T: ChannelTree, L: CandidateLookup, C: CachePort>(
    checker: &ConsistencyChecker<'_, T, L>,
    object: &mut ObjectRecord,
    master: Option<&mut ObjectRecord>,
    cache: &mut C,
) -> Result<()> {
    let excluded = object.excluded;
    let disinherited = object.disinherited_channels.clone();
    checker.check_creation_consistency(object, excluded, &disinherited)?;

    if let Some(master) = master {
        master.record_localization(object.channel, object.id);
        object.channel_set = master.channel_set.clone();
        cache.invalidate(master.kind, master.id);
    }
    cache.invalidate(object.kind, object.id);
    Ok(())
}
