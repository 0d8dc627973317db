//! Channel tree collaborator
//!
//! The tree is maintained externally (the platform's node administration);
//! the engine only queries it. `InMemoryChannelTree` is the reference
//! implementation used by tests and by embedding callers that already hold
//! the tree in memory.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::error::{ChannelInheritanceError, Result};

use super::types::{Channel, ChannelId};

/// Read access to the channel tree.
///
/// Implementations must present an immutable snapshot for the duration of
/// a resolution call; the engine never mutates the tree.
pub trait ChannelTree {
    /// Look up a channel node.
    fn channel(&self, id: ChannelId) -> Option<&Channel>;

    /// Direct child channels of `id`.
    fn children_of(&self, id: ChannelId) -> BTreeSet<ChannelId>;

    /// Direct masters of `id`, primary inheritance line first.
    fn masters_of(&self, id: ChannelId) -> Vec<ChannelId>;

    /// Root node of the tree `id` belongs to.
    fn root_of(&self, id: ChannelId) -> ChannelId {
        *self.master_chain(id).last().unwrap_or(&id)
    }

    /// The master chain of `id`: `id` itself, then each primary master up
    /// to and including the root node.
    ///
    /// Stops at the first repeated channel, so a cyclic masters graph in
    /// an inconsistent implementation yields a truncated chain instead of
    /// an endless walk.
    fn master_chain(&self, id: ChannelId) -> Vec<ChannelId> {
        let mut chain = vec![id];
        let mut seen = BTreeSet::from([id]);
        let mut current = id;
        while let Some(master) = self.masters_of(current).first().copied() {
            if !seen.insert(master) {
                break;
            }
            chain.push(master);
            current = master;
        }
        chain
    }

    /// Whether `ancestor` appears on the master chain of `id` (inclusive).
    fn is_ancestor_or_self(&self, ancestor: ChannelId, id: ChannelId) -> bool {
        // All masters count, not just the primary line.
        let mut queue = VecDeque::from([id]);
        let mut seen = BTreeSet::new();
        while let Some(current) = queue.pop_front() {
            if current == ancestor {
                return true;
            }
            if seen.insert(current) {
                queue.extend(self.masters_of(current));
            }
        }
        false
    }
}

/// In-memory channel tree snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryChannelTree {
    channels: BTreeMap<ChannelId, Channel>,
}

impl InMemoryChannelTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a channel node. Masters must already be present.
    pub fn add_channel(&mut self, channel: Channel) -> Result<()> {
        if self.channels.contains_key(&channel.id) {
            return Err(ChannelInheritanceError::Internal(format!(
                "channel {} already exists in tree",
                channel.id
            )));
        }
        if let Some(missing) = channel
            .masters
            .iter()
            .find(|m| !self.channels.contains_key(m))
        {
            return Err(ChannelInheritanceError::Internal(format!(
                "master channel {} of channel {} not in tree",
                missing, channel.id
            )));
        }
        self.channels.insert(channel.id, channel);
        Ok(())
    }

    /// Number of channels in the snapshot.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Display name of a channel, falling back to the numeric id.
    pub fn channel_name(&self, id: ChannelId) -> String {
        self.channels
            .get(&id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| id.to_string())
    }
}

impl ChannelTree for InMemoryChannelTree {
    fn channel(&self, id: ChannelId) -> Option<&Channel> {
        self.channels.get(&id)
    }

    fn children_of(&self, id: ChannelId) -> BTreeSet<ChannelId> {
        self.channels
            .values()
            .filter(|c| c.masters.contains(&id))
            .map(|c| c.id)
            .collect()
    }

    fn masters_of(&self, id: ChannelId) -> Vec<ChannelId> {
        self.channels
            .get(&id)
            .map(|c| c.masters.clone())
            .unwrap_or_default()
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{branched_tree, linear_tree};
    use super::*;

    #[test]
    fn test_add_rejects_duplicate() {
        let mut tree = InMemoryChannelTree::new();
        tree.add_channel(Channel::new(ChannelId(0), "node")).unwrap();
        assert!(tree.add_channel(Channel::new(ChannelId(0), "again")).is_err());
    }

    #[test]
    fn test_add_rejects_unknown_master() {
        let mut tree = InMemoryChannelTree::new();
        let orphan = Channel::new(ChannelId(5), "orphan").with_master(ChannelId(9));
        assert!(tree.add_channel(orphan).is_err());
    }

    #[test]
    fn test_children_of() {
        let tree = branched_tree();
        let children = tree.children_of(ChannelId(0));
        assert_eq!(children, BTreeSet::from([ChannelId(1), ChannelId(2)]));
        assert!(tree.children_of(ChannelId(3)).is_empty());
    }

    #[test]
    fn test_master_chain_reaches_root() {
        let tree = linear_tree();
        assert_eq!(
            tree.master_chain(ChannelId(2)),
            vec![ChannelId(2), ChannelId(1), ChannelId(0)]
        );
        assert_eq!(tree.master_chain(ChannelId(0)), vec![ChannelId(0)]);
        assert_eq!(tree.root_of(ChannelId(2)), ChannelId(0));
    }

    #[test]
    fn test_is_ancestor_or_self() {
        let tree = branched_tree();
        assert!(tree.is_ancestor_or_self(ChannelId(0), ChannelId(3)));
        assert!(tree.is_ancestor_or_self(ChannelId(1), ChannelId(3)));
        assert!(tree.is_ancestor_or_self(ChannelId(3), ChannelId(3)));
        assert!(!tree.is_ancestor_or_self(ChannelId(2), ChannelId(3)));
    }

    #[test]
    fn test_master_chain_terminates_on_cyclic_masters() {
        // A broken implementation may present a cyclic masters graph; the
        // default chain walk must still terminate.
        struct CyclicTree;

        impl ChannelTree for CyclicTree {
            fn channel(&self, _id: ChannelId) -> Option<&Channel> {
                None
            }

            fn children_of(&self, _id: ChannelId) -> BTreeSet<ChannelId> {
                BTreeSet::new()
            }

            fn masters_of(&self, id: ChannelId) -> Vec<ChannelId> {
                // 1 -> 2 -> 1 -> ...
                match id {
                    ChannelId(1) => vec![ChannelId(2)],
                    ChannelId(2) => vec![ChannelId(1)],
                    _ => Vec::new(),
                }
            }
        }

        let tree = CyclicTree;
        assert_eq!(
            tree.master_chain(ChannelId(1)),
            vec![ChannelId(1), ChannelId(2)]
        );
        assert_eq!(tree.root_of(ChannelId(2)), ChannelId(1));
    }

    #[test]
    fn test_dag_of_masters() {
        let mut tree = InMemoryChannelTree::new();
        tree.add_channel(Channel::new(ChannelId(0), "node")).unwrap();
        tree.add_channel(Channel::new(ChannelId(1), "a").with_master(ChannelId(0)))
            .unwrap();
        tree.add_channel(Channel::new(ChannelId(2), "b").with_master(ChannelId(0)))
            .unwrap();
        tree.add_channel(
            Channel::new(ChannelId(3), "merged")
                .with_master(ChannelId(1))
                .with_master(ChannelId(2)),
        )
        .unwrap();

        // Primary line goes through channel 1; channel 2 still counts as
        // an ancestor for visibility purposes.
        assert_eq!(
            tree.master_chain(ChannelId(3)),
            vec![ChannelId(3), ChannelId(1), ChannelId(0)]
        );
        assert!(tree.is_ancestor_or_self(ChannelId(2), ChannelId(3)));
        assert!(tree.children_of(ChannelId(2)).contains(&ChannelId(3)));
    }
}
