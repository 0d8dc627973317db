//! Channel tree types and queries

mod tree;
mod types;

pub use tree::{ChannelTree, InMemoryChannelTree};
pub use types::{Channel, ChannelId, ChannelSetId, KindStrategy, ObjectId, ObjectKind, KIND_STRATEGIES};

#[cfg(test)]
pub(crate) use tree::test_support;
