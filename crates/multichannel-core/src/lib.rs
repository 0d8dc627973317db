pub mod candidate;
pub mod channel;
pub mod config;
pub mod consistency;
pub mod error;
pub mod fallback;
pub mod object;
pub mod segment;
pub mod transition;

pub use candidate::{CandidateLookup, CandidateRow, CollisionQuery, InMemoryCandidateLookup};
pub use channel::{
    Channel, ChannelId, ChannelSetId, ChannelTree, InMemoryChannelTree, KindStrategy, ObjectId,
    ObjectKind, KIND_STRATEGIES,
};
pub use config::{KindMapping, StorageConfig};
pub use consistency::{ConsistencyChecker, RecursionGuard, DEFAULT_RECURSION_LIMIT};
pub use error::{ChannelInheritanceError, Result};
pub use fallback::FallbackResolver;
pub use object::{Disinheritable, ObjectRecord};
pub use segment::ChannelTreeSegment;
pub use transition::{apply_change, apply_creation, CachePort, NoopCache};
