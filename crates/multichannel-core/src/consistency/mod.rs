//! Consistency checking for exclusion/disinherit transitions

mod checker;

pub use checker::{ConsistencyChecker, RecursionGuard, DEFAULT_RECURSION_LIMIT};
