//! sprintplan core data models and selection algorithm.
//!
//! This crate defines the release and sprint domain types and the greedy
//! selector that picks a non-overlapping set of releases for a sprint.

#![warn(missing_docs)]

// Domain types
mod release;

// Selection algorithm
mod selector;

// Re-exports
pub use release::{InvalidRelease, ReleaseRequest, ScheduledRelease, SprintConfig};
pub use selector::select;
