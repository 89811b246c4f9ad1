//! The state-space search engine.
//!
//! Builds the reachable-state tree from the all-empty root, deduplicating
//! configurations globally and halting all expansion on the first goal,
//! then reconstructs and ranks every root-to-goal path.

mod error;
mod graph;
mod solution;

pub use error::SolveError;
pub use graph::{BuildPhase, NodeId, SearchGraph, SearchMetadata};
pub use solution::{Solution, SolutionSet};
