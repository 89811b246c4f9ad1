//! Decant: an exhaustive solver for the generalized water-jug puzzle.
//!
//! Given any number of jugs with fixed integer capacities and an unlimited
//! water source, Decant finds move sequences (fill a jug, empty a jug,
//! pour one jug into another) that leave some jug holding an exact target
//! amount, and reports the shortest one.
//!
//! The solver builds the tree of reachable configurations from the
//! all-empty root, deduplicating configurations globally so each one is
//! kept only at its first discovery, and freezes the whole graph the
//! instant any configuration satisfies the goal. Solution paths are then
//! reconstructed from the goal back to the root.
//!
//! # Core Concepts
//!
//! - **[`Jug`]**: a vessel with a fixed capacity and a mutable fill amount
//! - **[`JugState`]**: one immutable configuration of all jugs' amounts
//! - **[`SearchGraph`]**: the reachable-state tree and its expansion engine
//! - **[`SolutionSet`]**: every discovered root-to-goal path, ranked
//!
//! # Example
//!
//! ```rust
//! use decant::puzzle;
//!
//! // The Die Hard 3 puzzle: measure 4 with jugs of 3, 5, and 8.
//! let puzzle = puzzle!([3, 5, 8] => 4)?;
//! let solutions = puzzle.solve();
//!
//! let best = solutions.shortest().expect("4 units are measurable");
//! assert_eq!(best.steps(), 8);
//! assert!(best.goal_state().unwrap().has_amount(4));
//! # Ok::<(), decant::PuzzleError>(())
//! ```

pub mod core;
pub mod puzzle;
pub mod report;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Jug, JugState, Move};
pub use crate::puzzle::{Puzzle, PuzzleBuilder, PuzzleError};
pub use crate::search::{
    BuildPhase, NodeId, SearchGraph, SearchMetadata, Solution, SolutionSet, SolveError,
};
