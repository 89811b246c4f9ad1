//! Puzzle definition and input validation.
//!
//! A [`Puzzle`] is the validated pair of jug capacities and target amount
//! that the search engine consumes. Validation happens here, before the
//! core ever runs: zero capacities and a zero or missing target are
//! rejected with a [`PuzzleError`]. Degenerate-but-valid inputs (no jugs
//! at all, or a target larger than every capacity) are accepted and simply
//! find no solution.

pub mod macros;

use crate::search::{SearchGraph, SolutionSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when defining a puzzle.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("Jug capacity at position {position} must be positive")]
    ZeroCapacity { position: usize },

    #[error("Target amount not specified. Call .target(amount) before .build()")]
    MissingTarget,

    #[error("Target amount must be positive")]
    ZeroTarget,
}

/// A validated measuring puzzle: jug capacities plus the target amount.
///
/// # Example
///
/// ```rust
/// use decant::Puzzle;
///
/// let puzzle = Puzzle::new(vec![3, 5], 4)?;
/// let solutions = puzzle.solve();
///
/// assert_eq!(solutions.len(), 1);
/// # Ok::<(), decant::PuzzleError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    capacities: Vec<u64>,
    target: u64,
}

impl Puzzle {
    /// Create a puzzle, validating capacities and target.
    pub fn new(capacities: Vec<u64>, target: u64) -> Result<Self, PuzzleError> {
        if let Some(position) = capacities.iter().position(|&capacity| capacity == 0) {
            return Err(PuzzleError::ZeroCapacity { position });
        }
        if target == 0 {
            return Err(PuzzleError::ZeroTarget);
        }
        Ok(Self { capacities, target })
    }

    /// The jug capacities in canonical position order.
    pub fn capacities(&self) -> &[u64] {
        &self.capacities
    }

    /// Number of jugs.
    pub fn jug_count(&self) -> usize {
        self.capacities.len()
    }

    /// The amount to measure.
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Run the full search and return the built graph for inspection.
    pub fn search(&self) -> SearchGraph {
        let mut graph = SearchGraph::new(self);
        graph
            .build()
            .expect("a freshly created graph builds exactly once");
        graph
    }

    /// Run the full search and extract the discovered solutions.
    ///
    /// An empty set means the reachable state space was exhausted without
    /// any jug ever holding the target amount.
    pub fn solve(&self) -> SolutionSet {
        self.search()
            .solutions()
            .expect("search() always returns a built graph")
    }
}

/// Fluent builder for [`Puzzle`].
///
/// # Example
///
/// ```rust
/// use decant::PuzzleBuilder;
///
/// let puzzle = PuzzleBuilder::new()
///     .jug(3)
///     .jug(5)
///     .target(4)
///     .build()?;
///
/// assert_eq!(puzzle.capacities(), &[3, 5]);
/// # Ok::<(), decant::PuzzleError>(())
/// ```
#[derive(Clone, Debug)]
pub struct PuzzleBuilder {
    capacities: Vec<u64>,
    target: Option<u64>,
}

impl PuzzleBuilder {
    /// Create a builder with no jugs and no target.
    pub fn new() -> Self {
        Self {
            capacities: Vec::new(),
            target: None,
        }
    }

    /// Add one jug with the given capacity. Position order is the order
    /// of these calls.
    pub fn jug(mut self, capacity: u64) -> Self {
        self.capacities.push(capacity);
        self
    }

    /// Add several jugs at once.
    pub fn jugs<I: IntoIterator<Item = u64>>(mut self, capacities: I) -> Self {
        self.capacities.extend(capacities);
        self
    }

    /// Set the target amount (required).
    pub fn target(mut self, amount: u64) -> Self {
        self.target = Some(amount);
        self
    }

    /// Validate and build the puzzle.
    pub fn build(self) -> Result<Puzzle, PuzzleError> {
        let target = self.target.ok_or(PuzzleError::MissingTarget)?;
        Puzzle::new(self.capacities, target)
    }
}

impl Default for PuzzleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
