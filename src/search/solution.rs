//! Solution paths and their ranking.

use crate::core::JugState;
use serde::{Deserialize, Serialize};

/// One root-to-goal path through the graph, root inclusive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    states: Vec<JugState>,
}

impl Solution {
    /// Wrap an ordered root-to-goal state sequence.
    pub fn new(states: Vec<JugState>) -> Self {
        Self { states }
    }

    /// The states along the path, from the all-empty root to the goal.
    pub fn states(&self) -> &[JugState] {
        &self.states
    }

    /// Path length counted in states: number of moves plus one.
    pub fn steps(&self) -> usize {
        self.states.len()
    }

    /// The goal state, if the path is non-empty.
    pub fn goal_state(&self) -> Option<&JugState> {
        self.states.last()
    }
}

/// All solutions discovered by one search, in discovery order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionSet {
    solutions: Vec<Solution>,
}

impl SolutionSet {
    /// Wrap solutions already in discovery order.
    pub fn new(solutions: Vec<Solution>) -> Self {
        Self { solutions }
    }

    /// Number of solutions found.
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    /// True when the search exhausted the space without reaching the goal.
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Solutions in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Solution> {
        self.solutions.iter()
    }

    /// The solution at the given zero-based index.
    pub fn get(&self, index: usize) -> Option<&Solution> {
        self.solutions.get(index)
    }

    /// The shortest solution. The first minimum wins on ties.
    pub fn shortest(&self) -> Option<&Solution> {
        let mut best: Option<&Solution> = None;
        for solution in &self.solutions {
            match best {
                Some(current) if current.steps() <= solution.steps() => {}
                _ => best = Some(solution),
            }
        }
        best
    }

    /// Zero-based index of the shortest solution, first minimum on ties.
    pub fn shortest_index(&self) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for (index, solution) in self.solutions.iter().enumerate() {
            match best {
                Some((_, steps)) if steps <= solution.steps() => {}
                _ => best = Some((index, solution.steps())),
            }
        }
        best.map(|(index, _)| index)
    }
}
