//! Search engine errors.

use thiserror::Error;

/// Errors from driving the search graph out of phase.
///
/// Exhausting the state space without finding the goal is not an error;
/// it surfaces as an empty [`SolutionSet`](crate::SolutionSet).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    #[error("Graph has not been built. Call .build() before extracting solutions")]
    NotBuilt,

    #[error("Graph was already built. Create a new graph to search again")]
    AlreadyBuilt,
}
