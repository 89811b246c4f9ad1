//! Core puzzle model: jugs, configurations, and moves.
//!
//! Everything here is pure value manipulation with no side effects.
//! The search engine in [`crate::search`] builds on these types but
//! none of them knows anything about the graph.

mod jug;
mod state;

pub use jug::Jug;
pub use state::{JugState, Move};
