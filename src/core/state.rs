//! Jug configuration snapshots and the moves that connect them.
//!
//! A `JugState` is one configuration of fill amounts across all jugs at a
//! point in time. States are immutable once created: applying a `Move`
//! returns a fresh snapshot and never touches the source. Positions are
//! meaningful and fixed for the life of a run, so index `i` always refers
//! to the same jug in every state.

use super::jug::Jug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single legal move applied to one configuration.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Move {
    /// Fill the jug at this index to capacity from the source.
    Fill(usize),
    /// Dump the jug at this index.
    Empty(usize),
    /// Pour one jug into another, capped by the destination's free space.
    Pour { from: usize, to: usize },
}

/// One configuration of fill amounts across all jugs.
///
/// Construction deep-copies the jugs it is given, so later mutation of the
/// source can never corrupt a recorded snapshot.
///
/// # Example
///
/// ```rust
/// use decant::{JugState, Move};
///
/// let root = JugState::all_empty(&[3, 5]);
/// let filled = root.apply(Move::Fill(1));
///
/// assert_eq!(root.amounts(), vec![0, 0]);
/// assert_eq!(filled.amounts(), vec![0, 5]);
/// assert!(filled.has_amount(5));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct JugState {
    jugs: Vec<Jug>,
}

impl JugState {
    /// Snapshot the given jugs. Each jug is deep-copied.
    pub fn new(jugs: &[Jug]) -> Self {
        Self {
            jugs: jugs.to_vec(),
        }
    }

    /// The canonical root configuration: one empty jug per capacity, in
    /// the given order. This fixes the positional ordering that every
    /// state derived from it inherits.
    pub fn all_empty(capacities: &[u64]) -> Self {
        Self {
            jugs: capacities.iter().copied().map(Jug::new).collect(),
        }
    }

    /// The jug snapshots, in canonical position order.
    pub fn jugs(&self) -> &[Jug] {
        &self.jugs
    }

    /// Number of jugs in this configuration.
    pub fn len(&self) -> usize {
        self.jugs.len()
    }

    /// True for the degenerate zero-jug configuration.
    pub fn is_empty(&self) -> bool {
        self.jugs.is_empty()
    }

    /// The fill amounts in position order. Because capacities are fixed
    /// per run, this vector is the canonical equivalence key.
    pub fn amounts(&self) -> Vec<u64> {
        self.jugs.iter().map(Jug::amount).collect()
    }

    /// Positional equivalence: true only if every position matches in both
    /// capacity and amount. Two states with the same amounts at swapped
    /// positions are not equivalent unless the capacities align too.
    pub fn equivalent_to(&self, other: &JugState) -> bool {
        self.jugs.len() == other.jugs.len()
            && self
                .jugs
                .iter()
                .zip(other.jugs.iter())
                .all(|(a, b)| a.capacity() == b.capacity() && a.amount() == b.amount())
    }

    /// The goal predicate: true if any single jug holds exactly `target`.
    pub fn has_amount(&self, target: u64) -> bool {
        self.jugs.iter().any(|jug| jug.amount() == target)
    }

    /// Apply one move, returning the resulting configuration. The source
    /// state is left untouched.
    pub fn apply(&self, mv: Move) -> JugState {
        let mut next = self.clone();
        match mv {
            Move::Fill(index) => next.jugs[index].fill_to_full(),
            Move::Empty(index) => next.jugs[index].empty(),
            Move::Pour { from, to } => {
                debug_assert_ne!(from, to);
                let (low, high) = (from.min(to), from.max(to));
                let (head, tail) = next.jugs.split_at_mut(high);
                if from < to {
                    head[low].pour_into(&mut tail[0]);
                } else {
                    tail[0].pour_into(&mut head[low]);
                }
            }
        }
        next
    }
}

impl fmt::Display for JugState {
    /// Renders as `[amount/capacity, ...]` in position order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, jug) in self.jugs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{jug}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_empty_creates_one_jug_per_capacity() {
        let state = JugState::all_empty(&[3, 5, 8]);
        assert_eq!(state.len(), 3);
        assert_eq!(state.amounts(), vec![0, 0, 0]);
        assert_eq!(
            state.jugs().iter().map(Jug::capacity).collect::<Vec<_>>(),
            vec![3, 5, 8]
        );
    }

    #[test]
    fn new_deep_copies_the_source() {
        let mut jugs = vec![Jug::new(3), Jug::new(5)];
        let state = JugState::new(&jugs);

        jugs[0].fill_to_full();

        assert_eq!(state.amounts(), vec![0, 0]);
    }

    #[test]
    fn apply_never_mutates_the_source() {
        let root = JugState::all_empty(&[3, 5]);
        let _ = root.apply(Move::Fill(0));
        let _ = root.apply(Move::Pour { from: 0, to: 1 });
        assert_eq!(root.amounts(), vec![0, 0]);
    }

    #[test]
    fn fill_and_empty_target_one_position() {
        let root = JugState::all_empty(&[3, 5]);
        let filled = root.apply(Move::Fill(1));
        assert_eq!(filled.amounts(), vec![0, 5]);

        let emptied = filled.apply(Move::Empty(1));
        assert_eq!(emptied.amounts(), vec![0, 0]);
    }

    #[test]
    fn pour_moves_capped_by_destination_space() {
        let state = JugState::all_empty(&[3, 5]).apply(Move::Fill(1));

        let poured = state.apply(Move::Pour { from: 1, to: 0 });
        assert_eq!(poured.amounts(), vec![3, 2]);

        // and in the other index direction
        let back = poured.apply(Move::Pour { from: 0, to: 1 });
        assert_eq!(back.amounts(), vec![0, 5]);
    }

    #[test]
    fn equivalence_is_reflexive_and_symmetric() {
        let a = JugState::all_empty(&[3, 5]).apply(Move::Fill(0));
        let b = JugState::all_empty(&[3, 5]).apply(Move::Fill(0));

        assert!(a.equivalent_to(&a));
        assert!(a.equivalent_to(&b));
        assert!(b.equivalent_to(&a));
    }

    #[test]
    fn equivalence_respects_capacity_positions() {
        // Same positions filled, different capacity layout.
        let a = JugState::all_empty(&[3, 5]).apply(Move::Fill(0));
        let b = JugState::all_empty(&[5, 3]).apply(Move::Fill(0));

        assert_eq!(a.amounts(), vec![3, 0]);
        assert_eq!(b.amounts(), vec![5, 0]);
        assert!(!a.equivalent_to(&b));
    }

    #[test]
    fn equivalence_requires_matching_lengths() {
        let a = JugState::all_empty(&[3, 5]);
        let b = JugState::all_empty(&[3]);
        assert!(!a.equivalent_to(&b));
    }

    #[test]
    fn has_amount_checks_single_jugs_only() {
        let state = JugState::all_empty(&[3, 5])
            .apply(Move::Fill(0))
            .apply(Move::Fill(1));

        assert!(state.has_amount(3));
        assert!(state.has_amount(5));
        // 8 is the sum, not a single jug's amount
        assert!(!state.has_amount(8));
    }

    #[test]
    fn display_lists_positions_in_order() {
        let state = JugState::all_empty(&[3, 5]).apply(Move::Fill(1));
        assert_eq!(state.to_string(), "[0/3, 5/5]");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = JugState::all_empty(&[3, 5]).apply(Move::Fill(0));

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: JugState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
