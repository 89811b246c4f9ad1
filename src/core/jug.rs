//! The jug container model.
//!
//! A `Jug` is a vessel with a fixed capacity and a variable fill amount.
//! It can be filled to full, emptied, or poured into another jug; nothing
//! else can change its contents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A vessel with a fixed capacity and a variable fill amount.
///
/// The amount always stays within `[0, capacity]`. The three operations
/// (`fill_to_full`, `empty`, `pour_into`) cannot take it outside that range,
/// and there is no other way to change it.
///
/// # Example
///
/// ```rust
/// use decant::Jug;
///
/// let mut jug = Jug::new(5);
/// assert_eq!(jug.amount(), 0);
///
/// jug.fill_to_full();
/// assert_eq!(jug.amount(), 5);
/// assert!(jug.is_full());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Jug {
    capacity: u64,
    amount: u64,
}

impl Jug {
    /// Create an empty jug with the given capacity.
    ///
    /// Capacities are validated at the puzzle boundary
    /// ([`PuzzleBuilder`](crate::PuzzleBuilder) rejects zero); a `Jug`
    /// itself just holds the numbers.
    pub fn new(capacity: u64) -> Self {
        Self {
            capacity,
            amount: 0,
        }
    }

    /// The fixed capacity of this jug.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// The current fill amount.
    pub fn amount(&self) -> u64 {
        self.amount
    }

    /// Remaining space before this jug overflows.
    pub fn remaining(&self) -> u64 {
        self.capacity - self.amount
    }

    /// True if the jug holds nothing.
    pub fn is_empty(&self) -> bool {
        self.amount == 0
    }

    /// True if the jug is filled to capacity.
    pub fn is_full(&self) -> bool {
        self.amount == self.capacity
    }

    /// Fill the jug to capacity from the unlimited source.
    pub fn fill_to_full(&mut self) {
        self.amount = self.capacity;
    }

    /// Dump the jug's entire contents.
    pub fn empty(&mut self) {
        self.amount = 0;
    }

    /// Pour this jug into `other`, capped by the destination's remaining
    /// space. Whatever does not fit stays here. Pouring into a full jug or
    /// from an empty jug is a legal no-op.
    ///
    /// Returns the amount actually transferred.
    ///
    /// # Example
    ///
    /// ```rust
    /// use decant::Jug;
    ///
    /// let mut three = Jug::new(3);
    /// let mut five = Jug::new(5);
    /// five.fill_to_full();
    ///
    /// let transferred = five.pour_into(&mut three);
    /// assert_eq!(transferred, 3);
    /// assert_eq!(five.amount(), 2);
    /// assert_eq!(three.amount(), 3);
    /// ```
    pub fn pour_into(&mut self, other: &mut Jug) -> u64 {
        let transferred = self.amount.min(other.remaining());
        other.amount += transferred;
        self.amount -= transferred;
        transferred
    }
}

impl fmt::Display for Jug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.amount, self.capacity)
    }
}
