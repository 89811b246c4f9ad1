//! Macros for ergonomic puzzle construction.

/// Build a [`Puzzle`](crate::Puzzle) from a capacity list and a target.
///
/// Expands to a [`PuzzleBuilder`](crate::PuzzleBuilder) chain, so the
/// result is a `Result` carrying the same validation errors.
///
/// # Example
///
/// ```
/// use decant::puzzle;
///
/// let puzzle = puzzle!([3, 5] => 4).unwrap();
/// assert_eq!(puzzle.capacities(), &[3, 5]);
/// assert_eq!(puzzle.target(), 4);
/// ```
#[macro_export]
macro_rules! puzzle {
    ([$($capacity:expr),* $(,)?] => $target:expr) => {
        $crate::PuzzleBuilder::new()
            $(.jug($capacity))*
            .target($target)
            .build()
    };
}
