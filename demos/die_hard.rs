//! The Die Hard 3 puzzle: measure exactly 4 units with jugs of 3, 5, and 8.
//!
//! Run with: cargo run --example die_hard

use decant::{puzzle, report};

fn main() -> Result<(), decant::PuzzleError> {
    let puzzle = puzzle!([3, 5, 8] => 4)?;
    let graph = puzzle.search();

    println!("{}", report::render_graph(&graph));

    let solutions = graph
        .solutions()
        .expect("search() returns a built graph");
    print!("{}", report::render_solutions(&solutions));

    Ok(())
}
