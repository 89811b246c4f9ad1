//! Command-line front end: jug capacities as arguments, target last.
//!
//! Run with: cargo run --example measure -- 3 5 4
//! (jugs of 3 and 5, measure 4)

use decant::{report, PuzzleBuilder};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        eprintln!("usage: measure <capacity>... <target>");
        return ExitCode::FAILURE;
    }

    let mut numbers = Vec::with_capacity(args.len());
    for arg in &args {
        match arg.parse::<u64>() {
            Ok(value) => numbers.push(value),
            Err(_) => {
                eprintln!("not a non-negative integer: {arg}");
                return ExitCode::FAILURE;
            }
        }
    }
    let target = numbers.pop().expect("checked above: at least two arguments");

    let puzzle = match PuzzleBuilder::new().jugs(numbers).target(target).build() {
        Ok(puzzle) => puzzle,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };

    let solutions = puzzle.solve();
    print!("{}", report::render_solutions(&solutions));
    ExitCode::SUCCESS
}
