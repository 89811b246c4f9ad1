//! Text and JSON views over a finished search.
//!
//! Everything here renders to owned strings; the caller decides where the
//! text goes. The line formats match the classic terminal output of the
//! puzzle: a numbered listing of every solution, the best solution
//! reprinted, and an indented dump of the whole graph for diagnostics.

use crate::search::{NodeId, SearchGraph, Solution, SolutionSet};
use serde::{Deserialize, Serialize};

/// Render the solution listing.
///
/// For each solution in discovery order: `Solution N`, one line per state,
/// then the step count. After all solutions the shortest one is reprinted
/// under `Best solution found:`. An empty set renders `No solution found!`.
///
/// # Example
///
/// ```rust
/// use decant::{puzzle, report};
///
/// let solutions = puzzle!([7] => 7)?.solve();
/// let text = report::render_solutions(&solutions);
///
/// assert!(text.starts_with("Solution 1\n[0/7]\n[7/7]\n2 steps\n"));
/// assert!(text.contains("Best solution found:"));
/// # Ok::<(), decant::PuzzleError>(())
/// ```
pub fn render_solutions(set: &SolutionSet) -> String {
    if set.is_empty() {
        return "No solution found!\n".to_string();
    }

    let mut out = String::new();
    for (number, solution) in set.iter().enumerate() {
        out.push_str(&format!("Solution {}\n", number + 1));
        push_path(&mut out, solution);
    }
    if let Some(best) = set.shortest() {
        out.push_str("\nBest solution found:\n");
        push_path(&mut out, best);
    }
    out
}

fn push_path(out: &mut String, solution: &Solution) {
    for state in solution.states() {
        out.push_str(&format!("{state}\n"));
    }
    out.push_str(&format!("{} steps\n", solution.steps()));
}

/// Render the whole graph, one node per line, indented with one `-` per
/// depth level. Goal nodes are marked with ` <----`.
pub fn render_graph(graph: &SearchGraph) -> String {
    let mut out = String::new();
    push_node(graph, graph.root(), 0, &mut out);
    out
}

fn push_node(graph: &SearchGraph, id: NodeId, depth: usize, out: &mut String) {
    out.push_str(&"-".repeat(depth));
    out.push_str(&graph.state(id).to_string());
    if graph.is_goal(id) {
        out.push_str(" <----");
    }
    out.push('\n');
    for &child in graph.children(id) {
        push_node(graph, child, depth + 1, out);
    }
}

/// Machine-readable summary of one finished search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// The amount searched for.
    pub target: u64,
    /// Number of solutions discovered.
    pub solution_count: usize,
    /// Zero-based index of the shortest solution, `None` if there are none.
    pub best: Option<usize>,
    /// Every solution, in discovery order.
    pub solutions: Vec<ReportedSolution>,
}

/// One solution flattened to amount vectors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportedSolution {
    /// One-based solution number in discovery order.
    pub number: usize,
    /// Path length in states.
    pub steps: usize,
    /// The amount vector of each state along the path.
    pub states: Vec<Vec<u64>>,
}

impl Report {
    /// Summarize a solution set for a given target.
    pub fn from_solutions(target: u64, set: &SolutionSet) -> Self {
        let solutions = set
            .iter()
            .enumerate()
            .map(|(index, solution)| ReportedSolution {
                number: index + 1,
                steps: solution.steps(),
                states: solution.states().iter().map(|s| s.amounts()).collect(),
            })
            .collect();
        Self {
            target,
            solution_count: set.len(),
            best: set.shortest_index(),
            solutions,
        }
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
