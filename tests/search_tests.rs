//! End-to-end tests of the search engine against known puzzles.

use decant::{puzzle, report, BuildPhase, SearchGraph, SolveError};

fn amounts(solution: &decant::Solution) -> Vec<Vec<u64>> {
    solution.states().iter().map(|s| s.amounts()).collect()
}

#[test]
fn two_jugs_measure_four() {
    let puzzle = puzzle!([3, 5] => 4).unwrap();
    let solutions = puzzle.solve();

    assert_eq!(solutions.len(), 1);
    let best = solutions.shortest().unwrap();
    assert_eq!(best.steps(), 9);
    assert!(best.goal_state().unwrap().has_amount(4));
    assert_eq!(
        amounts(best),
        vec![
            vec![0, 0],
            vec![3, 0],
            vec![0, 3],
            vec![3, 3],
            vec![1, 5],
            vec![1, 0],
            vec![0, 1],
            vec![3, 1],
            vec![0, 4],
        ]
    );
}

#[test]
fn two_jugs_graph_freezes_at_goal_discovery() {
    let graph = puzzle!([3, 5] => 4).unwrap().search();

    assert_eq!(graph.len(), 11);
    assert!(graph.metadata().halted_on_goal);

    let goals: Vec<_> = graph.node_ids().filter(|&id| graph.is_goal(id)).collect();
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].index(), graph.len() - 1);
}

#[test]
fn single_jug_matching_target_takes_one_move() {
    let solutions = puzzle!([7] => 7).unwrap().solve();

    assert_eq!(solutions.len(), 1);
    let best = solutions.shortest().unwrap();
    assert_eq!(best.steps(), 2);
    assert_eq!(amounts(best), vec![vec![0], vec![7]]);
}

#[test]
fn single_jug_unreachable_target_has_no_solution() {
    let puzzle = puzzle!([7] => 4).unwrap();
    let solutions = puzzle.solve();

    assert!(solutions.is_empty());
    assert!(solutions.shortest().is_none());
    assert_eq!(report::render_solutions(&solutions), "No solution found!\n");
}

#[test]
fn die_hard_three_jugs() {
    let puzzle = puzzle!([3, 5, 8] => 4).unwrap();
    let graph = puzzle.search();
    let solutions = graph.solutions().unwrap();

    assert_eq!(graph.len(), 24);
    assert_eq!(solutions.len(), 1);

    let best = solutions.shortest().unwrap();
    assert_eq!(best.steps(), 8);
    assert_eq!(
        amounts(best),
        vec![
            vec![0, 0, 0],
            vec![3, 0, 0],
            vec![0, 3, 0],
            vec![3, 3, 0],
            vec![1, 5, 0],
            vec![0, 5, 1],
            vec![3, 5, 1],
            vec![0, 5, 4],
        ]
    );
}

#[test]
fn even_jugs_even_target() {
    let solutions = puzzle!([4, 6] => 2).unwrap().solve();

    let best = solutions.shortest().unwrap();
    assert_eq!(best.steps(), 5);
    assert_eq!(best.goal_state().unwrap().amounts(), vec![2, 6]);
}

#[test]
fn identical_capacities_dedup_to_one_fill() {
    let graph = puzzle!([5, 5] => 5).unwrap().search();
    let solutions = graph.solutions().unwrap();

    // Filling the first jug already reaches the goal; the mirrored fill
    // of the second jug is never generated.
    assert_eq!(graph.len(), 2);
    assert_eq!(solutions.shortest().unwrap().steps(), 2);
}

#[test]
fn target_larger_than_every_capacity_finds_nothing() {
    let solutions = puzzle!([3, 5] => 9).unwrap().solve();
    assert!(solutions.is_empty());
}

#[test]
fn zero_jugs_finds_nothing() {
    let puzzle = decant::PuzzleBuilder::new().target(4).build().unwrap();
    let graph = puzzle.search();

    assert_eq!(graph.len(), 1);
    assert_eq!(graph.phase(), BuildPhase::Built);
    assert!(graph.solutions().unwrap().is_empty());
}

#[test]
fn solving_twice_is_deterministic() {
    let puzzle = puzzle!([3, 5, 8] => 4).unwrap();

    let first = puzzle.solve();
    let second = puzzle.solve();
    assert_eq!(first, second);

    let graph_a = puzzle.search();
    let graph_b = puzzle.search();
    assert_eq!(report::render_graph(&graph_a), report::render_graph(&graph_b));
}

#[test]
fn graph_phases_are_enforced() {
    let puzzle = puzzle!([3, 5] => 4).unwrap();
    let mut graph = SearchGraph::new(&puzzle);

    assert_eq!(graph.phase(), BuildPhase::Unbuilt);
    assert_eq!(graph.solutions(), Err(SolveError::NotBuilt));

    graph.build().unwrap();
    assert_eq!(graph.phase(), BuildPhase::Built);
    assert_eq!(graph.build(), Err(SolveError::AlreadyBuilt));
    assert!(graph.solutions().is_ok());
}

#[test]
fn graph_dump_marks_the_goal_leaf() {
    let graph = puzzle!([3, 5] => 4).unwrap().search();
    let dump = report::render_graph(&graph);

    assert!(dump.starts_with("[0/3, 0/5]\n-[3/3, 0/5]\n"));
    assert_eq!(dump.lines().count(), graph.len());
    assert_eq!(dump.matches(" <----").count(), 1);
    assert!(dump.contains("[0/3, 4/5] <----"));
}
