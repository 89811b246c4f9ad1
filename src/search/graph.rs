//! The reachable-state graph and its expansion engine.
//!
//! `SearchGraph` owns an arena of nodes rooted at the all-empty
//! configuration. Building it applies every legal move to every discovered
//! state depth-first, deduplicating globally by amount vector, and stops
//! all expansion the instant any candidate satisfies the goal predicate.
//! The halt is an explicit signal threaded through every loop and
//! recursive call, never an unwinding mechanism.

use crate::core::{JugState, Move};
use crate::puzzle::Puzzle;
use crate::search::error::SolveError;
use crate::search::solution::{Solution, SolutionSet};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Index of a node in the graph arena.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    /// Position in the arena; doubles as discovery order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Expansion phase of the graph engine.
///
/// `build()` moves the graph from `Unbuilt` through `Building` to `Built`
/// exactly once; solution extraction is only valid in `Built`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum BuildPhase {
    Unbuilt,
    Building,
    Built,
}

/// Result of processing one candidate or one subtree: keep going, or stop
/// all state creation everywhere because a goal was found.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Expansion {
    Continue,
    Halt,
}

/// Bookkeeping about one search run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchMetadata {
    /// When the graph (and its root) was created.
    pub created_at: DateTime<Utc>,
    /// When expansion finished; `None` while unbuilt.
    pub built_at: Option<DateTime<Utc>>,
    /// Nodes in the arena, root included.
    pub nodes_discovered: usize,
    /// Whether expansion stopped early on a goal rather than exhausting
    /// the reachable space.
    pub halted_on_goal: bool,
}

/// One discovered configuration plus its tree linkage. Ownership runs
/// parent-to-children through the arena; `parent` is a non-owning
/// back-link for path reconstruction.
#[derive(Clone, Debug)]
struct Node {
    state: JugState,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    is_goal: bool,
}

/// The reachable-state tree for one puzzle.
///
/// # Example
///
/// ```rust
/// use decant::{BuildPhase, Puzzle, SearchGraph};
///
/// let puzzle = Puzzle::new(vec![3, 5], 4)?;
/// let mut graph = SearchGraph::new(&puzzle);
/// assert_eq!(graph.phase(), BuildPhase::Unbuilt);
///
/// graph.build()?;
/// let solutions = graph.solutions()?;
/// assert_eq!(solutions.len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct SearchGraph {
    nodes: Vec<Node>,
    seen: HashMap<Vec<u64>, NodeId>,
    target: u64,
    phase: BuildPhase,
    metadata: SearchMetadata,
}

impl SearchGraph {
    /// Create an unbuilt graph holding only the all-empty root. The root
    /// fixes the canonical jug ordering for the whole run and is already
    /// registered in the dedup index.
    pub fn new(puzzle: &Puzzle) -> Self {
        let root = JugState::all_empty(puzzle.capacities());
        let mut seen = HashMap::new();
        seen.insert(root.amounts(), NodeId(0));
        Self {
            nodes: vec![Node {
                state: root,
                parent: None,
                children: Vec::new(),
                is_goal: false,
            }],
            seen,
            target: puzzle.target(),
            phase: BuildPhase::Unbuilt,
            metadata: SearchMetadata {
                created_at: Utc::now(),
                built_at: None,
                nodes_discovered: 1,
                halted_on_goal: false,
            },
        }
    }

    /// The amount the search is looking for.
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Current phase of the engine.
    pub fn phase(&self) -> BuildPhase {
        self.phase
    }

    /// Run metadata; `built_at` and the counters are final once built.
    pub fn metadata(&self) -> &SearchMetadata {
        &self.metadata
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root exists from construction.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All node ids in discovery order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// The configuration at a node.
    pub fn state(&self, id: NodeId) -> &JugState {
        &self.nodes[id.0].state
    }

    /// The node's parent, `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// The node's children in attachment order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Whether this node satisfied the goal predicate.
    pub fn is_goal(&self, id: NodeId) -> bool {
        self.nodes[id.0].is_goal
    }

    /// Expand the graph until the reachable space is exhausted or the
    /// first goal state is discovered, whichever comes first.
    ///
    /// Returns `SolveError::AlreadyBuilt` on any call after the first.
    pub fn build(&mut self) -> Result<(), SolveError> {
        if self.phase != BuildPhase::Unbuilt {
            return Err(SolveError::AlreadyBuilt);
        }
        self.phase = BuildPhase::Building;

        let outcome = self.expand(self.root());

        self.metadata.halted_on_goal = outcome == Expansion::Halt;
        self.metadata.nodes_discovered = self.nodes.len();
        self.metadata.built_at = Some(Utc::now());
        self.phase = BuildPhase::Built;
        Ok(())
    }

    /// Depth-first expansion of one state: all of its own candidates in
    /// canonical move order, then its attached children in attachment
    /// order. A `Halt` from anywhere propagates straight up.
    fn expand(&mut self, id: NodeId) -> Expansion {
        let width = self.nodes[id.0].state.len();
        for i in 0..width {
            if self.consider(id, Move::Fill(i)) == Expansion::Halt {
                return Expansion::Halt;
            }
            if self.consider(id, Move::Empty(i)) == Expansion::Halt {
                return Expansion::Halt;
            }
            for k in 0..width {
                if k == i {
                    continue;
                }
                if self.consider(id, Move::Pour { from: i, to: k }) == Expansion::Halt {
                    return Expansion::Halt;
                }
            }
        }

        let children = self.nodes[id.0].children.clone();
        for child in children {
            if self.expand(child) == Expansion::Halt {
                return Expansion::Halt;
            }
        }
        Expansion::Continue
    }

    /// Generate one candidate, dedup-check it against everything
    /// discovered so far, attach it if new, then test the goal predicate.
    /// The goal test runs whether or not the candidate was attached.
    fn consider(&mut self, parent: NodeId, mv: Move) -> Expansion {
        let candidate = self.nodes[parent.0].state.apply(mv);
        let reaches_goal = candidate.has_amount(self.target);
        let key = candidate.amounts();

        let mut attached = None;
        if !self.seen.contains_key(&key) {
            let id = NodeId(self.nodes.len());
            self.nodes.push(Node {
                state: candidate,
                parent: Some(parent),
                children: Vec::new(),
                is_goal: false,
            });
            self.seen.insert(key, id);
            self.nodes[parent.0].children.push(id);
            attached = Some(id);
        }

        if reaches_goal {
            if let Some(id) = attached {
                self.nodes[id.0].is_goal = true;
            }
            return Expansion::Halt;
        }
        Expansion::Continue
    }

    /// Extract every root-to-goal path from the finished graph, numbered
    /// in discovery order of the depth-first traversal.
    ///
    /// Returns `SolveError::NotBuilt` before `build()` has run.
    pub fn solutions(&self) -> Result<SolutionSet, SolveError> {
        if self.phase != BuildPhase::Built {
            return Err(SolveError::NotBuilt);
        }
        let mut found = Vec::new();
        self.collect(self.root(), &mut found);
        Ok(SolutionSet::new(found))
    }

    fn collect(&self, id: NodeId, found: &mut Vec<Solution>) {
        let node = &self.nodes[id.0];
        if node.is_goal {
            found.push(Solution::new(self.path_to(id)));
        } else {
            for &child in &node.children {
                self.collect(child, found);
            }
        }
    }

    /// Walk parent links from `id` to the root, then reverse.
    fn path_to(&self, id: NodeId) -> Vec<JugState> {
        let mut path = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            path.push(self.nodes[current.0].state.clone());
            cursor = self.nodes[current.0].parent;
        }
        path.reverse();
        path
    }
}
