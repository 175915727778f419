//! The expansion loop shared by uniform-cost search and A*.
//!
//! States are deduplicated when they're first pushed, not when they're
//! expanded. Only the first discovered instance of a state is ever expanded
//! and nodes are never re-opened. FIFO order and A* with Manhattan distance
//! discover every state through a cheapest path first.

use std::cmp::max;

use derive_more::Display;

use crate::frontier::Frontier;
use crate::heuristics::Heuristic;
use crate::problem::Problem;
use crate::problems::sliding_puzzle::CanonicalKey;
use crate::problems::sliding_puzzle::Depth;
use crate::problems::sliding_puzzle::Move;
use crate::problems::sliding_puzzle::PuzzlePath;
use crate::problems::sliding_puzzle::PuzzleProblem;
use crate::problems::sliding_puzzle::PuzzleSpace;
use crate::problems::sliding_puzzle::PuzzleState;
use crate::search::Discovery;
use crate::search::SearchNode;
use crate::search::VisitedSet;
use crate::space::Path;
use crate::space::Space;
use crate::space::State;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// The start node is in the frontier, nothing expanded yet.
    Initialized,
    Running,
    /// Holds the goal node as it was popped.
    GoalFound(SearchNode),
    /// The frontier ran out without reaching the goal.
    Exhausted,
}

impl SearchStatus {
    #[inline(always)]
    pub fn is_terminal(&self) -> bool {
        matches!(self, SearchStatus::GoalFound(_) | SearchStatus::Exhausted)
    }
}

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum Outcome {
    #[display("goal found at depth {depth}")]
    GoalFound { depth: Depth },
    #[display("exhausted")]
    Exhausted,
    /// The caller stopped stepping before the search finished.
    #[display("aborted")]
    Aborted,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: Outcome,
    pub nodes_expanded: usize,
    pub max_frontier_size: usize,
}

impl SearchReport {
    /// Solution depth, only when the goal was found.
    pub fn depth(&self) -> Option<Depth> {
        match self.outcome {
            Outcome::GoalFound { depth } => Some(depth),
            _ => None,
        }
    }
}

impl std::fmt::Display for SearchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.outcome {
            Outcome::GoalFound { depth } => {
                writeln!(f, "Goal state!")?;
                writeln!(f)?;
                writeln!(f, "Solution depth was {depth}")?;
            }
            Outcome::Exhausted => writeln!(f, "No solution exists!")?,
            Outcome::Aborted => writeln!(f, "Search stopped before finishing.")?,
        }
        writeln!(f, "Number of nodes expanded: {}", self.nodes_expanded)?;
        write!(f, "Max queue size: {}", self.max_frontier_size)
    }
}

/// Best-first search over the sliding puzzle.
///
/// The frontier picks the expansion order and the heuristic feeds it. A FIFO
/// frontier gives uniform-cost search, an `AStarRank` frontier gives A*.
///
/// Every expansion is also an iterator step, so callers can trace or bound a
/// run by driving the iterator themselves.
#[derive(Debug)]
pub struct BestFirstSearch<F, H>
where
    F: Frontier,
    H: Heuristic,
{
    /// Discovered states waiting for expansion.
    frontier: F,
    /// Amalgamation of,
    /// - The "Closed Set", to recall whether a state was enqueued already.
    /// - The search tree, to rebuild the path to the goal.
    visited: VisitedSet<CanonicalKey, Move>,
    heuristic: H,

    space: PuzzleSpace,
    start: PuzzleState,
    goal: PuzzleState,

    status: SearchStatus,
    nodes_expanded: usize,
    nodes_generated: usize,
    max_frontier_size: usize,
}

impl<F, H> BestFirstSearch<F, H>
where
    F: Frontier,
    H: Heuristic,
{
    #[must_use]
    pub fn new(problem: &PuzzleProblem, heuristic: H) -> Self {
        let start = *problem.start();
        let mut search = Self {
            frontier: F::default(),
            visited: VisitedSet::new(),
            heuristic,
            space: problem.space().clone(),
            start,
            goal: *problem.goal(),
            status: SearchStatus::Initialized,
            nodes_expanded: 0,
            nodes_generated: 0,
            max_frontier_size: 1,
        };

        let h = search.heuristic.h(&start);
        search.push_new(SearchNode::new(start, 0, h), Discovery::Start);
        log::debug!(
            "Searching from {start:?} (h={h}) towards {:?} with {:?}",
            search.goal,
            search.heuristic
        );

        search
    }

    #[inline(always)]
    fn push_new(&mut self, node: SearchNode, discovery: Discovery<CanonicalKey, Move>) {
        let fresh = self.visited.mark_seen(node.state.canonical_key(), discovery);
        debug_assert!(fresh, "{:?} was pushed twice", node.state);
        self.frontier.push(node);
        self.nodes_generated += 1;
    }

    /// Pops and expands the next node.
    ///
    /// Returns the expanded node, goal included, or `None` once the search
    /// is over.
    pub fn expand_next(&mut self) -> Option<SearchNode> {
        if self.status.is_terminal() {
            return None;
        }
        self.status = SearchStatus::Running;

        let Some(node) = self.frontier.pop() else {
            self.exhaust();
            return None;
        };

        #[cfg(feature = "coz_profile")]
        coz::scope!("NodeExpansion");

        self.nodes_expanded += 1;
        log::trace!(
            "Expanding {:?} (g={}, h={})",
            node.state,
            node.depth,
            node.heuristic
        );

        if node.state == self.goal {
            #[cfg(feature = "coz_profile")]
            coz::progress!("GoalFound");

            log::debug!(
                "Goal found at depth {} after {} expansions",
                node.depth,
                self.nodes_expanded
            );
            self.status = SearchStatus::GoalFound(node);
            return Some(node);
        }

        let parent = node.state.canonical_key();
        for (s, action) in self.space.neighbours(&node.state) {
            #[cfg(feature = "coz_profile")]
            coz::scope!("ReachNode");

            if self.visited.seen(&s.canonical_key()) {
                continue;
            }
            let h = self.heuristic.h(&s);
            self.push_new(
                SearchNode::new(s, node.depth + 1, h),
                Discovery::Reached { parent, action },
            );
        }
        self.max_frontier_size = max(self.max_frontier_size, self.frontier.len());

        if self.frontier.is_empty() {
            self.exhaust();
        }
        Some(node)
    }

    fn exhaust(&mut self) {
        log::debug!(
            "No path to {:?} after {} expansions",
            self.goal,
            self.nodes_expanded
        );
        self.status = SearchStatus::Exhausted;
    }

    /// Runs until the goal is found or the frontier empties.
    pub fn run(&mut self) -> SearchReport {
        while self.expand_next().is_some() {}
        self.report()
    }

    /// Like `run`, calling `on_expand` with every expanded node.
    pub fn run_traced<T: FnMut(&SearchNode)>(&mut self, mut on_expand: T) -> SearchReport {
        while let Some(node) = self.expand_next() {
            on_expand(&node);
        }
        self.report()
    }

    /// Statistics so far. Unfinished searches report `Outcome::Aborted`.
    pub fn report(&self) -> SearchReport {
        let outcome = match self.status {
            SearchStatus::GoalFound(node) => Outcome::GoalFound { depth: node.depth },
            SearchStatus::Exhausted => Outcome::Exhausted,
            SearchStatus::Initialized | SearchStatus::Running => Outcome::Aborted,
        };
        SearchReport {
            outcome,
            nodes_expanded: self.nodes_expanded,
            max_frontier_size: self.max_frontier_size,
        }
    }

    /// The moves from the start to the goal, once found.
    #[must_use]
    pub fn path(&self) -> Option<PuzzlePath> {
        #[cfg(feature = "coz_profile")]
        coz::scope!("PathReconstruction");

        let SearchStatus::GoalFound(goal) = self.status else {
            return None;
        };

        let mut path = Path::new_from_start(self.start);
        for a in self.visited.actions_to(goal.state.canonical_key())? {
            let c = self.space.cost(&path.end, &a);
            let s = self.space.apply(&path.end, &a)?;
            path.append((s, a), c);
        }

        debug_assert_eq!(path.end, goal.state);
        debug_assert_eq!(path.cost, goal.depth);
        Some(path)
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }
    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }
    pub fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }
    /// Nodes ever pushed, the start included.
    pub fn nodes_generated(&self) -> usize {
        self.nodes_generated
    }
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }
    pub fn visited_len(&self) -> usize {
        self.visited.len()
    }

    pub fn write_memory_stats<W: std::io::Write>(&self, mut out: W) -> std::io::Result<()> {
        use size::Size;
        use std::mem::size_of;
        use thousands::Separable;

        writeln!(out, "Search Stats:")?;
        let s = self.frontier.slot_size();
        let l = self.frontier.len();
        let c = self.frontier.capacity();
        writeln!(
            out,
            "  - |Open|:     {} ({})",
            l.separate_with_commas(),
            Size::from_bytes(l * s)
        )?;
        writeln!(
            out,
            "  - |Open|*:    {} ({})",
            c.separate_with_commas(),
            Size::from_bytes(c * s)
        )?;

        let s = size_of::<(CanonicalKey, Discovery<CanonicalKey, Move>)>();
        let l = self.visited.len();
        let c = self.visited.capacity();
        writeln!(
            out,
            "  - |Visited|:  {} ({})",
            l.separate_with_commas(),
            Size::from_bytes(l * s)
        )?;
        writeln!(
            out,
            "  - |Visited|*: {} ({})",
            c.separate_with_commas(),
            Size::from_bytes(c * s)
        )?;

        writeln!(
            out,
            "  - Generated nodes: {}",
            self.nodes_generated.separate_with_commas()
        )?;
        writeln!(
            out,
            "  - Expanded nodes:  {}",
            self.nodes_expanded.separate_with_commas()
        )?;

        Ok(())
    }
}

impl<F, H> Iterator for BestFirstSearch<F, H>
where
    F: Frontier,
    H: Heuristic,
{
    type Item = SearchNode;
    fn next(&mut self) -> Option<Self::Item> {
        self.expand_next()
    }
}
