//! Implementation of search algorithms.
//!
//! Both algorithms share one expansion loop and only differ in the frontier
//! that orders it.

use derive_more::Display;

use crate::heuristics::HeuristicKind;
use crate::heuristics::PuzzleHeuristic;
use crate::problem::Problem;
use crate::problems::sliding_puzzle::PuzzlePath;
use crate::problems::sliding_puzzle::PuzzleProblem;

pub mod astar;
pub mod best_first;
pub mod ucs;

use astar::AStarSearch;
use best_first::SearchReport;
use ucs::UniformCostSearch;

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
pub enum Algorithm {
    #[display("Uniform Cost Search")]
    UniformCost,
    #[display("A* with {_0} heuristic")]
    AStar(HeuristicKind),
}

impl Algorithm {
    /// Every algorithm, uninformed first.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::UniformCost,
        Algorithm::AStar(HeuristicKind::Zero),
        Algorithm::AStar(HeuristicKind::MisplacedTiles),
        Algorithm::AStar(HeuristicKind::Manhattan),
    ];
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub report: SearchReport,
    pub path: Option<PuzzlePath>,
}

/// Runs a whole search.
pub fn solve(problem: &PuzzleProblem, algorithm: Algorithm) -> Solution {
    log::debug!("Solving with {algorithm}");
    match algorithm {
        Algorithm::UniformCost => {
            let mut search = UniformCostSearch::uniform_cost(problem);
            let report = search.run();
            Solution {
                report,
                path: search.path(),
            }
        }
        Algorithm::AStar(kind) => {
            let h = PuzzleHeuristic::new(kind, problem.goal());
            let mut search = AStarSearch::astar(problem, h);
            let report = search.run();
            Solution {
                report,
                path: search.path(),
            }
        }
    }
}
