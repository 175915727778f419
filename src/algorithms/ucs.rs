use crate::algorithms::best_first::BestFirstSearch;
use crate::frontier::FifoFrontier;
use crate::heuristics::ZeroHeuristic;
use crate::problems::sliding_puzzle::PuzzleProblem;

/// Uniform-cost search, expanding states by increasing depth.
pub type UniformCostSearch = BestFirstSearch<FifoFrontier, ZeroHeuristic>;

impl UniformCostSearch {
    #[must_use]
    pub fn uniform_cost(problem: &PuzzleProblem) -> Self {
        Self::new(problem, ZeroHeuristic)
    }
}
