use crate::algorithms::best_first::BestFirstSearch;
use crate::frontier::PriorityFrontier;
use crate::heuristics::Heuristic;
use crate::problems::sliding_puzzle::Depth;
use crate::problems::sliding_puzzle::PuzzleProblem;

/// The ranking tuple for A*
///
/// We prefer better f-values, and tie break for lower g. Whatever is still
/// tied goes out in insertion order, which keeps runs reproducible and makes
/// A* with a zero heuristic expand exactly like uniform-cost search.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct AStarRank {
    f: Depth,
    g: Depth,
    order: u64,
}

impl AStarRank {
    pub fn new(g: Depth, h: Depth, order: u64) -> Self {
        Self {
            f: g.saturating_add(h),
            g,
            order,
        }
    }

    #[inline(always)]
    pub fn f(&self) -> Depth {
        self.f
    }
    #[inline(always)]
    pub fn g(&self) -> Depth {
        self.g
    }
}

pub type AStarSearch<H> = BestFirstSearch<PriorityFrontier, H>;

impl<H: Heuristic> AStarSearch<H> {
    #[must_use]
    pub fn astar(problem: &PuzzleProblem, heuristic: H) -> Self {
        Self::new(problem, heuristic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::best_first::Outcome;
    use crate::algorithms::best_first::SearchReport;
    use crate::heuristics::ManhattanDistance;
    use crate::heuristics::MisplacedTiles;
    use crate::problem::Problem;
    use crate::problems::presets;
    use crate::space::Space;

    #[test]
    fn ranking_sliding_puzzle() {
        let g = 2;
        let h_low = 0;
        let h_high = 1;
        assert!(AStarRank::new(g, h_low, 0) < AStarRank::new(g, h_high, 0));
        assert!(AStarRank::new(g, h_high, 0) == AStarRank::new(g, h_high, 0));
        assert!(AStarRank::new(g, h_high, 0) > AStarRank::new(g, h_low, 0));

        // Same f-value, needs tie-breaking on g
        let shallow = AStarRank::new(0, 2, 1);
        let deep = AStarRank::new(2, 0, 0);
        assert!(shallow < deep);
        assert!(shallow.f() == deep.f());
        assert!(shallow.g() < deep.g());

        // Full tie, first in goes first out
        assert!(AStarRank::new(1, 1, 3) < AStarRank::new(1, 1, 4));
    }

    #[test]
    fn ranking_saturates() {
        let r = AStarRank::new(Depth::MAX, 1, 0);
        assert_eq!(r.f(), Depth::MAX);
        assert!(AStarRank::new(Depth::MAX - 1, 0, 0) < r);
    }

    #[test]
    fn solved_start() {
        let p = presets::preset(0).unwrap();
        let mut search = AStarSearch::astar(&p, ManhattanDistance::new(p.goal()));
        assert_eq!(
            search.run(),
            SearchReport {
                outcome: Outcome::GoalFound { depth: 0 },
                nodes_expanded: 1,
                max_frontier_size: 1,
            }
        );
        let path = search.path().unwrap();
        assert!(path.is_empty());
        assert_eq!(path.end, *p.goal());
    }

    #[test]
    fn two_moves_away() {
        let p = presets::preset(2).unwrap();
        let mut search = AStarSearch::astar(&p, ManhattanDistance::new(p.goal()));
        let report = search.run();
        assert_eq!(report.depth(), Some(2));
        assert_eq!(report.nodes_expanded, 3);
        assert_eq!(search.path().unwrap().to_string(), "Path(2, →→)");
    }

    #[test]
    fn four_moves_away() {
        let p = presets::preset(4).unwrap();
        let mut search = AStarSearch::astar(&p, ManhattanDistance::new(p.goal()));
        assert_eq!(
            search.run(),
            SearchReport {
                outcome: Outcome::GoalFound { depth: 4 },
                nodes_expanded: 5,
                max_frontier_size: 6,
            }
        );
        let path = search.path().unwrap();
        assert_eq!(path.len(), 4);
        assert!(p.space().valid_path(&path));

        let ucs = crate::algorithms::ucs::UniformCostSearch::uniform_cost(&p).run();
        assert_eq!(ucs.depth(), Some(4));
        assert!(search.nodes_expanded() < ucs.nodes_expanded);
    }

    #[test]
    fn manhattan_finds_optimal_depths() {
        for (depth, p) in presets::all() {
            let mut search = AStarSearch::astar(&p, ManhattanDistance::new(p.goal()));
            assert_eq!(search.run().depth(), Some(depth));
            assert!(p.space().valid_path(&search.path().unwrap()));
        }
    }

    #[test]
    fn misplaced_tiles_finds_valid_solutions() {
        for (depth, p) in presets::all().filter(|(d, _)| *d <= 16) {
            let mut search = AStarSearch::astar(&p, MisplacedTiles::new(p.goal()));
            let found = search.run().depth().unwrap();
            assert!(found >= depth, "preset {depth} solved in {found}");
            let path = search.path().unwrap();
            assert_eq!(path.len(), found as usize);
            assert!(p.space().valid_path(&path));
        }
    }
}
