//! Estimates of the remaining cost to a fixed goal.
//!
//! Manhattan distance is consistent: every move changes it by exactly one.
//! Misplaced tiles counts the blank too, which can overestimate by one, so
//! A* guided by it may settle for a longer solution.

use derive_more::Display;

use crate::problems::sliding_puzzle::BLANK;
use crate::problems::sliding_puzzle::Depth;
use crate::problems::sliding_puzzle::MAX_CELLS;
use crate::problems::sliding_puzzle::PuzzleState;

/// An instance-specific heuristic. Goal-dependent tables are built once, when
/// the heuristic is created.
pub trait Heuristic: std::fmt::Debug {
    fn h(&self, s: &PuzzleState) -> Depth;
}

/// Always `0`. Turns A* into uniform-cost search.
#[derive(Copy, Clone, Debug, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    #[inline(always)]
    fn h(&self, _s: &PuzzleState) -> Depth {
        0
    }
}

/// Number of cells that differ from the goal. The blank counts like any tile.
#[derive(Copy, Clone, Debug)]
pub struct MisplacedTiles {
    goal: PuzzleState,
}

impl MisplacedTiles {
    pub fn new(goal: &PuzzleState) -> Self {
        Self { goal: *goal }
    }
}

impl Heuristic for MisplacedTiles {
    #[inline(always)]
    fn h(&self, s: &PuzzleState) -> Depth {
        debug_assert_eq!(s.side(), self.goal.side());
        s.cells()
            .iter()
            .zip(self.goal.cells())
            .filter(|(a, b)| a != b)
            .count() as Depth
    }
}

/// Sum of the grid distances of every tile to its goal cell.
#[derive(Copy, Clone, Debug)]
pub struct ManhattanDistance {
    /// Goal `(row, col)` by tile value. The blank has no entry.
    goal_positions: [Option<(u8, u8)>; MAX_CELLS],
}

impl ManhattanDistance {
    pub fn new(goal: &PuzzleState) -> Self {
        let side = goal.side();
        let mut goal_positions = [None; MAX_CELLS];
        for (i, &tile) in goal.cells().iter().enumerate() {
            if tile != BLANK {
                goal_positions[usize::from(tile)] = Some(((i / side) as u8, (i % side) as u8));
            }
        }
        Self { goal_positions }
    }

    #[inline(always)]
    fn goal_position(&self, tile: u8) -> (usize, usize) {
        match self.goal_positions.get(usize::from(tile)).copied().flatten() {
            Some((row, col)) => (usize::from(row), usize::from(col)),
            None => panic!("Tile {tile} has no position in the goal"),
        }
    }
}

impl Heuristic for ManhattanDistance {
    #[inline(always)]
    fn h(&self, s: &PuzzleState) -> Depth {
        let side = s.side();
        let mut h = 0;
        for (i, &tile) in s.cells().iter().enumerate() {
            if tile == BLANK {
                continue;
            }
            let (goal_row, goal_col) = self.goal_position(tile);
            h += (i / side).abs_diff(goal_row) + (i % side).abs_diff(goal_col);
        }
        h as Depth
    }
}

/// Which heuristic to guide A* with.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
pub enum HeuristicKind {
    #[display("zero")]
    Zero,
    #[display("misplaced tiles")]
    MisplacedTiles,
    #[display("Manhattan distance")]
    Manhattan,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 3] = [
        HeuristicKind::Zero,
        HeuristicKind::MisplacedTiles,
        HeuristicKind::Manhattan,
    ];
}

/// A heuristic picked at runtime, resolved once against a goal.
#[derive(Copy, Clone, Debug)]
pub enum PuzzleHeuristic {
    Zero(ZeroHeuristic),
    MisplacedTiles(MisplacedTiles),
    Manhattan(ManhattanDistance),
}

impl PuzzleHeuristic {
    pub fn new(kind: HeuristicKind, goal: &PuzzleState) -> Self {
        match kind {
            HeuristicKind::Zero => PuzzleHeuristic::Zero(ZeroHeuristic),
            HeuristicKind::MisplacedTiles => {
                PuzzleHeuristic::MisplacedTiles(MisplacedTiles::new(goal))
            }
            HeuristicKind::Manhattan => PuzzleHeuristic::Manhattan(ManhattanDistance::new(goal)),
        }
    }

    pub fn kind(&self) -> HeuristicKind {
        match self {
            PuzzleHeuristic::Zero(_) => HeuristicKind::Zero,
            PuzzleHeuristic::MisplacedTiles(_) => HeuristicKind::MisplacedTiles,
            PuzzleHeuristic::Manhattan(_) => HeuristicKind::Manhattan,
        }
    }
}

impl Heuristic for PuzzleHeuristic {
    #[inline(always)]
    fn h(&self, s: &PuzzleState) -> Depth {
        match self {
            PuzzleHeuristic::Zero(h) => h.h(s),
            PuzzleHeuristic::MisplacedTiles(h) => h.h(s),
            PuzzleHeuristic::Manhattan(h) => h.h(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::sliding_puzzle::PuzzleSpace;
    use crate::space::Space;

    fn state(s: &str) -> PuzzleState {
        PuzzleState::try_from(s).unwrap()
    }

    fn goal() -> PuzzleState {
        PuzzleState::solved(3).unwrap()
    }

    #[test]
    fn zero_on_goal() {
        let g = goal();
        for kind in HeuristicKind::ALL {
            assert_eq!(PuzzleHeuristic::new(kind, &g).h(&g), 0, "{kind}");
        }
    }

    #[test]
    fn misplaced_counts_the_blank() {
        let h = MisplacedTiles::new(&goal());
        // 7, 8 and the blank are all off by one cell.
        assert_eq!(h.h(&state("1 2 3/4 5 6/0 7 8")), 3);
        assert_eq!(h.h(&state("1 2 3/5 0 6/4 7 8")), 5);
    }

    #[test]
    fn manhattan_ignores_the_blank() {
        let h = ManhattanDistance::new(&goal());
        assert_eq!(h.h(&state("1 2 3/4 5 6/0 7 8")), 2);
        assert_eq!(h.h(&state("1 2 3/5 0 6/4 7 8")), 4);
        assert_eq!(h.h(&state("8 2 3/4 5 6/7 1 0")), 3 + 3);
    }

    #[test]
    fn manhattan_towards_other_goals() {
        let goal = state("0 1/2 3");
        let h = ManhattanDistance::new(&goal);
        assert_eq!(h.h(&goal), 0);
        assert_eq!(h.h(&state("1 0/2 3")), 1);
        assert_eq!(h.h(&state("3 2/1 0")), 2 + 2 + 2);
    }

    #[test]
    #[should_panic(expected = "has no position in the goal")]
    fn manhattan_rejects_foreign_tiles() {
        let h = ManhattanDistance::new(&PuzzleState::solved(2).unwrap());
        h.h(&goal());
    }

    #[test]
    fn estimates_change_gradually_along_moves() {
        let g = goal();
        let space = PuzzleSpace::new(3);
        let manhattan = ManhattanDistance::new(&g);
        let misplaced = MisplacedTiles::new(&g);

        let mut s = state("8 6 7/2 5 4/3 0 1");
        for step in 0..200 {
            let neighbours = space.neighbours(&s);
            for (n, _) in &neighbours {
                assert!(manhattan.h(&s).abs_diff(manhattan.h(n)) <= 1);
                assert!(misplaced.h(&s).abs_diff(misplaced.h(n)) <= 2);
            }
            assert!(manhattan.h(&s) >= misplaced.h(&s).saturating_sub(1));
            s = neighbours[step % neighbours.len()].0;
        }
    }
}
