//! Built-in 3x3 puzzles of increasing difficulty.

use crate::problems::sliding_puzzle::Depth;
use crate::problems::sliding_puzzle::PuzzleProblem;
use crate::problems::sliding_puzzle::PuzzleState;
use crate::problems::sliding_puzzle::Tile;

const SIDE: usize = 3;
type Grid = [Tile; SIDE * SIDE];

static GOAL: Grid = [1, 2, 3, 4, 5, 6, 7, 8, 0];

/// Initial states keyed by their optimal solution depth.
#[rustfmt::skip]
static PRESETS: [(Depth, Grid); 8] = [
    ( 0, [1, 2, 3, 4, 5, 6, 7, 8, 0]),
    ( 2, [1, 2, 3, 4, 5, 6, 0, 7, 8]),
    ( 4, [1, 2, 3, 5, 0, 6, 4, 7, 8]),
    ( 8, [1, 3, 6, 5, 0, 2, 4, 7, 8]),
    (12, [1, 3, 6, 5, 0, 7, 4, 8, 2]),
    (16, [1, 6, 7, 5, 0, 3, 4, 8, 2]),
    (20, [7, 1, 2, 4, 8, 5, 6, 3, 0]),
    (24, [0, 7, 2, 4, 6, 1, 3, 5, 8]),
];

fn build(grid: &Grid) -> PuzzleProblem {
    let start = PuzzleState::from_cells_unchecked(SIDE, grid);
    let goal = PuzzleState::from_cells_unchecked(SIDE, &GOAL);
    match PuzzleProblem::new(start, goal) {
        Ok(p) => p,
        Err(e) => unreachable!("Presets share their side: {e}"),
    }
}

/// The depths there's a preset for.
///
/// ```
/// let depths: Vec<_> = slide::problems::presets::depths().collect();
/// assert_eq!(depths, vec![0, 2, 4, 8, 12, 16, 20, 24]);
/// ```
pub fn depths() -> impl Iterator<Item = Depth> {
    PRESETS.iter().map(|(d, _)| *d)
}

/// The preset whose optimal solution takes `depth` moves.
pub fn preset(depth: Depth) -> Option<PuzzleProblem> {
    PRESETS
        .iter()
        .find(|(d, _)| *d == depth)
        .map(|(_, grid)| build(grid))
}

/// Every preset, easiest first.
pub fn all() -> impl Iterator<Item = (Depth, PuzzleProblem)> {
    PRESETS.iter().map(|(d, grid)| (*d, build(grid)))
}
