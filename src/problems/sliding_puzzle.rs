use derive_more::Display;
use smallvec::SmallVec;
use thiserror::Error;

use crate::problem::Problem;
use crate::space::Action;
use crate::space::Cost;
use crate::space::Neighbours;
use crate::space::Path;
use crate::space::Space;
use crate::space::State;

/// Largest supported side. Keeps every grid in a fixed array and every key in
/// a `u128`.
pub const MAX_SIDE: usize = 5;
pub const MAX_CELLS: usize = MAX_SIDE * MAX_SIDE;
const BITS_PER_CELL: u32 = 5;

pub type Tile = u8;
pub const BLANK: Tile = 0;

/// Path cost. All moves cost 1, so this is also the number of moves.
pub type Depth = u32;
impl Cost for Depth {}

pub type PuzzlePath = Path<PuzzleState, Move, Depth>;

/// Packed positional encoding of a grid, 5 bits per cell in row-major order.
///
/// Keys are only comparable between states of the same side.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalKey(u128);

impl CanonicalKey {
    /// Packs cells, first cell in the most significant position.
    ///
    /// ```
    /// use slide::problems::sliding_puzzle::CanonicalKey;
    /// assert_eq!(CanonicalKey::pack(&[1, 0]).get(), 0b00001_00000);
    /// assert!(CanonicalKey::pack(&[0, 1, 2]) < CanonicalKey::pack(&[0, 2, 1]));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn pack(cells: &[Tile]) -> Self {
        debug_assert!(cells.len() <= MAX_CELLS);
        Self(cells.iter().fold(0u128, |key, &tile| {
            debug_assert!(u32::from(tile) < (1 << BITS_PER_CELL));
            (key << BITS_PER_CELL) | u128::from(tile)
        }))
    }

    #[inline(always)]
    pub fn get(&self) -> u128 {
        self.0
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PuzzleParseError {
    #[error("Empty input")]
    EmptyInput,
    #[error("Invalid cell '{token}' found at ({row},{col})")]
    InvalidCell {
        token: String,
        row: usize,
        col: usize,
    },
    #[error("Unsupported side {side}, expected 1 to {max}", max = MAX_SIDE)]
    UnsupportedSide { side: usize },
    #[error("Row {row} has {len} cells, expected {side}")]
    RaggedRow { row: usize, len: usize, side: usize },
    #[error("Got {len} cells for a {side}x{side} puzzle")]
    WrongCellCount { len: usize, side: usize },
    #[error("Tile {tile} is out of range for a {side}x{side} puzzle")]
    TileOutOfRange { tile: Tile, side: usize },
    #[error("Tile {tile} appears more than once")]
    DuplicateTile { tile: Tile },
}

/// A configuration of the N×N puzzle.
///
/// Always a permutation of `0..N²`, with `0` as the blank. Cells past `N²`
/// are kept at zero so that derived equality and hashing see only the grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct PuzzleState {
    side: u8,
    cells: [Tile; MAX_CELLS],
}

impl PuzzleState {
    /// The usual goal: tiles in row-major order with the blank last.
    pub fn solved(side: usize) -> Result<Self, PuzzleParseError> {
        if !(1..=MAX_SIDE).contains(&side) {
            return Err(PuzzleParseError::UnsupportedSide { side });
        }
        let n = side * side;
        let cells: SmallVec<[Tile; MAX_CELLS]> = (1..n)
            .map(|t| t as Tile)
            .chain(std::iter::once(BLANK))
            .collect();
        Ok(Self::from_cells_unchecked(side, &cells))
    }

    /// Builds a state from row-major cells, checking it's a permutation.
    pub fn from_cells(side: usize, cells: &[Tile]) -> Result<Self, PuzzleParseError> {
        if !(1..=MAX_SIDE).contains(&side) {
            return Err(PuzzleParseError::UnsupportedSide { side });
        }
        let n = side * side;
        if cells.len() != n {
            return Err(PuzzleParseError::WrongCellCount {
                len: cells.len(),
                side,
            });
        }

        let mut seen = 0u32;
        for &tile in cells {
            if usize::from(tile) >= n {
                return Err(PuzzleParseError::TileOutOfRange { tile, side });
            }
            let bit = 1u32 << tile;
            if seen & bit != 0 {
                return Err(PuzzleParseError::DuplicateTile { tile });
            }
            seen |= bit;
        }

        Ok(Self::from_cells_unchecked(side, cells))
    }

    /// Builds a state from rows, checking it's square and a permutation.
    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> Result<Self, PuzzleParseError> {
        let side = rows.len();
        if side == 0 {
            return Err(PuzzleParseError::EmptyInput);
        }
        if side > MAX_SIDE {
            return Err(PuzzleParseError::UnsupportedSide { side });
        }

        let mut cells = SmallVec::<[Tile; MAX_CELLS]>::new();
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != side {
                return Err(PuzzleParseError::RaggedRow {
                    row,
                    len: r.len(),
                    side,
                });
            }
            cells.extend_from_slice(r);
        }

        Self::from_cells(side, &cells)
    }

    pub(crate) fn from_cells_unchecked(side: usize, cells: &[Tile]) -> Self {
        debug_assert!((1..=MAX_SIDE).contains(&side));
        debug_assert_eq!(cells.len(), side * side);

        let mut state = Self {
            side: side as u8,
            cells: [BLANK; MAX_CELLS],
        };
        state.cells[..cells.len()].copy_from_slice(cells);
        debug_assert!(state.is_permutation());
        state
    }

    #[inline(always)]
    pub fn side(&self) -> usize {
        usize::from(self.side)
    }

    #[inline(always)]
    pub fn num_cells(&self) -> usize {
        self.side() * self.side()
    }

    /// Row-major cells.
    #[inline(always)]
    pub fn cells(&self) -> &[Tile] {
        &self.cells[..self.num_cells()]
    }

    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> Tile {
        debug_assert!(row < self.side() && col < self.side());
        self.cells[row * self.side() + col]
    }

    pub fn rows(&self) -> std::slice::Chunks<'_, Tile> {
        self.cells().chunks(self.side())
    }

    /// The `(row, col)` holding `tile`, if any.
    #[inline(always)]
    pub fn position_of(&self, tile: Tile) -> Option<(usize, usize)> {
        let side = self.side();
        self.cells()
            .iter()
            .position(|&t| t == tile)
            .map(|i| (i / side, i % side))
    }

    /// The `(row, col)` of the blank.
    #[inline(always)]
    pub fn blank(&self) -> (usize, usize) {
        match self.position_of(BLANK) {
            Some(position) => position,
            None => unreachable!("State {self:?} has no blank"),
        }
    }

    /// Copy of this state with two cells swapped.
    #[inline(always)]
    fn swapped(&self, a: usize, b: usize) -> Self {
        debug_assert!(a < self.num_cells() && b < self.num_cells());
        let mut s = *self;
        s.cells.swap(a, b);
        s
    }

    pub fn is_permutation(&self) -> bool {
        let n = self.num_cells();
        let mut seen = 0u32;
        for &tile in self.cells() {
            if usize::from(tile) >= n {
                return false;
            }
            seen |= 1u32 << tile;
        }
        seen.count_ones() as usize == n && self.cells[n..].iter().all(|&t| t == BLANK)
    }

    /// Number of tile pairs out of order, ignoring the blank.
    fn inversions(&self) -> usize {
        let tiles: SmallVec<[Tile; MAX_CELLS]> = self
            .cells()
            .iter()
            .copied()
            .filter(|&t| t != BLANK)
            .collect();
        tiles
            .iter()
            .enumerate()
            .map(|(i, &t)| tiles[i + 1..].iter().filter(|&&u| u < t).count())
            .sum()
    }

    /// Invariant of every move: inversion parity, plus the blank row on even
    /// sides.
    fn parity(&self) -> usize {
        let mut p = self.inversions();
        if self.side() % 2 == 0 {
            p += self.blank().0;
        }
        p % 2
    }
}

impl State for PuzzleState {
    type Key = CanonicalKey;

    #[inline(always)]
    fn canonical_key(&self) -> CanonicalKey {
        CanonicalKey::pack(self.cells())
    }
}

impl std::convert::TryFrom<&str> for PuzzleState {
    type Error = PuzzleParseError;

    /// Parses rows separated by newlines or `/`, and cells separated by
    /// whitespace or `,`. The blank may be written as `0` or `_`.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut rows: Vec<SmallVec<[Tile; MAX_SIDE]>> = vec![];

        for line in s.split(['\n', '/']).map(str::trim).filter(|l| !l.is_empty()) {
            let row = rows.len();
            let mut cells = SmallVec::new();
            for (col, token) in line
                .split(|ch: char| ch.is_whitespace() || ch == ',')
                .filter(|t| !t.is_empty())
                .enumerate()
            {
                let tile = match token {
                    "_" => BLANK,
                    token => token
                        .parse::<Tile>()
                        .map_err(|_| PuzzleParseError::InvalidCell {
                            token: token.to_string(),
                            row,
                            col,
                        })?,
                };
                cells.push(tile);
            }
            rows.push(cells);
        }

        Self::from_rows(&rows)
    }
}

impl std::fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let width = (self.num_cells() - 1).to_string().len();
        for row in self.rows() {
            for (col, &tile) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                if tile == BLANK {
                    write!(f, "{:>width$}", "_")?;
                } else {
                    write!(f, "{tile:>width$}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for PuzzleState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "PuzzleState[")?;
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            for (j, tile) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{tile}")?;
            }
        }
        write!(f, "]")
    }
}

/// Direction the blank slides in.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
pub enum Move {
    #[display("←")]
    Left,
    #[display("→")]
    Right,
    #[display("↑")]
    Up,
    #[display("↓")]
    Down,
}
impl Action for Move {}

impl Move {
    /// Expansion order. It fixes tie-breaking in FIFO frontiers, so traces
    /// depend on it.
    pub const ALL: [Move; 4] = [Move::Left, Move::Right, Move::Up, Move::Down];

    pub fn opposite(&self) -> Self {
        match self {
            Move::Left => Move::Right,
            Move::Right => Move::Left,
            Move::Up => Move::Down,
            Move::Down => Move::Up,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzleSpace {
    side: u8,
}

impl PuzzleSpace {
    pub fn new(side: usize) -> Self {
        debug_assert!((1..=MAX_SIDE).contains(&side));
        Self { side: side as u8 }
    }

    #[inline(always)]
    pub fn side(&self) -> usize {
        usize::from(self.side)
    }

    /// Where the blank at `(row, col)` lands after `a`, if it stays on the
    /// board.
    #[inline(always)]
    fn target(&self, (row, col): (usize, usize), a: &Move) -> Option<(usize, usize)> {
        let last = self.side() - 1;
        #[rustfmt::skip]
        let target = match a {
            Move::Left  => (col > 0   ).then(|| (row, col - 1)),
            Move::Right => (col < last).then(|| (row, col + 1)),
            Move::Up    => (row > 0   ).then(|| (row - 1, col)),
            Move::Down  => (row < last).then(|| (row + 1, col)),
        };
        target
    }
}

impl Space<PuzzleState, Move, Depth> for PuzzleSpace {
    #[inline(always)]
    fn apply(&self, state: &PuzzleState, action: &Move) -> Option<PuzzleState> {
        debug_assert_eq!(state.side(), self.side());
        let side = self.side();
        let blank = state.blank();
        let (row, col) = self.target(blank, action)?;

        Some(state.swapped(blank.0 * side + blank.1, row * side + col))
    }

    /// Slides the blank in every possible direction, in `Move::ALL` order.
    fn neighbours(&self, state: &PuzzleState) -> Neighbours<PuzzleState, Move> {
        #[cfg(feature = "coz_profile")]
        coz::scope!("StateExpansion");

        debug_assert_eq!(state.side(), self.side());
        let side = self.side();
        let blank = state.blank();
        let from = blank.0 * side + blank.1;

        let mut v = Neighbours::<PuzzleState, Move>::new();
        for action in Move::ALL {
            if let Some((row, col)) = self.target(blank, &action) {
                v.push((state.swapped(from, row * side + col), action));
            }
        }
        v
    }

    #[inline(always)]
    fn valid(&self, state: &PuzzleState) -> bool {
        state.side() == self.side() && state.is_permutation()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProblemError {
    #[error("Invalid {which} state: {e}")]
    InvalidState {
        which: &'static str,
        e: PuzzleParseError,
    },
    #[error("Initial state is {initial}x{initial} but goal state is {goal}x{goal}")]
    SideMismatch { initial: usize, goal: usize },
}

#[derive(Clone, Debug)]
pub struct PuzzleProblem {
    space: PuzzleSpace,
    start: PuzzleState,
    goal: PuzzleState,
}

impl PuzzleProblem {
    pub fn new(start: PuzzleState, goal: PuzzleState) -> Result<Self, ProblemError> {
        if start.side() != goal.side() {
            return Err(ProblemError::SideMismatch {
                initial: start.side(),
                goal: goal.side(),
            });
        }
        Ok(Self {
            space: PuzzleSpace::new(start.side()),
            start,
            goal,
        })
    }

    /// A problem towards the usual goal of the same side.
    pub fn with_solved_goal(start: PuzzleState) -> Self {
        let goal = match PuzzleState::solved(start.side()) {
            Ok(goal) => goal,
            Err(e) => unreachable!("Valid states have a valid side: {e}"),
        };
        Self {
            space: PuzzleSpace::new(start.side()),
            start,
            goal,
        }
    }

    /// Parses both states. A missing goal means the usual solved goal.
    pub fn parse(start: &str, goal: Option<&str>) -> Result<Self, ProblemError> {
        let start = PuzzleState::try_from(start)
            .map_err(|e| ProblemError::InvalidState { which: "initial", e })?;
        match goal {
            Some(goal) => {
                let goal = PuzzleState::try_from(goal)
                    .map_err(|e| ProblemError::InvalidState { which: "goal", e })?;
                Self::new(start, goal)
            }
            None => Ok(Self::with_solved_goal(start)),
        }
    }

    /// Whether the goal is reachable at all.
    ///
    /// Only half of all permutations are reachable from any given one; this
    /// compares the move-invariant parity of both states.
    pub fn is_solvable(&self) -> bool {
        self.start.parity() == self.goal.parity()
    }
}

impl Problem<PuzzleSpace, PuzzleState, Move, Depth> for PuzzleProblem {
    fn space(&self) -> &PuzzleSpace {
        &self.space
    }
    fn start(&self) -> &PuzzleState {
        &self.start
    }
    fn goal(&self) -> &PuzzleState {
        &self.goal
    }

    /// Scrambles the goal with a random walk that never undoes its last move.
    ///
    /// The result is always solvable, at most `moves` away from the goal.
    fn randomize<R: rand::Rng>(&self, r: &mut R, moves: usize) -> PuzzleProblem {
        let mut state = self.goal;
        let mut last: Option<Move> = None;

        for _ in 0..moves {
            let candidates: Neighbours<PuzzleState, Move> = self
                .space
                .neighbours(&state)
                .into_iter()
                .filter(|(_, a)| Some(a.opposite()) != last)
                .collect();
            if candidates.is_empty() {
                break;
            }
            let (s, a) = candidates[r.random_range(0..candidates.len())];
            state = s;
            last = Some(a);
        }

        PuzzleProblem {
            space: self.space.clone(),
            start: state,
            goal: self.goal,
        }
    }
}

impl std::fmt::Display for PuzzleProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Initial State:")?;
        write!(f, "{}", self.start)?;
        writeln!(f, "Goal State:")?;
        write!(f, "{}", self.goal)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use indoc::indoc;
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;
    use rustc_hash::FxHashSet;

    use super::*;

    fn state(s: &str) -> PuzzleState {
        PuzzleState::try_from(s).unwrap()
    }

    /// Every state within `max_depth` moves of `start`.
    fn reachable(start: PuzzleState, max_depth: usize) -> Vec<PuzzleState> {
        let space = PuzzleSpace::new(start.side());
        let mut seen = FxHashSet::from_iter([start]);
        let mut queue = VecDeque::from([(start, 0usize)]);
        let mut out = vec![];
        while let Some((s, d)) = queue.pop_front() {
            out.push(s);
            if d == max_depth {
                continue;
            }
            for (n, _) in space.neighbours(&s) {
                if seen.insert(n) {
                    queue.push_back((n, d + 1));
                }
            }
        }
        out
    }

    #[test]
    fn parse_formats() {
        let multiline = state(indoc! {"
            1 2 3
            4 5 6
            7 8 0
        "});
        assert_eq!(multiline, state("1 2 3/4 5 6/7 8 _"));
        assert_eq!(multiline, state("1,2,3/4,5,6/7,8,0"));
        assert_eq!(multiline, PuzzleState::solved(3).unwrap());
        assert_eq!(
            multiline,
            PuzzleState::from_rows(&[[1u8, 2, 3], [4, 5, 6], [7, 8, 0]]).unwrap()
        );
        assert_eq!(multiline.side(), 3);
        assert_eq!(multiline.at(1, 2), 6);
        assert_eq!(multiline.blank(), (2, 2));
    }

    #[test]
    fn parse_errors() {
        use PuzzleParseError::*;

        assert_eq!(PuzzleState::try_from(" \n/ "), Err(EmptyInput));
        assert_eq!(
            PuzzleState::try_from("1 2/x 0"),
            Err(InvalidCell {
                token: "x".to_string(),
                row: 1,
                col: 0
            })
        );
        assert_eq!(
            PuzzleState::try_from("1 2 3/0 4"),
            Err(RaggedRow {
                row: 0,
                len: 3,
                side: 2
            })
        );
        assert_eq!(
            PuzzleState::try_from("1 2/3 4"),
            Err(TileOutOfRange { tile: 4, side: 2 })
        );
        assert_eq!(
            PuzzleState::try_from("1 1/2 0"),
            Err(DuplicateTile { tile: 1 })
        );
        assert_eq!(
            PuzzleState::try_from("0/1/2/3/4/5"),
            Err(UnsupportedSide { side: 6 })
        );
        assert_eq!(
            PuzzleState::from_cells(2, &[1, 2, 0]),
            Err(WrongCellCount { len: 3, side: 2 })
        );
        assert_eq!(PuzzleState::solved(0), Err(UnsupportedSide { side: 0 }));
    }

    #[test]
    fn largest_side_fits_key() {
        let big = PuzzleState::solved(MAX_SIDE).unwrap();
        assert!(big.is_permutation());
        assert_eq!(big.blank(), (MAX_SIDE - 1, MAX_SIDE - 1));
        let space = PuzzleSpace::new(MAX_SIDE);
        let (left, _) = space.neighbours(&big)[0];
        assert_ne!(big.canonical_key(), left.canonical_key());
    }

    #[test]
    fn display() {
        assert_eq!(
            PuzzleState::solved(3).unwrap().to_string(),
            "1 2 3\n4 5 6\n7 8 _\n"
        );
        assert_eq!(
            PuzzleState::solved(4).unwrap().to_string().lines().last(),
            Some("13 14 15  _")
        );
        assert_eq!(
            format!("{:?}", state("1 2/0 3")),
            "PuzzleState[1 2/0 3]".to_string()
        );
        assert_eq!(format!("{}{}", Move::Left, Move::Down), "←↓");
    }

    #[test]
    fn goal_has_two_successors_left_then_up() {
        let goal = state("1 2 3/4 5 6/7 8 0");
        let space = PuzzleSpace::new(3);
        let successors = space.neighbours(&goal);

        assert_eq!(successors.len(), 2);
        assert_eq!(successors[0], (state("1 2 3/4 5 6/7 0 8"), Move::Left));
        assert_eq!(successors[1], (state("1 2 3/4 5 0/7 8 6"), Move::Up));
    }

    #[test]
    fn center_blank_has_four_successors_in_order() {
        let s = state("1 2 3/4 0 5/6 7 8");
        let actions: Vec<Move> = PuzzleSpace::new(3)
            .neighbours(&s)
            .into_iter()
            .map(|(_, a)| a)
            .collect();
        assert_eq!(actions, Move::ALL.to_vec());
    }

    #[test]
    fn successors_swap_the_blank_with_one_neighbour() {
        let space = PuzzleSpace::new(3);
        for s in reachable(PuzzleState::solved(3).unwrap(), 6) {
            let (blank_row, blank_col) = s.blank();
            for (n, a) in space.neighbours(&s) {
                assert!(space.valid(&n), "{n:?} is not a permutation");
                let changed: Vec<usize> = (0..s.num_cells())
                    .filter(|&i| s.cells()[i] != n.cells()[i])
                    .collect();
                assert_eq!(changed.len(), 2, "{s:?} -{a}-> {n:?}");
                assert!(changed.contains(&(blank_row * 3 + blank_col)));
                assert_eq!(space.apply(&s, &a), Some(n));
                assert_eq!(space.apply(&n, &a.opposite()), Some(s));
            }
        }
    }

    #[test]
    fn apply_stays_on_board() {
        let space = PuzzleSpace::new(3);
        let goal = PuzzleState::solved(3).unwrap();
        assert_eq!(space.apply(&goal, &Move::Right), None);
        assert_eq!(space.apply(&goal, &Move::Down), None);

        let single = PuzzleState::solved(1).unwrap();
        assert!(PuzzleSpace::new(1).neighbours(&single).is_empty());
    }

    #[test]
    fn canonical_keys_are_injective() {
        for (start, depth) in [
            (PuzzleState::solved(2).unwrap(), 20),
            (PuzzleState::solved(3).unwrap(), 8),
            (PuzzleState::solved(4).unwrap(), 6),
        ] {
            let states = reachable(start, depth);
            let keys: FxHashSet<CanonicalKey> =
                states.iter().map(|s| s.canonical_key()).collect();
            assert_eq!(keys.len(), states.len());
            for s in &states {
                let copy = PuzzleState::from_cells(s.side(), s.cells()).unwrap();
                assert_eq!(s.canonical_key(), copy.canonical_key());
            }
        }
        // 2x2 puzzles have 4!/2 reachable configurations.
        assert_eq!(reachable(PuzzleState::solved(2).unwrap(), 20).len(), 12);
    }

    #[test]
    fn solvability() {
        let solvable = PuzzleProblem::parse("1 2 3/5 0 6/4 7 8", None).unwrap();
        assert!(solvable.is_solvable());

        let swapped = PuzzleProblem::parse("2 1 3/4 5 6/7 8 0", None).unwrap();
        assert!(!swapped.is_solvable());

        let tiny = PuzzleProblem::parse("2 1/3 0", Some("1 2/3 0")).unwrap();
        assert!(!tiny.is_solvable());

        // The blank changes rows on even sides.
        let even = PuzzleProblem::parse(
            "1 2 3 4/5 6 7 8/9 10 11 0/13 14 15 12",
            None,
        )
        .unwrap();
        assert!(even.is_solvable());
    }

    #[test]
    fn side_mismatch() {
        assert_eq!(
            PuzzleProblem::parse("1 0/2 3", Some("1 2 3/4 5 6/7 8 0")).unwrap_err(),
            ProblemError::SideMismatch {
                initial: 2,
                goal: 3
            }
        );
        assert!(matches!(
            PuzzleProblem::parse("1 2 3/4 5 6/7 8 0", Some("1")),
            Err(ProblemError::InvalidState { which: "goal", .. })
        ));
    }

    #[test]
    fn randomize_is_reproducible_and_solvable() {
        let base = PuzzleProblem::with_solved_goal(PuzzleState::solved(4).unwrap());
        let a = base.randomize(&mut ChaCha8Rng::seed_from_u64(7), 30);
        let b = base.randomize(&mut ChaCha8Rng::seed_from_u64(7), 30);

        assert_eq!(a.start(), b.start());
        assert_eq!(a.goal(), base.goal());
        assert!(a.space().valid(a.start()));
        assert!(a.is_solvable());
        assert_ne!(a.start(), a.goal());
    }
}
