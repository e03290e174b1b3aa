use std::fmt;

use log::{debug, warn};

use super::{
    render_grid, BasicResolutionRuleset, BoardError, Grid, LegalMoves, Move, RandomSource, ResolutionRuleset, Score,
    Tile, Transform,
};

/// Everything a ruleset may read or commit: the grid, the RNG and the score.
///
/// Kept apart from the ruleset so a [`Board`] can lend it mutably to its own
/// ruleset.
#[derive(Clone, Debug)]
pub struct BoardState {
    grid: Grid,
    rng: RandomSource,
    score: Score,
}

impl BoardState {
    /// An empty grid with a fresh generator. No tiles are spawned.
    pub fn new(width: usize, height: usize, seed: u64) -> Self {
        BoardState { grid: Grid::new(width, height), rng: RandomSource::new(seed), score: 0 }
    }

    #[inline]
    pub fn grid(&self) -> &Grid { &self.grid }

    #[inline]
    pub fn score(&self) -> Score { self.score }

    /// Install a resolved layout and credit its score.
    ///
    /// Panics when `resolved.values` does not cover the whole grid; a
    /// [`Transform`] from [`ResolutionRuleset::pre_transform`] always does.
    pub fn commit(&mut self, resolved: Transform) {
        let Transform { values, score_gain } = resolved;
        if let Err(err) = self.grid.replace(values) {
            panic!("cannot commit transform: {err}");
        }
        self.add_score(score_gain);
    }

    /// Credit merge score. The counter never goes down.
    pub fn add_score(&mut self, gain: Score) {
        self.score = self.score.saturating_add(gain);
    }

    /// Place `count` random tiles into empty cells.
    ///
    /// Walks a shuffled order of all cells, skipping occupied ones, and draws
    /// from [`SPAWN_POOL`](super::SPAWN_POOL) for each empty cell it visits. An
    /// empty draw leaves that cell alone and moves on; if the walk ends short,
    /// a new shuffled walk starts. Fails without touching the grid when fewer
    /// than `count` cells are empty.
    pub fn spawn(&mut self, count: usize) -> Result<(), BoardError> {
        let available = self.grid.count_empty();
        if available < count {
            return Err(BoardError::BoardFull { requested: count, available });
        }
        let mut remaining = count;
        while remaining > 0 {
            for pos in self.rng.shuffled_positions(self.grid.len()) {
                if self.grid.cell(pos).is_some() {
                    continue;
                }
                if let Some(value) = self.rng.draw_tile() {
                    self.grid.set_cell(pos, Some(value));
                    remaining -= 1;
                    if remaining == 0 {
                        break;
                    }
                }
            }
        }
        Ok(())
    }
}

/// A game of 2048: grid, score, seeded RNG and the ruleset that resolves moves.
///
/// ```
/// use p2048::engine::{Board, Move};
///
/// let mut board = Board::new(4, 4, 2, 7);
/// assert_eq!(board.count_empty(), 14);
/// for dir in Move::ALL {
///     if board.make_move(dir) {
///         break;
///     }
/// }
/// assert!(board.count_empty() <= 14);
/// ```
#[derive(Clone, Debug)]
pub struct Board<R = BasicResolutionRuleset> {
    state: BoardState,
    rules: R,
}

impl Board {
    /// A board with the standard ruleset and `start_squares` random tiles.
    pub fn new(width: usize, height: usize, start_squares: usize, seed: u64) -> Self {
        Board::with_rules(width, height, start_squares, BasicResolutionRuleset, seed)
    }
}

impl Default for Board {
    /// 4x4, two starting tiles, seed 0.
    fn default() -> Self {
        Board::new(4, 4, 2, 0)
    }
}

impl<R: ResolutionRuleset> Board<R> {
    /// A board with a custom ruleset. Spawns `start_squares` tiles right away;
    /// if they do not fit the failure is logged and the board starts as is.
    pub fn with_rules(width: usize, height: usize, start_squares: usize, rules: R, seed: u64) -> Self {
        let mut state = BoardState::new(width, height, seed);
        if let Err(err) = state.spawn(start_squares) {
            warn!("cannot seed starting tiles: {err}");
        }
        debug!("new {width}x{height} board, seed {seed}");
        Board { state, rules }
    }

    /// A board with an explicit starting layout. No tiles are spawned.
    pub fn from_grid(grid: Grid, rules: R, seed: u64) -> Self {
        Board { state: BoardState { grid, rng: RandomSource::new(seed), score: 0 }, rules }
    }

    /// Play `direction`. Returns `false`, changing nothing, when the move is illegal.
    pub fn make_move(&mut self, direction: Move) -> bool {
        let moved = self.rules.transform(&mut self.state, direction);
        if moved {
            debug!("moved {direction}, score {}", self.state.score);
        }
        moved
    }

    pub fn up(&mut self) -> bool { self.make_move(Move::Up) }

    pub fn down(&mut self) -> bool { self.make_move(Move::Down) }

    pub fn left(&mut self) -> bool { self.make_move(Move::Left) }

    pub fn right(&mut self) -> bool { self.make_move(Move::Right) }

    /// Legal directions and their score gains, computed from the current grid.
    pub fn possible_moves(&self) -> LegalMoves {
        self.rules.legal_moves(&self.state.grid)
    }

    /// True when no direction changes the board.
    pub fn is_game_over(&self) -> bool {
        self.possible_moves().is_empty()
    }

    #[inline]
    pub fn score(&self) -> Score { self.state.score }

    #[inline]
    pub fn width(&self) -> usize { self.state.grid.width() }

    #[inline]
    pub fn height(&self) -> usize { self.state.grid.height() }

    /// Seed the board's generator was created with.
    #[inline]
    pub fn seed(&self) -> u64 { self.state.rng.seed() }

    /// Tile at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Tile { self.state.grid.get(row, col) }

    /// Snapshot of every tile in row-major order.
    pub fn values(&self) -> Vec<Tile> { self.state.grid.values() }

    /// Count the number of empty cells on the board.
    pub fn count_empty(&self) -> usize { self.state.grid.count_empty() }

    /// The highest tile value present, if any.
    pub fn highest_tile(&self) -> Tile {
        self.state.grid.values().into_iter().flatten().max()
    }

    /// The ruleset in use.
    pub fn rules(&self) -> &R { &self.rules }

    /// Text rendering of the grid followed by the score line.
    pub fn render(&self) -> Result<String, BoardError> {
        render_grid(&self.state.grid, self.state.score)
    }
}

impl<R: ResolutionRuleset> fmt::Display for Board<R> {
    /// Fails with `fmt::Error` when a tile is too wide to display; use
    /// [`Board::render`] to get the underlying error.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render().map_err(|_| fmt::Error)?)
    }
}
