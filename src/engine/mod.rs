//! Game core: grid storage, merge resolution, spawning and rendering.
//!
//! The [`Board`] is the only mutable object. It owns a [`Grid`], a seeded
//! [`RandomSource`] and a score counter (together a [`BoardState`]) plus a
//! [`ResolutionRuleset`] that computes what a move does. Rulesets never keep
//! game state of their own; they read the grid and hand back new values.

mod board;
mod error;
mod grid;
mod random;
mod render;
mod rules;

pub use board::{Board, BoardState};
pub use error::BoardError;
pub use grid::Grid;
pub use random::{fresh_seed, RandomSource, SPAWN_POOL};
pub use render::{format_square, render_grid, EMPTY_CELL, MAX_DISPLAY_VALUE};
pub use rules::{BasicResolutionRuleset, LegalMoves, ResolutionRuleset, Transform};

use std::fmt;

/// A single cell: `None` when empty, otherwise a power of two (2, 4, 8, ...).
pub type Tile = Option<u64>;
/// Score accumulated from merges.
pub type Score = u64;

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Every direction, in a stable order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// True when the move works on columns rather than rows.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Move::Up | Move::Down)
    }

    /// True when lines are reversed before resolving, so tiles end up at
    /// the low-index end of each row or column.
    #[inline]
    pub fn is_reversed(self) -> bool {
        matches!(self, Move::Up | Move::Left)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
        };
        f.write_str(name)
    }
}
