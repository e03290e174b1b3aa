//! p2048: the 2048 sliding-tile puzzle for the terminal
//!
//! This crate provides:
//! - A `Board` that owns a grid, a seeded RNG and the score (`engine` module)
//! - A pluggable `ResolutionRuleset` with the standard rules as `BasicResolutionRuleset`
//! - A fixed-width text rendering of the board
//! - TOML game settings (`config`) and a line-oriented interactive loop (`shell`)
//!
//! Quick start:
//! ```
//! use p2048::engine::{Board, Move};
//!
//! // Deterministic 4x4 board with two starting tiles
//! let mut board = Board::new(4, 4, 2, 42);
//!
//! // Legal directions and what each would score right now
//! let moves = board.possible_moves();
//! assert!(!moves.is_empty());
//!
//! // Illegal moves are no-ops; legal ones merge, score and spawn a tile
//! let dir = *moves.keys().next().unwrap();
//! assert!(board.make_move(dir));
//! println!("{}", board);
//! ```
//!
//! Custom rules plug in by implementing `transform_line`:
//! ```
//! use p2048::engine::{Board, ResolutionRuleset, Score, Tile};
//!
//! /// Slides tiles but never merges them.
//! struct NoMerge;
//!
//! impl ResolutionRuleset for NoMerge {
//!     fn transform_line(&self, line: &[Tile]) -> (Vec<Tile>, Score) {
//!         let tiles: Vec<Tile> = line.iter().copied().filter(Option::is_some).collect();
//!         let mut out = vec![None; line.len() - tiles.len()];
//!         out.extend(tiles);
//!         (out, 0)
//!     }
//! }
//!
//! let mut board = Board::with_rules(4, 4, 2, NoMerge, 1);
//! for _ in 0..8 {
//!     board.left();
//!     board.right();
//! }
//! assert_eq!(board.score(), 0);
//! ```
//!
pub mod config;
pub mod engine;
pub mod shell;
