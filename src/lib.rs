//! A computer opponent for the board game 'Connect 4'
//!
//! The opponent looks a fixed number of moves ahead with minimax search and
//! alpha-beta pruning, and judges the positions it reaches with a heuristic
//! that rewards open lines and central pieces.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::{board::Board, search::Searcher, Player};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = Board::from_moves("")?;
//! let mut searcher = Searcher::new(Player::Yellow);
//! let best_move = searcher.find_best_move(&mut board, 4);
//!
//! assert_eq!(best_move, Some(3));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod error;

pub mod evaluation;

pub mod search;

pub mod game;

pub mod arena;


pub use board::{Board, Cell, Player};
pub use error::{ArenaError, ConfigError, MoveError};
pub use game::{Difficulty, Game, GameConfig, GameStatus, MoveOutcome};
pub use search::Searcher;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of pieces in a line needed to win
pub const WIN_LENGTH: usize = 4;

/// The deepest search a game can be configured with
pub const MAX_DEPTH: usize = 10;

/// The unbounded score of a won position
pub const INFINITY: i32 = i32::MAX;

/// The number of distinct lines of `WIN_LENGTH` cells on the board
pub const NUM_WINDOWS: usize = HEIGHT * (WIDTH - WIN_LENGTH + 1)
    + (HEIGHT - WIN_LENGTH + 1) * WIDTH
    + 2 * (HEIGHT - WIN_LENGTH + 1) * (WIDTH - WIN_LENGTH + 1);

// a line must fit the board in every orientation
const_assert!(WIN_LENGTH <= WIDTH && WIN_LENGTH <= HEIGHT);
// the evaluator's threat weights are tuned for lines of four
const_assert_eq!(WIN_LENGTH, 4);
// the evaluator favours three centre columns
const_assert!(WIDTH >= 3);
