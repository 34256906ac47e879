//! Tic-tac-toe with a perfect-play solver
//!
//! # Usage
//!
//! ```rust
//! use tictactoe::{minimax, Board};
//!
//! let mut board = Board::new();
//! while let Some(action) = minimax(&board) {
//!     board = board.result(action).unwrap();
//! }
//! assert_eq!(board.winner(), None);
//! ```

mod board;
mod minimax;

pub use board::{Action, Board, GameError, Player};
pub use minimax::{minimax, value};
