//! Test game implementations for MCTS validation.
//!
//! Small solved games used to verify search correctness before running
//! on larger boards like five-in-a-row.

pub mod tictactoe;

pub use tictactoe::{TicTacToe, TicTacToeMove, TicTacToeState};
