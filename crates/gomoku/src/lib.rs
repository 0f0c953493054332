//! UCT Gomoku - Five in a row on a square board
//!
//! Players alternately place a stone on an empty cell. The first to line up
//! `win_length` stones horizontally, vertically or diagonally wins; a full
//! board with no line is a draw. Board size and win length are configurable,
//! the classic game being 15×15 with five in a row.

mod board;
mod game_impl;
mod moves;

pub use board::GomokuState;
pub use game_impl::{Gomoku, DEFAULT_BOARD_SIZE, DEFAULT_WIN_LENGTH, MAX_BOARD_SIZE};
pub use moves::GomokuMove;
