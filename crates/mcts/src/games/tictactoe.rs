//! Tic-tac-toe implementation for MCTS validation.
//!
//! Tic-tac-toe is a solved game where perfect play always results in a draw.
//! This makes it ideal for validating MCTS correctness:
//! - MCTS should never lose against a random opponent
//! - Two MCTS players should draw or split results evenly
//! - MCTS should take an immediate win when one is available

use std::fmt;
use uct_core::{Game, GameError, Player, Result};

/// Tic-tac-toe board state.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct TicTacToeState {
    /// Board: 9 cells, indexed 0-8 (row-major).
    /// ```text
    /// 0 | 1 | 2
    /// ---------
    /// 3 | 4 | 5
    /// ---------
    /// 6 | 7 | 8
    /// ```
    board: [Option<Player>; 9],

    /// Current player to move.
    current: Player,

    /// Cached winner (if any).
    winner: Option<Player>,
}

impl TicTacToeState {
    /// Create a new empty board with X to move.
    pub fn new() -> Self {
        Self {
            board: [None; 9],
            current: Player::First,
            winner: None,
        }
    }

    /// Get the current player to move.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Get the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Get the piece at a cell, if any.
    pub fn get(&self, cell: usize) -> Option<Player> {
        self.board.get(cell).copied().flatten()
    }

    /// Number of empty cells.
    pub fn empty_cells(&self) -> usize {
        self.board.iter().filter(|c| c.is_none()).count()
    }

    /// Check for a winner on the current board.
    fn check_winner(&self) -> Option<Player> {
        const LINES: [[usize; 3]; 8] = [
            [0, 1, 2], // top row
            [3, 4, 5], // middle row
            [6, 7, 8], // bottom row
            [0, 3, 6], // left column
            [1, 4, 7], // center column
            [2, 5, 8], // right column
            [0, 4, 8], // main diagonal
            [2, 4, 6], // anti-diagonal
        ];

        for line in LINES {
            if let Some(player) = self.board[line[0]] {
                if self.board[line[1]] == Some(player) && self.board[line[2]] == Some(player) {
                    return Some(player);
                }
            }
        }
        None
    }

    /// Check if the board is full (draw if no winner).
    fn is_full(&self) -> bool {
        self.board.iter().all(|c| c.is_some())
    }
}

impl Default for TicTacToeState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TicTacToeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "-----------")?;
            }
            for col in 0..3 {
                if col > 0 {
                    write!(f, "|")?;
                }
                match self.board[row * 3 + col] {
                    Some(player) => write!(f, " {} ", player)?,
                    None => write!(f, "   ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Tic-tac-toe move (cell index 0-8).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TicTacToeMove(pub u8);

impl TicTacToeMove {
    /// Get the row (0-2).
    pub fn row(self) -> u8 {
        self.0 / 3
    }

    /// Get the column (0-2).
    pub fn col(self) -> u8 {
        self.0 % 3
    }
}

impl fmt::Display for TicTacToeMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

/// Tic-tac-toe game implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct TicTacToe;

impl Game for TicTacToe {
    type State = TicTacToeState;
    type Move = TicTacToeMove;

    fn initial_state(&self) -> Self::State {
        TicTacToeState::new()
    }

    fn opening_player(&self) -> Player {
        Player::First
    }

    fn player_to_move(&self, state: &Self::State) -> Player {
        state.current
    }

    fn legal_moves(&self, state: &Self::State) -> Vec<Self::Move> {
        if state.winner.is_some() {
            return Vec::new();
        }
        state
            .board
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| TicTacToeMove(i as u8))
            .collect()
    }

    fn apply(&self, state: &Self::State, mv: Self::Move) -> Result<Self::State> {
        if self.is_terminal(state) {
            return Err(GameError::IllegalMove(format!("{}: game is over", mv)));
        }
        match state.board.get(mv.0 as usize) {
            None => return Err(GameError::IllegalMove(format!("cell {} is off the board", mv.0))),
            Some(Some(_)) => {
                return Err(GameError::IllegalMove(format!("{}: position already occupied", mv)))
            }
            Some(None) => {}
        }

        let mut new_state = state.clone();
        new_state.board[mv.0 as usize] = Some(state.current);
        new_state.current = state.current.opponent();
        new_state.winner = new_state.check_winner();
        Ok(new_state)
    }

    fn is_terminal(&self, state: &Self::State) -> bool {
        state.winner.is_some() || state.is_full()
    }

    fn winner(&self, state: &Self::State) -> Option<Player> {
        state.winner
    }
}
