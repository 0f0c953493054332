//! Implementation of the UCT Game trait for Gomoku.

use crate::{GomokuMove, GomokuState};
use uct_core::{Game, GameError, Player, Result};

pub const DEFAULT_BOARD_SIZE: usize = 15;
pub const DEFAULT_WIN_LENGTH: usize = 5;

/// Largest supported board; coordinates must fit a `u8`.
pub const MAX_BOARD_SIZE: usize = 32;

/// Gomoku rules for a given board size and win length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gomoku {
    size: usize,
    win_length: usize,
}

impl Gomoku {
    /// Gomoku on a `size`×`size` board.
    ///
    /// The win length is five, or the board size if the board is smaller.
    ///
    /// # Errors
    /// `InvalidBoard` if `size` is zero or above [`MAX_BOARD_SIZE`].
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidBoard {
                size,
                reason: "board must have at least one cell".to_string(),
            });
        }
        if size > MAX_BOARD_SIZE {
            return Err(GameError::InvalidBoard {
                size,
                reason: format!("board may not exceed {}x{}", MAX_BOARD_SIZE, MAX_BOARD_SIZE),
            });
        }
        Ok(Self {
            size,
            win_length: DEFAULT_WIN_LENGTH.min(size),
        })
    }

    /// Require `win_length` stones in a row instead.
    ///
    /// # Errors
    /// `InvalidBoard` if `win_length` is zero or longer than the board.
    pub fn with_win_length(self, win_length: usize) -> Result<Self> {
        if win_length == 0 || win_length > self.size {
            return Err(GameError::InvalidBoard {
                size: self.size,
                reason: format!("win length {} does not fit the board", win_length),
            });
        }
        Ok(Self { win_length, ..self })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }
}

impl Default for Gomoku {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            win_length: DEFAULT_WIN_LENGTH,
        }
    }
}

impl Game for Gomoku {
    type State = GomokuState;
    type Move = GomokuMove;

    fn initial_state(&self) -> GomokuState {
        GomokuState::empty(self.size, self.win_length)
    }

    fn opening_player(&self) -> Player {
        Player::First
    }

    fn player_to_move(&self, state: &GomokuState) -> Player {
        state.to_move()
    }

    fn legal_moves(&self, state: &GomokuState) -> Vec<GomokuMove> {
        if state.is_over() {
            return Vec::new();
        }
        state.empty_cells().collect()
    }

    fn apply(&self, state: &GomokuState, mv: GomokuMove) -> Result<GomokuState> {
        if state.is_over() {
            return Err(GameError::IllegalMove(format!("{}: game is over", mv)));
        }
        if !state.contains(mv) {
            return Err(GameError::IllegalMove(format!(
                "{} is off the {}x{} board",
                mv, state.size(), state.size()
            )));
        }
        if !state.is_empty_at(mv) {
            return Err(GameError::IllegalMove(format!("{}: position already occupied", mv)));
        }

        let mut next = state.clone();
        next.place(mv);
        Ok(next)
    }

    fn is_terminal(&self, state: &GomokuState) -> bool {
        state.is_over()
    }

    fn winner(&self, state: &GomokuState) -> Option<Player> {
        state.winner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &Gomoku, moves: &[(u8, u8)]) -> GomokuState {
        moves.iter().fold(game.initial_state(), |state, &(row, col)| {
            game.apply(&state, GomokuMove::new(row, col)).unwrap()
        })
    }

    #[test]
    fn test_default_is_fifteen_by_fifteen_five_in_a_row() {
        let game = Gomoku::default();
        assert_eq!(game.size(), 15);
        assert_eq!(game.win_length(), 5);
        assert_eq!(game, Gomoku::new(15).unwrap());
        assert_eq!(game.legal_moves(&game.initial_state()).len(), 225);
    }

    #[test]
    fn test_invalid_sizes() {
        assert!(matches!(Gomoku::new(0), Err(GameError::InvalidBoard { size: 0, .. })));
        assert!(matches!(Gomoku::new(33), Err(GameError::InvalidBoard { size: 33, .. })));
        assert!(Gomoku::new(32).is_ok());
    }

    #[test]
    fn test_small_board_shrinks_win_length() {
        assert_eq!(Gomoku::new(3).unwrap().win_length(), 3);
        assert_eq!(Gomoku::new(1).unwrap().win_length(), 1);
    }

    #[test]
    fn test_win_length_validation() {
        let game = Gomoku::new(7).unwrap();
        assert!(game.with_win_length(0).is_err());
        assert!(game.with_win_length(8).is_err());
        assert_eq!(game.with_win_length(4).unwrap().win_length(), 4);
    }

    #[test]
    fn test_five_in_a_row_wins() {
        let game = Gomoku::default();
        let state = play(
            &game,
            &[(7, 3), (8, 3), (7, 4), (8, 4), (7, 5), (8, 5), (7, 6), (8, 6), (7, 7)],
        );
        assert!(game.is_terminal(&state));
        assert_eq!(game.winner(&state), Some(Player::First));
        assert!(game.legal_moves(&state).is_empty());
    }

    #[test]
    fn test_four_is_not_enough() {
        let game = Gomoku::default();
        let state = play(&game, &[(7, 3), (8, 3), (7, 4), (8, 4), (7, 5), (8, 5), (7, 6)]);
        assert!(!game.is_terminal(&state));
        assert_eq!(game.winner(&state), None);
    }

    #[test]
    fn test_occupied_cell_is_illegal() {
        let game = Gomoku::default();
        let state = play(&game, &[(7, 7)]);
        let err = game.apply(&state, GomokuMove::new(7, 7)).unwrap_err();
        assert_eq!(err, GameError::IllegalMove("(7, 7): position already occupied".to_string()));
    }

    #[test]
    fn test_off_board_is_illegal() {
        let game = Gomoku::new(9).unwrap();
        let result = game.apply(&game.initial_state(), GomokuMove::new(9, 0));
        assert!(matches!(result, Err(GameError::IllegalMove(_))));
    }

    #[test]
    fn test_move_after_win_is_illegal() {
        let game = Gomoku::new(3).unwrap();
        let state = play(&game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(game.winner(&state), Some(Player::First));
        assert!(game.apply(&state, GomokuMove::new(2, 2)).is_err());
    }

    #[test]
    fn test_full_board_is_a_draw() {
        let game = Gomoku::new(3).unwrap();
        // X O X
        // X O O
        // O X X
        let state = play(
            &game,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        assert!(game.is_terminal(&state));
        assert_eq!(game.winner(&state), None);
    }

    #[test]
    fn test_single_cell_board() {
        let game = Gomoku::new(1).unwrap();
        let state = game.initial_state();
        assert_eq!(game.legal_moves(&state), vec![GomokuMove::new(0, 0)]);

        let next = game.apply(&state, GomokuMove::new(0, 0)).unwrap();
        assert!(game.is_terminal(&next));
        assert_eq!(game.winner(&next), Some(Player::First));
    }

    #[test]
    fn test_apply_keeps_old_state() {
        let game = Gomoku::default();
        let state = game.initial_state();
        let next = game.apply(&state, GomokuMove::new(0, 0)).unwrap();

        assert_eq!(state.stones(), 0);
        assert_eq!(next.stones(), 1);
        assert_eq!(game.player_to_move(&next), Player::Second);
    }
}
