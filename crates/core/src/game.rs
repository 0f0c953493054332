use crate::{Player, Result};
use std::fmt::Debug;
use std::hash::Hash;

/// A game abstraction for tree search.
///
/// This trait defines the interface that any game must implement to be
/// searched by the UCT engine. It covers two-player, perfect-information,
/// zero-sum, deterministic games with a finite move set (tic-tac-toe,
/// five-in-a-row, ...). The engine never looks inside a state; every rule
/// lives behind these methods.
///
/// `legal_moves` and `apply` must be pure functions of their inputs, so that
/// replaying the same move sequence reproduces the same state.
pub trait Game: Clone + Send + Sync {
    /// The game state (e.g., a board position plus the side to move)
    type State: Clone + Send;

    /// A move (e.g., the cell a stone is placed on)
    type Move: Clone + Copy + Send + Eq + Hash + Debug;

    /// Returns the initial game state
    fn initial_state(&self) -> Self::State;

    /// The player who moves first from `initial_state`
    fn opening_player(&self) -> Player;

    /// The player whose turn it is in `state`
    fn player_to_move(&self, state: &Self::State) -> Player;

    /// Returns all legal moves from the given state.
    ///
    /// Empty if and only if the state is terminal.
    fn legal_moves(&self, state: &Self::State) -> Vec<Self::Move>;

    /// Applies a move, returning a new state (immutable operation).
    ///
    /// # Errors
    /// Returns `GameError::IllegalMove` if `mv` is not legal in `state`.
    fn apply(&self, state: &Self::State, mv: Self::Move) -> Result<Self::State>;

    /// Returns true if the game has ended (win or draw)
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// The winner of a finished game; `None` for a draw or an unfinished game
    fn winner(&self, state: &Self::State) -> Option<Player>;
}
