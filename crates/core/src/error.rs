use thiserror::Error;

/// Errors raised by game adapters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Illegal move: {0}")]
    IllegalMove(String),

    #[error("Invalid board size {size}: {reason}")]
    InvalidBoard { size: usize, reason: String },

    /// A position that is not terminal yet offers no legal move.
    #[error("No legal moves in a non-terminal position: {0}")]
    NoLegalMoves(String),
}

/// Convenience Result type for game operations
pub type Result<T> = std::result::Result<T, GameError>;
