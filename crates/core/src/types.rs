//! Search domain types with enforced invariants.
//!
//! - Player: one of the two sides, with a total `opponent()` mapping
//! - Reward: per-playout credit in range [0, 1]

use serde::{Deserialize, Serialize};
use std::fmt;

/// One side of a two-player game.
///
/// `First` is the side that opens every game shipped in this workspace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// Get the opposing player.
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Board symbol for this player (`X` for the opener, `O` otherwise).
    pub fn symbol(self) -> char {
        match self {
            Player::First => 'X',
            Player::Second => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Reward credited to a node for one playout.
///
/// Invariant: value is in range [0, 1] where:
/// - 1 means the node's mover won the playout
/// - 0 means the node's mover lost
/// - 0.5 means a draw
///
/// # Example
/// ```
/// use uct_core::{Player, Reward};
///
/// let reward = Reward::for_mover(Player::First, Some(Player::First));
/// assert_eq!(reward, Reward::WIN);
/// assert_eq!(Reward::for_mover(Player::Second, None), Reward::DRAW);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Reward(f64);

impl Reward {
    /// Reward for a win.
    pub const WIN: Self = Self(1.0);

    /// Reward for a draw.
    pub const DRAW: Self = Self(0.5);

    /// Reward for a loss.
    pub const LOSS: Self = Self(0.0);

    /// Reward for `mover` given the playout winner (`None` is a draw).
    ///
    /// Compares against the absolute winner identity, so it does not depend
    /// on plies alternating strictly between the two players.
    pub fn for_mover(mover: Player, winner: Option<Player>) -> Self {
        match winner {
            None => Self::DRAW,
            Some(w) if w == mover => Self::WIN,
            Some(_) => Self::LOSS,
        }
    }

    /// Get the underlying value.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Reward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<Reward> for f64 {
    fn from(r: Reward) -> f64 {
        r.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::First.opponent(), Player::Second);
        assert_eq!(Player::Second.opponent(), Player::First);
        assert_eq!(Player::First.opponent().opponent(), Player::First);
    }

    #[test]
    fn test_player_display() {
        assert_eq!(Player::First.to_string(), "X");
        assert_eq!(Player::Second.to_string(), "O");
    }

    #[test]
    fn test_player_serde() {
        let json = serde_json::to_string(&Player::Second).unwrap();
        assert_eq!(json, "\"Second\"");
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Player::Second);
    }

    #[test]
    fn test_reward_for_mover() {
        assert_eq!(Reward::for_mover(Player::First, Some(Player::First)), Reward::WIN);
        assert_eq!(Reward::for_mover(Player::First, Some(Player::Second)), Reward::LOSS);
        assert_eq!(Reward::for_mover(Player::Second, Some(Player::First)), Reward::LOSS);
        assert_eq!(Reward::for_mover(Player::Second, None), Reward::DRAW);
    }

    #[test]
    fn test_reward_is_zero_sum() {
        for winner in [Some(Player::First), Some(Player::Second), None] {
            let mine = Reward::for_mover(Player::First, winner);
            let theirs = Reward::for_mover(Player::Second, winner);
            assert!((mine.get() + theirs.get() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_reward_constants() {
        assert_eq!(Reward::WIN.get(), 1.0);
        assert_eq!(Reward::DRAW.get(), 0.5);
        assert_eq!(Reward::LOSS.get(), 0.0);
        assert_eq!(f64::from(Reward::DRAW), 0.5);
    }
}
