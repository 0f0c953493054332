//! Simulation abstraction for MCTS.
//!
//! The `Simulator` trait is the seam between the search and the playout
//! strategy. The engine ships `RandomPlayout`, a pure uniform random
//! rollout; tests can substitute a scripted simulator to pin outcomes.

use rand::Rng;
use uct_core::{Game, GameError, Player, Result};

/// Outcome of one playout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Playout {
    /// Winner of the final state; `None` for a draw (or a capped playout).
    pub winner: Option<Player>,

    /// Number of moves played from the starting state.
    pub plies: usize,
}

/// Trait for playing a position out to an outcome.
///
/// The random source is passed in by the caller so that one seeded
/// generator drives the whole search.
pub trait Simulator<G: Game> {
    /// Play `state` out and report the winner.
    ///
    /// # Errors
    /// Propagates any `IllegalMove` raised by the game, and returns
    /// `NoLegalMoves` if a non-terminal state has no legal move.
    fn simulate<R: Rng + ?Sized>(&self, game: &G, state: &G::State, rng: &mut R) -> Result<Playout>;
}

/// Uniform random rollout.
///
/// Every ply picks a legal move uniformly at random, with no heuristic or
/// lookahead, until the state is terminal.
#[derive(Clone, Debug, Default)]
pub struct RandomPlayout {
    /// Optional ply cap; a playout that hits it scores as a draw.
    max_plies: Option<usize>,
}

impl RandomPlayout {
    /// Create an uncapped random playout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap playouts at `max_plies` moves.
    pub fn with_max_plies(max_plies: usize) -> Self {
        Self {
            max_plies: Some(max_plies),
        }
    }
}

impl<G: Game> Simulator<G> for RandomPlayout {
    fn simulate<R: Rng + ?Sized>(&self, game: &G, state: &G::State, rng: &mut R) -> Result<Playout> {
        let mut state = state.clone();
        let mut plies = 0;

        while !game.is_terminal(&state) {
            if self.max_plies.is_some_and(|cap| plies >= cap) {
                return Ok(Playout {
                    winner: None,
                    plies,
                });
            }

            let legal_moves = game.legal_moves(&state);
            if legal_moves.is_empty() {
                return Err(GameError::NoLegalMoves(format!("playout stuck after {} plies", plies)));
            }

            // Random move
            let mv = legal_moves[rng.gen_range(0..legal_moves.len())];
            state = game.apply(&state, mv)?;
            plies += 1;
        }

        Ok(Playout {
            winner: game.winner(&state),
            plies,
        })
    }
}
