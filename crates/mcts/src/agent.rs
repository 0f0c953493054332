//! Move-choosing agents.
//!
//! An [`Agent`] picks a move for whichever player is to move. Two are
//! provided: [`MctsAgent`] searches with a fixed iteration budget and
//! [`RandomAgent`] plays uniformly at random.

use crate::{
    config::MctsConfig,
    search::{Mcts, SearchError, SearchStats},
    simulation::{RandomPlayout, Simulator},
};
use rand::Rng;
use uct_core::Game;

/// Anything that can choose a move in a position.
pub trait Agent<G: Game> {
    /// Short human-readable description, e.g. `MCTS (iter=1000)`.
    fn name(&self) -> String;

    /// Choose a move for the player to move in `state`.
    ///
    /// # Errors
    /// `NoLegalMoveToRecommend` if `state` is terminal.
    fn choose_move(&mut self, game: &G, state: &G::State) -> Result<G::Move, SearchError>;

    /// Search statistics accumulated so far, for agents that search.
    fn search_stats(&self) -> Option<&SearchStats> {
        None
    }
}

/// Agent backed by a fresh MCTS search for every move.
pub struct MctsAgent<G: Game, S: Simulator<G>, R: Rng> {
    mcts: Mcts<G, S, R>,
    stats: SearchStats,
}

impl<G: Game, R: Rng> MctsAgent<G, RandomPlayout, R> {
    /// Random-rollout MCTS agent with the given iteration budget.
    pub fn with_iterations(iterations: usize, rng: R) -> Self {
        Self::new(Mcts::new(
            MctsConfig::with_iterations(iterations),
            RandomPlayout::new(),
            rng,
        ))
    }
}

impl<G: Game, S: Simulator<G>, R: Rng> MctsAgent<G, S, R> {
    pub fn new(mcts: Mcts<G, S, R>) -> Self {
        Self {
            mcts,
            stats: SearchStats::default(),
        }
    }

    /// Stats accumulated over every search this agent ran.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

impl<G: Game, S: Simulator<G>, R: Rng> Agent<G> for MctsAgent<G, S, R> {
    fn name(&self) -> String {
        format!("MCTS (iter={})", self.mcts.config().iterations)
    }

    fn choose_move(&mut self, game: &G, state: &G::State) -> Result<G::Move, SearchError> {
        let result = self.mcts.search(game, state)?;
        self.stats.accumulate(&result.stats);
        Ok(result.best_move)
    }

    fn search_stats(&self) -> Option<&SearchStats> {
        Some(&self.stats)
    }
}

/// Agent that picks a legal move uniformly at random.
pub struct RandomAgent<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomAgent<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<G: Game, R: Rng> Agent<G> for RandomAgent<R> {
    fn name(&self) -> String {
        "Random".to_string()
    }

    fn choose_move(&mut self, game: &G, state: &G::State) -> Result<G::Move, SearchError> {
        let moves = game.legal_moves(state);
        if moves.is_empty() {
            return Err(SearchError::NoLegalMoveToRecommend);
        }
        Ok(moves[self.rng.gen_range(0..moves.len())])
    }
}
