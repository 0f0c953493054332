//! Playing full games between two agents and tallying results.

use crate::{agent::Agent, search::SearchError};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::trace;
use uct_core::{Game, Player};

/// A finished game.
#[derive(Clone, Debug)]
pub struct MatchRecord<M> {
    /// Moves in play order with the player who made each.
    pub moves: Vec<(Player, M)>,

    /// Winner, `None` for a draw.
    pub winner: Option<Player>,

    /// Wall-clock time for the whole game.
    pub elapsed: Duration,
}

impl<M> MatchRecord<M> {
    pub fn plies(&self) -> usize {
        self.moves.len()
    }
}

/// Play one game from the initial state.
///
/// `first` moves whenever the opening player is to move, `second` otherwise.
pub fn play_match<G: Game>(
    game: &G,
    first: &mut dyn Agent<G>,
    second: &mut dyn Agent<G>,
) -> Result<MatchRecord<G::Move>, SearchError> {
    play_match_from(game, game.initial_state(), first, second)
}

/// Play a game to the end starting from `state`.
pub fn play_match_from<G: Game>(
    game: &G,
    mut state: G::State,
    first: &mut dyn Agent<G>,
    second: &mut dyn Agent<G>,
) -> Result<MatchRecord<G::Move>, SearchError> {
    let started = Instant::now();
    let opener = game.opening_player();
    let mut moves = Vec::new();

    while !game.is_terminal(&state) {
        let player = game.player_to_move(&state);
        let agent: &mut dyn Agent<G> = if player == opener { &mut *first } else { &mut *second };

        let mv = agent.choose_move(game, &state)?;
        trace!(%player, mv = ?mv, agent = %agent.name(), "Move played");

        state = game.apply(&state, mv)?;
        moves.push((player, mv));
    }

    Ok(MatchRecord {
        moves,
        winner: game.winner(&state),
        elapsed: started.elapsed(),
    })
}

/// Running win/draw counts over a series of games.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchTally {
    pub first_wins: usize,
    pub second_wins: usize,
    pub draws: usize,
    pub games: usize,
    pub total_ms: f64,
}

impl MatchTally {
    /// Count one game's outcome.
    pub fn record(&mut self, winner: Option<Player>, elapsed: Duration) {
        match winner {
            Some(Player::First) => self.first_wins += 1,
            Some(Player::Second) => self.second_wins += 1,
            None => self.draws += 1,
        }
        self.games += 1;
        self.total_ms += elapsed.as_secs_f64() * 1000.0;
    }

    /// Average wall-clock time per game in milliseconds.
    pub fn average_ms(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_ms / self.games as f64
        }
    }
}
