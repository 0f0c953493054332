//! Battles: many seeded games between two configured agents.

use anyhow::{Context, Result};
use clap::ValueEnum;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use uct_core::{Game, Player};
use uct_gomoku::Gomoku;
use uct_mcts::{
    games::TicTacToe, play_match, Agent, MatchTally, Mcts, MctsAgent, MctsConfig, RandomAgent, RandomPlayout,
};

/// Which game to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    Gomoku,
    Tictactoe,
}

/// Which kind of agent occupies a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Mcts,
    Random,
}

/// One seat's agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSpec {
    pub kind: AgentKind,

    /// Search settings; ignored by random agents.
    pub config: MctsConfig,
}

impl AgentSpec {
    pub fn mcts(iterations: usize) -> Self {
        Self::with_config(MctsConfig::with_iterations(iterations))
    }

    pub fn with_config(config: MctsConfig) -> Self {
        Self {
            kind: AgentKind::Mcts,
            config,
        }
    }

    pub fn random() -> Self {
        Self {
            kind: AgentKind::Random,
            config: MctsConfig::default(),
        }
    }

    /// Build a fresh agent seeded with `seed`.
    pub fn build<G: Game + 'static>(&self, seed: u64) -> Box<dyn Agent<G>> {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        match self.kind {
            AgentKind::Mcts => Box::new(MctsAgent::new(Mcts::new(
                self.config.clone(),
                RandomPlayout::new(),
                rng,
            ))),
            AgentKind::Random => Box::new(RandomAgent::new(rng)),
        }
    }
}

impl Display for AgentSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            AgentKind::Mcts => write!(f, "MCTS (iter={})", self.config.iterations),
            AgentKind::Random => write!(f, "Random"),
        }
    }
}

/// Settings shared by every game of a battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleConfig {
    pub game: GameKind,

    /// Gomoku board size; tic-tac-toe is always 3×3.
    pub board_size: usize,

    /// Gomoku stones in a row needed to win.
    pub win_length: usize,

    pub first: AgentSpec,
    pub second: AgentSpec,
    pub games: usize,
    pub seed: u64,
    pub parallel: bool,
}

impl BattleConfig {
    /// Seed of the `index`-th game.
    pub fn game_seed(&self, index: usize) -> u64 {
        self.seed.wrapping_add(index as u64 * 1000)
    }
}

/// One finished game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameReport {
    pub index: usize,
    pub seed: u64,
    pub winner: Option<Player>,
    pub plies: usize,
    pub elapsed_ms: f64,
    pub moves: Vec<String>,
}

/// Everything a battle produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleReport {
    pub config: BattleConfig,
    pub games: Vec<GameReport>,
    pub tally: MatchTally,
    pub wall_ms: f64,
}

impl BattleReport {
    /// Write the report as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = File::create(path).with_context(|| format!("Failed to create report file: {:?}", path))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)
            .with_context(|| format!("Failed to write report to {:?}", path))?;
        Ok(())
    }

    pub fn print_summary(&self) {
        let tally = &self.tally;
        let pct = |n: usize| {
            if tally.games == 0 {
                0.0
            } else {
                n as f64 / tally.games as f64 * 100.0
            }
        };

        println!("\n================================================");
        println!("{} vs {}", self.config.first, self.config.second);
        println!("================================================");
        println!("First player wins:  {} ({:.1}%)", tally.first_wins, pct(tally.first_wins));
        println!("Second player wins: {} ({:.1}%)", tally.second_wins, pct(tally.second_wins));
        println!("Draws:              {} ({:.1}%)", tally.draws, pct(tally.draws));
        println!("------------------------------------------------");
        println!("Games: {}, average game time: {:.2} ms", tally.games, tally.average_ms());
        println!("Wall time: {:.2} s", self.wall_ms / 1000.0);
    }
}

/// Play every game of a battle for the configured game.
pub fn run_battle(config: &BattleConfig) -> Result<BattleReport> {
    match config.game {
        GameKind::Tictactoe => run_battle_on(&TicTacToe, config),
        GameKind::Gomoku => {
            let game = Gomoku::new(config.board_size)?.with_win_length(config.win_length)?;
            run_battle_on(&game, config)
        }
    }
}

/// Play every game of a battle on `game`.
pub fn run_battle_on<G>(game: &G, config: &BattleConfig) -> Result<BattleReport>
where
    G: Game + 'static,
    G::Move: Display,
{
    info!(
        game = ?config.game,
        first = %config.first,
        second = %config.second,
        games = config.games,
        seed = config.seed,
        parallel = config.parallel,
        "Starting battle"
    );
    let started = Instant::now();

    let play = |index: usize| play_one(game, config, index);
    let games: Vec<GameReport> = if config.parallel {
        (0..config.games).into_par_iter().map(play).collect::<Result<_>>()?
    } else {
        (0..config.games).map(play).collect::<Result<_>>()?
    };

    let mut tally = MatchTally::default();
    for report in &games {
        tally.record(report.winner, Duration::from_secs_f64(report.elapsed_ms / 1000.0));
    }

    let wall_ms = started.elapsed().as_secs_f64() * 1000.0;
    info!(
        first_wins = tally.first_wins,
        second_wins = tally.second_wins,
        draws = tally.draws,
        wall_ms,
        "Battle complete"
    );

    Ok(BattleReport {
        config: config.clone(),
        games,
        tally,
        wall_ms,
    })
}

fn play_one<G>(game: &G, config: &BattleConfig, index: usize) -> Result<GameReport>
where
    G: Game + 'static,
    G::Move: Display,
{
    let seed = config.game_seed(index);
    let mut first = config.first.build::<G>(seed);
    let mut second = config.second.build::<G>(seed.wrapping_add(1));

    let record = play_match(game, first.as_mut(), second.as_mut())
        .with_context(|| format!("Game {} (seed {}) failed", index, seed))?;

    debug!(
        index,
        seed,
        winner = ?record.winner,
        plies = record.plies(),
        "Game finished"
    );

    Ok(GameReport {
        index,
        seed,
        winner: record.winner,
        plies: record.plies(),
        elapsed_ms: record.elapsed.as_secs_f64() * 1000.0,
        moves: record.moves.iter().map(|(_, mv)| mv.to_string()).collect(),
    })
}
