//! Benchmark grid: iteration budgets × game counts for two fixed matchups.

use crate::battle::{run_battle, AgentSpec, BattleConfig, GameKind};
use anyhow::Result;
use serde::Serialize;
use tracing::info;
use uct_mcts::MctsConfig;

/// Settings for an experiment grid.
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    pub game: GameKind,
    pub board_size: usize,
    pub win_length: usize,
    pub iterations: Vec<usize>,
    pub game_counts: Vec<usize>,

    /// Search settings for every MCTS seat; `iterations` is overridden per row.
    pub mcts: MctsConfig,

    pub seed: u64,
    pub parallel: bool,
}

/// One cell of the grid.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentRow {
    pub matchup: String,
    pub iterations: usize,
    pub games: usize,
    pub first_wins: usize,
    pub second_wins: usize,
    pub draws: usize,
    pub average_ms: f64,
}

/// Run "MCTS vs Random" and "MCTS vs MCTS" for every budget and game count.
pub fn run_experiment(config: &ExperimentConfig) -> Result<Vec<ExperimentRow>> {
    let mut rows = Vec::new();

    for &iterations in &config.iterations {
        let mcts = AgentSpec::with_config(MctsConfig {
            iterations,
            ..config.mcts.clone()
        });
        let matchups = [
            ("MCTS vs Random", mcts.clone(), AgentSpec::random()),
            ("MCTS vs MCTS", mcts.clone(), mcts),
        ];

        for (name, first, second) in matchups {
            for &games in &config.game_counts {
                info!(matchup = name, iterations, games, "Running experiment cell");

                let report = run_battle(&BattleConfig {
                    game: config.game,
                    board_size: config.board_size,
                    win_length: config.win_length,
                    first: first.clone(),
                    second: second.clone(),
                    games,
                    seed: config.seed,
                    parallel: config.parallel,
                })?;

                rows.push(ExperimentRow {
                    matchup: name.to_string(),
                    iterations,
                    games,
                    first_wins: report.tally.first_wins,
                    second_wins: report.tally.second_wins,
                    draws: report.tally.draws,
                    average_ms: report.tally.average_ms(),
                });
            }
        }
    }

    Ok(rows)
}

pub fn print_table(rows: &[ExperimentRow]) {
    println!(
        "{:<16} {:>10} {:>6} {:>12} {:>10} {:>10} {:>6}",
        "Matchup", "Iterations", "Games", "Avg ms/game", "1st wins", "2nd wins", "Draws"
    );
    println!("{}", "-".repeat(76));
    for row in rows {
        println!(
            "{:<16} {:>10} {:>6} {:>12.2} {:>10} {:>10} {:>6}",
            row.matchup,
            row.iterations,
            row.games,
            row.average_ms,
            row.first_wins,
            row.second_wins,
            row.draws
        );
    }
}
