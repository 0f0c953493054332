//! Play a single game and show it move by move.

use crate::battle::{AgentSpec, GameKind};
use anyhow::Result;
use std::fmt::Display;
use std::io::Write;
use std::time::Duration;
use uct_core::{Game, Player};
use uct_gomoku::Gomoku;
use uct_mcts::{games::TicTacToe, play_match, SearchStats};

/// Settings for a single displayed game.
#[derive(Debug, Clone)]
pub struct PlayConfig {
    pub game: GameKind,
    pub board_size: usize,
    pub win_length: usize,
    pub first: AgentSpec,
    pub second: AgentSpec,
    pub seed: u64,
}

/// Play one game, writing every board and a timing summary to `out`.
pub fn run_play(config: &PlayConfig, out: &mut impl Write) -> Result<Option<Player>> {
    match config.game {
        GameKind::Tictactoe => play_on(&TicTacToe, config, out),
        GameKind::Gomoku => {
            let game = Gomoku::new(config.board_size)?.with_win_length(config.win_length)?;
            play_on(&game, config, out)
        }
    }
}

fn play_on<G>(game: &G, config: &PlayConfig, out: &mut impl Write) -> Result<Option<Player>>
where
    G: Game + 'static,
    G::State: Display,
    G::Move: Display,
{
    let mut first = config.first.build::<G>(config.seed);
    let mut second = config.second.build::<G>(config.seed.wrapping_add(1));

    writeln!(out, "{} (X) vs {} (O)\n", config.first, config.second)?;

    let record = play_match(game, first.as_mut(), second.as_mut())?;

    // Replay the record to show the board after every move
    let mut state = game.initial_state();
    for (ply, (player, mv)) in record.moves.iter().enumerate() {
        state = game.apply(&state, *mv)?;
        writeln!(out, "Move {}: {} plays {}", ply + 1, player, mv)?;
        writeln!(out, "{}", state)?;
    }

    match record.winner {
        Some(player) => writeln!(out, "Winner: {} after {} moves", player, record.plies())?,
        None => writeln!(out, "Draw after {} moves", record.plies())?,
    }
    writeln!(out, "Game time: {:.2} ms", record.elapsed.as_secs_f64() * 1000.0)?;

    for (seat, agent) in [("X", &first), ("O", &second)] {
        if let Some(stats) = agent.search_stats() {
            write_timing(out, &format!("{} {}", seat, agent.name()), stats)?;
        }
    }

    Ok(record.winner)
}

fn write_timing(out: &mut impl Write, label: &str, stats: &SearchStats) -> Result<()> {
    let ms = |d: Duration| d.as_secs_f64() * 1000.0;
    let share = |d: Duration| {
        if stats.total.is_zero() {
            0.0
        } else {
            d.as_secs_f64() / stats.total.as_secs_f64() * 100.0
        }
    };

    writeln!(out, "\nSearch timing for {}", label)?;
    writeln!(
        out,
        "  searches: {}, iterations: {}, largest tree: {} nodes, max depth: {}",
        stats.searches, stats.iterations, stats.tree_size, stats.max_depth
    )?;
    for (phase, d) in [
        ("selection", stats.selection),
        ("expansion", stats.expansion),
        ("simulation", stats.simulation),
        ("backpropagation", stats.backpropagation),
    ] {
        writeln!(out, "  {:<16} {:>10.2} ms ({:>5.1}%)", phase, ms(d), share(d))?;
    }
    writeln!(out, "  {:<16} {:>10.2} ms", "total", ms(stats.total))?;
    Ok(())
}
