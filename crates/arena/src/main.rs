//! Arena for UCT agents.
//!
//! Battles two agents over many seeded games, runs an iteration-budget
//! experiment grid, or plays a single game on screen with a per-phase
//! timing breakdown of the searches.

mod battle;
mod experiment;
mod play;

use anyhow::{Context, Result};
use battle::{run_battle, AgentKind, AgentSpec, BattleConfig, GameKind};
use clap::{Args, Parser, Subcommand, ValueEnum};
use experiment::{print_table, run_experiment, ExperimentConfig};
use play::{run_play, PlayConfig};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;
use uct_gomoku::DEFAULT_WIN_LENGTH;
use uct_mcts::{Expansion, FinalMoveRule, MctsConfig};

/// UCT Monte Carlo Tree Search arena.
#[derive(Parser)]
#[command(name = "mcts-arena")]
#[command(about = "Pit MCTS and random agents against each other on tic-tac-toe and Gomoku")]
struct Cli {
    /// Log level used when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

/// Game selection shared by every subcommand.
#[derive(Args, Debug, Clone)]
struct GameArgs {
    /// Game to play.
    #[arg(long, value_enum, default_value = "gomoku")]
    game: GameKind,

    /// Gomoku board size.
    #[arg(long, default_value = "15")]
    size: usize,

    /// Gomoku stones in a row needed to win [default: 5, or the board size if smaller].
    #[arg(long)]
    win_length: Option<usize>,
}

impl GameArgs {
    /// Tic-tac-toe ignores the Gomoku board options.
    fn board(&self) -> (usize, usize) {
        match self.game {
            GameKind::Tictactoe => (3, 3),
            GameKind::Gomoku => {
                let win_length = self.win_length.unwrap_or(DEFAULT_WIN_LENGTH.min(self.size));
                (self.size, win_length)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExpansionArg {
    Eager,
    Lazy,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FinalMoveArg {
    MostVisits,
    HighestWinRate,
}

/// Search settings shared by every MCTS seat.
#[derive(Args, Debug, Clone)]
struct SearchArgs {
    /// UCT exploration constant.
    #[arg(long, default_value_t = std::f64::consts::SQRT_2)]
    exploration: f64,

    /// Expansion discipline.
    #[arg(long, value_enum, default_value = "eager")]
    expansion: ExpansionArg,

    /// How the final move is picked among the root's children.
    #[arg(long, value_enum, default_value = "most-visits")]
    final_move: FinalMoveArg,
}

impl SearchArgs {
    fn config(&self, iterations: usize) -> MctsConfig {
        let expansion = match self.expansion {
            ExpansionArg::Eager => Expansion::Eager,
            ExpansionArg::Lazy => Expansion::Lazy,
        };
        let final_move = match self.final_move {
            FinalMoveArg::MostVisits => FinalMoveRule::MostVisits,
            FinalMoveArg::HighestWinRate => FinalMoveRule::HighestWinRate,
        };
        MctsConfig::with_iterations(iterations)
            .with_exploration(self.exploration)
            .with_expansion(expansion)
            .with_final_move(final_move)
    }
}

/// The two seats of a game.
#[derive(Args, Debug, Clone)]
struct SeatArgs {
    /// Agent playing first (X).
    #[arg(long, value_enum, default_value = "mcts")]
    first: AgentKind,

    /// Agent playing second (O).
    #[arg(long, value_enum, default_value = "random")]
    second: AgentKind,

    /// MCTS iterations per move for the first player.
    #[arg(long, default_value = "1000")]
    first_iterations: usize,

    /// MCTS iterations per move for the second player.
    #[arg(long, default_value = "1000")]
    second_iterations: usize,

    #[command(flatten)]
    search: SearchArgs,
}

impl SeatArgs {
    fn specs(&self) -> (AgentSpec, AgentSpec) {
        let spec = |kind: AgentKind, iterations: usize| match kind {
            AgentKind::Mcts => AgentSpec::with_config(self.search.config(iterations)),
            AgentKind::Random => AgentSpec::random(),
        };
        (
            spec(self.first, self.first_iterations),
            spec(self.second, self.second_iterations),
        )
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play many games between two agents and report the tally.
    Battle {
        #[command(flatten)]
        game: GameArgs,

        #[command(flatten)]
        seats: SeatArgs,

        /// Number of games to play.
        #[arg(short, long, default_value = "10")]
        games: usize,

        /// Random seed for reproducibility.
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Play games in parallel.
        #[arg(long)]
        parallel: bool,

        /// Write a JSON report (configuration, every game, tally) here.
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Measure MCTS vs Random and MCTS vs MCTS over a grid of budgets.
    Experiment {
        #[command(flatten)]
        game: GameArgs,

        /// Iteration budgets to try.
        #[arg(long, value_delimiter = ',', default_value = "100,500,1000")]
        iterations: Vec<usize>,

        /// Number of games per cell.
        #[arg(long, value_delimiter = ',', default_value = "5,10")]
        games: Vec<usize>,

        #[command(flatten)]
        search: SearchArgs,

        /// Random seed for reproducibility.
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Play games in parallel.
        #[arg(long)]
        parallel: bool,

        /// Write the grid as JSON here.
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Play one game, printing the board after every move.
    Play {
        #[command(flatten)]
        game: GameArgs,

        #[command(flatten)]
        seats: SeatArgs,

        /// Random seed for reproducibility.
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    match cli.command {
        Commands::Battle {
            game,
            seats,
            games,
            seed,
            parallel,
            report,
        } => {
            let (board_size, win_length) = game.board();
            let (first, second) = seats.specs();
            let config = BattleConfig {
                game: game.game,
                board_size,
                win_length,
                first,
                second,
                games,
                seed,
                parallel,
            };

            let result = run_battle(&config)?;
            result.print_summary();

            if let Some(path) = report {
                result.write_json(&path)?;
                info!(path = ?path, "Report written");
            }
            Ok(())
        }

        Commands::Experiment {
            game,
            iterations,
            games,
            search,
            seed,
            parallel,
            report,
        } => {
            let (board_size, win_length) = game.board();
            let config = ExperimentConfig {
                game: game.game,
                board_size,
                win_length,
                iterations,
                game_counts: games,
                mcts: search.config(0),
                seed,
                parallel,
            };

            let rows = run_experiment(&config)?;
            print_table(&rows);

            if let Some(path) = report {
                let file = File::create(&path).with_context(|| format!("Failed to create report file: {:?}", path))?;
                serde_json::to_writer_pretty(BufWriter::new(file), &rows)
                    .with_context(|| format!("Failed to write report to {:?}", path))?;
                info!(path = ?path, "Report written");
            }
            Ok(())
        }

        Commands::Play { game, seats, seed } => {
            let (board_size, win_length) = game.board();
            let (first, second) = seats.specs();
            let config = PlayConfig {
                game: game.game,
                board_size,
                win_length,
                first,
                second,
                seed,
            };

            run_play(&config, &mut std::io::stdout().lock())?;
            Ok(())
        }
    }
}
