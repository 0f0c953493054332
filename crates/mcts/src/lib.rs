//! Monte Carlo Tree Search with UCT selection.
//!
//! This crate provides a generic MCTS engine usable with any game
//! implementing the `uct_core::Game` trait.
//!
//! # Features
//!
//! - **Generic**: Works with any two-player, perfect-information `Game`
//! - **UCT Selection**: Unvisited children first, then win rate plus an
//!   exploration bonus
//! - **Eager or Lazy Expansion**: All children at once, or one untried move
//!   per visit
//! - **Random Rollouts**: Pluggable through the `Simulator` trait
//! - **Agents and Matches**: Play full games between MCTS and random agents
//!
//! # Example
//!
//! ```
//! use uct_mcts::{Mcts, MctsConfig, RandomPlayout, games::TicTacToe};
//! use uct_core::Game;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let game = TicTacToe;
//! let state = game.initial_state();
//!
//! let config = MctsConfig::with_iterations(200);
//! let mut mcts = Mcts::new(config, RandomPlayout::new(), ChaCha8Rng::seed_from_u64(42));
//!
//! let result = mcts.search(&game, &state).unwrap();
//! println!("Best move: {}", result.best_move);
//! assert_eq!(result.root_visits, 200);
//! ```

pub mod agent;
pub mod backprop;
pub mod config;
pub mod expansion;
pub mod games;
pub mod matchup;
mod node;
pub mod search;
pub mod selection;
pub mod simulation;
mod tree;

pub use agent::{Agent, MctsAgent, RandomAgent};
pub use config::{Expansion, FinalMoveRule, MctsConfig};
pub use matchup::{play_match, play_match_from, MatchRecord, MatchTally};
pub use node::{Node, NodeId, NodeStats};
pub use search::{ChildSummary, Mcts, SearchError, SearchResult, SearchStats};
pub use simulation::{Playout, RandomPlayout, Simulator};
pub use tree::Tree;
