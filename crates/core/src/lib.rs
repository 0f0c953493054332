//! UCT Core - Game abstractions and common types
//!
//! This crate provides the core `Game` trait that defines the interface
//! any game must implement to be searched by the UCT engine.
//!
//! # Types
//!
//! - [`Game`] - Trait for game implementations
//! - [`Player`] - One of the two sides of a game
//! - [`Reward`] - Playout reward in [0, 1] credited to a node

mod error;
mod game;
mod types;

pub use error::{GameError, Result};
pub use game::Game;
pub use types::{Player, Reward};
