//! Monte Carlo Tree Search driver.
//!
//! Runs a fixed budget of select → expand → simulate → backpropagate
//! iterations from a root state and recommends a move.

use crate::{
    backprop::backpropagate,
    config::{FinalMoveRule, MctsConfig},
    expansion::expand,
    node::NodeId,
    selection::select,
    simulation::Simulator,
    tree::Tree,
};
use rand::Rng;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, trace};
use uct_core::{Game, GameError};

/// Errors that can occur during search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("No legal move to recommend: the root state is terminal")]
    NoLegalMoveToRecommend,

    #[error("Empty selection: node {0} has no children")]
    EmptySelection(usize),

    #[error(transparent)]
    Game(#[from] GameError),
}

/// Visit statistics of one root child.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChildSummary<M> {
    pub mv: M,
    pub visits: u32,
    pub reward: f64,
}

impl<M> ChildSummary<M> {
    /// Empirical win rate for the player to move at the root.
    pub fn win_rate(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.reward / self.visits as f64
        }
    }
}

/// Counters and per-phase timings of one or more searches.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchStats {
    pub searches: usize,
    pub iterations: usize,
    /// Nodes in the tree when the search finished.
    pub tree_size: usize,
    pub max_depth: usize,
    pub selection: Duration,
    pub expansion: Duration,
    pub simulation: Duration,
    pub backpropagation: Duration,
    pub total: Duration,
}

impl SearchStats {
    /// Fold another search's stats into this running total.
    ///
    /// Tree size and depth keep the maximum seen.
    pub fn accumulate(&mut self, other: &SearchStats) {
        self.searches += other.searches;
        self.iterations += other.iterations;
        self.tree_size = self.tree_size.max(other.tree_size);
        self.max_depth = self.max_depth.max(other.max_depth);
        self.selection += other.selection;
        self.expansion += other.expansion;
        self.simulation += other.simulation;
        self.backpropagation += other.backpropagation;
        self.total += other.total;
    }
}

/// Result of an MCTS search.
#[derive(Clone, Debug)]
pub struct SearchResult<M> {
    /// Recommended move.
    pub best_move: M,

    /// Root children in creation order.
    pub children: Vec<ChildSummary<M>>,

    /// Visits of the root (equals the iteration budget).
    pub root_visits: u32,

    pub stats: SearchStats,
}

impl<M: Copy> SearchResult<M> {
    /// Visit count for each root move.
    pub fn visit_counts(&self) -> Vec<(M, u32)> {
        self.children.iter().map(|c| (c.mv, c.visits)).collect()
    }
}

/// Monte Carlo Tree Search with UCT selection and random rollouts.
///
/// Generic over:
/// - `G`: The game being played
/// - `S`: The simulation strategy
/// - `R`: The random number generator (expansion and rollouts)
pub struct Mcts<G: Game, S: Simulator<G>, R: Rng> {
    config: MctsConfig,
    simulator: S,
    rng: R,
    tree: Option<Tree<G>>,
}

impl<G, S, R> Mcts<G, S, R>
where
    G: Game,
    S: Simulator<G>,
    R: Rng,
{
    /// Create a new MCTS instance.
    pub fn new(config: MctsConfig, simulator: S, rng: R) -> Self {
        Self {
            config,
            simulator,
            rng,
            tree: None,
        }
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Tree built by the most recent search.
    ///
    /// Only kept when the config sets `retain_tree`; `None` otherwise.
    pub fn tree(&self) -> Option<&Tree<G>> {
        self.tree.as_ref()
    }

    /// Run a search and return only the recommended move.
    pub fn find_next_move(&mut self, game: &G, state: &G::State) -> Result<G::Move, SearchError> {
        self.search(game, state).map(|result| result.best_move)
    }

    /// Run MCTS from the given state, returning search results.
    ///
    /// # Errors
    /// - `NoLegalMoveToRecommend` if `state` is terminal
    /// - `EmptySelection` if the root has no children after the loop
    ///   (an iteration budget of zero)
    /// - `Game` if the game rejects a move it generated itself
    pub fn search(&mut self, game: &G, state: &G::State) -> Result<SearchResult<G::Move>, SearchError> {
        // Previous tree is discarded, there is no reuse across calls
        self.tree = None;

        if game.is_terminal(state) {
            return Err(SearchError::NoLegalMoveToRecommend);
        }

        let started = Instant::now();
        let mut tree = Tree::new(game, state.clone());
        let mut stats = SearchStats {
            searches: 1,
            ..Default::default()
        };

        for _ in 0..self.config.iterations {
            self.iterate(game, &mut tree, &mut stats)?;
        }

        stats.tree_size = tree.len();
        stats.max_depth = tree.max_depth();
        stats.total = started.elapsed();

        let result = self.extract_results(&tree, stats)?;

        debug!(
            iterations = result.stats.iterations,
            tree_size = result.stats.tree_size,
            max_depth = result.stats.max_depth,
            best_move = ?result.best_move,
            elapsed_ms = result.stats.total.as_secs_f64() * 1000.0,
            "MCTS search complete"
        );

        if self.config.retain_tree {
            self.tree = Some(tree);
        }
        Ok(result)
    }

    /// Run a single iteration: select -> expand -> simulate -> backpropagate.
    fn iterate(&mut self, game: &G, tree: &mut Tree<G>, stats: &mut SearchStats) -> Result<(), SearchError> {
        let t0 = Instant::now();
        let leaf = select(tree, self.config.exploration)?;

        let t1 = Instant::now();
        let node = expand(tree, game, leaf, self.config.expansion, &mut self.rng)?;

        let t2 = Instant::now();
        let playout = self
            .simulator
            .simulate(game, tree.get(node).state(), &mut self.rng)?;

        let t3 = Instant::now();
        backpropagate(tree, node, playout.winner);
        let t4 = Instant::now();

        stats.iterations += 1;
        stats.selection += t1 - t0;
        stats.expansion += t2 - t1;
        stats.simulation += t3 - t2;
        stats.backpropagation += t4 - t3;
        Ok(())
    }

    /// Extract search results from root node.
    fn extract_results(
        &self,
        tree: &Tree<G>,
        stats: SearchStats,
    ) -> Result<SearchResult<G::Move>, SearchError> {
        let root = tree.root();

        let children: Vec<ChildSummary<G::Move>> = root
            .children()
            .iter()
            .filter_map(|&id| {
                let child = tree.get(id);
                child.last_move().map(|mv| ChildSummary {
                    mv,
                    visits: child.stats().visits,
                    reward: child.stats().reward,
                })
            })
            .collect();

        for child in &children {
            trace!(
                mv = ?child.mv,
                visits = child.visits,
                reward = child.reward,
                win_rate = child.win_rate(),
                "Root child stats"
            );
        }

        let best = choose_final(&children, self.config.final_move)
            .ok_or(SearchError::EmptySelection(NodeId::ROOT.index()))?;

        Ok(SearchResult {
            best_move: children[best].mv,
            root_visits: root.stats().visits,
            children,
            stats,
        })
    }
}

/// Index of the recommended child; ties go to the first maximum.
fn choose_final<M>(children: &[ChildSummary<M>], rule: FinalMoveRule) -> Option<usize> {
    let mut best: Option<usize> = None;

    for (i, child) in children.iter().enumerate() {
        let better = match best {
            None => true,
            Some(b) => match rule {
                FinalMoveRule::MostVisits => child.visits > children[b].visits,
                FinalMoveRule::HighestWinRate => child.win_rate() > children[b].win_rate(),
            },
        };
        if better {
            best = Some(i);
        }
    }

    best
}
