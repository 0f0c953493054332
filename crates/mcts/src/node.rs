//! MCTS node types for tree storage.
//!
//! Uses arena allocation with indices for cache locality and simpler memory management.

use uct_core::{Game, Player, Reward};

/// Index into the node arena.
///
/// This is a lightweight handle that references a node in the tree.
/// Using indices instead of pointers avoids Rc/RefCell overhead and keeps
/// parent links non-owning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root node is always at index 0.
    pub const ROOT: NodeId = NodeId(0);

    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Statistics for a single MCTS node.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NodeStats {
    /// Number of playouts backpropagated through this node.
    pub visits: u32,

    /// Sum of rewards credited to this node's mover, one per visit.
    pub reward: f64,
}

impl NodeStats {
    /// Empirical win rate of the node's mover.
    ///
    /// Returns 0.0 if the node has never been visited.
    pub fn win_rate(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.reward / self.visits as f64
        }
    }

    /// UCT score of this node as a child of a parent with `ln_parent_visits`.
    ///
    /// `score = win_rate + c * sqrt(ln(N_parent) / N_child)`
    ///
    /// Takes pre-computed ln(parent visits) so that comparing siblings
    /// evaluates the logarithm once. Unvisited nodes score +inf.
    #[inline]
    pub fn uct_score(&self, ln_parent_visits: f64, c: f64) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }
        let n = self.visits as f64;
        self.win_rate() + c * (ln_parent_visits / n).sqrt()
    }

    /// Record one playout.
    pub fn record(&mut self, reward: Reward) {
        self.visits += 1;
        self.reward += reward.get();
    }
}

/// A node in the MCTS tree.
///
/// Each node owns the game state it represents and stores statistics
/// about the playouts that passed through it.
pub struct Node<G: Game> {
    pub(crate) state: G::State,

    /// Parent index (None for root). Never owning.
    pub(crate) parent: Option<NodeId>,

    /// Move that led to this node (None for root).
    pub(crate) last_move: Option<G::Move>,

    /// Player who made `last_move`; for the root, the opponent of the
    /// player to move.
    pub(crate) mover: Player,

    pub(crate) stats: NodeStats,

    /// Children in creation order.
    pub(crate) children: Vec<NodeId>,

    /// Legal moves without a child yet. `None` until expansion first
    /// touches the node.
    pub(crate) untried: Option<Vec<G::Move>>,

    pub(crate) terminal: bool,

    pub(crate) depth: usize,
}

impl<G: Game> Node<G> {
    /// Create the root node for `state`.
    pub(crate) fn root(game: &G, state: G::State) -> Self {
        let mover = game.player_to_move(&state).opponent();
        Self::new(game, state, None, None, mover, 0)
    }

    /// Create an unexpanded child node.
    pub(crate) fn child(
        game: &G,
        state: G::State,
        parent: NodeId,
        last_move: G::Move,
        mover: Player,
        depth: usize,
    ) -> Self {
        Self::new(game, state, Some(parent), Some(last_move), mover, depth)
    }

    fn new(
        game: &G,
        state: G::State,
        parent: Option<NodeId>,
        last_move: Option<G::Move>,
        mover: Player,
        depth: usize,
    ) -> Self {
        let terminal = game.is_terminal(&state);
        Self {
            state,
            parent,
            last_move,
            mover,
            stats: NodeStats::default(),
            children: Vec::new(),
            // Terminal nodes have nothing to try.
            untried: terminal.then(Vec::new),
            terminal,
            depth,
        }
    }

    pub fn state(&self) -> &G::State {
        &self.state
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn last_move(&self) -> Option<G::Move> {
        self.last_move
    }

    /// Mover-of-record: the player who made the move into this node.
    pub fn mover(&self) -> Player {
        self.mover
    }

    pub fn stats(&self) -> &NodeStats {
        &self.stats
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// True once every legal move of the state has a child.
    pub fn is_fully_expanded(&self) -> bool {
        matches!(&self.untried, Some(untried) if untried.is_empty())
    }
}
