//! Arena-allocated MCTS tree.
//!
//! Using a Vec<Node> with indices provides better cache locality
//! and simpler ownership compared to Rc<RefCell<Node>>. Children are owned
//! by the arena; a node only stores the indices of its children and a plain
//! index back to its parent, so there is no ownership cycle and walking up
//! to the root is O(1) per step.

use crate::node::{Node, NodeId};
use uct_core::{Game, Result};

/// Arena-allocated MCTS tree rooted at one game state.
pub struct Tree<G: Game> {
    nodes: Vec<Node<G>>,
}

impl<G: Game> Tree<G> {
    /// Create a new tree holding only a root for `state`.
    pub fn new(game: &G, state: G::State) -> Self {
        Self {
            nodes: vec![Node::root(game, state)],
        }
    }

    /// Get a reference to a node by ID.
    ///
    /// # Panics
    /// Panics if the NodeId does not belong to this tree.
    pub fn get(&self, id: NodeId) -> &Node<G> {
        &self.nodes[id.0]
    }

    /// Get a mutable reference to a node by ID.
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<G> {
        &mut self.nodes[id.0]
    }

    /// Get the root node.
    pub fn root(&self) -> &Node<G> {
        self.get(NodeId::ROOT)
    }

    /// Get the number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (never true, the root always exists).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over every node with its ID, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<G>)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Depth of the deepest node (0 for a lone root).
    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    /// Add the child of `parent` reached by `mv`, returning its ID.
    ///
    /// The caller passes a move taken off the parent's untried list, which
    /// never holds a move that already has a child. That keeps this O(1)
    /// apart from applying the move.
    ///
    /// # Errors
    /// Propagates the game's `IllegalMove` if `mv` cannot be applied.
    pub(crate) fn add_child(&mut self, game: &G, parent: NodeId, mv: G::Move) -> Result<NodeId> {
        let parent_node = self.get(parent);
        let state = game.apply(&parent_node.state, mv)?;
        let mover = game.player_to_move(&parent_node.state);
        let depth = parent_node.depth + 1;

        let id = NodeId(self.nodes.len());
        self.nodes
            .push(Node::child(game, state, parent, mv, mover, depth));

        self.get_mut(parent).children.push(id);
        Ok(id)
    }
}
