//! Tree policy: descend from the root with UCT.
//!
//! Every child is sampled once before UCT scores are compared; after that
//! the child maximizing `win_rate + C * sqrt(ln(N_parent) / N_child)` is
//! followed. Ties go to the first maximum in creation order.

use crate::{
    node::NodeId,
    search::SearchError,
    tree::Tree,
};
use uct_core::Game;

/// Walk from the root to the node the next iteration should grow.
///
/// Descent stops at a terminal node, at a node without children, or at a
/// node that still has untried moves (so lazy expansion can grow it).
/// Selection itself never creates children.
pub fn select<G: Game>(tree: &Tree<G>, exploration: f64) -> Result<NodeId, SearchError> {
    let mut current = NodeId::ROOT;

    loop {
        let node = tree.get(current);
        if node.is_terminal() || node.children().is_empty() || !node.is_fully_expanded() {
            return Ok(current);
        }
        current = select_child(tree, current, exploration)?;
    }
}

/// Pick the child of `parent` to descend into.
///
/// # Errors
/// `SearchError::EmptySelection` if `parent` has no children.
pub fn select_child<G: Game>(
    tree: &Tree<G>,
    parent: NodeId,
    exploration: f64,
) -> Result<NodeId, SearchError> {
    let node = tree.get(parent);

    // Unvisited children first, in enumeration order
    if let Some(&unvisited) = node
        .children()
        .iter()
        .find(|&&id| tree.get(id).stats().visits == 0)
    {
        return Ok(unvisited);
    }

    let ln_parent_visits = (node.stats().visits.max(1) as f64).ln();

    let mut best = None;
    let mut best_score = f64::NEG_INFINITY;

    for &child_id in node.children() {
        let score = tree.get(child_id).stats().uct_score(ln_parent_visits, exploration);

        // Strict comparison keeps the first maximum
        if best.is_none() || score > best_score {
            best_score = score;
            best = Some(child_id);
        }
    }

    best.ok_or(SearchError::EmptySelection(parent.index()))
}
