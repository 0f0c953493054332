//! Expansion: grow the tree below the node chosen by selection.

use crate::{config::Expansion, node::NodeId, search::SearchError, tree::Tree};
use rand::Rng;
use uct_core::{Game, Result};

/// Grow `id` according to `discipline` and return the node to simulate from.
///
/// - Terminal node: no-op, returns `id`.
/// - Eager: creates a child for every untried move, then returns one of
///   the node's children chosen uniformly at random (or `id` if the state
///   has no children at all).
/// - Lazy: creates the child for one untried move chosen uniformly at
///   random and returns it; returns `id` if nothing is left to try.
pub fn expand<G, R>(
    tree: &mut Tree<G>,
    game: &G,
    id: NodeId,
    discipline: Expansion,
    rng: &mut R,
) -> std::result::Result<NodeId, SearchError>
where
    G: Game,
    R: Rng + ?Sized,
{
    if tree.get(id).is_terminal() {
        return Ok(id);
    }

    let next = match discipline {
        Expansion::Eager => {
            expand_all(tree, game, id)?;
            random_child(tree, id, rng).unwrap_or(id)
        }
        Expansion::Lazy => expand_one(tree, game, id, rng)?.unwrap_or(id),
    };
    Ok(next)
}

/// Create a child for every untried move of `id`.
///
/// Returns the number of children created; 0 for a terminal or already
/// fully expanded node. Children are created in legal-move order.
pub fn expand_all<G: Game>(tree: &mut Tree<G>, game: &G, id: NodeId) -> Result<usize> {
    let untried = std::mem::take(untried_moves(tree, game, id));
    for &mv in &untried {
        tree.add_child(game, id, mv)?;
    }
    Ok(untried.len())
}

/// Create the child for one uniformly random untried move of `id`.
///
/// Returns `None` when the node is terminal or fully expanded.
pub fn expand_one<G, R>(tree: &mut Tree<G>, game: &G, id: NodeId, rng: &mut R) -> Result<Option<NodeId>>
where
    G: Game,
    R: Rng + ?Sized,
{
    let untried = untried_moves(tree, game, id);
    if untried.is_empty() {
        return Ok(None);
    }
    let index = rng.gen_range(0..untried.len());
    let mv = untried.swap_remove(index);
    tree.add_child(game, id, mv).map(Some)
}

/// A child of `id` chosen uniformly at random, if it has any.
pub fn random_child<G, R>(tree: &Tree<G>, id: NodeId, rng: &mut R) -> Option<NodeId>
where
    G: Game,
    R: Rng + ?Sized,
{
    let children = tree.get(id).children();
    if children.is_empty() {
        None
    } else {
        Some(children[rng.gen_range(0..children.len())])
    }
}

/// Untried moves of `id`, generated from the state on first access.
///
/// A move leaves this list when its child is created, so the list and the
/// node's children never share a move.
fn untried_moves<'t, G: Game>(tree: &'t mut Tree<G>, game: &G, id: NodeId) -> &'t mut Vec<G::Move> {
    if tree.get(id).untried.is_none() {
        let tried: Vec<G::Move> = tree
            .get(id)
            .children()
            .iter()
            .filter_map(|&child| tree.get(child).last_move())
            .collect();
        let mut legal = game.legal_moves(tree.get(id).state());
        legal.retain(|m| !tried.contains(m));
        tree.get_mut(id).untried = Some(legal);
    }
    tree.get_mut(id).untried.get_or_insert_with(Vec::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{TicTacToe, TicTacToeMove};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;
    use uct_core::Player;

    fn terminal_state(game: &TicTacToe) -> <TicTacToe as Game>::State {
        // X wins on the top row
        [0, 3, 1, 4, 2].iter().fold(game.initial_state(), |s, &c| {
            game.apply(&s, TicTacToeMove(c)).unwrap()
        })
    }

    #[test]
    fn test_expand_all_matches_legal_moves() {
        let game = TicTacToe;
        let mut tree = Tree::new(&game, game.initial_state());

        let created = expand_all(&mut tree, &game, NodeId::ROOT).unwrap();

        assert_eq!(created, 9);
        assert_eq!(tree.root().children().len(), game.legal_moves(tree.root().state()).len());
        assert!(tree.root().is_fully_expanded());
        for &child in tree.root().children() {
            assert_eq!(tree.get(child).mover(), Player::First);
        }
    }

    #[test]
    fn test_expand_all_twice_is_noop() {
        let game = TicTacToe;
        let mut tree = Tree::new(&game, game.initial_state());

        expand_all(&mut tree, &game, NodeId::ROOT).unwrap();
        let created = expand_all(&mut tree, &game, NodeId::ROOT).unwrap();

        assert_eq!(created, 0);
        assert_eq!(tree.len(), 10);
    }

    #[test]
    fn test_terminal_node_never_expands() {
        let game = TicTacToe;
        let mut tree = Tree::new(&game, terminal_state(&game));
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        for discipline in [Expansion::Eager, Expansion::Lazy, Expansion::Eager] {
            let next = expand(&mut tree, &game, NodeId::ROOT, discipline, &mut rng).unwrap();
            assert_eq!(next, NodeId::ROOT);
        }
        assert_eq!(expand_all(&mut tree, &game, NodeId::ROOT).unwrap(), 0);
        assert!(tree.root().children().is_empty());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_eager_returns_a_child() {
        let game = TicTacToe;
        let mut tree = Tree::new(&game, game.initial_state());
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let next = expand(&mut tree, &game, NodeId::ROOT, Expansion::Eager, &mut rng).unwrap();

        assert_eq!(tree.get(next).parent(), Some(NodeId::ROOT));
        assert_eq!(tree.root().children().len(), 9);
    }

    #[test]
    fn test_lazy_grows_one_child_per_call_without_duplicates() {
        let game = TicTacToe;
        let mut tree = Tree::new(&game, game.initial_state());
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut seen = HashSet::new();

        for expected in 1..=9 {
            let next = expand(&mut tree, &game, NodeId::ROOT, Expansion::Lazy, &mut rng).unwrap();
            assert_ne!(next, NodeId::ROOT);
            assert!(seen.insert(tree.get(next).last_move().unwrap()));
            assert_eq!(tree.root().children().len(), expected);
        }

        assert!(tree.root().is_fully_expanded());
        // Nothing left to try
        let next = expand(&mut tree, &game, NodeId::ROOT, Expansion::Lazy, &mut rng).unwrap();
        assert_eq!(next, NodeId::ROOT);
        assert_eq!(tree.len(), 10);
    }

    #[test]
    fn test_eager_after_lazy_creates_only_the_rest() {
        let game = TicTacToe;
        let mut tree = Tree::new(&game, game.initial_state());
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        for _ in 0..3 {
            expand_one(&mut tree, &game, NodeId::ROOT, &mut rng).unwrap();
        }
        let created = expand_all(&mut tree, &game, NodeId::ROOT).unwrap();

        assert_eq!(created, 6);
        assert_eq!(tree.len(), 10);
        assert!(tree.root().is_fully_expanded());
        let moves: HashSet<_> = tree
            .root()
            .children()
            .iter()
            .filter_map(|&id| tree.get(id).last_move())
            .collect();
        assert_eq!(moves.len(), 9);
    }

    #[test]
    fn test_expand_all_keeps_legal_move_order() {
        let game = TicTacToe;
        let mut tree = Tree::new(&game, game.initial_state());
        expand_all(&mut tree, &game, NodeId::ROOT).unwrap();

        let moves: Vec<_> = tree
            .root()
            .children()
            .iter()
            .filter_map(|&id| tree.get(id).last_move())
            .collect();
        assert_eq!(moves, game.legal_moves(tree.root().state()));
    }

    #[test]
    fn test_random_child_covers_all_children() {
        let game = TicTacToe;
        let mut tree = Tree::new(&game, game.initial_state());
        expand_all(&mut tree, &game, NodeId::ROOT).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        let picked: HashSet<_> = (0..500)
            .filter_map(|_| random_child(&tree, NodeId::ROOT, &mut rng))
            .collect();
        assert_eq!(picked.len(), 9);
    }
}
