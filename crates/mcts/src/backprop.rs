//! Backpropagation of one playout outcome.
//!
//! Rewards are credited against the absolute winner: each node on the path
//! gets 1.0 if its mover-of-record won, 0.0 if the opponent won and 0.5 on
//! a draw. This stays correct even for games where a player may move twice
//! in a row, unlike a per-ply sign flip.

use crate::{node::NodeId, tree::Tree};
use uct_core::{Game, Player, Reward};

/// Record one playout on `from` and every ancestor up to the root.
///
/// Returns the number of nodes updated.
pub fn backpropagate<G: Game>(tree: &mut Tree<G>, from: NodeId, winner: Option<Player>) -> usize {
    let mut current = Some(from);
    let mut updated = 0;

    while let Some(id) = current {
        let node = tree.get_mut(id);
        let reward = Reward::for_mover(node.mover, winner);
        node.stats.record(reward);
        updated += 1;
        current = node.parent;
    }

    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{TicTacToe, TicTacToeMove};

    /// Root plus a three-move line: X@0, O@4, X@8.
    fn line_tree() -> (Tree<TicTacToe>, Vec<NodeId>) {
        let game = TicTacToe;
        let mut tree = Tree::new(&game, game.initial_state());
        let a = tree.add_child(&game, NodeId::ROOT, TicTacToeMove(0)).unwrap();
        let b = tree.add_child(&game, a, TicTacToeMove(4)).unwrap();
        let c = tree.add_child(&game, b, TicTacToeMove(8)).unwrap();
        (tree, vec![NodeId::ROOT, a, b, c])
    }

    #[test]
    fn test_each_node_on_path_gains_one_visit() {
        let (mut tree, path) = line_tree();
        let leaf = path[3];

        let updated = backpropagate(&mut tree, leaf, None);

        assert_eq!(updated, path.len());
        for &id in &path {
            assert_eq!(tree.get(id).stats().visits, 1);
            assert!((tree.get(id).stats().reward - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn test_only_path_nodes_are_touched() {
        let game = TicTacToe;
        let (mut tree, path) = line_tree();
        let sibling = tree.add_child(&game, NodeId::ROOT, TicTacToeMove(1)).unwrap();

        backpropagate(&mut tree, path[2], Some(Player::First));

        assert_eq!(tree.get(sibling).stats().visits, 0);
        assert_eq!(tree.get(path[3]).stats().visits, 0);
        assert_eq!(tree.get(path[2]).stats().visits, 1);
    }

    #[test]
    fn test_win_raises_winner_nodes_and_lowers_the_rest() {
        for winner in [Player::First, Player::Second] {
            let (mut tree, path) = line_tree();
            let leaf = path[3];

            // Seed every node with one draw so win rates start at 0.5
            backpropagate(&mut tree, leaf, None);
            let before: Vec<f64> = path.iter().map(|&id| tree.get(id).stats().win_rate()).collect();

            backpropagate(&mut tree, leaf, Some(winner));

            for (i, &id) in path.iter().enumerate() {
                let node = tree.get(id);
                let after = node.stats().win_rate();
                if node.mover() == winner {
                    assert!(after > before[i], "winner's node {} must improve", i);
                } else {
                    assert!(after < before[i], "loser's node {} must not improve", i);
                }
            }
        }
    }

    #[test]
    fn test_mover_alternates_along_line() {
        let (tree, path) = line_tree();
        let movers: Vec<Player> = path.iter().map(|&id| tree.get(id).mover()).collect();
        assert_eq!(
            movers,
            vec![Player::Second, Player::First, Player::Second, Player::First]
        );
    }

    #[test]
    fn test_root_visits_equal_playouts() {
        let (mut tree, path) = line_tree();
        for i in 0..10 {
            let from = path[i % path.len()];
            backpropagate(&mut tree, from, Some(Player::Second));
        }
        assert_eq!(tree.root().stats().visits, 10);
        // Root mover is Second, so every playout was a win for it
        assert!((tree.root().stats().reward - 10.0).abs() < 1e-12);
    }
}
