//! MCTS configuration parameters.
//!
//! These parameters control the behavior of the Monte Carlo Tree Search algorithm.
//! They are fixed for the duration of a search.

use serde::{Deserialize, Serialize};

/// How a selected leaf grows new children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expansion {
    /// Create a child for every legal move on the first visit, then simulate
    /// from one of them picked uniformly at random.
    Eager,

    /// Create one child per visit for a uniformly random untried move.
    Lazy,
}

/// How the recommended move is picked among the root's children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinalMoveRule {
    /// Child with the highest visit count (robust child).
    MostVisits,

    /// Child with the highest empirical win rate (reward / visits).
    HighestWinRate,
}

/// MCTS configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MctsConfig {
    /// Number of select/expand/simulate/backpropagate iterations per search.
    pub iterations: usize,

    /// UCT exploration constant `C`.
    /// Higher values favor rarely visited children, lower values favor
    /// children with a high observed win rate.
    pub exploration: f64,

    /// Expansion discipline applied to every leaf of the search.
    pub expansion: Expansion,

    /// Rule used to recommend a move once the iteration budget is spent.
    pub final_move: FinalMoveRule,

    /// Keep the finished tree for inspection until the next search.
    /// Off by default, so the tree is freed as soon as the search returns.
    #[serde(default)]
    pub retain_tree: bool,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            exploration: std::f64::consts::SQRT_2,
            expansion: Expansion::Eager,
            final_move: FinalMoveRule::MostVisits,
            retain_tree: false,
        }
    }
}

impl MctsConfig {
    /// Create a new config with the specified number of iterations.
    pub fn with_iterations(iterations: usize) -> Self {
        Self {
            iterations,
            ..Default::default()
        }
    }

    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self::with_iterations(50)
    }

    /// Builder pattern: set the exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration = c;
        self
    }

    /// Builder pattern: set the expansion discipline.
    pub fn with_expansion(mut self, expansion: Expansion) -> Self {
        self.expansion = expansion;
        self
    }

    /// Builder pattern: set the final move rule.
    pub fn with_final_move(mut self, rule: FinalMoveRule) -> Self {
        self.final_move = rule;
        self
    }

    /// Builder pattern: keep the last search tree around for inspection.
    pub fn with_retained_tree(mut self) -> Self {
        self.retain_tree = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MctsConfig::default();
        assert_eq!(config.iterations, 1000);
        assert!((config.exploration - 2f64.sqrt()).abs() < 1e-12);
        assert_eq!(config.expansion, Expansion::Eager);
        assert_eq!(config.final_move, FinalMoveRule::MostVisits);
        assert!(!config.retain_tree);
    }

    #[test]
    fn test_config_without_retain_tree_field_deserializes() {
        let json = r#"{"iterations":10,"exploration":1.0,"expansion":"Lazy","final_move":"MostVisits"}"#;
        let config: MctsConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.iterations, 10);
        assert!(!config.retain_tree);
    }

    #[test]
    fn test_with_iterations() {
        let config = MctsConfig::with_iterations(100);
        assert_eq!(config.iterations, 100);
        // Other values should be default
        assert_eq!(config.expansion, Expansion::Eager);
    }

    #[test]
    fn test_builder_pattern() {
        let config = MctsConfig::for_testing()
            .with_exploration(1.0)
            .with_expansion(Expansion::Lazy)
            .with_final_move(FinalMoveRule::HighestWinRate);

        assert_eq!(config.iterations, 50);
        assert!((config.exploration - 1.0).abs() < 1e-12);
        assert_eq!(config.expansion, Expansion::Lazy);
        assert_eq!(config.final_move, FinalMoveRule::HighestWinRate);
    }

    #[test]
    fn test_config_serde() {
        let config = MctsConfig::with_iterations(200).with_expansion(Expansion::Lazy);
        let json = serde_json::to_string(&config).unwrap();
        let back: MctsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
