use std::fmt::Debug;

use breakthrough_game_types::{Player, TurnTakingGame};
use text_trees::StringTreeNode;

use crate::SearchScore;

/// The (score, move) pair a caller acts on.
///
/// `best_move` is `None` only when the search bottomed out without choosing
/// anything: a terminal state, an exhausted depth budget, or a mover with no
/// legal actions.
#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome<Action, ScoreType>
where
    Action: Copy + Debug,
    ScoreType: PartialOrd + Ord + Debug + Clone + Copy,
{
    /// The value of the searched position for the root player.
    pub score: SearchScore<ScoreType>,
    /// The move the root player should play, when there is one to report.
    pub best_move: Option<Action>,
}

/// One fully evaluated level of the game tree.
///
/// Options are kept in the move generator's enumeration order, with `chosen`
/// indexing the winning option, so it stays visible that ties broke toward
/// the first equally scored move.
#[derive(Debug, Clone)]
pub enum SearchReturn<G, ScoreType>
where
    G: TurnTakingGame,
    ScoreType: PartialOrd + Ord + Debug + Clone + Copy,
{
    /// An interior node: every legal action was searched and one was chosen.
    Node {
        /// The side to move at this node.
        moving_player: Player,
        /// Whether this node chose the highest-scoring option (the root
        /// player moving) or the lowest (the opponent moving).
        is_maximizing: bool,
        /// Index into `options` of the chosen action.
        chosen: usize,
        /// Every searched action with its subtree, in generation order.
        options: Vec<(G::Action, Self)>,
        /// The chosen option's score, propagated up.
        score: SearchScore<ScoreType>,
    },
    /// A terminal state, a depth cutoff, or a mover with no legal actions.
    Leaf {
        /// The value of the leaf for the root player.
        score: SearchScore<ScoreType>,
    },
}

impl<G, ScoreType> SearchReturn<G, ScoreType>
where
    G: TurnTakingGame,
    ScoreType: PartialOrd + Ord + Debug + Clone + Copy,
{
    /// The score of this subtree.
    pub fn score(&self) -> &SearchScore<ScoreType> {
        match self {
            SearchReturn::Node { score, .. } => score,
            SearchReturn::Leaf { score } => score,
        }
    }

    /// The chosen action at this level, or `None` for a leaf.
    pub fn best_move(&self) -> Option<G::Action> {
        match self {
            SearchReturn::Leaf { .. } => None,
            SearchReturn::Node {
                chosen, options, ..
            } => Some(options[*chosen].0),
        }
    }

    /// Collapse the tree into the (score, move) pair callers act on.
    pub fn outcome(&self) -> SearchOutcome<G::Action, ScoreType> {
        SearchOutcome {
            score: *self.score(),
            best_move: self.best_move(),
        }
    }

    /// The line of play the search expects: each side's chosen action from
    /// here down to the horizon. Useful when debugging a surprising move.
    pub fn chosen_route(&self) -> Vec<(Player, G::Action)> {
        match self {
            SearchReturn::Leaf { .. } => vec![],
            SearchReturn::Node {
                moving_player,
                chosen,
                options,
                ..
            } => {
                let (action, subtree) = &options[*chosen];
                let mut route = subtree.chosen_route();
                route.insert(0, (*moving_player, *action));
                route
            }
        }
    }

    /// A visual rendering of the searched tree, with the chosen option at
    /// each level marked by `*`. Returns `None` for a bare leaf.
    pub fn to_text_tree(&self) -> Option<String> {
        let tree_node = self.to_text_tree_node("".to_owned())?;
        Some(format!("{}", tree_node))
    }

    fn to_text_tree_node(&self, label: String) -> Option<StringTreeNode> {
        match self {
            SearchReturn::Leaf { .. } => None,
            SearchReturn::Node {
                moving_player,
                chosen,
                options,
                score,
                ..
            } => {
                let mut node =
                    StringTreeNode::new(format!("{} {} {:?}", label, moving_player, score));
                for (index, (action, subtree)) in options.iter().enumerate() {
                    let marker = if index == *chosen { "*" } else { " " };
                    let child_label = format!("{}{:?}", marker, action);
                    match subtree.to_text_tree_node(child_label.clone()) {
                        Some(child) => node.push_node(child),
                        None => node.push_node(StringTreeNode::new(format!(
                            "{} {:?}",
                            child_label,
                            subtree.score()
                        ))),
                    }
                }
                Some(node)
            }
        }
    }
}
