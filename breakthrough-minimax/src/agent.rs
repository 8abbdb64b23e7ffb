use std::fmt::Debug;
use std::marker::PhantomData;

use breakthrough_game_types::{Player, TurnTakingGame, VictorDeterminableGame};
use derivative::Derivative;
use rand::RngCore;
use tracing::info_span;

use crate::{Evaluate, SearchOutcome, SearchReturn, SearchScore};

/// A heuristic bound to a name, ready to run searches.
///
/// The agent owns nothing but a reference to its heuristic, so it is cheap
/// to build one per decision. It emits a [tracing] span around each
/// top-level decision recording the chosen score and move.
///
/// ```rust
/// use breakthrough_game_types::{Board, Player};
/// use breakthrough_minimax::MinimaxAgent;
/// use rand::{rngs::StdRng, RngCore, SeedableRng};
///
/// fn material(board: &Board, player: Player, _rng: &mut dyn RngCore) -> i64 {
///     board.piece_count(player) as i64 - board.piece_count(player.opponent()) as i64
/// }
///
/// let board = Board::start_position(5, 5, 1).unwrap();
/// let mut rng = StdRng::seed_from_u64(42);
/// let agent = MinimaxAgent::new(&material, "material");
///
/// let outcome = agent.decide(&board, 3, Player::White, Player::White, &mut rng);
/// assert!(outcome.best_move.is_some());
/// ```
#[derive(Derivative, Clone, Copy)]
#[derivative(Debug)]
pub struct MinimaxAgent<'a, G, ScoreType, EvalType>
where
    EvalType: Evaluate<G, ScoreType> + ?Sized,
{
    #[derivative(Debug = "ignore")]
    heuristic: &'a EvalType,
    name: &'static str,
    _phantom: PhantomData<(G, ScoreType)>,
}

impl<'a, G, ScoreType, EvalType> MinimaxAgent<'a, G, ScoreType, EvalType>
where
    G: TurnTakingGame + VictorDeterminableGame,
    ScoreType: PartialOrd + Ord + Debug + Clone + Copy,
    EvalType: Evaluate<G, ScoreType> + ?Sized,
{
    /// Pair a heuristic with a name for tracing output.
    pub fn new(heuristic: &'a EvalType, name: &'static str) -> Self {
        Self {
            heuristic,
            name,
            _phantom: PhantomData,
        }
    }

    /// The name given at construction.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Pick the next move for `player`, searching `depth_budget` plies deep.
    ///
    /// Returns `None` when `player` has no legal action, which the rules
    /// score as a loss for that side; the caller reports it and ends the
    /// game.
    pub fn choose_move(
        &self,
        state: &G,
        player: Player,
        depth_budget: usize,
        rng: &mut dyn RngCore,
    ) -> Option<G::Action> {
        info_span!(
            "minimax_decide",
            agent = self.name,
            player = %player,
            depth = depth_budget,
            chosen_score = tracing::field::Empty,
            chosen_move = tracing::field::Empty,
        )
        .in_scope(|| {
            let outcome = self.decide(state, depth_budget, player, player, rng);

            let current_span = tracing::Span::current();
            current_span.record("chosen_score", format!("{:?}", outcome.score).as_str());
            current_span.record("chosen_move", format!("{:?}", outcome.best_move).as_str());

            outcome.best_move
        })
    }

    /// Run the search and collapse it into the (score, move) pair.
    ///
    /// `current` is the side to move at `state`; `root` is the side the
    /// search optimizes for and whose point of view the heuristic takes.
    /// Top-level callers pass the same player for both.
    pub fn decide(
        &self,
        state: &G,
        depth_budget: usize,
        current: Player,
        root: Player,
        rng: &mut dyn RngCore,
    ) -> SearchOutcome<G::Action, ScoreType> {
        self.search(state, depth_budget, current, root, rng).outcome()
    }

    /// Run the search and keep the whole evaluated tree, for tests and
    /// debugging.
    ///
    /// The recursion has three base cases, checked in order:
    /// terminal state (win, loss, or draw for `root`), exhausted depth
    /// budget (heuristic leaf), and a mover with no legal actions (a loss
    /// for whichever side is stuck). Otherwise every action is searched one
    /// ply deeper with the sides swapped, and the node keeps the strictly
    /// best option: highest score when `current == root`, lowest otherwise,
    /// first option winning ties either way.
    pub fn search(
        &self,
        state: &G,
        depth_budget: usize,
        current: Player,
        root: Player,
        rng: &mut dyn RngCore,
    ) -> SearchReturn<G, ScoreType> {
        if state.is_over() {
            let score = match state.get_winner() {
                Some(winner) if winner == root => SearchScore::Win,
                Some(_) => SearchScore::Loss,
                None => SearchScore::Draw,
            };
            return SearchReturn::Leaf { score };
        }

        if depth_budget == 0 {
            let estimate = self.heuristic.evaluate(state, root, rng);
            return SearchReturn::Leaf {
                score: SearchScore::Heuristic(estimate),
            };
        }

        let actions = state.legal_actions(current);
        if actions.is_empty() {
            // The stuck side loses on the spot, whichever side it is.
            let score = if current == root {
                SearchScore::Loss
            } else {
                SearchScore::Win
            };
            return SearchReturn::Leaf { score };
        }

        let is_maximizing = current == root;
        let mut options = Vec::with_capacity(actions.len());
        for action in actions {
            let child_state = state.advance(&action);
            let subtree =
                self.search(&child_state, depth_budget - 1, current.opponent(), root, rng);
            options.push((action, subtree));
        }

        let mut chosen = 0;
        for (index, (_, subtree)) in options.iter().enumerate().skip(1) {
            let value = subtree.score();
            let best = options[chosen].1.score();
            let better = if is_maximizing {
                value > best
            } else {
                value < best
            };
            if better {
                chosen = index;
            }
        }

        let score = *options[chosen].1.score();
        SearchReturn::Node {
            moving_player: current,
            is_maximizing,
            chosen,
            options,
            score,
        }
    }
}
