use std::fmt::Debug;

use breakthrough_game_types::Player;
use rand::RngCore;

/// The score of a searched position, wrapped so that decided games always
/// outrank heuristic guesses.
///
/// The derived ordering is `Loss < Draw < Heuristic(_) < Win`, which means a
/// win dominates any value a heuristic could produce and a loss is dominated
/// by all of them, with no sentinel constants to keep in range. `Draw` only
/// occurs for game types whose victor model admits finished-but-undecided
/// states; the base capture game always produces a winner when it ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SearchScore<ScoreType>
where
    ScoreType: PartialOrd + Ord + Debug + Clone + Copy,
{
    /// The root player loses from here.
    Loss,
    /// The game is over with no winner.
    Draw,
    /// Undecided at the depth horizon; the heuristic's estimate.
    Heuristic(ScoreType),
    /// The root player wins from here.
    Win,
}

impl<ScoreType> SearchScore<ScoreType>
where
    ScoreType: PartialOrd + Ord + Debug + Clone + Copy,
{
    /// True for scores of finished games, i.e. anything but a heuristic
    /// estimate.
    pub fn is_decided(&self) -> bool {
        !matches!(self, SearchScore::Heuristic(_))
    }
}

/// The heuristic contract: map a state and the evaluating player to a score,
/// where higher is better for that player.
///
/// Implementations must be total over all reachable states, terminal ones
/// included, and must have no effect other than drawing from `rng` for their
/// tie-breaking term. The engine hands every evaluation the same rng it was
/// given, so a seeded run is reproducible.
///
/// Any closure with the right shape is an evaluator:
///
/// ```rust
/// use breakthrough_minimax::Evaluate;
/// use breakthrough_game_types::{Board, Player};
/// use rand::RngCore;
///
/// fn material(board: &Board, player: Player, _rng: &mut dyn RngCore) -> i64 {
///     board.piece_count(player) as i64 - board.piece_count(player.opponent()) as i64
/// }
///
/// let _: &dyn Evaluate<Board, i64> = &material;
/// ```
pub trait Evaluate<GameType, ScoreType> {
    /// Score `state` from `player`'s point of view.
    fn evaluate(&self, state: &GameType, player: Player, rng: &mut dyn RngCore) -> ScoreType;
}

impl<GameType, ScoreType, FnLike> Evaluate<GameType, ScoreType> for FnLike
where
    FnLike: Fn(&GameType, Player, &mut dyn RngCore) -> ScoreType,
{
    fn evaluate(&self, state: &GameType, player: Player, rng: &mut dyn RngCore) -> ScoreType {
        (self)(state, player, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wins_dominate_every_heuristic_value() {
        assert!(SearchScore::Win > SearchScore::Heuristic(i64::MAX));
        assert!(SearchScore::Loss < SearchScore::Heuristic(i64::MIN));
        assert!(SearchScore::<i64>::Loss < SearchScore::Draw);
        assert!(SearchScore::Draw < SearchScore::Heuristic(i64::MIN));
    }

    #[test]
    fn heuristic_scores_order_by_inner_value() {
        assert!(SearchScore::Heuristic(3) > SearchScore::Heuristic(2));
        assert!(!SearchScore::Heuristic(3).is_decided());
        assert!(SearchScore::<i64>::Win.is_decided());
    }
}
