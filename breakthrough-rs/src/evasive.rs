use breakthrough_game_types::{Board, Player};
use breakthrough_minimax::Evaluate;
use decorum::N64;
use rand::RngCore;

use crate::tie_break;

/// Plays to survive: the score is the number of its own pieces remaining.
///
/// Evasive never looks at the opponent at all, so it happily trades nothing
/// and retreats into whatever shape keeps its pieces alive longest.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evasive;

impl Evaluate<Board, N64> for Evasive {
    fn evaluate(&self, board: &Board, player: Player, rng: &mut dyn RngCore) -> N64 {
        N64::from(board.piece_count(player) as f64 + tie_break(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn scores_own_piece_count_plus_tie_break() {
        let board = Board::start_position(5, 5, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let score = Evasive.evaluate(&board, Player::White, &mut rng);
        assert!(score >= N64::from(5.0) && score < N64::from(6.0));
    }

    #[test]
    fn ignores_the_opponent_entirely() {
        let full: Board = "XX\n..\nOO".parse().unwrap();
        let thinned: Board = "XX\n..\n.O".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let a = Evasive.evaluate(&full, Player::White, &mut rng);
        let b = Evasive.evaluate(&thinned, Player::White, &mut rng);
        // Same own count, so both land in the same unit interval.
        assert!(a >= N64::from(2.0) && a < N64::from(3.0));
        assert!(b >= N64::from(2.0) && b < N64::from(3.0));
    }
}
