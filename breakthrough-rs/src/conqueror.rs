use breakthrough_game_types::{Board, Player};
use breakthrough_minimax::Evaluate;
use decorum::N64;
use rand::RngCore;

use crate::tie_break;

/// Plays to destroy: the score is the negated count of opposing pieces.
///
/// Conqueror values nothing but captures, so it will cheerfully throw its
/// own pieces away to thin the other side out.
#[derive(Debug, Clone, Copy, Default)]
pub struct Conqueror;

impl Evaluate<Board, N64> for Conqueror {
    fn evaluate(&self, board: &Board, player: Player, rng: &mut dyn RngCore) -> N64 {
        let opponent_count = board.piece_count(player.opponent()) as f64;
        N64::from(-opponent_count + tie_break(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn scores_negated_opponent_count_plus_tie_break() {
        let board = Board::start_position(5, 5, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let score = Conqueror.evaluate(&board, Player::White, &mut rng);
        assert!(score >= N64::from(-5.0) && score < N64::from(-4.0));
    }

    #[test]
    fn prefers_positions_with_fewer_opponents() {
        let full: Board = "XX\n..\nOO".parse().unwrap();
        let thinned: Board = "XX\n..\n.O".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let a = Conqueror.evaluate(&full, Player::White, &mut rng);
        let b = Conqueror.evaluate(&thinned, Player::White, &mut rng);
        // A whole missing piece outweighs any tie-break draw.
        assert!(b > a);
    }
}
