use breakthrough_game_types::{Board, Player};
use breakthrough_minimax::Evaluate;
use decorum::N64;
use rand::RngCore;

use crate::tie_break;

/// Holds the line: material on both sides weighted by fifteen, minus how
/// far the opposing pieces have pushed toward its home row.
///
/// `15 * own - 15 * opponent - sum(advancement of opposing pieces)` makes
/// an advancing enemy piece progressively more urgent to remove.
#[derive(Debug, Clone, Copy, Default)]
pub struct Defender;

impl Evaluate<Board, N64> for Defender {
    fn evaluate(&self, board: &Board, player: Player, rng: &mut dyn RngCore) -> N64 {
        let opponent = player.opponent();
        let own_count = board.piece_count(player) as f64;
        let opponent_count = board.piece_count(opponent) as f64;
        let opponent_advancement: usize = board
            .pieces(opponent)
            .map(|pos| opponent.advancement(pos.row, board.rows()))
            .sum();

        N64::from(
            15.0 * own_count - 15.0 * opponent_count - opponent_advancement as f64
                + tie_break(rng),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn opening_score_is_all_tie_break() {
        let board = Board::start_position(5, 5, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let score = Defender.evaluate(&board, Player::White, &mut rng);
        assert!(score >= N64::from(0.0) && score < N64::from(1.0));
    }

    #[test]
    fn advancing_opponents_hurt_the_score() {
        // One black piece still home, versus the same piece two rows in:
        // 15 * 1 - 15 * 1 - 2 = -2.
        let home: Board = "X..\n...\n...\n..O".parse().unwrap();
        let pushed: Board = "X..\n.O.\n...\n...".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let a = Defender.evaluate(&home, Player::White, &mut rng);
        let b = Defender.evaluate(&pushed, Player::White, &mut rng);
        assert!(a >= N64::from(0.0) && a < N64::from(1.0));
        assert!(b >= N64::from(-2.0) && b < N64::from(-1.0));
    }
}
