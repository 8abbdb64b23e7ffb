use breakthrough_game_types::{Board, Player};
use breakthrough_minimax::Evaluate;
use decorum::N64;
use rand::RngCore;

use crate::tie_break;

/// Pushes forward: material difference weighted by ten, plus the total
/// distance its pieces have advanced from their home side.
///
/// `10 * (own - opponent) + sum(advancement of own pieces)` keeps material
/// dominant; advancement only decides between materially equal lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggressor;

impl Evaluate<Board, N64> for Aggressor {
    fn evaluate(&self, board: &Board, player: Player, rng: &mut dyn RngCore) -> N64 {
        let own = board.piece_count(player) as f64;
        let opponent = board.piece_count(player.opponent()) as f64;
        let advancement: usize = board
            .pieces(player)
            .map(|pos| player.advancement(pos.row, board.rows()))
            .sum();

        N64::from(10.0 * (own - opponent) + advancement as f64 + tie_break(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn opening_score_is_all_tie_break() {
        // Equal material, every piece still on its home row.
        let board = Board::start_position(5, 5, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let score = Aggressor.evaluate(&board, Player::White, &mut rng);
        assert!(score >= N64::from(0.0) && score < N64::from(1.0));
    }

    #[test]
    fn advancement_counts_rows_traveled() {
        // Two white pieces, one on row 0 and one two rows in; one black
        // piece: 10 * (2 - 1) + (0 + 2) = 12.
        let board: Board = "X..\n...\nX..\n..O".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let score = Aggressor.evaluate(&board, Player::White, &mut rng);
        assert!(score >= N64::from(12.0) && score < N64::from(13.0));
    }

    #[test]
    fn material_outweighs_advancement() {
        // A full rank on the home row beats one far-advanced piece.
        let strong: Board = "XX.\n...\n...\n..O".parse().unwrap();
        let weak: Board = "...\n...\nX..\n..O".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let a = Aggressor.evaluate(&strong, Player::White, &mut rng);
        let b = Aggressor.evaluate(&weak, Player::White, &mut rng);
        assert!(a > b);
    }
}
