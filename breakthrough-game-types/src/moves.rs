use std::fmt;

use itertools::iproduct;
use serde::{Deserialize, Serialize};

use crate::{Board, Cell, InvalidMoveError, Player, Position};

/// A single action: `player` steps the piece on `from` to `to`.
///
/// Landing on an opposing piece removes it from the board. There are no
/// sideways, backward, or multi-step moves in this game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The acting side.
    pub player: Player,
    /// The cell the piece starts on.
    pub from: Position,
    /// The cell the piece lands on.
    pub to: Position,
}

impl Move {
    /// Build a move from bare coordinates.
    pub fn new(player: Player, from: (usize, usize), to: (usize, usize)) -> Self {
        Move {
            player,
            from: Position::new(from.0, from.1),
            to: Position::new(to.0, to.1),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.player.piece_char(), self.from, self.to)
    }
}

impl Board {
    /// Every legal move for `player` on this board.
    ///
    /// Pieces are scanned in row-major order and each piece's moves come out
    /// straight first, then diagonal-left, then diagonal-right. The order is
    /// deterministic so that ties between equally scored moves always break
    /// the same way.
    ///
    /// An empty vector means `player` cannot act; the search engine scores
    /// that as a loss for the stuck side.
    pub fn generate_moves(&self, player: Player) -> Vec<Move> {
        let mut moves = Vec::new();

        for (row, col) in iproduct!(0..self.rows(), 0..self.cols()) {
            let from = Position::new(row, col);
            if self.get(from) != Cell::Piece(player) {
                continue;
            }

            let forward = row as isize + player.forward();
            if !self.in_bounds(forward, col as isize) {
                continue;
            }
            let forward = forward as usize;

            if self.get(Position::new(forward, col)).is_empty() {
                moves.push(Move {
                    player,
                    from,
                    to: Position::new(forward, col),
                });
            }

            for dc in [-1, 1] {
                let diag_col = col as isize + dc;
                if !self.in_bounds(forward as isize, diag_col) {
                    continue;
                }
                let to = Position::new(forward, diag_col as usize);
                match self.get(to) {
                    Cell::Empty => moves.push(Move { player, from, to }),
                    Cell::Piece(owner) if owner == player.opponent() => {
                        moves.push(Move { player, from, to })
                    }
                    Cell::Piece(_) => {}
                }
            }
        }

        moves
    }

    /// Check every precondition of `mv` against this board.
    pub fn validate(&self, mv: &Move) -> Result<(), InvalidMoveError> {
        let (from, to) = (mv.from, mv.to);
        if !self.in_bounds(from.row as isize, from.col as isize)
            || !self.in_bounds(to.row as isize, to.col as isize)
        {
            return Err(InvalidMoveError::OutOfBounds(*mv));
        }
        if self.get(from) != Cell::Piece(mv.player) {
            return Err(InvalidMoveError::SourceNotOwned(*mv));
        }

        let row_delta = to.row as isize - from.row as isize;
        let col_delta = to.col as isize - from.col as isize;
        if row_delta != mv.player.forward() || col_delta.abs() > 1 {
            return Err(InvalidMoveError::IllegalShape(*mv));
        }

        let destination = self.get(to);
        let blocked = if col_delta == 0 {
            !destination.is_empty()
        } else {
            destination == Cell::Piece(mv.player)
        };
        if blocked {
            return Err(InvalidMoveError::DestinationBlocked(*mv));
        }

        Ok(())
    }

    /// Apply a move arriving from outside the engine, validating it first.
    pub fn apply(&self, mv: &Move) -> Result<Board, InvalidMoveError> {
        self.validate(mv)?;
        Ok(self.advance(mv))
    }

    /// Apply a move produced by [`Board::generate_moves`], which is valid by
    /// construction. Returns a fresh board; `self` is untouched.
    pub fn advance(&self, mv: &Move) -> Board {
        debug_assert!(
            self.validate(mv).is_ok(),
            "advance called with an unvetted move: {mv}"
        );
        let mut next = self.clone();
        next.set(mv.from, Cell::Empty);
        next.set(mv.to, Cell::Piece(mv.player));
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_moves_stay_on_the_board() {
        let board = Board::start_position(5, 5, 1).unwrap();
        // Five straight moves plus a diagonal for each in-bounds neighbor.
        let moves = board.generate_moves(Player::White);
        assert_eq!(moves.len(), 13);
        for mv in &moves {
            assert!(board.in_bounds(mv.to.row as isize, mv.to.col as isize));
            assert_eq!(mv.to.row, 1);
        }
    }

    #[test]
    fn enumeration_order_is_row_major_then_straight_left_right() {
        let board = Board::start_position(5, 5, 1).unwrap();
        let moves = board.generate_moves(Player::White);

        assert_eq!(moves[0], Move::new(Player::White, (0, 0), (1, 0)));
        assert_eq!(moves[1], Move::new(Player::White, (0, 0), (1, 1)));
        assert_eq!(moves[2], Move::new(Player::White, (0, 1), (1, 1)));
        assert_eq!(moves[3], Move::new(Player::White, (0, 1), (1, 0)));
        assert_eq!(moves[4], Move::new(Player::White, (0, 1), (1, 2)));
    }

    #[test]
    fn straight_moves_require_an_empty_cell() {
        // White cannot step straight onto the black piece, only diagonally.
        let board: Board = ".X.\n.O.\n...".parse().unwrap();
        let moves = board.generate_moves(Player::White);

        assert!(!moves.contains(&Move::new(Player::White, (0, 1), (1, 1))));
        assert!(moves.contains(&Move::new(Player::White, (0, 1), (1, 0))));
        assert!(moves.contains(&Move::new(Player::White, (0, 1), (1, 2))));
    }

    #[test]
    fn diagonals_never_land_on_own_pieces() {
        let board: Board = ".X.\nXX.\n..O".parse().unwrap();
        let moves = board.generate_moves(Player::White);

        // The (0,1) piece is boxed in straight ahead and diagonal-left.
        assert!(!moves.contains(&Move::new(Player::White, (0, 1), (1, 1))));
        assert!(!moves.contains(&Move::new(Player::White, (0, 1), (1, 0))));
        assert!(moves.contains(&Move::new(Player::White, (0, 1), (1, 2))));
    }

    #[test]
    fn black_moves_toward_row_zero() {
        let board = Board::start_position(5, 5, 1).unwrap();
        let moves = board.generate_moves(Player::Black);
        assert!(moves.iter().all(|mv| mv.to.row == 3));
    }

    #[test]
    fn capture_replaces_the_opposing_piece() {
        let board: Board = "X..\n.O.\n...".parse().unwrap();
        let capture = Move::new(Player::White, (0, 0), (1, 1));
        assert!(board.is_capture(&capture));

        let next = board.apply(&capture).unwrap();
        assert_eq!(next.piece_count(Player::White), 1);
        assert_eq!(next.piece_count(Player::Black), 0);
        assert_eq!(next.get(Position::new(1, 1)), Cell::Piece(Player::White));
        assert!(next.get(Position::new(0, 0)).is_empty());

        // The input board is untouched.
        assert_eq!(board.piece_count(Player::Black), 1);
    }

    #[test]
    fn generated_moves_preserve_piece_counts() {
        let board = Board::start_position(6, 6, 2).unwrap();
        for mv in board.generate_moves(Player::White) {
            let next = board.advance(&mv);
            assert_eq!(next.piece_count(Player::White), 12);
            let captured = usize::from(board.is_capture(&mv));
            assert_eq!(
                next.piece_count(Player::Black),
                board.piece_count(Player::Black) - captured
            );
        }
    }

    #[test]
    fn apply_rejects_moves_that_break_the_rules() {
        let board = Board::start_position(5, 5, 1).unwrap();

        // Not the mover's piece.
        let mv = Move::new(Player::White, (4, 0), (3, 0));
        assert_eq!(board.apply(&mv), Err(InvalidMoveError::SourceNotOwned(mv)));

        // Sideways step.
        let mv = Move::new(Player::White, (0, 0), (0, 1));
        assert_eq!(board.apply(&mv), Err(InvalidMoveError::IllegalShape(mv)));

        // Two columns over in a single step.
        let mv = Move::new(Player::Black, (4, 0), (3, 2));
        assert_eq!(board.apply(&mv), Err(InvalidMoveError::IllegalShape(mv)));

        // Off the board.
        let mv = Move::new(Player::Black, (4, 0), (5, 0));
        assert_eq!(board.apply(&mv), Err(InvalidMoveError::OutOfBounds(mv)));

        // Straight onto an occupied cell.
        let blocked: Board = ".X.\n.O.\n...".parse().unwrap();
        let mv = Move::new(Player::White, (0, 1), (1, 1));
        assert_eq!(
            blocked.apply(&mv),
            Err(InvalidMoveError::DestinationBlocked(mv))
        );
    }
}
