//! Game types for a Breakthrough-style capture game on a rectangular grid.
//!
//! Two players face each other across the board. Every piece moves one row
//! toward the opposing home side, either straight into an empty cell or
//! diagonally into a cell that is empty or holds an opposing piece (a
//! capture). Reaching the opposing home row, or eliminating every opposing
//! piece, wins.
//!
//! The search engine in `breakthrough-minimax` only sees the trait seams
//! defined here ([`TurnTakingGame`] and [`VictorDeterminableGame`]), so the
//! board representation can change without touching the search.

use std::fmt::Debug;

mod board;
mod error;
mod moves;

pub use board::{Board, Cell, Position};
pub use error::{InvalidMoveError, MalformedBoardError};
pub use moves::Move;

use serde::{Deserialize, Serialize};

/// One of the two sides of the game.
///
/// White starts on the top rows and moves toward higher row indices; Black
/// starts on the bottom rows and moves toward row zero. The two sides are
/// mirror images of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Top home rows, forward is +1 row per move.
    White,
    /// Bottom home rows, forward is -1 row per move.
    Black,
}

impl Player {
    /// The other side.
    pub fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// The row delta of a forward move for this side.
    pub fn forward(self) -> isize {
        match self {
            Player::White => 1,
            Player::Black => -1,
        }
    }

    /// The row this side is trying to reach, on a board with `rows` rows.
    pub fn goal_row(self, rows: usize) -> usize {
        match self {
            Player::White => rows - 1,
            Player::Black => 0,
        }
    }

    /// How far a piece of this side standing on `row` has traveled from its
    /// home side of the board.
    pub fn advancement(self, row: usize, rows: usize) -> usize {
        match self {
            Player::White => row,
            Player::Black => rows - 1 - row,
        }
    }

    /// The character used for this side's pieces in the text board format.
    pub fn piece_char(self) -> char {
        match self {
            Player::White => 'X',
            Player::Black => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

/// A game where the two sides alternate applying actions to an owned state.
///
/// `advance` must return a fresh state and leave `self` untouched; no two
/// states may share mutable storage.
pub trait TurnTakingGame: Clone + Debug {
    /// The action type for this game.
    type Action: Copy + Debug;

    /// All legal actions for `player`, in a deterministic order.
    ///
    /// An empty vector means the player cannot act, which the search treats
    /// as a loss for that player. It does not by itself mean the game is
    /// over.
    fn legal_actions(&self, player: Player) -> Vec<Self::Action>;

    /// The state that results from applying `action`.
    fn advance(&self, action: &Self::Action) -> Self;
}

/// A game that can report whether it has been decided, and for whom.
pub trait VictorDeterminableGame {
    /// True once a winning condition holds.
    fn is_over(&self) -> bool;

    /// The winning side, or `None` while the game is undecided. A game type
    /// with drawn outcomes may report `is_over()` with no winner.
    fn get_winner(&self) -> Option<Player>;
}
