use std::error::Error;
use std::fmt;

use crate::Move;

/// A move whose shape or occupancy preconditions do not hold on the board it
/// was applied to.
///
/// Moves produced by the move generator are valid by construction, so this
/// only fires for moves arriving from outside the engine (user input, files,
/// the network). It is not retried; callers treat it as a programming error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveError {
    /// Source or destination is off the board.
    OutOfBounds(Move),
    /// The source cell does not hold a piece of the acting player.
    SourceNotOwned(Move),
    /// The destination is not one forward row and at most one column away.
    IllegalShape(Move),
    /// A straight move onto an occupied cell, or a diagonal move onto the
    /// mover's own piece.
    DestinationBlocked(Move),
}

impl fmt::Display for InvalidMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMoveError::OutOfBounds(mv) => {
                write!(f, "move {mv} leaves the board")
            }
            InvalidMoveError::SourceNotOwned(mv) => {
                write!(f, "move {mv} does not start on a {} piece", mv.player)
            }
            InvalidMoveError::IllegalShape(mv) => {
                write!(f, "move {mv} is not a single forward or diagonal step")
            }
            InvalidMoveError::DestinationBlocked(mv) => {
                write!(f, "move {mv} is blocked at its destination")
            }
        }
    }
}

impl Error for InvalidMoveError {}

/// A textual board that cannot be turned into a valid [`crate::Board`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedBoardError {
    /// No rows, or rows with no columns.
    EmptyGrid,
    /// A row whose length differs from the first row's.
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A character that is not one of `.`, `X`, `O`.
    UnknownCell {
        /// Zero-based row of the character.
        row: usize,
        /// Zero-based column of the character.
        col: usize,
        /// The character itself.
        found: char,
    },
    /// A starting layout whose home rows meet or overlap.
    HomeRowsOutOfRange {
        /// Total rows requested.
        rows: usize,
        /// Home rows requested per side.
        home_rows: usize,
    },
}

impl fmt::Display for MalformedBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedBoardError::EmptyGrid => write!(f, "board has no cells"),
            MalformedBoardError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} cells where {expected} were expected"
            ),
            MalformedBoardError::UnknownCell { row, col, found } => {
                write!(f, "unknown cell character {found:?} at ({row}, {col})")
            }
            MalformedBoardError::HomeRowsOutOfRange { rows, home_rows } => write!(
                f,
                "{home_rows} home rows per side do not fit on {rows} rows"
            ),
        }
    }
}

impl Error for MalformedBoardError {}
