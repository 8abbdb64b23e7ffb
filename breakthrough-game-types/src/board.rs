use std::fmt;
use std::str::FromStr;

use itertools::iproduct;
use serde::{Deserialize, Serialize};

use crate::{MalformedBoardError, Move, Player, TurnTakingGame, VictorDeterminableGame};

/// One cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing here.
    Empty,
    /// A piece owned by the given side.
    Piece(Player),
}

impl Cell {
    /// The single character used for this cell in the text board format.
    pub fn as_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Piece(player) => player.piece_char(),
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Cell::Empty),
            'X' => Some(Cell::Piece(Player::White)),
            'O' => Some(Cell::Piece(Player::Black)),
            _ => None,
        }
    }

    /// True when no piece occupies the cell.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A cell coordinate. Row 0 is White's home side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index.
    pub col: usize,
}

impl Position {
    /// Build a position from a (row, col) pair.
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An owned snapshot of the grid.
///
/// Boards never change in place: [`Board::advance`] and [`Board::apply`]
/// return fresh boards and leave the input alone, so every node of a search
/// tree owns its state outright. Dimensions are fixed for the lifetime of a
/// game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// The starting layout: the top `home_rows` rows filled with White
    /// pieces, the bottom `home_rows` rows with Black pieces, everything
    /// else empty.
    ///
    /// Fails if the grid is degenerate or the two home regions would meet.
    pub fn start_position(
        rows: usize,
        cols: usize,
        home_rows: usize,
    ) -> Result<Self, MalformedBoardError> {
        if rows == 0 || cols == 0 {
            return Err(MalformedBoardError::EmptyGrid);
        }
        if home_rows == 0 || home_rows * 2 >= rows {
            return Err(MalformedBoardError::HomeRowsOutOfRange { rows, home_rows });
        }

        let mut cells = vec![Cell::Empty; rows * cols];
        for (row, col) in iproduct!(0..home_rows, 0..cols) {
            cells[row * cols + col] = Cell::Piece(Player::White);
        }
        for (row, col) in iproduct!(rows - home_rows..rows, 0..cols) {
            cells[row * cols + col] = Cell::Piece(Player::Black);
        }

        Ok(Board { rows, cols, cells })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The cell at `pos`. Panics if `pos` is off the board.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[self.index(pos)]
    }

    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        let index = self.index(pos);
        self.cells[index] = cell;
    }

    fn index(&self, pos: Position) -> usize {
        assert!(pos.row < self.rows && pos.col < self.cols, "{pos} is off the board");
        pos.row * self.cols + pos.col
    }

    /// Whether a signed (row, col) pair lands on the board.
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// How many pieces `player` has on the board.
    pub fn piece_count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Piece(player))
            .count()
    }

    /// The positions of all of `player`'s pieces, in row-major order.
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = Position> + '_ {
        iproduct!(0..self.rows, 0..self.cols)
            .map(|(row, col)| Position::new(row, col))
            .filter(move |pos| self.get(*pos) == Cell::Piece(player))
    }

    /// True when applying `mv` would remove an opposing piece.
    pub fn is_capture(&self, mv: &Move) -> bool {
        self.get(mv.to) == Cell::Piece(mv.player.opponent())
    }

    /// The winning side, if any. Conditions are checked in a fixed order:
    /// White on its goal row, Black on its goal row, White out of pieces
    /// (Black wins), Black out of pieces (White wins).
    pub fn winner(&self) -> Option<Player> {
        for player in [Player::White, Player::Black] {
            let goal = player.goal_row(self.rows);
            let breached = (0..self.cols)
                .any(|col| self.get(Position::new(goal, col)) == Cell::Piece(player));
            if breached {
                return Some(player);
            }
        }
        if self.piece_count(Player::White) == 0 {
            return Some(Player::Black);
        }
        if self.piece_count(Player::Black) == 0 {
            return Some(Player::White);
        }
        None
    }
}

impl TurnTakingGame for Board {
    type Action = Move;

    fn legal_actions(&self, player: Player) -> Vec<Move> {
        self.generate_moves(player)
    }

    fn advance(&self, action: &Move) -> Self {
        Board::advance(self, action)
    }
}

impl VictorDeterminableGame for Board {
    fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    fn get_winner(&self) -> Option<Player> {
        self.winner()
    }
}

/// One character per cell, rows separated by newlines, nothing else.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = MalformedBoardError;

    /// Parse the text format produced by [`Board`]'s `Display` impl. Rejects
    /// empty input, ragged rows, and unknown characters rather than coercing
    /// them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().filter(|line| !line.is_empty()).collect();
        let rows = lines.len();
        let cols = lines.first().map_or(0, |line| line.chars().count());
        if rows == 0 || cols == 0 {
            return Err(MalformedBoardError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(MalformedBoardError::RaggedRow {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, c) in line.chars().enumerate() {
                let cell = Cell::from_char(c)
                    .ok_or(MalformedBoardError::UnknownCell { row, col, found: c })?;
                cells.push(cell);
            }
        }

        Ok(Board { rows, cols, cells })
    }
}
