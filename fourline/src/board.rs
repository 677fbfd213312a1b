use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{COLS, ROWS};
use crate::notation::Placement;
use crate::GameError;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Red in the move notation; always opens the game.
    First,
    /// Black in the move notation.
    Second,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty,
    First,
    Second,
}

impl Cell {
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::First => Some(Side::First),
            Cell::Second => Some(Side::Second),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::First => Cell::First,
            Side::Second => Cell::Second,
        }
    }
}

/// Grid coordinate; row 0 is the top of the board.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[Cell; COLS]; ROWS],
    turn: Side,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            grid: [[Cell::Empty; COLS]; ROWS],
            turn: Side::First,
        }
    }

    /// Replays a history, each placement for its own side. The side after the
    /// last placement is left to move.
    pub fn from_history(moves: &[Placement]) -> Result<Self, GameError> {
        let mut board = Self::new();
        for mv in moves {
            board.turn = mv.side;
            board.drop(mv.column)?;
            board.switch_turn();
        }
        Ok(board)
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    /// The cell at `at`, or `None` off the board.
    pub fn cell(&self, at: Coord) -> Option<Cell> {
        self.grid.get(at.row)?.get(at.col).copied()
    }

    /// Unchecked lookup for coordinates known to be on the board.
    pub(crate) fn at(&self, at: Coord) -> Cell {
        self.grid[at.row][at.col]
    }

    /// Drops a disc for the side to move into `column` and returns the row it
    /// landed on. The turn is left unchanged.
    pub fn drop(&mut self, column: usize) -> Result<usize, GameError> {
        if column >= COLS {
            return Err(GameError::ColumnOutOfBounds { column });
        }
        let row = (0..ROWS)
            .rev()
            .find(|&row| self.grid[row][column].is_empty())
            .ok_or(GameError::ColumnFull { column })?;
        self.grid[row][column] = self.turn.into();
        Ok(row)
    }

    pub fn switch_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// Discs stack from the bottom, so a filled top cell means a filled column.
    /// Columns off the board count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        column >= COLS || !self.grid[0][column].is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.grid.iter().flatten().all(|cell| !cell.is_empty())
    }

    pub fn open_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLS).filter(move |&col| !self.is_column_full(col))
    }

    #[cfg(test)]
    pub(crate) fn disc_count(&self) -> usize {
        self.grid.iter().flatten().filter(|cell| !cell.is_empty()).count()
    }

    /// The same position with every disc, and the side to move, swapped.
    #[cfg(test)]
    pub(crate) fn mirrored(&self) -> Self {
        let mut grid = self.grid;
        for cell in grid.iter_mut().flatten() {
            *cell = match cell.side() {
                Some(side) => side.opponent().into(),
                None => Cell::Empty,
            };
        }
        Self {
            grid,
            turn: self.turn.opponent(),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            for cell in row {
                let c = match cell {
                    Cell::Empty => '.',
                    Cell::First => 'R',
                    Cell::Second => 'B',
                };
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        for col in 0..COLS {
            write!(f, "{col} ")?;
        }
        writeln!(f)
    }
}
