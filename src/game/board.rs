use std::fmt;

use super::Player;
use crate::error::BoardError;

pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 6;

/// Smallest width or height on which four in a row can fit.
pub const MIN_DIMENSION: usize = 4;

/// Number of pieces in a winning line.
const LINE_LEN: usize = 4;

/// Direction vectors as (row step, column step): horizontal, vertical,
/// diagonal down-right, diagonal down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// Why a piece could not be dropped. Neither case touches the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropError {
    ColumnFull,
    InvalidColumn,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    /// Row-major, row 0 is the top.
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board. Both dimensions must be at least 4.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        let invalid = BoardError::InvalidDimensions { width, height };
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return Err(invalid);
        }
        let len = width.checked_mul(height).ok_or(invalid)?;
        Ok(Board {
            width,
            height,
            cells: vec![Cell::Empty; len],
        })
    }

    /// An empty board with the same dimensions.
    pub fn empty_like(&self) -> Board {
        Board {
            width: self.width,
            height: self.height,
            cells: vec![Cell::Empty; self.cells.len()],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top, row `height - 1` is the bottom.
    pub fn cell_at(&self, row: usize, column: usize) -> Result<Cell, BoardError> {
        if row >= self.height || column >= self.width {
            return Err(BoardError::OutOfBounds { row, column });
        }
        Ok(self.cells[self.index(row, column)])
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= self.width {
            return true;
        }
        !self.cells[self.index(0, column)].is_empty()
    }

    /// Columns that still accept a piece, left to right.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&column| !self.is_column_full(column))
            .collect()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_in_column(&mut self, column: usize, player: Player) -> Result<usize, DropError> {
        if column >= self.width {
            return Err(DropError::InvalidColumn);
        }

        for row in (0..self.height).rev() {
            let idx = self.index(row, column);
            if self.cells[idx].is_empty() {
                self.cells[idx] = Cell::Occupied(player);
                return Ok(row);
            }
        }

        Err(DropError::ColumnFull)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Scan every cell for a line of four starting there and return the
    /// owner of the first one found.
    pub fn find_four(&self) -> Option<Player> {
        for row in 0..self.height {
            for column in 0..self.width {
                let Cell::Occupied(player) = self.cells[self.index(row, column)] else {
                    continue;
                };
                for &(dr, dc) in &DIRECTIONS {
                    if self.line_from(row, column, dr, dc, player) {
                        return Some(player);
                    }
                }
            }
        }
        None
    }

    /// Check whether the piece at (row, column) sits on a line of four.
    ///
    /// Only the four lines through that cell are examined, so this agrees
    /// with [`Board::find_four`] as long as no line existed before the piece
    /// at (row, column) was placed.
    pub fn check_win_at(&self, row: usize, column: usize) -> bool {
        let Ok(Cell::Occupied(player)) = self.cell_at(row, column) else {
            return false;
        };

        DIRECTIONS.iter().any(|&(dr, dc)| {
            let count = 1
                + self.run_length(row, column, dr, dc, player)
                + self.run_length(row, column, -dr, -dc, player);
            count >= LINE_LEN
        })
    }

    /// True if the `LINE_LEN` cells starting at (row, column) along
    /// (dr, dc) are all on the board and owned by `player`.
    fn line_from(&self, row: usize, column: usize, dr: isize, dc: isize, player: Player) -> bool {
        (0..LINE_LEN as isize).all(|step| {
            self.offset(row, column, dr * step, dc * step)
                .is_some_and(|(r, c)| self.cells[self.index(r, c)] == Cell::Occupied(player))
        })
    }

    /// Count consecutive `player` cells after (row, column) along (dr, dc),
    /// not counting the starting cell.
    fn run_length(&self, row: usize, column: usize, dr: isize, dc: isize, player: Player) -> usize {
        let mut count = 0;
        let (mut r, mut c) = (row, column);
        while let Some((nr, nc)) = self.offset(r, c, dr, dc) {
            if self.cells[self.index(nr, nc)] != Cell::Occupied(player) {
                break;
            }
            count += 1;
            r = nr;
            c = nc;
        }
        count
    }

    fn offset(&self, row: usize, column: usize, dr: isize, dc: isize) -> Option<(usize, usize)> {
        let r = row.checked_add_signed(dr)?;
        let c = column.checked_add_signed(dc)?;
        (r < self.height && c < self.width).then_some((r, c))
    }

    fn index(&self, row: usize, column: usize) -> usize {
        row * self.width + column
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cells: vec![Cell::Empty; DEFAULT_WIDTH * DEFAULT_HEIGHT],
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            let line: Vec<&str> = (0..self.width)
                .map(|column| match self.cells[self.index(row, column)] {
                    Cell::Empty => ".",
                    Cell::Occupied(player) => player.symbol(),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
