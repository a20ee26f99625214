//! Game board: a fixed grid of cells filled by column drops.
//!
//! Row 0 is the top of the board, so tiles land on the highest free row
//! index of a column. Wins are detected by scanning the four line directions
//! through the tile that was just placed.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
use core::fmt;

use crate::common::GameError;
use crate::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::player::Player;

const EMPTY_FIELD: char = ' ';
const COLUMN_DELIMITER: char = '|';

/// Content of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn occupant(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(p) => Some(*p),
        }
    }
}

/// A line through the board, scanned both ways from a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Vertical,
    Horizontal,
    /// Top-left to bottom-right (`\`).
    Diagonal,
    /// Bottom-left to top-right (`/`).
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Vertical,
        Direction::Horizontal,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// Unit step as `(column delta, row delta)`. The opposite side of the
    /// line is walked with the negated step.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Vertical => (0, 1),
            Direction::Horizontal => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// Where a tile landed and whether it completed a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub column: usize,
    pub row: usize,
    pub winning: bool,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    win_length: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Board of the default 7x6 size.
    pub fn new(win_length: usize) -> Self {
        Self::with_size(win_length, DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Board of the given size. A `win_length` larger than both dimensions
    /// gives a board nobody can win on, which is allowed. A zero width or
    /// height gives a board with no cells that is full from the start.
    pub fn with_size(win_length: usize, width: usize, height: usize) -> Self {
        Board {
            width,
            height,
            win_length,
            cells: vec![Cell::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    #[inline]
    fn index(&self, column: usize, row: usize) -> usize {
        row * self.width + column
    }

    /// Cell at (`column`, `row`). Panics when out of range.
    pub fn cell(&self, column: usize, row: usize) -> Cell {
        assert!(column < self.width && row < self.height, "cell out of range");
        self.cells[self.index(column, row)]
    }

    fn occupant_at(&self, column: isize, row: isize) -> Option<Player> {
        if column < 0 || row < 0 {
            return None;
        }
        let (column, row) = (column as usize, row as usize);
        if column >= self.width || row >= self.height {
            return None;
        }
        self.cells[self.index(column, row)].occupant()
    }

    pub fn is_valid_column_index(&self, index: usize) -> bool {
        index < self.width
    }

    /// Whether the top cell of the column is taken. `index` must be valid.
    pub fn is_column_full(&self, index: usize) -> bool {
        self.height == 0 || !self.cell(index, 0).is_empty()
    }

    pub fn is_board_full(&self) -> bool {
        (0..self.width).all(|c| self.is_column_full(c))
    }

    /// Columns that can still take a tile, left to right.
    pub fn open_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.width).filter(move |&c| !self.is_column_full(c))
    }

    /// Number of occupied cells.
    pub fn filled_cells(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Row a tile dropped into `column` would land on.
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        (0..self.height)
            .rev()
            .find(|&row| self.cell(column, row).is_empty())
    }

    /// Length of the run of `player` tiles through (`column`, `row`) along
    /// `direction`, counting the cell itself.
    pub fn line_length(
        &self,
        player: Player,
        column: usize,
        row: usize,
        direction: Direction,
    ) -> usize {
        let (dx, dy) = direction.step();
        1 + self.run(player, column, row, dx, dy) + self.run(player, column, row, -dx, -dy)
    }

    // contiguous `player` tiles after (column, row), not counting it
    fn run(&self, player: Player, column: usize, row: usize, dx: isize, dy: isize) -> usize {
        let mut count = 0;
        let mut x = column as isize + dx;
        let mut y = row as isize + dy;
        while self.occupant_at(x, y) == Some(player) {
            count += 1;
            x += dx;
            y += dy;
        }
        count
    }

    fn is_winning_move(&self, player: Player, column: usize, row: usize) -> bool {
        Direction::ALL
            .iter()
            .any(|&d| self.line_length(player, column, row, d) >= self.win_length)
    }

    /// Drop a tile for `player` into `column` and report whether it wins.
    ///
    /// A full column leaves the board untouched and returns `false`; callers
    /// are expected to check [`Board::is_column_full`] first.
    pub fn place_tile(&mut self, player: Player, column: usize) -> bool {
        match self.try_place(player, column) {
            Ok(placement) => placement.winning,
            Err(e) => {
                log::warn!("ignored placement by {} in column {}: {}", player, column, e);
                false
            }
        }
    }

    /// Checked variant of [`Board::place_tile`].
    pub fn try_place(&mut self, player: Player, column: usize) -> Result<Placement, GameError> {
        if !self.is_valid_column_index(column) {
            return Err(GameError::InvalidColumn(column));
        }
        let row = self
            .landing_row(column)
            .ok_or(GameError::ColumnFull(column))?;
        let idx = self.index(column, row);
        self.cells[idx] = Cell::Occupied(player);

        let winning = self.is_winning_move(player, column, row);
        log::debug!(
            "{} placed at column {}, row {}{}",
            player,
            column,
            row,
            if winning { " (winning)" } else { "" }
        );
        Ok(Placement {
            column,
            row,
            winning,
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", COLUMN_DELIMITER)?;
            for column in 0..self.width {
                match self.cell(column, row) {
                    Cell::Empty => write!(f, "{}", EMPTY_FIELD)?,
                    Cell::Occupied(p) => write!(f, "{}", p)?,
                }
                write!(f, "{}", COLUMN_DELIMITER)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{ width: {}, height: {}, win_length: {} }}",
            self.width, self.height, self.win_length
        )?;
        write!(f, "{}", self)
    }
}
