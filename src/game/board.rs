use super::{Direction, PlayerMark};
use crate::error::{BoardError, ConfigError};

pub const MIN_ROWS: usize = 4;
pub const MAX_ROWS: usize = 13;
pub const MIN_COLS: usize = 4;
pub const MAX_COLS: usize = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Slot {
    #[default]
    Empty,
    Occupied(PlayerMark),
}

impl Slot {
    pub fn mark(self) -> Option<PlayerMark> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(mark) => Some(mark),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Slot::Empty
    }
}

/// Result of dropping a piece into a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Placed { row: usize, col: usize },
    ColumnFull,
}

/// Fixed-size grid stored row-major, row 0 at the bottom.
///
/// Neighbors are never stored; they are computed from coordinates on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    slots: Vec<Slot>,
    occupied: usize,
}

impl Board {
    /// Create a new empty board, rejecting sizes outside the supported range
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if !(MIN_ROWS..=MAX_ROWS).contains(&rows) {
            return Err(ConfigError::Rows(rows));
        }
        if !(MIN_COLS..=MAX_COLS).contains(&cols) {
            return Err(ConfigError::Cols(cols));
        }

        Ok(Board {
            rows,
            cols,
            slots: vec![Slot::Empty; rows * cols],
            occupied: 0,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of filled slots
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if row >= self.rows || col >= self.cols {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Get the slot at a specific position
    /// Row 0 is the bottom
    pub fn occupant(&self, row: usize, col: usize) -> Result<Slot, BoardError> {
        let idx = self.index(row, col)?;
        Ok(self.slots[idx])
    }

    /// Coordinate one step away in `dir`, or `None` past the edge
    pub fn neighbor(&self, row: usize, col: usize, dir: Direction) -> Option<(usize, usize)> {
        let (dr, dc) = dir.offset();
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < self.rows && c < self.cols).then_some((r, c))
    }

    /// Number of pieces stacked in a column
    pub fn column_height(&self, col: usize) -> Result<usize, BoardError> {
        self.index(0, col)?;
        Ok((0..self.rows)
            .take_while(|&row| !self.slots[row * self.cols + col].is_empty())
            .count())
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.column_height(col)
            .map_or(true, |height| height == self.rows)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.occupied == self.slots.len()
    }

    /// Columns that still accept a piece
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.cols)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Drop a piece in a column; it settles on the lowest empty slot
    pub fn place(&mut self, col: usize, mark: PlayerMark) -> Result<MoveOutcome, BoardError> {
        self.index(0, col)?;

        for row in 0..self.rows {
            let idx = row * self.cols + col;
            if self.slots[idx].is_empty() {
                self.slots[idx] = Slot::Occupied(mark);
                self.occupied += 1;
                return Ok(MoveOutcome::Placed { row, col });
            }
        }

        Ok(MoveOutcome::ColumnFull)
    }

    /// Write a slot directly, ignoring gravity. Only for building test fixtures.
    #[cfg(test)]
    pub(crate) fn set(&mut self, row: usize, col: usize, slot: Slot) {
        let idx = self.index(row, col).expect("fixture coordinate on board");
        match (self.slots[idx].is_empty(), slot.is_empty()) {
            (true, false) => self.occupied += 1,
            (false, true) => self.occupied -= 1,
            _ => {}
        }
        self.slots[idx] = slot;
    }
}
