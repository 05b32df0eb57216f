#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use controller::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod cell;
mod controller;
mod engine;
mod error;
mod generator;
mod types;

/// Board dimensions and mine budget for one session.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    /// Rejects empty boards and mine budgets that exceed the cell count.
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::EmptyBoard);
        }
        if mines > area(rows, cols) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self::new_unchecked(rows, cols, mines))
    }

    pub const fn size(&self) -> Pos {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.rows, self.cols)
    }
}

impl Default for GameConfig {
    /// The classic 16x16 board with 40 mines.
    fn default() -> Self {
        Self::new_unchecked(16, 16, 40)
    }
}

/// Fixed per-session mine placement: which cells hold mines and, for safe
/// cells, how many of their neighbors do.
///
/// Both arrays are frozen once deployment completes. The adjacency entry
/// under a mine is not meaningful.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    adjacency: Array2<u8>,
    mine_count: CellCount,
}

impl MineLayout {
    pub(crate) fn empty((rows, cols): Pos) -> Self {
        Self {
            mine_mask: Array2::default([rows.into(), cols.into()]),
            adjacency: Array2::default([rows.into(), cols.into()]),
            mine_count: 0,
        }
    }

    /// Builds a layout with mines at fixed positions. Duplicate positions
    /// are ignored.
    pub fn from_mine_positions(size: Pos, mines: &[Pos]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::EmptyBoard);
        }
        let mut layout = Self::empty(size);
        for &pos in mines {
            layout.validate_coords(pos)?;
            layout.place_mine(pos);
        }
        Ok(layout)
    }

    /// Marks `pos` as a mine and bumps the adjacency count of every safe
    /// neighbor. Returns false, changing nothing, when `pos` already holds
    /// a mine, so a repeated draw of one position is discarded rather than
    /// counted twice.
    pub(crate) fn place_mine(&mut self, pos: Pos) -> bool {
        if self.mine_mask[pos.as_index()] {
            return false;
        }
        self.mine_mask[pos.as_index()] = true;
        self.mine_count += 1;
        for neighbor in self.iter_neighbors(pos) {
            if !self.mine_mask[neighbor.as_index()] {
                self.adjacency[neighbor.as_index()] += 1;
            }
        }
        true
    }

    pub fn config(&self) -> GameConfig {
        let (rows, cols) = self.size();
        GameConfig {
            rows,
            cols,
            mines: self.mine_count,
        }
    }

    pub fn validate_coords(&self, pos: Pos) -> Result<Pos> {
        let (rows, cols) = self.size();
        if pos.0 < rows && pos.1 < cols {
            Ok(pos)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Pos {
        let dim = self.mine_mask.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len().try_into().unwrap()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, pos: Pos) -> bool {
        self[pos]
    }

    /// Number of mined neighbors, precomputed at deployment. Only valid for
    /// safe cells.
    pub fn adjacent_mines(&self, pos: Pos) -> u8 {
        self.adjacency[pos.as_index()]
    }

    pub(crate) fn iter_neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + use<> {
        neighbors(pos, self.size())
    }
}

impl Index<Pos> for MineLayout {
    type Output = bool;

    fn index(&self, pos: Pos) -> &Self::Output {
        &self.mine_mask[pos.as_index()]
    }
}

/// Outcome of a flag toggle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Flagged,
    Unflagged,
    /// The flag budget is spent; the cell was left untouched.
    NoMarksLeft,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Flagged | Self::Unflagged)
    }
}

/// Outcome of a reveal action.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}
