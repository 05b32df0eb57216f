use alloc::collections::VecDeque;
use core::num::Saturating;
use hashbrown::HashSet;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Cells whose cover state changed during one reveal, for targeted redraws.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealResult {
    pub outcome: RevealOutcome,
    pub changed: SmallVec<[Pos; 8]>,
}

impl RevealResult {
    fn none() -> Self {
        Self {
            outcome: RevealOutcome::NoChange,
            changed: SmallVec::new(),
        }
    }

    pub fn changed_count(&self) -> usize {
        self.changed.len()
    }

    pub const fn has_update(&self) -> bool {
        self.outcome.has_update()
    }
}

/// One complete game from deployment to a terminal status.
///
/// The session exclusively owns its board and performs no locking; a
/// multi-threaded caller must serialize access. Every operation runs to
/// completion on the calling thread.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    layout: MineLayout,
    board: Array2<CellState>,
    revealed_count: Saturating<CellCount>,
    flagged_count: Saturating<CellCount>,
    status: GameStatus,
}

impl GameSession {
    /// Fresh session over a deployed layout: every cell covered and
    /// unmarked, play in progress.
    pub fn new(layout: MineLayout) -> Self {
        let (rows, cols) = layout.size();
        Self {
            layout,
            board: Array2::default([rows.into(), cols.into()]),
            revealed_count: Saturating(0),
            flagged_count: Saturating(0),
            status: GameStatus::default(),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn config(&self) -> GameConfig {
        self.layout.config()
    }

    pub fn size(&self) -> Pos {
        self.layout.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.layout.mine_count()
    }

    /// Mine budget not yet spent on flags, always in `0..=total_mines`.
    pub fn mines_remaining(&self) -> CellCount {
        self.layout.mine_count() - self.flagged_count.0
    }

    pub fn cell_at(&self, pos: Pos) -> CellState {
        self.board[pos.as_index()]
    }

    /// Display derivation for one cell, pure with respect to the board.
    pub fn draw_tile(&self, pos: Pos) -> Result<DrawTile> {
        let pos = self.layout.validate_coords(pos)?;
        let lost = matches!(self.status, GameStatus::Lost);
        Ok(self.cell_at(pos).draw(self.layout[pos], lost))
    }

    /// Uncovers a covered, unmarked cell.
    ///
    /// A mine ends the game on the spot. A zero-adjacency cell opens its
    /// whole connected zero region plus the numbered border. Flagged and
    /// already-uncovered targets are left untouched, as is a finished
    /// session.
    pub fn reveal(&mut self, pos: Pos) -> Result<RevealResult> {
        let pos = self.layout.validate_coords(pos)?;

        if self.status.is_finished() {
            return Ok(RevealResult::none());
        }
        if !matches!(self.board[pos.as_index()], CellState::Covered) {
            return Ok(RevealResult::none());
        }

        let mut result = RevealResult::none();

        if self.layout[pos] {
            // stored count is irrelevant under a mine
            self.board[pos.as_index()] = CellState::Uncovered(0);
            self.status = GameStatus::Lost;
            result.outcome = RevealOutcome::HitMine;
            result.changed.push(pos);
            log::debug!("mine hit at {:?}", pos);
            return Ok(result);
        }

        self.uncover(pos, &mut result.changed);
        if self.layout.adjacent_mines(pos) == 0 {
            self.cascade(pos, &mut result.changed);
        }

        result.outcome = if self.revealed_count == Saturating(self.layout.safe_cell_count()) {
            self.status = GameStatus::Won;
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        };
        Ok(result)
    }

    /// Flags or unflags a covered cell against the mine budget.
    ///
    /// Flagging with the budget spent is a soft rejection: the board is
    /// untouched and the caller gets `NoMarksLeft` to surface.
    pub fn toggle_flag(&mut self, pos: Pos) -> Result<MarkOutcome> {
        use CellState::*;

        let pos = self.layout.validate_coords(pos)?;

        if self.status.is_finished() {
            return Ok(MarkOutcome::NoChange);
        }

        Ok(match self.board[pos.as_index()] {
            Covered if self.mines_remaining() == 0 => MarkOutcome::NoMarksLeft,
            Covered => {
                self.board[pos.as_index()] = Flagged;
                self.flagged_count += 1;
                MarkOutcome::Flagged
            }
            Flagged => {
                self.board[pos.as_index()] = Covered;
                self.flagged_count -= 1;
                MarkOutcome::Unflagged
            }
            Uncovered(_) => MarkOutcome::NoChange,
        })
    }

    fn uncover(&mut self, pos: Pos, changed: &mut SmallVec<[Pos; 8]>) {
        self.board[pos.as_index()] = CellState::Uncovered(self.layout.adjacent_mines(pos));
        // only safe cells count toward the win
        self.revealed_count += 1;
        changed.push(pos);
    }

    /// Worklist flood fill over a zero-adjacency region.
    ///
    /// Each cell flips covered to uncovered at most once, bounding the
    /// traversal by the board size. Flagged cells stay put and fence the
    /// region alongside numbered cells; no mine borders a zero cell, so the
    /// cascade can never uncover one.
    fn cascade(&mut self, start: Pos, changed: &mut SmallVec<[Pos; 8]>) {
        let mut visited: HashSet<Pos> = HashSet::new();
        visited.insert(start);
        let mut to_visit: VecDeque<Pos> = self
            .layout
            .iter_neighbors(start)
            .filter(|&pos| matches!(self.board[pos.as_index()], CellState::Covered))
            .collect();

        while let Some(pos) = to_visit.pop_front() {
            if !visited.insert(pos) {
                continue;
            }
            if !matches!(self.board[pos.as_index()], CellState::Covered) {
                continue;
            }

            self.uncover(pos, changed);
            log::trace!("cascade opened {:?}", pos);

            if self.layout.adjacent_mines(pos) == 0 {
                to_visit.extend(
                    self.layout
                        .iter_neighbors(pos)
                        .filter(|&next| matches!(self.board[next.as_index()], CellState::Covered))
                        .filter(|next| !visited.contains(next)),
                );
            }
        }
    }
}
