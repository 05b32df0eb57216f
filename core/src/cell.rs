use serde::{Deserialize, Serialize};

/// Player-visible state stored for each cell of the board.
///
/// A mark can only exist while a cell is covered, so cover and mark state
/// fold into a single enum without losing information.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Covered,
    Flagged,
    Uncovered(u8),
}

impl CellState {
    pub const fn is_covered(self) -> bool {
        matches!(self, Self::Covered | Self::Flagged)
    }

    /// What the presentation layer should draw for this cell, given whether
    /// it hides a mine and whether the session was lost.
    ///
    /// Pure read-time derivation; the stored state keeps recording the
    /// player's actions even after a loss.
    pub const fn draw(self, is_mine: bool, lost: bool) -> DrawTile {
        match self {
            Self::Uncovered(_) if is_mine => DrawTile::Mine,
            Self::Uncovered(count) => DrawTile::Open(count),
            Self::Flagged if lost && !is_mine => DrawTile::WrongFlag,
            Self::Flagged => DrawTile::Flag,
            Self::Covered if lost && is_mine => DrawTile::Mine,
            Self::Covered => DrawTile::Covered,
        }
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Covered
    }
}

/// Renderable tile kinds, one per sprite in the classic art.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DrawTile {
    Open(u8),
    Mine,
    Covered,
    Flag,
    WrongFlag,
}

impl DrawTile {
    /// Index into the 13-image sprite strip (`0` through `8` are adjacency
    /// counts, then mine, cover, flag, wrong flag).
    pub const fn image_index(self) -> u8 {
        match self {
            Self::Open(count) => count,
            Self::Mine => 9,
            Self::Covered => 10,
            Self::Flag => 11,
            Self::WrongFlag => 12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncovered_cells_draw_their_count_or_a_mine() {
        assert_eq!(CellState::Uncovered(3).draw(false, false), DrawTile::Open(3));
        assert_eq!(CellState::Uncovered(0).draw(true, true), DrawTile::Mine);
    }

    #[test]
    fn covered_and_flagged_cells_count_as_covered() {
        assert!(CellState::Covered.is_covered());
        assert!(CellState::Flagged.is_covered());
        assert!(!CellState::Uncovered(0).is_covered());
    }

    #[test]
    fn in_progress_view_hides_everything_covered() {
        assert_eq!(CellState::Covered.draw(true, false), DrawTile::Covered);
        assert_eq!(CellState::Covered.draw(false, false), DrawTile::Covered);
        assert_eq!(CellState::Flagged.draw(false, false), DrawTile::Flag);
        assert_eq!(CellState::Flagged.draw(true, false), DrawTile::Flag);
    }

    #[test]
    fn loss_view_exposes_mines_and_wrong_flags() {
        assert_eq!(CellState::Covered.draw(true, true), DrawTile::Mine);
        assert_eq!(CellState::Covered.draw(false, true), DrawTile::Covered);
        assert_eq!(CellState::Flagged.draw(false, true), DrawTile::WrongFlag);
        assert_eq!(CellState::Flagged.draw(true, true), DrawTile::Flag);
    }

    #[test]
    fn sprite_indices_match_the_classic_strip() {
        assert_eq!(DrawTile::Open(8).image_index(), 8);
        assert_eq!(DrawTile::Mine.image_index(), 9);
        assert_eq!(DrawTile::Covered.image_index(), 10);
        assert_eq!(DrawTile::Flag.image_index(), 11);
        assert_eq!(DrawTile::WrongFlag.image_index(), 12);
    }
}
