//! Mark state and the tracker that mutates it.

use serde::{Deserialize, Serialize};

use super::card::{BingoCard, CellPos, GRID_SIZE};

/// 5x5 mark flags indexed `[row][col]`. The FREE cell is always marked.
///
/// Deserializing goes through [`MarkGrid::from_cells`], so FREE is marked
/// whatever the input says.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawMarks")]
pub struct MarkGrid {
    cells: [[bool; GRID_SIZE]; GRID_SIZE],
}

/// Wire form of a `MarkGrid`, before FREE is enforced.
#[derive(Deserialize)]
struct RawMarks {
    cells: [[bool; GRID_SIZE]; GRID_SIZE],
}

impl From<RawMarks> for MarkGrid {
    fn from(raw: RawMarks) -> Self {
        Self::from_cells(raw.cells)
    }
}

impl Default for MarkGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkGrid {
    /// A grid with only FREE marked.
    #[must_use]
    pub fn new() -> Self {
        let mut cells = [[false; GRID_SIZE]; GRID_SIZE];
        cells[CellPos::FREE.row][CellPos::FREE.col] = true;
        Self { cells }
    }

    /// Build a grid from raw flags. FREE is forced on.
    #[must_use]
    pub fn from_cells(mut cells: [[bool; GRID_SIZE]; GRID_SIZE]) -> Self {
        cells[CellPos::FREE.row][CellPos::FREE.col] = true;
        Self { cells }
    }

    #[must_use]
    pub fn is_marked(&self, pos: CellPos) -> bool {
        self.cells[pos.row][pos.col]
    }

    /// Set a cell; returns whether it changed. FREE never changes.
    pub(crate) fn set(&mut self, pos: CellPos, marked: bool) -> bool {
        if pos.is_free() || self.cells[pos.row][pos.col] == marked {
            return false;
        }
        self.cells[pos.row][pos.col] = marked;
        true
    }

    /// Marked cells, FREE included.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&m| m).count()
    }

    /// Copy keeping only the marks `keep` accepts. FREE stays marked.
    #[must_use]
    pub fn retain(&self, keep: impl Fn(CellPos) -> bool) -> Self {
        let mut out = Self::new();
        for pos in CellPos::all() {
            if self.is_marked(pos) && keep(pos) {
                out.cells[pos.row][pos.col] = true;
            }
        }
        out
    }

    /// Raw flags, row-major.
    #[must_use]
    pub fn cells(&self) -> &[[bool; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }
}

/// Applies calls and manual toggles to a card's marks.
///
/// Holds no state of its own; callers re-render after a change.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkTracker;

impl MarkTracker {
    /// Mark the cell holding `number`, if the card has it.
    ///
    /// Idempotent. Returns the position only when a mark was added.
    pub fn mark_number(card: &mut BingoCard, number: u8) -> Option<CellPos> {
        let pos = card.is_number_present(number)?;
        card.marks_mut().set(pos, true).then_some(pos)
    }

    /// Flip a cell. FREE cannot be toggled and yields `None`.
    pub fn toggle_mark(card: &mut BingoCard, pos: CellPos) -> Option<bool> {
        if pos.is_free() {
            return None;
        }
        let next = !card.marks().is_marked(pos);
        card.marks_mut().set(pos, next);
        Some(next)
    }
}
