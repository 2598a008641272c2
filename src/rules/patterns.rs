//! Winning patterns: five rows, five columns, two diagonals.

use serde::{Deserialize, Serialize};

use crate::cards::{CellPos, GRID_SIZE};

/// A line of five cells that wins when fully marked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "kebab-case")]
pub enum Pattern {
    /// Row `0..5`, left to right.
    Row(usize),
    /// Column `0..5`, top to bottom.
    Column(usize),
    /// `[i][i]`, top-left to bottom-right.
    Diagonal,
    /// `[i][4-i]`, top-right to bottom-left.
    AntiDiagonal,
}

impl Pattern {
    /// Every winning pattern: rows, then columns, then diagonals.
    pub fn all() -> impl Iterator<Item = Pattern> {
        (0..GRID_SIZE)
            .map(Pattern::Row)
            .chain((0..GRID_SIZE).map(Pattern::Column))
            .chain([Pattern::Diagonal, Pattern::AntiDiagonal])
    }

    /// The five cells of this pattern.
    #[must_use]
    pub fn cells(self) -> [CellPos; GRID_SIZE] {
        let mut out = [CellPos::FREE; GRID_SIZE];
        for (i, cell) in out.iter_mut().enumerate() {
            *cell = match self {
                Pattern::Row(row) => CellPos::new(row, i),
                Pattern::Column(col) => CellPos::new(i, col),
                Pattern::Diagonal => CellPos::new(i, i),
                Pattern::AntiDiagonal => CellPos::new(i, GRID_SIZE - 1 - i),
            };
        }
        out
    }

    /// Whether the FREE cell is part of this pattern.
    #[must_use]
    pub fn covers_free(self) -> bool {
        self.cells().iter().any(|c| c.is_free())
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pattern::Row(r) => write!(f, "row {}", r + 1),
            Pattern::Column(c) => write!(f, "column {}", c + 1),
            Pattern::Diagonal => f.write_str("diagonal"),
            Pattern::AntiDiagonal => f.write_str("anti-diagonal"),
        }
    }
}
