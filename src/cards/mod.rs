//! Cards and their mark state.
//!
//! ## Key Types
//!
//! - `BingoCard`: Immutable 5x5 layout plus marks
//! - `CellPos`: A `(row, col)` coordinate; `CellPos::FREE` is the center
//! - `MarkGrid`: The per-cell marked flags
//! - `MarkTracker`: The only writer of marks (called numbers, manual toggles)

mod card;
mod marks;

pub use card::{BingoCard, CellPos, GRID_SIZE};
pub use marks::{MarkGrid, MarkTracker};
