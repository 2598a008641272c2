//! Bingo card layout.
//!
//! A card is five columns of five numbers. Column `c` draws from
//! `15c+1 ..= 15c+15`, values ascending top to bottom. The center cell is
//! FREE: the N column still draws five values, but the one sorted into row 2
//! is covered and does not count as present on the card.
//!
//! ```
//! use bingo_round::cards::{BingoCard, CellPos};
//! use bingo_round::core::CardId;
//!
//! let card = BingoCard::from_seed(CardId::new(1), 42);
//! assert_eq!(card.number_at(CellPos::FREE), None);
//! assert_eq!(card.numbers().count(), 24);
//! assert!(card.marks().is_marked(CellPos::FREE));
//! ```

use serde::{Deserialize, Serialize};

use super::marks::MarkGrid;
use crate::core::{CardId, GameRng, RoundError};
use crate::pool::{Letter, COLUMN_SPAN};

/// Rows and columns on a card.
pub const GRID_SIZE: usize = 5;

/// A cell coordinate, `row` and `col` both in `0..5`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    /// The center cell.
    pub const FREE: CellPos = CellPos { row: 2, col: 2 };

    /// Create a position. Panics outside the grid.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        assert!(row < GRID_SIZE && col < GRID_SIZE, "Cell outside the 5x5 grid");
        Self { row, col }
    }

    /// Create a position from untrusted coordinates.
    pub fn try_new(row: usize, col: usize) -> Result<Self, RoundError> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Ok(Self { row, col })
        } else {
            Err(RoundError::CellOutOfRange { row, col })
        }
    }

    #[must_use]
    pub const fn is_free(self) -> bool {
        self.row == Self::FREE.row && self.col == Self::FREE.col
    }

    /// All 25 positions, row-major.
    pub fn all() -> impl Iterator<Item = CellPos> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| CellPos { row, col }))
    }
}

/// A 5x5 bingo card with its marks.
///
/// Deserializing validates the layout like [`BingoCard::from_columns`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct BingoCard {
    id: CardId,
    /// `columns[col][row]`.
    columns: [[u8; GRID_SIZE]; GRID_SIZE],
    marks: MarkGrid,
}

/// Wire form of a `BingoCard`, before the layout is checked.
#[derive(Deserialize)]
struct RawCard {
    id: CardId,
    columns: [[u8; GRID_SIZE]; GRID_SIZE],
    #[serde(default)]
    marks: MarkGrid,
}

impl TryFrom<RawCard> for BingoCard {
    type Error = RoundError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        let mut card = Self::from_columns(raw.id, raw.columns)?;
        card.marks = raw.marks;
        Ok(card)
    }
}

impl BingoCard {
    /// Generate a random layout.
    pub fn generate(id: CardId, rng: &mut GameRng) -> Self {
        Self {
            id,
            columns: random_columns(rng),
            marks: MarkGrid::new(),
        }
    }

    /// Generate a layout from a standalone seed.
    #[must_use]
    pub fn from_seed(id: CardId, seed: u64) -> Self {
        Self::generate(id, &mut GameRng::new(seed))
    }

    /// Build a card from an explicit layout, indexed `[col][row]`.
    ///
    /// Each column must be strictly ascending and inside its letter's range.
    pub fn from_columns(id: CardId, columns: [[u8; GRID_SIZE]; GRID_SIZE]) -> Result<Self, RoundError> {
        for (col, values) in columns.iter().enumerate() {
            let letter = Letter::ALL[col];
            let range = letter.range();

            if let Some(&bad) = values.iter().find(|&&v| !range.contains(&v)) {
                return Err(RoundError::MalformedCard(format!(
                    "{} is outside column {} ({}..={})",
                    bad,
                    letter,
                    range.start(),
                    range.end()
                )));
            }
            if values.windows(2).any(|w| w[0] >= w[1]) {
                return Err(RoundError::MalformedCard(format!(
                    "column {} is not strictly ascending",
                    letter
                )));
            }
        }

        Ok(Self {
            id,
            columns,
            marks: MarkGrid::new(),
        })
    }

    /// Replace the layout and clear every mark except FREE.
    pub fn regenerate(&mut self, rng: &mut GameRng) {
        self.columns = random_columns(rng);
        self.marks = MarkGrid::new();
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    /// Number shown at `pos`, `None` for FREE.
    #[must_use]
    pub fn number_at(&self, pos: CellPos) -> Option<u8> {
        (!pos.is_free()).then(|| self.columns[pos.col][pos.row])
    }

    /// Where `number` sits on this card, if present.
    #[must_use]
    pub fn is_number_present(&self, number: u8) -> Option<CellPos> {
        let col = Letter::for_value(number)?.column();
        let row = self.columns[col].iter().position(|&v| v == number)?;
        let pos = CellPos { row, col };
        (!pos.is_free()).then_some(pos)
    }

    /// The 24 numbers on the card with their positions, row-major.
    pub fn numbers(&self) -> impl Iterator<Item = (u8, CellPos)> + '_ {
        CellPos::all().filter_map(|pos| self.number_at(pos).map(|n| (n, pos)))
    }

    /// Column values, `[col][row]`, as generated.
    #[must_use]
    pub fn columns(&self) -> &[[u8; GRID_SIZE]; GRID_SIZE] {
        &self.columns
    }

    #[must_use]
    pub fn marks(&self) -> &MarkGrid {
        &self.marks
    }

    pub(crate) fn marks_mut(&mut self) -> &mut MarkGrid {
        &mut self.marks
    }
}

fn random_columns(rng: &mut GameRng) -> [[u8; GRID_SIZE]; GRID_SIZE] {
    let mut columns = [[0u8; GRID_SIZE]; GRID_SIZE];

    for (letter, column) in Letter::ALL.iter().zip(columns.iter_mut()) {
        let low = *letter.range().start();
        let mut picked = rng.sample_indices(usize::from(COLUMN_SPAN), GRID_SIZE);
        picked.sort_unstable();

        for (slot, offset) in column.iter_mut().zip(picked) {
            *slot = low + offset as u8;
        }
    }

    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_columns_in_range_and_sorted() {
        let mut rng = GameRng::new(42);

        for i in 0..100 {
            let card = BingoCard::generate(CardId::new(i), &mut rng);

            for (col, values) in card.columns().iter().enumerate() {
                let range = Letter::ALL[col].range();
                assert!(values.iter().all(|v| range.contains(v)));
                assert!(values.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    #[test]
    fn test_generated_card_round_trips_through_from_columns() {
        let card = BingoCard::from_seed(CardId::new(1), 9);
        let rebuilt = BingoCard::from_columns(CardId::new(1), *card.columns()).unwrap();
        assert_eq!(card, rebuilt);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = BingoCard::from_seed(CardId::new(1), 5);
        let b = BingoCard::from_seed(CardId::new(2), 5);
        assert_eq!(a.columns(), b.columns());
    }

    #[test]
    fn test_is_number_present() {
        let card = BingoCard::from_seed(CardId::new(1), 3);

        for (number, pos) in card.numbers() {
            assert_eq!(card.is_number_present(number), Some(pos));
        }

        let hidden = card.columns()[2][2];
        assert_eq!(card.is_number_present(hidden), None);
        assert_eq!(card.is_number_present(0), None);
        assert_eq!(card.is_number_present(76), None);
    }

    #[test]
    fn test_from_columns_rejects_bad_layouts() {
        let mut columns = *BingoCard::from_seed(CardId::new(1), 3).columns();
        columns[0][0] = 16;
        assert!(matches!(
            BingoCard::from_columns(CardId::new(1), columns),
            Err(RoundError::MalformedCard(_))
        ));

        let unsorted = [
            [5, 4, 3, 2, 1],
            [16, 17, 18, 19, 20],
            [31, 32, 33, 34, 35],
            [46, 47, 48, 49, 50],
            [61, 62, 63, 64, 65],
        ];
        assert!(BingoCard::from_columns(CardId::new(1), unsorted).is_err());

        let duplicate = [
            [1, 1, 3, 4, 5],
            [16, 17, 18, 19, 20],
            [31, 32, 33, 34, 35],
            [46, 47, 48, 49, 50],
            [61, 62, 63, 64, 65],
        ];
        assert!(BingoCard::from_columns(CardId::new(1), duplicate).is_err());
    }

    #[test]
    fn test_regenerate_resets_marks() {
        let mut rng = GameRng::new(8);
        let mut card = BingoCard::generate(CardId::new(1), &mut rng);
        let before = *card.columns();

        let (number, _) = card.numbers().next().unwrap();
        crate::cards::MarkTracker::mark_number(&mut card, number);
        assert_eq!(card.marks().count(), 2);

        card.regenerate(&mut rng);
        assert_ne!(*card.columns(), before);
        assert_eq!(card.marks().count(), 1);
        assert!(card.marks().is_marked(CellPos::FREE));
        assert_eq!(card.id(), CardId::new(1));
    }

    #[test]
    fn test_deserialize_forces_free_mark() {
        let card = BingoCard::from_seed(CardId::new(1), 4);
        let mut json = serde_json::to_value(&card).unwrap();
        json["marks"]["cells"][2][2] = serde_json::json!(false);
        json["marks"]["cells"][0][0] = serde_json::json!(true);

        let back: BingoCard = serde_json::from_value(json).unwrap();
        assert!(back.marks().is_marked(CellPos::FREE));
        assert!(back.marks().is_marked(CellPos::new(0, 0)));
        assert_eq!(back.columns(), card.columns());
    }

    #[test]
    fn test_deserialize_rejects_bad_layout() {
        let card = BingoCard::from_seed(CardId::new(1), 4);
        let mut json = serde_json::to_value(&card).unwrap();
        json["columns"][0] = serde_json::json!([70, 70, 70, 70, 70]);

        let err = serde_json::from_value::<BingoCard>(json).unwrap_err();
        assert!(err.to_string().contains("malformed card"));
    }

    #[test]
    fn test_cell_pos() {
        assert!(CellPos::FREE.is_free());
        assert!(!CellPos::new(0, 2).is_free());
        assert_eq!(CellPos::all().count(), 25);
        assert_eq!(CellPos::try_new(5, 0), Err(RoundError::CellOutOfRange { row: 5, col: 0 }));
        assert_eq!(CellPos::try_new(4, 4), Ok(CellPos::new(4, 4)));
    }

    #[test]
    #[should_panic(expected = "Cell outside the 5x5 grid")]
    fn test_cell_pos_new_panics() {
        let _ = CellPos::new(0, 5);
    }
}
