//! Property tests for card layouts and marking.

use std::collections::HashSet;

use bingo_round::cards::{BingoCard, CellPos, MarkTracker};
use bingo_round::pool::Letter;
use bingo_round::rules::WinDetector;
use bingo_round::CardId;
use proptest::prelude::*;

proptest! {
    /// Every column stays inside its letter's range, strictly ascending.
    #[test]
    fn prop_columns_in_range(seed in any::<u64>()) {
        let card = BingoCard::from_seed(CardId::new(1), seed);

        for (col, values) in card.columns().iter().enumerate() {
            let range = Letter::ALL[col].range();
            prop_assert!(values.iter().all(|v| range.contains(v)));
            prop_assert!(values.windows(2).all(|w| w[0] < w[1]));
        }
    }

    /// A card exposes 24 distinct numbers and FREE hides the N column's
    /// middle value.
    #[test]
    fn prop_twenty_four_numbers(seed in any::<u64>()) {
        let card = BingoCard::from_seed(CardId::new(1), seed);
        let numbers: HashSet<u8> = card.numbers().map(|(n, _)| n).collect();

        prop_assert_eq!(numbers.len(), 24);
        prop_assert_eq!(card.number_at(CellPos::FREE), None);
        prop_assert_eq!(card.is_number_present(card.columns()[2][2]), None);
    }

    /// Fresh cards only have FREE marked, and so never start as winners.
    #[test]
    fn prop_fresh_card_has_only_free(seed in any::<u64>()) {
        let card = BingoCard::from_seed(CardId::new(1), seed);
        prop_assert_eq!(card.marks().count(), 1);
        prop_assert!(card.marks().is_marked(CellPos::FREE));
        prop_assert!(!WinDetector::check_win(&card));
    }

    /// Marking is idempotent and only ever touches the called number's cell.
    #[test]
    fn prop_mark_number_idempotent(seed in any::<u64>(), calls in prop::collection::vec(1u8..=75, 0..40)) {
        let mut card = BingoCard::from_seed(CardId::new(1), seed);
        for &n in &calls {
            MarkTracker::mark_number(&mut card, n);
        }
        let once = card.marks().clone();

        for &n in &calls {
            prop_assert_eq!(MarkTracker::mark_number(&mut card, n), None);
        }
        prop_assert_eq!(card.marks(), &once);

        let called: HashSet<u8> = calls.iter().copied().collect();
        let expected = 1 + card.numbers().filter(|(n, _)| called.contains(n)).count();
        prop_assert_eq!(card.marks().count(), expected);
    }

    /// Calling a whole row always wins; the detector agrees with itself.
    #[test]
    fn prop_full_row_wins(seed in any::<u64>(), row in 0usize..5) {
        let mut card = BingoCard::from_seed(CardId::new(1), seed);
        for col in 0..5 {
            if let Some(n) = card.number_at(CellPos::new(row, col)) {
                MarkTracker::mark_number(&mut card, n);
            }
        }

        prop_assert!(WinDetector::check_win(&card));
        prop_assert!(WinDetector::first_pattern(card.marks()).is_some());
    }

    /// Regeneration clears every mark except FREE.
    #[test]
    fn prop_regenerate_resets_marks(seed in any::<u64>()) {
        let mut card = BingoCard::from_seed(CardId::new(1), seed);
        for (n, _) in card.numbers().take(10).collect::<Vec<_>>() {
            MarkTracker::mark_number(&mut card, n);
        }

        let mut rng = bingo_round::GameRng::new(seed ^ 0xB1_460);
        card.regenerate(&mut rng);
        prop_assert_eq!(card.marks().count(), 1);
        prop_assert_eq!(card.id(), CardId::new(1));
    }
}

#[test]
fn test_same_seed_same_card() {
    assert_eq!(
        BingoCard::from_seed(CardId::new(3), 77),
        BingoCard::from_seed(CardId::new(3), 77)
    );
    assert_ne!(
        BingoCard::from_seed(CardId::new(3), 77).columns(),
        BingoCard::from_seed(CardId::new(3), 78).columns()
    );
}
