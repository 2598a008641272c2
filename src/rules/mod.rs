//! Win rules.
//!
//! `WinDetector` is the single authority on whether a card has won. It reads
//! only the mark grid, so it can judge auto-marked cards, manual claims, and
//! claims filtered down to called numbers with the same code.

mod detector;
mod patterns;

pub use detector::WinDetector;
pub use patterns::Pattern;
