//! Shared helpers for integration tests.

#![allow(dead_code)]

use bingo_round::{BingoCard, CardId, Participant, ParticipantId, RoundConfig, RoundController, ScriptedSource};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once per binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub const HOST: ParticipantId = ParticipantId::new(1);
pub const GUEST: ParticipantId = ParticipantId::new(2);

/// Column-major layout: B 1..5, I 16..20, N 31..35, G 46..50, O 61..65.
///
/// Row 2 reads 3, 18, FREE, 48, 63.
pub fn fixed_card(id: u32) -> BingoCard {
    BingoCard::from_columns(
        CardId::new(id),
        [
            [1, 2, 3, 4, 5],
            [16, 17, 18, 19, 20],
            [31, 32, 33, 34, 35],
            [46, 47, 48, 49, 50],
            [61, 62, 63, 64, 65],
        ],
    )
    .unwrap()
}

/// Shares no number with `fixed_card`.
pub fn other_card(id: u32) -> BingoCard {
    BingoCard::from_columns(
        CardId::new(id),
        [
            [6, 7, 8, 9, 10],
            [21, 22, 23, 24, 25],
            [36, 37, 38, 39, 40],
            [51, 52, 53, 54, 55],
            [66, 67, 68, 69, 70],
        ],
    )
    .unwrap()
}

/// A waiting round with the host in the lobby and remote-driven calls.
pub fn scripted_lobby(config: RoundConfig) -> RoundController<ScriptedSource> {
    init_logging();
    let mut round = RoundController::with_source(config, 42, ScriptedSource::new());
    round.open(Participant::new(HOST, "Host"), 0).unwrap();
    round
}

/// Push each value and make the call.
pub fn call(round: &mut RoundController<ScriptedSource>, values: &[u8]) {
    for &value in values {
        round.source_mut().push(value);
        round.tick().unwrap();
    }
}
