//! Number pool and call sources.
//!
//! ## Key Types
//!
//! - [`Call`]: A drawn number with its BINGO letter
//! - [`NumberPool`]: The 75 values of a round, never repeating
//! - [`CallSource`]: Decides which value is called next
//!   ([`RandomSource`] locally, [`ScriptedSource`] for values pushed by a server)

mod call;
mod number_pool;
mod source;

pub use call::{Call, Letter, COLUMN_SPAN, MAX_NUMBER};
pub use number_pool::{Draw, NumberPool, PoolStats};
pub use source::{CallSource, RandomSource, ScriptedSource};
