//! Slot and epoch arithmetic for the Ethereum beacon chain.
//!
//! Converts wall-clock time to slot and epoch indices and back, and picks
//! the epoch a consumer lagging behind the head should currently process.
//! The wall clock is injected through a `TimeProvider` so tests can fix
//! "now" to a deterministic value.

pub mod calculator;
pub mod error;
pub mod time;
