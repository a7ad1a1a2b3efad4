use crate::primitives::UnixTimestamp;
use serde::{Deserialize, Serialize};

/// Mainnet beacon chain genesis, 2020-12-01 12:00:23 UTC.
pub const MAINNET_GENESIS_TIMESTAMP: UnixTimestamp = 1606824023;

pub const MAINNET_SLOT_DURATION_SECS: u64 = 12;

pub const MAINNET_SLOTS_PER_EPOCH: u64 = 32;

/// Chain timing parameters plus the epoch lag a consumer should keep
/// behind the head while waiting for finality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    pub genesis_timestamp: UnixTimestamp,
    pub slot_duration_secs: u64,
    pub slots_per_epoch: u64,
    pub epochs_to_offset: u64,
}

impl ChainConfig {
    /// Mainnet timing with the given epoch offset.
    pub fn mainnet(epochs_to_offset: u64) -> Self {
        ChainConfig {
            genesis_timestamp: MAINNET_GENESIS_TIMESTAMP,
            slot_duration_secs: MAINNET_SLOT_DURATION_SECS,
            slots_per_epoch: MAINNET_SLOTS_PER_EPOCH,
            epochs_to_offset,
        }
    }

    /// Wall-clock length of one epoch. Always derived from the slot
    /// parameters, never stored.
    pub fn epoch_duration_secs(&self) -> u64 {
        self.slot_duration_secs * self.slots_per_epoch
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        // Two epochs is the usual finality lag on mainnet.
        ChainConfig::mainnet(2)
    }
}
