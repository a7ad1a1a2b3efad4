use crate::error::ClockError;
use crate::time::{SystemClock, TimeProvider};
use log::debug;
use std::time::Duration;
use types::config::ChainConfig;
use types::primitives::{Epoch, Slot, UnixTimestamp};

/// Maps wall-clock time to beacon chain slots and epochs.
///
/// A calculator is immutable once built. To move the genesis instant
/// (e.g. when pointing at a test network) derive a fresh instance with
/// [`EpochCalculator::with_genesis_timestamp`] instead of mutating a
/// shared one.
#[derive(Debug, Clone)]
pub struct EpochCalculator<T: TimeProvider = SystemClock> {
    config: ChainConfig,
    time: T,
}

impl EpochCalculator<SystemClock> {
    /// Calculator preloaded with mainnet timing, reading the system clock.
    pub fn mainnet(epochs_to_offset: u64) -> Self {
        EpochCalculator {
            config: ChainConfig::mainnet(epochs_to_offset),
            time: SystemClock,
        }
    }
}

impl<T: TimeProvider> EpochCalculator<T> {
    /// Builds a calculator, rejecting timing parameters that would make
    /// slot arithmetic meaningless.
    pub fn new(config: ChainConfig, time: T) -> Result<Self, ClockError> {
        if config.slot_duration_secs == 0 {
            return Err(ClockError::InvalidConfig(
                "slot_duration_secs must be positive".to_string(),
            ));
        }
        if config.slots_per_epoch == 0 {
            return Err(ClockError::InvalidConfig(
                "slots_per_epoch must be positive".to_string(),
            ));
        }

        Ok(EpochCalculator { config, time })
    }

    /// A new calculator differing only in its genesis instant. The timing
    /// parameters were validated when `self` was built.
    pub fn with_genesis_timestamp(mut self, genesis_timestamp: UnixTimestamp) -> Self {
        self.config.genesis_timestamp = genesis_timestamp;
        self
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    pub fn genesis_timestamp(&self) -> UnixTimestamp {
        self.config.genesis_timestamp
    }

    /// Slot containing the given timestamp.
    pub fn slot_at_timestamp(&self, timestamp: UnixTimestamp) -> Result<Slot, ClockError> {
        let elapsed = timestamp
            .checked_sub(self.config.genesis_timestamp)
            .ok_or(ClockError::BeforeGenesis {
                genesis: self.config.genesis_timestamp,
                timestamp,
            })?;

        Ok(elapsed / self.config.slot_duration_secs)
    }

    /// Epoch containing the given timestamp.
    pub fn epoch_at_timestamp(&self, timestamp: UnixTimestamp) -> Result<Epoch, ClockError> {
        Ok(self.slot_to_epoch(self.slot_at_timestamp(timestamp)?))
    }

    pub fn current_slot(&self) -> Result<Slot, ClockError> {
        self.slot_at_timestamp(self.time.now())
    }

    pub fn current_epoch(&self) -> Result<Epoch, ClockError> {
        Ok(self.slot_to_epoch(self.current_slot()?))
    }

    pub fn slot_to_epoch(&self, slot: Slot) -> Epoch {
        slot / self.config.slots_per_epoch
    }

    pub fn first_slot_of_epoch(&self, epoch: Epoch) -> Slot {
        epoch * self.config.slots_per_epoch
    }

    pub fn slot_start_timestamp(&self, slot: Slot) -> UnixTimestamp {
        self.config.genesis_timestamp + slot * self.config.slot_duration_secs
    }

    pub fn epoch_start_timestamp(&self, epoch: Epoch) -> UnixTimestamp {
        self.config.genesis_timestamp + epoch * self.config.epoch_duration_secs()
    }

    /// Time remaining until the next epoch boundary. Reads the clock once,
    /// so the result is always in `(0, epoch_duration]`.
    pub fn time_until_next_epoch(&self) -> Result<Duration, ClockError> {
        let now = self.time.now();
        let next_epoch = self.epoch_at_timestamp(now)? + 1;
        let remaining = self.epoch_start_timestamp(next_epoch).saturating_sub(now);

        Ok(Duration::from_secs(remaining))
    }

    /// The epoch a consumer lagging `epochs_to_offset` behind the head
    /// should act on right now.
    pub fn target_epoch(&self) -> Result<Epoch, ClockError> {
        let current_epoch = self.current_epoch()?;

        current_epoch
            .checked_sub(self.config.epochs_to_offset)
            .ok_or(ClockError::TargetEpochUnavailable {
                current_epoch,
                offset: self.config.epochs_to_offset,
            })
    }

    /// Epochs whose data is safe to fetch, oldest first. Currently always
    /// a single epoch, the target one.
    pub fn epochs_to_fetch(&self) -> Result<Vec<Epoch>, ClockError> {
        let target = self.target_epoch()?;
        debug!("Safe to fetch {}", format_epoch(target));

        Ok(vec![target])
    }
}

/// Human-readable label for an epoch, used in log messages.
pub fn format_epoch(epoch: Epoch) -> String {
    format!("epoch_{}", epoch)
}
