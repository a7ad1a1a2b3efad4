use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClockError {
    #[error("Invalid chain timing configuration: {0}")]
    InvalidConfig(String),
    #[error("Timestamp {timestamp} precedes genesis {genesis}")]
    BeforeGenesis { genesis: u64, timestamp: u64 },
    #[error("Current epoch {current_epoch} is smaller than the offset {offset}")]
    TargetEpochUnavailable { current_epoch: u64, offset: u64 },
}
