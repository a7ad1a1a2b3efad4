/// Index of a fixed-length block proposal window, counted from genesis.
pub type Slot = u64;

/// Index of a group of consecutive slots, the unit of duty assignment
/// and finality accounting.
pub type Epoch = u64;

/// Seconds since the Unix epoch.
pub type UnixTimestamp = u64;
