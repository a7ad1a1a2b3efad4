use mockall::automock;
use std::time::{SystemTime, UNIX_EPOCH};
use types::primitives::UnixTimestamp;

/// Source of the current wall-clock time in Unix seconds.
#[automock]
pub trait TimeProvider: Send + Sync {
    fn now(&self) -> UnixTimestamp;
}

/// The host system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeProvider for SystemClock {
    fn now(&self) -> UnixTimestamp {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_past_mainnet_genesis() {
        assert!(SystemClock.now() > 1606824023);
    }

    #[test]
    fn test_mock_time_provider() {
        let mut time = MockTimeProvider::new();
        time.expect_now().returning(|| 1234);
        assert_eq!(time.now(), 1234);
    }
}
