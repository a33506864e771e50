//! Bounded retry with exponential backoff for key-allocation races.

use std::time::Duration;

use crate::config::Config;

/// How often and how patiently to retry claiming a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Allocation rounds before surfacing a conflict.
    pub rounds: u32,
    /// Delay before the second round; doubles each round after.
    pub base_delay: Duration,
}

impl RetryPolicy {
    /// Builds the policy from configuration.
    #[must_use]
    pub const fn from_config(config: &Config) -> Self {
        Self { rounds: config.key_retries, base_delay: config.retry_base_delay }
    }

    /// Policy with no sleeping, for tests.
    #[must_use]
    pub const fn immediate(rounds: u32) -> Self {
        Self { rounds, base_delay: Duration::ZERO }
    }

    /// Delay to wait after the given zero-based round fails.
    #[must_use]
    pub fn delay_after(&self, round: u32) -> Duration {
        // Saturates rather than overflowing for absurd round counts.
        self.base_delay.saturating_mul(1_u32.checked_shl(round).unwrap_or(u32::MAX))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { rounds: 3, base_delay: Duration::from_millis(100) }
    }
}
