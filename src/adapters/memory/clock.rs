//! Fixed clock for deterministic timestamps.

use chrono::{DateTime, TimeZone, Utc};

use crate::ports::clock::Clock;

/// Clock that always returns the same instant.
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Pins the clock at the given instant.
    #[must_use]
    pub const fn at(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Pins the clock at an arbitrary but stable test instant.
    #[must_use]
    pub fn for_tests() -> Self {
        Self(Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).single().unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_returns_the_pinned_instant() {
        let instant = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap();
        let clock = FixedClock::at(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), instant);
    }
}
