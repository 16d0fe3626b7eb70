use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Duration
/// (in milliseconds)
///

#[derive(
    Clone, Copy, Debug, Default, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
    Deserialize,
)]
#[repr(transparent)]
pub struct Duration(u64);

impl Duration {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(u64::MAX);

    // ratio constants
    const MS_PER_SEC: u64 = 1_000;
    const SECS_PER_MIN: u64 = 60;
    const MINS_PER_HOUR: u64 = 60;
    const HOURS_PER_DAY: u64 = 24;

    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs.saturating_mul(Self::MS_PER_SEC))
    }

    #[must_use]
    pub const fn from_minutes(mins: u64) -> Self {
        Self::from_secs(mins.saturating_mul(Self::SECS_PER_MIN))
    }

    #[must_use]
    pub const fn from_hours(hours: u64) -> Self {
        Self::from_minutes(hours.saturating_mul(Self::MINS_PER_HOUR))
    }

    #[must_use]
    pub const fn from_days(days: u64) -> Self {
        Self::from_hours(days.saturating_mul(Self::HOURS_PER_DAY))
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Whole seconds, truncating sub-second remainder.
    #[must_use]
    pub const fn as_secs(self) -> u64 {
        self.0 / Self::MS_PER_SEC
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_constructors_compose() {
        assert_eq!(Duration::from_secs(2).get(), 2_000);
        assert_eq!(Duration::from_minutes(1), Duration::from_secs(60));
        assert_eq!(Duration::from_hours(1), Duration::from_minutes(60));
        assert_eq!(Duration::from_days(1), Duration::from_hours(24));
    }

    #[test]
    fn saturation_instead_of_overflow() {
        assert_eq!(Duration::from_days(u64::MAX), Duration::MAX);
    }

    #[test]
    fn as_secs_truncates() {
        assert_eq!(Duration::from_millis(1_999).as_secs(), 1);
    }
}
