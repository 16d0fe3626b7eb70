use derive_more::{Add, AddAssign, Display, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

///
/// Timestamp
/// (seconds since the Unix epoch, UTC)
///

#[derive(
    Add,
    AddAssign,
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    Sub,
    SubAssign,
)]
#[repr(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const EPOCH: Self = Self(u64::MIN);
    pub const MIN: Self = Self(u64::MIN);
    pub const MAX: Self = Self(u64::MAX);

    /// Construct from seconds.
    #[must_use]
    pub const fn from_seconds(secs: u64) -> Self {
        Self(secs)
    }

    /// Construct from milliseconds (truncate to seconds).
    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms / 1_000)
    }

    /// Construct from nanoseconds (truncate to seconds).
    #[must_use]
    pub const fn from_nanos(ns: u64) -> Self {
        Self(ns / 1_000_000_000)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Parse an RFC 3339 string; pre-epoch instants are rejected.
    pub fn parse_rfc3339(s: &str) -> Option<Self> {
        let dt = OffsetDateTime::parse(s, &Rfc3339).ok()?;
        u64::try_from(dt.unix_timestamp()).ok().map(Self)
    }

    /// Canonical RFC 3339 rendering in UTC.
    ///
    /// Returns `None` for instants beyond the representable calendar range.
    #[must_use]
    pub fn to_rfc3339(self) -> Option<String> {
        let secs = i64::try_from(self.0).ok()?;
        let dt = OffsetDateTime::from_unix_timestamp(secs).ok()?;
        dt.format(&Rfc3339).ok()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_constructors_truncate() {
        assert_eq!(Timestamp::from_millis(1_999).get(), 1);
        assert_eq!(Timestamp::from_nanos(2_500_000_000).get(), 2);
    }

    #[test]
    fn rfc3339_round_trip() {
        let ts = Timestamp::parse_rfc3339("2024-05-06T07:08:09Z").unwrap();
        assert_eq!(ts.to_rfc3339().unwrap(), "2024-05-06T07:08:09Z");
    }

    #[test]
    fn pre_epoch_instants_are_rejected() {
        assert!(Timestamp::parse_rfc3339("1969-12-31T23:59:59Z").is_none());
    }

    #[test]
    fn out_of_calendar_range_has_no_rendering() {
        assert!(Timestamp::MAX.to_rfc3339().is_none());
    }
}
