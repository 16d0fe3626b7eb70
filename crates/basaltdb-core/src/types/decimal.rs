use derive_more::{Add, AddAssign, Display, FromStr, Sub, SubAssign};
use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal as WrappedDecimal;
use serde::{Deserialize, Serialize};

///
/// DecimalParts
///
/// Canonical decomposition of a Decimal.
///
/// Invariant:
/// - value == mantissa * 10^-scale
/// - mantissa carries the sign
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DecimalParts {
    pub mantissa: i128,
    pub scale: u32,
}

///
/// Decimal
///
/// Exact fixed-precision decimal; 96-bit mantissa, scale 0..=28.
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
    FromStr,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Sub,
    SubAssign,
)]
pub struct Decimal(WrappedDecimal);

impl Decimal {
    pub const ZERO: Self = Self(WrappedDecimal::ZERO);

    #[must_use]
    /// Construct a decimal from mantissa and scale.
    pub fn new(num: i64, scale: u32) -> Self {
        Self(WrappedDecimal::new(num, scale))
    }

    /// Decompose into mantissa and scale.
    #[must_use]
    pub const fn parts(&self) -> DecimalParts {
        DecimalParts {
            mantissa: self.0.mantissa(),
            scale: self.0.scale(),
        }
    }

    /// Returns true if the value is numerically an integer.
    ///
    /// Trailing fractional zeros do not count as fractional content:
    /// `2.00` is an integer, `2.01` is not.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.normalize().scale() == 0
    }

    ///
    /// EXACT CONVERSIONS
    ///
    /// Every method returns `None` instead of rounding or truncating.
    ///

    #[must_use]
    pub fn to_i128_exact(&self) -> Option<i128> {
        let normalized = self.0.normalize();
        (normalized.scale() == 0).then(|| normalized.mantissa())
    }

    #[must_use]
    pub fn to_i64_exact(&self) -> Option<i64> {
        self.to_i128_exact().and_then(|m| i64::try_from(m).ok())
    }

    #[must_use]
    pub fn to_u64_exact(&self) -> Option<u64> {
        self.to_i128_exact().and_then(|m| u64::try_from(m).ok())
    }

    #[must_use]
    pub fn to_u128_exact(&self) -> Option<u128> {
        self.to_i128_exact().and_then(|m| u128::try_from(m).ok())
    }

    /// Exact narrowing to f64: succeeds only when the binary value decodes
    /// back to the identical decimal.
    #[must_use]
    pub fn to_f64_exact(&self) -> Option<f64> {
        let f = self.0.to_f64()?;
        if !f.is_finite() {
            return None;
        }

        let back = WrappedDecimal::from_f64(f)?;
        (back.normalize() == self.0.normalize()).then_some(f)
    }

    /// Exact narrowing to f32; same round-trip requirement as `to_f64_exact`.
    #[must_use]
    pub fn to_f32_exact(&self) -> Option<f32> {
        let f = self.0.to_f32()?;
        if !f.is_finite() {
            return None;
        }

        let back = WrappedDecimal::from_f32(f)?;
        (back.normalize() == self.0.normalize()).then_some(f)
    }

    ///
    /// CONSTRUCTION FROM PRIMITIVES
    ///

    #[must_use]
    pub fn from_i64(n: i64) -> Option<Self> {
        WrappedDecimal::from_i64(n).map(Self)
    }

    #[must_use]
    pub fn from_u64(n: u64) -> Option<Self> {
        WrappedDecimal::from_u64(n).map(Self)
    }

    #[must_use]
    pub fn from_i128(n: i128) -> Option<Self> {
        WrappedDecimal::from_i128(n).map(Self)
    }

    #[must_use]
    pub fn from_u128(n: u128) -> Option<Self> {
        WrappedDecimal::from_u128(n).map(Self)
    }

    #[must_use]
    pub fn from_f32(n: f32) -> Option<Self> {
        WrappedDecimal::from_f32(n).map(Self)
    }

    #[must_use]
    pub fn from_f64(n: f64) -> Option<Self> {
        WrappedDecimal::from_f64(n).map(Self)
    }
}

impl Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid decimal: {s}")))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_round_trip() {
        let d = Decimal::new(12345, 2); // 123.45
        let parts = d.parts();
        assert_eq!(parts.mantissa, 12345);
        assert_eq!(parts.scale, 2);
    }

    #[test]
    fn integer_check_ignores_trailing_zeros() {
        assert!(Decimal::new(200, 2).is_integer()); // 2.00
        assert!(!Decimal::new(201, 2).is_integer()); // 2.01
    }

    #[test]
    fn exact_integer_extraction() {
        assert_eq!(Decimal::new(200, 2).to_i64_exact(), Some(2));
        assert_eq!(Decimal::new(-7, 0).to_i64_exact(), Some(-7));
        assert_eq!(Decimal::new(25, 1).to_i64_exact(), None); // 2.5
        assert_eq!(Decimal::new(-1, 0).to_u64_exact(), None);
    }

    #[test]
    fn exact_float_narrowing() {
        // dyadic rational: exact in both representations
        assert_eq!(Decimal::new(25, 1).to_f64_exact(), Some(2.5));
        assert_eq!(Decimal::new(5, 1).to_f32_exact(), Some(0.5));
    }

    #[test]
    fn string_round_trip() {
        let d: Decimal = "123.450".parse().unwrap();
        assert_eq!(d.to_string(), "123.450");
    }
}
