use crate::{
    access::ScalarSource,
    error::{AccessError, AccessResult},
    types::{Date, Decimal, Duration, Timestamp},
    value::{ScalarKind, Value},
};

///
/// CONSTANTS
///
/// Largest magnitudes whose every integer is exactly representable in the
/// given float width. Conversions outside these bounds fail instead of
/// rounding.
///

const F64_SAFE_I64: i64 = 1i64 << 53;
const F64_SAFE_U64: u64 = 1u64 << 53;
const F64_SAFE_I128: i128 = 1i128 << 53;
const F64_SAFE_U128: u128 = 1u128 << 53;

const F32_SAFE_I64: i64 = 1i64 << 24;
const F32_SAFE_U64: u64 = 1u64 << 24;
const F32_SAFE_I128: i128 = 1i128 << 24;
const F32_SAFE_U128: u128 = 1u128 << 24;

///
/// FLOAT HELPERS
///

// Integral and in-range checks; `f` is always finite here.
#[expect(clippy::cast_possible_truncation)]
fn f64_to_i64_exact(f: f64) -> Option<i64> {
    if f.fract() != 0.0 {
        return None;
    }
    if f < -(2f64.powi(63)) || f >= 2f64.powi(63) {
        return None;
    }

    Some(f as i64)
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn f64_to_u64_exact(f: f64) -> Option<u64> {
    if f.fract() != 0.0 || f < 0.0 || f >= 2f64.powi(64) {
        return None;
    }

    Some(f as u64)
}

#[expect(clippy::cast_possible_truncation)]
fn f64_to_i128_exact(f: f64) -> Option<i128> {
    if f.fract() != 0.0 {
        return None;
    }
    if f < -(2f64.powi(127)) || f >= 2f64.powi(127) {
        return None;
    }

    Some(f as i128)
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn f64_to_u128_exact(f: f64) -> Option<u128> {
    if f.fract() != 0.0 || f < 0.0 || f >= 2f64.powi(128) {
        return None;
    }

    Some(f as u128)
}

#[expect(clippy::cast_possible_truncation)]
fn f64_to_f32_exact(f: f64) -> Option<f32> {
    let narrowed = f as f32;
    (f64::from(narrowed) == f).then_some(narrowed)
}

///
/// ScalarSource for Value
///
/// The reference producer: every conversion is exact or fails. Identity
/// reads always succeed; cross-kind reads succeed only when the stored
/// value round-trips losslessly into the requested kind.
///

impl ScalarSource for Value {
    fn source_label(&self) -> &'static str {
        self.kind_label()
    }

    fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    fn read_bool(&self) -> AccessResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(self.reject(ScalarKind::Bool)),
        }
    }

    fn read_int(&self) -> AccessResult<i64> {
        const REQUESTED: ScalarKind = ScalarKind::Int;
        match self {
            Self::Int(i) => Ok(*i),
            Self::Int128(i) => i64::try_from(*i).map_err(|_| self.out_of_range(REQUESTED)),
            Self::Uint(u) => i64::try_from(*u).map_err(|_| self.out_of_range(REQUESTED)),
            Self::Uint128(u) => i64::try_from(*u).map_err(|_| self.out_of_range(REQUESTED)),
            Self::Float32(f) => {
                f64_to_i64_exact(f64::from(f.get())).ok_or_else(|| self.out_of_range(REQUESTED))
            }
            Self::Float64(f) => {
                f64_to_i64_exact(f.get()).ok_or_else(|| self.out_of_range(REQUESTED))
            }
            Self::Decimal(d) => d.to_i64_exact().ok_or_else(|| self.out_of_range(REQUESTED)),
            Self::Date(d) => Ok(i64::from(d.get())),
            Self::Timestamp(t) => i64::try_from(t.get()).map_err(|_| self.out_of_range(REQUESTED)),
            Self::Duration(d) => i64::try_from(d.get()).map_err(|_| self.out_of_range(REQUESTED)),
            _ => Err(self.reject(REQUESTED)),
        }
    }

    fn read_int128(&self) -> AccessResult<i128> {
        const REQUESTED: ScalarKind = ScalarKind::Int128;
        match self {
            Self::Int(i) => Ok(i128::from(*i)),
            Self::Int128(i) => Ok(*i),
            Self::Uint(u) => Ok(i128::from(*u)),
            Self::Uint128(u) => i128::try_from(*u).map_err(|_| self.out_of_range(REQUESTED)),
            Self::Float32(f) => {
                f64_to_i128_exact(f64::from(f.get())).ok_or_else(|| self.out_of_range(REQUESTED))
            }
            Self::Float64(f) => {
                f64_to_i128_exact(f.get()).ok_or_else(|| self.out_of_range(REQUESTED))
            }
            Self::Decimal(d) => d.to_i128_exact().ok_or_else(|| self.out_of_range(REQUESTED)),
            Self::Date(d) => Ok(i128::from(d.get())),
            Self::Timestamp(t) => Ok(i128::from(t.get())),
            Self::Duration(d) => Ok(i128::from(d.get())),
            _ => Err(self.reject(REQUESTED)),
        }
    }

    fn read_uint(&self) -> AccessResult<u64> {
        const REQUESTED: ScalarKind = ScalarKind::Uint;
        match self {
            Self::Int(i) => u64::try_from(*i).map_err(|_| self.out_of_range(REQUESTED)),
            Self::Int128(i) => u64::try_from(*i).map_err(|_| self.out_of_range(REQUESTED)),
            Self::Uint(u) => Ok(*u),
            Self::Uint128(u) => u64::try_from(*u).map_err(|_| self.out_of_range(REQUESTED)),
            Self::Float32(f) => {
                f64_to_u64_exact(f64::from(f.get())).ok_or_else(|| self.out_of_range(REQUESTED))
            }
            Self::Float64(f) => {
                f64_to_u64_exact(f.get()).ok_or_else(|| self.out_of_range(REQUESTED))
            }
            Self::Decimal(d) => d.to_u64_exact().ok_or_else(|| self.out_of_range(REQUESTED)),
            Self::Date(d) => u64::try_from(d.get()).map_err(|_| self.out_of_range(REQUESTED)),
            Self::Timestamp(t) => Ok(t.get()),
            Self::Duration(d) => Ok(d.get()),
            _ => Err(self.reject(REQUESTED)),
        }
    }

    fn read_uint128(&self) -> AccessResult<u128> {
        const REQUESTED: ScalarKind = ScalarKind::Uint128;
        match self {
            Self::Int(i) => u128::try_from(*i).map_err(|_| self.out_of_range(REQUESTED)),
            Self::Int128(i) => u128::try_from(*i).map_err(|_| self.out_of_range(REQUESTED)),
            Self::Uint(u) => Ok(u128::from(*u)),
            Self::Uint128(u) => Ok(*u),
            Self::Float32(f) => {
                f64_to_u128_exact(f64::from(f.get())).ok_or_else(|| self.out_of_range(REQUESTED))
            }
            Self::Float64(f) => {
                f64_to_u128_exact(f.get()).ok_or_else(|| self.out_of_range(REQUESTED))
            }
            Self::Decimal(d) => d.to_u128_exact().ok_or_else(|| self.out_of_range(REQUESTED)),
            Self::Date(d) => u128::try_from(d.get()).map_err(|_| self.out_of_range(REQUESTED)),
            Self::Timestamp(t) => Ok(u128::from(t.get())),
            Self::Duration(d) => Ok(u128::from(d.get())),
            _ => Err(self.reject(REQUESTED)),
        }
    }

    #[expect(clippy::cast_precision_loss)]
    fn read_float32(&self) -> AccessResult<f32> {
        const REQUESTED: ScalarKind = ScalarKind::Float32;
        match self {
            Self::Float32(f) => Ok(f.get()),
            Self::Float64(f) => {
                f64_to_f32_exact(f.get()).ok_or_else(|| self.out_of_range(REQUESTED))
            }
            Self::Int(i) if (-F32_SAFE_I64..=F32_SAFE_I64).contains(i) => Ok(*i as f32),
            Self::Uint(u) if *u <= F32_SAFE_U64 => Ok(*u as f32),
            Self::Int128(i) if (-F32_SAFE_I128..=F32_SAFE_I128).contains(i) => Ok(*i as f32),
            Self::Uint128(u) if *u <= F32_SAFE_U128 => Ok(*u as f32),
            Self::Int(_) | Self::Uint(_) | Self::Int128(_) | Self::Uint128(_) => {
                Err(self.out_of_range(REQUESTED))
            }
            Self::Decimal(d) => d.to_f32_exact().ok_or_else(|| self.out_of_range(REQUESTED)),
            _ => Err(self.reject(REQUESTED)),
        }
    }

    #[expect(clippy::cast_precision_loss)]
    fn read_float64(&self) -> AccessResult<f64> {
        const REQUESTED: ScalarKind = ScalarKind::Float64;
        match self {
            Self::Float32(f) => Ok(f64::from(f.get())),
            Self::Float64(f) => Ok(f.get()),
            Self::Int(i) if (-F64_SAFE_I64..=F64_SAFE_I64).contains(i) => Ok(*i as f64),
            Self::Uint(u) if *u <= F64_SAFE_U64 => Ok(*u as f64),
            Self::Int128(i) if (-F64_SAFE_I128..=F64_SAFE_I128).contains(i) => Ok(*i as f64),
            Self::Uint128(u) if *u <= F64_SAFE_U128 => Ok(*u as f64),
            Self::Int(_) | Self::Uint(_) | Self::Int128(_) | Self::Uint128(_) => {
                Err(self.out_of_range(REQUESTED))
            }
            Self::Decimal(d) => d.to_f64_exact().ok_or_else(|| self.out_of_range(REQUESTED)),
            _ => Err(self.reject(REQUESTED)),
        }
    }

    fn read_decimal(&self) -> AccessResult<Decimal> {
        const REQUESTED: ScalarKind = ScalarKind::Decimal;
        match self {
            Self::Decimal(d) => Ok(*d),
            Self::Int(i) => Decimal::from_i64(*i).ok_or_else(|| self.out_of_range(REQUESTED)),
            Self::Uint(u) => Decimal::from_u64(*u).ok_or_else(|| self.out_of_range(REQUESTED)),
            Self::Int128(i) => Decimal::from_i128(*i).ok_or_else(|| self.out_of_range(REQUESTED)),
            Self::Uint128(u) => Decimal::from_u128(*u).ok_or_else(|| self.out_of_range(REQUESTED)),
            Self::Float32(f) => {
                Decimal::from_f32(f.get()).ok_or_else(|| self.out_of_range(REQUESTED))
            }
            Self::Float64(f) => {
                Decimal::from_f64(f.get()).ok_or_else(|| self.out_of_range(REQUESTED))
            }
            _ => Err(self.reject(REQUESTED)),
        }
    }

    fn read_text(&self) -> AccessResult<String> {
        const REQUESTED: ScalarKind = ScalarKind::Text;
        match self {
            Self::Blob(bytes) => String::from_utf8(bytes.clone())
                .map_err(|_| self.out_of_range(REQUESTED)),
            Self::Bool(b) => Ok(b.to_string()),
            Self::Date(d) => Ok(d.to_string()),
            Self::Decimal(d) => Ok(d.to_string()),
            Self::Duration(d) => Ok(d.to_string()),
            Self::Float32(f) => Ok(f.to_string()),
            Self::Float64(f) => Ok(f.to_string()),
            Self::Int(i) => Ok(i.to_string()),
            Self::Int128(i) => Ok(i.to_string()),
            Self::Text(s) => Ok(s.clone()),
            Self::Timestamp(t) => t.to_rfc3339().ok_or_else(|| self.out_of_range(REQUESTED)),
            Self::Uint(u) => Ok(u.to_string()),
            Self::Uint128(u) => Ok(u.to_string()),
            Self::Null => Err(self.reject(REQUESTED)),
        }
    }

    fn read_blob(&self) -> AccessResult<Vec<u8>> {
        match self {
            Self::Blob(bytes) => Ok(bytes.clone()),
            Self::Text(s) => Ok(s.clone().into_bytes()),
            _ => Err(self.reject(ScalarKind::Blob)),
        }
    }

    fn read_date(&self) -> AccessResult<Date> {
        match self {
            Self::Date(d) => Ok(*d),
            _ => Err(self.reject(ScalarKind::Date)),
        }
    }

    fn read_timestamp(&self) -> AccessResult<Timestamp> {
        match self {
            Self::Timestamp(t) => Ok(*t),
            _ => Err(self.reject(ScalarKind::Timestamp)),
        }
    }

    fn read_duration(&self) -> AccessResult<Duration> {
        match self {
            Self::Duration(d) => Ok(*d),
            _ => Err(self.reject(ScalarKind::Duration)),
        }
    }
}

///
/// FAILURE HELPERS
///

impl Value {
    /// Data-shape rejection: NULL or a family that cannot represent the
    /// request at all.
    fn reject(&self, requested: ScalarKind) -> AccessError {
        match self.kind() {
            Some(kind) => AccessError::IncompatibleKind { kind, requested },
            None => AccessError::NullValue { requested },
        }
    }

    /// The conversion is wired up, but this particular value does not fit.
    fn out_of_range(&self, requested: ScalarKind) -> AccessError {
        match self.kind() {
            Some(kind) => AccessError::OutOfRange {
                kind,
                requested,
                value: self.render(),
            },
            None => AccessError::NullValue { requested },
        }
    }

    /// Short diagnostic rendering; long payloads are summarized, not dumped.
    fn render(&self) -> String {
        match self {
            Self::Blob(bytes) => format!("<{} bytes>", bytes.len()),
            Self::Bool(b) => b.to_string(),
            Self::Date(d) => d.to_string(),
            Self::Decimal(d) => d.to_string(),
            Self::Duration(d) => d.to_string(),
            Self::Float32(f) => f.to_string(),
            Self::Float64(f) => f.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Int128(i) => i.to_string(),
            Self::Null => "null".to_string(),
            Self::Text(s) => s.chars().take(32).collect(),
            Self::Timestamp(t) => t.to_string(),
            Self::Uint(u) => u.to_string(),
            Self::Uint128(u) => u.to_string(),
        }
    }
}
