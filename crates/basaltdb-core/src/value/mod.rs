mod convert;
mod kind;


use crate::types::{Date, Decimal, Duration, Float32, Float64, Timestamp};
use serde::{Deserialize, Serialize};

// re-exports
pub use kind::{ScalarFamily, ScalarKind};

///
/// Value
///
/// Tagged-union scalar representation produced by row readers.
/// One variant per supported scalar kind, plus:
///
/// Null → the field's value is the database NULL.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Blob(#[serde(with = "serde_bytes")] Vec<u8>),
    Bool(bool),
    Date(Date),
    Decimal(Decimal),
    Duration(Duration),
    Float32(Float32),
    Float64(Float64),
    Int(i64),
    Int128(i128),
    Null,
    Text(String),
    Timestamp(Timestamp),
    Uint(u64),
    Uint128(u128),
}

// Local helpers to expand the scalar registry into match arms.
macro_rules! value_kind_from_registry {
    ( @args $value:expr; @entries $( ($scalar:ident, $native:ty, $read_fn:ident, $family:ident, is_numeric = $is_numeric:expr) ),* $(,)? ) => {
        match $value {
            $( Self::$scalar(_) => Some(ScalarKind::$scalar), )*
            Self::Null => None,
        }
    };
}

macro_rules! value_is_numeric_from_registry {
    ( @args $value:expr; @entries $( ($scalar:ident, $native:ty, $read_fn:ident, $family:ident, is_numeric = $is_numeric:expr) ),* $(,)? ) => {
        match $value {
            $( Self::$scalar(_) => $is_numeric, )*
            Self::Null => false,
        }
    };
}

impl Value {
    ///
    /// TYPES
    ///

    /// Kind tag of the stored scalar; `None` for `Null`.
    #[must_use]
    pub const fn kind(&self) -> Option<ScalarKind> {
        scalar_registry!(value_kind_from_registry, self)
    }

    /// Kind label for diagnostics; `Null` renders as `"null"`.
    #[must_use]
    pub const fn kind_label(&self) -> &'static str {
        match self.kind() {
            Some(kind) => kind.label(),
            None => "null",
        }
    }

    /// Coarse routing family of the stored scalar; `None` for `Null`.
    #[must_use]
    pub const fn family(&self) -> Option<ScalarFamily> {
        match self.kind() {
            Some(kind) => Some(kind.family()),
            None => None,
        }
    }

    /// Returns true if the value is one of the numeric variants.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        scalar_registry!(value_is_numeric_from_registry, self)
    }

    /// Returns true if the value is Text.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Returns true if the value is the database NULL.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    ///
    /// BORROWING ACCESSORS
    ///

    #[must_use]
    pub const fn as_text(&self) -> Option<&str> {
        if let Self::Text(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_blob(&self) -> Option<&[u8]> {
        if let Self::Blob(bytes) = self {
            Some(bytes.as_slice())
        } else {
            None
        }
    }
}

macro_rules! impl_from_for {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for! {
    Date       => Date,
    Decimal    => Decimal,
    Duration   => Duration,
    Float32    => Float32,
    Float64    => Float64,
    Timestamp  => Timestamp,
    bool       => Bool,
    i8         => Int,
    i16        => Int,
    i32        => Int,
    i64        => Int,
    i128       => Int128,
    &str       => Text,
    String     => Text,
    u8         => Uint,
    u16        => Uint,
    u32        => Uint,
    u64        => Uint,
    u128       => Uint128,
    Vec<u8>    => Blob,
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl TryFrom<f32> for Value {
    type Error = ();

    fn try_from(v: f32) -> Result<Self, Self::Error> {
        Float32::try_new(v).map(Self::Float32).ok_or(())
    }
}

impl TryFrom<f64> for Value {
    type Error = ();

    fn try_from(v: f64) -> Result<Self, Self::Error> {
        Float64::try_new(v).map(Self::Float64).ok_or(())
    }
}
