use crate::value::ScalarKind;
use thiserror::Error as ThisError;

///
/// AccessResult
///

pub type AccessResult<T> = Result<T, AccessError>;

///
/// AccessError
///
/// Failure surface of the typed read operations.
///
/// `UnsupportedConversion` is a defect signal: the caller requested a
/// conversion the producing source was never built to support. It is
/// deterministic for a given (source, kind) pair and cannot be recovered by
/// retrying. The remaining variants are data errors raised by concrete
/// conversions: the request was wired up, but this particular value cannot
/// satisfy it.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum AccessError {
    /// The producing source has no conversion for the requested kind.
    #[error("internal error: unsupported type conversion requested ({producer} -> {requested})")]
    UnsupportedConversion {
        producer: &'static str,
        requested: ScalarKind,
    },

    /// The value's kind cannot represent the requested kind at all.
    #[error("cannot convert {kind} value to {requested}")]
    IncompatibleKind {
        kind: ScalarKind,
        requested: ScalarKind,
    },

    /// A conversion exists, but this value does not fit the target losslessly.
    #[error("{kind} value {value} does not fit {requested}")]
    OutOfRange {
        kind: ScalarKind,
        requested: ScalarKind,
        value: String,
    },

    /// The underlying value is the database NULL.
    #[error("null value has no {requested} representation")]
    NullValue { requested: ScalarKind },
}

impl AccessError {
    /// Construct the shared fallback failure for an unimplemented conversion.
    #[must_use]
    pub const fn unsupported(producer: &'static str, requested: ScalarKind) -> Self {
        Self::UnsupportedConversion {
            producer,
            requested,
        }
    }

    /// Returns true for the programming-error category.
    ///
    /// Data errors (`IncompatibleKind`, `OutOfRange`, `NullValue`) describe
    /// the value at hand; a defect describes the calling code.
    #[must_use]
    pub const fn is_defect(&self) -> bool {
        matches!(self, Self::UnsupportedConversion { .. })
    }

    /// The kind the caller asked for, whatever the failure.
    #[must_use]
    pub const fn requested(&self) -> ScalarKind {
        match self {
            Self::UnsupportedConversion { requested, .. }
            | Self::IncompatibleKind { requested, .. }
            | Self::OutOfRange { requested, .. }
            | Self::NullValue { requested } => *requested,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_is_the_only_defect_category() {
        let defect = AccessError::unsupported("opaque", ScalarKind::Float64);
        assert!(defect.is_defect());

        let data_errors = [
            AccessError::IncompatibleKind {
                kind: ScalarKind::Text,
                requested: ScalarKind::Bool,
            },
            AccessError::OutOfRange {
                kind: ScalarKind::Int,
                requested: ScalarKind::Uint,
                value: "-1".to_string(),
            },
            AccessError::NullValue {
                requested: ScalarKind::Int,
            },
        ];
        for err in data_errors {
            assert!(!err.is_defect());
        }
    }

    #[test]
    fn display_names_the_requested_kind() {
        let err = AccessError::unsupported("int column", ScalarKind::Float64);
        let rendered = err.to_string();
        assert!(rendered.contains("internal error"));
        assert!(rendered.contains("Float64"));
        assert!(rendered.contains("int column"));
        assert_eq!(err.requested(), ScalarKind::Float64);
    }
}
