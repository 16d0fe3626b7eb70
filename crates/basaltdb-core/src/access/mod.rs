#[cfg(test)]
mod tests;

use crate::{
    error::{AccessError, AccessResult},
    types::{Date, Decimal, Duration, Timestamp},
    value::{ScalarKind, Value},
};
use std::{fmt, sync::Arc};

mod sealed {
    pub trait Sealed {}
}

// Expand the registry into the producer read trait. Every read method gets
// the same default body: the shared unsupported-conversion failure. A
// producer participates in a kind by overriding that kind's method; kinds it
// leaves alone keep the fallback, so growing the registry can never leave a
// producer with a missing or silently-wrong accessor.
macro_rules! scalar_source_trait_from_registry {
    ( @entries $( ($scalar:ident, $native:ty, $read_fn:ident, $family:ident, is_numeric = $is_numeric:expr) ),* $(,)? ) => {
        ///
        /// ScalarSource
        ///
        /// Producer-side read surface over one opaque value.
        ///
        /// Implementations are immutable once published: every method is a
        /// pure read, so a `ScalarSource` may be shared freely across
        /// threads after construction.
        ///
        pub trait ScalarSource {
            /// Diagnostic label naming the producing source.
            fn source_label(&self) -> &'static str {
                "opaque"
            }

            /// Returns true when the underlying value is the database NULL.
            fn is_null(&self) -> bool {
                false
            }

            $(
                #[doc = concat!("Read the underlying value as `", stringify!($native), "`.")]
                fn $read_fn(&self) -> AccessResult<$native> {
                    Err(AccessError::unsupported(
                        self.source_label(),
                        ScalarKind::$scalar,
                    ))
                }
            )*
        }
    };
}

scalar_registry!(scalar_source_trait_from_registry);

// Expand the registry into the closed target-type set. The seal keeps the
// set closed: a request can only name a type the registry enumerates.
macro_rules! scalar_target_impls_from_registry {
    ( @entries $( ($scalar:ident, $native:ty, $read_fn:ident, $family:ident, is_numeric = $is_numeric:expr) ),* $(,)? ) => {
        $(
            impl sealed::Sealed for $native {}

            impl ScalarTarget for $native {
                const KIND: ScalarKind = ScalarKind::$scalar;

                fn read_from(source: &dyn ScalarSource) -> AccessResult<Self> {
                    source.$read_fn()
                }
            }
        )*
    };
}

///
/// ScalarTarget
///
/// A native type a typed read can yield. Implemented for exactly the
/// registry's native types; the trait is sealed, so the supported set is
/// fixed at build time and dispatch costs nothing at runtime.
///

pub trait ScalarTarget: sealed::Sealed + Sized {
    /// Kind tag this target type corresponds to.
    const KIND: ScalarKind;

    /// Dispatch to the producer's read method for this target type.
    fn read_from(source: &dyn ScalarSource) -> AccessResult<Self>;
}

scalar_registry!(scalar_target_impls_from_registry);

///
/// TypedValue
///
/// Type-erased holder over a finished producer. Consumers name a target
/// type; the producer either yields an exact conversion or fails. The
/// holder is immutable and cheap to clone; reads are pure and repeatable.
///

#[derive(Clone)]
pub struct TypedValue {
    source: Arc<dyn ScalarSource + Send + Sync>,
}

impl TypedValue {
    /// Freeze a finished producer behind the typed-access surface.
    pub fn new(source: impl ScalarSource + Send + Sync + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Read the value as `T`.
    ///
    /// Fails with [`AccessError::UnsupportedConversion`] when the producer
    /// never wired up `T`, or with a data error when the value itself
    /// cannot satisfy the request.
    pub fn get<T: ScalarTarget>(&self) -> AccessResult<T> {
        T::read_from(self.source.as_ref())
    }

    /// Returns true when the underlying value is the database NULL.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.source.is_null()
    }

    /// Diagnostic label of the producing source.
    #[must_use]
    pub fn source_label(&self) -> &'static str {
        self.source.source_label()
    }
}

impl fmt::Debug for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypedValue")
            .field(&self.source_label())
            .finish()
    }
}

impl From<Value> for TypedValue {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}
