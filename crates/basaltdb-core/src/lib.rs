//! Core value runtime for BasaltDB: the supported-scalar registry, the
//! type-erased access surface, and the reference `Value` producer.

#[macro_use]
pub(crate) mod scalar_registry;

// public exports are one module level down
pub mod access;
pub mod error;
pub mod types;
pub mod value;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        access::{ScalarSource, ScalarTarget, TypedValue},
        types::{Date, Decimal, Duration, Float32, Float64, Timestamp},
        value::{ScalarFamily, ScalarKind, Value},
    };
}
