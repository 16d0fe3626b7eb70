//! ## Crate layout
//! - `runtime`: scalar registry, typed access surface, and the reference
//!   `Value` producer.
//!
//! The `prelude` module mirrors the runtime surface used by row readers and
//! their consumers.

pub use basaltdb_core as runtime;

pub use basaltdb_core::{
    access::{ScalarSource, ScalarTarget, TypedValue},
    error::{AccessError, AccessResult},
    value::{ScalarKind, Value},
};

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use basaltdb_core::prelude::*;
}

///
/// TESTS
///
