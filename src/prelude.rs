//! Prelude module for the day_cell crate.
//!
//! Re-exports the derive_more macros used by the value types.

#[allow(unused_imports)]
pub use derive_more::{Deref, Display};
