//! Purpose: Stateless optional values with a JSON-aware coercion boundary.
//! Exports: `core` (wrapper type, errors), `coerce` (dynamic constructors), `abi` (C bindings surface).
//! Role: Library crate consumed directly from Rust or through the cdylib by non-Rust bindings.
//! Invariants: All constructors are total; the only failure in the crate is unwrapping nothing.
//! Invariants: Values are immutable once wrapped; combinators return new values.

pub mod abi;
pub mod coerce;
pub mod core;
mod json;

pub use crate::coerce::{just, of_number, of_object, of_string, to_display_string, wrap, Input, IntoInput, NOTHING};
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::maybe::{IntoMaybe, Maybe};
