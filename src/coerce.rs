//! Purpose: Type-directed construction of `Maybe<Value>` from dynamic input.
//! Exports: `Input`, `IntoInput`, `wrap`, `just`, `NOTHING`, `of_string`, `of_number`, `of_object`, `to_display_string`.
//! Role: Boundary between caller-shaped data and the wrapper core; the dynamic universe is `serde_json::Value`.
//! Invariants: Every constructor here is total; invalid input becomes `Nothing`, never an error.
//! Invariants: Input classification happens exactly once, in `IntoInput`, before any validation.

use serde_json::{Map, Value};

use crate::core::maybe::Maybe;

/// The shared absent value for the dynamic universe.
pub const NOTHING: Maybe<Value> = Maybe::Nothing;

/// A caller input, classified once at the boundary.
///
/// `Nullish` is the "no value" sentinel, `Wrapped` is a value that is already
/// a `Maybe` (and must pass through unchanged), `Raw` is everything else.
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    Nullish,
    Wrapped(Maybe<Value>),
    Raw(Value),
}

impl Input {
    /// True iff the input was already a wrapped value. The boundary
    /// counterpart of asking "is this an instance of the wrapper type".
    pub fn is_wrapped(&self) -> bool {
        matches!(self, Input::Wrapped(_))
    }
}

/// The overload set feeding the boundary.
///
/// Each impl performs its own primitive conversion before classification, so
/// by the time a constructor validates anything the input is already in
/// canonical form. There are no blanket impls: what can cross the boundary is
/// exactly this list.
pub trait IntoInput {
    fn into_input(self) -> Input;
}

impl IntoInput for Input {
    fn into_input(self) -> Input {
        self
    }
}

impl IntoInput for Value {
    fn into_input(self) -> Input {
        match self {
            Value::Null => Input::Nullish,
            other => Input::Raw(other),
        }
    }
}

impl IntoInput for &Value {
    fn into_input(self) -> Input {
        self.clone().into_input()
    }
}

impl IntoInput for Maybe<Value> {
    fn into_input(self) -> Input {
        Input::Wrapped(self)
    }
}

impl IntoInput for String {
    fn into_input(self) -> Input {
        Input::Raw(Value::String(self))
    }
}

impl IntoInput for &str {
    fn into_input(self) -> Input {
        Input::Raw(Value::String(self.to_string()))
    }
}

// Non-finite floats have no JSON representation; they classify as the
// absence sentinel, which makes `of_number(f64::NAN)` come out `Nothing`.
impl IntoInput for f64 {
    fn into_input(self) -> Input {
        match serde_json::Number::from_f64(self) {
            Some(number) => Input::Raw(Value::Number(number)),
            None => Input::Nullish,
        }
    }
}

impl IntoInput for i64 {
    fn into_input(self) -> Input {
        Input::Raw(Value::Number(self.into()))
    }
}

impl IntoInput for i32 {
    fn into_input(self) -> Input {
        Input::Raw(Value::Number(self.into()))
    }
}

impl IntoInput for u64 {
    fn into_input(self) -> Input {
        Input::Raw(Value::Number(self.into()))
    }
}

impl IntoInput for bool {
    fn into_input(self) -> Input {
        Input::Raw(Value::Bool(self))
    }
}

impl IntoInput for Map<String, Value> {
    fn into_input(self) -> Input {
        Input::Raw(Value::Object(self))
    }
}

impl IntoInput for Vec<Value> {
    fn into_input(self) -> Input {
        Input::Raw(Value::Array(self))
    }
}

impl<I: IntoInput> IntoInput for Option<I> {
    fn into_input(self) -> Input {
        match self {
            Some(inner) => inner.into_input(),
            None => Input::Nullish,
        }
    }
}

impl IntoInput for () {
    fn into_input(self) -> Input {
        Input::Nullish
    }
}

/// Checked constructor. Absence collapses to `Nothing`, an already-wrapped
/// value passes through unchanged (no double-wrapping), anything else becomes
/// `Just`. Total over every `IntoInput` shape.
pub fn wrap(value: impl IntoInput) -> Maybe<Value> {
    match value.into_input() {
        Input::Nullish => Maybe::Nothing,
        Input::Wrapped(maybe) => maybe,
        Input::Raw(raw) => Maybe::Just(raw),
    }
}

/// Unchecked constructor: always `Just`, with no null check. `just(Value::Null)`
/// really does hold a null; callers who want collapsing use [`wrap`].
pub fn just(value: impl Into<Value>) -> Maybe<Value> {
    Maybe::Just(value.into())
}

/// `Just` iff the input is a non-empty string. The empty string counts as
/// absence; wrapped values and non-strings never coerce.
pub fn of_string(value: impl IntoInput) -> Maybe<String> {
    match value.into_input() {
        Input::Raw(Value::String(text)) if !text.is_empty() => Maybe::Just(text),
        _ => Maybe::Nothing,
    }
}

/// `Just` iff the input is a number. NaN never gets this far: it classifies
/// as `Nullish` at the boundary, so it comes out `Nothing` here.
pub fn of_number(value: impl IntoInput) -> Maybe<f64> {
    match value.into_input() {
        Input::Raw(Value::Number(number)) => Maybe::from(number.as_f64()),
        _ => Maybe::Nothing,
    }
}

/// `Just` iff the input is an object shape (map or array), routed through
/// [`wrap`] so null collapses and wrapped values pass through unchanged.
/// Strings and numbers never coerce here, whatever their content.
pub fn of_object(value: impl IntoInput) -> Maybe<Value> {
    match value.into_input() {
        Input::Nullish => Maybe::Nothing,
        Input::Wrapped(maybe) => maybe,
        Input::Raw(raw @ (Value::Object(_) | Value::Array(_))) => wrap(raw),
        Input::Raw(_) => Maybe::Nothing,
    }
}

/// Human-facing rendering: held strings print unquoted, any other held value
/// prints as compact JSON, `Nothing` prints as the empty string.
pub fn to_display_string(maybe: &Maybe<Value>) -> String {
    match maybe {
        Maybe::Just(Value::String(text)) => text.clone(),
        Maybe::Just(value) => value.to_string(),
        Maybe::Nothing => String::new(),
    }
}
