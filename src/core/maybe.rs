//! Purpose: The two-variant optional wrapper and every instance operation on it.
//! Exports: `Maybe`, `IntoMaybe`.
//! Role: Pure value core; no I/O, no interior mutability, no hidden state.
//! Invariants: Combinators never mutate the receiver; they consume or borrow and return a new value.
//! Invariants: `get` is the only operation with an error channel; everything else is total.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;

use crate::core::error::Error;

/// Exactly one of two variants: a held value or nothing at all.
///
/// `Nothing` carries no payload, so it allocates nothing and every `Nothing`
/// is interchangeable with every other.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Maybe<T> {
    Just(T),
    Nothing,
}

/// Conversion into a `Maybe`, collapsing "no value" shapes along the way.
///
/// This is the overload set behind `map`, `or`, and `or_else`: a plain value
/// becomes `Just`, an `Option` collapses `None` to `Nothing`, and a `Maybe`
/// passes through unchanged so wrapping is idempotent.
pub trait IntoMaybe<T> {
    fn into_maybe(self) -> Maybe<T>;
}

impl<T> IntoMaybe<T> for T {
    fn into_maybe(self) -> Maybe<T> {
        Maybe::Just(self)
    }
}

impl<T> IntoMaybe<T> for Option<T> {
    fn into_maybe(self) -> Maybe<T> {
        match self {
            Some(value) => Maybe::Just(value),
            None => Maybe::Nothing,
        }
    }
}

impl<T> IntoMaybe<T> for Maybe<T> {
    fn into_maybe(self) -> Maybe<T> {
        self
    }
}

impl<T> Maybe<T> {
    pub fn is_just(&self) -> bool {
        matches!(self, Maybe::Just(_))
    }

    pub fn is_nothing(&self) -> bool {
        matches!(self, Maybe::Nothing)
    }

    /// Keep the value only if `pred` holds. The predicate sees the unwrapped
    /// value and is never invoked on `Nothing`.
    pub fn filter(self, pred: impl FnOnce(&T) -> bool) -> Maybe<T> {
        match self {
            Maybe::Just(value) if pred(&value) => Maybe::Just(value),
            _ => Maybe::Nothing,
        }
    }

    /// Apply `f` to a held value and re-wrap the result.
    ///
    /// The result goes back through [`IntoMaybe`], so a closure returning
    /// `None` (or `Nothing`) collapses to `Nothing` instead of producing a
    /// wrapped empty value.
    pub fn map<U, R, F>(self, f: F) -> Maybe<U>
    where
        R: IntoMaybe<U>,
        F: FnOnce(T) -> R,
    {
        match self {
            Maybe::Just(value) => f(value).into_maybe(),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Run `f` against a held value for its side effect; returns the receiver
    /// so calls chain. The only side-effecting operation on the type.
    pub fn for_each(&self, f: impl FnOnce(&T)) -> &Self {
        if let Maybe::Just(value) = self {
            f(value);
        }
        self
    }

    /// Replace `Nothing` with `fallback`, re-wrapped through [`IntoMaybe`].
    /// On `Just` the fallback is unused.
    pub fn or(self, fallback: impl IntoMaybe<T>) -> Maybe<T> {
        match self {
            Maybe::Just(value) => Maybe::Just(value),
            Maybe::Nothing => fallback.into_maybe(),
        }
    }

    /// Thunk form of [`Maybe::or`]; `f` is invoked only on `Nothing`.
    pub fn or_else<R, F>(self, f: F) -> Maybe<T>
    where
        R: IntoMaybe<T>,
        F: FnOnce() -> R,
    {
        match self {
            Maybe::Just(value) => Maybe::Just(value),
            Maybe::Nothing => f().into_maybe(),
        }
    }

    /// Unwrap with a literal default.
    pub fn get_or(self, fallback: T) -> T {
        match self {
            Maybe::Just(value) => value,
            Maybe::Nothing => fallback,
        }
    }

    /// Unwrap with a lazily computed default; the thunk is invoked only on
    /// `Nothing`.
    pub fn get_or_else(self, f: impl FnOnce() -> T) -> T {
        match self {
            Maybe::Just(value) => value,
            Maybe::Nothing => f(),
        }
    }

    /// Unwrap or fail. This is the single failure point of the crate: on
    /// `Nothing` it returns [`Error::empty`]; it never yields a sentinel.
    pub fn get(self) -> Result<T, Error> {
        match self {
            Maybe::Just(value) => Ok(value),
            Maybe::Nothing => Err(Error::empty()),
        }
    }

    /// Unwrap or fail with exactly the supplied error object.
    pub fn get_or_raise<E>(self, error: E) -> Result<T, E> {
        match self {
            Maybe::Just(value) => Ok(value),
            Maybe::Nothing => Err(error),
        }
    }

    /// Borrowing view, for running combinators without consuming the receiver.
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Just(value) => Maybe::Just(value),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Collapse one level of wrapping.
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Maybe::Just(inner) => inner,
            Maybe::Nothing => Maybe::Nothing,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        value.into_maybe()
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Just(inner) => Some(inner),
            Maybe::Nothing => None,
        }
    }
}

/// `Just(v)` formats as `v`; `Nothing` formats as the empty string.
impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Just(value) => value.fmt(f),
            Maybe::Nothing => Ok(()),
        }
    }
}

// Same wire representation as `Option`: `Nothing` is null, `Just(v)` is `v`.
impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Maybe::Just(value) => serializer.serialize_some(value),
            Maybe::Nothing => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Maybe::from)
    }
}
