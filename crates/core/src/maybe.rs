//! Optional value without null
//!
//! `Maybe<T>` is a two-state union: `Some(value)` or `None`.
//! It mirrors `std::option::Option` but speaks the same combinator
//! vocabulary as `Outcome` and `Attempt` (`map`, `bind`, `tap`,
//! `match_with`) and converts into them.
//!
//! ## Ordering
//!
//! `None` sorts below every `Some`; two `Some` values compare by the wrapped
//! value; `None == None`.

use crate::attempt::Attempt;
use crate::contract::{AttemptError, OutcomeError};
use crate::error::{ContractError, ContractResult};
use crate::outcome::Outcome;

/// An optional value
///
/// ## Invariant
///
/// `is_some()` is true exactly when a value is present. `None` is the single
/// empty representation for every `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// No value
    None,
    /// A present value
    Some(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Wrap a present value
    #[inline]
    pub const fn some(value: T) -> Self {
        Maybe::Some(value)
    }

    /// The empty value
    #[inline]
    pub const fn none() -> Self {
        Maybe::None
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Check if a value is present
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Maybe::Some(_))
    }

    /// Check if no value is present
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Maybe::None)
    }

    /// Borrow the value, if present
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }

    /// Convert `&Maybe<T>` into `Maybe<&T>`
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => Maybe::None,
        }
    }

    /// Take the value, failing fast when empty
    ///
    /// # Panics
    ///
    /// Panics with "Option was none" when called on `None`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => ContractError::OptionIsNone.raise(),
        }
    }

    /// Take the value, or report `ContractError::OptionIsNone`
    pub fn try_unwrap(self) -> ContractResult<T> {
        match self {
            Maybe::Some(value) => Ok(value),
            Maybe::None => Err(ContractError::OptionIsNone),
        }
    }

    /// Take the value or a fallback
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => fallback,
        }
    }

    /// Take the value or compute a fallback
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => fallback(),
        }
    }

    /// Take the value or `T::default()`
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Transform the value; `None` stays `None`
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(value) => Maybe::Some(f(value)),
            Maybe::None => Maybe::None,
        }
    }

    /// Chain an operation that may itself produce nothing
    pub fn bind<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Some(value) => f(value),
            Maybe::None => Maybe::None,
        }
    }

    /// Keep the value only if it satisfies the predicate
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Some(value) => {
                if predicate(&value) {
                    Maybe::Some(value)
                } else {
                    Maybe::None
                }
            }
            Maybe::None => Maybe::None,
        }
    }

    /// Run a side effect on the value and pass `self` through
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Maybe::Some(value) = &self {
            f(value);
        }
        self
    }

    /// Run a side effect when empty and pass `self` through
    pub fn tap_none<F>(self, f: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_none() {
            f();
        }
        self
    }

    /// Project into `R` by running exactly one of the handlers
    pub fn match_with<R, S, N>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Maybe::Some(value) => on_some(value),
            Maybe::None => on_none(),
        }
    }

    /// Return `self` if present, otherwise `other`
    pub fn or(self, other: Maybe<T>) -> Maybe<T> {
        match self {
            Maybe::Some(_) => self,
            Maybe::None => other,
        }
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Convert into a std `Option`
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }

    /// Success with the value, or a `NotFound` outcome carrying `error`
    pub fn to_outcome(self, error: OutcomeError) -> Outcome<T> {
        match self {
            Maybe::Some(value) => Outcome::success(value),
            Maybe::None => Outcome::not_found_with(error),
        }
    }

    /// Success with the value, or a `NotFound` attempt carrying `error`
    pub fn ok_or(self, error: impl Into<AttemptError>) -> Attempt<T> {
        match self {
            Maybe::Some(value) => Attempt::success(value),
            Maybe::None => Attempt::not_found(error.into()),
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Maybe::Some(value),
            None => Maybe::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
