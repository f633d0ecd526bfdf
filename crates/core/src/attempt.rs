//! Value-or-error results with a status
//!
//! `Attempt<T>` is the result of an operation that either produced a value or
//! failed with one error object (`AttemptError`). Like `Outcome`, it carries a
//! `Status`, so a failure can say *how* it failed (`NotFound`, `Conflict`, ...).
//! `Attempt` without a type argument is `Attempt<()>`.
//!
//! ## The Contract
//!
//! - success ⇔ no error; a success always holds its value
//! - a failure always holds exactly one `AttemptError`
//! - `map`/`bind` on a failure propagate the original error untouched;
//!   the handle is moved, never rebuilt, so `AttemptError::ptr_eq` holds
//!
//! ## Ordering
//!
//! `compare_to` defines a three-way comparison: successes compare by value, a
//! success sorts after any failure, and two failures are `Equal`. Because that
//! ordering ignores the errors while `==` does not, `Attempt` does not
//! implement `Ord`.

use crate::contract::{AttemptError, Status};
use crate::error::{ContractError, ContractResult};
use crate::maybe::Maybe;
use std::cmp::Ordering;
use std::error::Error as StdError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
enum State<T> {
    Succeeded { status: Status, value: T },
    Failed { status: Status, error: AttemptError },
}

/// Result of an operation: a value, or one error object, plus a status
///
/// ## Invariants
///
/// - A successful status always carries a value and no error
/// - A failed status always carries an error and no value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt<T = ()> {
    state: State<T>,
}

/// Generates one factory per failed status
macro_rules! failure_factories {
    ($($status:ident => $name:ident;)+) => {
        $(
            #[doc = concat!("Create a `", stringify!($status), "` attempt")]
            pub fn $name(error: impl Into<AttemptError>) -> Self {
                Self::failed(Status::$status, error.into())
            }
        )+
    };
}

impl<T> Attempt<T> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a `Success` attempt
    pub fn success(value: T) -> Self {
        Self::succeeded(Status::Success, value)
    }

    /// Create a `Created` attempt
    pub fn created(value: T) -> Self {
        Self::succeeded(Status::Created, value)
    }

    /// Create a `NoContent` attempt
    pub fn no_content(value: T) -> Self {
        Self::succeeded(Status::NoContent, value)
    }

    /// Create an attempt with any successful status
    ///
    /// # Errors
    ///
    /// Returns `ContractError::InvalidArgument` when `status` is a failure.
    pub fn with_value(status: Status, value: T) -> ContractResult<Self> {
        if status.is_failure() {
            return Err(ContractError::invalid_argument(
                "status",
                format!("{} is not a successful status", status),
            ));
        }
        Ok(Self::succeeded(status, value))
    }

    /// Create an attempt with any failed status
    ///
    /// # Errors
    ///
    /// Returns `ContractError::InvalidArgument` when `status` is successful.
    pub fn with_status(status: Status, error: impl Into<AttemptError>) -> ContractResult<Self> {
        if status.is_success() {
            return Err(ContractError::invalid_argument(
                "status",
                format!("{} is not a failure status", status),
            ));
        }
        Ok(Self::failed(status, error.into()))
    }

    failure_factories! {
        NotFound => not_found;
        Validation => validation;
        Problem => problem;
        Conflict => conflict;
        Forbidden => forbidden;
        Unauthorized => unauthorized;
        Failure => failure;
        CriticalError => critical_error;
        Unavailable => unavailable;
    }

    /// Build from a bare value; always a success
    pub fn from_value(value: T) -> Self {
        Self::success(value)
    }

    /// Build from an error; always a `Failure`
    pub fn from_error<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::failed(Status::Failure, AttemptError::from_error(error))
    }

    /// Build from a std `Result`
    pub fn from_result<E>(result: Result<T, E>) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::from_error(error),
        }
    }

    fn succeeded(status: Status, value: T) -> Self {
        debug_assert!(status.is_success());
        Attempt {
            state: State::Succeeded { status, value },
        }
    }

    fn failed(status: Status, error: AttemptError) -> Self {
        debug_assert!(status.is_failure());
        Attempt {
            state: State::Failed { status, error },
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Status of this attempt
    #[inline]
    pub fn status(&self) -> Status {
        match &self.state {
            State::Succeeded { status, .. } | State::Failed { status, .. } => *status,
        }
    }

    /// Check if this attempt succeeded
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self.state, State::Succeeded { .. })
    }

    /// Check if this attempt failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrow the value of a success
    pub fn value(&self) -> Option<&T> {
        match &self.state {
            State::Succeeded { value, .. } => Some(value),
            State::Failed { .. } => None,
        }
    }

    /// Borrow the error of a failure
    pub fn error(&self) -> Option<&AttemptError> {
        match &self.state {
            State::Succeeded { .. } => None,
            State::Failed { error, .. } => Some(error),
        }
    }

    // =========================================================================
    // Consumption
    // =========================================================================

    /// Project into `R` by running exactly one of the handlers
    pub fn match_with<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(AttemptError) -> R,
    {
        match self.state {
            State::Succeeded { value, .. } => on_success(value),
            State::Failed { error, .. } => on_failure(error),
        }
    }

    /// Like `match_with`, but the failure handler also receives the status
    pub fn match_status<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Status, AttemptError) -> R,
    {
        match self.state {
            State::Succeeded { value, .. } => on_success(value),
            State::Failed { status, error } => on_failure(status, error),
        }
    }

    /// Take the value, failing fast on a failure
    ///
    /// # Panics
    ///
    /// Panics with the `ContractError::NotSuccessful` message when failed.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(err) => err.raise(),
        }
    }

    /// Take the value, or report `ContractError::NotSuccessful`
    pub fn try_unwrap(self) -> ContractResult<T> {
        match self.state {
            State::Succeeded { value, .. } => Ok(value),
            State::Failed { status, error } => {
                Err(ContractError::not_successful(status, error.message()))
            }
        }
    }

    /// Take the value or a fallback
    pub fn unwrap_or(self, fallback: T) -> T {
        match self.state {
            State::Succeeded { value, .. } => value,
            State::Failed { .. } => fallback,
        }
    }

    /// Take the value or compute a fallback from the error
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(AttemptError) -> T,
    {
        match self.state {
            State::Succeeded { value, .. } => value,
            State::Failed { error, .. } => fallback(error),
        }
    }

    /// Convert into a std `Result`
    pub fn into_result(self) -> Result<T, AttemptError> {
        match self.state {
            State::Succeeded { value, .. } => Ok(value),
            State::Failed { error, .. } => Err(error),
        }
    }

    /// `Some(value)` on success, `None` on failure
    pub fn to_maybe(self) -> Maybe<T> {
        match self.state {
            State::Succeeded { value, .. } => Maybe::Some(value),
            State::Failed { .. } => Maybe::None,
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Transform the value, keeping the successful status
    pub fn map<U, F>(self, f: F) -> Attempt<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.state {
            State::Succeeded { status, value } => Attempt::succeeded(status, f(value)),
            State::Failed { status, error } => Attempt::failed(status, error),
        }
    }

    /// Chain an operation that produces its own attempt
    pub fn bind<U, F>(self, f: F) -> Attempt<U>
    where
        F: FnOnce(T) -> Attempt<U>,
    {
        match self.state {
            State::Succeeded { value, .. } => f(value),
            State::Failed { status, error } => Attempt::failed(status, error),
        }
    }

    /// Replace the error of a failure, keeping the status
    pub fn map_error<F>(self, f: F) -> Self
    where
        F: FnOnce(AttemptError) -> AttemptError,
    {
        match self.state {
            State::Failed { status, error } => Self::failed(status, f(error)),
            succeeded => Attempt { state: succeeded },
        }
    }

    /// Run a side effect on the value and pass `self` through
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let State::Succeeded { value, .. } = &self.state {
            f(value);
        }
        self
    }

    /// Run a side effect on the error and pass `self` through
    pub fn tap_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&AttemptError),
    {
        if let State::Failed { error, .. } = &self.state {
            f(error);
        }
        self
    }

    /// Three-way comparison
    ///
    /// Successes compare by value; a success is greater than any failure;
    /// two failures are `Equal`.
    pub fn compare_to(&self, other: &Attempt<T>) -> Ordering
    where
        T: Ord,
    {
        match (self.value(), other.value()) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        }
    }
}

impl<T: fmt::Display> Attempt<T> {
    /// Render a success together with its value, e.g. `Success(5)`
    pub fn display_value(&self) -> impl fmt::Display + '_ {
        WithValue(self)
    }
}

/// `Success`, `Created`, ... or `Status[error message]`
impl<T> fmt::Display for Attempt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Succeeded { status, .. } => write!(f, "{}", status),
            State::Failed { status, error } => write!(f, "{}[{}]", status, error),
        }
    }
}

struct WithValue<'a, T>(&'a Attempt<T>);

impl<T: fmt::Display> fmt::Display for WithValue<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.value() {
            Some(value) => write!(f, "{}({})", self.0.status(), value),
            None => write!(f, "{}", self.0),
        }
    }
}

// ============================================================================
// Serialization
// ============================================================================

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Attempt;
    use crate::contract::Status;
    use serde::{Serialize, Serializer};

    #[derive(Serialize)]
    struct AttemptRef<'a, T> {
        status: Status,
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<&'a T>,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<&'a str>,
    }

    impl<T: Serialize> Serialize for Attempt<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            AttemptRef {
                status: self.status(),
                value: self.value(),
                error: self.error().map(|e| e.message()),
            }
            .serialize(serializer)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
