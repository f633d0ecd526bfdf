//! Outcome state machine
//!
//! An `Outcome<T>` is the terminal disposition of an operation: a `Status`
//! plus either a value (successful statuses) or a non-empty, ordered list of
//! `OutcomeError`s (failed statuses). `Outcome` without a type argument is
//! `Outcome<()>`, the value-less form.
//!
//! ## The Contract
//!
//! ```text
//! Success | Created | NoContent  => value present, errors empty
//! every other status             => value absent,  errors non-empty
//! ```
//!
//! The representation makes the other combinations unrepresentable, and every
//! factory that could receive them validates its input:
//!
//! - failure factories reject an empty error sequence with
//!   `ContractError::InvalidArgument` ("at least one error must be provided")
//! - `try_success` rejects an absent value
//! - `with_errors` rejects a successful status, `with_value` a failed one
//!
//! ## Equality
//!
//! Strict: two outcomes are equal when they have the same status and either
//! equal values (successes) or element-wise equal error sequences (failures).
//! `Outcome::success(())` and `Outcome::created(())` are NOT equal. Hashing
//! follows the same fields, so it is consistent with equality.
//!
//! ## Consumption
//!
//! `match_with` / `match_status` project an outcome without unwrapping it.
//! `unwrap` fails fast (panics) on a failed outcome; `try_unwrap` returns the
//! `ContractError::NotSuccessful` instead.

use crate::contract::{OutcomeError, Status};
use crate::error::{ContractError, ContractResult};
use crate::maybe::Maybe;
use std::fmt;

/// Reason attached to every failure factory rejection
pub(crate) const NO_ERRORS_REASON: &str = "at least one error must be provided";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum State<T> {
    Succeeded { status: Status, value: T },
    Failed { status: Status, errors: Vec<OutcomeError> },
}

/// Terminal disposition of an operation, with a value on success
///
/// ## Invariants
///
/// - A successful status always carries a value and no errors
/// - A failed status always carries at least one error and no value
/// - Immutable once constructed; combinators return new outcomes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Outcome<T = ()> {
    state: State<T>,
}

/// Generates the pair of factories for one failed status:
/// a validating one over an error sequence and an infallible single-error one.
macro_rules! failure_factories {
    ($($status:ident => $many:ident, $one:ident;)+) => {
        $(
            #[doc = concat!("Create a `", stringify!($status), "` outcome from a non-empty error sequence")]
            ///
            /// # Errors
            ///
            /// Returns `ContractError::InvalidArgument` when `errors` is empty.
            pub fn $many<I>(errors: I) -> ContractResult<Self>
            where
                I: IntoIterator<Item = OutcomeError>,
            {
                Self::with_errors(Status::$status, errors)
            }

            #[doc = concat!("Create a `", stringify!($status), "` outcome from a single error")]
            pub fn $one(error: OutcomeError) -> Self {
                Self::failed(Status::$status, vec![error])
            }
        )+
    };
}

impl<T> Outcome<T> {
    // =========================================================================
    // Successful constructors
    // =========================================================================

    /// Create a `Success` outcome
    pub fn success(value: T) -> Self {
        Self::succeeded(Status::Success, value)
    }

    /// Create a `Created` outcome
    pub fn created(value: T) -> Self {
        Self::succeeded(Status::Created, value)
    }

    /// Create a `NoContent` outcome
    pub fn no_content(value: T) -> Self {
        Self::succeeded(Status::NoContent, value)
    }

    /// Create a `Success` outcome from a value that may be absent
    ///
    /// # Errors
    ///
    /// Returns `ContractError::InvalidArgument` when `value` is `None`.
    pub fn try_success(value: Option<T>) -> ContractResult<Self> {
        match value {
            Some(value) => Ok(Self::success(value)),
            None => Err(ContractError::invalid_argument(
                "value",
                "a successful outcome requires a value",
            )),
        }
    }

    /// Create an outcome with any successful status
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

    // =========================================================================
    // Failed constructors
    // =========================================================================

    /// Create an outcome with any failed status
    ///
    /// # Errors
    ///
    /// Returns `ContractError::InvalidArgument` when `status` is successful or
    /// `errors` is empty.
    pub fn with_errors<I>(status: Status, errors: I) -> ContractResult<Self>
    where
        I: IntoIterator<Item = OutcomeError>,
    {
        if status.is_success() {
            return Err(ContractError::invalid_argument(
                "status",
                format!("{} is not a failure status", status),
            ));
        }
        let errors: Vec<OutcomeError> = errors.into_iter().collect();
        if errors.is_empty() {
            return Err(ContractError::invalid_argument("errors", NO_ERRORS_REASON));
        }
        Ok(Self::failed(status, errors))
    }

    /// Create a `Failure` outcome from one error
    ///
    /// Building from an error value always yields a failure.
    pub fn from_error(error: OutcomeError) -> Self {
        Self::failure_with(error)
    }

    failure_factories! {
        NotFound => not_found, not_found_with;
        Validation => validation, validation_with;
        Problem => problem, problem_with;
        Conflict => conflict, conflict_with;
        Forbidden => forbidden, forbidden_with;
        Unauthorized => unauthorized, unauthorized_with;
        Failure => failure, failure_with;
        CriticalError => critical_error, critical_error_with;
        Unavailable => unavailable, unavailable_with;
    }

    /// Rebuild an outcome from its parts, validating every invariant
    ///
    /// This is the path deserialization takes.
    ///
    /// # Errors
    ///
    /// Returns `ContractError::InvalidArgument` when the parts describe a
    /// success without a value, a success with errors, a failure with a
    /// value, or a failure without errors.
    pub fn from_parts(
        status: Status,
        value: Option<T>,
        errors: Vec<OutcomeError>,
    ) -> ContractResult<Self> {
        if status.is_success() {
            if !errors.is_empty() {
                return Err(ContractError::invalid_argument(
                    "errors",
                    "a successful outcome cannot carry errors",
                ));
            }
            return Self::try_success(value).map(|outcome| outcome.with_status(status));
        }
        if value.is_some() {
            return Err(ContractError::invalid_argument(
                "value",
                "a failed outcome cannot carry a value",
            ));
        }
        Self::with_errors(status, errors)
    }

    fn succeeded(status: Status, value: T) -> Self {
        debug_assert!(status.is_success());
        Outcome {
            state: State::Succeeded { status, value },
        }
    }

    fn failed(status: Status, errors: Vec<OutcomeError>) -> Self {
        debug_assert!(status.is_failure() && !errors.is_empty());
        Outcome {
            state: State::Failed { status, errors },
        }
    }

    /// Replace the status of a success with another successful status
    fn with_status(self, status: Status) -> Self {
        match self.state {
            State::Succeeded { value, .. } => Self::succeeded(status, value),
            failed @ State::Failed { .. } => Outcome { state: failed },
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Status of this outcome
    #[inline]
    pub fn status(&self) -> Status {
        match &self.state {
            State::Succeeded { status, .. } | State::Failed { status, .. } => *status,
        }
    }

    /// Check if the status is in the successful set
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self.state, State::Succeeded { .. })
    }

    /// Check if the status is a failure
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

    /// Errors of a failure, in order; empty for a success
    pub fn errors(&self) -> &[OutcomeError] {
        match &self.state {
            State::Succeeded { .. } => &[],
            State::Failed { errors, .. } => errors.as_slice(),
        }
    }

    /// First error of a failure
    pub fn first_error(&self) -> Option<&OutcomeError> {
        self.errors().first()
    }

    // =========================================================================
    // Consumption
    // =========================================================================

    /// Project into `R` by running exactly one of the handlers
    pub fn match_with<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(&[OutcomeError]) -> R,
    {
        match self.state {
            State::Succeeded { value, .. } => on_success(value),
            State::Failed { errors, .. } => on_failure(&errors),
        }
    }

    /// Like `match_with`, but the failure handler also receives the status
    pub fn match_status<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Status, &[OutcomeError]) -> R,
    {
        match self.state {
            State::Succeeded { value, .. } => on_success(value),
            State::Failed { status, errors } => on_failure(status, &errors),
        }
    }

    /// Take the value, failing fast on a failed outcome
    ///
    /// # Panics
    ///
    /// Panics with the `ContractError::NotSuccessful` message when the status
    /// is a failure.
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
            State::Failed { status, errors } => Err(ContractError::not_successful(
                status,
                describe_errors(&errors),
            )),
        }
    }

    /// Take the value or a fallback
    pub fn unwrap_or(self, fallback: T) -> T {
        match self.state {
            State::Succeeded { value, .. } => value,
            State::Failed { .. } => fallback,
        }
    }

    /// Take the value or compute a fallback from the errors
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(&[OutcomeError]) -> T,
    {
        match self.state {
            State::Succeeded { value, .. } => value,
            State::Failed { errors, .. } => fallback(&errors),
        }
    }

    /// Convert into a std `Result`
    pub fn into_result(self) -> Result<T, Vec<OutcomeError>> {
        match self.state {
            State::Succeeded { value, .. } => Ok(value),
            State::Failed { errors, .. } => Err(errors),
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
    ///
    /// A failure passes through with its status and errors unchanged.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.state {
            State::Succeeded { status, value } => Outcome::succeeded(status, f(value)),
            State::Failed { status, errors } => Outcome::failed(status, errors),
        }
    }

    /// Chain an operation that produces its own outcome
    ///
    /// A failure short-circuits with its status and errors unchanged.
    pub fn bind<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self.state {
            State::Succeeded { value, .. } => f(value),
            State::Failed { status, errors } => Outcome::failed(status, errors),
        }
    }

    /// Rewrite every error of a failure, keeping the status
    pub fn map_errors<F>(self, f: F) -> Self
    where
        F: FnMut(OutcomeError) -> OutcomeError,
    {
        match self.state {
            State::Failed { status, errors } => {
                Self::failed(status, errors.into_iter().map(f).collect())
            }
            succeeded => Outcome { state: succeeded },
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

    /// Run a side effect on the errors and pass `self` through
    pub fn tap_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&[OutcomeError]),
    {
        if let State::Failed { errors, .. } = &self.state {
            f(errors);
        }
        self
    }

    /// Turn a success whose value fails `predicate` into a `Validation` failure
    pub fn ensure<P>(self, predicate: P, error: OutcomeError) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self.state {
            State::Succeeded { status, value } => {
                if predicate(&value) {
                    Self::succeeded(status, value)
                } else {
                    Self::validation_with(error)
                }
            }
            failed => Outcome { state: failed },
        }
    }

    /// Drop the value, keeping status and errors
    pub fn discard_value(self) -> Outcome {
        self.map(|_| ())
    }

    /// Merge many outcomes into one
    ///
    /// If every input succeeded, the result is a `Success` holding all values
    /// in order. Otherwise it fails with the status of the first failure and
    /// the errors of every failure, concatenated in order.
    pub fn combine<I>(outcomes: I) -> Outcome<Vec<T>>
    where
        I: IntoIterator<Item = Outcome<T>>,
    {
        let mut values = Vec::new();
        let mut first_status = None;
        let mut errors = Vec::new();

        for outcome in outcomes {
            match outcome.state {
                State::Succeeded { value, .. } => values.push(value),
                State::Failed { status, errors: more } => {
                    first_status.get_or_insert(status);
                    errors.extend(more);
                }
            }
        }

        match first_status {
            Some(status) => Outcome::failed(status, errors),
            None => Outcome::success(values),
        }
    }
}

impl<T: fmt::Display> Outcome<T> {
    /// Render a success together with its value, e.g. `Created(7)`
    ///
    /// Failures render the same as through `Display`.
    pub fn display_value(&self) -> impl fmt::Display + '_ {
        WithValue(self)
    }
}

/// `Success`, `Created`, ... or `Status[CODE: message; ...]`
///
/// The value is left out so value-less outcomes render too; use
/// `display_value` to include it.
impl<T> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Succeeded { status, .. } => write!(f, "{}", status),
            State::Failed { status, errors } => {
                write!(f, "{}[{}]", status, describe_errors(errors))
            }
        }
    }
}

struct WithValue<'a, T>(&'a Outcome<T>);

impl<T: fmt::Display> fmt::Display for WithValue<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.value() {
            Some(value) => write!(f, "{}({})", self.0.status(), value),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Join errors into one line, `CODE: message; CODE: message`
fn describe_errors(errors: &[OutcomeError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// ============================================================================
// Serialization
// ============================================================================

#[cfg(feature = "serde")]
mod serde_impl {
    use super::{Outcome, OutcomeError, Status};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize)]
    struct OutcomeRef<'a, T> {
        status: Status,
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<&'a T>,
        #[serde(skip_serializing_if = "no_errors")]
        errors: &'a [OutcomeError],
    }

    #[derive(Deserialize)]
    #[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
    struct OutcomeRepr<T> {
        status: Status,
        // A present key always means a value, even when it is `null` (unit).
        #[serde(default, deserialize_with = "present")]
        value: Option<T>,
        #[serde(default)]
        errors: Vec<OutcomeError>,
    }

    fn no_errors(errors: &&[OutcomeError]) -> bool {
        errors.is_empty()
    }

    fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        T::deserialize(deserializer).map(Some)
    }

    impl<T: Serialize> Serialize for Outcome<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            OutcomeRef {
                status: self.status(),
                value: self.value(),
                errors: self.errors(),
            }
            .serialize(serializer)
        }
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for Outcome<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let repr = OutcomeRepr::<T>::deserialize(deserializer)?;
            Outcome::from_parts(repr.status, repr.value, repr.errors)
                .map_err(serde::de::Error::custom)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
