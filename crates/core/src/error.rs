//! Contract violation errors
//!
//! This module defines the conditions raised when a caller breaks the
//! contract of a verdict type. They are programmer errors, not business
//! failures: a failed `Outcome` carries its `OutcomeError`s as data, while a
//! `ContractError` means the code that built or consumed the value is wrong.
//!
//! Two kinds exist:
//!
//! - **Construction-time**: a factory received input that would break an
//!   invariant (a failure without errors, a success without a value).
//!   Factories return these as `Err(ContractError::InvalidArgument { .. })`.
//! - **Consumption-time**: a value was unwrapped in the wrong state. The
//!   `try_*` accessors return these; the fail-fast accessors (`unwrap`,
//!   `as_t1`, ...) panic with the error's display text.
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::contract::Status;
use thiserror::Error;

/// Log target for every contract violation the crate detects
pub(crate) const CONTRACT_TARGET: &str = "verdict::contract";

/// Result type alias for operations that can break a contract
pub type ContractResult<T> = std::result::Result<T, ContractError>;

/// Contract violations raised by verdict types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    /// A factory or guard received an argument it cannot accept
    #[error("Invalid argument '{parameter}': {reason}")]
    InvalidArgument {
        /// Name of the offending parameter
        parameter: String,
        /// Human-readable reason
        reason: String,
    },

    /// A `Maybe` was unwrapped while empty
    #[error("Option was none")]
    OptionIsNone,

    /// An `Outcome` or `Attempt` was unwrapped in a failed state
    #[error("Cannot unwrap a value with status {status}: {detail}")]
    NotSuccessful {
        /// Status of the unwrapped value
        status: Status,
        /// First error message, or the attempt's error message
        detail: String,
    },

    /// A `OneOf` slot other than the active one was accessed
    #[error("Wrong variant of {union}: expected T{expected}, found T{actual}")]
    WrongVariant {
        /// Name of the union type
        union: &'static str,
        /// Slot that was requested (1-based)
        expected: usize,
        /// Slot that is active (1-based)
        actual: usize,
    },
}

impl ContractError {
    /// Create an `InvalidArgument` error
    ///
    /// The rejection is logged at debug level under `verdict::contract`.
    pub fn invalid_argument(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        let parameter = parameter.into();
        let reason = reason.into();
        tracing::debug!(
            target: CONTRACT_TARGET,
            parameter = %parameter,
            reason = %reason,
            "argument rejected"
        );
        ContractError::InvalidArgument { parameter, reason }
    }

    /// Create a `NotSuccessful` error
    pub fn not_successful(status: Status, detail: impl Into<String>) -> Self {
        ContractError::NotSuccessful {
            status,
            detail: detail.into(),
        }
    }

    /// Check if this is a construction-time violation
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ContractError::InvalidArgument { .. })
    }

    /// Log this violation and panic with its display text
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        tracing::error!(target: CONTRACT_TARGET, error = %self, "contract violated");
        panic!("{}", self)
    }
}
