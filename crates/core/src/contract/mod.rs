//! Leaf value types shared by every wrapper
//!
//! These types carry no behavior beyond construction and comparison.
//! Everything else in the crate is built on top of them.
//!
//! ## Module Structure
//!
//! - `status`: the closed status enumeration with stable tags
//! - `outcome_error`: structured `(code, message)` errors of a failed `Outcome`
//! - `attempt_error`: the shared error object of a failed `Attempt`
//!
//! ## Usage
//!
//! ```
//! use verdict_core::contract::{OutcomeError, Severity, Status};
//!
//! let err = OutcomeError::new("NOT_FOUND", "no such user").with_severity(Severity::Error);
//! assert!(Status::NotFound.is_failure());
//! assert_eq!(err.to_string(), "NOT_FOUND: no such user");
//! ```

pub mod attempt_error;
pub mod outcome_error;
pub mod status;

// Re-exports
pub use attempt_error::AttemptError;
pub use outcome_error::{OutcomeError, Severity};
pub use status::Status;
