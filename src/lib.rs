//! Verdict - status-carrying result types for Rust
//!
//! Verdict provides value types for reporting how an operation ended:
//! `Outcome` (status plus structured errors), `Attempt` (status plus one error
//! object), `Maybe` (optional value) and `OneOf2`..`OneOf7` (closed unions).
//! Precondition checks live in [`guard`].
//!
//! # Quick Start
//!
//! ```
//! use verdict::{Outcome, OutcomeError, Status};
//!
//! fn parse_number(input: &str) -> Outcome<i32> {
//!     match input.parse::<i32>() {
//!         Ok(n) => Outcome::success(n),
//!         Err(_) => Outcome::failure_with(OutcomeError::new("PARSE_ERROR", "not a number")),
//!     }
//! }
//!
//! let doubled = parse_number("21").map(|n| n * 2);
//! assert_eq!(doubled.unwrap(), 42);
//!
//! let failed = parse_number("abc");
//! assert_eq!(failed.status(), Status::Failure);
//! assert_eq!(failed.errors()[0].code(), "PARSE_ERROR");
//! ```
//!
//! # Architecture
//!
//! All types live in `verdict-core` and are re-exported here. Every wrapper is
//! immutable; combinators consume `self` and return a new value.

pub use verdict_core::*;

/// Precondition checks returning `ContractError::InvalidArgument`
pub use verdict_guard as guard;
