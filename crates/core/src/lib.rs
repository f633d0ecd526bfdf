//! Core result types for Verdict
//!
//! This crate defines the value types every operation returns:
//! - Status: closed enumeration of successful and failed statuses
//! - Outcome<T>: status plus a value or a non-empty list of structured errors
//! - Attempt<T>: status plus a value or one shared error object
//! - Maybe<T>: a value that may be absent
//! - OneOf2..OneOf7: closed unions of two to seven types
//! - Fluent: `also`/`pipe` chaining on any value
//! - ContractError: violations of the wrappers' own contracts
//!
//! Every wrapper is immutable once built. Combinators consume `self` and
//! return a new value.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod attempt;
pub mod contract;
pub mod error;
pub mod fluent;
pub mod maybe;
pub mod one_of;
pub mod outcome;

pub use attempt::Attempt;
pub use contract::{AttemptError, OutcomeError, Severity, Status};
pub use error::{ContractError, ContractResult};
pub use fluent::Fluent;
pub use maybe::Maybe;
pub use one_of::{OneOf2, OneOf3, OneOf4, OneOf5, OneOf6, OneOf7};
pub use outcome::Outcome;
