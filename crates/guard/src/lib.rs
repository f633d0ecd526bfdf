//! Precondition checks for Verdict
//!
//! Each check takes the value to inspect plus the caller's parameter name. A
//! passing check hands the value back so it can be bound in one line; a
//! failing check returns `ContractError::InvalidArgument` naming the
//! parameter and a human-readable reason.
//!
//! ```
//! use verdict_guard as guard;
//!
//! fn rename(name: &str, max: usize) -> verdict_core::ContractResult<String> {
//!     let name = guard::against_blank(name, "name")?;
//!     let name = guard::against_too_long(name, max, "name")?;
//!     Ok(name.trim().to_string())
//! }
//!
//! assert_eq!(rename(" ada ", 10).unwrap(), "ada");
//! assert!(rename("   ", 10).unwrap_err().is_invalid_argument());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use regex::Regex;
use std::fmt::Display;
use verdict_core::{ContractError, ContractResult};

const GUARD_TARGET: &str = "verdict::guard";

// ============================================================================
// Presence
// ============================================================================

/// Reject an absent value
pub fn against_none<T>(value: Option<T>, parameter: &str) -> ContractResult<T> {
    value.ok_or_else(|| ContractError::invalid_argument(parameter, "value is required"))
}

/// Reject an empty string
pub fn against_empty<'a>(value: &'a str, parameter: &str) -> ContractResult<&'a str> {
    if value.is_empty() {
        return Err(ContractError::invalid_argument(parameter, "value cannot be empty"));
    }
    Ok(value)
}

/// Reject an empty or whitespace-only string
pub fn against_blank<'a>(value: &'a str, parameter: &str) -> ContractResult<&'a str> {
    if value.trim().is_empty() {
        return Err(ContractError::invalid_argument(
            parameter,
            "value cannot be empty or whitespace",
        ));
    }
    Ok(value)
}

/// Reject an empty slice
pub fn against_empty_collection<'a, T>(items: &'a [T], parameter: &str) -> ContractResult<&'a [T]> {
    if items.is_empty() {
        return Err(ContractError::invalid_argument(
            parameter,
            "collection cannot be empty",
        ));
    }
    Ok(items)
}

// ============================================================================
// Numeric
// ============================================================================

/// Reject a value outside the inclusive range `[min, max]`
///
/// An inverted or unordered range is itself rejected under the name `range`.
/// A value that does not compare with the bounds (NaN) is out of range.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn against_out_of_range<T>(value: T, min: T, max: T, parameter: &str) -> ContractResult<T>
where
    T: PartialOrd + Display,
{
    if !(min <= max) {
        return Err(ContractError::invalid_argument(
            "range",
            format!("minimum {} is greater than maximum {}", min, max),
        ));
    }
    if !(min <= value && value <= max) {
        return Err(ContractError::invalid_argument(
            parameter,
            format!("{} is outside the range [{}, {}]", value, min, max),
        ));
    }
    Ok(value)
}

/// Reject a value below zero, or one that does not compare with zero (NaN)
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn against_negative<T>(value: T, parameter: &str) -> ContractResult<T>
where
    T: PartialOrd + Default + Display,
{
    if !(value >= T::default()) {
        return Err(ContractError::invalid_argument(
            parameter,
            format!("{} is not zero or greater", value),
        ));
    }
    Ok(value)
}

/// Reject zero
pub fn against_zero<T>(value: T, parameter: &str) -> ContractResult<T>
where
    T: PartialEq + Default,
{
    if value == T::default() {
        return Err(ContractError::invalid_argument(parameter, "value cannot be zero"));
    }
    Ok(value)
}

/// Reject zero, anything below it, and NaN
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn against_negative_or_zero<T>(value: T, parameter: &str) -> ContractResult<T>
where
    T: PartialOrd + Default + Display,
{
    if !(value > T::default()) {
        return Err(ContractError::invalid_argument(
            parameter,
            format!("{} is not positive", value),
        ));
    }
    Ok(value)
}

// ============================================================================
// Text shape
// ============================================================================

/// Reject a string longer than `max_chars` characters
pub fn against_too_long<'a>(value: &'a str, max_chars: usize, parameter: &str) -> ContractResult<&'a str> {
    let length = value.chars().count();
    if length > max_chars {
        return Err(ContractError::invalid_argument(
            parameter,
            format!("{} chars exceeds the maximum of {}", length, max_chars),
        ));
    }
    Ok(value)
}

/// Reject a string that does not match `pattern` in full
///
/// A pattern that fails to compile is reported under the name `pattern`.
pub fn against_pattern_mismatch<'a>(
    value: &'a str,
    pattern: &str,
    parameter: &str,
) -> ContractResult<&'a str> {
    let anchored = format!("^(?:{})$", pattern);
    let regex = Regex::new(&anchored).map_err(|e| {
        tracing::warn!(target: GUARD_TARGET, pattern, error = %e, "pattern does not compile");
        ContractError::invalid_argument("pattern", e.to_string())
    })?;

    if !regex.is_match(value) {
        return Err(ContractError::invalid_argument(
            parameter,
            format!("'{}' does not match {}", value, pattern),
        ));
    }
    Ok(value)
}

// ============================================================================
// Enumerations
// ============================================================================

/// Reject a raw value that does not name a variant of `E`
///
/// Returns the converted variant on success.
pub fn against_undefined<E, V>(value: V, parameter: &str) -> ContractResult<E>
where
    E: TryFrom<V>,
    V: Display + Copy,
{
    E::try_from(value).map_err(|_| {
        ContractError::invalid_argument(
            parameter,
            format!("{} is not a defined {}", value, short_type_name::<E>()),
        )
    })
}

/// `a::b::Name<c::D>` becomes `Name`
fn short_type_name<E>() -> &'static str {
    let full = std::any::type_name::<E>();
    let path = full.split('<').next().unwrap_or(full);
    path.rsplit("::").next().unwrap_or(path)
}

// ============================================================================
// Tests
// ============================================================================
