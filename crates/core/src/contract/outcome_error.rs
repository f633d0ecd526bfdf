//! Structured business errors carried by a failed `Outcome`
//!
//! An `OutcomeError` is data, not a raised condition: it describes one cause
//! of a failure so the caller can match on it, render it, or forward it.
//!
//! ## Equality
//!
//! Equality and hashing are structural over `(code, message)` only.
//! Two errors with the same code and message are interchangeable even when
//! their severity or identifier differ.
//!
//! ## Text Form
//!
//! `Display` renders `CODE: message`; `FromStr` parses the same form back.
//! Inside the code, `\` and `:` are written as `\\` and `\:`, so the
//! first unescaped `": "` always ends the code and any code survives the trip.

use crate::error::ContractError;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Separator between code and message in the text form
const TEXT_SEPARATOR: &str = ": ";

/// Escape character for the code part of the text form
const ESCAPE: char = '\\';

/// Severity attached to an `OutcomeError`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// The operation cannot proceed
    Error,
    /// The operation can proceed but the caller should know
    Warning,
    /// Informational only
    Info,
}

impl Severity {
    /// Lowercase name
    pub const fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One cause of a failed `Outcome`
///
/// ## Invariants
///
/// - Immutable after construction; `with_*` methods return a new value
/// - `==` and `Hash` only look at `code` and `message`
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutcomeError {
    code: String,
    message: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    severity: Option<Severity>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    identifier: Option<String>,
}

impl OutcomeError {
    /// Create an error from a code and a message
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        OutcomeError {
            code: code.into(),
            message: message.into(),
            severity: None,
            identifier: None,
        }
    }

    /// Return a copy carrying the given severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Return a copy carrying the given identifier
    ///
    /// The identifier usually names the field or entity the error is about.
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Machine-readable error code
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable message
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Severity, if one was attached
    #[inline]
    pub fn severity(&self) -> Option<Severity> {
        self.severity
    }

    /// Identifier, if one was attached
    #[inline]
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }
}

impl PartialEq for OutcomeError {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && self.message == other.message
    }
}

impl Eq for OutcomeError {}

impl Hash for OutcomeError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
        self.message.hash(state);
    }
}

impl fmt::Display for OutcomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.code.chars() {
            match c {
                ESCAPE | ':' => write!(f, "{}{}", ESCAPE, c)?,
                other => write!(f, "{}", other)?,
            }
        }
        write!(f, "{}{}", TEXT_SEPARATOR, self.message)
    }
}

impl FromStr for OutcomeError {
    type Err = ContractError;

    /// Parse the `CODE: message` text form
    ///
    /// The first unescaped separator splits code from message, so messages
    /// may contain further `": "` sequences.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut code = String::new();
        let mut chars = s.char_indices();
        while let Some((i, c)) = chars.next() {
            match c {
                ESCAPE => match chars.next() {
                    Some((_, escaped)) => code.push(escaped),
                    None => {
                        return Err(ContractError::invalid_argument(
                            "text",
                            "escape at end of text",
                        ))
                    }
                },
                ':' if s[i..].starts_with(TEXT_SEPARATOR) => {
                    let message = &s[i + TEXT_SEPARATOR.len()..];
                    return Ok(OutcomeError::new(code, message));
                }
                other => code.push(other),
            }
        }
        Err(ContractError::invalid_argument(
            "text",
            "expected the form 'CODE: message'",
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================
