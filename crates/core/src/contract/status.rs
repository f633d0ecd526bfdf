//! Status enumeration
//!
//! Every `Outcome` and `Attempt` carries exactly one `Status` describing its
//! terminal disposition.
//!
//! ## The Twelve Statuses
//!
//! | Tag | Status | Successful |
//! |-----|--------|------------|
//! | 0 | Success | yes |
//! | 1 | Created | yes |
//! | 2 | NoContent | yes |
//! | 3 | NotFound | no |
//! | 4 | Validation | no |
//! | 5 | Problem | no |
//! | 6 | Conflict | no |
//! | 7 | Forbidden | no |
//! | 8 | Unauthorized | no |
//! | 9 | Failure | no |
//! | 10 | CriticalError | no |
//! | 11 | Unavailable | no |
//!
//! Tags are part of the serialized contract and never change.

use crate::error::ContractError;
use std::fmt;

/// Terminal disposition of an operation
///
/// ## Invariant
///
/// Exactly `Success`, `Created` and `NoContent` are successful.
/// Every other status is a failure and must be accompanied by evidence
/// (errors for `Outcome`, an error object for `Attempt`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Status {
    /// The operation completed
    #[default]
    Success = 0,
    /// The operation completed and created something
    Created = 1,
    /// The operation completed with nothing to return
    NoContent = 2,
    /// The target does not exist
    NotFound = 3,
    /// The input was rejected
    Validation = 4,
    /// The operation could not be processed as requested
    Problem = 5,
    /// The operation conflicts with current state
    Conflict = 6,
    /// The caller is known but not allowed
    Forbidden = 7,
    /// The caller is not authenticated
    Unauthorized = 8,
    /// Generic failure
    Failure = 9,
    /// Unexpected failure that should not happen in normal operation
    CriticalError = 10,
    /// A dependency is not available
    Unavailable = 11,
}

impl Status {
    /// All statuses, in tag order
    pub const ALL: [Status; 12] = [
        Status::Success,
        Status::Created,
        Status::NoContent,
        Status::NotFound,
        Status::Validation,
        Status::Problem,
        Status::Conflict,
        Status::Forbidden,
        Status::Unauthorized,
        Status::Failure,
        Status::CriticalError,
        Status::Unavailable,
    ];

    /// The successful statuses
    pub const SUCCESSFUL: [Status; 3] = [Status::Success, Status::Created, Status::NoContent];

    /// The failed statuses
    pub const FAILED: [Status; 9] = [
        Status::NotFound,
        Status::Validation,
        Status::Problem,
        Status::Conflict,
        Status::Forbidden,
        Status::Unauthorized,
        Status::Failure,
        Status::CriticalError,
        Status::Unavailable,
    ];

    /// Check if this status is in the successful set
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Status::Success | Status::Created | Status::NoContent)
    }

    /// Check if this status is a failure
    #[inline]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Stable integer tag
    #[inline]
    pub const fn tag(&self) -> u8 {
        *self as u8
    }

    /// Parse from a stable integer tag
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Status::Success),
            1 => Some(Status::Created),
            2 => Some(Status::NoContent),
            3 => Some(Status::NotFound),
            4 => Some(Status::Validation),
            5 => Some(Status::Problem),
            6 => Some(Status::Conflict),
            7 => Some(Status::Forbidden),
            8 => Some(Status::Unauthorized),
            9 => Some(Status::Failure),
            10 => Some(Status::CriticalError),
            11 => Some(Status::Unavailable),
            _ => None,
        }
    }

    /// Variant name
    pub const fn name(&self) -> &'static str {
        match self {
            Status::Success => "Success",
            Status::Created => "Created",
            Status::NoContent => "NoContent",
            Status::NotFound => "NotFound",
            Status::Validation => "Validation",
            Status::Problem => "Problem",
            Status::Conflict => "Conflict",
            Status::Forbidden => "Forbidden",
            Status::Unauthorized => "Unauthorized",
            Status::Failure => "Failure",
            Status::CriticalError => "CriticalError",
            Status::Unavailable => "Unavailable",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Status {
    type Error = ContractError;

    /// Not logged here; a caller that treats the tag as an argument logs
    /// the rejection under its own parameter name.
    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Status::from_tag(tag).ok_or_else(|| ContractError::InvalidArgument {
            parameter: "tag".to_string(),
            reason: format!("{} is not a defined status tag", tag),
        })
    }
}

impl From<Status> for u8 {
    fn from(status: Status) -> Self {
        status.tag()
    }
}

// ============================================================================
// Tests
// ============================================================================
