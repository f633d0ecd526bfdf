//! Error object carried by a failed `Attempt`
//!
//! An `AttemptError` wraps one error: either a bare message or any
//! `std::error::Error` the failing code produced. It is a cheap, shared
//! handle: cloning keeps the same underlying error, so a failure that flows
//! through `map`/`bind` can be checked for identity with [`AttemptError::ptr_eq`].

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

type BoxedCause = Box<dyn StdError + Send + Sync + 'static>;

struct Inner {
    message: String,
    cause: Option<BoxedCause>,
}

/// Shared handle to the error of a failed `Attempt`
///
/// Equality compares messages. Identity is available through `ptr_eq`.
#[derive(Clone)]
pub struct AttemptError {
    inner: Arc<Inner>,
}

impl AttemptError {
    /// Create an error from a message
    pub fn new(message: impl Into<String>) -> Self {
        AttemptError {
            inner: Arc::new(Inner {
                message: message.into(),
                cause: None,
            }),
        }
    }

    /// Wrap an existing error
    ///
    /// The message is the wrapped error's display text.
    pub fn from_error<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        AttemptError {
            inner: Arc::new(Inner {
                message: error.to_string(),
                cause: Some(Box::new(error)),
            }),
        }
    }

    /// Error message
    #[inline]
    pub fn message(&self) -> &str {
        &self.inner.message
    }

    /// The wrapped error, if this was built with `from_error`
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.inner.cause.as_deref()
    }

    /// Downcast the wrapped error to a concrete type
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.cause()?.downcast_ref::<E>()
    }

    /// Check if both handles point at the same error
    #[inline]
    pub fn ptr_eq(&self, other: &AttemptError) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for AttemptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttemptError")
            .field("message", &self.inner.message)
            .field("has_cause", &self.inner.cause.is_some())
            .finish()
    }
}

impl fmt::Display for AttemptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.message)
    }
}

impl StdError for AttemptError {
    /// The wrapped error's own source
    ///
    /// The wrapped error itself is not reported as the source because its
    /// text is already this error's message.
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.cause.as_ref()?.source()
    }
}

impl PartialEq for AttemptError {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.message() == other.message()
    }
}

impl Eq for AttemptError {}

impl From<&str> for AttemptError {
    fn from(message: &str) -> Self {
        AttemptError::new(message)
    }
}

impl From<String> for AttemptError {
    fn from(message: String) -> Self {
        AttemptError::new(message)
    }
}
