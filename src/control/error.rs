//! Error types produced by the control structures.
//!
//! The only error the crate itself creates is [`PanicError`], the `Left` value
//! that [`Either::catch_unwind`](super::Either::catch_unwind) yields when the
//! wrapped computation panics.

use std::any::Any;
use std::fmt;

/// Message used when a panic payload is neither `&str` nor `String`.
const OPAQUE_PAYLOAD_MESSAGE: &str = "<non-string panic payload>";

/// A panic captured by [`Either::catch_unwind`](super::Either::catch_unwind).
///
/// Holds the panic message when the payload was a `&str` or `String`, which
/// covers `panic!` with a literal or a format string.
///
/// # Examples
///
/// ```rust
/// use adtkit::control::PanicError;
///
/// let error = PanicError::new("division by zero");
/// assert_eq!(error.message(), "division by zero");
/// assert_eq!(error.to_string(), "computation panicked: division by zero");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PanicError {
    message: String,
}

impl PanicError {
    /// Creates a panic error with the given message.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Builds a panic error from the payload returned by
    /// `std::panic::catch_unwind`.
    pub(crate) fn from_payload(payload: &(dyn Any + Send)) -> Self {
        if let Some(message) = payload.downcast_ref::<&str>() {
            Self::new(*message)
        } else if let Some(message) = payload.downcast_ref::<String>() {
            Self::new(message.clone())
        } else {
            Self::new(OPAQUE_PAYLOAD_MESSAGE)
        }
    }

    /// Returns the panic message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for PanicError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "computation panicked: {}", self.message)
    }
}

impl std::error::Error for PanicError {}
