//! Outcome of one initialization stage
//!
//! Stages never hand raw errors to the stage above them. Whatever goes wrong
//! inside a stage is turned into a `Resolved::Failure` at that stage's
//! boundary, and dependent stages branch on `is_success` / `is_failure`.

use std::fmt;

/// Human-readable failure message
pub type ErrorMessage = String;

/// Message used when a failure carries no text of its own
pub const UNKNOWN_ERROR: &str = "An unknown error occurred";

/// Either a resolved value or a non-empty, ordered list of failure messages
///
/// # Example
///
/// ```
/// use clientboot_core::types::{Resolved, is_failure, is_success};
///
/// let ok: Resolved<u32> = Resolved::success(7);
/// assert!(is_success(&ok));
///
/// let failed: Resolved<u32> = Resolved::failure("SecretsManager initialization timed out");
/// assert!(is_failure(&failed));
/// assert_eq!(failed.failures().unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Resolved<T> {
    /// The stage produced its value
    Success(T),
    /// The stage (or one it depends on) failed
    Failure(Vec<ErrorMessage>),
}

impl<T> Resolved<T> {
    /// Wrap a resolved value
    pub fn success(value: T) -> Self {
        Resolved::Success(value)
    }

    /// A failure carrying exactly one message
    pub fn failure(message: impl Into<ErrorMessage>) -> Self {
        let message = message.into();
        if message.is_empty() {
            Resolved::Failure(vec![UNKNOWN_ERROR.to_string()])
        } else {
            Resolved::Failure(vec![message])
        }
    }

    /// A failure carrying an upstream message list verbatim
    ///
    /// An empty list still yields a failure with the fallback message, so a
    /// `Failure` is never observed without at least one message.
    pub fn from_failures(messages: Vec<ErrorMessage>) -> Self {
        if messages.is_empty() {
            Resolved::Failure(vec![UNKNOWN_ERROR.to_string()])
        } else {
            Resolved::Failure(messages)
        }
    }

    /// A single-message failure built from an error's display text
    pub fn from_error<E: fmt::Display + ?Sized>(error: &E) -> Self {
        Resolved::failure(error_message(error))
    }

    /// True iff this holds a value
    pub fn is_success(&self) -> bool {
        matches!(self, Resolved::Success(_))
    }

    /// True iff this holds failure messages
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The resolved value, if any
    pub fn value(&self) -> Option<&T> {
        match self {
            Resolved::Success(value) => Some(value),
            Resolved::Failure(_) => None,
        }
    }

    /// The failure messages, if any
    pub fn failures(&self) -> Option<&[ErrorMessage]> {
        match self {
            Resolved::Success(_) => None,
            Resolved::Failure(messages) => Some(messages),
        }
    }

    /// Convert into a standard `Result` for callers that want `?`
    pub fn into_result(self) -> Result<T, Vec<ErrorMessage>> {
        match self {
            Resolved::Success(value) => Ok(value),
            Resolved::Failure(messages) => Err(messages),
        }
    }
}

impl<T, E: fmt::Display> From<Result<T, E>> for Resolved<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Resolved::Success(value),
            Err(error) => Resolved::from_error(&error),
        }
    }
}

/// True iff `resolved` holds a value
pub fn is_success<T>(resolved: &Resolved<T>) -> bool {
    resolved.is_success()
}

/// True iff `resolved` holds failure messages
pub fn is_failure<T>(resolved: &Resolved<T>) -> bool {
    resolved.is_failure()
}

/// Display text of an error, or [`UNKNOWN_ERROR`] when it has none
pub fn error_message<E: fmt::Display + ?Sized>(error: &E) -> ErrorMessage {
    let message = error.to_string();
    if message.is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        message
    }
}
