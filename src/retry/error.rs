//! Errors produced by policy validation and the retry loop.

use std::fmt;

use thiserror::Error;

/// Rejected [`super::BackoffPolicy`] field, reported at executor
/// construction. Each field has its own variant so callers can tell which
/// knob is wrong.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max attempts must be greater than zero")]
    MaxAttempts,
    #[error("base delay must be greater than zero")]
    BaseDelay,
    #[error("backoff factor must be greater than zero")]
    Factor,
}

/// Final result of a failed [`super::RetryExecutor::execute`] call.
///
/// Retry exhaustion is deliberately not a distinct variant: once the budget
/// is spent the caller gets the last underlying error via [`Action`], with
/// the retryable tagging already stripped.
///
/// [`Action`]: RetryError::Action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryError<E> {
    /// The action failed for good: a terminal failure, or a retryable one
    /// that outlived the budget. Carries the underlying error verbatim.
    Action(E),
    /// The cancellation token fired while waiting for the next attempt.
    Cancelled,
}

impl<E> RetryError<E> {
    /// The underlying action error, if the failure was not a cancellation.
    pub fn into_action(self) -> Option<E> {
        match self {
            RetryError::Action(e) => Some(e),
            RetryError::Cancelled => None,
        }
    }
}

impl<E: fmt::Display> fmt::Display for RetryError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetryError::Action(e) => write!(f, "{}", e),
            RetryError::Cancelled => write!(f, "cancelled while waiting to retry"),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for RetryError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RetryError::Action(e) => Some(e),
            RetryError::Cancelled => None,
        }
    }
}
