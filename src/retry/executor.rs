//! Retry loop: run an action until success, exhaustion, or a terminal failure.

use std::future::Future;

use tokio_util::sync::CancellationToken;

use super::error::{ConfigError, RetryError};
use super::policy::BackoffPolicy;

/// Classification of a single attempt, produced by the caller's action.
///
/// Retryability is an explicit tag carried by the variant, decided once at
/// the point of failure. The executor never inspects the error value itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T, E> {
    /// The attempt succeeded; stop immediately.
    Success(T),
    /// The attempt failed and is not worth repeating (e.g. a 4xx response
    /// or a malformed body). Returned to the caller verbatim, no delay.
    Fatal(E),
    /// The attempt failed but may succeed on a later try (e.g. a connection
    /// failure or a 5xx response).
    Retry(E),
}

/// Drives an action through its [`BackoffPolicy`].
///
/// Holds only the immutable policy; every [`execute`] call keeps its own
/// attempt counter, so one executor can serve concurrent independent calls.
///
/// [`execute`]: RetryExecutor::execute
#[derive(Debug, Clone)]
pub struct RetryExecutor {
    policy: BackoffPolicy,
}

impl RetryExecutor {
    /// Build an executor, rejecting an unusable policy up front.
    pub fn new(policy: BackoffPolicy) -> Result<Self, ConfigError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &BackoffPolicy {
        &self.policy
    }

    /// Run `action` until it reports [`Outcome::Success`], a
    /// [`Outcome::Fatal`] failure, or the retry budget is spent.
    ///
    /// Between attempts the task sleeps for the policy's backoff delay; the
    /// sleep races `cancel`, and if the token fires first the whole sequence
    /// aborts with [`RetryError::Cancelled`] instead of waiting out the
    /// timer. A permanently failing retryable action runs exactly
    /// `max_attempts + 1` times and yields its last error unwrapped.
    pub async fn execute<T, E, F, Fut>(
        &self,
        cancel: &CancellationToken,
        mut action: F,
    ) -> Result<T, RetryError<E>>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Outcome<T, E>>,
    {
        let mut attempt = 0u32;
        loop {
            match action().await {
                Outcome::Success(value) => return Ok(value),
                Outcome::Fatal(e) => return Err(RetryError::Action(e)),
                Outcome::Retry(e) => {
                    if attempt >= self.policy.max_attempts {
                        return Err(RetryError::Action(e));
                    }
                    attempt += 1;
                    let delay = self.policy.delay(attempt);
                    tokio::select! {
                        _ = cancel.cancelled() => return Err(RetryError::Cancelled),
                        _ = tokio::time::sleep(delay) => {}
                    }
                }
            }
        }
    }
}
