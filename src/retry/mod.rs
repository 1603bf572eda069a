//! Retry executor and backoff policy.
//!
//! This module encapsulates the retry budget and exponential backoff
//! decisions so that higher layers (the HTTP client, or any other caller)
//! can share a consistent policy. Callers classify each attempt into an
//! [`Outcome`]; the executor only inspects the retryable tag and never
//! looks inside the error itself.

mod error;
mod executor;
mod policy;

pub use error::{ConfigError, RetryError};
pub use executor::{Outcome, RetryExecutor};
pub use policy::BackoffPolicy;
