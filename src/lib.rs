//! Resilient request-execution core for API clients.
//!
//! Two layers, composed bottom-up:
//!
//! - [`retry`]: a bounded exponential-backoff [`retry::RetryExecutor`] that
//!   runs an arbitrary fallible action until it succeeds, exhausts its
//!   retry budget, or hits a failure that is not worth repeating.
//! - [`http`]: an async [`http::Client`] that performs one logical
//!   GET/POST/DELETE, classifies every possible failure (transport, decode,
//!   HTTP status) as retryable or terminal, and hands the per-attempt
//!   outcome to the executor.
//!
//! The executor never re-classifies: classification happens once per attempt
//! at the point of failure, and on exhaustion the caller receives the last
//! underlying error, never an internal retry wrapper.

pub mod http;
pub mod retry;

pub use http::{Client, ClientConfig, ClientConfigError, HttpError};
pub use retry::{BackoffPolicy, ConfigError, Outcome, RetryError, RetryExecutor};
