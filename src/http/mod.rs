//! Resilient HTTP client.
//!
//! Performs one logical GET/POST/DELETE against a target URL, classifies
//! every possible failure (transport, decode, HTTP status) as retryable or
//! terminal, and hands the per-attempt outcome to the retry executor. The
//! caller only ever sees [`HttpError`] values; the retry bookkeeping stays
//! internal.

mod classify;
mod client;
mod error;

pub use client::{Client, ClientConfig};
pub use error::{ClientConfigError, DecodeError, HttpError};
