//! Exponential backoff policy: attempt budget and delay curve.

use std::time::Duration;

use super::error::ConfigError;

/// Parameters governing retry timing.
///
/// Immutable once handed to a [`super::RetryExecutor`]; validation happens
/// when the executor is constructed, not here, so a policy value can be
/// assembled field by field (e.g. from deserialized config).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackoffPolicy {
    /// Maximum number of retries after the initial attempt. A permanently
    /// failing retryable action runs `max_attempts + 1` times in total.
    pub max_attempts: u32,
    /// Base delay fed into the backoff curve.
    pub base_delay: Duration,
    /// Growth factor of the curve. Values below 1.0 are allowed and produce
    /// delays shorter than `base_delay`.
    pub factor: f64,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(250),
            factor: 2.0,
        }
    }
}

impl BackoffPolicy {
    /// Check that every field is usable. Each field reports its own
    /// [`ConfigError`] variant; the first violation wins.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::MaxAttempts);
        }
        if self.base_delay.is_zero() {
            return Err(ConfigError::BaseDelay);
        }
        // `!(x > 0.0)` also rejects NaN.
        if !(self.factor > 0.0) {
            return Err(ConfigError::Factor);
        }
        Ok(())
    }

    /// Delay before retry number `attempt` (1-based):
    /// `|base_delay * (factor^attempt - 1)|`.
    ///
    /// With base 1s and factor 2.0 the first three retries wait 1s, 3s, 7s;
    /// with factor 1.5 they wait 0.5s, 1.25s, 2.375s. The absolute value
    /// keeps the result a valid duration when `factor < 1`.
    pub fn delay(&self, attempt: u32) -> Duration {
        let nanos =
            self.base_delay.as_nanos() as f64 * (self.factor.powi(attempt as i32) - 1.0);
        Duration::from_nanos(nanos.abs() as u64)
    }
}
