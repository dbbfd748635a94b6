/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 4/11/25
******************************************************************************/
use crate::constants::{
    DEFAULT_POLL_INTERVAL_MS, DEFAULT_POLL_MAX_ATTEMPTS, DEFAULT_POLL_MAX_INTERVAL_MS,
};
use crate::utils::config::get_env_or_default;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for polling the state of the current fax job
///
/// Polls are always bounded: after `max_attempts` fetches the poll gives up.
/// The delay between fetches starts at `interval_ms` and is multiplied by
/// `backoff_factor` after every attempt, up to `max_interval_ms`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollConfig {
    /// Maximum number of fetches (at least one is always made)
    pub max_attempts: u32,
    /// Delay before the second fetch, in milliseconds
    pub interval_ms: u64,
    /// Growth factor of the delay, values below 1.0 behave as 1.0
    pub backoff_factor: f64,
    /// Upper bound of the delay, in milliseconds
    pub max_interval_ms: u64,
}

impl PollConfig {
    /// Creates a poll configuration from the environment, falling back to the defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed delay between a bounded number of fetches
    #[must_use]
    pub fn fixed(max_attempts: u32, interval_ms: u64) -> Self {
        Self {
            max_attempts,
            interval_ms,
            backoff_factor: 1.0,
            max_interval_ms: interval_ms,
        }
    }

    /// Exponential backoff, doubling the delay up to `max_interval_ms`
    #[must_use]
    pub fn exponential(max_attempts: u32, interval_ms: u64, max_interval_ms: u64) -> Self {
        Self {
            max_attempts,
            interval_ms,
            backoff_factor: 2.0,
            max_interval_ms,
        }
    }

    /// Gets the maximum number of fetches, never less than 1
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Delay before the second fetch
    #[must_use]
    pub fn initial_interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Delay following `current`
    #[must_use]
    pub fn next_interval(&self, current: Duration) -> Duration {
        let factor = if self.backoff_factor.is_finite() {
            self.backoff_factor.max(1.0)
        } else {
            1.0
        };
        let cap = Duration::from_millis(self.max_interval_ms.max(self.interval_ms));
        Duration::try_from_secs_f64(current.as_secs_f64() * factor)
            .map_or(cap, |next| next.min(cap))
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            max_attempts: get_env_or_default("PAMFAX_POLL_MAX_ATTEMPTS", DEFAULT_POLL_MAX_ATTEMPTS),
            interval_ms: get_env_or_default("PAMFAX_POLL_INTERVAL_MS", DEFAULT_POLL_INTERVAL_MS),
            backoff_factor: 1.0,
            max_interval_ms: DEFAULT_POLL_MAX_INTERVAL_MS,
        }
    }
}
