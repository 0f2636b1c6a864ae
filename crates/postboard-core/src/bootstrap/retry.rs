//! Fixed-interval retry of the readiness probe.

use std::time::Duration;

use crate::error::{BootstrapError, Unreachable};
use crate::ports::{ReadinessProbe, Sleeper};

/// Bounded, fixed-delay retry budget for reaching the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            delay: Duration::from_millis(3000),
        }
    }
}

/// What to do after a probe at a given attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    Succeed,
    Retry(Duration),
    Fail,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }

    /// Attempts actually granted. The store is always probed at least once.
    pub fn budget(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// The delay in whole milliseconds, saturating at `u64::MAX`.
    pub fn delay_ms(&self) -> u64 {
        u64::try_from(self.delay.as_millis()).unwrap_or(u64::MAX)
    }

    /// Pure decision for 1-based `attempt`.
    pub fn decide(&self, attempt: u32, probe_ok: bool) -> RetryDecision {
        if probe_ok {
            RetryDecision::Succeed
        } else if attempt < self.budget() {
            RetryDecision::Retry(self.delay)
        } else {
            RetryDecision::Fail
        }
    }
}

/// Drives a [`ReadinessProbe`] under a [`RetryPolicy`].
pub struct RetryController<S> {
    policy: RetryPolicy,
    sleeper: S,
}

impl<S: Sleeper> RetryController<S> {
    pub fn new(policy: RetryPolicy, sleeper: S) -> Self {
        Self { policy, sleeper }
    }

    /// Probe until the store answers. Returns the number of attempts used,
    /// or `BootstrapError::Failed` once the budget is spent.
    pub async fn wait_until_ready(&self, probe: &dyn ReadinessProbe) -> Result<u32, BootstrapError> {
        let max_attempts = self.policy.budget();
        let mut attempt = 1;

        loop {
            let outcome = probe.probe().await;

            match self.policy.decide(attempt, outcome.is_ok()) {
                RetryDecision::Succeed => {
                    tracing::debug!(attempt, "Store answered readiness probe");
                    return Ok(attempt);
                }
                RetryDecision::Retry(delay) => {
                    let detail = outcome.err().map(|e| e.0).unwrap_or_default();
                    tracing::warn!(
                        attempt,
                        max_attempts,
                        remaining = max_attempts - attempt,
                        delay_ms = self.policy.delay_ms(),
                        error = %detail,
                        "Store not ready, retrying"
                    );
                    self.sleeper.sleep(delay).await;
                    attempt += 1;
                }
                RetryDecision::Fail => {
                    let last = outcome
                        .err()
                        .unwrap_or_else(|| Unreachable("probe failed".to_string()));
                    tracing::error!(attempts = attempt, error = %last, "Store unreachable, giving up");
                    return Err(BootstrapError::Failed {
                        attempts: attempt,
                        last,
                    });
                }
            }
        }
    }
}
