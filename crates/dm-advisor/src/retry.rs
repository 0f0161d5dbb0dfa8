//! Bounded retry with exponential backoff.

use crate::error::RetryError;
use std::fmt;
use std::time::Duration;
use tracing::warn;

/// How often and how patiently to retry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub max_attempts: u32,
    /// Wait after the first failed attempt
    pub initial_backoff: Duration,
    /// Growth of the wait per further attempt
    pub multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_secs(1),
            multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// Wait before retrying after failed attempt `attempt` (1-based).
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exponent = i32::try_from(attempt.saturating_sub(1)).unwrap_or(i32::MAX);
        let secs = self.initial_backoff.as_secs_f64() * self.multiplier.powi(exponent);
        Duration::try_from_secs_f64(secs).unwrap_or(self.initial_backoff)
    }

    /// Every wait the policy can incur, in order.
    pub fn schedule(&self) -> Vec<Duration> {
        (1..self.max_attempts.max(1)).map(|a| self.backoff(a)).collect()
    }
}

/// Something that can wait.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

/// Blocks the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Run `op` until it succeeds, fails permanently, or runs out of attempts.
///
/// `op` receives the 1-based attempt number. Errors for which `is_transient`
/// returns false end the loop at once. Waits happen only between attempts.
pub fn retry_with_backoff<T, E, Op, P, S>(
    policy: &RetryPolicy,
    is_transient: P,
    sleeper: &mut S,
    mut op: Op,
) -> Result<T, RetryError<E>>
where
    Op: FnMut(u32) -> Result<T, E>,
    P: Fn(&E) -> bool,
    S: Sleeper + ?Sized,
    E: fmt::Display,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match op(attempt) {
            Ok(value) => return Ok(value),
            Err(error) if !is_transient(&error) => {
                return Err(RetryError::Permanent { attempt, error });
            }
            Err(last) if attempt >= max_attempts => {
                return Err(RetryError::Exhausted {
                    attempts: attempt,
                    last,
                });
            }
            Err(error) => {
                let delay = policy.backoff(attempt);
                warn!(
                    attempt,
                    max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    %error,
                    "transient failure, backing off"
                );
                sleeper.sleep(delay);
                attempt += 1;
            }
        }
    }
}
