//! Re-running a failing async operation.

use std::future::Future;
use std::time::Duration;

/// How many times to run an operation and how long to wait between runs.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use fallible::async_result::RetryPolicy;
///
/// let policy = RetryPolicy::default().with_max_attempts(5).with_delay(Duration::from_millis(200));
/// assert_eq!(policy.max_attempts(), 5);
/// assert_eq!(policy.delay(), Duration::from_millis(200));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RetryPolicy {
    max_attempts: usize,
    delay: Duration,
}

impl RetryPolicy {
    /// Attempts made by [`RetryPolicy::default`].
    pub const DEFAULT_MAX_ATTEMPTS: usize = 3;
    /// Delay used by [`RetryPolicy::default`].
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

    /// Creates a policy. A `max_attempts` of zero is treated as one.
    #[inline]
    pub const fn new(max_attempts: usize, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }

    /// Returns a copy with a different attempt budget.
    #[inline]
    #[must_use]
    pub const fn with_max_attempts(self, max_attempts: usize) -> Self {
        Self {
            max_attempts,
            ..self
        }
    }

    /// Returns a copy with a different delay.
    #[inline]
    #[must_use]
    pub const fn with_delay(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }

    /// Effective number of attempts, never less than one.
    #[inline]
    pub const fn max_attempts(&self) -> usize {
        if self.max_attempts == 0 {
            1
        } else {
            self.max_attempts
        }
    }

    /// Pause between a failed attempt and the next one.
    #[inline]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS, Self::DEFAULT_DELAY)
    }
}

/// Every attempt failed.
///
/// Carries the error of the final attempt; earlier errors are discarded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("operation failed after {attempts} attempt(s): {last_error}")]
pub struct RetryError<E> {
    attempts: usize,
    last_error: E,
}

impl<E> RetryError<E> {
    /// Number of attempts made.
    #[inline]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// Error of the final attempt.
    #[inline]
    pub const fn last_error(&self) -> &E {
        &self.last_error
    }

    /// Consumes the error and returns the final attempt's cause.
    #[inline]
    pub fn into_last_error(self) -> E {
        self.last_error
    }
}

/// Runs `operation` until it succeeds or `max_attempts` runs have failed.
///
/// Shorthand for [`retry_with_policy`] with a [`RetryPolicy`] built from the
/// arguments.
///
/// # Errors
///
/// Returns [`RetryError`] holding the last error once every attempt failed.
///
/// # Panics
///
/// Panics if a failed attempt is followed by a non-zero delay outside a tokio
/// runtime with the time driver enabled.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use fallible::async_result::retry;
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().start_paused(true).build().unwrap().block_on(async {
/// let mut calls = 0;
/// let fetched = retry(
///     || {
///         calls += 1;
///         let attempt = calls;
///         async move { if attempt < 3 { Err("unavailable") } else { Ok("payload") } }
///     },
///     3,
///     Duration::from_millis(100),
/// )
/// .await;
/// assert_eq!(fetched, Ok("payload"));
/// assert_eq!(calls, 3);
/// # });
/// ```
pub async fn retry<Op, Fut, T, E>(
    operation: Op,
    max_attempts: usize,
    delay: Duration,
) -> Result<T, RetryError<E>>
where
    Op: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    retry_with_policy(operation, RetryPolicy::new(max_attempts, delay)).await
}

/// Runs `operation` under `policy`.
///
/// The first attempt starts immediately. After each failure except the last,
/// the policy's delay is slept before the next attempt. The first success is
/// returned as soon as it arrives.
///
/// # Errors
///
/// Returns [`RetryError`] holding the last error once every attempt failed.
///
/// # Panics
///
/// Panics if a failed attempt is followed by a non-zero delay outside a tokio
/// runtime with the time driver enabled.
pub async fn retry_with_policy<Op, Fut, T, E>(
    mut operation: Op,
    policy: RetryPolicy,
) -> Result<T, RetryError<E>>
where
    Op: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let max_attempts = policy.max_attempts();
    let mut attempt = 1;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(last_error) if attempt >= max_attempts => {
                debug_event!(attempts = attempt, "retry attempts exhausted");
                return Err(RetryError {
                    attempts: attempt,
                    last_error,
                });
            }
            Err(_) => {
                debug_event!(attempt, max_attempts, delay = ?policy.delay(), "attempt failed; retrying");
                if !policy.delay().is_zero() {
                    tokio::time::sleep(policy.delay()).await;
                }
                attempt += 1;
            }
        }
    }
}
