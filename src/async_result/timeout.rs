//! Racing an async result against a timer.

use std::future::Future;
use std::time::Duration;

/// Failure of an operation run under [`with_timeout`].
///
/// Callers see the union of the timeout and the operation's own error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeoutError<E> {
    /// The timer fired before the operation settled.
    #[error("operation timed out after {0:?}")]
    Elapsed(Duration),
    /// The operation settled in time with its own error.
    #[error("{0}")]
    Failed(E),
}

impl<E> TimeoutError<E> {
    /// Returns `true` if the timer fired first.
    #[inline]
    pub const fn is_elapsed(&self) -> bool {
        matches!(self, Self::Elapsed(_))
    }

    /// Returns the operation's own error, if that is what happened.
    #[inline]
    pub fn into_failed(self) -> Option<E> {
        match self {
            Self::Elapsed(_) => None,
            Self::Failed(error) => Some(error),
        }
    }
}

/// Runs `future` with a deadline.
///
/// The operation is spawned onto the tokio runtime and raced against a timer.
/// If the timer wins, this resolves to [`TimeoutError::Elapsed`] and the
/// operation is detached: it keeps running, and whatever it eventually
/// produces is dropped. No cancellation reaches the operation.
///
/// A panic inside the operation before the deadline is resumed on the
/// awaiting task, as if the operation had been awaited directly.
///
/// # Errors
///
/// - [`TimeoutError::Elapsed`] if `duration` passes first
/// - [`TimeoutError::Failed`] if the operation resolves to `Err` in time
///
/// # Panics
///
/// Panics if called outside a tokio runtime.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use fallible::async_result::{with_timeout, TimeoutError};
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().start_paused(true).build().unwrap().block_on(async {
/// let slow = async {
///     tokio::time::sleep(Duration::from_secs(10)).await;
///     Ok::<_, String>("late")
/// };
/// let outcome = with_timeout(slow, Duration::from_millis(100)).await;
/// assert_eq!(outcome, Err(TimeoutError::Elapsed(Duration::from_millis(100))));
/// # });
/// ```
pub async fn with_timeout<Fut, T, E>(future: Fut, duration: Duration) -> Result<T, TimeoutError<E>>
where
    Fut: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    let handle = tokio::spawn(future);

    match tokio::time::timeout(duration, handle).await {
        Ok(Ok(result)) => result.map_err(TimeoutError::Failed),
        Ok(Err(join_error)) if join_error.is_panic() => {
            std::panic::resume_unwind(join_error.into_panic())
        }
        Ok(Err(_)) => {
            // Cancelled by runtime shutdown: the result can no longer arrive.
            debug_event!(?duration, "timed operation cancelled by runtime shutdown");
            Err(TimeoutError::Elapsed(duration))
        }
        Err(_) => {
            debug_event!(?duration, "operation timed out; detaching it");
            Err(TimeoutError::Elapsed(duration))
        }
    }
}
