//! Async composition of fallible computations.
//!
//! An async result is any `Future<Output = Result<T, E>>`. It is never itself
//! `Ok` or `Err`; the tag is only visible after awaiting it. This module lifts
//! the synchronous combinators over such futures and adds the operations that
//! only make sense asynchronously:
//!
//! - [`from_future`]: a panicking future becomes `Err(Rejected)` instead of
//!   unwinding through the caller
//! - [`all`] / [`any`] / [`sequence_object`]: run every entry concurrently,
//!   wait for all of them, then decide by input order
//! - [`with_timeout`]: race an operation against a timer
//! - [`retry`]: re-run an operation with a constant delay between attempts
//! - [`Pipeline`]: thread a value through sync and async steps, stopping at
//!   the first error
//! - [`AsyncResultExt`]: method syntax for the lifted combinators
//!
//! Awaiting is the only suspension point. Nothing here blocks a worker thread,
//! and outputs are always ordered by input position, never by completion
//! order.
//!
//! # Examples
//!
//! ```rust
//! use fallible::async_result::{all, any, AsyncResultExt};
//! use futures::future::ready;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let values = all(vec![ready(Ok::<_, String>(1)), ready(Ok(2))]).await;
//! assert_eq!(values, Ok(vec![1, 2]));
//!
//! let first = any(vec![ready(Err("x")), ready(Ok(1)), ready(Err("y"))]).await;
//! assert_eq!(first, Ok(1));
//!
//! let doubled = ready(Ok::<_, String>(21)).async_map(|n| n * 2).await;
//! assert_eq!(doubled, Ok(42));
//! # });
//! ```

mod combinators;
mod concurrent;
mod pipeline;
mod retry;
mod timeout;

pub use combinators::{
    AsyncResultExt, async_flat_map, async_map, async_map_err, chain_async, flatten_async_result,
    recover_async, tap_async,
};
pub use concurrent::{all, all2, all3, all4, any, sequence_object};
pub use pipeline::Pipeline;
pub use retry::{RetryError, RetryPolicy, retry, retry_with_policy};
pub use timeout::{TimeoutError, with_timeout};

use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use futures::future::{BoxFuture, Ready, ready};

use crate::error::Rejected;

/// A boxed, `Send` future resolving to a `Result`.
///
/// Useful where an async result has to be stored or returned from a trait
/// object; the combinators themselves accept any future.
pub type AsyncResult<'a, T, E> = BoxFuture<'a, Result<T, E>>;

/// Awaits `future`, capturing a panic as `Err(Rejected)`.
///
/// The returned future always resolves; it never unwinds into the caller.
///
/// # Errors
///
/// Resolves to [`Rejected`] if `future` panics while being polled.
///
/// # Examples
///
/// ```rust
/// use fallible::async_result::from_future;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// assert_eq!(from_future(async { 5 }).await, Ok(5));
///
/// let closed = true;
/// let rejected = from_future(async move {
///     if closed {
///         panic!("socket closed");
///     }
///     5
/// })
/// .await;
/// assert_eq!(rejected.unwrap_err().message(), "socket closed");
/// # });
/// ```
pub async fn from_future<Fut>(future: Fut) -> Result<Fut::Output, Rejected>
where
    Fut: Future,
{
    AssertUnwindSafe(future)
        .catch_unwind()
        .await
        .map_err(Rejected::from_panic)
}

/// Lifts a synchronous result into an already-resolved async result.
///
/// Lets synchronous and asynchronous entries be mixed in [`all`] and [`any`]
/// once both are boxed, or used directly where a future is expected.
#[inline]
pub fn resolved<T, E>(result: Result<T, E>) -> Ready<Result<T, E>> {
    ready(result)
}
