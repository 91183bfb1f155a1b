//! Synchronous combinators lifted over futures of `Result`.
//!
//! Each function awaits its input once and then behaves exactly like its
//! synchronous counterpart: on `Err` the supplied function is not called and
//! the error is forwarded unchanged.

use std::convert::Infallible;
use std::future::Future;
use std::time::Duration;

use super::timeout::{TimeoutError, with_timeout};
use crate::result::ResultExt;

/// Maps the success value of an async result.
pub async fn async_map<Fut, T, U, E, F>(future: Fut, function: F) -> Result<U, E>
where
    Fut: Future<Output = Result<T, E>>,
    F: FnOnce(T) -> U,
{
    future.await.map(function)
}

/// Maps the error of an async result.
pub async fn async_map_err<Fut, T, E, G, F>(future: Fut, function: F) -> Result<T, G>
where
    Fut: Future<Output = Result<T, E>>,
    F: FnOnce(E) -> G,
{
    future.await.map_err(function)
}

/// Chains an asynchronous step on the success value.
///
/// The step's future is only created, and only awaited, when the input
/// resolves to `Ok`.
///
/// # Examples
///
/// ```rust
/// use fallible::async_result::async_flat_map;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let user_id = async { Ok::<u32, String>(7) };
/// let profile = async_flat_map(user_id, |id| async move { Ok(format!("user-{id}")) }).await;
/// assert_eq!(profile, Ok("user-7".to_string()));
/// # });
/// ```
pub async fn async_flat_map<Fut, Next, T, U, E, F>(future: Fut, function: F) -> Result<U, E>
where
    Fut: Future<Output = Result<T, E>>,
    Next: Future<Output = Result<U, E>>,
    F: FnOnce(T) -> Next,
{
    function(future.await?).await
}

/// Chains a synchronous step on the success value of an async result.
pub async fn chain_async<Fut, T, U, E, F>(future: Fut, function: F) -> Result<U, E>
where
    Fut: Future<Output = Result<T, E>>,
    F: FnOnce(T) -> Result<U, E>,
{
    future.await.and_then(function)
}

/// Runs `function` on the success value and resolves to the original result.
pub async fn tap_async<Fut, T, E, F>(future: Fut, function: F) -> Result<T, E>
where
    Fut: Future<Output = Result<T, E>>,
    F: FnOnce(&T),
{
    future.await.tap(function)
}

/// Replaces an error with a value computed from it.
pub async fn recover_async<Fut, T, E, F>(future: Fut, fallback: F) -> Result<T, Infallible>
where
    Fut: Future<Output = Result<T, E>>,
    F: FnOnce(E) -> T,
{
    future.await.recover(fallback)
}

/// Removes one level of async nesting.
///
/// Awaits the outer future; on `Ok(inner)` awaits `inner` as well. An error
/// at either level is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use fallible::async_result::flatten_async_result;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let nested = async { Ok::<_, &str>(async { Ok::<_, &str>(3) }) };
/// assert_eq!(flatten_async_result(nested).await, Ok(3));
/// # });
/// ```
pub async fn flatten_async_result<Fut, Inner, T, E>(future: Fut) -> Result<T, E>
where
    Fut: Future<Output = Result<Inner, E>>,
    Inner: Future<Output = Result<T, E>>,
{
    future.await?.await
}

/// Method syntax for the async combinators.
///
/// Implemented for every `Future<Output = Result<T, E>>`.
///
/// # Examples
///
/// ```rust
/// use fallible::async_result::AsyncResultExt;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let length = async { Ok::<_, String>("hello") }
///     .async_map(str::len)
///     .chain(|n| if n > 3 { Ok(n) } else { Err("too short".to_string()) })
///     .await;
/// assert_eq!(length, Ok(5));
/// # });
/// ```
pub trait AsyncResultExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// See [`async_map`].
    fn async_map<U, F>(self, function: F) -> impl Future<Output = Result<U, E>>
    where
        F: FnOnce(T) -> U,
    {
        async_map(self, function)
    }

    /// See [`async_map_err`].
    fn async_map_err<G, F>(self, function: F) -> impl Future<Output = Result<T, G>>
    where
        F: FnOnce(E) -> G,
    {
        async_map_err(self, function)
    }

    /// See [`async_flat_map`].
    fn async_flat_map<U, Next, F>(self, function: F) -> impl Future<Output = Result<U, E>>
    where
        Next: Future<Output = Result<U, E>>,
        F: FnOnce(T) -> Next,
    {
        async_flat_map(self, function)
    }

    /// See [`chain_async`].
    fn chain<U, F>(self, function: F) -> impl Future<Output = Result<U, E>>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        chain_async(self, function)
    }

    /// See [`tap_async`].
    fn tap<F>(self, function: F) -> impl Future<Output = Result<T, E>>
    where
        F: FnOnce(&T),
    {
        tap_async(self, function)
    }

    /// See [`recover_async`].
    fn recover<F>(self, fallback: F) -> impl Future<Output = Result<T, Infallible>>
    where
        F: FnOnce(E) -> T,
    {
        recover_async(self, fallback)
    }

    /// Awaits and runs exactly one of the two functions.
    fn match_with<R, F, G>(self, on_ok: F, on_err: G) -> impl Future<Output = R>
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
    {
        async move { self.await.match_with(on_ok, on_err) }
    }

    /// Awaits and returns the success value or `default`.
    fn unwrap_or(self, default: T) -> impl Future<Output = T> {
        async move { self.await.unwrap_or(default) }
    }

    /// See [`with_timeout`].
    fn with_timeout(self, duration: Duration) -> impl Future<Output = Result<T, TimeoutError<E>>>
    where
        Self: Send + 'static,
        T: Send + 'static,
        E: Send + 'static,
    {
        with_timeout(self, duration)
    }
}

impl<Fut, T, E> AsyncResultExt<T, E> for Fut where Fut: Future<Output = Result<T, E>> {}
