//! A reusable chain of sync and async fallible steps.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;

type Step<I, O, E> = Arc<dyn Fn(I) -> BoxFuture<'static, Result<O, E>> + Send + Sync>;

/// Threads an input through a sequence of steps, stopping at the first error.
///
/// Steps are appended with [`then`](Pipeline::then) for synchronous functions
/// and [`then_async`](Pipeline::then_async) for functions returning futures.
/// Each step receives the success value of the previous one. When a step
/// fails, later steps are never invoked and [`run`](Pipeline::run) resolves to
/// that error.
///
/// A pipeline is immutable once built and can be run any number of times,
/// from any number of tasks.
///
/// # Examples
///
/// ```rust
/// use fallible::async_result::Pipeline;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let normalize = Pipeline::<String, String, String>::new()
///     .then(|raw: String| Ok(raw.trim().to_string()))
///     .then(|name: String| {
///         if name.is_empty() { Err("empty name".to_string()) } else { Ok(name) }
///     })
///     .then_async(|name: String| async move { Ok(name.to_uppercase()) });
///
/// assert_eq!(normalize.run("  ada ".to_string()).await, Ok("ADA".to_string()));
/// assert_eq!(normalize.run("   ".to_string()).await, Err("empty name".to_string()));
/// # });
/// ```
pub struct Pipeline<I, O, E> {
    step: Step<I, O, E>,
}

impl<T, E> Pipeline<T, T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Creates an empty pipeline that passes its input through unchanged.
    pub fn new() -> Self {
        Self {
            step: Arc::new(|input: T| futures::future::ready(Ok(input)).boxed()),
        }
    }
}

impl<T, E> Default for Pipeline<T, T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<I, O, E> Pipeline<I, O, E>
where
    I: Send + 'static,
    O: Send + 'static,
    E: Send + 'static,
{
    /// Appends a synchronous step.
    #[must_use]
    pub fn then<P, F>(self, function: F) -> Pipeline<I, P, E>
    where
        P: Send + 'static,
        F: Fn(O) -> Result<P, E> + Send + Sync + 'static,
    {
        let previous = self.step;
        let function = Arc::new(function);
        Pipeline {
            step: Arc::new(move |input: I| {
                let pending = previous(input);
                let function = Arc::clone(&function);
                async move { pending.await.and_then(|value| function(value)) }.boxed()
            }),
        }
    }

    /// Appends an asynchronous step.
    ///
    /// The step's future is created only after every earlier step succeeded.
    #[must_use]
    pub fn then_async<P, F, Fut>(self, function: F) -> Pipeline<I, P, E>
    where
        P: Send + 'static,
        F: Fn(O) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<P, E>> + Send + 'static,
    {
        let previous = self.step;
        let function = Arc::new(function);
        Pipeline {
            step: Arc::new(move |input: I| {
                let pending = previous(input);
                let function = Arc::clone(&function);
                async move { function(pending.await?).await }.boxed()
            }),
        }
    }

    /// Runs every step on `input` in order.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing step.
    pub fn run(&self, input: I) -> impl Future<Output = Result<O, E>> + Send + 'static {
        (self.step)(input)
    }
}

impl<I, O, E> Clone for Pipeline<I, O, E> {
    fn clone(&self) -> Self {
        Self {
            step: Arc::clone(&self.step),
        }
    }
}

impl<I, O, E> fmt::Debug for Pipeline<I, O, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Pipeline").finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Pipeline<String, u32, String>: Send, Sync, Clone);
