//! Concurrent combination of async results.
//!
//! Every entry is started eagerly and polled concurrently on the current task.
//! The functions here wait for **all** entries to settle before deciding, so
//! the outcome depends only on input order, never on which entry finished
//! first. Outstanding entries are not cancelled when another one fails.

use std::future::Future;

use futures::future::join_all;

use crate::combinator::{CombineTuple, first_ok, sequence_entries};

/// Resolves every entry and returns all values in input order.
///
/// If any entry fails, resolves to the first `Err` **by input index**, even
/// when a later entry failed earlier in time.
///
/// # Errors
///
/// Returns the error of the lowest-indexed failing entry.
///
/// # Examples
///
/// ```rust
/// use fallible::async_result::all;
/// use futures::future::ready;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let settled = all(vec![ready(Ok(1)), ready(Err("x")), ready(Ok(2))]).await;
/// assert_eq!(settled, Err("x"));
/// # });
/// ```
pub async fn all<I, Fut, T, E>(futures: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Result<T, E>>,
{
    join_all(futures).await.into_iter().collect()
}

/// Resolves every entry and returns the first success in input order.
///
/// # Errors
///
/// When no entry succeeds, returns every error in input order. An empty input
/// resolves to `Err(vec![])`.
///
/// # Examples
///
/// ```rust
/// use fallible::async_result::any;
/// use futures::future::ready;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let settled = any(vec![ready(Err::<i32, _>("x")), ready(Err("y"))]).await;
/// assert_eq!(settled, Err(vec!["x", "y"]));
/// # });
/// ```
pub async fn any<I, Fut, T, E>(futures: I) -> Result<T, Vec<E>>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Result<T, E>>,
{
    first_ok(join_all(futures).await)
}

/// Keyed form of [`all`].
///
/// Resolves every value future concurrently and collects `(key, value)` pairs
/// into `C`. If any entry fails, resolves to the first `Err` by the
/// iteration order of `entries`.
///
/// # Errors
///
/// Returns the error of the first failing entry in iteration order.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use fallible::async_result::sequence_object;
/// use futures::future::ready;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let profile: Result<BTreeMap<&str, String>, String> = sequence_object(vec![
///     ("name", ready(Ok("Ada".to_string()))),
///     ("role", ready(Ok("admin".to_string()))),
/// ])
/// .await;
/// assert_eq!(profile.unwrap()["role"], "admin");
/// # });
/// ```
pub async fn sequence_object<K, Fut, T, E, I, C>(entries: I) -> Result<C, E>
where
    I: IntoIterator<Item = (K, Fut)>,
    Fut: Future<Output = Result<T, E>>,
    C: FromIterator<(K, T)>,
{
    let (keys, pending): (Vec<K>, Vec<Fut>) = entries.into_iter().unzip();
    let settled = join_all(pending).await;
    sequence_entries(keys.into_iter().zip(settled))
}

macro_rules! impl_all_tuple {
    ($(#[$meta:meta])* $name:ident => $($future:ident: $future_type:ident -> $value_type:ident),+) => {
        $(#[$meta])*
        pub async fn $name<$($future_type, $value_type,)+ E>(
            $($future: $future_type),+
        ) -> Result<($($value_type,)+), E>
        where
            $($future_type: Future<Output = Result<$value_type, E>>,)+
        {
            let settled = futures::join!($($future),+);
            settled.combine()
        }
    };
}

impl_all_tuple!(
    /// Tuple form of [`all`] for two entries of different value types.
    ///
    /// # Errors
    ///
    /// Returns the leftmost error once both entries have settled.
    all2 => first: FutA -> A, second: FutB -> B
);

impl_all_tuple!(
    /// Tuple form of [`all`] for three entries.
    ///
    /// # Errors
    ///
    /// Returns the leftmost error once every entry has settled.
    all3 => first: FutA -> A, second: FutB -> B, third: FutC -> C
);

impl_all_tuple!(
    /// Tuple form of [`all`] for four entries.
    ///
    /// # Errors
    ///
    /// Returns the leftmost error once every entry has settled.
    all4 => first: FutA -> A, second: FutB -> B, third: FutC -> C, fourth: FutD -> D
);
