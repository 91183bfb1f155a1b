//! Free-standing combinators over `Result` and `Option`.
//!
//! Everything here is a structural fold with one rule: iterate in input order,
//! stop at the first failing element and return it, otherwise accumulate the
//! successes in order. The accumulating counterpart lives in
//! [`validation`](crate::validation).
//!
//! - [`chain`]: a reusable `and_then` stage for building pipelines
//! - [`tap`], [`recover`], [`recover_value`], [`map_error`]: function forms
//!   of the [`ResultExt`](crate::result::ResultExt) methods
//! - [`collect`]: `Option`s to an `Option` of all values
//! - [`combine`], [`combine_tuple`]: `Result`s to a `Result` of all values
//! - [`sequence_entries`]: keyed `Result`s to a `Result` of a keyed collection
//! - [`first_ok`]: the first success, or every error
//! - [`pipeline!`](crate::pipeline!): a short-circuiting function built from steps
//!
//! # Examples
//!
//! ```rust
//! use fallible::combinator::{chain, combine};
//!
//! let parse = |s: &str| s.parse::<i32>().map_err(|e| e.to_string());
//! let non_negative = chain(|n: i32| if n >= 0 { Ok(n) } else { Err(format!("{n} < 0")) });
//!
//! assert_eq!(non_negative(parse("12")), Ok(12));
//! assert!(combine(vec![parse("1"), parse("x"), parse("y")]).is_err());
//! ```

mod pipeline_macro;
mod tuple;

pub use tuple::{CombineTuple, combine_tuple};

use std::convert::Infallible;

use crate::result::ResultExt;

/// Wraps `function` as a pipeline stage: the returned closure applies
/// `and_then(function)` to whatever result it receives.
///
/// On `Err` the stage returns the error unchanged without calling
/// `function`.
///
/// This stage takes plain `Result`s. For a future of `Result` use
/// `async_result::chain_async` or the `AsyncResultExt::chain` method
/// (feature `async`).
pub fn chain<T, U, E, F>(function: F) -> impl Fn(Result<T, E>) -> Result<U, E>
where
    F: Fn(T) -> Result<U, E>,
{
    move |result| result.and_then(&function)
}

/// Runs `function` on the success value for its side effect and returns the
/// original result.
#[inline]
pub fn tap<T, E, F>(result: Result<T, E>, function: F) -> Result<T, E>
where
    F: FnOnce(&T),
{
    result.tap(function)
}

/// Substitutes an error with a value computed from it.
#[inline]
pub fn recover<T, E, F>(result: Result<T, E>, fallback: F) -> Result<T, Infallible>
where
    F: FnOnce(E) -> T,
{
    result.recover(fallback)
}

/// Substitutes an error with a fixed value.
#[inline]
pub fn recover_value<T, E>(result: Result<T, E>, fallback: T) -> Result<T, Infallible> {
    result.recover_value(fallback)
}

/// Maps the error of a result; successes pass through.
#[inline]
pub fn map_error<T, E, F, G>(result: Result<T, E>, function: G) -> Result<T, F>
where
    G: FnOnce(E) -> F,
{
    result.map_err(function)
}

/// Turns a sequence of options into an option of all values.
///
/// Stops at the first `None`; later items are not pulled from the iterator.
///
/// # Examples
///
/// ```rust
/// use fallible::combinator::collect;
///
/// assert_eq!(collect(vec![Some(1), Some(2)]), Some(vec![1, 2]));
/// assert_eq!(collect(vec![Some(1), None, Some(3)]), None);
/// ```
pub fn collect<T, I>(options: I) -> Option<Vec<T>>
where
    I: IntoIterator<Item = Option<T>>,
{
    let mut values = Vec::new();
    for option in options {
        values.push(option?);
    }
    Some(values)
}

/// Turns a sequence of results into a result of all values.
///
/// Stops at the first `Err` and returns it; later items are not pulled from
/// the iterator.
///
/// # Errors
///
/// Returns the first error in input order.
///
/// # Examples
///
/// ```rust
/// use fallible::combinator::combine;
///
/// assert_eq!(combine(vec![Ok::<_, &str>(1), Ok(2)]), Ok(vec![1, 2]));
/// assert_eq!(combine(vec![Ok(1), Err("x"), Err("y")]), Err("x"));
/// ```
pub fn combine<T, E, I>(results: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    let mut values = Vec::new();
    for result in results {
        values.push(result?);
    }
    Ok(values)
}

/// Turns keyed results into a result of a keyed collection.
///
/// Keys keep their iteration order in the output (for collections that
/// preserve order). The first `Err` by iteration order is returned.
///
/// # Errors
///
/// Returns the first error in iteration order.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use fallible::combinator::sequence_entries;
///
/// let settings = vec![("port", Ok::<_, String>(8080)), ("workers", Ok(4))];
/// let resolved: BTreeMap<_, _> = sequence_entries(settings).unwrap();
/// assert_eq!(resolved["port"], 8080);
/// ```
pub fn sequence_entries<K, T, E, I, C>(entries: I) -> Result<C, E>
where
    I: IntoIterator<Item = (K, Result<T, E>)>,
    C: FromIterator<(K, T)>,
{
    entries
        .into_iter()
        .map(|(key, result)| result.map(|value| (key, value)))
        .collect()
}

/// Returns the first success in input order, or every error in input order
/// when nothing succeeds.
///
/// # Errors
///
/// Returns all errors when no item is `Ok`, including the empty input.
///
/// # Examples
///
/// ```rust
/// use fallible::combinator::first_ok;
///
/// assert_eq!(first_ok(vec![Err("x"), Ok(1), Err("y")]), Ok(1));
/// assert_eq!(first_ok(vec![Err::<i32, _>("x"), Err("y")]), Err(vec!["x", "y"]));
/// ```
pub fn first_ok<T, E, I>(results: I) -> Result<T, Vec<E>>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    let mut errors = Vec::new();
    for result in results {
        match result {
            Ok(value) => return Ok(value),
            Err(error) => errors.push(error),
        }
    }
    Err(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn combine_stops_pulling_after_first_error() {
        let mut pulled = 0;
        let results = (0..5).map(|n| {
            pulled += 1;
            if n == 1 { Err(n) } else { Ok(n) }
        });
        assert_eq!(combine(results), Err(1));
        assert_eq!(pulled, 2);
    }

    #[rstest]
    fn collect_stops_pulling_after_first_none() {
        let mut pulled = 0;
        let options = (0..5).map(|n| {
            pulled += 1;
            (n != 2).then_some(n)
        });
        assert_eq!(collect(options), None);
        assert_eq!(pulled, 3);
    }

    #[rstest]
    fn chain_stage_skips_function_on_err() {
        let stage = chain(|n: i32| -> Result<i32, &'static str> { panic!("called with {n}") });
        assert_eq!(stage(Err("upstream")), Err("upstream"));
    }

    #[rstest]
    fn sequence_entries_returns_first_error_by_order() {
        let entries = vec![("a", Ok(1)), ("b", Err("b failed")), ("c", Err("c failed"))];
        let result: Result<Vec<(&str, i32)>, &str> = sequence_entries(entries);
        assert_eq!(result, Err("b failed"));
    }
}
