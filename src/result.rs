//! Result extensions - the operations `std::result::Result` does not provide.
//!
//! The standard `Result` already covers `map`, `map_err`, `and_then`,
//! `or_else`, `and`, `or`, `unwrap_or`, `unwrap_or_else` and `transpose`
//! with exactly the semantics this crate relies on. [`ResultExt`] adds the
//! rest:
//!
//! - [`ResultExt::match_with`]: exhaustive dispatch returning a single value
//! - [`ResultExt::safe_unwrap`]: "whatever is inside" as an explicit [`Either`]
//! - [`ResultExt::zip`]: left-biased pairing of two results
//! - [`ResultExt::tap`] / [`ResultExt::tap_err`]: side effects without changing the value
//! - [`ResultExt::recover`]: turn every error into a value, leaving an
//!   uninhabited error type
//!
//! Every operation that forwards an error hands back the very same value; no
//! combinator rewrites `E` on the failing path.
//!
//! # Examples
//!
//! ```rust
//! use fallible::result::{err, ok, ResultExt};
//!
//! let total = ok::<_, String>(2)
//!     .zip(ok(3))
//!     .map(|(a, b)| a + b)
//!     .match_with(|sum| format!("sum = {sum}"), |error| format!("failed: {error}"));
//! assert_eq!(total, "sum = 5");
//!
//! let failed = ok::<i32, _>(2)
//!     .zip(err::<i32, _>("no second operand".to_string()))
//!     .match_with(|_| String::new(), |error| error);
//! assert_eq!(failed, "no second operand");
//! ```

use std::convert::Infallible;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::either::Either;
use crate::error::{Error, Rejected};
use crate::validation::Validation;

/// A `Result` whose error type defaults to [`Error`].
pub type Fallible<T, E = Error> = Result<T, E>;

/// Creates a successful result.
#[inline]
pub const fn ok<T, E>(value: T) -> Result<T, E> {
    Ok(value)
}

/// Creates a failed result.
#[inline]
pub const fn err<T, E>(error: E) -> Result<T, E> {
    Err(error)
}

/// Extension methods for `Result`.
pub trait ResultExt<T, E>: Sized {
    /// Runs exactly one of the two functions and returns its value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::result::ResultExt;
    ///
    /// let parsed: Result<i32, String> = "42".parse::<i32>().map_err(|e| e.to_string());
    /// assert_eq!(parsed.match_with(|n| n * 2, |_| 0), 84);
    /// ```
    fn match_with<R, F, G>(self, on_ok: F, on_err: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R;

    /// Returns whatever is inside without failing: `Right(value)` for `Ok`,
    /// `Left(error)` for `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::either::Either;
    /// use fallible::result::ResultExt;
    ///
    /// assert_eq!(Ok::<i32, &str>(1).safe_unwrap(), Either::Right(1));
    /// assert_eq!(Err::<i32, &str>("e").safe_unwrap(), Either::Left("e"));
    /// ```
    fn safe_unwrap(self) -> Either<E, T>;

    /// Pairs two results.
    ///
    /// `Ok(a).zip(Ok(b))` is `Ok((a, b))`. Any `Err` wins, and when both are
    /// `Err` the left one is returned.
    fn zip<U>(self, other: Result<U, E>) -> Result<(T, U), E>;

    /// Combines two successful values with `function`; left-biased like
    /// [`ResultExt::zip`].
    fn zip_with<U, V, F>(self, other: Result<U, E>, function: F) -> Result<V, E>
    where
        F: FnOnce(T, U) -> V;

    /// Calls `function` with the success value and returns `self` unchanged.
    ///
    /// On `Err` the function is not called. Whatever `function` returns is
    /// ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::result::ResultExt;
    ///
    /// let mut log = Vec::new();
    /// let value = Ok::<i32, String>(7).tap(|n| log.push(*n));
    /// assert_eq!(value, Ok(7));
    /// assert_eq!(log, vec![7]);
    /// ```
    #[must_use]
    fn tap<F>(self, function: F) -> Self
    where
        F: FnOnce(&T);

    /// Calls `function` with the error and returns `self` unchanged.
    #[must_use]
    fn tap_err<F>(self, function: F) -> Self
    where
        F: FnOnce(&E);

    /// Replaces an error with a value computed from it.
    ///
    /// The returned result can no longer fail; see [`IntoValue::into_value`].
    fn recover<F>(self, fallback: F) -> Result<T, Infallible>
    where
        F: FnOnce(E) -> T;

    /// Replaces an error with a fixed value.
    fn recover_value(self, fallback: T) -> Result<T, Infallible>;

    /// Converts into an [`Either`] with the error on the left.
    fn to_either(self) -> Either<E, T>;

    /// Lifts into a single-error [`Validation`].
    fn to_validation(self) -> Validation<T, E>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn match_with<R, F, G>(self, on_ok: F, on_err: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
    {
        match self {
            Ok(value) => on_ok(value),
            Err(error) => on_err(error),
        }
    }

    #[inline]
    fn safe_unwrap(self) -> Either<E, T> {
        Either::from(self)
    }

    #[inline]
    fn zip<U>(self, other: Result<U, E>) -> Result<(T, U), E> {
        self.zip_with(other, |left, right| (left, right))
    }

    #[inline]
    fn zip_with<U, V, F>(self, other: Result<U, E>, function: F) -> Result<V, E>
    where
        F: FnOnce(T, U) -> V,
    {
        match (self, other) {
            (Ok(left), Ok(right)) => Ok(function(left, right)),
            (Err(error), _) | (Ok(_), Err(error)) => Err(error),
        }
    }

    #[inline]
    fn tap<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Ok(value) = &self {
            function(value);
        }
        self
    }

    #[inline]
    fn tap_err<F>(self, function: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Err(error) = &self {
            function(error);
        }
        self
    }

    #[inline]
    fn recover<F>(self, fallback: F) -> Result<T, Infallible>
    where
        F: FnOnce(E) -> T,
    {
        Ok(self.unwrap_or_else(fallback))
    }

    #[inline]
    fn recover_value(self, fallback: T) -> Result<T, Infallible> {
        Ok(self.unwrap_or(fallback))
    }

    #[inline]
    fn to_either(self) -> Either<E, T> {
        Either::from(self)
    }

    #[inline]
    fn to_validation(self) -> Validation<T, E> {
        Validation::from_result(self)
    }
}

/// Extracts the value of a result that cannot fail.
pub trait IntoValue<T> {
    /// Returns the success value. There is no failing path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::result::{IntoValue, ResultExt};
    ///
    /// let port = "not a number".parse::<u16>().recover_value(8080).into_value();
    /// assert_eq!(port, 8080);
    /// ```
    fn into_value(self) -> T;
}

impl<T> IntoValue<T> for Result<T, Infallible> {
    #[inline]
    fn into_value(self) -> T {
        match self {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }
}

/// Removes one level of nesting: `Ok(Ok(v))` becomes `Ok(v)`, and either
/// error is returned as is.
#[inline]
pub fn flatten<T, E>(result: Result<Result<T, E>, E>) -> Result<T, E> {
    result.and_then(|inner| inner)
}

/// Splits results into success values and errors, each in input order.
///
/// # Examples
///
/// ```rust
/// use fallible::result::partition;
///
/// let (values, errors) = partition(vec![Ok(1), Err("a"), Ok(2), Err("b")]);
/// assert_eq!(values, vec![1, 2]);
/// assert_eq!(errors, vec!["a", "b"]);
/// ```
pub fn partition<T, E, I>(results: I) -> (Vec<T>, Vec<E>)
where
    I: IntoIterator<Item = Result<T, E>>,
{
    let mut values = Vec::new();
    let mut errors = Vec::new();
    for result in results {
        match result {
            Ok(value) => values.push(value),
            Err(error) => errors.push(error),
        }
    }
    (values, errors)
}

/// Runs `function`, turning a panic into `Err(Rejected)`.
///
/// Only meant for trust boundaries around code that signals failure by
/// panicking. The closure is treated as unwind safe; state it mutates may be
/// left half-updated when it panics.
///
/// # Errors
///
/// Returns [`Rejected`] carrying the panic message if `function` panics.
///
/// # Examples
///
/// ```rust
/// use fallible::result::try_catch;
///
/// assert_eq!(try_catch(|| 2 + 2), Ok(4));
///
/// let rejected = try_catch(|| -> i32 { panic!("index out of range") }).unwrap_err();
/// assert_eq!(rejected.message(), "index out of range");
/// ```
pub fn try_catch<T, F>(function: F) -> Result<T, Rejected>
where
    F: FnOnce() -> T,
{
    catch_unwind(AssertUnwindSafe(function)).map_err(Rejected::from_panic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Ok(1), Ok(2), Ok((1, 2)))]
    #[case(Err("left"), Ok(2), Err("left"))]
    #[case(Ok(1), Err("right"), Err("right"))]
    #[case(Err("left"), Err("right"), Err("left"))]
    fn zip_is_left_biased(
        #[case] left: Result<i32, &str>,
        #[case] right: Result<i32, &str>,
        #[case] expected: Result<(i32, i32), &str>,
    ) {
        assert_eq!(left.zip(right), expected);
    }

    #[rstest]
    fn tap_err_leaves_error_untouched() {
        let mut seen = None;
        let result: Result<i32, String> = Err("boom".to_string());
        let result = result.tap_err(|e| seen = Some(e.clone()));
        assert_eq!(result, Err("boom".to_string()));
        assert_eq!(seen.as_deref(), Some("boom"));
    }

    #[rstest]
    fn recover_uses_error_to_compute_fallback() {
        let result: Result<usize, String> = Err("four".to_string());
        assert_eq!(result.recover(|e| e.len()).into_value(), 4);
    }

    #[rstest]
    fn flatten_forwards_both_error_levels() {
        assert_eq!(flatten::<i32, &str>(Ok(Ok(1))), Ok(1));
        assert_eq!(flatten::<i32, &str>(Ok(Err("inner"))), Err("inner"));
        assert_eq!(flatten::<i32, &str>(Err("outer")), Err("outer"));
    }

    #[rstest]
    fn fallible_defaults_to_crate_error() {
        let failure: Fallible<()> = err(Error::new("missing"));
        assert_eq!(failure.unwrap_err().message(), "missing");
    }
}
