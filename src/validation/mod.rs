//! Validation type for error accumulation.
//!
//! `Validation<T, E>` is either `Valid(T)` or `Invalid(ErrorList<E>)`. It
//! differs from `Result` in one policy: combining several validations keeps
//! going past the first failure and reports **every** error, in input order.
//!
//! - [`combine_validations`] folds a sequence of validations
//! - [`validate_all`] runs one validator over many items and folds the outcomes
//! - [`Validation::zip`] combines two validations, accumulating errors
//!
//! `and_then` still short-circuits, because the next step depends on a value
//! that does not exist when the current step is invalid.
//!
//! # Examples
//!
//! ```rust
//! use fallible::validation::{combine_validations, Validation};
//!
//! let fields = vec![
//!     Validation::invalid("name is empty"),
//!     Validation::valid(30),
//!     Validation::invalid("email is missing"),
//! ];
//!
//! let combined = combine_validations(fields);
//! assert_eq!(
//!     combined.to_result().unwrap_err().into_vec(),
//!     vec!["name is empty", "email is missing"]
//! );
//! ```

mod error_list;

pub use error_list::{EmptyErrorList, ErrorList};

/// A success value or a non-empty list of errors.
///
/// # Examples
///
/// ```rust
/// use fallible::validation::Validation;
///
/// let age: Validation<u32, &str> = Validation::valid(30);
/// let name: Validation<&str, &str> = Validation::invalid("name is empty");
///
/// let person = name.zip(age);
/// assert!(person.is_invalid());
/// assert_eq!(person.errors().map(|errors| errors.len()), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validation<T, E> {
    /// The value passed validation.
    Valid(T),
    /// The value failed validation with at least one error.
    Invalid(ErrorList<E>),
}

impl<T, E> Validation<T, E> {
    /// Creates a valid value.
    #[inline]
    pub const fn valid(value: T) -> Self {
        Self::Valid(value)
    }

    /// Creates an invalid value with a single error.
    #[inline]
    pub fn invalid(error: E) -> Self {
        Self::Invalid(ErrorList::single(error))
    }

    /// Creates an invalid value from an existing error list.
    #[inline]
    pub const fn invalid_many(errors: ErrorList<E>) -> Self {
        Self::Invalid(errors)
    }

    /// Returns `true` for `Valid`.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` for `Invalid`.
    #[inline]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Borrows the valid value, if any.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Borrows the accumulated errors, if any.
    #[inline]
    pub const fn errors(&self) -> Option<&ErrorList<E>> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Maps the valid value.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Valid(value) => Validation::Valid(function(value)),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Maps every accumulated error, keeping order.
    #[inline]
    pub fn map_err<F, G>(self, function: G) -> Validation<T, F>
    where
        G: FnMut(E) -> F,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(errors) => Validation::Invalid(errors.map(function)),
        }
    }

    /// Chains a dependent validation.
    ///
    /// This is the one short-circuiting operation on `Validation`: on
    /// `Invalid` the function is not called and the errors pass through.
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Self::Valid(value) => function(value),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Pairs two validations, accumulating errors from both.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::validation::Validation;
    ///
    /// let left: Validation<i32, &str> = Validation::invalid("left");
    /// let right: Validation<i32, &str> = Validation::invalid("right");
    ///
    /// let errors = left.zip(right).to_result().unwrap_err();
    /// assert_eq!(errors.into_vec(), vec!["left", "right"]);
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        self.zip_with(other, |left, right| (left, right))
    }

    /// Combines two validations with `function`, accumulating errors from both.
    pub fn zip_with<U, V, F>(self, other: Validation<U, E>, function: F) -> Validation<V, E>
    where
        F: FnOnce(T, U) -> V,
    {
        match (self, other) {
            (Self::Valid(left), Validation::Valid(right)) => Validation::Valid(function(left, right)),
            (Self::Invalid(left), Validation::Invalid(right)) => {
                Validation::Invalid(left.concat(right))
            }
            (Self::Invalid(errors), Validation::Valid(_))
            | (Self::Valid(_), Validation::Invalid(errors)) => Validation::Invalid(errors),
        }
    }

    /// Exhaustive case analysis; exactly one function runs.
    #[inline]
    pub fn fold<R, F, G>(self, on_valid: F, on_invalid: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(ErrorList<E>) -> R,
    {
        match self {
            Self::Valid(value) => on_valid(value),
            Self::Invalid(errors) => on_invalid(errors),
        }
    }

    /// Returns the valid value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Valid(value) => value,
            Self::Invalid(_) => default,
        }
    }

    /// Returns the valid value or computes one from the errors.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(ErrorList<E>) -> T,
    {
        match self {
            Self::Valid(value) => value,
            Self::Invalid(errors) => function(errors),
        }
    }

    /// Collapses into a `Result` whose error is the whole error list.
    ///
    /// # Errors
    ///
    /// Returns `Err(errors)` with every accumulated error for `Invalid`.
    #[inline]
    pub fn to_result(self) -> Result<T, ErrorList<E>> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors),
        }
    }

    /// Converts to an `Option`, discarding errors.
    #[inline]
    pub fn to_option(self) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Lifts a single-error `Result`.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(error) => Self::invalid(error),
        }
    }

    /// Lifts an `Option`, using `error` when it is `None`.
    #[inline]
    pub fn from_option(option: Option<T>, error: E) -> Self {
        match option {
            Some(value) => Self::Valid(value),
            None => Self::invalid(error),
        }
    }
}

impl<T, E: std::fmt::Debug> Validation<T, E> {
    /// Returns the valid value.
    ///
    /// # Panics
    ///
    /// Panics with the accumulated errors if this is `Invalid`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Valid(value) => value,
            Self::Invalid(errors) => {
                panic!("called `Validation::unwrap()` on an `Invalid` value: {errors:?}")
            }
        }
    }
}

impl<T, E> From<Result<T, E>> for Validation<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T, E, C> FromIterator<Validation<T, E>> for Validation<C, E>
where
    C: FromIterator<T>,
{
    /// Accumulates every error; yields `Valid` only if every item is valid.
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Validation<T, E>>,
    {
        let mut values = Vec::new();
        let mut errors: Option<ErrorList<E>> = None;

        for validation in iter {
            match validation {
                Validation::Valid(value) => {
                    if errors.is_none() {
                        values.push(value);
                    }
                }
                Validation::Invalid(found) => {
                    errors = Some(match errors.take() {
                        Some(accumulated) => accumulated.concat(found),
                        None => found,
                    });
                }
            }
        }

        match errors {
            Some(errors) => Self::Invalid(errors),
            None => Self::Valid(values.into_iter().collect()),
        }
    }
}

/// Combines validations, accumulating the errors of **every** invalid entry.
///
/// Returns `Valid` with all values in input order when every entry is valid,
/// otherwise `Invalid` with the concatenation of all error lists in input
/// order.
///
/// # Examples
///
/// ```rust
/// use fallible::validation::{combine_validations, Validation};
///
/// let all_valid = combine_validations(vec![
///     Validation::<i32, &str>::valid(1),
///     Validation::valid(2),
/// ]);
/// assert_eq!(all_valid, Validation::valid(vec![1, 2]));
/// ```
pub fn combine_validations<T, E, I>(validations: I) -> Validation<Vec<T>, E>
where
    I: IntoIterator<Item = Validation<T, E>>,
{
    validations.into_iter().collect()
}

/// Applies `validator` to every item and accumulates the outcomes.
///
/// The validator runs on every item, even after an invalid one.
///
/// # Examples
///
/// ```rust
/// use fallible::validation::{validate_all, Validation};
///
/// let positive = |n: &i32| {
///     if *n > 0 { Validation::valid(*n) } else { Validation::invalid(format!("{n} is not positive")) }
/// };
///
/// let outcome = validate_all(&[3, -1, 0], positive);
/// assert_eq!(
///     outcome.to_result().unwrap_err().into_vec(),
///     vec!["-1 is not positive".to_string(), "0 is not positive".to_string()]
/// );
/// ```
pub fn validate_all<I, T, E, F>(items: I, validator: F) -> Validation<Vec<T>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Validation<T, E>,
{
    items.into_iter().map(validator).collect()
}
