//! Either type - a value that is one of two alternatives.
//!
//! `Either<L, R>` holds a `Left(L)` or a `Right(R)`. Unlike `Result`, neither
//! side means failure. Combinators that only touch one side treat `Right` as
//! the branch that keeps going, matching `Ok` in `Result`, so `map` and
//! `flat_map` act on `Right` and pass `Left` through untouched.
//!
//! [`Either::fold`] is the exhaustive case analysis and plays the role
//! `match_with` plays for `Result`.
//!
//! # Examples
//!
//! ```rust
//! use fallible::either::Either;
//!
//! let cached: Either<&str, u32> = Either::Left("cache hit");
//! let computed: Either<&str, u32> = Either::Right(7);
//!
//! let describe = |value: Either<&str, u32>| {
//!     value.fold(|note| note.to_string(), |n| format!("computed {n}"))
//! };
//! assert_eq!(describe(cached), "cache hit");
//! assert_eq!(describe(computed), "computed 7");
//! ```

use std::fmt;

/// A value that is either `Left(L)` or `Right(R)`.
///
/// # Examples
///
/// ```rust
/// use fallible::either::Either;
///
/// let value: Either<String, i32> = Either::Right(21);
/// assert_eq!(value.map(|x| x * 2), Either::Right(42));
///
/// let value: Either<String, i32> = Either::Left("skipped".to_string());
/// assert_eq!(value.map(|x| x * 2), Either::Left("skipped".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left alternative.
    Left(L),
    /// The right alternative, the one right-biased combinators continue with.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::either::Either;
    ///
    /// assert!(Either::<i32, ()>::Left(1).is_left());
    /// assert!(!Either::<(), i32>::Right(1).is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns `Some(l)` for `Left(l)`, otherwise `None`.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns `Some(r)` for `Right(r)`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::either::Either;
    ///
    /// assert_eq!(Either::<i32, &str>::Right("hi").right(), Some("hi"));
    /// assert_eq!(Either::<i32, &str>::Left(3).right(), None);
    /// ```
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Borrows the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Maps the right value, leaving a `Left` untouched.
    ///
    /// Same as [`Either::map_right`]; provided so `Either` reads like `Result`.
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        self.map_right(function)
    }

    /// Maps the left value, leaving a `Right` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::either::Either;
    ///
    /// let value: Either<i32, String> = Either::Left(4);
    /// assert_eq!(value.map_left(|x| x + 1), Either::Left(5));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Maps the right value, leaving a `Left` untouched.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Maps whichever side is present with the matching function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::either::Either;
    ///
    /// let value: Either<i32, String> = Either::Right("four".to_string());
    /// assert_eq!(value.bimap(|x| x * 2, |s| s.len()), Either::Right(4));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    // =========================================================================
    // Chaining Operations
    // =========================================================================

    /// Chains a computation on the right value.
    ///
    /// On `Right(r)` returns `function(r)` directly. On `Left(l)` the function
    /// is not called and the same `Left(l)` is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::either::Either;
    ///
    /// let halve = |n: i32| {
    ///     if n % 2 == 0 { Either::Right(n / 2) } else { Either::Left(format!("{n} is odd")) }
    /// };
    ///
    /// assert_eq!(Either::Right(8).flat_map(halve), Either::Right(4));
    /// assert_eq!(Either::Right(3).flat_map(halve), Either::Left("3 is odd".to_string()));
    /// ```
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Alias for [`Either::flat_map`].
    #[inline]
    pub fn and_then<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        self.flat_map(function)
    }

    /// Chains a computation on the left value; the dual of [`Either::flat_map`].
    #[inline]
    pub fn or_else<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Runs `function` on the right value for its side effect and returns
    /// `self` unchanged.
    #[inline]
    #[must_use]
    pub fn tap<F>(self, function: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Self::Right(value) = &self {
            function(value);
        }
        self
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the `Either` by applying exactly one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::either::Either;
    ///
    /// let value: Either<i32, String> = Either::Left(42);
    /// assert_eq!(value.fold(|x| x.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the sides: `Left(x)` becomes `Right(x)` and vice versa.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the left value.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` value.
    #[inline]
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Returns the right value.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` value.
    #[inline]
    pub fn unwrap_right(self) -> R {
        match self {
            Self::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Self::Right(value) => value,
        }
    }

    /// Returns the right value or `default`.
    #[inline]
    pub fn right_or(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    /// Returns the right value or computes one from the left value.
    #[inline]
    pub fn right_or_else<F>(self, function: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Splits into a pair of `Option`s, exactly one of which is `Some`.
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        match self {
            Self::Left(value) => (Some(value), None),
            Self::Right(value) => (None, Some(value)),
        }
    }

    /// Converts to a `Result`: `Right` becomes `Ok`, `Left` becomes `Err`.
    ///
    /// # Errors
    ///
    /// Returns `Err(l)` if this is `Left(l)`.
    #[inline]
    pub fn to_result(self) -> Result<R, L> {
        self.into()
    }

    /// Builds an `Either` from a `Result`: `Ok` becomes `Right`, `Err`
    /// becomes `Left`.
    #[inline]
    pub fn from_result(result: Result<R, L>) -> Self {
        result.into()
    }
}

impl<L: Default, R> Either<L, R> {
    /// Returns the left value, or `L::default()` for a `Right`.
    #[inline]
    pub fn left_or_default(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => L::default(),
        }
    }
}

impl<L, R: Default> Either<L, R> {
    /// Returns the right value, or `R::default()` for a `Left`.
    #[inline]
    pub fn right_or_default(self) -> R {
        match self {
            Self::Left(_) => R::default(),
            Self::Right(value) => value,
        }
    }
}

impl<T> Either<T, T> {
    /// Returns the value from whichever side holds it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::either::Either;
    ///
    /// let value: Either<i32, i32> = Either::Left(3);
    /// assert_eq!(value.into_inner(), 3);
    /// ```
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}
