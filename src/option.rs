//! Option extensions and nullable conversion.
//!
//! `Option<T>` behaves as `Result<T, ()>`: `None` propagates through `map`,
//! `and_then`, `zip`, `filter` and `flatten` exactly like `Err` does, and
//! `zip` is left-biased. Those operations are the standard ones;
//! [`OptionExt`] adds `match_with`, `contains`, `tap` and `to_validation`.
//!
//! [`from_nullable`] turns a value that uses an in-band "absent" marker into
//! an `Option`.
//!
//! # Examples
//!
//! ```rust
//! use fallible::option::{from_nullable, none, some, OptionExt};
//!
//! assert!(some(3).contains(&3));
//! assert!(!none::<i32>().contains(&3));
//!
//! let pointer: *const u8 = std::ptr::null();
//! assert!(from_nullable(pointer).is_none());
//! ```

use crate::validation::Validation;

/// Creates a present value.
#[inline]
pub const fn some<T>(value: T) -> Option<T> {
    Some(value)
}

/// Creates an absent value.
#[inline]
pub const fn none<T>() -> Option<T> {
    None
}

/// A value with an in-band "absent" marker.
pub trait Nullable {
    /// The value type once the absent marker is ruled out.
    type Value;

    /// Returns `None` for the absent marker, `Some` otherwise.
    fn into_option(self) -> Option<Self::Value>;
}

impl<T> Nullable for Option<T> {
    type Value = T;

    #[inline]
    fn into_option(self) -> Option<T> {
        self
    }
}

impl<T> Nullable for *const T {
    type Value = Self;

    #[inline]
    fn into_option(self) -> Option<Self> {
        if self.is_null() { None } else { Some(self) }
    }
}

impl<T> Nullable for *mut T {
    type Value = Self;

    #[inline]
    fn into_option(self) -> Option<Self> {
        if self.is_null() { None } else { Some(self) }
    }
}

/// Converts a nullable value into an `Option`.
///
/// Returns `None` exactly when `value` is its type's absent marker.
///
/// # Examples
///
/// ```rust
/// use fallible::option::from_nullable;
///
/// let mut slot = 5_u32;
/// let pointer: *mut u32 = &mut slot;
/// assert_eq!(from_nullable(pointer), Some(pointer));
/// assert_eq!(from_nullable(None::<u32>), None);
/// ```
#[inline]
pub fn from_nullable<N: Nullable>(value: N) -> Option<N::Value> {
    value.into_option()
}

/// Extension methods for `Option`.
pub trait OptionExt<T>: Sized {
    /// Runs exactly one of the two functions and returns its value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::option::OptionExt;
    ///
    /// let greeting = Some("Ada").match_with(|name| format!("hello {name}"), || "hello".to_string());
    /// assert_eq!(greeting, "hello Ada");
    /// ```
    fn match_with<R, F, G>(self, on_some: F, on_none: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce() -> R;

    /// Returns `true` if this is `Some` holding a value equal to `value`.
    fn contains<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>;

    /// Calls `function` with the present value and returns `self` unchanged.
    #[must_use]
    fn tap<F>(self, function: F) -> Self
    where
        F: FnOnce(&T);

    /// Lifts into a [`Validation`], using `error` for `None`.
    fn to_validation<E>(self, error: E) -> Validation<T, E>;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn match_with<R, F, G>(self, on_some: F, on_none: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce() -> R,
    {
        match self {
            Some(value) => on_some(value),
            None => on_none(),
        }
    }

    #[inline]
    fn contains<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        self.as_ref().is_some_and(|inner| inner == value)
    }

    #[inline]
    fn tap<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self {
            function(value);
        }
        self
    }

    #[inline]
    fn to_validation<E>(self, error: E) -> Validation<T, E> {
        Validation::from_option(self, error)
    }
}
