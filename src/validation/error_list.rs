//! Non-empty, ordered error sequence carried by `Validation::Invalid`.

use smallvec::SmallVec;

/// Inline capacity before the list spills to the heap.
///
/// Most invalid values carry one or two errors.
const INLINE_ERRORS: usize = 2;

/// A non-empty, ordered sequence of errors.
///
/// Construction goes through [`ErrorList::single`] or the fallible
/// [`TryFrom<Vec<E>>`] conversion, so an `ErrorList` always holds at least one
/// error. Appending preserves order, which is what makes accumulated
/// validation errors reproducible.
///
/// # Examples
///
/// ```rust
/// use fallible::validation::ErrorList;
///
/// let mut errors = ErrorList::single("name is empty");
/// errors.append(ErrorList::single("age is negative"));
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.first(), &"name is empty");
/// assert_eq!(errors.into_vec(), vec!["name is empty", "age is negative"]);
///
/// assert!(ErrorList::<&str>::try_from(Vec::new()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorList<E>(SmallVec<[E; INLINE_ERRORS]>);

/// Returned when building an [`ErrorList`] from an empty sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("an error list must contain at least one error")]
pub struct EmptyErrorList;

#[allow(clippy::len_without_is_empty)]
impl<E> ErrorList<E> {
    /// Creates a list holding exactly one error.
    #[must_use]
    pub fn single(error: E) -> Self {
        let mut errors = SmallVec::new();
        errors.push(error);
        Self(errors)
    }

    /// Number of errors; always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The earliest error.
    #[must_use]
    pub fn first(&self) -> &E {
        // Non-empty by construction.
        &self.0[0]
    }

    /// Iterates over the errors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.0.iter()
    }

    /// Borrows the errors as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[E] {
        &self.0
    }

    /// Adds a single error at the end.
    pub fn push(&mut self, error: E) {
        self.0.push(error);
    }

    /// Moves every error of `other` to the end of this list, keeping order.
    pub fn append(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Returns this list followed by `other`.
    #[must_use]
    pub fn concat(mut self, other: Self) -> Self {
        self.append(other);
        self
    }

    /// Applies `function` to every error, keeping order.
    #[must_use]
    pub fn map<F, G>(self, function: G) -> ErrorList<F>
    where
        G: FnMut(E) -> F,
    {
        ErrorList(self.0.into_iter().map(function).collect())
    }

    /// Converts into a `Vec`, keeping order.
    #[must_use]
    pub fn into_vec(self) -> Vec<E> {
        self.0.into_vec()
    }
}

impl<E> TryFrom<Vec<E>> for ErrorList<E> {
    type Error = EmptyErrorList;

    fn try_from(errors: Vec<E>) -> Result<Self, Self::Error> {
        if errors.is_empty() {
            Err(EmptyErrorList)
        } else {
            Ok(Self(SmallVec::from_vec(errors)))
        }
    }
}

impl<E> From<ErrorList<E>> for Vec<E> {
    fn from(errors: ErrorList<E>) -> Self {
        errors.into_vec()
    }
}

impl<E> IntoIterator for ErrorList<E> {
    type Item = E;
    type IntoIter = smallvec::IntoIter<[E; INLINE_ERRORS]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a ErrorList<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<E: PartialEq> PartialEq<Vec<E>> for ErrorList<E> {
    fn eq(&self, other: &Vec<E>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

#[cfg(feature = "serde")]
impl<E: serde::Serialize> serde::Serialize for ErrorList<E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, E: serde::Deserialize<'de>> serde::Deserialize<'de> for ErrorList<E> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let errors = Vec::<E>::deserialize(deserializer)?;
        Self::try_from(errors).map_err(serde::de::Error::custom)
    }
}
