//! Tuple form of `combine`: heterogeneous results sharing one error type.

/// A tuple of `Result`s sharing the error type `E`.
///
/// Implemented for tuples of arity 2 through 8.
pub trait CombineTuple<E> {
    /// The tuple of success values.
    type Output;

    /// Returns `Ok` with every success value, or the first `Err` by position.
    ///
    /// # Errors
    ///
    /// Returns the leftmost error.
    fn combine(self) -> Result<Self::Output, E>;
}

macro_rules! impl_combine_tuple {
    ($($value:ident: $type:ident),+) => {
        impl<Error, $($type),+> CombineTuple<Error> for ($(Result<$type, Error>,)+) {
            type Output = ($($type,)+);

            #[inline]
            fn combine(self) -> Result<Self::Output, Error> {
                let ($($value,)+) = self;
                Ok(($($value?,)+))
            }
        }
    };
}

impl_combine_tuple!(first: A, second: B);
impl_combine_tuple!(first: A, second: B, third: C);
impl_combine_tuple!(first: A, second: B, third: C, fourth: D);
impl_combine_tuple!(first: A, second: B, third: C, fourth: D, fifth: F);
impl_combine_tuple!(first: A, second: B, third: C, fourth: D, fifth: F, sixth: G);
impl_combine_tuple!(first: A, second: B, third: C, fourth: D, fifth: F, sixth: G, seventh: H);
impl_combine_tuple!(
    first: A,
    second: B,
    third: C,
    fourth: D,
    fifth: F,
    sixth: G,
    seventh: H,
    eighth: I
);

/// Combines a tuple of results into a result of a tuple.
///
/// Elements are inspected left to right and the first `Err` is returned.
///
/// # Errors
///
/// Returns the leftmost error.
///
/// # Examples
///
/// ```rust
/// use fallible::combinator::combine_tuple;
///
/// let parsed = combine_tuple((
///     "7".parse::<u8>().map_err(|e| e.to_string()),
///     Ok::<_, String>("seven"),
///     "7.5".parse::<f32>().map_err(|e| e.to_string()),
/// ));
/// assert_eq!(parsed, Ok((7, "seven", 7.5)));
///
/// let failed = combine_tuple((Ok::<i32, &str>(1), Err::<bool, _>("second"), Err::<char, _>("third")));
/// assert_eq!(failed, Err("second"));
/// ```
#[inline]
pub fn combine_tuple<E, T>(tuple: T) -> Result<T::Output, E>
where
    T: CombineTuple<E>,
{
    tuple.combine()
}
