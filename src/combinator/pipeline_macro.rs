//! The `pipeline!` macro for short-circuiting step composition.

/// Builds a function that threads a value through fallible steps in order.
///
/// `pipeline!(f, g, h)` is a closure equivalent to
/// `|value| f(value).and_then(g).and_then(h)`. Each step receives the
/// unwrapped success value of the previous one. As soon as a step returns
/// `Err`, the remaining steps are skipped and that error is returned.
///
/// For steps that are asynchronous, use
/// [`Pipeline`](crate::async_result::Pipeline).
///
/// # Syntax
///
/// - `pipeline!(f)` - Returns `|value| f(value)`
/// - `pipeline!(f, g, ...)` - Returns `|value| f(value).and_then(g).and_then(...)`
///
/// # Examples
///
/// ```rust
/// use fallible::pipeline;
///
/// let add_ten = |x: i32| Ok::<_, String>(x + 10);
/// let at_most = |x: i32| if x <= 20 { Ok(x) } else { Err(format!("{x} is too big")) };
/// let double = |x: i32| Ok(x * 2);
///
/// let run = pipeline!(add_ten, at_most, double);
/// assert_eq!(run(5), Ok(30));
/// assert_eq!(run(15), Err("25 is too big".to_string()));
/// ```
#[macro_export]
macro_rules! pipeline {
    ($first:expr $(, $remaining_steps:expr)* $(,)?) => {
        move |value| {
            let result = ($first)(value);
            $(
                let result = result.and_then(|value| ($remaining_steps)(value));
            )*
            result
        }
    };
}
