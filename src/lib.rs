//! # fallible
//!
//! Explicit success and failure values for Rust.
//!
//! ## Overview
//!
//! Operations that can fail return a value describing either the success
//! value or the reason for failure, and these values compose without control
//! flow jumps:
//!
//! - **Result / Option extensions**: `match_with`, `tap`, `recover`, `zip`,
//!   `safe_unwrap` and friends on the standard types
//! - **Either**: a general two-variant sum type, right-biased
//! - **Validation**: like `Result`, but independent checks accumulate every
//!   error instead of stopping at the first
//! - **Combinators**: curried `chain` / `tap` / `recover` / `map_error`,
//!   fail-fast `collect` and `combine_tuple`, and the [`pipeline!`] macro
//! - **Async results**: the same vocabulary lifted over futures of `Result`,
//!   plus `all` / `any`, timeouts, retry and an async [`Pipeline`]
//!
//! Failure is a value, never a panic or a log line. The only functions that
//! panic are the ones with a `# Panics` section: the unwraps on `Either` and
//! `Validation`, and the timer-driven async operations (`with_timeout`,
//! `retry`, `retry_with_policy`) when no tokio runtime is available.
//!
//! ## Feature Flags
//!
//! - `async` (default): the [`async_result`] module, built on `tokio` and `futures`
//! - `tracing` (default): `debug` events from retry and timeout
//! - `serde`: `Serialize` / `Deserialize` for `Either`, `Validation`,
//!   `ErrorList` and `RetryPolicy`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fallible::prelude::*;
//!
//! fn parse_port(raw: &str) -> Result<u16, String> {
//!     raw.parse().map_err(|_| format!("not a port: {raw}"))
//! }
//!
//! let port = parse_port("8080").match_with(|p| p.to_string(), |e| e);
//! assert_eq!(port, "8080");
//!
//! let checked: Validation<(u16, u16), String> =
//!     Validation::from(parse_port("x")).zip(Validation::from(parse_port("y")));
//! assert_eq!(checked.errors().map(ErrorList::len), Some(2));
//! ```
//!
//! [`Pipeline`]: crate::async_result::Pipeline

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

#[cfg(feature = "tracing")]
macro_rules! debug_event {
    ($($arguments:tt)*) => {
        tracing::debug!($($arguments)*)
    };
}

#[cfg(not(feature = "tracing"))]
#[allow(unused_macros)]
macro_rules! debug_event {
    ($($arguments:tt)*) => {};
}

/// Prelude module for convenient imports.
///
/// Re-exports the types, traits and constructors used in everyday code.
///
/// # Usage
///
/// ```rust
/// use fallible::prelude::*;
/// ```
pub mod prelude {
    pub use crate::either::Either;
    pub use crate::error::{Error, Rejected};
    pub use crate::option::{Nullable, OptionExt, from_nullable, none, some};
    pub use crate::result::{Fallible, IntoValue, ResultExt, err, ok, try_catch};
    pub use crate::validation::{ErrorList, Validation};

    pub use crate::combinator::{CombineTuple, combine_tuple};
    pub use crate::pipeline;

    #[cfg(feature = "async")]
    pub use crate::async_result::{AsyncResultExt, Pipeline, RetryPolicy};
}

pub mod combinator;
pub mod either;
pub mod error;
pub mod option;
pub mod result;
pub mod validation;

#[cfg(feature = "async")]
pub mod async_result;

pub use either::Either;
pub use error::{Error, Rejected};
pub use validation::{ErrorList, Validation};
