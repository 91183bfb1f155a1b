//! Built-in error types.
//!
//! The combinators in this crate are parametric over the error type and never
//! interpret it. The types here cover the few places where the crate itself
//! has to produce an error:
//!
//! - [`Error`]: the default error of [`Fallible`](crate::result::Fallible)
//!   when the caller does not pick one
//! - [`Rejected`]: a computation panicked and the panic was captured as a value
//!
//! # Examples
//!
//! ```rust
//! use fallible::error::Error;
//! use fallible::result::Fallible;
//!
//! fn parse_port(input: &str) -> Fallible<u16> {
//!     input
//!         .parse()
//!         .map_err(|_| Error::new(format!("invalid port: {input}")))
//! }
//!
//! assert_eq!(parse_port("8080"), Ok(8080));
//! assert_eq!(parse_port("eighty").unwrap_err().message(), "invalid port: eighty");
//! ```

use std::any::Any;
use std::borrow::Cow;

/// A generic failure description.
///
/// Used as the default error type of [`Fallible`](crate::result::Fallible).
/// Carries a human-readable message and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    message: Cow<'static, str>,
}

impl Error {
    /// Creates an error with the given message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallible::error::Error;
    ///
    /// let error = Error::new("connection refused");
    /// assert_eq!(error.to_string(), "connection refused");
    /// ```
    #[must_use]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&'static str> for Error {
    fn from(message: &'static str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// A computation panicked instead of producing a value.
///
/// Produced by [`try_catch`](crate::result::try_catch) and, with the `async`
/// feature, by `async_result::from_future`. The panic payload is reduced to
/// its message; payloads that are neither `&str` nor `String` are reported
/// with a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("computation panicked: {message}")]
pub struct Rejected {
    message: String,
}

impl Rejected {
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => payload.downcast_ref::<&str>().map_or_else(
                || String::from("non-string panic payload"),
                |message| (*message).to_string(),
            ),
        };
        Self { message }
    }

    /// Returns the panic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
