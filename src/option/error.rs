//! Error type for extracting a value from an absent `Maybe`.

use std::fmt;

/// Returned by [`Maybe::try_unwrap`](super::Maybe::try_unwrap) when the
/// `Maybe` holds no value.
///
/// # Examples
///
/// ```rust
/// use lazyseq::option::{Maybe, NoneValueError};
///
/// let absent: Maybe<i32> = Maybe::none();
/// assert_eq!(absent.try_unwrap(), Err(NoneValueError));
/// assert_eq!(
///     format!("{}", NoneValueError),
///     "called `Maybe::try_unwrap` on a `None` value"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoneValueError;

impl fmt::Display for NoneValueError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("called `Maybe::try_unwrap` on a `None` value")
    }
}

impl std::error::Error for NoneValueError {}
