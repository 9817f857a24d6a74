//! An Option-like container for present or absent values.
//!
//! This module provides [`Maybe`], a two-variant sum type that stands in for
//! nullable values:
//!
//! - [`Maybe::Some`] holds exactly one value
//! - [`Maybe::None`] holds nothing and is interchangeable with every other `None`
//!
//! Every combinator returns a new `Maybe`; a value never changes variant
//! after construction.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::option::Maybe;
//!
//! let port = Maybe::from_nullable(Some("8080"))
//!     .flat_map(|text| Maybe::from_nullable(text.parse::<u16>().ok()))
//!     .unwrap_or(80);
//! assert_eq!(port, 8080);
//!
//! let missing: Maybe<&str> = Maybe::from_nullable(None);
//! assert_eq!(missing.map(str::len).unwrap_or(0), 0);
//! ```

mod error;
mod maybe;

pub use error::NoneValueError;
pub use maybe::Maybe;

/// Removes one level of nesting from a `Maybe<Maybe<T>>`.
///
/// Module-level form of [`Maybe::flatten`].
///
/// # Examples
///
/// ```rust
/// use lazyseq::option::{self, Maybe};
///
/// assert_eq!(option::flatten(Maybe::some(Maybe::some(4))), Maybe::some(4));
/// assert_eq!(option::flatten(Maybe::some(Maybe::<i32>::none())), Maybe::none());
/// ```
#[inline]
pub fn flatten<T>(nested: Maybe<Maybe<T>>) -> Maybe<T> {
    nested.flatten()
}
