//! Lazy, re-traversable sequences.
//!
//! A sequence is a recipe for producing elements, not a materialized
//! collection. Building `of(..).map(f).filter(g)` nests three adapters and
//! calls neither `f` nor `g`. Elements are pulled only by the terminal
//! operations of [`Sequence`], and only as many as they need: `first` pulls a
//! single element through the whole chain.
//!
//! - [`Iterable`]: sources that hand out fresh cursors
//! - [`Sequence`]: combinators and terminal operations
//! - Sources: [`FromIterable`], [`FromArrayLike`], [`SingleUse`], [`Empty`]
//! - Adapters: [`Mapped`], [`Filtered`], [`Zipped`], [`Boxed`]
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::sequence::{self, Sequence};
//!
//! let names = sequence::of(["ada", "grace", "alan", "barbara"]);
//! let lengths = sequence::from(&names)
//!     .filter(|name, _| name.starts_with('a'))
//!     .map(|name, _| name.len());
//!
//! assert_eq!(lengths.to_vec(), vec![3, 4]);
//!
//! let ranked = sequence::from(&names).zip(sequence::from(1..));
//! assert_eq!(ranked.first(), Some(("ada", 1)));
//! ```
//!
//! ## Single-use sources
//!
//! ```rust
//! use lazyseq::sequence::{self, Sequence};
//!
//! let restartable = sequence::from_array_like(vec![1, 2]);
//! assert_eq!(restartable.to_vec(), restartable.to_vec());
//!
//! let one_shot = sequence::from_iterator(vec![1, 2]);
//! assert_eq!(one_shot.to_vec(), vec![1, 2]);
//! assert_eq!(one_shot.to_vec(), Vec::<i32>::new());
//! ```

mod array_like;
mod boxed;
mod filter;
mod iterable;
mod map;
mod source;
mod traits;
mod zip;

use std::collections::HashMap;
use std::hash::Hash;

pub use array_like::{ArrayLike, ArrayLikeIter, FromArrayLike, IndexFn};
pub use boxed::Boxed;
pub use filter::{Filtered, FilteredIter};
pub use iterable::Iterable;
pub use map::{Mapped, MappedIter};
pub use source::{Empty, FromIterable, SingleUse, SingleUseIter};
pub use traits::Sequence;
pub use zip::{ZipSources, Zipped, ZippedIter};

/// Wraps any [`Iterable`] into a sequence.
///
/// Sequences are iterable themselves, so wrapping one again produces a
/// sequence with the same elements.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{self, Sequence};
/// use std::collections::BTreeMap;
///
/// let scores = BTreeMap::from([("a", 1), ("b", 2)]);
/// assert_eq!(sequence::from(&scores).to_vec(), vec![("a", 1), ("b", 2)]);
/// assert_eq!(sequence::from("hi").to_vec(), vec!['h', 'i']);
/// ```
#[inline]
pub const fn from<I: Iterable>(source: I) -> FromIterable<I> {
    FromIterable::new(source)
}

/// Wraps a one-shot iterator into a sequence.
///
/// Every traversal pulls from the same underlying iterator, so a second
/// traversal only sees what the first one left.
#[inline]
pub fn from_iterator<I: IntoIterator>(iterator: I) -> FromIterable<SingleUse<I::IntoIter>> {
    FromIterable::new(SingleUse::new(iterator.into_iter()))
}

/// Wraps an indexable, length-bearing source into a sequence.
///
/// Each traversal visits the indices `0..length` from the start.
#[inline]
pub const fn from_array_like<A: ArrayLike>(source: A) -> FromArrayLike<A> {
    FromArrayLike::new(source)
}

/// Creates a sequence of `length` elements computed by `accessor`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{self, Sequence};
///
/// let powers = sequence::from_fn(5, |exponent| 2_u32.pow(exponent as u32));
/// assert_eq!(powers.to_vec(), vec![1, 2, 4, 8, 16]);
/// ```
#[inline]
pub const fn from_fn<T, F>(length: usize, accessor: F) -> FromArrayLike<IndexFn<F>>
where
    F: Fn(usize) -> T,
{
    FromArrayLike::new(IndexFn::new(length, accessor))
}

/// Creates a sequence over the given elements.
///
/// See also the [`seq!`](crate::seq) macro.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{self, Sequence};
///
/// assert_eq!(sequence::of(["a", "b"]).to_vec(), vec!["a", "b"]);
/// assert_eq!(sequence::of(Vec::<i32>::new()).first(), None);
/// ```
#[inline]
pub fn of<T: Clone>(elements: impl Into<Vec<T>>) -> FromIterable<Vec<T>> {
    FromIterable::new(elements.into())
}

/// Returns the empty sequence.
#[inline]
pub const fn empty<T>() -> Empty<T> {
    Empty::new()
}

/// Collects a sequence of pairs into a `HashMap`.
///
/// Module-level form of [`Sequence::to_map`]; later keys win.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{self, Sequence};
/// use std::collections::HashMap;
///
/// let letters = sequence::of(["a", "b"]).map(|letter, index| (letter, index + 1));
/// assert_eq!(sequence::to_map(&letters), HashMap::from([("a", 1), ("b", 2)]));
/// ```
#[inline]
pub fn to_map<S, K, V>(sequence: &S) -> HashMap<K, V>
where
    S: Sequence<Item = (K, V)> + ?Sized,
    K: Eq + Hash,
{
    sequence.to_map()
}

/// Creates a sequence over the listed elements.
///
/// `seq![a, b, c]` is shorthand for `sequence::of(vec![a, b, c])`;
/// `seq![]` is an empty sequence.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(seq![1, 2, 3].map(|n, _| n * n).to_vec(), vec![1, 4, 9]);
///
/// let nothing: Vec<u8> = seq![].to_vec();
/// assert!(nothing.is_empty());
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::sequence::of(::std::vec::Vec::new())
    };
    ($($element:expr),+ $(,)?) => {
        $crate::sequence::of(::std::vec![$($element),+])
    };
}
