//! Source adapters: sequences over raw data.
//!
//! - [`FromIterable`] wraps any [`Iterable`], including other sequences
//! - [`SingleUse`] turns a one-shot iterator into an [`Iterable`] whose
//!   traversals share one cursor
//! - [`Empty`] is the canonical empty sequence

use std::cell::{Cell, RefCell};
use std::fmt;
use std::iter::{Fuse, FusedIterator};
use std::marker::PhantomData;

use super::iterable::Iterable;
use super::traits::Sequence;

// =============================================================================
// FromIterable
// =============================================================================

/// A sequence over an arbitrary [`Iterable`] source.
///
/// Created by [`from`](super::from), [`from_iterator`](super::from_iterator)
/// and [`of`](super::of). Each traversal asks the source for a new cursor, so
/// the sequence restarts whenever the source does. Wrapping another sequence
/// passes its elements through unchanged.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{self, Sequence};
///
/// let inner = sequence::of([1, 2, 3]);
/// let outer = sequence::from(sequence::from(inner));
/// assert_eq!(outer.to_vec(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FromIterable<I> {
    source: I,
}

impl<I> FromIterable<I> {
    #[inline]
    pub(crate) const fn new(source: I) -> Self {
        Self { source }
    }

    /// Returns the wrapped source.
    #[inline]
    pub fn into_inner(self) -> I {
        self.source
    }
}

impl<I: Iterable> Iterable for FromIterable<I> {
    type Item = I::Item;
    type Iter<'a>
        = I::Iter<'a>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Iter<'_> {
        self.source.iterate()
    }
}

impl<I: Iterable> Sequence for FromIterable<I> {}

impl<'a, I: Iterable> IntoIterator for &'a FromIterable<I> {
    type Item = I::Item;
    type IntoIter = I::Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iterate()
    }
}

// =============================================================================
// SingleUse
// =============================================================================

/// An [`Iterable`] over a one-shot iterator.
///
/// All traversals pull from the same underlying cursor: the first traversal
/// sees every element, later ones only what earlier ones left behind. The
/// shared cursor lives in a `RefCell`, which makes this type `!Sync`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{self, Sequence};
///
/// let sequence = sequence::from_iterator(vec![1, 2, 3]);
/// assert_eq!(sequence.first(), Some(1));
/// assert_eq!(sequence.to_vec(), vec![2, 3]);
/// assert!(sequence.to_vec().is_empty());
/// ```
pub struct SingleUse<I> {
    cursor: RefCell<Fuse<I>>,
    traversals: Cell<usize>,
}

impl<I: Iterator> SingleUse<I> {
    /// Wraps `iterator`.
    #[inline]
    pub fn new(iterator: I) -> Self {
        Self {
            cursor: RefCell::new(iterator.fuse()),
            traversals: Cell::new(0),
        }
    }
}

impl<I> fmt::Debug for SingleUse<I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SingleUse")
            .field("traversals", &self.traversals.get())
            .finish_non_exhaustive()
    }
}

impl<I: Iterator> Iterable for SingleUse<I> {
    type Item = I::Item;
    type Iter<'a>
        = SingleUseIter<'a, I>
    where
        Self: 'a;

    fn iterate(&self) -> Self::Iter<'_> {
        let previous = self.traversals.replace(self.traversals.get() + 1);
        if previous > 0 {
            tracing::debug!(
                traversal = previous + 1,
                "re-traversing a single-use source, only remaining elements will be produced"
            );
        }
        SingleUseIter {
            cursor: &self.cursor,
        }
    }
}

/// The cursor of a [`SingleUse`] traversal.
#[derive(Debug)]
pub struct SingleUseIter<'a, I> {
    cursor: &'a RefCell<Fuse<I>>,
}

impl<I: Iterator> Iterator for SingleUseIter<'_, I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.borrow_mut().next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.borrow().size_hint()
    }
}

impl<I: Iterator> FusedIterator for SingleUseIter<'_, I> {}

static_assertions::assert_not_impl_any!(SingleUse<std::vec::IntoIter<i32>>: Sync);

// =============================================================================
// Empty
// =============================================================================

/// The empty sequence.
///
/// `Empty<T>` is zero-sized, so every empty sequence of a given element type
/// is the same value.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{self, Sequence};
///
/// let nothing = sequence::empty::<i32>();
/// assert_eq!(nothing.first(), None);
/// assert_eq!(nothing, sequence::empty());
/// ```
pub struct Empty<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T> Empty<T> {
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<T> Clone for Empty<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> PartialEq for Empty<T> {
    #[inline]
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for Empty<T> {}

impl<T> Default for Empty<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Empty")
    }
}

impl<T> Iterable for Empty<T> {
    type Item = T;
    type Iter<'a>
        = std::iter::Empty<T>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Iter<'_> {
        std::iter::empty()
    }
}

impl<T> Sequence for Empty<T> {}

static_assertions::const_assert_eq!(std::mem::size_of::<Empty<String>>(), 0);
