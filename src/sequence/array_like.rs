//! Sequences over indexable, length-bearing sources.
//!
//! An [`ArrayLike`] only needs to report a length and produce the element at
//! an index; it does not have to be iterable. [`FromArrayLike`] walks the
//! indices `0..length` and restarts at zero on every traversal.

use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;
use std::rc::Rc;

use super::iterable::Iterable;
use super::traits::Sequence;

/// An indexable source with a length.
///
/// `at` is only called with indices below the length reported just before.
/// A source whose `at` panics for such an index propagates that panic to the
/// caller of the terminal operation.
pub trait ArrayLike {
    /// The element type.
    type Item;

    /// The current number of elements.
    fn length(&self) -> usize;

    /// The element at `index`.
    fn at(&self, index: usize) -> Self::Item;
}

impl<T: Clone> ArrayLike for [T] {
    type Item = T;

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn at(&self, index: usize) -> T {
        self[index].clone()
    }
}

impl<T: Clone, const N: usize> ArrayLike for [T; N] {
    type Item = T;

    #[inline]
    fn length(&self) -> usize {
        N
    }

    #[inline]
    fn at(&self, index: usize) -> T {
        self[index].clone()
    }
}

impl<T: Clone> ArrayLike for Vec<T> {
    type Item = T;

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn at(&self, index: usize) -> T {
        self[index].clone()
    }
}

impl<T: Clone> ArrayLike for VecDeque<T> {
    type Item = T;

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn at(&self, index: usize) -> T {
        self[index].clone()
    }
}

impl<A: ArrayLike + ?Sized> ArrayLike for &A {
    type Item = A::Item;

    #[inline]
    fn length(&self) -> usize {
        (**self).length()
    }

    #[inline]
    fn at(&self, index: usize) -> Self::Item {
        (**self).at(index)
    }
}

impl<A: ArrayLike + ?Sized> ArrayLike for Rc<A> {
    type Item = A::Item;

    #[inline]
    fn length(&self) -> usize {
        (**self).length()
    }

    #[inline]
    fn at(&self, index: usize) -> Self::Item {
        (**self).at(index)
    }
}

/// An [`ArrayLike`] defined by a length and an accessor function.
///
/// Created by [`from_fn`](super::from_fn).
#[derive(Clone)]
pub struct IndexFn<F> {
    length: usize,
    accessor: F,
}

impl<F> IndexFn<F> {
    /// Creates a source of `length` elements produced by `accessor`.
    #[inline]
    pub const fn new(length: usize, accessor: F) -> Self {
        Self { length, accessor }
    }
}

impl<F> fmt::Debug for IndexFn<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("IndexFn")
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

impl<T, F> ArrayLike for IndexFn<F>
where
    F: Fn(usize) -> T,
{
    type Item = T;

    #[inline]
    fn length(&self) -> usize {
        self.length
    }

    #[inline]
    fn at(&self, index: usize) -> T {
        (self.accessor)(index)
    }
}

/// A sequence over an [`ArrayLike`] source.
///
/// Created by [`from_array_like`](super::from_array_like) and
/// [`from_fn`](super::from_fn).
#[derive(Debug, Clone)]
pub struct FromArrayLike<A> {
    source: A,
}

impl<A> FromArrayLike<A> {
    #[inline]
    pub(crate) const fn new(source: A) -> Self {
        Self { source }
    }

    /// Returns the wrapped source.
    #[inline]
    pub fn into_inner(self) -> A {
        self.source
    }
}

impl<A: ArrayLike> Iterable for FromArrayLike<A> {
    type Item = A::Item;
    type Iter<'a>
        = ArrayLikeIter<'a, A>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Iter<'_> {
        ArrayLikeIter {
            source: &self.source,
            index: 0,
            finished: false,
        }
    }
}

impl<A: ArrayLike> Sequence for FromArrayLike<A> {}

impl<'a, A: ArrayLike> IntoIterator for &'a FromArrayLike<A> {
    type Item = A::Item;
    type IntoIter = ArrayLikeIter<'a, A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iterate()
    }
}

/// The cursor of a [`FromArrayLike`] traversal.
///
/// The source's length is read again before every step.
pub struct ArrayLikeIter<'a, A: ?Sized> {
    source: &'a A,
    index: usize,
    finished: bool,
}

impl<A: ArrayLike + ?Sized> Iterator for ArrayLikeIter<'_, A> {
    type Item = A::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.index >= self.source.length() {
            self.finished = true;
            return None;
        }
        let element = self.source.at(self.index);
        self.index += 1;
        Some(element)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        let remaining = self.source.length().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<A: ArrayLike + ?Sized> FusedIterator for ArrayLikeIter<'_, A> {}
