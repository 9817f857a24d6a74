//! The mapping adapter.

use std::fmt;
use std::iter::FusedIterator;

use super::iterable::Iterable;
use super::traits::Sequence;

/// A sequence that transforms each element of its upstream.
///
/// Created by [`Sequence::map`].
#[derive(Clone)]
pub struct Mapped<S, F> {
    upstream: S,
    transform: F,
}

impl<S, F> Mapped<S, F> {
    #[inline]
    pub(crate) const fn new(upstream: S, transform: F) -> Self {
        Self {
            upstream,
            transform,
        }
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Mapped<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Mapped")
            .field("upstream", &self.upstream)
            .finish_non_exhaustive()
    }
}

impl<S, F, R> Iterable for Mapped<S, F>
where
    S: Iterable,
    F: Fn(S::Item, usize) -> R,
{
    type Item = R;
    type Iter<'a>
        = MappedIter<'a, S::Iter<'a>, F>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Iter<'_> {
        MappedIter {
            upstream: self.upstream.iterate(),
            transform: &self.transform,
            index: 0,
        }
    }
}

impl<S, F, R> Sequence for Mapped<S, F>
where
    S: Sequence,
    F: Fn(S::Item, usize) -> R,
{
}

impl<'a, S, F, R> IntoIterator for &'a Mapped<S, F>
where
    S: Iterable,
    F: Fn(S::Item, usize) -> R,
{
    type Item = R;
    type IntoIter = MappedIter<'a, S::Iter<'a>, F>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iterate()
    }
}

/// The cursor of a [`Mapped`] traversal.
pub struct MappedIter<'a, I, F> {
    upstream: I,
    transform: &'a F,
    index: usize,
}

impl<I, F, R> Iterator for MappedIter<'_, I, F>
where
    I: Iterator,
    F: Fn(I::Item, usize) -> R,
{
    type Item = R;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let element = self.upstream.next()?;
        let index = self.index;
        self.index += 1;
        Some((self.transform)(element, index))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.upstream.size_hint()
    }
}

impl<I, F, R> FusedIterator for MappedIter<'_, I, F>
where
    I: FusedIterator,
    F: Fn(I::Item, usize) -> R,
{
}

static_assertions::assert_impl_all!(
    Mapped<super::FromIterable<Vec<i32>>, fn(i32, usize) -> i64>: Send, Sync, Clone
);
