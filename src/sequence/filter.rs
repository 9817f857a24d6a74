//! The filtering adapter.

use std::fmt;
use std::iter::FusedIterator;

use super::iterable::Iterable;
use super::traits::Sequence;

/// A sequence that keeps the upstream elements accepted by a predicate.
///
/// Created by [`Sequence::filter`]. The predicate sees every upstream element
/// pulled, together with its upstream position, and runs exactly once per
/// element.
#[derive(Clone)]
pub struct Filtered<S, P> {
    upstream: S,
    predicate: P,
}

impl<S, P> Filtered<S, P> {
    #[inline]
    pub(crate) const fn new(upstream: S, predicate: P) -> Self {
        Self {
            upstream,
            predicate,
        }
    }
}

impl<S: fmt::Debug, P> fmt::Debug for Filtered<S, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Filtered")
            .field("upstream", &self.upstream)
            .finish_non_exhaustive()
    }
}

impl<S, P> Iterable for Filtered<S, P>
where
    S: Iterable,
    P: Fn(&S::Item, usize) -> bool,
{
    type Item = S::Item;
    type Iter<'a>
        = FilteredIter<'a, S::Iter<'a>, P>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Iter<'_> {
        FilteredIter {
            upstream: self.upstream.iterate(),
            predicate: &self.predicate,
            examined: 0,
        }
    }
}

impl<S, P> Sequence for Filtered<S, P>
where
    S: Sequence,
    P: Fn(&S::Item, usize) -> bool,
{
}

impl<'a, S, P> IntoIterator for &'a Filtered<S, P>
where
    S: Iterable,
    P: Fn(&S::Item, usize) -> bool,
{
    type Item = S::Item;
    type IntoIter = FilteredIter<'a, S::Iter<'a>, P>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iterate()
    }
}

/// The cursor of a [`Filtered`] traversal.
pub struct FilteredIter<'a, I, P> {
    upstream: I,
    predicate: &'a P,
    examined: usize,
}

impl<I, P> Iterator for FilteredIter<'_, I, P>
where
    I: Iterator,
    P: Fn(&I::Item, usize) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        for element in self.upstream.by_ref() {
            let index = self.examined;
            self.examined += 1;
            if (self.predicate)(&element, index) {
                return Some(element);
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.upstream.size_hint().1)
    }
}

impl<I, P> FusedIterator for FilteredIter<'_, I, P>
where
    I: FusedIterator,
    P: Fn(&I::Item, usize) -> bool,
{
}
