//! The zipping adapter.
//!
//! [`Zipped`] advances one cursor per participant in lockstep and yields flat
//! tuples. It stops at the shortest participant:
//!
//! 1. Before each round, if any participant's cursor reports an upper
//!    `size_hint` of zero, the zip ends without pulling from anyone.
//! 2. Otherwise the participants are pulled in order, head first. The round
//!    ends at the first participant that yields nothing, and the participants
//!    after it are not pulled.
//!
//! Once ended, the cursor never pulls again.

use std::iter::FusedIterator;

use super::iterable::Iterable;
use super::traits::Sequence;

#[inline]
fn is_exhausted<I: Iterator>(cursor: &I) -> bool {
    cursor.size_hint().1 == Some(0)
}

#[inline]
fn shortest(
    (lower, upper): (usize, Option<usize>),
    (other_lower, other_upper): (usize, Option<usize>),
) -> (usize, Option<usize>) {
    let upper = match (upper, other_upper) {
        (Some(upper), Some(other_upper)) => Some(upper.min(other_upper)),
        (Some(upper), None) | (None, Some(upper)) => Some(upper),
        (None, None) => None,
    };
    (lower.min(other_lower), upper)
}

/// A tuple of sources that can be zipped behind a head sequence.
///
/// Implemented for tuples of one to six [`Iterable`]s.
pub trait ZipSources {
    /// The flat tuple produced for a head element of type `H`.
    type Zipped<H>;

    /// One cursor per participant.
    type Cursors<'a>
    where
        Self: 'a;

    /// Starts a traversal of every participant.
    fn cursors(&self) -> Self::Cursors<'_>;

    /// Returns `true` if some cursor can prove it has nothing left.
    fn any_exhausted(cursors: &Self::Cursors<'_>) -> bool;

    /// Pulls one element from each cursor in order, stopping at the first
    /// exhausted one.
    fn pull<H>(head: H, cursors: &mut Self::Cursors<'_>) -> Option<Self::Zipped<H>>;

    /// The combined `size_hint` of the cursors.
    fn size_hint(cursors: &Self::Cursors<'_>) -> (usize, Option<usize>);
}

macro_rules! impl_zip_sources {
    ($($source:ident . $index:tt),+) => {
        impl<$($source),+> ZipSources for ($($source,)+)
        where
            $($source: Iterable,)+
        {
            type Zipped<H> = (H, $($source::Item,)+);
            type Cursors<'a>
                = ($($source::Iter<'a>,)+)
            where
                Self: 'a;

            #[inline]
            fn cursors(&self) -> Self::Cursors<'_> {
                ($(self.$index.iterate(),)+)
            }

            #[inline]
            fn any_exhausted(cursors: &Self::Cursors<'_>) -> bool {
                $(is_exhausted(&cursors.$index))||+
            }

            #[inline]
            fn pull<H>(head: H, cursors: &mut Self::Cursors<'_>) -> Option<Self::Zipped<H>> {
                Some((head, $(cursors.$index.next()?,)+))
            }

            #[inline]
            fn size_hint(cursors: &Self::Cursors<'_>) -> (usize, Option<usize>) {
                let combined = (usize::MAX, None);
                $(let combined = shortest(combined, cursors.$index.size_hint());)+
                combined
            }
        }
    };
}

impl_zip_sources!(A.0);
impl_zip_sources!(A.0, B.1);
impl_zip_sources!(A.0, B.1, C.2);
impl_zip_sources!(A.0, B.1, C.2, D.3);
impl_zip_sources!(A.0, B.1, C.2, D.3, E.4);
impl_zip_sources!(A.0, B.1, C.2, D.3, E.4, F.5);

/// A sequence of tuples drawn in lockstep from several sequences.
///
/// Created by [`Sequence::zip`] and [`Sequence::zip_all`].
#[derive(Debug, Clone)]
pub struct Zipped<S, Z> {
    head: S,
    others: Z,
}

impl<S, Z> Zipped<S, Z> {
    #[inline]
    pub(crate) const fn new(head: S, others: Z) -> Self {
        Self { head, others }
    }
}

impl<S, Z> Iterable for Zipped<S, Z>
where
    S: Iterable,
    Z: ZipSources,
{
    type Item = Z::Zipped<S::Item>;
    type Iter<'a>
        = ZippedIter<'a, S, Z>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Iter<'_> {
        ZippedIter {
            head: self.head.iterate(),
            others: self.others.cursors(),
            finished: false,
        }
    }
}

impl<S, Z> Sequence for Zipped<S, Z>
where
    S: Sequence,
    Z: ZipSources,
{
}

impl<'a, S, Z> IntoIterator for &'a Zipped<S, Z>
where
    S: Iterable,
    Z: ZipSources,
{
    type Item = Z::Zipped<S::Item>;
    type IntoIter = ZippedIter<'a, S, Z>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iterate()
    }
}

/// The cursor of a [`Zipped`] traversal.
pub struct ZippedIter<'a, S, Z>
where
    S: Iterable + 'a,
    Z: ZipSources + 'a,
{
    head: S::Iter<'a>,
    others: Z::Cursors<'a>,
    finished: bool,
}

impl<'a, S, Z> Iterator for ZippedIter<'a, S, Z>
where
    S: Iterable + 'a,
    Z: ZipSources + 'a,
{
    type Item = Z::Zipped<S::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if is_exhausted(&self.head) || Z::any_exhausted(&self.others) {
            self.finished = true;
            return None;
        }
        let zipped = self
            .head
            .next()
            .and_then(|head| Z::pull(head, &mut self.others));
        if zipped.is_none() {
            self.finished = true;
        }
        zipped
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        shortest(self.head.size_hint(), Z::size_hint(&self.others))
    }
}

impl<'a, S, Z> FusedIterator for ZippedIter<'a, S, Z>
where
    S: Iterable + 'a,
    Z: ZipSources + 'a,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case((0, Some(3)), (2, Some(2)), (0, Some(2)))]
    #[case((5, None), (1, Some(4)), (1, Some(4)))]
    #[case((2, None), (3, None), (2, None))]
    fn test_shortest_hint(
        #[case] left: (usize, Option<usize>),
        #[case] right: (usize, Option<usize>),
        #[case] expected: (usize, Option<usize>),
    ) {
        assert_eq!(shortest(left, right), expected);
    }

    #[rstest]
    fn test_zip_does_not_pull_past_known_end() {
        let pulled = Cell::new(0);
        let letters = sequence::of(["a", "b", "c", "d"]).map(|letter, _| {
            pulled.set(pulled.get() + 1);
            letter
        });
        let zipped = letters.zip(sequence::of([1, 2]));
        assert_eq!(zipped.to_vec(), vec![("a", 1), ("b", 2)]);
        assert_eq!(pulled.get(), 2);
    }

    #[rstest]
    fn test_zip_stops_round_at_first_exhausted_participant() {
        let pulled = Cell::new(0);
        // a filter cannot prove exhaustion up front
        let short = sequence::of([1, 2, 3]).filter(|number, _| *number < 2);
        let counted = sequence::of(["x", "y", "z"]).map(|letter, _| {
            pulled.set(pulled.get() + 1);
            letter
        });
        let zipped = short.zip(counted);
        assert_eq!(zipped.to_vec(), vec![(1, "x")]);
        assert_eq!(pulled.get(), 1);
    }

    #[rstest]
    fn test_zip_cursor_is_fused() {
        let zipped = sequence::from_iterator(vec![1]).zip(sequence::of(['a', 'b']));
        let mut cursor = zipped.iterate();
        assert_eq!(cursor.next(), Some((1, 'a')));
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.size_hint(), (0, Some(0)));
    }

    #[rstest]
    fn test_zip_size_hint_is_shortest() {
        let zipped = sequence::of([1, 2, 3]).zip_all((sequence::of([4, 5]), sequence::from(0..)));
        assert_eq!(zipped.iterate().size_hint(), (2, Some(2)));
    }
}
