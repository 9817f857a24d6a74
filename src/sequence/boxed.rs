//! Type-erased sequences.

use std::fmt;

use super::iterable::Iterable;
use super::traits::Sequence;

trait ErasedIterable<T> {
    fn iterate_erased(&self) -> Box<dyn Iterator<Item = T> + '_>;
}

impl<S: Iterable> ErasedIterable<S::Item> for S {
    fn iterate_erased(&self) -> Box<dyn Iterator<Item = S::Item> + '_> {
        Box::new(self.iterate())
    }
}

/// A sequence whose concrete adapter type has been erased.
///
/// Created by [`Sequence::boxed`]. Useful for returning sequences from
/// functions or storing differently-built sequences side by side.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{self, Boxed, Sequence};
///
/// let pipelines: Vec<Boxed<'_, i32>> = vec![
///     sequence::of([1, 2, 3]).boxed(),
///     sequence::from(10..13).map(|n, _| n * 2).boxed(),
/// ];
/// let firsts: Vec<Option<i32>> = pipelines.iter().map(|pipeline| pipeline.first()).collect();
/// assert_eq!(firsts, vec![Some(1), Some(20)]);
/// ```
pub struct Boxed<'s, T> {
    inner: Box<dyn ErasedIterable<T> + 's>,
}

impl<'s, T> Boxed<'s, T> {
    #[inline]
    pub(crate) fn new<S>(sequence: S) -> Self
    where
        S: Iterable<Item = T> + 's,
    {
        Self {
            inner: Box::new(sequence),
        }
    }
}

impl<T> fmt::Debug for Boxed<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Boxed").finish_non_exhaustive()
    }
}

impl<T> Iterable for Boxed<'_, T> {
    type Item = T;
    type Iter<'a>
        = Box<dyn Iterator<Item = T> + 'a>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Iter<'_> {
        self.inner.iterate_erased()
    }
}

impl<T> Sequence for Boxed<'_, T> {}

impl<'a, T> IntoIterator for &'a Boxed<'_, T> {
    type Item = T;
    type IntoIter = Box<dyn Iterator<Item = T> + 'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iterate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence;
    use rstest::rstest;

    #[rstest]
    fn test_boxed_preserves_elements_and_restarts() {
        let boxed = sequence::of([3, 1, 2]).filter(|n, _| *n != 1).boxed();
        assert_eq!(boxed.to_vec(), vec![3, 2]);
        assert_eq!(boxed.to_vec(), vec![3, 2]);
    }

    #[rstest]
    fn test_boxed_can_borrow_locals() {
        let offset = 100;
        let boxed = sequence::of([1, 2]).map(|n, _| n + offset).boxed();
        assert_eq!(boxed.first(), Some(101));
    }
}
