//! The `Sequence` interface.

use std::collections::hash_map::RandomState;
use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;

use super::boxed::Boxed;
use super::filter::Filtered;
use super::iterable::Iterable;
use super::map::Mapped;
use super::zip::{ZipSources, Zipped};

/// A lazy, re-traversable pipeline of elements.
///
/// A sequence is a recipe rather than a collection. The combinators
/// ([`map`](Self::map), [`filter`](Self::filter), [`zip`](Self::zip),
/// [`zip_all`](Self::zip_all)) wrap the sequence in a new adapter without
/// invoking any supplied function. Only the terminal operations
/// ([`to_vec`](Self::to_vec), [`to_set`](Self::to_set),
/// [`to_map`](Self::to_map), [`for_each`](Self::for_each),
/// [`first`](Self::first)) pull elements, and each pulls only as many as its
/// result needs.
///
/// Terminal operations borrow the sequence, so it can be traversed again.
/// Every traversal replays the same pulls on the source unless the source is
/// a [`SingleUse`](super::SingleUse) iterator.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{self, Sequence};
/// use std::cell::Cell;
///
/// let calls = Cell::new(0);
/// let doubled = sequence::of([1, 2, 3]).map(|number, _| {
///     calls.set(calls.get() + 1);
///     number * 2
/// });
/// assert_eq!(calls.get(), 0);
///
/// assert_eq!(doubled.first(), Some(2));
/// assert_eq!(calls.get(), 1);
///
/// assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
/// assert_eq!(calls.get(), 4);
/// ```
pub trait Sequence: Iterable {
    // =========================================================================
    // Combinators
    // =========================================================================

    /// Transforms every element with `transform`.
    ///
    /// `transform` receives the element and its zero-based position in the
    /// current traversal. It is invoked exactly once per element pulled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::{self, Sequence};
    ///
    /// let labelled = sequence::of(["a", "b"]).map(|letter, index| format!("{index}:{letter}"));
    /// assert_eq!(labelled.to_vec(), vec!["0:a", "1:b"]);
    /// ```
    #[inline]
    fn map<R, F>(self, transform: F) -> Mapped<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item, usize) -> R,
    {
        Mapped::new(self, transform)
    }

    /// Keeps the elements for which `predicate` returns `true`.
    ///
    /// The index passed to `predicate` counts every upstream element
    /// examined, rejected ones included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::{self, Sequence};
    ///
    /// let odd_positions = sequence::from("abcde").filter(|_, index| index % 2 == 1);
    /// assert_eq!(odd_positions.to_vec(), vec!['b', 'd']);
    /// ```
    #[inline]
    fn filter<P>(self, predicate: P) -> Filtered<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item, usize) -> bool,
    {
        Filtered::new(self, predicate)
    }

    /// Pairs elements of this sequence with those of `other`.
    ///
    /// Stops as soon as either side is exhausted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::{self, Sequence};
    ///
    /// let pairs = sequence::of(["a", "b", "c", "d"]).zip(sequence::of([1, 2]));
    /// assert_eq!(pairs.to_vec(), vec![("a", 1), ("b", 2)]);
    /// ```
    #[inline]
    fn zip<O>(self, other: O) -> Zipped<Self, (O,)>
    where
        Self: Sized,
        O: Sequence,
    {
        Zipped::new(self, (other,))
    }

    /// Combines this sequence with a tuple of one to six other sequences.
    ///
    /// Yields flat tuples with this sequence's element first, and stops as
    /// soon as any participant is exhausted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::{self, Sequence};
    ///
    /// let rows = sequence::of([1, 2, 3]).zip_all((sequence::from("xy"), sequence::of([true, false, true])));
    /// assert_eq!(rows.to_vec(), vec![(1, 'x', true), (2, 'y', false)]);
    /// ```
    #[inline]
    fn zip_all<Z>(self, others: Z) -> Zipped<Self, Z>
    where
        Self: Sized,
        Z: ZipSources,
    {
        Zipped::new(self, others)
    }

    /// Erases the concrete adapter type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::{self, Boxed, Sequence};
    ///
    /// fn evens(limit: u32) -> Boxed<'static, u32> {
    ///     sequence::from(0..limit).filter(|n, _| n % 2 == 0).boxed()
    /// }
    ///
    /// assert_eq!(evens(7).to_vec(), vec![0, 2, 4, 6]);
    /// ```
    #[inline]
    fn boxed<'s>(self) -> Boxed<'s, Self::Item>
    where
        Self: Sized + 's,
    {
        Boxed::new(self)
    }

    // =========================================================================
    // Terminal Operations
    // =========================================================================

    /// Collects every element, in order.
    ///
    /// The sequence must be finite.
    fn to_vec(&self) -> Vec<Self::Item> {
        let elements: Vec<Self::Item> = self.iterate().collect();
        tracing::trace!(elements = elements.len(), "drained sequence into a vec");
        elements
    }

    /// Collects every element into a `HashSet`.
    ///
    /// Equal elements collapse into the first one seen.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::{self, Sequence};
    /// use std::collections::HashSet;
    ///
    /// assert_eq!(sequence::from("haha").to_set(), HashSet::from(['h', 'a']));
    /// ```
    fn to_set(&self) -> HashSet<Self::Item>
    where
        Self::Item: Eq + Hash,
    {
        self.to_set_with_hasher::<RandomState>()
    }

    /// Like [`to_set`](Self::to_set), with a caller-chosen hasher.
    fn to_set_with_hasher<H>(&self) -> HashSet<Self::Item, H>
    where
        Self::Item: Eq + Hash,
        H: BuildHasher + Default,
    {
        let mut elements = HashSet::with_hasher(H::default());
        for element in self.iterate() {
            // keeps the first of equal elements
            elements.insert(element);
        }
        tracing::trace!(elements = elements.len(), "drained sequence into a set");
        elements
    }

    /// Collects key-value pairs into a `HashMap`.
    ///
    /// Only available for sequences of pairs. When keys repeat, the value
    /// drained last wins.
    ///
    /// ```compile_fail
    /// use lazyseq::sequence::{self, Sequence};
    ///
    /// let _ = sequence::of([1, 2, 3]).to_map();
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::{self, Sequence};
    /// use std::collections::HashMap;
    ///
    /// let entries = sequence::of([("a", 1), ("a", 2), ("b", 3)]);
    /// assert_eq!(entries.to_map(), HashMap::from([("a", 2), ("b", 3)]));
    /// ```
    fn to_map<K, V>(&self) -> HashMap<K, V>
    where
        Self: Iterable<Item = (K, V)>,
        K: Eq + Hash,
    {
        self.to_map_with_hasher::<K, V, RandomState>()
    }

    /// Like [`to_map`](Self::to_map), with a caller-chosen hasher.
    fn to_map_with_hasher<K, V, H>(&self) -> HashMap<K, V, H>
    where
        Self: Iterable<Item = (K, V)>,
        K: Eq + Hash,
        H: BuildHasher + Default,
    {
        let mut entries = HashMap::with_hasher(H::default());
        for (key, value) in self.iterate() {
            entries.insert(key, value);
        }
        tracing::trace!(entries = entries.len(), "drained sequence into a map");
        entries
    }

    /// Calls `action` on every element with its zero-based index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::{self, Sequence};
    ///
    /// let mut seen = Vec::new();
    /// sequence::of(["a", "b"]).for_each(|letter, index| seen.push((letter, index)));
    /// assert_eq!(seen, vec![("a", 0), ("b", 1)]);
    /// ```
    fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(Self::Item, usize),
    {
        let mut visited = 0;
        for element in self.iterate() {
            action(element, visited);
            visited += 1;
        }
        tracing::trace!(elements = visited, "visited every element of sequence");
    }

    /// Returns the first element, pulling at most one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::{self, Sequence};
    ///
    /// assert_eq!(sequence::from(1..).map(|n, _| n * 10).first(), Some(10));
    /// assert_eq!(sequence::empty::<i32>().first(), None);
    /// ```
    fn first(&self) -> Option<Self::Item> {
        let first = self.iterate().next();
        tracing::trace!(found = first.is_some(), "pulled first element of sequence");
        first
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {}

impl<S: Sequence + ?Sized> Sequence for Rc<S> {}

impl<S: Sequence + ?Sized> Sequence for Box<S> {}
