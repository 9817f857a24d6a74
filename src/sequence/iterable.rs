//! The re-traversable source protocol.
//!
//! [`Iterable`] is to a sequence what `IntoIterator` is to a `for` loop, with
//! one difference: `iterate` borrows, so the same value can be traversed any
//! number of times, each traversal starting from a fresh cursor.
//!
//! Implementations are provided for the standard collections (yielding clones
//! of their elements), strings (yielding `char`s), ranges, shared references,
//! `Rc` and `Box`.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque, btree_map, hash_map};
use std::iter::{Cloned, Map};
use std::ops::{Range, RangeFrom, RangeInclusive};
use std::rc::Rc;
use std::str::Chars;

/// A source that can hand out any number of independent cursors.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::Iterable;
///
/// let numbers = vec![1, 2, 3];
/// let first_pass: Vec<i32> = numbers.iterate().collect();
/// let second_pass: Vec<i32> = numbers.iterate().collect();
/// assert_eq!(first_pass, second_pass);
/// ```
pub trait Iterable {
    /// The type of the elements produced by a traversal.
    type Item;

    /// The cursor type of a single traversal.
    type Iter<'a>: Iterator<Item = Self::Item>
    where
        Self: 'a;

    /// Starts a new traversal.
    fn iterate(&self) -> Self::Iter<'_>;
}

type EntryCloner<'a, K, V> = fn((&'a K, &'a V)) -> (K, V);

fn clone_entry<K: Clone, V: Clone>((key, value): (&K, &V)) -> (K, V) {
    (key.clone(), value.clone())
}

// =============================================================================
// Collections
// =============================================================================

impl<T: Clone> Iterable for [T] {
    type Item = T;
    type Iter<'a>
        = Cloned<std::slice::Iter<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Iter<'_> {
        self.iter().cloned()
    }
}

impl<T: Clone, const N: usize> Iterable for [T; N] {
    type Item = T;
    type Iter<'a>
        = Cloned<std::slice::Iter<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Iter<'_> {
        self.iter().cloned()
    }
}

impl<T: Clone> Iterable for Vec<T> {
    type Item = T;
    type Iter<'a>
        = Cloned<std::slice::Iter<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Iter<'_> {
        self.iter().cloned()
    }
}

impl<T: Clone> Iterable for VecDeque<T> {
    type Item = T;
    type Iter<'a>
        = Cloned<std::collections::vec_deque::Iter<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Iter<'_> {
        self.iter().cloned()
    }
}

impl<T: Clone, H> Iterable for HashSet<T, H> {
    type Item = T;
    type Iter<'a>
        = Cloned<std::collections::hash_set::Iter<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Iter<'_> {
        self.iter().cloned()
    }
}

impl<T: Clone> Iterable for BTreeSet<T> {
    type Item = T;
    type Iter<'a>
        = Cloned<std::collections::btree_set::Iter<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Iter<'_> {
        self.iter().cloned()
    }
}

impl<K: Clone, V: Clone, H> Iterable for HashMap<K, V, H> {
    type Item = (K, V);
    type Iter<'a>
        = Map<hash_map::Iter<'a, K, V>, EntryCloner<'a, K, V>>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Iter<'_> {
        self.iter().map(clone_entry as EntryCloner<'_, K, V>)
    }
}

impl<K: Clone, V: Clone> Iterable for BTreeMap<K, V> {
    type Item = (K, V);
    type Iter<'a>
        = Map<btree_map::Iter<'a, K, V>, EntryCloner<'a, K, V>>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Iter<'_> {
        self.iter().map(clone_entry as EntryCloner<'_, K, V>)
    }
}

// =============================================================================
// Strings
// =============================================================================

impl Iterable for str {
    type Item = char;
    type Iter<'a> = Chars<'a>;

    #[inline]
    fn iterate(&self) -> Self::Iter<'_> {
        self.chars()
    }
}

impl Iterable for String {
    type Item = char;
    type Iter<'a> = Chars<'a>;

    #[inline]
    fn iterate(&self) -> Self::Iter<'_> {
        self.chars()
    }
}

// =============================================================================
// Ranges
// =============================================================================

impl<A> Iterable for Range<A>
where
    A: Clone,
    Self: Iterator<Item = A>,
{
    type Item = A;
    type Iter<'a>
        = Self
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Iter<'_> {
        self.clone()
    }
}

impl<A> Iterable for RangeInclusive<A>
where
    A: Clone,
    Self: Iterator<Item = A>,
{
    type Item = A;
    type Iter<'a>
        = Self
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Iter<'_> {
        self.clone()
    }
}

impl<A> Iterable for RangeFrom<A>
where
    A: Clone,
    Self: Iterator<Item = A>,
{
    type Item = A;
    type Iter<'a>
        = Self
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Iter<'_> {
        self.clone()
    }
}

// =============================================================================
// Pointers
// =============================================================================

impl<A: Iterable + ?Sized> Iterable for &A {
    type Item = A::Item;
    type Iter<'a>
        = A::Iter<'a>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Iter<'_> {
        (**self).iterate()
    }
}

impl<A: Iterable + ?Sized> Iterable for Rc<A> {
    type Item = A::Item;
    type Iter<'a>
        = A::Iter<'a>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Iter<'_> {
        (**self).iterate()
    }
}

impl<A: Iterable + ?Sized> Iterable for Box<A> {
    type Item = A::Item;
    type Iter<'a>
        = A::Iter<'a>
    where
        Self: 'a;

    #[inline]
    fn iterate(&self) -> Self::Iter<'_> {
        (**self).iterate()
    }
}
