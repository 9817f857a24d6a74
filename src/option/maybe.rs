//! The `Maybe<T>` sum type.

use std::fmt;

use super::error::NoneValueError;

/// A value that is either present (`Some`) or absent (`None`).
///
/// `Maybe<T>` mirrors the role of a nullable reference in other languages
/// while making absence explicit in the type. Equality is structural: two
/// `Maybe`s are equal when both are `None`, or both are `Some` with equal
/// values.
///
/// # Examples
///
/// ```rust
/// use lazyseq::option::Maybe;
///
/// let present = Maybe::some(3);
/// assert!(present.has_value());
/// assert_eq!(present.value(), Some(&3));
///
/// let absent: Maybe<i32> = Maybe::none();
/// assert!(!absent.has_value());
/// assert_eq!(absent.map(|n| n + 4), Maybe::none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A present value.
    Some(T),
    /// No value.
    None,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps `value` as a present value.
    ///
    /// Any value is accepted, including values that are "empty" in some other
    /// sense such as `0`, `false`, `""` or `Option::None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::option::Maybe;
    ///
    /// assert_eq!(Maybe::some(42).unwrap_or(0), 42);
    /// assert!(Maybe::some(None::<i32>).has_value());
    /// ```
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Returns the absent value for any element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::option::Maybe;
    ///
    /// let name: Maybe<String> = Maybe::none();
    /// let count: Maybe<u64> = Maybe::none();
    /// assert!(!name.has_value());
    /// assert!(!count.has_value());
    /// ```
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Converts a nullable value into a `Maybe`.
    ///
    /// `Option::None` is the null-like sentinel and becomes [`Maybe::None`].
    /// Every `Option::Some` becomes a present value, falsy ones included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::option::Maybe;
    ///
    /// assert_eq!(Maybe::from_nullable(None::<i32>), Maybe::none());
    /// assert_eq!(Maybe::from_nullable(Some(0)), Maybe::some(0));
    /// assert_eq!(Maybe::from_nullable(Some("")), Maybe::some(""));
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns a reference to the present value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::option::Maybe;
    ///
    /// assert_eq!(Maybe::some("text").value(), Some(&"text"));
    /// assert_eq!(Maybe::<&str>::none().value(), None);
    /// ```
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Converts `&Maybe<T>` into `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Consumes the `Maybe`, returning the present value as an `Option`.
    #[inline]
    pub fn into_value(self) -> Option<T> {
        self.into()
    }

    /// Returns an iterator over the present value (zero or one element).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::option::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).iter().count(), 1);
    /// assert_eq!(Maybe::<i32>::none().iter().count(), 0);
    /// ```
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.value().into_iter()
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the present value.
    ///
    /// On `None` the function is never invoked and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::option::Maybe;
    ///
    /// assert_eq!(Maybe::some(3).map(|n| n + 4), Maybe::some(7));
    /// assert_eq!(Maybe::<i32>::none().map(|n| n + 4), Maybe::none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::None,
        }
    }

    /// Applies a `Maybe`-returning function to the present value.
    ///
    /// The result of `function` is returned as is, so a present value can
    /// turn into `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::option::Maybe;
    ///
    /// assert_eq!(Maybe::some(3).flat_map(|n| Maybe::some(n + 4)), Maybe::some(7));
    /// assert_eq!(Maybe::some(4).flat_map(|_| Maybe::<i32>::none()), Maybe::none());
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Maybe::None,
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the present value, or `default` if absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::option::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).unwrap_or(9), 1);
    /// assert_eq!(Maybe::none().unwrap_or(9), 9);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the present value, or computes one with `fallback` if absent.
    ///
    /// `fallback` is only invoked for `None`.
    #[inline]
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => fallback(),
        }
    }

    /// Returns the present value, or [`NoneValueError`] if absent.
    ///
    /// # Errors
    ///
    /// Returns `Err(NoneValueError)` when called on `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::option::{Maybe, NoneValueError};
    ///
    /// assert_eq!(Maybe::some(5).try_unwrap(), Ok(5));
    /// assert_eq!(Maybe::<i32>::none().try_unwrap(), Err(NoneValueError));
    /// ```
    #[inline]
    pub fn try_unwrap(self) -> Result<T, NoneValueError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(NoneValueError),
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    ///
    /// `Some(Some(x))` becomes `Some(x)`, `Some(None)` and `None` become `None`.
    /// Only available when the wrapped value is itself a `Maybe`:
    ///
    /// ```compile_fail
    /// use lazyseq::option::Maybe;
    ///
    /// let _ = Maybe::some(4).flatten();
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::option::Maybe;
    ///
    /// assert_eq!(Maybe::some(Maybe::some(4)).flatten(), Maybe::some(4));
    /// assert_eq!(Maybe::some(Maybe::<i32>::none()).flatten(), Maybe::none());
    /// assert_eq!(Maybe::<Maybe<i32>>::none().flatten(), Maybe::none());
    ///
    /// // Also usable as a plain function
    /// assert_eq!(Maybe::flatten(Maybe::some(Maybe::some("x"))), Maybe::some("x"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.flat_map(|inner| inner)
    }
}

impl<T> Default for Maybe<T> {
    /// Returns `None`.
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::from_nullable(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_value().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_some_has_value() {
        let maybe = Maybe::some(42);
        assert!(maybe.has_value());
        assert_eq!(maybe.value(), Some(&42));
    }

    #[rstest]
    fn test_none_has_no_value() {
        let maybe: Maybe<i32> = Maybe::none();
        assert!(!maybe.has_value());
        assert_eq!(maybe.value(), None);
    }

    #[rstest]
    fn test_map_on_none_never_invokes_function() {
        let calls = Cell::new(0);
        let result = Maybe::<i32>::none().map(|n| {
            calls.set(calls.get() + 1);
            n + 4
        });
        assert_eq!(result, Maybe::none());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_flat_map_on_none_never_invokes_function() {
        let calls = Cell::new(0);
        let result = Maybe::<i32>::none().flat_map(|n| {
            calls.set(calls.get() + 1);
            Maybe::some(n)
        });
        assert_eq!(result, Maybe::none());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_unwrap_or_else_not_invoked_for_some() {
        let calls = Cell::new(0);
        let value = Maybe::some(1).unwrap_or_else(|| {
            calls.set(calls.get() + 1);
            0
        });
        assert_eq!(value, 1);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    #[case(Maybe::some(3), "Some(3)")]
    #[case(Maybe::none(), "None")]
    fn test_display(#[case] maybe: Maybe<i32>, #[case] expected: &str) {
        assert_eq!(maybe.to_string(), expected);
    }

    #[rstest]
    fn test_default_is_none() {
        assert_eq!(Maybe::<String>::default(), Maybe::none());
    }

    #[rstest]
    fn test_option_conversion_roundtrip() {
        let maybe: Maybe<i32> = Some(7).into();
        let option: Option<i32> = maybe.into();
        assert_eq!(option, Some(7));

        let maybe: Maybe<i32> = None.into();
        let option: Option<i32> = maybe.into();
        assert_eq!(option, None);
    }

    #[rstest]
    fn test_into_iterator_yields_zero_or_one() {
        assert_eq!(Maybe::some("a").into_iter().collect::<Vec<_>>(), vec!["a"]);
        assert!(Maybe::<&str>::none().into_iter().next().is_none());

        let borrowed = Maybe::some(String::from("b"));
        let collected: Vec<&String> = (&borrowed).into_iter().collect();
        assert_eq!(collected, vec![&String::from("b")]);
        assert!(borrowed.has_value());
    }

    #[rstest]
    fn test_as_ref_keeps_original() {
        let owned = Maybe::some(String::from("kept"));
        assert_eq!(owned.as_ref().map(String::len), Maybe::some(4));
        assert_eq!(owned, Maybe::some(String::from("kept")));
    }
}
