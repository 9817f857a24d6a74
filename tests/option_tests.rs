#![cfg(feature = "option")]
//! Integration tests for `Maybe`.

use lazyseq::option::{self, Maybe, NoneValueError};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn some_accepts_any_value() {
    let text: Maybe<String> = Maybe::some("Hello, world!".to_string());
    let number: Maybe<i32> = Maybe::some(42);
    let nested: Maybe<Option<i32>> = Maybe::some(None);
    assert!(text.has_value());
    assert!(number.has_value());
    assert!(nested.has_value());
}

#[rstest]
fn some_exposes_its_value() {
    let number = Maybe::some(42);
    assert!(number.has_value());
    assert_eq!(number.value(), Some(&42));
    assert_eq!(number.into_value(), Some(42));
}

#[rstest]
fn none_is_assignable_to_any_maybe() {
    let text: Maybe<String> = Maybe::none();
    let number: Maybe<i32> = Maybe::none();
    let unit: Maybe<()> = Maybe::none();
    assert!(!text.has_value());
    assert!(!number.has_value());
    assert!(!unit.has_value());
}

#[rstest]
fn from_nullable_treats_only_none_as_absent() {
    assert_eq!(Maybe::from_nullable(None::<i32>), Maybe::none());
    assert_eq!(Maybe::from_nullable(Some(0)), Maybe::some(0));
    assert_eq!(Maybe::from_nullable(Some(false)), Maybe::some(false));
    assert_eq!(Maybe::from_nullable(Some("")), Maybe::some(""));
}

// =============================================================================
// map
// =============================================================================

#[rstest]
fn map_transforms_present_value() {
    assert_eq!(Maybe::some(3).map(|n| n + 4), Maybe::some(7));
}

#[rstest]
fn map_with_identity_is_unchanged() {
    let greeting = Maybe::some("Hello, world!");
    assert_eq!(greeting.map(|x| x), greeting);
}

#[rstest]
fn map_on_none_skips_function() {
    let calls = Cell::new(0);
    let absent: Maybe<i32> = Maybe::none();
    let mapped = absent.map(|n| {
        calls.set(calls.get() + 1);
        n + 4
    });
    assert_eq!(mapped, absent);
    assert_eq!(calls.get(), 0);
}

// =============================================================================
// flat_map
// =============================================================================

#[rstest]
fn flat_map_transforms_present_value() {
    assert_eq!(Maybe::some(3).flat_map(|n| Maybe::some(n + 4)), Maybe::some(7));
}

#[rstest]
fn flat_map_can_produce_none() {
    assert_eq!(Maybe::some(4).flat_map(|_| Maybe::<i32>::none()), Maybe::none());
    assert_eq!(Maybe::<i32>::none().flat_map(|_| Maybe::<i32>::none()), Maybe::none());
}

#[rstest]
fn flat_map_with_some_is_identity() {
    let greeting = Maybe::some("Hello, world!");
    assert_eq!(greeting.flat_map(Maybe::some), greeting);
}

// =============================================================================
// flatten
// =============================================================================

#[rstest]
fn flatten_keeps_none() {
    assert_eq!(Maybe::<Maybe<i32>>::none().flatten(), Maybe::none());
    assert_eq!(option::flatten(Maybe::<Maybe<i32>>::none()), Maybe::none());
}

#[rstest]
#[case(Maybe::some(Maybe::none()), Maybe::none())]
#[case(Maybe::some(Maybe::some(4)), Maybe::some(4))]
fn flatten_unwraps_one_level(#[case] nested: Maybe<Maybe<i32>>, #[case] expected: Maybe<i32>) {
    assert_eq!(nested.flatten(), expected);
    assert_eq!(Maybe::flatten(nested), expected);
    assert_eq!(option::flatten(nested), expected);
}

#[rstest]
fn flatten_removes_exactly_one_level() {
    let triple = Maybe::some(Maybe::some(Maybe::some(1)));
    assert_eq!(triple.flatten(), Maybe::some(Maybe::some(1)));
}

// =============================================================================
// unwrap_or / try_unwrap
// =============================================================================

#[rstest]
#[case(Maybe::some(1), 1)]
#[case(Maybe::none(), 9)]
fn unwrap_or_falls_back_only_when_absent(#[case] maybe: Maybe<i32>, #[case] expected: i32) {
    assert_eq!(maybe.unwrap_or(9), expected);
}

#[rstest]
fn try_unwrap_reports_absence() {
    assert_eq!(Maybe::some("x").try_unwrap(), Ok("x"));
    let error = Maybe::<&str>::none().try_unwrap().unwrap_err();
    assert_eq!(error, NoneValueError);
    assert_eq!(error.to_string(), "called `Maybe::try_unwrap` on a `None` value");
}

#[rstest]
fn try_unwrap_composes_with_question_mark() {
    fn doubled(maybe: Maybe<i32>) -> Result<i32, Box<dyn std::error::Error>> {
        Ok(maybe.try_unwrap()? * 2)
    }

    assert_eq!(doubled(Maybe::some(21)).ok(), Some(42));
    assert!(doubled(Maybe::none()).is_err());
}

// =============================================================================
// Equality
// =============================================================================

#[rstest]
fn equality_is_structural() {
    assert_eq!(Maybe::some(vec![1, 2]), Maybe::some(vec![1, 2]));
    assert_ne!(Maybe::some(vec![1, 2]), Maybe::some(vec![2, 1]));
    assert_ne!(Maybe::some(0), Maybe::none());
    assert_eq!(Maybe::<i32>::none(), Maybe::none());
}
