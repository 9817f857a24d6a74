//! # lazyseq
//!
//! Lazy, re-traversable sequences and an Option-like `Maybe` type for
//! functional-style Rust.
//!
//! ## Overview
//!
//! - **Maybe**: a two-variant container for a present or absent value, with
//!   `map`, `flat_map`, `flatten` and `unwrap_or` combinators
//! - **Sequence**: a lazy pipeline over any re-traversable source. Chaining
//!   `map`, `filter` and `zip` builds a recipe; only terminal operations
//!   (`to_vec`, `to_set`, `to_map`, `for_each`, `first`) pull elements
//!
//! ## Feature Flags
//!
//! - `option`: The `Maybe` type
//! - `sequence`: Sequences, sources and adapters
//! - `serde`: `Serialize`/`Deserialize` for `Maybe`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let squares_of_evens = seq![1, 2, 3, 4, 5, 6]
//!     .filter(|number, _| number % 2 == 0)
//!     .map(|number, _| number * number);
//!
//! assert_eq!(squares_of_evens.to_vec(), vec![4, 16, 36]);
//! assert_eq!(squares_of_evens.first(), Some(4));
//!
//! let greeting = Maybe::from_nullable(Some("hello")).map(str::len);
//! assert_eq!(greeting, Maybe::some(5));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and the `seq!` macro.
///
/// # Usage
///
/// ```rust
/// use lazyseq::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "option")]
    pub use crate::option::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::{Iterable, Sequence};

    #[cfg(feature = "sequence")]
    pub use crate::seq;
}

#[cfg(feature = "option")]
pub mod option;

#[cfg(feature = "sequence")]
pub mod sequence;
