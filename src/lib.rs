//! # immutable-collection
//!
//! Ordered, keyed collections with value semantics.
//!
//! ## Overview
//!
//! Every mutation-shaped operation (`add`, `set`, `remove`, `clear`,
//! `filter`, `map`, `partition`) leaves the receiver untouched and returns a
//! new collection. A collection can therefore be shared, compared and passed
//! across boundaries like any other value, without defensive copies.
//!
//! - [`ImmutableCollection`](collection::ImmutableCollection): the contract
//! - [`ImmutableArrayCollection`](collection::ImmutableArrayCollection): the
//!   copy-on-write implementation over an insertion-ordered hash map
//! - [`Key`](collection::Key): string or integer keys
//! - [`Value`](collection::Value): dynamically typed values with strict equality
//! - [`Cursor`](collection::Cursor): positional traversal
//!
//! ## Feature Flags
//!
//! - `arc`: share backing stores through `Arc` so collections are `Send + Sync`
//! - `fxhash`: hash keys with FxHash
//! - `ahash`: hash keys with aHash
//!
//! ## Example
//!
//! ```rust
//! use immutable_collection::prelude::*;
//!
//! let collection: ImmutableArrayCollection<i32> = ImmutableArrayCollection::from_values([1, 2, 3]);
//! let extended = collection.add(4);
//!
//! assert_eq!(collection.count(), 3); // Original unchanged
//! assert_eq!(extended.count(), 4);
//! assert_eq!(extended.get(&Key::from(3)), Some(&4));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use immutable_collection::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::*;
    pub use crate::immutable_collection;
}

pub mod collection;
