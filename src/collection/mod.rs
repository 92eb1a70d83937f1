//! Immutable, ordered, keyed collections.
//!
//! This module provides the [`ImmutableCollection`] contract and its
//! copy-on-write implementation, [`ImmutableArrayCollection`]:
//!
//! - [`Key`]: closed string | integer key type
//! - [`Value`]: heterogeneous values with strict (type-and-value) equality
//! - [`Cursor`]: explicit positional traversal (`first`/`next`/`current`/...)
//! - [`CollectionError`]: caller contract violations
//!
//! # Copy-on-Write
//!
//! Each collection owns a backing store behind a reference counter. A
//! transformation clones that store once, applies a single edit to the clone
//! and wraps the result in a new collection. The receiver is never touched.
//!
//! ```rust
//! use immutable_collection::collection::{ImmutableArrayCollection, ImmutableCollection, Key};
//!
//! let collection = ImmutableArrayCollection::from_values(["a", "b", "c"]);
//! let removed = collection.remove(&Key::from(1));
//!
//! assert_eq!(collection.get_values(), vec!["a", "b", "c"]); // Original unchanged
//! assert_eq!(removed.get_values(), vec!["a", "c"]);
//! assert_eq!(removed.get_keys(), vec![Key::from(0), Key::from(2)]);
//! ```
//!
//! # Heterogeneous Values
//!
//! ```rust
//! use immutable_collection::prelude::*;
//!
//! let collection: ImmutableArrayCollection<Value> = immutable_collection![
//!     1,
//!     "A" => "a",
//!     "null" => Value::Null,
//!     "zero" => 0,
//! ];
//!
//! assert!(collection.contains(&Value::Null));
//! assert!(!collection.contains(&Value::Bool(false))); // strict equality
//! assert_eq!(collection.filter(Value::is_numeric).count(), 2);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`, which makes
/// collections shareable across threads.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod array_collection;
mod contract;
mod cursor;
mod error;
mod key;
mod macros;
mod store;
mod value;

pub use array_collection::ImmutableArrayCollection;
pub use array_collection::ImmutableArrayCollectionIntoIterator;
pub use array_collection::ImmutableArrayCollectionIterator;
pub use contract::ImmutableCollection;
pub use cursor::Cursor;
pub use error::CollectionError;
pub use key::Key;
#[doc(hidden)]
pub use macros::LiteralEntry;
pub use value::{ObjectHandle, Value};
