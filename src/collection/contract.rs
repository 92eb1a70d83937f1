//! The immutable collection contract.
//!
//! [`ImmutableCollection`] is the capability interface shared by every
//! value-semantics collection in this crate. It groups three kinds of
//! operation:
//!
//! - **Inspection**: `count`, `is_empty`, `contains`, `contains_key`, `get`,
//!   `get_keys`, `get_values`, `to_array`, `iter`, `cursor`, `first`, `last`
//! - **Transformation**: `add`, `set`, `remove`, `remove_element`, `clear`
//! - **Higher-order**: `exists`, `for_all`, `filter`, `map`, `partition`,
//!   `index_of`, `slice`
//!
//! No operation fails on an absent key or value: lookups answer `None` and
//! removals of something that is not there return an equal collection.
//! Transformations never touch the receiver.

use super::{Cursor, Key};

/// An ordered, keyed collection with value semantics.
///
/// # Laws
///
/// For every collection `c`:
///
/// - `c.add(x).count() == c.count() + 1`
/// - `c.clear().is_empty()`
/// - `c.remove(k).count() == c.count() - usize::from(c.contains_key(k))`
/// - `c.map(f).get_keys() == c.get_keys()`
/// - every inspection of `c` answers the same before and after any
///   transformation of `c`
///
/// # Examples
///
/// Code written against the contract works with any implementation:
///
/// ```rust
/// use immutable_collection::collection::{ImmutableArrayCollection, ImmutableCollection};
///
/// fn tally<C>(collection: &C) -> C::WithValue<usize>
/// where
///     C: ImmutableCollection<Value = String>,
/// {
///     collection.map(|text| text.len())
/// }
///
/// let words = ImmutableArrayCollection::from_values(["one".to_string(), "three".to_string()]);
/// assert_eq!(tally(&words).get_values(), vec![3, 5]);
/// ```
pub trait ImmutableCollection: Sized {
    /// The type of the values held by the collection.
    type Value: Clone;

    /// The same kind of collection holding values of type `U`.
    type WithValue<U: Clone>: ImmutableCollection<Value = U>;

    /// Iterator over `(key, value)` pairs in insertion order.
    type Iter<'a>: Iterator<Item = (&'a Key, &'a Self::Value)>
    where
        Self: 'a;

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns the number of pairs.
    fn count(&self) -> usize;

    /// Returns `true` if the collection holds no pairs.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Returns `true` if some value equals `value`.
    fn contains(&self, value: &Self::Value) -> bool
    where
        Self::Value: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Returns `true` if `key` is bound.
    fn contains_key(&self, key: &Key) -> bool;

    /// Returns the value bound to `key`, or `None`.
    fn get(&self, key: &Key) -> Option<&Self::Value>;

    /// Returns all keys in insertion order.
    fn get_keys(&self) -> Vec<Key> {
        self.iter().map(|(key, _)| key.clone()).collect()
    }

    /// Returns all values in insertion order.
    fn get_values(&self) -> Vec<Self::Value> {
        self.iter().map(|(_, value)| value.clone()).collect()
    }

    /// Returns a snapshot of all pairs in insertion order.
    ///
    /// Feeding the snapshot back into a constructor yields an equal
    /// collection.
    fn to_array(&self) -> Vec<(Key, Self::Value)> {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Returns a fresh iterator over the pairs in insertion order.
    ///
    /// Each call starts from the first pair, independently of any cursor.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns a new cursor positioned on the first pair.
    fn cursor(&self) -> Cursor<'_, Self::Value>;

    /// Returns the first value, or `None` when empty.
    fn first(&self) -> Option<&Self::Value>;

    /// Returns the last value, or `None` when empty.
    fn last(&self) -> Option<&Self::Value>;

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Returns a new collection with `value` appended under the next free
    /// integer key.
    #[must_use]
    fn add(&self, value: Self::Value) -> Self;

    /// Returns a new collection with `key` bound to `value`.
    ///
    /// A key that is already present keeps its position; a new key is
    /// appended.
    #[must_use]
    fn set(&self, key: Key, value: Self::Value) -> Self;

    /// Returns a new collection without the pair at `key`.
    #[must_use]
    fn remove(&self, key: &Key) -> Self;

    /// Returns a new collection without the first pair whose value equals
    /// `value`.
    #[must_use]
    fn remove_element(&self, value: &Self::Value) -> Self
    where
        Self::Value: PartialEq;

    /// Returns a new, empty collection.
    #[must_use]
    fn clear(&self) -> Self;

    // =========================================================================
    // Higher-order
    // =========================================================================

    /// Returns `true` if `predicate` holds for at least one pair.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Key, &Self::Value) -> bool,
    {
        self.iter().any(|(key, value)| predicate(key, value))
    }

    /// Returns `true` if `predicate` holds for every pair (and for none).
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Key, &Self::Value) -> bool,
    {
        self.iter().all(|(key, value)| predicate(key, value))
    }

    /// Returns a new collection with only the pairs whose value satisfies
    /// `predicate`. Keys and order are preserved.
    #[must_use]
    fn filter<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&Self::Value) -> bool;

    /// Returns a new collection with the same keys and each value replaced by
    /// `function(value)`.
    #[must_use]
    fn map<U, F>(&self, function: F) -> Self::WithValue<U>
    where
        U: Clone,
        F: FnMut(&Self::Value) -> U;

    /// Splits the collection into the pairs satisfying `predicate` and the
    /// rest, preserving order within each part.
    #[must_use]
    fn partition<P>(&self, predicate: P) -> (Self, Self)
    where
        P: FnMut(&Key, &Self::Value) -> bool;

    /// Returns the key of the first pair whose value equals `value`.
    fn index_of(&self, value: &Self::Value) -> Option<&Key>
    where
        Self::Value: PartialEq,
    {
        self.iter()
            .find(|(_, candidate)| *candidate == value)
            .map(|(key, _)| key)
    }

    /// Returns up to `length` pairs starting at the `offset`-th pair, or all
    /// remaining pairs when `length` is `None`. Keys are preserved.
    fn slice(&self, offset: usize, length: Option<usize>) -> Vec<(Key, Self::Value)> {
        self.iter()
            .skip(offset)
            .take(length.unwrap_or(usize::MAX))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}
