//! Copy-on-write implementation of [`ImmutableCollection`].
//!
//! This module provides [`ImmutableArrayCollection`], an ordered, keyed
//! collection that behaves like an immutable array: integer keys are assigned
//! on append, string keys can be bound explicitly, and insertion order is
//! kept.
//!
//! # Overview
//!
//! The collection wraps an insertion-ordered hash map behind a reference
//! counter. Cloning a collection only clones the handle. A transformation
//! clones the map once, applies one structural edit to the clone and wraps
//! the result; it never rebuilds the collection pair by pair through the
//! public API, and it never writes to a map another collection can see.
//!
//! # Time Complexity
//!
//! | Operation                        | Complexity |
//! |----------------------------------|------------|
//! | `count`, `is_empty`              | O(1)       |
//! | `get`, `contains_key`            | O(1)*      |
//! | `contains`, `index_of`           | O(n)       |
//! | `add`, `set`                     | O(n) clone + O(1)* edit |
//! | `remove`, `remove_element`       | O(n) clone + O(n) edit  |
//! | `filter`, `map`, `partition`     | O(n)       |
//! | `clear`                          | O(1)       |
//! | `clone`                          | O(1)       |
//!
//! \* amortized
//!
//! # Examples
//!
//! ```rust
//! use immutable_collection::collection::{ImmutableArrayCollection, ImmutableCollection, Key};
//!
//! let collection = ImmutableArrayCollection::from_values([1, 2, 3]);
//! let evens = collection.filter(|value| value % 2 == 0);
//! let doubled = collection.map(|value| value * 2);
//!
//! assert_eq!(evens.to_array(), vec![(Key::from(1), 2)]);
//! assert_eq!(doubled.get_values(), vec![2, 4, 6]);
//! assert_eq!(collection.get_values(), vec![1, 2, 3]); // Original unchanged
//! ```

use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use tracing::{debug, trace};

use super::store::{OrderedStore, StoreIntoIter, StoreIter};
use super::{CollectionError, Cursor, ImmutableCollection, Key, ReferenceCounter};

const TRACE_TARGET: &str = "immutable_collection";

/// An ordered, keyed collection whose transformations return new collections.
///
/// # Type Parameters
///
/// * `V` - The value type. Transformations require `V: Clone`, since they
///   copy the backing store; values are cloned shallowly (a `V` holding an
///   `Rc` shares it).
///
/// # Examples
///
/// ```rust
/// use immutable_collection::collection::{ImmutableArrayCollection, ImmutableCollection, Key};
///
/// let collection = ImmutableArrayCollection::new()
///     .add("first")
///     .set(Key::from("name"), "named")
///     .add("second");
///
/// assert_eq!(
///     collection.get_keys(),
///     vec![Key::from(0), Key::from("name"), Key::from(1)]
/// );
/// assert_eq!(collection.get(&Key::from("name")), Some(&"named"));
/// assert_eq!(collection.get(&Key::from("missing")), None);
/// ```
pub struct ImmutableArrayCollection<V> {
    store: ReferenceCounter<OrderedStore<V>>,
}

// Thread safety follows the reference counter chosen by the `arc` feature.
#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(ImmutableArrayCollection<i32>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(ImmutableArrayCollection<i32>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(ImmutableArrayCollection<super::Value>: Send, Sync);

impl<V> ImmutableArrayCollection<V> {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::from_store(OrderedStore::new())
    }

    /// Creates a collection holding `values` under the keys `0, 1, 2, ...`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_collection::collection::{ImmutableArrayCollection, ImmutableCollection, Key};
    ///
    /// let collection = ImmutableArrayCollection::from_values(["a", "b"]);
    /// assert_eq!(collection.get(&Key::from(1)), Some(&"b"));
    /// ```
    #[must_use]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let values = values.into_iter();
        let mut store = OrderedStore::with_capacity(values.size_hint().0);
        for value in values {
            append(&mut store, value);
        }
        Self::from_store(store)
    }

    /// Creates a collection from `(key, value)` pairs, rejecting repeated
    /// keys.
    ///
    /// Use this when silently keeping only the last of two bindings for the
    /// same key would hide a mistake. [`FromIterator`] keeps the last value
    /// instead.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::DuplicateKey`] for the first key that
    /// appears twice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_collection::collection::{ImmutableArrayCollection, ImmutableCollection, Key};
    ///
    /// let collection = ImmutableArrayCollection::try_from_pairs([
    ///     (Key::from(0), 1),
    ///     (Key::from("A"), 2),
    /// ])
    /// .unwrap();
    /// assert_eq!(collection.count(), 2);
    /// ```
    pub fn try_from_pairs<K, I>(pairs: I) -> Result<Self, CollectionError>
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, V)>,
    {
        let pairs = pairs.into_iter();
        let mut store = OrderedStore::with_capacity(pairs.size_hint().0);
        for (key, value) in pairs {
            if let Err(error) = store.insert_new(key.into(), value) {
                debug!(target: TRACE_TARGET, %error, "rejected collection input");
                return Err(error);
            }
        }
        Ok(Self::from_store(store))
    }

    /// Wraps an already-built store. Every transformation ends here.
    pub(super) fn from_store(store: OrderedStore<V>) -> Self {
        Self {
            store: ReferenceCounter::new(store),
        }
    }

    /// Returns an iterator over the keys in insertion order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &Key> + ExactSizeIterator {
        self.store.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values in insertion order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.store.iter().map(|(_, value)| value)
    }

    /// Returns `true` if both collections share one backing store.
    #[cfg(test)]
    fn shares_store_with(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.store, &other.store)
    }
}

impl<V: Clone> ImmutableArrayCollection<V> {
    /// Clones the backing store, applies `edit` to the clone and wraps it.
    fn derive<F>(&self, operation: &'static str, edit: F) -> Self
    where
        F: FnOnce(&mut OrderedStore<V>),
    {
        let mut store = OrderedStore::clone(&self.store);
        edit(&mut store);
        trace!(
            target: TRACE_TARGET,
            operation,
            before = self.store.len(),
            after = store.len(),
            "derived collection"
        );
        Self::from_store(store)
    }

    /// Appends `value` under the next free integer key, reporting overflow
    /// instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::NextKeyOverflow`] when an integer key of
    /// `i64::MAX` has already been bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_collection::collection::{
    ///     CollectionError, ImmutableArrayCollection, ImmutableCollection, Key,
    /// };
    ///
    /// let full = ImmutableArrayCollection::new().set(Key::from(i64::MAX), 'z');
    /// assert_eq!(
    ///     full.try_add('a'),
    ///     Err(CollectionError::NextKeyOverflow { last: i64::MAX })
    /// );
    ///
    /// let grown = ImmutableArrayCollection::new().try_add('a').unwrap();
    /// assert_eq!(grown.get(&Key::from(0)), Some(&'a'));
    /// ```
    pub fn try_add(&self, value: V) -> Result<Self, CollectionError> {
        let mut store = OrderedStore::clone(&self.store);
        store.push(value)?;
        trace!(
            target: TRACE_TARGET,
            operation = "try_add",
            before = self.store.len(),
            after = store.len(),
            "derived collection"
        );
        Ok(Self::from_store(store))
    }

    /// Maps every value through a fallible `function`.
    ///
    /// Stops at the first error and returns it; no partially mapped
    /// collection is ever produced.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use immutable_collection::collection::{ImmutableArrayCollection, ImmutableCollection};
    ///
    /// let collection = ImmutableArrayCollection::from_values(["1", "2", "x"]);
    ///
    /// let parsed = collection.try_map(|text| text.parse::<i32>());
    /// assert!(parsed.is_err());
    ///
    /// let parsed = collection.filter(|text| *text != "x").try_map(|text| text.parse::<i32>());
    /// assert_eq!(parsed.unwrap().get_values(), vec![1, 2]);
    /// ```
    pub fn try_map<U, E, F>(&self, function: F) -> Result<ImmutableArrayCollection<U>, E>
    where
        F: FnMut(&V) -> Result<U, E>,
    {
        self.store
            .try_map_values(function)
            .map(ImmutableArrayCollection::from_store)
    }
}

/// Appends through the store, panicking on integer key overflow.
pub(super) fn append<V>(store: &mut OrderedStore<V>, value: V) {
    if let Err(error) = store.push(value) {
        panic!("{error}");
    }
}

// =============================================================================
// Contract Implementation
// =============================================================================

impl<V: Clone> ImmutableCollection for ImmutableArrayCollection<V> {
    type Value = V;
    type WithValue<U: Clone> = ImmutableArrayCollection<U>;
    type Iter<'a>
        = ImmutableArrayCollectionIterator<'a, V>
    where
        Self: 'a;

    #[inline]
    fn count(&self) -> usize {
        self.store.len()
    }

    #[inline]
    fn contains_key(&self, key: &Key) -> bool {
        self.store.contains_key(key)
    }

    #[inline]
    fn get(&self, key: &Key) -> Option<&V> {
        self.store.get(key)
    }

    fn iter(&self) -> Self::Iter<'_> {
        ImmutableArrayCollectionIterator {
            inner: self.store.iter(),
        }
    }

    fn cursor(&self) -> Cursor<'_, V> {
        Cursor::new(self.store.as_slice())
    }

    fn first(&self) -> Option<&V> {
        self.store.get_index(0).map(|(_, value)| value)
    }

    fn last(&self) -> Option<&V> {
        self.store
            .len()
            .checked_sub(1)
            .and_then(|index| self.store.get_index(index))
            .map(|(_, value)| value)
    }

    /// # Panics
    ///
    /// Panics if an integer key of `i64::MAX` has already been bound, since
    /// there is no next key to append under. Use
    /// [`try_add`](ImmutableArrayCollection::try_add) to handle that case.
    fn add(&self, value: V) -> Self {
        self.derive("add", |store| append(store, value))
    }

    fn set(&self, key: Key, value: V) -> Self {
        self.derive("set", |store| {
            store.insert(key, value);
        })
    }

    fn remove(&self, key: &Key) -> Self {
        if !self.store.contains_key(key) {
            return self.clone();
        }
        self.derive("remove", |store| {
            store.remove(key);
        })
    }

    fn remove_element(&self, value: &V) -> Self
    where
        V: PartialEq,
    {
        match self.store.position(|candidate| candidate == value) {
            Some(index) => self.derive("remove_element", |store| {
                store.remove_index(index);
            }),
            None => self.clone(),
        }
    }

    fn clear(&self) -> Self {
        trace!(
            target: TRACE_TARGET,
            operation = "clear",
            before = self.store.len(),
            after = 0_usize,
            "derived collection"
        );
        Self::new()
    }

    fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&V) -> bool,
    {
        self.derive("filter", |store| store.retain(|_, value| predicate(value)))
    }

    fn map<U, F>(&self, mut function: F) -> ImmutableArrayCollection<U>
    where
        U: Clone,
        F: FnMut(&V) -> U,
    {
        let Ok(store) = self
            .store
            .try_map_values(|value| Ok::<U, Infallible>(function(value)));
        ImmutableArrayCollection::from_store(store)
    }

    fn partition<P>(&self, mut predicate: P) -> (Self, Self)
    where
        P: FnMut(&Key, &V) -> bool,
    {
        let mut matching = OrderedStore::new();
        let mut rest = OrderedStore::new();
        for (key, value) in self.store.iter() {
            let target = if predicate(key, value) {
                &mut matching
            } else {
                &mut rest
            };
            target.insert(key.clone(), value.clone());
        }
        trace!(
            target: TRACE_TARGET,
            operation = "partition",
            before = self.store.len(),
            matching = matching.len(),
            rest = rest.len(),
            "derived collections"
        );
        (Self::from_store(matching), Self::from_store(rest))
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the `(key, value)` pairs of an [`ImmutableArrayCollection`].
pub struct ImmutableArrayCollectionIterator<'a, V> {
    inner: StoreIter<'a, V>,
}

impl<'a, V> Iterator for ImmutableArrayCollectionIterator<'a, V> {
    type Item = (&'a Key, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for ImmutableArrayCollectionIterator<'_, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<V> ExactSizeIterator for ImmutableArrayCollectionIterator<'_, V> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<V> FusedIterator for ImmutableArrayCollectionIterator<'_, V> {}

/// An owning iterator over the `(key, value)` pairs of an
/// [`ImmutableArrayCollection`].
///
/// The backing store is moved out when this collection was its only owner
/// and cloned otherwise.
pub struct ImmutableArrayCollectionIntoIterator<V> {
    inner: StoreIntoIter<V>,
}

impl<V> Iterator for ImmutableArrayCollectionIntoIterator<V> {
    type Item = (Key, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for ImmutableArrayCollectionIntoIterator<V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<V> ExactSizeIterator for ImmutableArrayCollectionIntoIterator<V> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<V> FusedIterator for ImmutableArrayCollectionIntoIterator<V> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<V> Clone for ImmutableArrayCollection<V> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            store: ReferenceCounter::clone(&self.store),
        }
    }
}

impl<V> Default for ImmutableArrayCollection<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a collection the way an array literal does: a repeated key keeps
/// its first position and takes the last value.
impl<K: Into<Key>, V> FromIterator<(K, V)> for ImmutableArrayCollection<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut store = OrderedStore::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            store.insert(key.into(), value);
        }
        Self::from_store(store)
    }
}

impl<K: Into<Key>, V, const N: usize> From<[(K, V); N]> for ImmutableArrayCollection<V> {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Into<Key>, V> From<Vec<(K, V)>> for ImmutableArrayCollection<V> {
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl<V: Clone> IntoIterator for ImmutableArrayCollection<V> {
    type Item = (Key, V);
    type IntoIter = ImmutableArrayCollectionIntoIterator<V>;

    fn into_iter(self) -> Self::IntoIter {
        ImmutableArrayCollectionIntoIterator {
            inner: ReferenceCounter::unwrap_or_clone(self.store).into_iter(),
        }
    }
}

impl<'a, V: Clone> IntoIterator for &'a ImmutableArrayCollection<V> {
    type Item = (&'a Key, &'a V);
    type IntoIter = ImmutableArrayCollectionIterator<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Two collections are equal when they hold equal pairs in the same order.
///
/// Values are always compared, even between clones sharing one store, so a
/// collection holding a value unequal to itself (such as `f64::NAN`) is
/// unequal to its own clone.
impl<V: PartialEq> PartialEq for ImmutableArrayCollection<V> {
    fn eq(&self, other: &Self) -> bool {
        self.store.len() == other.store.len() && self.store.iter().eq(other.store.iter())
    }
}

impl<V: Eq> Eq for ImmutableArrayCollection<V> {}

impl<V: Hash> Hash for ImmutableArrayCollection<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.store.len());
        for (key, value) in self.store.iter() {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for ImmutableArrayCollection<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.store.iter()).finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
