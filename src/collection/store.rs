//! The ordered backing store wrapped by [`ImmutableArrayCollection`].
//!
//! `OrderedStore` is a plain, mutable, insertion-ordered map from [`Key`] to
//! value. It is only ever mutated while it is exclusively owned by the
//! operation building a new collection; once wrapped it is frozen.
//!
//! Besides the pairs, the store tracks the next free integer key, so that
//! appending behaves like pushing onto an array: the new key is one greater
//! than the largest integer key bound so far (0 when none, and never below
//! 0). Binding keys only ever raises it. Removing pairs recomputes it from
//! the integer keys that remain.
//!
//! [`ImmutableArrayCollection`]: super::ImmutableArrayCollection

use indexmap::IndexMap;
use indexmap::map::{Entry, Slice};

use super::{CollectionError, Key};

// =============================================================================
// Hasher Selection
// =============================================================================

#[cfg(feature = "fxhash")]
type StoreHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type StoreHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type StoreHasher = std::hash::RandomState;

pub(crate) type StoreIter<'a, V> = indexmap::map::Iter<'a, Key, V>;
pub(crate) type StoreIntoIter<V> = indexmap::map::IntoIter<Key, V>;

// =============================================================================
// OrderedStore
// =============================================================================

#[derive(Clone)]
pub(crate) struct OrderedStore<V> {
    entries: IndexMap<Key, V, StoreHasher>,
    /// `None` once an integer key of `i64::MAX` has been bound.
    next_index: Option<i64>,
}

impl<V> OrderedStore<V> {
    pub(crate) fn new() -> Self {
        Self::with_capacity(0)
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity_and_hasher(capacity, StoreHasher::default()),
            next_index: Some(0),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub(crate) fn get(&self, key: &Key) -> Option<&V> {
        self.entries.get(key)
    }

    #[inline]
    pub(crate) fn contains_key(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    #[inline]
    pub(crate) fn get_index(&self, index: usize) -> Option<(&Key, &V)> {
        self.entries.get_index(index)
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &Slice<Key, V> {
        self.entries.as_slice()
    }

    #[inline]
    pub(crate) fn iter(&self) -> StoreIter<'_, V> {
        self.entries.iter()
    }

    /// Returns the position of the first value satisfying `predicate`.
    pub(crate) fn position<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&V) -> bool,
    {
        self.entries.values().position(|value| predicate(value))
    }

    /// Returns the key the next [`push`](Self::push) would bind.
    pub(crate) fn next_key(&self) -> Result<i64, CollectionError> {
        self.next_index
            .ok_or(CollectionError::NextKeyOverflow { last: i64::MAX })
    }

    fn record_key(&mut self, key: &Key) {
        if let Key::Integer(index) = *key
            && let Some(next) = self.next_index
            && index >= next
        {
            self.next_index = index.checked_add(1);
        }
    }

    /// Binds `key` to `value`. An existing key keeps its position.
    pub(crate) fn insert(&mut self, key: Key, value: V) -> Option<V> {
        self.record_key(&key);
        self.entries.insert(key, value)
    }

    /// Binds `key` to `value`, rejecting keys that are already present.
    pub(crate) fn insert_new(&mut self, key: Key, value: V) -> Result<(), CollectionError> {
        match self.entries.entry(key) {
            Entry::Occupied(occupied) => Err(CollectionError::DuplicateKey {
                key: occupied.key().clone(),
            }),
            Entry::Vacant(vacant) => {
                let key = vacant.key().clone();
                vacant.insert(value);
                self.record_key(&key);
                Ok(())
            }
        }
    }

    /// Appends `value` under the next free integer key.
    pub(crate) fn push(&mut self, value: V) -> Result<Key, CollectionError> {
        let key = Key::Integer(self.next_key()?);
        self.insert(key.clone(), value);
        Ok(key)
    }

    /// Removes `key`, shifting later pairs down to keep insertion order.
    pub(crate) fn remove(&mut self, key: &Key) -> Option<V> {
        let removed = self.entries.shift_remove(key);
        if removed.is_some() {
            self.renumber();
        }
        removed
    }

    pub(crate) fn remove_index(&mut self, index: usize) -> Option<(Key, V)> {
        let removed = self.entries.shift_remove_index(index);
        if removed.is_some() {
            self.renumber();
        }
        removed
    }

    pub(crate) fn retain<P>(&mut self, mut predicate: P)
    where
        P: FnMut(&Key, &V) -> bool,
    {
        let before = self.entries.len();
        self.entries.retain(|key, value| predicate(key, value));
        if self.entries.len() != before {
            self.renumber();
        }
    }

    /// Resets the next free key to one past the largest remaining
    /// non-negative integer key, or 0 when there is none.
    fn renumber(&mut self) {
        self.next_index = self
            .entries
            .keys()
            .filter_map(Key::as_integer)
            .filter(|index| *index >= 0)
            .max()
            .map_or(Some(0), |largest| largest.checked_add(1));
    }

    /// Builds a store with the same keys, key order and next free key.
    pub(crate) fn try_map_values<U, E, F>(&self, mut function: F) -> Result<OrderedStore<U>, E>
    where
        F: FnMut(&V) -> Result<U, E>,
    {
        let mut entries = IndexMap::with_capacity_and_hasher(self.len(), StoreHasher::default());
        for (key, value) in &self.entries {
            entries.insert(key.clone(), function(value)?);
        }
        Ok(OrderedStore {
            entries,
            next_index: self.next_index,
        })
    }
}

impl<V> IntoIterator for OrderedStore<V> {
    type Item = (Key, V);
    type IntoIter = StoreIntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_push_assigns_sequential_keys() {
        let mut store = OrderedStore::new();
        assert_eq!(store.push("a"), Ok(Key::from(0)));
        assert_eq!(store.push("b"), Ok(Key::from(1)));
        assert_eq!(store.len(), 2);
    }

    /// Appending continues after the largest integer key bound.
    #[rstest]
    fn test_push_continues_after_largest_integer_key() {
        let mut store = OrderedStore::new();
        store.insert(Key::from(10), 'x');
        store.insert(Key::from("name"), 'y');
        store.insert(Key::from(3), 'z');

        assert_eq!(store.push('w'), Ok(Key::from(11)));
    }

    /// Negative keys never pull the next key below 0.
    #[rstest]
    fn test_negative_keys_do_not_lower_next_key() {
        let mut store = OrderedStore::new();
        store.insert(Key::from(-7), 1);

        assert_eq!(store.next_key(), Ok(0));
    }

    /// Removing the largest key lowers the next key.
    #[rstest]
    fn test_remove_of_last_key_lowers_next_key() {
        let mut store = OrderedStore::new();
        store.push(1).unwrap();
        store.push(2).unwrap();
        store.remove(&Key::from(1));

        // Key 1 is free again once it is gone
        assert_eq!(store.next_key(), Ok(1));
    }

    /// Removing an inner key leaves the largest key, and so the next key, alone.
    #[rstest]
    fn test_remove_of_inner_key_keeps_next_key() {
        let mut store = OrderedStore::new();
        for value in ['a', 'b', 'c'] {
            store.push(value).unwrap();
        }
        store.remove(&Key::from(1));

        assert_eq!(store.next_key(), Ok(3));
    }

    /// Only non-negative integer keys count when renumbering.
    #[rstest]
    fn test_remove_renumbers_from_remaining_keys() {
        let mut store = OrderedStore::new();
        store.insert(Key::from(-3), 'n');
        store.insert(Key::from("name"), 's');
        store.insert(Key::from(10), 'x');
        store.remove(&Key::from(10));

        assert_eq!(store.next_key(), Ok(0));
    }

    /// A retain that drops nothing keeps the numbering untouched.
    #[rstest]
    fn test_retain_renumbers_only_when_pairs_go() {
        let mut store = OrderedStore::new();
        store.insert(Key::from(5), 1);
        store.insert(Key::from(9), 2);

        store.retain(|_, _| true);
        assert_eq!(store.next_key(), Ok(10));

        store.retain(|_, value| *value == 1);
        assert_eq!(store.next_key(), Ok(6));
    }

    /// Dropping the `i64::MAX` key makes appending possible again.
    #[rstest]
    fn test_remove_of_max_key_clears_overflow() {
        let mut store = OrderedStore::new();
        store.insert(Key::from(i64::MAX), 1);
        store.remove_index(0);

        assert_eq!(store.push(2), Ok(Key::from(0)));
    }

    /// Appending after `i64::MAX` fails and leaves the store as it was.
    #[rstest]
    fn test_push_after_max_key_overflows() {
        let mut store = OrderedStore::new();
        store.insert(Key::from(i64::MAX), 1);

        assert_eq!(
            store.push(2),
            Err(CollectionError::NextKeyOverflow { last: i64::MAX })
        );
        assert_eq!(store.len(), 1);
    }

    /// Rebinding a key replaces the value in place.
    #[rstest]
    fn test_insert_existing_key_keeps_position() {
        let mut store = OrderedStore::new();
        store.insert(Key::from("a"), 1);
        store.insert(Key::from("b"), 2);
        let previous = store.insert(Key::from("a"), 3);

        assert_eq!(previous, Some(1));
        let pairs: Vec<_> = store.iter().collect();
        assert_eq!(pairs, vec![(&Key::from("a"), &3), (&Key::from("b"), &2)]);
    }

    #[rstest]
    fn test_insert_new_rejects_duplicates() {
        let mut store = OrderedStore::new();
        store.insert_new(Key::from("a"), 1).unwrap();

        assert_eq!(
            store.insert_new(Key::from("a"), 2),
            Err(CollectionError::DuplicateKey { key: Key::from("a") })
        );
        assert_eq!(store.get(&Key::from("a")), Some(&1));
    }

    /// Removal shifts later pairs down; an out-of-range index removes nothing.
    #[rstest]
    fn test_remove_shifts_order() {
        let mut store = OrderedStore::new();
        for value in ['a', 'b', 'c'] {
            store.push(value).unwrap();
        }
        store.remove(&Key::from(0));

        assert_eq!(store.get_index(0), Some((&Key::from(1), &'b')));
        assert_eq!(store.remove_index(5), None);
    }

    /// A failing map stops at the first error.
    #[rstest]
    fn test_try_map_values_stops_at_first_error() {
        let mut store = OrderedStore::new();
        for value in [1_i32, -1, 2] {
            store.push(value).unwrap();
        }
        let mut calls = 0;
        let result: Result<OrderedStore<u32>, String> = store.try_map_values(|value| {
            calls += 1;
            u32::try_from(*value).map_err(|error| error.to_string())
        });

        assert!(result.is_err());
        assert_eq!(calls, 2);
    }
}
