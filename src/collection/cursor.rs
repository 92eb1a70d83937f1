//! Positional traversal over a collection.
//!
//! A [`Cursor`] is a small, separate object that remembers a position within
//! one collection. The collection itself carries no traversal state, so any
//! number of cursors (and iterators) can walk the same collection without
//! disturbing each other.
//!
//! # Examples
//!
//! ```rust
//! use immutable_collection::collection::{ImmutableArrayCollection, ImmutableCollection, Key};
//!
//! let collection = ImmutableArrayCollection::from_values(['a', 'b', 'c']);
//! let mut cursor = collection.cursor();
//!
//! assert_eq!(cursor.current(), Some(&'a'));
//! assert_eq!(cursor.next(), Some(&'b'));
//! assert_eq!(cursor.key(), Some(&Key::from(1)));
//! assert_eq!(cursor.last(), Some(&'c'));
//! assert_eq!(cursor.next(), None); // past the end
//! assert_eq!(cursor.key(), None);
//! assert_eq!(cursor.first(), Some(&'a'));
//! ```

use indexmap::map::Slice;

use super::Key;

/// A movable position over the pairs of a collection.
///
/// Once the cursor has moved off either end it stays invalid: `key` and
/// `current` answer `None` and `next`/`prev` do not bring it back. Only
/// [`first`](Self::first) and [`last`](Self::last) reposition it.
#[derive(Debug)]
pub struct Cursor<'a, V> {
    entries: &'a Slice<Key, V>,
    /// `None` when the cursor is out of range.
    position: Option<usize>,
}

impl<V> Clone for Cursor<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Cursor<'_, V> {}

impl<'a, V> Cursor<'a, V> {
    pub(crate) fn new(entries: &'a Slice<Key, V>) -> Self {
        let position = (!entries.is_empty()).then_some(0);
        Self { entries, position }
    }

    /// Moves to the first pair and returns its value.
    pub fn first(&mut self) -> Option<&'a V> {
        self.position = (!self.entries.is_empty()).then_some(0);
        self.current()
    }

    /// Moves to the last pair and returns its value.
    pub fn last(&mut self) -> Option<&'a V> {
        self.position = self.entries.len().checked_sub(1);
        self.current()
    }

    /// Returns the key at the cursor without moving.
    #[must_use]
    pub fn key(&self) -> Option<&'a Key> {
        self.entry().map(|(key, _)| key)
    }

    /// Returns the value at the cursor without moving.
    #[must_use]
    pub fn current(&self) -> Option<&'a V> {
        self.entry().map(|(_, value)| value)
    }

    /// Advances to the next pair and returns its value, or `None` past the
    /// end.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&'a V> {
        self.position = self
            .position
            .map(|index| index + 1)
            .filter(|index| *index < self.entries.len());
        self.current()
    }

    /// Steps back to the previous pair and returns its value, or `None`
    /// before the start.
    pub fn prev(&mut self) -> Option<&'a V> {
        self.position = self.position.and_then(|index| index.checked_sub(1));
        self.current()
    }

    /// Returns the zero-based position, or `None` when out of range.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        self.position
    }

    fn entry(&self) -> Option<(&'a Key, &'a V)> {
        self.position.and_then(|index| self.entries.get_index(index))
    }
}
