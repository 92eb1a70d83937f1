//! The `immutable_collection!` literal macro.

use super::array_collection::append;
use super::store::OrderedStore;
use super::{ImmutableArrayCollection, Key};

/// Creates an [`ImmutableArrayCollection`] from an array-like literal.
///
/// Entries are either a bare value, appended under the next free integer
/// key, or `key => value`. Keys and values go through [`Into`], so the
/// target collection type usually needs an annotation. As with an array
/// literal, a repeated key keeps its first position and takes the last value.
///
/// # Examples
///
/// ```rust
/// use immutable_collection::prelude::*;
///
/// let collection: ImmutableArrayCollection<Value> = immutable_collection![
///     1,
///     "A" => "a",
///     2,
///     "null" => Value::Null,
///     10 => 3,
///     4,
/// ];
///
/// assert_eq!(collection.count(), 6);
/// assert_eq!(
///     collection.get_keys(),
///     vec![
///         Key::from(0),
///         Key::from("A"),
///         Key::from(1),
///         Key::from("null"),
///         Key::from(10),
///         Key::from(11),
///     ]
/// );
///
/// let empty: ImmutableArrayCollection<i32> = immutable_collection![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! immutable_collection {
    (@entries [$($done:expr,)*]) => {
        ::std::vec![$($done,)*]
    };
    (@entries [$($done:expr,)*] $key:expr => $value:expr $(, $($rest:tt)*)?) => {
        $crate::immutable_collection!(
            @entries [
                $($done,)*
                $crate::collection::LiteralEntry::Bind(
                    ::core::convert::Into::into($key),
                    ::core::convert::Into::into($value),
                ),
            ]
            $($($rest)*)?
        )
    };
    (@entries [$($done:expr,)*] $value:expr $(, $($rest:tt)*)?) => {
        $crate::immutable_collection!(
            @entries [
                $($done,)*
                $crate::collection::LiteralEntry::Append(::core::convert::Into::into($value)),
            ]
            $($($rest)*)?
        )
    };
    () => {
        $crate::collection::ImmutableArrayCollection::new()
    };
    ($($body:tt)+) => {
        $crate::collection::ImmutableArrayCollection::from_literal(
            $crate::immutable_collection!(@entries [] $($body)+)
        )
    };
}

/// One entry of an [`immutable_collection!`] literal.
#[doc(hidden)]
pub enum LiteralEntry<V> {
    Append(V),
    Bind(Key, V),
}

impl<V> ImmutableArrayCollection<V> {
    #[doc(hidden)]
    #[must_use]
    pub fn from_literal(entries: Vec<LiteralEntry<V>>) -> Self {
        let mut store = OrderedStore::with_capacity(entries.len());
        for entry in entries {
            match entry {
                LiteralEntry::Append(value) => append(&mut store, value),
                LiteralEntry::Bind(key, value) => {
                    store.insert(key, value);
                }
            }
        }
        Self::from_store(store)
    }
}

#[cfg(test)]
mod tests {
    use crate::collection::{ImmutableArrayCollection, ImmutableCollection, Key, Value};
    use rstest::rstest;

    /// Bare values are appended like `from_values`.
    #[rstest]
    fn test_values_only() {
        let collection: ImmutableArrayCollection<i32> = crate::immutable_collection![3, 4, 5];

        assert_eq!(collection, ImmutableArrayCollection::from_values([3, 4, 5]));
    }

    #[rstest]
    fn test_pairs_only_with_trailing_comma() {
        let collection: ImmutableArrayCollection<&str> = crate::immutable_collection![
            "x" => "1",
            "y" => "2",
        ];

        assert_eq!(collection.get(&Key::from("y")), Some(&"2"));
        assert_eq!(collection.count(), 2);
    }

    /// A repeated key behaves as in an array literal.
    #[rstest]
    fn test_repeated_key_keeps_first_position_last_value() {
        let collection: ImmutableArrayCollection<i32> =
            crate::immutable_collection!["a" => 1, "b" => 2, "a" => 3];

        assert_eq!(
            collection.to_array(),
            vec![(Key::from("a"), 3), (Key::from("b"), 2)]
        );
    }

    /// Keys and values go through `Into`.
    #[rstest]
    fn test_mixed_entries_convert_into_values() {
        let collection: ImmutableArrayCollection<Value> =
            crate::immutable_collection![1, "A" => "a", -4 => 2.5, true];

        assert_eq!(collection.get(&Key::from(0)), Some(&Value::Integer(1)));
        assert_eq!(collection.get(&Key::from(-4)), Some(&Value::Float(2.5)));
        assert_eq!(collection.get(&Key::from(1)), Some(&Value::Bool(true)));
    }
}
