//! Tests for the hasher feature flags.
//!
//! The `fxhash` and `ahash` features swap the hasher behind the backing
//! store. Lookups, key order and equality must not depend on which one is
//! selected.

use immutable_collection::collection::{ImmutableArrayCollection, ImmutableCollection, Key};
use rstest::rstest;

// =============================================================================
// Referential Transparency Tests
// =============================================================================

/// The same key is found in collections built separately.
#[rstest]
fn test_same_key_found_in_independent_collections() {
    let first = ImmutableArrayCollection::new().set(Key::from("key"), 1);
    let second = ImmutableArrayCollection::new().set(Key::from("key"), 2);

    assert_eq!(first.get(&Key::from("key")), Some(&1));
    assert_eq!(second.get(&Key::from("key")), Some(&2));
}

/// Identical input builds equal collections under any hasher.
#[rstest]
fn test_identical_inputs_build_equal_collections() {
    let entries = vec![("alpha", 1), ("beta", 2), ("gamma", 3), ("delta", 4)];

    let first: ImmutableArrayCollection<i32> = entries.iter().copied().collect();
    let second: ImmutableArrayCollection<i32> = entries.iter().copied().collect();

    assert_eq!(first, second);
    for (name, expected) in &entries {
        assert_eq!(first.get(&Key::from(*name)), Some(expected));
    }
}

// =============================================================================
// Large Scale Tests
// =============================================================================

/// Order follows insertion, not hashing, even for many keys.
#[rstest]
fn test_large_scale_order_is_insertion_order() {
    let collection = ImmutableArrayCollection::from_values(0..10_000);

    assert_eq!(collection.count(), 10_000);
    assert!(
        collection
            .iter()
            .enumerate()
            .all(|(position, (key, value))| key.as_integer() == Some(i64::from(*value))
                && usize::try_from(*value) == Ok(position))
    );
}

/// Many string keys stay retrievable.
#[rstest]
fn test_large_scale_string_keys() {
    let collection: ImmutableArrayCollection<usize> = (0..5_000)
        .map(|index| (format!("key_{index}"), index))
        .collect();

    for index in (0..5_000).step_by(97) {
        assert_eq!(collection.get(&Key::from(format!("key_{index}"))), Some(&index));
    }
    assert_eq!(collection.get(&Key::from("key_5000")), None);
}

// =============================================================================
// Edge Case Keys
// =============================================================================

/// Unusual keys can be bound, found and removed.
#[rstest]
#[case(Key::from(""))]
#[case(Key::from("key\0with\nspecials"))]
#[case(Key::from("日本語キー"))]
#[case(Key::from(-1))]
#[case(Key::from(i64::MIN))]
#[case(Key::from(i64::MAX))]
fn test_edge_case_keys(#[case] key: Key) {
    let collection = ImmutableArrayCollection::from_values(["x"]).set(key.clone(), "edge");

    assert_eq!(collection.get(&key), Some(&"edge"));
    assert!(collection.remove(&key).get(&key).is_none());
}

/// Keys that look alike stay distinct.
#[rstest]
fn test_similar_keys_stay_distinct() {
    let collection = ImmutableArrayCollection::new()
        .set(Key::from("ab"), 1)
        .set(Key::from("ba"), 2)
        .set(Key::from("a"), 3)
        .set(Key::from(1), 4)
        .set(Key::from("1"), 5);

    assert_eq!(collection.count(), 5);
    assert_eq!(collection.get(&Key::from(1)), Some(&4));
    assert_eq!(collection.get(&Key::from("1")), Some(&5));
}
