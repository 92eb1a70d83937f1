//! Error types for collection construction and growth.
//!
//! Absent keys and values are never errors: lookups return `None` and
//! removals of missing entries return an equal collection. The errors here
//! report caller contract violations that would otherwise lose data.

use thiserror::Error;

use super::Key;

/// A caller contract violation detected by a collection operation.
///
/// # Examples
///
/// ```rust
/// use immutable_collection::collection::{CollectionError, ImmutableArrayCollection, Key};
///
/// let result = ImmutableArrayCollection::try_from_pairs([
///     (Key::from("a"), 1),
///     (Key::from("a"), 2),
/// ]);
///
/// assert_eq!(
///     result.unwrap_err(),
///     CollectionError::DuplicateKey { key: Key::from("a") }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// The same key appeared more than once in strict construction input.
    #[error("duplicate key {key} in collection input")]
    DuplicateKey {
        /// The repeated key.
        key: Key,
    },

    /// The next automatic integer key would exceed `i64::MAX`.
    #[error("cannot append: the next integer key after {last} is out of range")]
    NextKeyOverflow {
        /// The largest integer key bound so far.
        last: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_duplicate_key_display() {
        let error = CollectionError::DuplicateKey {
            key: Key::from("A"),
        };
        assert_eq!(
            error.to_string(),
            "duplicate key \"A\" in collection input"
        );
    }

    #[rstest]
    fn test_next_key_overflow_display() {
        let error = CollectionError::NextKeyOverflow { last: i64::MAX };
        assert_eq!(
            error.to_string(),
            format!("cannot append: the next integer key after {} is out of range", i64::MAX)
        );
    }

    /// Errors box into `dyn std::error::Error`.
    #[rstest]
    fn test_errors_are_std_errors() {
        let error: Box<dyn std::error::Error> =
            Box::new(CollectionError::DuplicateKey { key: Key::from(1) });
        assert_eq!(error.to_string(), "duplicate key 1 in collection input");
    }
}
