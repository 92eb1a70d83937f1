//! Collection keys.
//!
//! A key is either an integer or a string. The two variants never compare
//! equal to each other: `Key::Integer(1)` and `Key::String("1")` are
//! distinct keys.

use std::borrow::Cow;
use std::fmt;

/// A collection key: an integer or a string.
///
/// Integer keys are what [`add`](crate::collection::ImmutableCollection::add)
/// assigns automatically; string keys are only ever bound explicitly.
///
/// # Examples
///
/// ```rust
/// use immutable_collection::collection::Key;
///
/// assert_eq!(Key::from(3), Key::Integer(3));
/// assert_eq!(Key::from("name"), Key::String("name".to_string()));
/// assert_ne!(Key::from(1), Key::from("1"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// An integer key.
    Integer(i64),
    /// A string key.
    String(String),
}

impl Key {
    /// Returns the integer if this is an integer key.
    #[inline]
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(index) => Some(*index),
            Self::String(_) => None,
        }
    }

    /// Returns the string slice if this is a string key.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Integer(_) => None,
            Self::String(name) => Some(name),
        }
    }

    /// Returns `true` for integer keys.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(index) => write!(formatter, "{index}"),
            Self::String(name) => write!(formatter, "{name:?}"),
        }
    }
}

/// Keys debug-print the way they display, so collections render as
/// `{0: 1, "A": "a"}`.
impl fmt::Debug for Key {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, formatter)
    }
}

macro_rules! impl_from_integer {
    ($($integer:ty),*) => {
        $(
            impl From<$integer> for Key {
                #[inline]
                fn from(index: $integer) -> Self {
                    Self::Integer(i64::from(index))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<&str> for Key {
    #[inline]
    fn from(name: &str) -> Self {
        Self::String(name.to_owned())
    }
}

impl From<String> for Key {
    #[inline]
    fn from(name: String) -> Self {
        Self::String(name)
    }
}

impl From<Cow<'_, str>> for Key {
    #[inline]
    fn from(name: Cow<'_, str>) -> Self {
        Self::String(name.into_owned())
    }
}

impl From<&Self> for Key {
    #[inline]
    fn from(key: &Self) -> Self {
        key.clone()
    }
}
