//! Dynamically typed collection values with strict equality.
//!
//! [`Value`] lets a single collection hold integers, strings, `null` and
//! opaque objects side by side. Equality is strict: two values are equal only
//! when they have the same variant and the same payload, and objects are
//! equal only when they are the very same allocation.
//!
//! | left            | right             | equal |
//! |-----------------|-------------------|-------|
//! | `Integer(0)`    | `Bool(false)`     | no    |
//! | `Integer(0)`    | `Null`            | no    |
//! | `Integer(1)`    | `Float(1.0)`      | no    |
//! | `String("0")`   | `Integer(0)`      | no    |
//! | `Float(NAN)`    | `Float(NAN)`      | no    |
//! | object `a`      | clone of `a`      | yes   |
//! | object `a`      | object `b` (same contents) | no |

use std::any::Any;
use std::fmt;

use super::ReferenceCounter;

#[cfg(feature = "arc")]
type AnyObject = dyn Any + Send + Sync;

#[cfg(not(feature = "arc"))]
type AnyObject = dyn Any;

/// A shared, opaque object compared by identity.
///
/// Cloning a handle yields a handle to the same object, so clones compare
/// equal. Two handles created separately never compare equal, even when the
/// wrapped values would.
///
/// # Examples
///
/// ```rust
/// use immutable_collection::collection::ObjectHandle;
///
/// let first = ObjectHandle::new(vec![1, 2, 3]);
/// let same = first.clone();
/// let other = ObjectHandle::new(vec![1, 2, 3]);
///
/// assert_eq!(first, same);
/// assert_ne!(first, other);
/// assert_eq!(first.downcast_ref::<Vec<i32>>(), Some(&vec![1, 2, 3]));
/// ```
#[derive(Clone)]
pub struct ObjectHandle {
    object: ReferenceCounter<AnyObject>,
    type_name: &'static str,
}

impl ObjectHandle {
    /// Wraps `object` in a new handle.
    #[cfg(not(feature = "arc"))]
    #[must_use]
    pub fn new<T: Any>(object: T) -> Self {
        Self {
            object: ReferenceCounter::new(object),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Wraps `object` in a new handle.
    #[cfg(feature = "arc")]
    #[must_use]
    pub fn new<T: Any + Send + Sync>(object: T) -> Self {
        Self {
            object: ReferenceCounter::new(object),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Returns a reference to the wrapped object if it is a `T`.
    #[inline]
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        let object: &dyn Any = &*self.object;
        object.downcast_ref::<T>()
    }

    /// Returns the type name of the wrapped object.
    #[inline]
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl PartialEq for ObjectHandle {
    fn eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.object, &other.object)
    }
}

impl Eq for ObjectHandle {}

impl fmt::Debug for ObjectHandle {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ObjectHandle")
            .field("type_name", &self.type_name)
            .field("address", &ReferenceCounter::as_ptr(&self.object).cast::<()>())
            .finish()
    }
}

/// A dynamically typed value.
///
/// # Examples
///
/// ```rust
/// use immutable_collection::collection::Value;
///
/// assert_eq!(Value::from(0), Value::Integer(0));
/// assert_ne!(Value::from(0), Value::Bool(false));
/// assert_ne!(Value::from(0), Value::Null);
/// assert!(Value::from(2.5).is_numeric());
/// assert!(!Value::from("2").is_numeric());
/// ```
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// The absent value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    String(String),
    /// An opaque object, compared by identity.
    Object(ObjectHandle),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for [`Value::Bool`].
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    /// Returns `true` for [`Value::Integer`] and [`Value::Float`].
    ///
    /// Strings are never numeric, whatever they contain.
    #[inline]
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    /// Returns `true` for [`Value::String`].
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Returns `true` for [`Value::Object`].
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Returns the boolean payload, if any.
    #[inline]
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the integer payload, if any.
    #[inline]
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the float payload, if any.
    #[inline]
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the string payload, if any.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the object handle, if any.
    #[inline]
    #[must_use]
    pub const fn as_object(&self) -> Option<&ObjectHandle> {
        match self {
            Self::Object(handle) => Some(handle),
            _ => None,
        }
    }

    /// Returns the name of this value's variant.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Integer(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Object(_) => "object",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Integer(left), Self::Integer(right)) => left == right,
            #[allow(clippy::float_cmp)]
            (Self::Float(left), Self::Float(right)) => left == right,
            (Self::String(left), Self::String(right)) => left == right,
            (Self::Object(left), Self::Object(right)) => left == right,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => formatter.write_str("null"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Integer(number) => write!(formatter, "{number}"),
            Self::Float(number) => write!(formatter, "{number}"),
            Self::String(text) => formatter.write_str(text),
            Self::Object(handle) => write!(formatter, "object({})", handle.type_name()),
        }
    }
}

impl From<()> for Value {
    #[inline]
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

macro_rules! impl_from_number {
    ($variant:ident, $target:ty, $($source:ty),*) => {
        $(
            impl From<$source> for Value {
                #[inline]
                fn from(number: $source) -> Self {
                    Self::$variant(<$target>::from(number))
                }
            }
        )*
    };
}

impl_from_number!(Integer, i64, i8, i16, i32, i64, u8, u16, u32);
impl_from_number!(Float, f64, f32, f64);

impl From<&str> for Value {
    #[inline]
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<ObjectHandle> for Value {
    #[inline]
    fn from(handle: ObjectHandle) -> Self {
        Self::Object(handle)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Null, Into::into)
    }
}
