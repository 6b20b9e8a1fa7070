//! Keys used by the container.
//!
//! [`ServiceId`] names a binding in the registry. [`TypeKey`] names a
//! constructible Rust type in the metadata store.

use std::any::{TypeId, type_name};
use std::borrow::{Borrow, Cow};
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Opaque token naming a bindable capability.
///
/// Service ids are plain strings: `"Logger"`, `"UserController"`. Uniqueness
/// is up to the caller, nothing is namespaced.
///
/// # Examples
/// ```
/// use sanduq_container::key::ServiceId;
///
/// let a = ServiceId::from("Logger");
/// let b = ServiceId::from(String::from("Logger"));
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "Logger");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(Cow<'static, str>);

impl ServiceId {
    /// Creates an id from a static string without allocating.
    #[inline]
    pub const fn new(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    /// Uses the full type name of `T` as the id.
    ///
    /// Handy when a binding has exactly one implementation and the type
    /// itself is a good enough symbol.
    ///
    /// ```
    /// use sanduq_container::key::ServiceId;
    ///
    /// struct Mailer;
    /// assert!(ServiceId::of::<Mailer>().as_str().ends_with("Mailer"));
    /// ```
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self(Cow::Borrowed(type_name::<T>()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for ServiceId {
    fn from(id: &'static str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ServiceId {
    fn from(id: String) -> Self {
        Self(Cow::Owned(id))
    }
}

impl From<&ServiceId> for ServiceId {
    fn from(id: &ServiceId) -> Self {
        id.clone()
    }
}

impl Borrow<str> for ServiceId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ServiceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServiceId({:?})", self.as_str())
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies a constructible type.
///
/// Equality and hashing use the [`TypeId`] only, so two types that share a
/// short name in different modules never collide. The type name is kept for
/// messages.
#[derive(Clone, Copy)]
pub struct TypeKey {
    type_id: TypeId,
    type_name: &'static str,
}

impl TypeKey {
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
        }
    }

    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Fully qualified type name, as reported by [`std::any::type_name`].
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeKey({})", self.type_name)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name)
    }
}
