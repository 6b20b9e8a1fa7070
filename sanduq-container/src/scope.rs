//! Binding lifecycle scopes.
//!
//! - [`Scope::Singleton`] — one instance per key for the container's lifetime
//! - [`Scope::Transient`] — a new instance on every `get`
//!
//! # Ordering
//! `Singleton > Transient`: a singleton outlives any transient.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifetime of instances produced by a binding.
///
/// # Examples
/// ```
/// use sanduq_container::scope::Scope;
///
/// assert!(Scope::Singleton > Scope::Transient);
/// assert_eq!(Scope::default(), Scope::Singleton);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Built lazily on the first `get`, cached until the key is rebound.
    ///
    /// This is what `to()` commits until a scope call says otherwise.
    #[default]
    Singleton,

    /// Built on every `get`, never cached.
    Transient,
}

impl Scope {
    /// Returns `true` if instances are cached by the binding.
    #[inline]
    pub fn is_cached(&self) -> bool {
        matches!(self, Scope::Singleton)
    }

    #[inline]
    fn lifetime_rank(&self) -> u8 {
        match self {
            Scope::Singleton => 1,
            Scope::Transient => 0,
        }
    }
}

impl PartialOrd for Scope {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scope {
    fn cmp(&self, other: &Self) -> Ordering {
        self.lifetime_rank().cmp(&other.lifetime_rank())
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Singleton => f.write_str("Singleton"),
            Scope::Transient => f.write_str("Transient"),
        }
    }
}
