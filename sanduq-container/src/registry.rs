//! Binding registry — one active binding per service id.
//!
//! A [`Binding`] is the recipe for one key: how to produce the instance
//! (its provider), how long it lives (its scope) and, for singletons, the
//! cached instance.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing::trace;

use crate::error::Result;
use crate::inject::Dependencies;
use crate::key::{ServiceId, TypeKey};
use crate::scope::Scope;

/// A resolved service. Compare identities with [`Arc::ptr_eq`].
pub type Instance = Arc<dyn Any + Send + Sync>;

/// Builds an instance of one concrete type from its resolved arguments.
///
/// `Arc` because the same constructor is shared by every re-commit of a
/// binding (scope changes) and called from any thread.
pub(crate) type ConstructFn = Arc<dyn Fn(&Dependencies) -> Result<Instance> + Send + Sync>;

/// How a binding produces its instance.
#[derive(Clone)]
pub(crate) enum Provider {
    /// `bind()` was followed by a scope call but never by `to*()`.
    Unset,
    /// Construct `ty` from the ids recorded for it in the metadata store.
    Constructor { ty: TypeKey, construct: ConstructFn },
    /// Always this value.
    Constant(Instance),
}

impl Provider {
    pub(crate) fn kind(&self) -> BindingKind {
        match self {
            Provider::Unset => BindingKind::Unconfigured,
            Provider::Constructor { .. } => BindingKind::Constructor,
            Provider::Constant(_) => BindingKind::Constant,
        }
    }
}

/// Registry entry for a single service id.
pub(crate) struct Binding {
    key: ServiceId,
    provider: Provider,
    scope: Scope,
    cache: OnceCell<Instance>,
}

impl Binding {
    /// Creates a binding with an empty cache.
    ///
    /// Constants ignore `scope`: they are always singletons and start
    /// with the value already cached.
    pub(crate) fn new(key: ServiceId, provider: Provider, scope: Scope) -> Self {
        let (scope, cache) = match &provider {
            Provider::Constant(value) => (Scope::Singleton, OnceCell::with_value(Arc::clone(value))),
            _ => (scope, OnceCell::new()),
        };
        Self { key, provider, scope, cache }
    }

    pub(crate) fn key(&self) -> &ServiceId {
        &self.key
    }

    pub(crate) fn provider(&self) -> &Provider {
        &self.provider
    }

    pub(crate) fn scope(&self) -> Scope {
        self.scope
    }

    /// The cached singleton, if it was built already.
    pub(crate) fn cached(&self) -> Option<&Instance> {
        self.cache.get()
    }

    /// Returns the cached instance, building it with `init` first if the
    /// cache is empty.
    ///
    /// Concurrent callers block until the first one finishes, so `init`
    /// succeeds at most once. A failed `init` leaves the cache empty.
    pub(crate) fn get_or_try_init(&self, init: impl FnOnce() -> Result<Instance>) -> Result<Instance> {
        self.cache.get_or_try_init(init).map(Arc::clone)
    }

    pub(crate) fn info(&self) -> BindingInfo {
        BindingInfo {
            key: self.key.clone(),
            scope: self.scope,
            kind: self.provider.kind(),
            type_name: match &self.provider {
                Provider::Constructor { ty, .. } => Some(ty.type_name()),
                _ => None,
            },
            cached: self.cache.get().is_some(),
        }
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("key", &self.key)
            .field("kind", &self.provider.kind())
            .field("scope", &self.scope)
            .field("cached", &self.cache.get().is_some())
            .finish()
    }
}

/// What kind of provider a binding has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingKind {
    Constructor,
    Constant,
    Unconfigured,
}

/// Point-in-time description of one binding, for startup diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingInfo {
    pub key: ServiceId,
    pub scope: Scope,
    pub kind: BindingKind,
    /// Constructed type, for constructor bindings.
    pub type_name: Option<&'static str>,
    /// Whether a singleton instance is currently cached.
    pub cached: bool,
}

/// Stores the active binding of every service id.
///
/// Entries are `Arc`ed so a resolution can hold on to its binding after
/// the map guard is released; the registry is never locked while a
/// provider runs.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    bindings: DashMap<ServiceId, Arc<Binding>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `binding` the active entry for its key.
    ///
    /// Returns the entry it replaced; its cached instance goes with it.
    pub fn commit(&self, binding: Binding) -> Option<Arc<Binding>> {
        trace!(key = %binding.key, scope = %binding.scope, "Committing binding");
        self.bindings.insert(binding.key.clone(), Arc::new(binding))
    }

    pub fn remove(&self, key: &str) -> Option<Arc<Binding>> {
        self.bindings.remove(key).map(|(_, binding)| binding)
    }

    pub fn get(&self, key: &str) -> Option<Arc<Binding>> {
        self.bindings.get(key).map(|entry| Arc::clone(entry.value()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.bindings.contains_key(key)
    }

    /// Returns the number of bound keys.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// All bound keys, sorted.
    pub fn keys(&self) -> Vec<ServiceId> {
        let mut keys: Vec<_> = self.bindings.iter().map(|e| e.key().clone()).collect();
        keys.sort();
        keys
    }

    /// All active bindings, sorted by key.
    pub fn snapshot(&self) -> Vec<Arc<Binding>> {
        let mut all: Vec<_> = self.bindings.iter().map(|e| Arc::clone(e.value())).collect();
        all.sort_by(|a, b| a.key.cmp(&b.key));
        all
    }
}
