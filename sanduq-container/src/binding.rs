//! Fluent binding configuration.
//!
//! ```text
//! container.bind(key) ──> BindingBuilder ──to::<T>()──────────> ConstructorBinding ──in_*_scope()
//!                                        ──to_constant_value()─> ConstantBinding
//!                                        ──in_*_scope()───────> (unconfigured binding)
//! ```
//!
//! `to::<T>()` and `to_constant_value()` write the binding into the
//! registry right away; the scope calls re-commit it with the chosen scope.

use std::any::Any;
use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::container::Container;
use crate::inject::{Injectable, erased_constructor};
use crate::key::{ServiceId, TypeKey};
use crate::registry::{Binding, Instance, Provider};
use crate::scope::Scope;

/// Configures the binding of one key.
///
/// Returned by [`Container::bind`] and [`Container::rebind`]. Nothing is
/// registered until one of its methods runs.
#[must_use = "a binding is only registered once .to(), .to_constant_value() or a scope method is called"]
pub struct BindingBuilder<'a> {
    container: &'a Container,
    key: ServiceId,
}

impl<'a> BindingBuilder<'a> {
    pub(crate) fn new(container: &'a Container, key: ServiceId) -> Self {
        Self { container, key }
    }

    /// Satisfies the key by constructing `T`.
    ///
    /// The binding is registered immediately as a singleton; call a scope
    /// method on the returned handle to change that. `T`'s constructor
    /// arguments are read from the metadata store each time the binding
    /// builds an instance.
    pub fn to<T: Injectable>(self) -> ConstructorBinding<'a> {
        let ty = TypeKey::of::<T>();
        let provider = Provider::Constructor {
            ty,
            construct: Arc::new(erased_constructor::<T>),
        };
        debug!(key = %self.key, type_name = ty.type_name(), "Bound to constructor");
        self.commit(provider.clone(), Scope::Singleton);

        ConstructorBinding {
            container: self.container,
            key: self.key,
            ty,
            provider,
        }
    }

    /// Satisfies the key with `value`.
    ///
    /// The binding is a singleton whose cache already holds `value`; no
    /// constructor ever runs for it.
    pub fn to_constant_value<T: Any + Send + Sync>(self, value: T) -> ConstantBinding {
        self.to_instance(Arc::new(value))
    }

    /// Satisfies the key with an existing shared instance, keeping its
    /// identity.
    pub fn to_instance(self, instance: Instance) -> ConstantBinding {
        debug!(key = %self.key, "Bound to constant value");
        self.commit(Provider::Constant(instance), Scope::Singleton);

        ConstantBinding { key: self.key }
    }

    /// Registers the key as a singleton without a provider.
    ///
    /// `get` fails with [`ProviderNotSet`](crate::error::SanduqError::ProviderNotSet).
    pub fn in_singleton_scope(self) {
        self.commit(Provider::Unset, Scope::Singleton);
    }

    /// Registers the key as transient without a provider.
    ///
    /// `get` fails with [`ProviderNotSet`](crate::error::SanduqError::ProviderNotSet).
    pub fn in_transient_scope(self) {
        self.commit(Provider::Unset, Scope::Transient);
    }

    fn commit(&self, provider: Provider, scope: Scope) {
        let binding = Binding::new(self.key.clone(), provider, scope);
        if self.container.registry().commit(binding).is_some() {
            warn!(key = %self.key, "bind() replaced an existing binding, use rebind() to make this explicit");
        }
    }
}

/// A key bound to a constructor.
///
/// `inject` here is shorthand for [`Container::register`]: it writes the
/// per-type metadata of `T`, so it applies to every binding that
/// constructs `T`, not only this key. Redeclaring a parameter with another
/// id logs a warning.
pub struct ConstructorBinding<'a> {
    container: &'a Container,
    key: ServiceId,
    ty: TypeKey,
    provider: Provider,
}

impl ConstructorBinding<'_> {
    /// Declares that parameter `index` of `T` receives `id`.
    pub fn inject(self, index: usize, id: impl Into<ServiceId>) -> Self {
        self.container.metadata().declare(self.ty, index, id.into());
        self
    }

    /// Declares parameters `0..n` of `T` in iteration order.
    pub fn inject_all<I>(self, ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ServiceId>,
    {
        for (index, id) in ids.into_iter().enumerate() {
            self.container.metadata().declare(self.ty, index, id.into());
        }
        self
    }

    /// One instance for the container's lifetime, built on first `get`.
    pub fn in_singleton_scope(self) {
        self.finish(Scope::Singleton);
    }

    /// A new instance on every `get`.
    pub fn in_transient_scope(self) {
        self.finish(Scope::Transient);
    }

    fn finish(self, scope: Scope) {
        let binding = Binding::new(self.key, self.provider, scope);
        self.container.registry().commit(binding);
    }
}

/// A key bound to a constant value.
///
/// Scope calls are accepted for symmetry but change nothing: constants are
/// always singletons.
pub struct ConstantBinding {
    key: ServiceId,
}

impl ConstantBinding {
    pub fn in_singleton_scope(self) {}

    pub fn in_transient_scope(self) {
        trace!(key = %self.key, "Ignoring transient scope on a constant binding");
    }
}
