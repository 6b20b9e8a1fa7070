//! # The Container
//!
//! Owns the binding registry and the dependency metadata store, and is the
//! single entry point for configuration (`bind`, `rebind`, `register`) and
//! resolution (`get`).
//!
//! # Resolution
//! ```text
//! get(key)
//!   ├─ no binding ─────────────────────────> NotBound
//!   ├─ singleton already cached ───────────> cached instance
//!   └─ run provider
//!        ├─ unset ─────────────────────────> ProviderNotSet
//!        ├─ constant ──────────────────────> the value
//!        └─ constructor T
//!             for id in dependencies_of(T):  get(id)   (depth first, in order)
//!             T::construct(resolved args)
//! ```
//!
//! Every resolution chain carries the keys it is currently building;
//! asking for one of them again fails with `CircularDependency` instead of
//! recursing forever.
//!
//! # Examples
//! ```rust
//! use std::sync::Arc;
//! use sanduq_container::prelude::*;
//!
//! struct Config {
//!     database_url: String,
//! }
//!
//! struct Database {
//!     config: Arc<Config>,
//! }
//!
//! impl Injectable for Database {
//!     fn construct(deps: &Dependencies) -> Result<Self> {
//!         Ok(Database { config: deps.arg(0)? })
//!     }
//! }
//!
//! let container = Container::new();
//! container.register::<Database>().inject(0, "Config");
//!
//! container.bind("Config").to_constant_value(Config {
//!     database_url: "postgres://localhost/app".into(),
//! });
//! container.bind("Database").to::<Database>().in_singleton_scope();
//!
//! let db = container.get_as::<Database>("Database").expect("wired");
//! assert_eq!(db.config.database_url, "postgres://localhost/app");
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use sanduq_support::rendering::{shorten_type_name, suggest_similar};
use tracing::{debug, info, instrument, trace, warn};

use crate::binding::BindingBuilder;
use crate::error::{NotBoundError, Result, SanduqError};
use crate::graph::{DependencyInfo, GraphValidator, ResolutionStack};
use crate::inject::{Dependencies, downcast_instance};
use crate::key::{ServiceId, TypeKey};
use crate::metadata::{DependencySlots, MetadataStore, TypeRegistration};
use crate::registry::{Binding, BindingInfo, Instance, Provider, Registry};
use crate::scope::Scope;
use crate::settings::ContainerSettings;

// ═══════════════════════════════════════════
// Container
// ═══════════════════════════════════════════

/// Thread-safe dependency injection container.
///
/// Share it behind an `Arc` if several threads resolve from it.
pub struct Container {
    registry: Registry,
    metadata: MetadataStore,
    settings: ContainerSettings,
}

impl Container {
    /// Creates an empty container with default settings.
    pub fn new() -> Self {
        Self::with_settings(ContainerSettings::default())
    }

    pub fn with_settings(settings: ContainerSettings) -> Self {
        debug!(?settings, "Creating container");
        Self {
            registry: Registry::new(),
            metadata: MetadataStore::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &ContainerSettings {
        &self.settings
    }

    // ── Configuration ──

    /// Starts configuring the binding for `key`.
    ///
    /// Nothing is registered until the builder's `to*()` or scope method
    /// runs. Binding a key that is already bound replaces it (with a
    /// warning); prefer [`rebind`](Self::rebind) for that.
    pub fn bind(&self, key: impl Into<ServiceId>) -> BindingBuilder<'_> {
        BindingBuilder::new(self, key.into())
    }

    /// Drops the current binding of `key`, cached singleton included, and
    /// starts configuring a new one.
    pub fn rebind(&self, key: impl Into<ServiceId>) -> BindingBuilder<'_> {
        let key = key.into();
        if let Some(old) = self.registry.remove(key.as_str()) {
            debug!(key = %key, had_instance = old.cached().is_some(), "Removed binding for rebind");
        }
        BindingBuilder::new(self, key)
    }

    /// Registers `T` as a constructible type and returns a handle to
    /// declare its constructor parameters.
    pub fn register<T: 'static>(&self) -> TypeRegistration<'_> {
        TypeRegistration::new(&self.metadata, TypeKey::of::<T>())
    }

    /// The dependency metadata store of this container.
    pub fn metadata(&self) -> &MetadataStore {
        &self.metadata
    }

    pub(crate) fn registry(&self) -> &Registry {
        &self.registry
    }

    // ── Resolution ──

    /// Resolves `key` to a fully wired instance.
    ///
    /// # Errors
    /// - [`SanduqError::NotBound`] — `key` or one of its dependencies has no binding
    /// - [`SanduqError::ProviderNotSet`] — a binding was never given a provider
    /// - [`SanduqError::CircularDependency`] — the chain asked for a key it is already building
    /// - anything a constructor returned, unchanged
    pub fn get(&self, key: impl Into<ServiceId>) -> Result<Instance> {
        let key = key.into();
        let mut stack = ResolutionStack::default();
        self.resolve(&key, &mut stack)
    }

    /// Resolves `key` and downcasts the instance to `T`.
    ///
    /// ```rust,ignore
    /// let controller: Arc<UserController> = container.get_as("UserController")?;
    /// ```
    pub fn get_as<T: Any + Send + Sync>(&self, key: impl Into<ServiceId>) -> Result<Arc<T>> {
        let key = key.into();
        let instance = self.get(&key)?;
        downcast_instance(&key, instance)
    }

    fn resolve(&self, key: &ServiceId, stack: &mut ResolutionStack) -> Result<Instance> {
        let binding = self
            .registry
            .get(key.as_str())
            .ok_or_else(|| self.not_bound(key, stack.current()))?;

        if let Some(instance) = binding.cached() {
            trace!(key = %key, "Resolved from cache");
            return Ok(Arc::clone(instance));
        }

        // must run before touching the once-cell: re-entering an init in
        // progress on this thread would block forever
        stack.enter(key)?;

        let result = match binding.scope() {
            Scope::Singleton => binding.get_or_try_init(|| self.provide(&binding, stack)),
            Scope::Transient => self.provide(&binding, stack),
        };

        stack.leave();
        result
    }

    fn provide(&self, binding: &Binding, stack: &mut ResolutionStack) -> Result<Instance> {
        match binding.provider() {
            Provider::Unset => Err(SanduqError::ProviderNotSet {
                key: binding.key().clone(),
            }),
            Provider::Constant(value) => Ok(Arc::clone(value)),
            Provider::Constructor { ty, construct } => {
                let slots = self.dependency_slots(binding.key(), ty)?;

                let mut deps = Dependencies::new(*ty);
                for id in slots {
                    let instance = match &id {
                        Some(dep) => Some(self.resolve(dep, stack)?),
                        None => None,
                    };
                    deps.push(id, instance);
                }

                trace!(
                    key = %binding.key(),
                    type_name = %shorten_type_name(ty.type_name()),
                    scope = %binding.scope(),
                    args = deps.len(),
                    "Constructing"
                );
                construct(&deps)
            }
        }
    }

    /// Constructor parameters of `ty`, honouring `strict_metadata`.
    fn dependency_slots(&self, key: &ServiceId, ty: &TypeKey) -> Result<DependencySlots> {
        match self.metadata.lookup(ty) {
            Some(slots) => Ok(slots),
            None if self.settings.strict_metadata => Err(SanduqError::MissingMetadata {
                key: key.clone(),
                type_name: ty.type_name(),
            }),
            None => {
                trace!(type_name = ty.type_name(), "No metadata, constructing without arguments");
                Ok(Vec::new())
            }
        }
    }

    fn not_bound(&self, key: &ServiceId, required_by: Option<&ServiceId>) -> SanduqError {
        let keys = self.registry.keys();
        let available: Vec<&str> = keys.iter().map(ServiceId::as_str).collect();
        let suggestions = suggest_similar(key.as_str(), &available, 3)
            .into_iter()
            .map(ServiceId::from)
            .collect();

        SanduqError::NotBound(NotBoundError {
            requested: key.clone(),
            required_by: required_by.cloned(),
            suggestions,
        })
    }

    // ── Diagnostics ──

    /// Number of registered keys. Informational only.
    pub fn id(&self) -> usize {
        self.registry.len()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn is_bound(&self, key: impl AsRef<str>) -> bool {
        self.registry.contains(key.as_ref())
    }

    /// All bound keys, sorted.
    pub fn keys(&self) -> Vec<ServiceId> {
        self.registry.keys()
    }

    /// Snapshot of every binding, sorted by key.
    pub fn bindings(&self) -> Vec<BindingInfo> {
        self.registry.snapshot().iter().map(|b| b.info()).collect()
    }

    /// Checks the whole binding graph without constructing anything.
    ///
    /// Meant to run once at startup, after all collaborators bound their
    /// services, to turn configuration mistakes into one early error
    /// instead of a failure on the first request that needs them.
    ///
    /// # Errors
    /// - [`SanduqError::ProviderNotSet`] — a binding has no provider
    /// - [`SanduqError::MissingMetadata`] — with `strict_metadata` only
    /// - [`SanduqError::NotBound`] — a declared dependency has no binding
    /// - [`SanduqError::CircularDependency`] — the graph has a cycle
    /// - [`SanduqError::ScopeMismatch`] — with `strict_scopes` only
    #[instrument(skip(self), name = "container_validate")]
    pub fn validate(&self) -> Result<()> {
        info!(
            bindings = self.registry.len(),
            types = self.metadata.len(),
            "Validating container"
        );

        let mut nodes = Vec::new();
        for binding in self.registry.snapshot() {
            let dependencies = match binding.provider() {
                Provider::Unset => {
                    return Err(SanduqError::ProviderNotSet {
                        key: binding.key().clone(),
                    });
                }
                Provider::Constant(_) => Vec::new(),
                Provider::Constructor { ty, .. } => {
                    if !self.metadata.is_registered(ty) && !self.settings.strict_metadata {
                        warn!(
                            key = %binding.key(),
                            type_name = ty.type_name(),
                            "Type never registered its dependencies, treating it as zero-argument"
                        );
                    }
                    self.dependency_slots(binding.key(), ty)?
                        .into_iter()
                        .flatten()
                        .collect()
                }
            };

            nodes.push(DependencyInfo {
                key: binding.key().clone(),
                dependencies,
                scope: binding.scope(),
            });
        }

        let scope_warnings = GraphValidator::new(nodes, self.settings.strict_scopes).validate()?;

        info!(scope_warnings, "Container is valid");
        Ok(())
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("registered", &self.registry.len())
            .field("types", &self.metadata.len())
            .field("settings", &self.settings)
            .finish()
    }
}

// ═══════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════

pub mod prelude {
    pub use super::Container;
    pub use crate::binding::{BindingBuilder, ConstantBinding, ConstructorBinding};
    pub use crate::error::{Result, SanduqError};
    pub use crate::inject::{Dependencies, Injectable};
    pub use crate::key::{ServiceId, TypeKey};
    pub use crate::metadata::{MetadataStore, TypeRegistration};
    pub use crate::registry::{BindingInfo, BindingKind, Instance};
    pub use crate::scope::Scope;
    pub use crate::settings::ContainerSettings;
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inject::Injectable;
    use crate::registry::BindingKind;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Clock;

    impl Injectable for Clock {
        fn construct(_: &Dependencies) -> Result<Self> {
            Ok(Clock)
        }
    }

    #[test]
    fn constant_value_is_returned_as_is() {
        let container = Container::new();
        container.bind("Port").to_constant_value(8080u16);

        let port = container.get_as::<u16>("Port").unwrap();
        assert_eq!(*port, 8080);
        assert!(Arc::ptr_eq(&port, &container.get_as::<u16>("Port").unwrap()));
    }

    #[test]
    fn singleton_constructed_once() {
        static BUILT: AtomicUsize = AtomicUsize::new(0);

        struct Pool;
        impl Injectable for Pool {
            fn construct(_: &Dependencies) -> Result<Self> {
                BUILT.fetch_add(1, Ordering::SeqCst);
                Ok(Pool)
            }
        }

        let container = Container::new();
        container.bind("Pool").to::<Pool>().in_singleton_scope();

        let a = container.get("Pool").unwrap();
        let b = container.get("Pool").unwrap();
        let _c = container.get("Pool").unwrap();

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(BUILT.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn to_defaults_to_singleton() {
        let container = Container::new();
        container.bind("Clock").to::<Clock>();

        let a = container.get("Clock").unwrap();
        let b = container.get("Clock").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn transient_constructed_every_time() {
        let container = Container::new();
        container.bind("Clock").to::<Clock>().in_transient_scope();

        let a = container.get("Clock").unwrap();
        let b = container.get("Clock").unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn not_bound_names_key_and_suggests() {
        let container = Container::new();
        container.bind("UserService").to::<Clock>();

        match container.get("UserServise") {
            Err(SanduqError::NotBound(err)) => {
                assert_eq!(err.requested.as_str(), "UserServise");
                assert!(err.required_by.is_none());
                assert_eq!(err.suggestions, vec![ServiceId::from("UserService")]);
            }
            other => panic!("Expected NotBound, got: {other:?}"),
        }
    }

    #[test]
    fn missing_dependency_reports_requester() {
        struct Mailer;
        impl Injectable for Mailer {
            fn construct(deps: &Dependencies) -> Result<Self> {
                let _transport: Arc<String> = deps.arg(0)?;
                Ok(Mailer)
            }
        }

        let container = Container::new();
        container.bind("Mailer").to::<Mailer>().inject(0, "SmtpTransport");

        match container.get("Mailer") {
            Err(SanduqError::NotBound(err)) => {
                assert_eq!(err.requested.as_str(), "SmtpTransport");
                assert_eq!(err.required_by, Some(ServiceId::from("Mailer")));
            }
            other => panic!("Expected NotBound, got: {other:?}"),
        }
    }

    #[test]
    fn unconfigured_binding_fails_on_get() {
        let container = Container::new();
        container.bind("Cache").in_transient_scope();

        assert!(container.is_bound("Cache"));
        assert!(matches!(
            container.get("Cache"),
            Err(SanduqError::ProviderNotSet { key }) if key.as_str() == "Cache"
        ));
        // still failing, nothing got cached
        assert!(container.get("Cache").is_err());
    }

    #[test]
    fn rebind_discards_cached_singleton() {
        struct Replacement;
        impl Injectable for Replacement {
            fn construct(_: &Dependencies) -> Result<Self> {
                Ok(Replacement)
            }
        }

        let container = Container::new();
        container.bind("Clock").to::<Clock>();
        let first = container.get("Clock").unwrap();
        assert!(first.downcast_ref::<Clock>().is_some());

        container.rebind("Clock").to::<Replacement>().in_singleton_scope();
        let second = container.get("Clock").unwrap();
        assert!(second.downcast_ref::<Replacement>().is_some());
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn bind_over_existing_key_replaces_it() {
        let container = Container::new();
        container.bind("Retries").to_constant_value(3u8);
        container.bind("Retries").to_constant_value(5u8);

        assert_eq!(*container.get_as::<u8>("Retries").unwrap(), 5);
        assert_eq!(container.id(), 1);
    }

    #[test]
    fn constant_ignores_transient_scope() {
        let container = Container::new();
        container.bind("Name").to_constant_value(String::from("api")).in_transient_scope();

        let a = container.get("Name").unwrap();
        let b = container.get("Name").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(container.bindings()[0].scope, Scope::Singleton);
    }

    #[test]
    fn arguments_follow_declaration_order() {
        struct Pair {
            first: Arc<&'static str>,
            second: Arc<&'static str>,
        }
        impl Injectable for Pair {
            fn construct(deps: &Dependencies) -> Result<Self> {
                Ok(Pair {
                    first: deps.arg(0)?,
                    second: deps.arg(1)?,
                })
            }
        }

        let container = Container::new();
        container.bind("A").to_constant_value("a");
        container.bind("B").to_constant_value("b");
        container.register::<Pair>().inject(1, "B").inject(0, "A");
        container.bind("Pair").to::<Pair>();

        let pair = container.get_as::<Pair>("Pair").unwrap();
        assert_eq!(*pair.first, "a");
        assert_eq!(*pair.second, "b");
    }

    #[test]
    fn holes_are_not_resolved() {
        struct Sparse {
            tail: Arc<u32>,
            head: Option<Arc<u32>>,
        }
        impl Injectable for Sparse {
            fn construct(deps: &Dependencies) -> Result<Self> {
                Ok(Sparse {
                    head: deps.try_arg(0)?,
                    tail: deps.arg(2)?,
                })
            }
        }

        let container = Container::new();
        container.bind("Limit").to_constant_value(10u32);
        container.bind("Sparse").to::<Sparse>().inject(2, "Limit");

        let sparse = container.get_as::<Sparse>("Sparse").unwrap();
        assert!(sparse.head.is_none());
        assert_eq!(*sparse.tail, 10);
    }

    #[test]
    fn constructor_error_reaches_caller_unchanged() {
        #[derive(Debug, thiserror::Error)]
        #[error("connection refused")]
        struct ConnectionRefused;

        struct Database;
        impl Injectable for Database {
            fn construct(_: &Dependencies) -> Result<Self> {
                Err(SanduqError::constructor::<Database>(ConnectionRefused))
            }
        }

        struct Repository;
        impl Injectable for Repository {
            fn construct(deps: &Dependencies) -> Result<Self> {
                let _db: Arc<Database> = deps.arg(0)?;
                Ok(Repository)
            }
        }

        let container = Container::new();
        container.bind("Database").to::<Database>();
        container.bind("Repository").to::<Repository>().inject(0, "Database");

        match container.get("Repository") {
            Err(SanduqError::Constructor { type_name, source }) => {
                assert!(type_name.ends_with("Database"));
                assert!(source.downcast_ref::<ConnectionRefused>().is_some());
            }
            other => panic!("Expected Constructor, got: {other:?}"),
        }
        // failed singleton is retried on the next get, not cached
        assert!(container.bindings().iter().all(|b| !b.cached));
    }

    #[test]
    fn cycle_is_detected_with_chain() {
        struct Left;
        impl Injectable for Left {
            fn construct(_: &Dependencies) -> Result<Self> {
                Ok(Left)
            }
        }
        struct Right;
        impl Injectable for Right {
            fn construct(_: &Dependencies) -> Result<Self> {
                Ok(Right)
            }
        }

        let container = Container::new();
        container.bind("Left").to::<Left>().inject(0, "Right");
        container.bind("Right").to::<Right>().inject(0, "Left").in_transient_scope();

        match container.get("Left") {
            Err(SanduqError::CircularDependency(err)) => {
                let chain: Vec<&str> = err.chain.iter().map(ServiceId::as_str).collect();
                assert_eq!(chain, ["Left", "Right", "Left"]);
            }
            other => panic!("Expected CircularDependency, got: {other:?}"),
        }
    }

    #[test]
    fn self_cycle_is_detected() {
        struct Narcissus;
        impl Injectable for Narcissus {
            fn construct(_: &Dependencies) -> Result<Self> {
                Ok(Narcissus)
            }
        }

        let container = Container::new();
        container.bind("Narcissus").to::<Narcissus>().inject(0, "Narcissus");
        assert!(matches!(
            container.get("Narcissus"),
            Err(SanduqError::CircularDependency(_))
        ));
    }

    #[test]
    fn diamond_shares_singleton() {
        struct Leaf;
        impl Injectable for Leaf {
            fn construct(_: &Dependencies) -> Result<Self> {
                Ok(Leaf)
            }
        }
        struct Root {
            left: Arc<Leaf>,
            right: Arc<Leaf>,
        }
        impl Injectable for Root {
            fn construct(deps: &Dependencies) -> Result<Self> {
                Ok(Root {
                    left: deps.arg(0)?,
                    right: deps.arg(1)?,
                })
            }
        }

        let container = Container::new();
        container.bind("Leaf").to::<Leaf>();
        container.bind("Root").to::<Root>().inject_all(["Leaf", "Leaf"]).in_transient_scope();

        let root = container.get_as::<Root>("Root").unwrap();
        assert!(Arc::ptr_eq(&root.left, &root.right));
    }

    #[test]
    fn constructor_metadata_is_shared_by_type() {
        struct Notifier {
            channel: Arc<&'static str>,
        }
        impl Injectable for Notifier {
            fn construct(deps: &Dependencies) -> Result<Self> {
                Ok(Notifier { channel: deps.arg(0)? })
            }
        }

        let container = Container::new();
        container.bind("Email").to_constant_value("email");
        container.bind("Sms").to_constant_value("sms");

        container.bind("EmailNotifier").to::<Notifier>().inject(0, "Email").in_transient_scope();
        container.bind("SmsNotifier").to::<Notifier>().inject(0, "Sms").in_transient_scope();

        // last declaration for Notifier wins, for both keys
        let email = container.get_as::<Notifier>("EmailNotifier").unwrap();
        let sms = container.get_as::<Notifier>("SmsNotifier").unwrap();
        assert_eq!(*email.channel, "sms");
        assert_eq!(*sms.channel, "sms");
        assert_eq!(
            container.metadata().dependencies_of(&TypeKey::of::<Notifier>()),
            vec![Some(ServiceId::from("Sms"))]
        );
    }

    #[test]
    fn out_of_range_parameter_is_skipped() {
        struct Gauge;
        impl Injectable for Gauge {
            fn construct(deps: &Dependencies) -> Result<Self> {
                assert!(deps.is_empty());
                Ok(Gauge)
            }
        }

        let container = Container::new();
        container.bind("Clock").to::<Clock>();
        container.bind("Gauge").to::<Gauge>().inject(usize::MAX, "Clock");

        assert!(container.get("Gauge").is_ok());
        assert!(container.metadata().dependencies_of(&TypeKey::of::<Gauge>()).is_empty());
    }

    #[test]
    fn strict_metadata_rejects_unregistered_type() {
        let container = Container::with_settings(ContainerSettings::new().strict_metadata(true));
        container.bind("Clock").to::<Clock>();

        assert!(matches!(
            container.get("Clock"),
            Err(SanduqError::MissingMetadata { .. })
        ));

        container.register::<Clock>();
        assert!(container.get("Clock").is_ok());
    }

    #[test]
    fn get_as_wrong_type() {
        let container = Container::new();
        container.bind("Port").to_constant_value(8080u16);

        assert!(matches!(
            container.get_as::<u32>("Port"),
            Err(SanduqError::TypeMismatch { expected: "u32", .. })
        ));
    }

    #[test]
    fn bindings_snapshot() {
        let container = Container::new();
        container.bind("b").to::<Clock>().in_transient_scope();
        container.bind("a").to_constant_value(1i32);

        let infos = container.bindings();
        assert_eq!(infos.len(), 2);
        assert_eq!(infos[0].key.as_str(), "a");
        assert_eq!(infos[0].kind, BindingKind::Constant);
        assert!(infos[0].cached);
        assert_eq!(infos[1].kind, BindingKind::Constructor);
        assert_eq!(infos[1].scope, Scope::Transient);
        assert!(infos[1].type_name.is_some_and(|n| n.ends_with("Clock")));
    }

    #[test]
    fn validate_reports_unconfigured_binding() {
        let container = Container::new();
        container.bind("Clock").to::<Clock>();
        container.bind("Cache").in_singleton_scope();

        assert!(matches!(
            container.validate(),
            Err(SanduqError::ProviderNotSet { .. })
        ));
    }

    #[test]
    fn validate_reports_unbound_dependency_without_constructing() {
        static BUILT: AtomicUsize = AtomicUsize::new(0);

        struct Report;
        impl Injectable for Report {
            fn construct(_: &Dependencies) -> Result<Self> {
                BUILT.fetch_add(1, Ordering::SeqCst);
                Ok(Report)
            }
        }

        let container = Container::new();
        container.bind("Report").to::<Report>().inject(0, "Clock");
        assert!(matches!(container.validate(), Err(SanduqError::NotBound(_))));

        container.bind("Clock").to::<Clock>();
        assert!(container.validate().is_ok());
        assert_eq!(BUILT.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn debug_display() {
        let container = Container::new();
        container.bind("a").to_constant_value(1i32);
        container.bind("b").to_constant_value(2i32);

        let debug = format!("{container:?}");
        assert!(debug.contains("Container"));
        assert!(debug.contains("registered: 2"));
    }
}
