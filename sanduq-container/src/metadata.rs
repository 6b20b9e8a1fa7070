//! Constructor dependency metadata.
//!
//! The store answers one question: which service ids does type `T` take,
//! in constructor parameter order? It is filled by registration calls
//! before anything is resolved and read every time a constructor-backed
//! binding runs.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::{debug, trace, warn};

use crate::error::{Result, SanduqError};
use crate::key::{ServiceId, TypeKey};

/// Highest number of constructor parameters a type can declare.
pub const MAX_PARAMETERS: usize = 64;

/// Parameter slots of one constructor. `None` is a parameter nobody
/// declared a dependency for.
pub type DependencySlots = Vec<Option<ServiceId>>;

/// Maps constructible types to the ids of their constructor parameters.
///
/// Each [`Container`](crate::container::Container) owns one store. Entries
/// are created on first declaration and never removed.
#[derive(Debug, Default)]
pub struct MetadataStore {
    entries: RwLock<HashMap<TypeKey, DependencySlots>>,
}

impl MetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures `ty` has an entry, possibly with no parameters.
    ///
    /// Zero-argument types need this to be told apart from types that
    /// were never registered.
    pub fn register_type(&self, ty: TypeKey) {
        let mut entries = self.entries.write();
        if !entries.contains_key(&ty) {
            debug!(type_name = ty.type_name(), "Registered injectable type");
            entries.insert(ty, Vec::new());
        }
    }

    /// Declares that parameter `index` of `ty` receives `id`.
    ///
    /// Grows the parameter list as needed; skipped positions stay empty.
    /// Metadata is per type: every binding constructing `ty` sees it.
    /// Declaring a position again keeps the last id and returns the id it
    /// replaced, if that was a different one.
    ///
    /// # Errors
    /// [`SanduqError::ParameterIndexOutOfRange`] if `index` is not below
    /// [`MAX_PARAMETERS`]. Nothing is recorded then.
    pub fn record_dependency(&self, ty: TypeKey, index: usize, id: ServiceId) -> Result<Option<ServiceId>> {
        if index >= MAX_PARAMETERS {
            return Err(SanduqError::ParameterIndexOutOfRange {
                type_name: ty.type_name(),
                index,
                max: MAX_PARAMETERS,
            });
        }

        let mut entries = self.entries.write();
        let slots = entries.entry(ty).or_default();
        if slots.len() <= index {
            slots.resize(index + 1, None);
        }

        trace!(type_name = ty.type_name(), index, id = %id, "Recorded dependency");
        match slots[index].replace(id) {
            Some(previous) if Some(&previous) != slots[index].as_ref() => {
                warn!(
                    type_name = ty.type_name(),
                    index,
                    previous = %previous,
                    current = ?slots[index],
                    "Redeclared constructor parameter, every binding of this type now receives the new id"
                );
                Ok(Some(previous))
            }
            _ => Ok(None),
        }
    }

    /// Fluent-API form of [`record_dependency`](Self::record_dependency):
    /// a rejected declaration is logged and skipped.
    pub(crate) fn declare(&self, ty: TypeKey, index: usize, id: ServiceId) {
        if let Err(err) = self.record_dependency(ty, index, id) {
            warn!(error = %err, "Ignoring dependency declaration");
        }
    }

    /// Returns the recorded parameters of `ty`.
    ///
    /// An unregistered type yields an empty list, same as a type with no
    /// parameters. Use [`lookup`](Self::lookup) to tell them apart.
    pub fn dependencies_of(&self, ty: &TypeKey) -> DependencySlots {
        self.lookup(ty).unwrap_or_default()
    }

    /// Returns the recorded parameters, or `None` if `ty` never registered.
    pub fn lookup(&self, ty: &TypeKey) -> Option<DependencySlots> {
        self.entries.read().get(ty).cloned()
    }

    pub fn is_registered(&self, ty: &TypeKey) -> bool {
        self.entries.read().contains_key(ty)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

/// Registration handle for one constructible type.
///
/// Returned by [`Container::register`](crate::container::Container::register).
/// Creating it registers the type; each `inject` declares one parameter.
///
/// ```
/// use sanduq_container::prelude::*;
///
/// struct AuthController;
///
/// let container = Container::new();
/// container
///     .register::<AuthController>()
///     .inject(0, "AuthService")
///     .inject(1, "Logger");
///
/// let deps = container.metadata().dependencies_of(&TypeKey::of::<AuthController>());
/// assert_eq!(deps.len(), 2);
/// ```
pub struct TypeRegistration<'a> {
    store: &'a MetadataStore,
    ty: TypeKey,
}

impl<'a> TypeRegistration<'a> {
    pub(crate) fn new(store: &'a MetadataStore, ty: TypeKey) -> Self {
        store.register_type(ty);
        Self { store, ty }
    }

    /// Declares that constructor parameter `index` receives `id`.
    ///
    /// An `index` of [`MAX_PARAMETERS`] or more is logged and ignored.
    pub fn inject(self, index: usize, id: impl Into<ServiceId>) -> Self {
        self.store.declare(self.ty, index, id.into());
        self
    }

    /// Declares parameters `0..n` in iteration order.
    pub fn inject_all<I>(self, ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ServiceId>,
    {
        for (index, id) in ids.into_iter().enumerate() {
            self.store.declare(self.ty, index, id.into());
        }
        self
    }

    /// The type being registered.
    pub fn type_key(&self) -> TypeKey {
        self.ty
    }
}
