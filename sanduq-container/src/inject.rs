//! Constructor injection.
//!
//! A type becomes constructible by the container by implementing
//! [`Injectable`]. Its constructor receives a [`Dependencies`] list holding
//! the already resolved instances for each declared parameter, in the order
//! they were declared.

use std::any::{Any, type_name};
use std::sync::Arc;

use crate::error::{Result, SanduqError};
use crate::key::{ServiceId, TypeKey};
use crate::registry::Instance;

/// A type the container can construct.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use sanduq_container::prelude::*;
///
/// struct Logger {
///     name: String,
/// }
///
/// struct UserService {
///     logger: Arc<Logger>,
/// }
///
/// impl Injectable for UserService {
///     fn construct(deps: &Dependencies) -> Result<Self> {
///         Ok(UserService { logger: deps.arg(0)? })
///     }
/// }
///
/// let container = Container::new();
/// container.bind("Logger").to_constant_value(Logger { name: "log1".into() });
/// container.bind("UserService").to::<UserService>().inject(0, "Logger");
///
/// let service = container.get_as::<UserService>("UserService")?;
/// assert_eq!(service.logger.name, "log1");
/// # Ok::<(), SanduqError>(())
/// ```
pub trait Injectable: Send + Sync + Sized + 'static {
    /// Builds `Self` from resolved constructor arguments.
    ///
    /// Errors returned here reach the caller of `get` unchanged. Use
    /// [`SanduqError::constructor`] to report failures of your own.
    fn construct(deps: &Dependencies) -> Result<Self>;
}

/// Resolved constructor arguments, one slot per declared parameter.
#[derive(Debug)]
pub struct Dependencies {
    owner: TypeKey,
    slots: Vec<Slot>,
}

#[derive(Debug)]
struct Slot {
    id: Option<ServiceId>,
    instance: Option<Instance>,
}

impl Dependencies {
    pub(crate) fn new(owner: TypeKey) -> Self {
        Self {
            owner,
            slots: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, id: Option<ServiceId>, instance: Option<Instance>) {
        self.slots.push(Slot { id, instance });
    }

    /// The type these arguments are for.
    pub fn owner(&self) -> TypeKey {
        self.owner
    }

    /// Number of declared parameter positions, holes included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Service id declared for parameter `index`.
    pub fn id(&self, index: usize) -> Option<&ServiceId> {
        self.slots.get(index).and_then(|slot| slot.id.as_ref())
    }

    /// Type-erased instance for parameter `index`.
    pub fn raw(&self, index: usize) -> Option<&Instance> {
        self.slots.get(index).and_then(|slot| slot.instance.as_ref())
    }

    /// Argument `index` as `T`.
    ///
    /// # Errors
    /// - [`SanduqError::MissingArgument`] if nothing was declared there
    /// - [`SanduqError::TypeMismatch`] if the instance is not a `T`
    pub fn arg<T: Any + Send + Sync>(&self, index: usize) -> Result<Arc<T>> {
        self.try_arg(index)?.ok_or(SanduqError::MissingArgument {
            type_name: self.owner.type_name(),
            index,
        })
    }

    /// Like [`arg`](Self::arg) but an undeclared parameter is `Ok(None)`.
    pub fn try_arg<T: Any + Send + Sync>(&self, index: usize) -> Result<Option<Arc<T>>> {
        let Some(slot) = self.slots.get(index) else {
            return Ok(None);
        };
        match (&slot.id, &slot.instance) {
            (Some(id), Some(instance)) => downcast_instance(id, Arc::clone(instance)).map(Some),
            _ => Ok(None),
        }
    }
}

/// Downcasts a resolved instance, naming `key` on failure.
pub(crate) fn downcast_instance<T: Any + Send + Sync>(key: &ServiceId, instance: Instance) -> Result<Arc<T>> {
    instance.downcast::<T>().map_err(|_| SanduqError::TypeMismatch {
        key: key.clone(),
        expected: type_name::<T>(),
    })
}

/// Wraps `T::construct` as a type-erased constructor.
pub(crate) fn erased_constructor<T: Injectable>(deps: &Dependencies) -> Result<Instance> {
    T::construct(deps).map(|value| Arc::new(value) as Instance)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Widget;

    fn deps() -> Dependencies {
        let mut deps = Dependencies::new(TypeKey::of::<Widget>());
        deps.push(Some("Name".into()), Some(Arc::new(String::from("w1"))));
        deps.push(None, None);
        deps.push(Some("Size".into()), Some(Arc::new(42u32)));
        deps
    }

    #[test]
    fn args_by_position() {
        let deps = deps();
        assert_eq!(deps.len(), 3);
        assert_eq!(*deps.arg::<String>(0).unwrap(), "w1");
        assert_eq!(*deps.arg::<u32>(2).unwrap(), 42);
        assert_eq!(deps.id(2).map(ServiceId::as_str), Some("Size"));
    }

    #[test]
    fn hole_is_missing_argument() {
        let deps = deps();
        assert!(deps.try_arg::<String>(1).unwrap().is_none());
        assert!(deps.raw(1).is_none());
        match deps.arg::<String>(1) {
            Err(SanduqError::MissingArgument { index, type_name }) => {
                assert_eq!(index, 1);
                assert!(type_name.ends_with("Widget"));
            }
            other => panic!("Expected MissingArgument, got: {other:?}"),
        }
    }

    #[test]
    fn out_of_range_is_missing_argument() {
        assert!(matches!(
            deps().arg::<u32>(7),
            Err(SanduqError::MissingArgument { index: 7, .. })
        ));
    }

    #[test]
    fn wrong_type_is_mismatch() {
        match deps().arg::<u64>(2) {
            Err(SanduqError::TypeMismatch { key, expected }) => {
                assert_eq!(key.as_str(), "Size");
                assert_eq!(expected, "u64");
            }
            other => panic!("Expected TypeMismatch, got: {other:?}"),
        }
    }

    #[test]
    fn erased_constructor_boxes_value() {
        struct Clock;
        impl Injectable for Clock {
            fn construct(_: &Dependencies) -> Result<Self> {
                Ok(Clock)
            }
        }

        let instance = erased_constructor::<Clock>(&Dependencies::new(TypeKey::of::<Clock>())).unwrap();
        assert!(instance.downcast_ref::<Clock>().is_some());
    }
}
