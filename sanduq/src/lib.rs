//! # Sanduq: a string-keyed IoC container
//!
//! Services are bound under string keys, either to a constant value or to a
//! type the container constructs. Constructor parameters are declared per
//! type in the container's metadata store and resolved depth first on `get`.
//!
//! ```rust
//! use std::sync::Arc;
//! use sanduq::prelude::*;
//!
//! struct Logger {
//!     name: String,
//! }
//!
//! struct UserService {
//!     logger: Arc<Logger>,
//! }
//!
//! impl Injectable for UserService {
//!     fn construct(deps: &Dependencies) -> Result<Self> {
//!         Ok(UserService { logger: deps.arg(0)? })
//!     }
//! }
//!
//! let container = Container::new();
//! container.bind("Logger").to_constant_value(Logger { name: "log1".into() });
//! container
//!     .bind("UserService")
//!     .to::<UserService>()
//!     .inject(0, "Logger")
//!     .in_transient_scope();
//!
//! container.validate()?;
//!
//! let a = container.get_as::<UserService>("UserService")?;
//! let b = container.get_as::<UserService>("UserService")?;
//! assert!(!Arc::ptr_eq(&a, &b));
//! assert!(Arc::ptr_eq(&a.logger, &b.logger));
//! assert_eq!(a.logger.name, "log1");
//! # Ok::<(), SanduqError>(())
//! ```

pub use sanduq_container::*;
pub use sanduq_support::*;
