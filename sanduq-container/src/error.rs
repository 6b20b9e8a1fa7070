//! Error types for container operations.
//!
//! Every failure is terminal: the container never retries. Messages carry
//! enough context (requesting service, full chain, hints) to fix the
//! configuration without a debugger.

use std::fmt;

use sanduq_support::rendering::render_chain;

use crate::key::ServiceId;
use crate::scope::Scope;

/// Boxed error returned by user constructors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for all Sanduq operations.
#[derive(Debug, thiserror::Error)]
pub enum SanduqError {
    /// `get` was called for a key with no binding.
    #[error("{}", .0)]
    NotBound(NotBoundError),

    /// A binding was committed without `to()` or `to_constant_value()`.
    #[error(
        "Provider not set for key: {key}\n  Hint: finish the binding with .to::<T>() or .to_constant_value(..)"
    )]
    ProviderNotSet { key: ServiceId },

    /// A key was requested while it was already being resolved.
    #[error("{}", .0)]
    CircularDependency(CircularDependencyError),

    /// A singleton depends on a transient (only reported by `validate`
    /// with `strict_scopes`).
    #[error("{}", .0)]
    ScopeMismatch(ScopeMismatchError),

    /// A constructor-backed binding points at a type that never declared
    /// its dependencies (only with `strict_metadata`).
    #[error(
        "No dependency metadata for {type_name} (bound as {key})\n  Hint: call .register::<{type_name}>() or .inject(..) on the binding"
    )]
    MissingMetadata {
        key: ServiceId,
        type_name: &'static str,
    },

    /// A constructor asked for an argument that was not resolved.
    #[error("Argument {index} of {type_name} has no declared dependency")]
    MissingArgument {
        type_name: &'static str,
        index: usize,
    },

    /// A parameter was declared past the supported parameter count.
    #[error(
        "Parameter index {index} of {type_name} is out of range\n  Hint: constructors take at most {max} declared parameters"
    )]
    ParameterIndexOutOfRange {
        type_name: &'static str,
        index: usize,
        max: usize,
    },

    /// A resolved instance is not of the requested Rust type.
    #[error("Type mismatch for {key}: expected {expected}")]
    TypeMismatch {
        key: ServiceId,
        expected: &'static str,
    },

    /// Raised by an `Injectable::construct` implementation.
    #[error("Failed to construct {type_name}: {source}")]
    Constructor {
        type_name: &'static str,
        #[source]
        source: BoxError,
    },
}

impl SanduqError {
    /// Wraps a failure raised while constructing `T`.
    ///
    /// ```
    /// use sanduq_container::error::SanduqError;
    ///
    /// struct Database;
    /// let err = SanduqError::constructor::<Database>("connection refused");
    /// assert!(err.to_string().contains("connection refused"));
    /// ```
    pub fn constructor<T: ?Sized + 'static>(source: impl Into<BoxError>) -> Self {
        SanduqError::Constructor {
            type_name: std::any::type_name::<T>(),
            source: source.into(),
        }
    }

    /// The service id this error is about, when there is exactly one.
    pub fn key(&self) -> Option<&ServiceId> {
        match self {
            SanduqError::NotBound(e) => Some(&e.requested),
            SanduqError::ProviderNotSet { key }
            | SanduqError::MissingMetadata { key, .. }
            | SanduqError::TypeMismatch { key, .. } => Some(key),
            SanduqError::ScopeMismatch(e) => Some(&e.consumer),
            SanduqError::CircularDependency(_)
            | SanduqError::MissingArgument { .. }
            | SanduqError::ParameterIndexOutOfRange { .. }
            | SanduqError::Constructor { .. } => None,
        }
    }
}

/// Error when a key has no binding.
#[derive(Debug)]
pub struct NotBoundError {
    /// The key that was requested.
    pub requested: ServiceId,
    /// The binding whose constructor needed it, if any.
    pub required_by: Option<ServiceId>,
    /// Bound keys that look similar.
    pub suggestions: Vec<ServiceId>,
}

impl fmt::Display for NotBoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Service not bound for key: {}", self.requested)?;

        if let Some(ref parent) = self.required_by {
            write!(f, "\n  Required by: {parent}")?;
        }

        if !self.suggestions.is_empty() {
            write!(f, "\n  Did you mean one of:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n    - {suggestion}")?;
            }
        }

        write!(
            f,
            "\n  Hint: Did you forget container.bind(\"{}\")?",
            self.requested
        )
    }
}

/// Error when a dependency cycle is hit during resolution.
#[derive(Debug)]
pub struct CircularDependencyError {
    /// Keys from the first occurrence of the repeated key up to and
    /// including its second occurrence, e.g. `[A, B, A]`.
    pub chain: Vec<ServiceId>,
}

impl fmt::Display for CircularDependencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circular dependency detected:\n  {}", render_chain(&self.chain))?;
        write!(
            f,
            "\n  Hint: break the cycle by moving the shared state into a third service"
        )
    }
}

/// A singleton that captures a transient dependency.
#[derive(Debug)]
pub struct ScopeMismatchError {
    pub dependency: ServiceId,
    pub dependency_scope: Scope,
    pub consumer: ServiceId,
    pub consumer_scope: Scope,
}

impl fmt::Display for ScopeMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scope mismatch: {} ({}) depends on {} ({})",
            self.consumer, self.consumer_scope, self.dependency, self.dependency_scope,
        )?;
        write!(
            f,
            "\n  The {} instance would keep the first {} it receives forever",
            self.consumer_scope, self.dependency,
        )?;
        write!(
            f,
            "\n  Hint: bind {} in {} scope or make {} transient",
            self.dependency, self.consumer_scope, self.consumer,
        )
    }
}

/// Convenient Result type for Sanduq operations.
pub type Result<T> = std::result::Result<T, SanduqError>;
