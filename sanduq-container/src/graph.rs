//! Dependency graph walking.
//!
//! [`ResolutionStack`] is the chain of keys a resolution is currently
//! building; `get` and [`GraphValidator`] both use it to turn a repeated
//! key into a `CircularDependency` error carrying the full chain.
//!
//! [`Container::validate`](crate::container::Container::validate) builds
//! the graph from the current bindings and metadata and checks it without
//! constructing anything:
//! - every declared dependency is bound
//! - there are no cycles
//! - singletons that capture transients are reported
//!
//! Resolution does not depend on this pass; it is a startup check.

use std::collections::{HashMap, HashSet};

use sanduq_support::rendering::suggest_similar;
use tracing::{debug, warn};

use crate::error::{
    CircularDependencyError, NotBoundError, Result, SanduqError, ScopeMismatchError,
};
use crate::key::ServiceId;
use crate::scope::Scope;

// ═══════════════════════════════════════════
// ResolutionStack
// ═══════════════════════════════════════════

/// Keys a resolution chain is building, outermost first.
///
/// One stack per top-level `get`, passed down the recursion, so chains on
/// different threads never see each other.
#[derive(Debug, Default)]
pub(crate) struct ResolutionStack {
    keys: Vec<ServiceId>,
}

impl ResolutionStack {
    /// Pushes `key`, or fails if it is already on the stack.
    pub fn enter(&mut self, key: &ServiceId) -> Result<()> {
        if let Some(start) = self.keys.iter().position(|k| k == key) {
            let mut chain = self.keys[start..].to_vec();
            chain.push(key.clone());

            warn!(cycle = ?chain, "Circular dependency");
            return Err(SanduqError::CircularDependency(CircularDependencyError { chain }));
        }

        self.keys.push(key.clone());
        Ok(())
    }

    pub fn leave(&mut self) {
        self.keys.pop();
    }

    /// The key being built right now, i.e. whoever requires the next one.
    pub fn current(&self) -> Option<&ServiceId> {
        self.keys.last()
    }
}

// ═══════════════════════════════════════════
// GraphValidator
// ═══════════════════════════════════════════

/// A binding as seen by the validator.
#[derive(Debug, Clone)]
pub(crate) struct DependencyInfo {
    pub key: ServiceId,
    /// Declared dependency ids in parameter order, holes skipped.
    pub dependencies: Vec<ServiceId>,
    pub scope: Scope,
}

/// Static checks over the binding graph.
pub(crate) struct GraphValidator {
    nodes: HashMap<ServiceId, DependencyInfo>,
    strict_scopes: bool,
}

impl GraphValidator {
    pub fn new(nodes: impl IntoIterator<Item = DependencyInfo>, strict_scopes: bool) -> Self {
        Self {
            nodes: nodes.into_iter().map(|info| (info.key.clone(), info)).collect(),
            strict_scopes,
        }
    }

    /// Validates every node.
    ///
    /// Returns the number of scope mismatches that were only warned about.
    ///
    /// # Errors
    /// - [`SanduqError::NotBound`] — a dependency has no binding
    /// - [`SanduqError::CircularDependency`] — cycle detected
    /// - [`SanduqError::ScopeMismatch`] — only with `strict_scopes`
    pub fn validate(&self) -> Result<usize> {
        let keys = self.sorted_keys();
        debug!(bindings = keys.len(), "Walking dependency graph");

        let mut done = HashSet::new();
        for key in &keys {
            self.walk(key, &mut ResolutionStack::default(), &mut done)?;
        }

        self.captive_dependencies(&keys)
    }

    /// Depth-first over `key`'s dependencies, the way `get` would resolve
    /// them. Keys in `done` were already walked without error.
    fn walk(
        &self,
        key: &ServiceId,
        stack: &mut ResolutionStack,
        done: &mut HashSet<ServiceId>,
    ) -> Result<()> {
        if done.contains(key) {
            return Ok(());
        }

        let Some(node) = self.nodes.get(key) else {
            return Err(SanduqError::NotBound(NotBoundError {
                requested: key.clone(),
                required_by: stack.current().cloned(),
                suggestions: self.similar_keys(key),
            }));
        };

        stack.enter(key)?;
        for dep in &node.dependencies {
            self.walk(dep, stack, done)?;
        }
        stack.leave();

        done.insert(key.clone());
        Ok(())
    }

    /// A singleton built from a transient keeps that one transient instance
    /// for as long as the container lives.
    fn captive_dependencies(&self, keys: &[&ServiceId]) -> Result<usize> {
        let mut warnings = 0;

        for consumer in keys.iter().filter_map(|key| self.nodes.get(*key)) {
            let captured = consumer
                .dependencies
                .iter()
                .filter_map(|dep| self.nodes.get(dep))
                .filter(|dependency| consumer.scope > dependency.scope);

            for dependency in captured {
                if self.strict_scopes {
                    return Err(SanduqError::ScopeMismatch(ScopeMismatchError {
                        dependency: dependency.key.clone(),
                        dependency_scope: dependency.scope,
                        consumer: consumer.key.clone(),
                        consumer_scope: consumer.scope,
                    }));
                }

                warn!(
                    consumer = %consumer.key,
                    dependency = %dependency.key,
                    "Singleton captures a transient dependency"
                );
                warnings += 1;
            }
        }

        Ok(warnings)
    }

    fn sorted_keys(&self) -> Vec<&ServiceId> {
        let mut keys: Vec<&ServiceId> = self.nodes.keys().collect();
        keys.sort_unstable();
        keys
    }

    fn similar_keys(&self, target: &ServiceId) -> Vec<ServiceId> {
        let available: Vec<&str> = self.sorted_keys().into_iter().map(ServiceId::as_str).collect();
        suggest_similar(target.as_str(), &available, 3)
            .into_iter()
            .map(ServiceId::from)
            .collect()
    }
}
