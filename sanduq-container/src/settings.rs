//! Container settings.
//!
//! Both switches default to the lenient behaviour. They can be set in code
//! or deserialized from whatever configuration format the application
//! already uses:
//!
//! ```toml
//! [container]
//! strict_metadata = true
//! strict_scopes = false
//! ```

use serde::{Deserialize, Serialize};

/// Tunables for a [`Container`](crate::container::Container).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerSettings {
    /// Fail resolution (and `validate`) when a constructor-backed binding
    /// targets a type that never registered its dependencies, instead of
    /// treating it as a zero-argument type.
    pub strict_metadata: bool,

    /// Make `validate` fail on a singleton depending on a transient instead
    /// of only logging a warning.
    pub strict_scopes: bool,
}

impl ContainerSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict_metadata(mut self, strict: bool) -> Self {
        self.strict_metadata = strict;
        self
    }

    pub fn strict_scopes(mut self, strict: bool) -> Self {
        self.strict_scopes = strict;
        self
    }

    /// Both checks on.
    pub fn strict() -> Self {
        Self {
            strict_metadata: true,
            strict_scopes: true,
        }
    }
}
