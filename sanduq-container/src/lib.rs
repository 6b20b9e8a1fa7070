//! Core container implementation for Sanduq.

pub mod binding;
pub mod container;
pub mod error;
mod graph;
pub mod inject;
pub mod key;
pub mod metadata;
pub mod registry;
pub mod scope;
pub mod settings;

pub use container::{Container, prelude};
pub use error::{Result, SanduqError};
pub use inject::{Dependencies, Injectable};
pub use key::{ServiceId, TypeKey};
pub use scope::Scope;
pub use settings::ContainerSettings;
