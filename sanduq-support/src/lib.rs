//! # Sanduq Support
//!
//! Shared helpers for the Sanduq container crates.
//!
//! This crate provides:
//! - Rendering of resolution chains for error messages
//! - Short type names for logs
//! - "Did you mean?" suggestions for unknown service ids

pub mod rendering;
