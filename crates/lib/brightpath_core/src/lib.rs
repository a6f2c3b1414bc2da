//! # brightpath_core
//!
//! Core domain logic for BrightPath.

pub mod activities;
pub mod coaching;
pub mod hello;
pub mod relay;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
