//! citysuggest-rs
//! ==============
//!
//! Workspace umbrella for the city autocomplete engine. It re-exports
//! [`citysuggest_core`] so the demos under `demos/` can be run from the
//! workspace root; depend on `citysuggest-core` directly in applications.

pub use citysuggest_core::*;
