//! Shared helpers for integration tests

#![allow(dead_code)]

pub mod manifest;
pub mod registry;

pub use manifest::write_manifest;
pub use registry::MockRegistry;
