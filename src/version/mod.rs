//! Release history layer
//!
//! Fetches, caches, and orders the publish times of a package's releases.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Caching   │────▶│ RateLimited │────▶│     Npm     │
//! │  (sqlite)   │     │  (spacing)  │     │   (fetch)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        ▲
//!        │
//! ┌─────────────┐     ┌─────────────┐
//! │   History   │────▶│   Compare   │
//! │ (normalize) │     │ (ordering)  │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`cache`]: SQLite-based store of fetched release times
//! - [`compare`]: Field-wise version ordering
//! - [`error`]: Error types for cache and registry operations
//! - [`history`]: Normalization of raw release times into ordered records
//! - [`registry`]: Registry trait for fetching release times
//! - [`registries`]: npm registry and lookup decorators
//! - [`types`]: Common types like `VersionRecord`

pub mod cache;
pub mod compare;
pub mod error;
pub mod history;
pub mod registries;
pub mod registry;
pub mod types;
