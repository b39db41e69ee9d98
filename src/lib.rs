//! Estimate when a package.json was last edited
//!
//! Every pinned dependency version was only the newest release for a limited
//! time. Looking up those periods in the registry and intersecting them
//! narrows down when the manifest could have been written.
//!
//! # Modules
//!
//! - [`app`]: Wiring of manifest, registry stack, and engine
//! - [`config`]: Configuration file and data directory handling
//! - [`estimate`]: Validity windows and their intersection
//! - [`manifest`]: package.json reading
//! - [`report`]: Text and JSON rendering
//! - [`version`]: Release history fetching, caching, and ordering

pub mod app;
pub mod config;
pub mod error;
pub mod estimate;
pub mod logging;
pub mod manifest;
pub mod report;
pub mod version;
