//! Date range inference
//!
//! Each dependency's declared version is located in its release history to
//! obtain a validity window; all windows are then intersected.
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   Declared   │────▶│    Window    │────▶│    Reduce    │
//! │ (^1.2.3 etc) │     │ [start, end) │     │ (intersect)  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                             ▲
//!                      ┌──────────────┐
//!                      │   History    │
//!                      │  (resolver)  │
//!                      └──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`declared`]: Declared version parsing and range prefix stripping
//! - [`window`]: Per-dependency validity windows
//! - [`reduce`]: Folding windows into a global estimate
//! - [`engine`]: Sequential resolution of all dependencies

pub mod declared;
pub mod engine;
pub mod reduce;
pub mod window;

pub use declared::DeclaredVersion;
pub use engine::{
    DependencyOutcome, DependencyReport, EstimateReport, RangeInferenceEngine, SkipReason,
};
pub use reduce::{GlobalEstimate, fold_windows};
pub use window::{DependencyWindow, UpperBound, derive_window};
