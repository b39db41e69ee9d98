//! Intersection of dependency windows into one estimate

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::estimate::window::{DependencyWindow, UpperBound};

/// Inferred range for the manifest's last edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlobalEstimate {
    /// Lower bound; the Unix epoch when nothing constrains it
    pub earliest: DateTime<Utc>,
    /// Upper bound; `Unbounded` when nothing constrains it
    pub latest: UpperBound,
}

impl GlobalEstimate {
    /// The estimate spanning all time
    pub fn unknown() -> Self {
        Self {
            earliest: DateTime::<Utc>::UNIX_EPOCH,
            latest: UpperBound::Unbounded,
        }
    }

    pub fn is_unknown(&self) -> bool {
        *self == Self::unknown()
    }
}

/// Fold all windows into one estimate
///
/// The lower bound is the latest window start. Upper bounds earlier than that
/// lower bound are stale and ignored; the tightest remaining one is kept.
/// Bounds beyond the far-future sentinel count as unbounded.
pub fn fold_windows(windows: &[DependencyWindow]) -> GlobalEstimate {
    let earliest = windows
        .iter()
        .map(|w| w.start)
        .fold(DateTime::<Utc>::UNIX_EPOCH, |acc, start| acc.max(start));

    let latest = windows
        .iter()
        .map(|w| w.end)
        .filter(|end| *end >= UpperBound::At(earliest))
        .fold(UpperBound::Unbounded, |acc, end| acc.min(end))
        .clamped();

    GlobalEstimate { earliest, latest }
}
