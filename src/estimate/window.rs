//! Per-dependency validity windows

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::version::compare::is_semantically_greater;
use crate::version::types::VersionRecord;

/// Concrete instant standing in for "no upper bound" (2077-01-01)
pub const FAR_FUTURE_MS: i64 = 3_376_727_114_000;

/// Upper end of a date range
///
/// Every `At` orders before `Unbounded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UpperBound {
    At(DateTime<Utc>),
    Unbounded,
}

impl UpperBound {
    /// The bounded instant, if any
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            UpperBound::At(instant) => Some(*instant),
            UpperBound::Unbounded => None,
        }
    }

    /// Collapse bounds at or beyond the far-future sentinel into `Unbounded`
    pub fn clamped(self) -> Self {
        match self {
            UpperBound::At(instant) if instant < far_future() => self,
            _ => UpperBound::Unbounded,
        }
    }
}

impl From<DateTime<Utc>> for UpperBound {
    fn from(instant: DateTime<Utc>) -> Self {
        UpperBound::At(instant)
    }
}

/// The far-future sentinel instant
pub fn far_future() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(FAR_FUTURE_MS).unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Half-open range `[start, end)` in which a declared version was the newest pin
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyWindow {
    pub package_name: String,
    /// The matched version
    pub version: String,
    pub start: DateTime<Utc>,
    pub end: UpperBound,
    /// The release that closed the window
    pub next_version: Option<String>,
}

/// Derive the validity window of `target` within a chronologically ordered history
///
/// `start` is the publish time of the exact match. `end` is the publish time
/// of the first later-published release that orders after the match, which
/// is not necessarily the next chronological entry. Returns None when the
/// target is not in the history.
pub fn derive_window(
    package_name: &str,
    target: &str,
    history: &[VersionRecord],
) -> Option<DependencyWindow> {
    let index = history.iter().position(|r| r.version == target)?;
    let matched = &history[index];

    let next = history[index + 1..]
        .iter()
        .find(|r| is_semantically_greater(&r.version, &matched.version));

    Some(DependencyWindow {
        package_name: package_name.to_string(),
        version: matched.version.clone(),
        start: matched.published_at,
        end: next.map_or(UpperBound::Unbounded, |r| UpperBound::At(r.published_at)),
        next_version: next.map(|r| r.version.clone()),
    })
}
