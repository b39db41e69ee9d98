//! Common types for release-time histories

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Raw registry answer: version string -> publish time string.
///
/// May contain registry metadata keys such as `created`.
pub type VersionTimes = HashMap<String, String>;

/// One published release of a package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionRecord {
    pub version: String,
    pub published_at: DateTime<Utc>,
}

impl VersionRecord {
    pub fn new(version: impl Into<String>, published_at: DateTime<Utc>) -> Self {
        Self {
            version: version.into(),
            published_at,
        }
    }
}
