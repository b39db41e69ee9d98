//! Declared dependency versions as written in a manifest

/// Tag meaning "always install the newest release"
const LATEST_TAG: &str = "latest";

/// A dependency version as declared in the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredVersion {
    /// Follows the newest release, so it carries no date information
    AlwaysLatest,
    /// Any other declaration, kept verbatim
    Pinned(String),
}

impl DeclaredVersion {
    pub fn parse(raw: &str) -> Self {
        if raw == LATEST_TAG {
            DeclaredVersion::AlwaysLatest
        } else {
            DeclaredVersion::Pinned(raw.to_string())
        }
    }

    /// The exact version to look up, or None for `AlwaysLatest`
    ///
    /// Only a single leading `^` or `~` is removed; other range syntax is
    /// returned as-is and will simply fail to match.
    pub fn target(&self) -> Option<&str> {
        match self {
            DeclaredVersion::AlwaysLatest => None,
            DeclaredVersion::Pinned(raw) => Some(
                raw.strip_prefix('^')
                    .or_else(|| raw.strip_prefix('~'))
                    .unwrap_or(raw),
            ),
        }
    }
}
