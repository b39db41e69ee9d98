//! Release-time history resolution
//!
//! Turns a raw registry answer into a chronologically ordered list of stable
//! releases.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::debug;

use crate::version::compare::compare_versions;
use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use crate::version::types::{VersionRecord, VersionTimes};

/// Registry metadata key holding the package creation time
const CREATED_KEY: &str = "created";

/// Resolves a package name to its ordered release history
#[derive(Clone)]
pub struct VersionHistoryResolver {
    registry: Arc<dyn Registry>,
}

impl VersionHistoryResolver {
    pub fn new(registry: Arc<dyn Registry>) -> Self {
        Self { registry }
    }

    /// Fetch and normalize the history of `package_name`
    ///
    /// Records are ordered by publish time, oldest first.
    pub async fn resolve(&self, package_name: &str) -> Result<Vec<VersionRecord>, RegistryError> {
        let times = self.registry.fetch_version_times(package_name).await?;
        let history = normalize_history(package_name, times)?;
        debug!(
            "Resolved {} stable releases for {}",
            history.len(),
            package_name
        );
        Ok(history)
    }
}

/// Build the ordered history from raw version times
///
/// Drops the `created` entry and pre-release versions, then sorts by publish
/// time with ties broken by version order.
pub fn normalize_history(
    package_name: &str,
    times: VersionTimes,
) -> Result<Vec<VersionRecord>, RegistryError> {
    let mut history = times
        .into_iter()
        .filter(|(version, _)| version != CREATED_KEY && !is_prerelease(version))
        .map(|(version, value)| match parse_instant(&value) {
            Some(published_at) => Ok(VersionRecord::new(version, published_at)),
            None => Err(RegistryError::InvalidTimestamp {
                package: package_name.to_string(),
                version,
                value,
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    history.sort_by(|a, b| {
        a.published_at
            .cmp(&b.published_at)
            .then_with(|| compare_versions(&a.version, &b.version))
    });

    Ok(history)
}

/// Pre-release versions carry a hyphenated suffix (e.g. `1.2.0-beta.1`)
pub fn is_prerelease(version: &str) -> bool {
    version.contains('-')
}

/// Parse a publish time string
///
/// Accepts RFC 3339, a timestamp without offset (taken as UTC), or a bare date.
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::registry::MockRegistry;
    use chrono::TimeZone;
    use rstest::rstest;

    fn times(entries: &[(&str, &str)]) -> VersionTimes {
        entries
            .iter()
            .map(|(v, t)| (v.to_string(), t.to_string()))
            .collect()
    }

    fn versions(history: &[VersionRecord]) -> Vec<&str> {
        history.iter().map(|r| r.version.as_str()).collect()
    }

    #[test]
    fn normalize_history_sorts_by_publish_time() {
        let history = normalize_history(
            "pkg",
            times(&[
                ("4.0.0", "2022-01-01T00:00:00.000Z"),
                ("5.0.0", "2021-06-01T00:00:00.000Z"),
                ("4.1.0", "2023-01-01T00:00:00.000Z"),
            ]),
        )
        .unwrap();

        assert_eq!(versions(&history), vec!["5.0.0", "4.0.0", "4.1.0"]);
    }

    #[test]
    fn normalize_history_drops_created_and_prereleases() {
        let history = normalize_history(
            "pkg",
            times(&[
                ("created", "2019-12-01T00:00:00.000Z"),
                ("1.0.0", "2020-01-01T00:00:00.000Z"),
                ("1.1.0-beta.1", "2020-03-01T00:00:00.000Z"),
                ("1.1.0", "2020-06-01T00:00:00.000Z"),
            ]),
        )
        .unwrap();

        assert_eq!(versions(&history), vec!["1.0.0", "1.1.0"]);
    }

    #[test]
    fn normalize_history_breaks_ties_by_version_order() {
        let history = normalize_history(
            "pkg",
            times(&[
                ("10.0.0", "2020-01-01T00:00:00.000Z"),
                ("9.0.0", "2020-01-01T00:00:00.000Z"),
                ("9.1.0", "2020-01-01T00:00:00.000Z"),
            ]),
        )
        .unwrap();

        assert_eq!(versions(&history), vec!["9.0.0", "9.1.0", "10.0.0"]);
    }

    #[test]
    fn normalize_history_rejects_unparseable_time() {
        let result = normalize_history("pkg", times(&[("1.0.0", "not a date")]));

        assert!(matches!(
            result,
            Err(RegistryError::InvalidTimestamp { ref version, .. }) if version == "1.0.0"
        ));
    }

    #[test]
    fn normalize_history_ignores_bad_time_on_dropped_entries() {
        let history = normalize_history(
            "pkg",
            times(&[
                ("created", "garbage"),
                ("2.0.0-rc.1", "garbage"),
                ("2.0.0", "2021-01-01T00:00:00Z"),
            ]),
        )
        .unwrap();

        assert_eq!(versions(&history), vec!["2.0.0"]);
    }

    #[rstest]
    #[case("2011-10-20T23:33:14.000Z", Utc.with_ymd_and_hms(2011, 10, 20, 23, 33, 14).unwrap())]
    #[case("2020-06-01T09:00:00+09:00", Utc.with_ymd_and_hms(2020, 6, 1, 0, 0, 0).unwrap())]
    #[case("2020-06-01T12:30:00", Utc.with_ymd_and_hms(2020, 6, 1, 12, 30, 0).unwrap())]
    #[case("2020-06-01", Utc.with_ymd_and_hms(2020, 6, 1, 0, 0, 0).unwrap())]
    fn parse_instant_accepts_supported_formats(
        #[case] value: &str,
        #[case] expected: DateTime<Utc>,
    ) {
        assert_eq!(parse_instant(value), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("yesterday")]
    #[case("2020-13-01")]
    fn parse_instant_rejects_invalid_values(#[case] value: &str) {
        assert_eq!(parse_instant(value), None);
    }

    #[tokio::test]
    async fn resolve_fetches_and_normalizes() {
        let mut registry = MockRegistry::new();
        registry
            .expect_fetch_version_times()
            .withf(|name| name == "lodash")
            .times(1)
            .returning(|_| {
                Ok(times(&[
                    ("created", "2012-04-23T16:37:11.912Z"),
                    ("4.17.21", "2021-02-20T15:42:16.891Z"),
                    ("4.17.20", "2020-08-13T16:53:54.152Z"),
                ]))
            });

        let resolver = VersionHistoryResolver::new(Arc::new(registry));
        let history = resolver.resolve("lodash").await.unwrap();

        assert_eq!(versions(&history), vec!["4.17.20", "4.17.21"]);
    }

    #[tokio::test]
    async fn resolve_propagates_registry_errors() {
        let mut registry = MockRegistry::new();
        registry
            .expect_fetch_version_times()
            .returning(|name| Err(RegistryError::NotFound(name.to_string())));

        let resolver = VersionHistoryResolver::new(Arc::new(registry));
        let result = resolver.resolve("missing").await;

        assert!(matches!(result, Err(RegistryError::NotFound(_))));
    }
}
