//! End-to-end estimates over package.json files

mod helper;

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use helper::{MockRegistry, write_manifest};
use manifest_date::app::{build_engine, estimate_manifest};
use manifest_date::error::EstimateError;
use manifest_date::estimate::{DependencyOutcome, GlobalEstimate, SkipReason, UpperBound};
use manifest_date::manifest::ManifestError;
use manifest_date::report::render_text;
use manifest_date::version::error::RegistryError;

fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn registry() -> MockRegistry {
    MockRegistry::new()
        .with_times(
            "alpha",
            vec![
                ("created", "2020-12-01T00:00:00.000Z"),
                ("1.0.0", "2021-01-01T00:00:00.000Z"),
                ("1.1.0", "2022-01-01T00:00:00.000Z"),
            ],
        )
        .with_times(
            "beta",
            vec![
                ("created", "2021-05-01T00:00:00.000Z"),
                ("2.0.0", "2021-06-01T00:00:00.000Z"),
                ("2.1.0-rc.1", "2022-06-01T00:00:00.000Z"),
                ("2.1.0", "2023-01-01T00:00:00.000Z"),
            ],
        )
        .with_times(
            "gamma",
            vec![
                ("3.0.0", "2022-01-01T00:00:00.000Z"),
                ("3.1.0", "2022-06-01T00:00:00.000Z"),
            ],
        )
        .with_times(
            "delta",
            vec![
                ("1.0.0", "2020-01-01T00:00:00.000Z"),
                ("4.0.0", "2023-01-01T00:00:00.000Z"),
            ],
        )
}

#[tokio::test]
async fn two_dependencies_intersect_their_windows() {
    let registry = Arc::new(registry());
    let engine = build_engine(registry.clone());
    let (_dir, path) = write_manifest(
        r#"{
  "name": "my-app",
  "dependencies": { "alpha": "^1.0.0" },
  "devDependencies": { "beta": "~2.0.0" }
}"#,
    );

    let report = estimate_manifest(&path, &engine).await.unwrap();

    assert_eq!(
        report.estimate,
        GlobalEstimate {
            earliest: date(2021, 6, 1),
            latest: UpperBound::At(date(2022, 1, 1)),
        }
    );
    assert_eq!(registry.requests(), vec!["alpha", "beta"]);
}

#[tokio::test]
async fn stale_upper_bound_is_discarded() {
    let engine = build_engine(Arc::new(registry()));
    let (_dir, path) = write_manifest(
        r#"{
  "dependencies": { "gamma": "3.0.0", "delta": "4.0.0" }
}"#,
    );

    let report = estimate_manifest(&path, &engine).await.unwrap();

    assert_eq!(
        report.estimate,
        GlobalEstimate {
            earliest: date(2023, 1, 1),
            latest: UpperBound::Unbounded,
        }
    );
}

#[tokio::test]
async fn skipped_and_unmatched_dependencies_do_not_constrain() {
    let registry = Arc::new(registry());
    let engine = build_engine(registry.clone());
    let (_dir, path) = write_manifest(
        r#"{
  "dependencies": {
    "alpha": "latest",
    "beta": ">=2.0.0",
    "gamma": "^3.0.0"
  }
}"#,
    );

    let report = estimate_manifest(&path, &engine).await.unwrap();

    let outcomes: Vec<&DependencyOutcome> =
        report.dependencies.iter().map(|d| &d.outcome).collect();
    assert_eq!(
        outcomes[0],
        &DependencyOutcome::Skipped {
            reason: SkipReason::LatestTag
        }
    );
    assert_eq!(
        outcomes[1],
        &DependencyOutcome::NotFound {
            target: ">=2.0.0".to_string()
        }
    );
    assert!(matches!(outcomes[2], DependencyOutcome::Matched(_)));
    assert_eq!(
        report.estimate,
        GlobalEstimate {
            earliest: date(2022, 1, 1),
            latest: UpperBound::At(date(2022, 6, 1)),
        }
    );
    // "latest" never reaches the registry
    assert_eq!(registry.requests(), vec!["beta", "gamma"]);
}

#[tokio::test]
async fn manifest_without_dependencies_yields_unknown_range() {
    let registry = Arc::new(registry());
    let engine = build_engine(registry.clone());
    let (_dir, path) = write_manifest(r#"{ "name": "empty" }"#);

    let report = estimate_manifest(&path, &engine).await.unwrap();

    assert!(report.dependencies.is_empty());
    assert!(report.estimate.is_unknown());
    assert!(registry.requests().is_empty());
    assert!(render_text(&report).starts_with("No dependencies found"));
}

#[tokio::test]
async fn unknown_package_aborts_the_run() {
    let registry = Arc::new(registry());
    let engine = build_engine(registry.clone());
    let (_dir, path) = write_manifest(
        r#"{
  "dependencies": { "alpha": "1.0.0", "missing": "1.0.0", "beta": "2.0.0" }
}"#,
    );

    let result = estimate_manifest(&path, &engine).await;

    assert!(matches!(
        result,
        Err(EstimateError::Registry(RegistryError::NotFound(ref name))) if name == "missing"
    ));
    assert_eq!(registry.requests(), vec!["alpha", "missing"]);
}

#[tokio::test]
async fn invalid_manifest_is_rejected_before_lookups() {
    let registry = Arc::new(registry());
    let engine = build_engine(registry.clone());
    let (_dir, path) = write_manifest("{ \"dependencies\": ");

    let result = estimate_manifest(&path, &engine).await;

    assert!(matches!(
        result,
        Err(EstimateError::Manifest(ManifestError::InvalidJson { .. }))
    ));
    assert!(registry.requests().is_empty());
}
