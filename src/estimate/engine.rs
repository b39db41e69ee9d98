//! Range inference over all dependencies of a manifest

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, info};

use crate::estimate::declared::DeclaredVersion;
use crate::estimate::reduce::{GlobalEstimate, fold_windows};
use crate::estimate::window::{DependencyWindow, derive_window};
use crate::version::error::RegistryError;
use crate::version::history::VersionHistoryResolver;

/// What happened to one dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum DependencyOutcome {
    /// The declared version was found and yielded a window
    Matched(DependencyWindow),
    /// The dependency carries no date information
    Skipped { reason: SkipReason },
    /// The target version does not exist in the release history
    NotFound { target: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SkipReason {
    /// Declared as `latest`
    LatestTag,
}

/// Outcome for a single manifest entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyReport {
    pub name: String,
    pub declared: String,
    pub outcome: DependencyOutcome,
}

/// Final estimate plus per-dependency outcomes in manifest order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateReport {
    pub dependencies: Vec<DependencyReport>,
    pub estimate: GlobalEstimate,
}

impl EstimateReport {
    /// Windows of the matched dependencies, in manifest order
    pub fn windows(&self) -> impl Iterator<Item = &DependencyWindow> {
        self.dependencies.iter().filter_map(|d| match &d.outcome {
            DependencyOutcome::Matched(window) => Some(window),
            _ => None,
        })
    }
}

/// Computes the manifest date estimate from release histories
#[derive(Clone)]
pub struct RangeInferenceEngine {
    resolver: VersionHistoryResolver,
}

impl RangeInferenceEngine {
    pub fn new(resolver: VersionHistoryResolver) -> Self {
        Self { resolver }
    }

    /// Resolve every dependency in order, then intersect the windows
    ///
    /// Lookups run one at a time. A registry failure aborts the whole
    /// computation; unmatched and `latest` dependencies are recorded and skipped.
    pub async fn compute_estimate(
        &self,
        dependencies: &IndexMap<String, String>,
    ) -> Result<EstimateReport, RegistryError> {
        let mut reports = Vec::with_capacity(dependencies.len());

        for (name, declared) in dependencies {
            let outcome = self.resolve_dependency(name, declared).await?;
            reports.push(DependencyReport {
                name: name.clone(),
                declared: declared.clone(),
                outcome,
            });
        }

        let mut report = EstimateReport {
            dependencies: reports,
            estimate: GlobalEstimate::unknown(),
        };
        let windows: Vec<DependencyWindow> = report.windows().cloned().collect();
        report.estimate = fold_windows(&windows);

        info!(
            "Estimated from {} of {} dependencies: {} .. {:?}",
            windows.len(),
            dependencies.len(),
            report.estimate.earliest,
            report.estimate.latest
        );

        Ok(report)
    }

    async fn resolve_dependency(
        &self,
        name: &str,
        declared: &str,
    ) -> Result<DependencyOutcome, RegistryError> {
        let declared = DeclaredVersion::parse(declared);
        let Some(target) = declared.target() else {
            debug!("Skipping {}: declared as latest", name);
            return Ok(DependencyOutcome::Skipped {
                reason: SkipReason::LatestTag,
            });
        };

        let history = self.resolver.resolve(name).await?;

        match derive_window(name, target, &history) {
            Some(window) => {
                debug!(
                    "{} {} valid from {} to {:?}",
                    name, window.version, window.start, window.end
                );
                Ok(DependencyOutcome::Matched(window))
            }
            None => {
                debug!("{}: no release matches {}", name, target);
                Ok(DependencyOutcome::NotFound {
                    target: target.to_string(),
                })
            }
        }
    }
}
